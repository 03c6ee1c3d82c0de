//! Syntactic pattern recognition for test declarations and assertions.
//!
//! Pure predicates over tree-sitter nodes. None of these may panic on any
//! node shape; unexpected shapes answer `false`/`None`.

use tree_sitter::Node;

/// Base names that declare a test case
const TEST_NAMES: &[&str] = &["it", "test", "specify"];

/// Aliases that declare a test case and mark it skipped or focused
const TEST_ALIASES: &[&str] = &["xit", "xtest", "xspecify", "fit", "ftest"];

/// Aliases whose callee alone marks the test as skipped
const SKIP_ALIASES: &[&str] = &["xit", "xtest", "xspecify", "xdescribe", "xcontext"];

/// Dotted callee text of an expression: `it`, `it.skip`, `helpers.run`.
pub fn callee_text(node: Node, source: &[u8]) -> String {
    match node.kind() {
        "identifier" => node.utf8_text(source).unwrap_or("").to_string(),
        "member_expression" => {
            let obj = node
                .child_by_field_name("object")
                .map(|n| callee_text(n, source))
                .unwrap_or_default();
            let prop = node
                .child_by_field_name("property")
                .and_then(|n| n.utf8_text(source).ok())
                .unwrap_or_default();
            if obj.is_empty() {
                prop.to_string()
            } else {
                format!("{}.{}", obj, prop)
            }
        }
        _ => node.utf8_text(source).unwrap_or("").to_string(),
    }
}

/// True when `name` is a recognized test-declaration callee: `it`, `test`,
/// `specify`, their `.skip`/`.only` member forms, and the x/f aliases.
fn is_test_declaration_name(name: &str) -> bool {
    if TEST_NAMES.contains(&name) || TEST_ALIASES.contains(&name) {
        return true;
    }
    match name.split_once('.') {
        Some((base, modifier)) => {
            TEST_NAMES.contains(&base) && matches!(modifier, "skip" | "only")
        }
        None => false,
    }
}

/// True when `node` is a function literal passed as an argument to a
/// recognized test-declaration call.
pub fn is_test_body(node: Node, source: &[u8]) -> bool {
    if !matches!(
        node.kind(),
        "arrow_function" | "function_expression" | "function"
    ) {
        return false;
    }
    let Some(args) = node.parent() else {
        return false;
    };
    if args.kind() != "arguments" {
        return false;
    }
    let Some(call) = args.parent() else {
        return false;
    };
    if call.kind() != "call_expression" {
        return false;
    }
    let Some(callee) = call.child_by_field_name("function") else {
        return false;
    };
    is_test_declaration_name(&callee_text(callee, source))
}

/// The test-declaration call a test body function is an argument of.
pub fn test_declaration_call(body: Node) -> Option<Node> {
    let args = body.parent()?;
    args.parent().filter(|p| p.kind() == "call_expression")
}

/// Root identifier of a call/member chain: `expect` for
/// `expect(x).to.be.equal(y)`, `assert` for `assert.ok(x)`.
fn chain_root_name(node: Node, source: &[u8]) -> Option<String> {
    let mut current = node;
    loop {
        match current.kind() {
            "call_expression" => current = current.child_by_field_name("function")?,
            "member_expression" => current = current.child_by_field_name("object")?,
            "identifier" => {
                return current.utf8_text(source).ok().map(str::to_string);
            }
            _ => return None,
        }
    }
}

/// True when any member access in the chain reads the given property name.
fn chain_has_property(node: Node, source: &[u8], property: &str) -> bool {
    let mut current = node;
    loop {
        match current.kind() {
            "call_expression" => match current.child_by_field_name("function") {
                Some(f) => current = f,
                None => return false,
            },
            "member_expression" => {
                if let Some(prop) = current.child_by_field_name("property") {
                    if prop.utf8_text(source).unwrap_or("") == property {
                        return true;
                    }
                }
                match current.child_by_field_name("object") {
                    Some(o) => current = o,
                    None => return false,
                }
            }
            _ => return false,
        }
    }
}

/// True when `node` continues an enclosing call/member chain, i.e. it is the
/// object of a member access or the callee of a call.
fn is_inner_chain_link(node: Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    match parent.kind() {
        "member_expression" => parent
            .child_by_field_name("object")
            .map(|o| o.id() == node.id())
            .unwrap_or(false),
        "call_expression" => parent
            .child_by_field_name("function")
            .map(|f| f.id() == node.id())
            .unwrap_or(false),
        _ => false,
    }
}

/// True when `node` is the outermost expression of a recognized
/// assertion-library chain: `expect(...)` / `assert...` chains, or a chain
/// reading `.should` (chai should style).
///
/// Inner links of the same chain answer false, so each assertion is
/// recognized exactly once per walk.
pub fn is_assertion_expression(node: Node, source: &[u8]) -> bool {
    if !matches!(node.kind(), "call_expression" | "member_expression") {
        return false;
    }
    if is_inner_chain_link(node) {
        return false;
    }
    match chain_root_name(node, source).as_deref() {
        Some("expect") | Some("assert") => true,
        _ => chain_has_property(node, source, "should"),
    }
}

/// Walk the ancestor chain looking for a syntactic skip marker: a `.skip`
/// member callee (`it.skip`, `describe.skip`) or an x-prefixed alias
/// (`xit`, `xdescribe`, ...).
pub fn detect_skip_marker(node: Node, source: &[u8]) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
        if n.kind() == "call_expression" {
            if let Some(callee) = n.child_by_field_name("function") {
                match callee.kind() {
                    "member_expression" => {
                        let prop = callee
                            .child_by_field_name("property")
                            .and_then(|p| p.utf8_text(source).ok())
                            .unwrap_or("");
                        if prop == "skip" {
                            return true;
                        }
                    }
                    "identifier" => {
                        let name = callee.utf8_text(source).unwrap_or("");
                        if SKIP_ALIASES.contains(&name) {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
        }
        current = n.parent();
    }
    false
}

/// The call expression at statement level enclosing `node`: walks up to the
/// nearest `expression_statement` and returns its expression if it is a call.
pub fn enclosing_statement_call(node: Node) -> Option<Node> {
    let mut current = node.parent();
    while let Some(n) = current {
        if n.kind() == "expression_statement" {
            return n.named_child(0).filter(|e| e.kind() == "call_expression");
        }
        current = n.parent();
    }
    None
}

/// Dotted name of the function a call expression invokes; `None` for
/// non-call shapes.
pub fn calling_context_name(call: Node, source: &[u8]) -> Option<String> {
    if call.kind() != "call_expression" {
        return None;
    }
    let callee = call.child_by_field_name("function")?;
    let name = callee_text(callee, source);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// True when a function literal declares at least one parameter. Covers both
/// `(done) => {}` and the bare-identifier arrow form `done => {}`.
pub fn has_parameters(node: Node) -> bool {
    if let Some(params) = node.child_by_field_name("parameters") {
        return params.named_child_count() > 0;
    }
    node.child_by_field_name("parameter").is_some()
}
