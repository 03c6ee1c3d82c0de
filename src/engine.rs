//! The asserts-limit rule: counts assertions per test body and reports
//! tests that exceed the limit or contain none at all.

use crate::classify;
use crate::config::RuleOptions;
use crate::report::{DiagnosticSink, Reporter};
use crate::walk::{walk, NodeKind, Visitor};
use crate::{Diagnostic, Location};
use tree_sitter::{Node, Tree};

pub const MSG_TOO_MANY: &str = "Too many assertions ({{num}}). Maximum allowed is {{max}}.";
pub const MSG_NO_ASSERTIONS: &str = "Test without assertions is not allowed.";

/// The rule: one instance per configuration, reusable across trees.
pub struct AssertsLimitRule {
    options: RuleOptions,
}

impl AssertsLimitRule {
    pub fn new(options: RuleOptions) -> Self {
        Self { options }
    }

    /// Check one parsed tree and return the diagnostics found, in tree order.
    pub fn check(&self, tree: &Tree, source: &str) -> Vec<Diagnostic> {
        let mut sink = DiagnosticSink::new();
        {
            let mut engine = RuleEngine::new(&self.options, source.as_bytes(), &mut sink);
            walk(tree.root_node(), &mut engine);
        }
        sink.into_diagnostics()
    }
}

/// Per-test state, latched at test-body entry and discarded at exit.
/// One frame per active test body; nested test bodies stack.
struct TestFrame {
    /// Node id of the body function literal, matched at exit
    body_id: usize,
    /// Where diagnostics for this test anchor: the test-declaration call
    anchor: Location,
    assertion_count: usize,
    is_skipped: bool,
    is_exempted: bool,
    has_done_param: bool,
}

/// The stateful visitor the tree walk drives. Owns all walk state; nothing
/// is shared between walks or files.
struct RuleEngine<'a, R: Reporter> {
    options: &'a RuleOptions,
    source: &'a [u8],
    frames: Vec<TestFrame>,
    reporter: &'a mut R,
}

impl<'a, R: Reporter> RuleEngine<'a, R> {
    fn new(options: &'a RuleOptions, source: &'a [u8], reporter: &'a mut R) -> Self {
        Self {
            options,
            source,
            frames: Vec::new(),
            reporter,
        }
    }

    fn enter_test_body(&mut self, node: Node) {
        let anchor = classify::test_declaration_call(node)
            .map(Location::of_node)
            .unwrap_or_else(|| Location::of_node(node));

        let is_skipped =
            self.options.skip_skipped && classify::detect_skip_marker(node, self.source);

        let is_exempted = match self.options.exempt_callers {
            Some(ref callers) => classify::enclosing_statement_call(node)
                .and_then(|call| classify::calling_context_name(call, self.source))
                .map(|name| callers.contains(&name))
                .unwrap_or(false),
            None => false,
        };

        self.frames.push(TestFrame {
            body_id: node.id(),
            anchor,
            assertion_count: 0,
            is_skipped,
            is_exempted,
            has_done_param: classify::has_parameters(node),
        });
    }

    fn exit_test_body(&mut self) {
        let frame = match self.frames.pop() {
            Some(f) => f,
            None => return,
        };

        if frame.assertion_count > self.options.asserts_limit {
            self.reporter.report(
                frame.anchor.clone(),
                MSG_TOO_MANY,
                &[
                    ("num", frame.assertion_count.to_string()),
                    ("max", self.options.asserts_limit.to_string()),
                ],
            );
        }

        let done_exempt =
            self.options.ignore_zero_assertions_if_done_exists && frame.has_done_param;
        if frame.assertion_count == 0
            && !frame.is_exempted
            && !frame.is_skipped
            && !done_exempt
        {
            self.reporter.report(frame.anchor, MSG_NO_ASSERTIONS, &[]);
        }
    }
}

impl<R: Reporter> Visitor for RuleEngine<'_, R> {
    fn enter(&mut self, kind: NodeKind, node: Node) {
        if kind.is_function_literal() && classify::is_test_body(node, self.source) {
            self.enter_test_body(node);
            return;
        }

        if matches!(kind, NodeKind::CallExpression | NodeKind::MemberExpression) {
            if let Some(frame) = self.frames.last_mut() {
                if frame.is_skipped {
                    return;
                }
                if classify::is_assertion_expression(node, self.source) {
                    frame.assertion_count += 1;
                }
            }
        }
    }

    fn exit(&mut self, kind: NodeKind, node: Node) {
        if !kind.is_function_literal() {
            return;
        }
        let matches_active_frame = self
            .frames
            .last()
            .map(|f| f.body_id == node.id())
            .unwrap_or(false);
        if matches_active_frame {
            self.exit_test_body();
        }
    }
}
