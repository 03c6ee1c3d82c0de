//! Depth-first tree traversal with enter/exit dispatch.
//!
//! Node kinds the rule cares about are mapped once into a tagged variant so
//! handlers match on an enum instead of raw grammar kind strings.

use tree_sitter::Node;

/// Syntax node kinds relevant to the rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `function () {}` literal
    FunctionExpression,
    /// `() => {}` literal
    ArrowFunction,
    /// `f(...)`
    CallExpression,
    /// `a.b`
    MemberExpression,
    /// Anything else
    Other,
}

impl NodeKind {
    pub fn of(node: &Node) -> Self {
        match node.kind() {
            "function_expression" | "function" => NodeKind::FunctionExpression,
            "arrow_function" => NodeKind::ArrowFunction,
            "call_expression" => NodeKind::CallExpression,
            "member_expression" => NodeKind::MemberExpression,
            _ => NodeKind::Other,
        }
    }

    /// True for either function-literal form
    pub fn is_function_literal(self) -> bool {
        matches!(self, NodeKind::FunctionExpression | NodeKind::ArrowFunction)
    }
}

/// Visitor driven by [`walk`]: `enter` fires before a node's children,
/// `exit` after all of them.
pub trait Visitor {
    fn enter(&mut self, kind: NodeKind, node: Node);
    fn exit(&mut self, kind: NodeKind, node: Node);
}

/// Walk the tree rooted at `node` depth-first, dispatching enter/exit events.
pub fn walk(node: Node, visitor: &mut impl Visitor) {
    let kind = NodeKind::of(&node);
    visitor.enter(kind, node);

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        walk(child, visitor);
    }

    visitor.exit(kind, node);
}
