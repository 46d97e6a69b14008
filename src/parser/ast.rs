// AST (Abstract Syntax Tree) definitions for arithmetic expressions

use super::lexer::Token;
use super::position::Position;
use std::fmt;

/// AST node types
///
/// Operators keep their whole [`Token`] so a later pass can point a
/// diagnostic at the exact operator character.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Integer or float literal
    Number(Token),

    /// Prefix `+` or `-`
    UnaryOp { op: Token, operand: Box<AstNode> },

    /// `+`, `-`, `*` or `/`
    BinOp {
        left: Box<AstNode>,
        op: Token,
        right: Box<AstNode>,
    },
}

impl AstNode {
    /// Half-open span of source covered by this node.
    ///
    /// Grouping parentheses produce no node, so they are not included.
    pub fn span(&self) -> (&Position, &Position) {
        (self.start(), self.end())
    }

    fn start(&self) -> &Position {
        match self {
            AstNode::Number(token) => &token.start,
            AstNode::UnaryOp { op, .. } => &op.start,
            AstNode::BinOp { left, .. } => left.start(),
        }
    }

    fn end(&self) -> &Position {
        match self {
            AstNode::Number(token) => &token.end,
            AstNode::UnaryOp { operand, .. } => operand.end(),
            AstNode::BinOp { right, .. } => right.end(),
        }
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Number(token) => write!(f, "{}", token),
            AstNode::UnaryOp { op, operand } => write!(f, "({}, {})", op, operand),
            AstNode::BinOp { left, op, right } => {
                write!(f, "({}, {}, {})", left, op, right)
            }
        }
    }
}
