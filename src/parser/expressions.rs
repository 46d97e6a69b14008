//! Expression parsing implementation
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr   := term ( (PLUS | MINUS) term )*
//! term   := factor ( (MUL | DIV) factor )*
//! factor := (PLUS | MINUS) factor
//!         | INT | FLOAT
//!         | LPAREN expr RPAREN
//! ```
//!
//! Precedence comes from call nesting: `expr` folds over `term`, which folds
//! over `factor`. Both folds go through [`Parser::parse_bin_op`], so every
//! binary operator is left-associative.

use crate::diagnostics::Error;
use crate::parser::ast::AstNode;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;
use tracing::trace;

const ADDITIVE: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];
const MULTIPLICATIVE: &[TokenKind] = &[TokenKind::Mul, TokenKind::Div];

impl Parser {
    /// Parse expression (top-level production)
    pub(crate) fn parse_expr(&mut self) -> Result<AstNode, Error> {
        self.parse_bin_op(Self::parse_term, ADDITIVE)
    }

    /// Parse multiplicative tier (* /)
    fn parse_term(&mut self) -> Result<AstNode, Error> {
        self.parse_bin_op(Self::parse_factor, MULTIPLICATIVE)
    }

    /// Parse unary prefix, literal, or parenthesized expression
    fn parse_factor(&mut self) -> Result<AstNode, Error> {
        let kind = self.peek().kind;
        match kind {
            TokenKind::Plus | TokenKind::Minus => {
                let op = self.advance();
                let operand = Box::new(self.parse_factor()?);
                Ok(AstNode::UnaryOp { op, operand })
            }
            TokenKind::Int(_) | TokenKind::Float(_) => {
                Ok(AstNode::Number(self.advance()))
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect_token(&TokenKind::RParen, "Expected ')'")?;
                Ok(expr)
            }
            TokenKind::Mul
            | TokenKind::Div
            | TokenKind::RParen
            | TokenKind::Eof => {
                let token = self.peek();
                Err(Error::invalid_syntax(
                    token.start.clone(),
                    token.end.clone(),
                    "Expected Int or Float",
                ))
            }
        }
    }

    /// Left fold of `operand (op operand)*` for any op in `ops`
    fn parse_bin_op(
        &mut self,
        operand: fn(&mut Self) -> Result<AstNode, Error>,
        ops: &[TokenKind],
    ) -> Result<AstNode, Error> {
        let mut left = operand(self)?;

        while self.peek().kind.is_one_of(ops) {
            let op = self.advance();
            let right = operand(self)?;
            trace!("fold {}", op);
            left = AstNode::BinOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }
}
