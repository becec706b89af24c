//! Expression parsing implementation
//!
//! This module handles the three expression rules of the subset:
//!
//! ```text
//! Expression    ::= Term { ("+" | "-") Term }
//! Term          ::= Factor { ("*" | "/") Factor }
//! Factor        ::= "(" Expression ")" | UnaryOperator Factor | integer
//! UnaryOperator ::= "-" | "~" | "!"
//! ```
//!
//! Both operator loops fold left, so `1 - 2 - 3` parses as `(1 - 2) - 3`.
//! With [`Dialect::Legacy`] the loops reproduce the older front end instead:
//! the right operand of `*`/`/` is a whole Term and the additive loop
//! continues on `+` or `*`.
//!
//! Expression, Factor and the legacy right-hand Term run inside
//! [`Parser::nested`] so that deeply nested input hits the configured depth cap.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::config::Dialect;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl<'a> Parser<'a> {
    /// Parse expression: Term { ("+" | "-") Term }
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.nested(|parser| {
            let mut left = parser.parse_term()?;

            while let Some(op) = parser.additive_operator() {
                let location = parser.operator_location();
                let right = parser.parse_term()?;
                left = Expr::binary(op, left, right, location);
            }

            Ok(left)
        })
    }

    /// Parse term: Factor { ("*" | "/") Factor }
    pub(crate) fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.multiplicative_operator() {
            let location = self.operator_location();
            let right = match self.config.dialect {
                Dialect::Standard => self.parse_factor()?,
                Dialect::Legacy => self.nested(|parser| parser.parse_term())?,
            };
            left = Expr::binary(op, left, right, location);
        }

        Ok(left)
    }

    /// Parse factor: parenthesized expression, unary operator, or integer literal
    pub(crate) fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        self.nested(|parser| {
            let token = parser
                .cursor
                .peek()
                .ok_or_else(|| ParseError::end_of_input("an expression"))?;

            if token.kind == TokenKind::LParen {
                parser.cursor.advance();
                let expr = parser.parse_expression()?;
                parser.cursor.expect(
                    TokenKind::RParen,
                    "')' to close the parenthesized expression",
                )?;
                return Ok(expr);
            }

            if let Some(op) = unary_operator(token.kind) {
                parser.cursor.advance();
                let operand = parser.parse_factor()?;
                return Ok(Expr::unary(op, operand, token.location));
            }

            if token.kind == TokenKind::IntLiteral {
                parser.cursor.advance();
                return Ok(Expr::int(token.text.as_str(), token.location));
            }

            Err(ParseError::unexpected_token("an expression", token))
        })
    }

    /// Operator that continues the Expression loop, if the current token is one
    fn additive_operator(&self) -> Option<BinOp> {
        match (self.config.dialect, self.cursor.peek_kind()?) {
            (_, TokenKind::Plus) => Some(BinOp::Add),
            (Dialect::Standard, TokenKind::Minus) => Some(BinOp::Sub),
            (Dialect::Legacy, TokenKind::Star) => Some(BinOp::Mul),
            _ => None,
        }
    }

    fn multiplicative_operator(&self) -> Option<BinOp> {
        match self.cursor.peek_kind()? {
            TokenKind::Star => Some(BinOp::Mul),
            TokenKind::Slash => Some(BinOp::Div),
            _ => None,
        }
    }

    /// Consume the operator token the caller just matched and return its location
    fn operator_location(&mut self) -> SourceLocation {
        let location = self.cursor.location();
        self.cursor.advance();
        location
    }
}

fn unary_operator(kind: TokenKind) -> Option<UnOp> {
    match kind {
        TokenKind::Minus => Some(UnOp::Neg),
        TokenKind::Bang => Some(UnOp::Not),
        TokenKind::Tilde => Some(UnOp::BitNot),
        _ => None,
    }
}
