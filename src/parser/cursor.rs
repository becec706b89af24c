//! Read position into the token sequence
//!
//! A [`Cursor`] is created at position 0 for each parse and only ever moves
//! forward. Looking at a token ([`Cursor::peek`]) and consuming it
//! ([`Cursor::advance`]) are separate steps, so the rule that decides a token
//! belongs to it is the one that moves past it.

use crate::parser::ast::SourceLocation;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::ParseError;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Token at the current position, or `None` at end of input.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// Consume the current token. Does nothing at end of input.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Consume a token of `kind`, or fail describing `expected`.
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token, ParseError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.position += 1;
                Ok(token)
            }
            Some(token) => Err(ParseError::unexpected_token(expected, token)),
            None => Err(ParseError::end_of_input(expected)),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }

    /// Location of the current token, falling back to the last token at end of input.
    pub fn location(&self) -> SourceLocation {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|token| token.location)
            .unwrap_or_default()
    }
}
