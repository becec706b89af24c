//! Statement parsing implementation
//!
//! The subset has a single statement form:
//!
//! ```text
//! statement ::= "return" expression ";"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl<'a> Parser<'a> {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let keyword = self.cursor.expect(TokenKind::Return, "return statement")?;
        let expr = self.parse_expression()?;
        self.cursor
            .expect(TokenKind::Semicolon, "';' after the return expression")?;

        Ok(Statement::Return {
            expr,
            location: keyword.location,
        })
    }
}
