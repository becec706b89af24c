//! Declaration parsing implementation
//!
//! The only declaration is the program's single function:
//!
//! ```text
//! function_def ::= "int" identifier "(" ")" "{" statement "}"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl<'a> Parser<'a> {
    /// Parse function definition: int name() { statement }
    pub(crate) fn parse_function_declaration(
        &mut self,
    ) -> Result<FunctionDeclaration, ParseError> {
        let return_type = self.cursor.expect(TokenKind::Int, "return type 'int'")?;
        let name = self.cursor.expect(TokenKind::Ident, "a function name")?;

        self.cursor
            .expect(TokenKind::LParen, "'(' after the function name")?;
        self.cursor
            .expect(TokenKind::RParen, "')' to close the parameter list")?;
        self.cursor
            .expect(TokenKind::LBrace, "'{' before the function body")?;

        let body = self.parse_statement()?;

        self.cursor
            .expect(TokenKind::RBrace, "'}' after the function body")?;

        Ok(FunctionDeclaration {
            name: name.text.clone(),
            body,
            location: return_type.location,
        })
    }
}
