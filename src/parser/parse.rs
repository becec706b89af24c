//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the [`ParseError`] type and the
//! program entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with one method per grammar
//! rule, split by area:
//! - This module: Parser state, depth guard, and the Program rule
//! - `declarations`: the FunctionDeclaration rule
//! - `statements`: the Statement rule
//! - `expressions`: the Expression, Term and Factor rules
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks.
//! Every rule takes `&mut self` and moves the shared [`Cursor`] past exactly
//! the tokens it consumes. A rule that fails returns the error immediately;
//! there is no recovery and the first error is the only one reported.

use crate::parser::ast::*;
use crate::parser::config::ParserConfig;
use crate::parser::cursor::Cursor;
use crate::parser::lexer::Token;
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A rule needed another token but the sequence was exhausted
    UnexpectedEndOfInput { expected: String },

    /// The current token is not what the active rule requires
    UnexpectedToken { expected: String, found: Token },

    /// Parentheses or unary operators nested deeper than the configured cap
    NestingTooDeep {
        limit: usize,
        location: SourceLocation,
    },
}

impl ParseError {
    pub(crate) fn end_of_input(expected: &str) -> Self {
        ParseError::UnexpectedEndOfInput {
            expected: expected.to_string(),
        }
    }

    pub(crate) fn unexpected_token(expected: &str, found: &Token) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: found.clone(),
        }
    }

    /// Description of what the failing rule was looking for
    pub fn expected(&self) -> Option<&str> {
        match self {
            ParseError::UnexpectedEndOfInput { expected }
            | ParseError::UnexpectedToken { expected, .. } => Some(expected.as_str()),
            ParseError::NestingTooDeep { .. } => None,
        }
    }

    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            ParseError::UnexpectedEndOfInput { .. } => None,
            ParseError::UnexpectedToken { found, .. } => Some(found.location),
            ParseError::NestingTooDeep { location, .. } => Some(*location),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEndOfInput { expected } => {
                write!(f, "Parse error: unexpected end of input, expected {}", expected)
            }
            ParseError::UnexpectedToken { expected, found } => write!(
                f,
                "Parse error at line {}, column {}: expected {}, found {}",
                found.location.line, found.location.column, expected, found
            ),
            ParseError::NestingTooDeep { limit, location } => write!(
                f,
                "Parse error at line {}, column {}: expression nested deeper than {} levels",
                location.line, location.column, limit
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser over a borrowed token sequence.
///
/// A parser is created per parse: its cursor starts at the first token and
/// is never rewound.
pub struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) cursor: Cursor<'a>,
    pub(crate) config: ParserConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: &'a [Token], config: ParserConfig) -> Self {
        Self {
            tokens,
            cursor: Cursor::new(tokens),
            config,
            depth: 0,
        }
    }

    /// Parse the whole token sequence: `Program → FunctionDeclaration`
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::end_of_input("a function declaration"));
        }

        let function = self.parse_function_declaration()?;

        if self.config.reject_trailing_tokens {
            if let Some(token) = self.cursor.peek() {
                return Err(ParseError::unexpected_token(
                    "end of input after the function body",
                    token,
                ));
            }
        }

        Ok(Program { function })
    }

    /// Index of the next unconsumed token
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    // ===== Helper methods =====

    /// Run `rule` one nesting level deeper, failing once the configured cap is reached.
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if let Some(limit) = self.config.max_depth {
            if self.depth >= limit {
                return Err(ParseError::NestingTooDeep {
                    limit,
                    location: self.cursor.location(),
                });
            }
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}

/// Parse `tokens` with the default configuration.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::{Lexer, TokenKind};

    fn lex(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().unwrap()
    }

    #[test]
    fn test_parse_simple_function() {
        let tokens = lex("int main() { return 0; }");
        let mut parser = Parser::new(&tokens);
        let program = parser.parse_program().unwrap();

        assert_eq!(program.function.name, "main");
        assert!(matches!(
            program.return_expr(),
            Expr::IntLiteral { text, .. } if text == "0"
        ));
        assert_eq!(parser.position(), tokens.len());
    }

    #[test]
    fn test_empty_input() {
        let err = parse(&[]).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { .. }));
        assert_eq!(
            err.to_string(),
            "Parse error: unexpected end of input, expected a function declaration"
        );
    }

    #[test]
    fn test_trailing_tokens_ignored_by_default() {
        let tokens = lex("int main() { return 0; } int");
        let mut parser = Parser::new(&tokens);
        assert!(parser.parse_program().is_ok());
        assert_eq!(parser.position(), tokens.len() - 1);
    }

    #[test]
    fn test_trailing_tokens_rejected_when_configured() {
        let tokens = lex("int main() { return 0; } int");
        let config = ParserConfig::default().with_trailing_tokens_rejected();
        let err = Parser::with_config(&tokens, config)
            .parse_program()
            .unwrap_err();

        match err {
            ParseError::UnexpectedToken { found, .. } => assert_eq!(found.kind, TokenKind::Int),
            other => panic!("Expected UnexpectedToken, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display_includes_location() {
        let tokens = lex("int main() {\n  return 0 }");
        let err = parse(&tokens).unwrap_err();
        assert_eq!(err.location(), Some(SourceLocation::new(2, 12)));
        assert_eq!(
            err.to_string(),
            "Parse error at line 2, column 12: expected ';' after the return expression, found '}'"
        );
    }

    #[test]
    fn test_depth_guard_restores_depth() {
        let tokens = lex("int main() { return ((1)); }");
        let mut parser = Parser::new(&tokens);
        parser.parse_program().unwrap();
        assert_eq!(parser.depth, 0);
    }
}
