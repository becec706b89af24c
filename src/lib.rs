//! # Introduction
//!
//! retc parses a deliberately tiny subset of C, a single `int` function that
//! returns an arithmetic expression, into an abstract syntax tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`] turns source text into [`parser::lexer::Token`]s.
//! 2. [`parser::parse::Parser`] runs the recursive descent rules
//!    (Program → Function → Statement → Expression → Term → Factor) over the
//!    token slice and returns an owned [`parser::ast::Program`].
//! 3. [`parser::printer`] renders the tree for inspection.
//!
//! Parsing stops at the first error; no partial tree is ever returned.
//!
//! ## Example
//!
//! ```
//! let program = retc::parse_source("int main() { return 2 * (3 + 4); }", Default::default())
//!     .unwrap();
//! assert_eq!(program.function.name, "main");
//! assert_eq!(program.return_expr().to_string(), "(2 * (3 + 4))");
//! ```

pub mod error;
pub mod parser;

pub use error::Error;
pub use parser::ast::{Expr, NodeKind, NodeRef, Program};
pub use parser::config::{Dialect, ParserConfig};
pub use parser::lexer::{Lexer, Token, TokenKind};
pub use parser::parse::{parse, ParseError, Parser};

/// Lex and parse `source` in one step.
pub fn parse_source(source: &str, config: ParserConfig) -> Result<Program, Error> {
    let tokens = Lexer::new(source).tokenize()?;
    let program = Parser::with_config(&tokens, config).parse_program()?;
    Ok(program)
}
