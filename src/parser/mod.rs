//! Parser for the return-expression subset of C
//!
//! This module transforms C source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`cursor`]: Forward-only read position shared by every grammar rule
//! - [`parse`]: Parser state, errors, and the program entry point
//! - [`config`]: Dialect and limits
//! - [`ast`]: AST node definitions
//! - [`printer`]: Indented tree rendering
//!
//! # Supported Subset
//!
//! Exactly one function, `int name() { return expr; }`, where `expr` is built
//! from integer literals, unary `-` `!` `~`, binary `+ - * /` and parentheses.
//! No variables, no control flow, no calls, no types besides `int`.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one method per grammar rule.
//! No external parser generator dependencies.

pub mod ast;
pub mod config;
pub mod cursor;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod printer;
mod statements;
