//! Error type for the source-to-tree pipeline
//!
//! [`Error`] wraps the two stages that can fail when starting from source
//! text: lexing ([`LexError`]) and parsing ([`ParseError`]).

use crate::parser::lexer::LexError;
use crate::parser::parse::ParseError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(err) => write!(f, "{}", err),
            Error::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(err) => Some(err),
            Error::Parse(err) => Some(err),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}
