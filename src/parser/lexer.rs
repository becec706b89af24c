//! Lexer (tokenizer) for the return-expression subset
//!
//! Converts raw source text into the flat [`Token`] sequence consumed by the
//! parser. `#` preprocessor lines are skipped rather than parsed. No
//! end-of-file sentinel is emitted: the parser treats the end of the slice as
//! end of input.

use super::ast::SourceLocation;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Token kinds of the subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    IntLiteral,

    // Identifiers
    Ident,

    // Keywords
    Int,
    Return,

    // Punctuation
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;

    // Operators
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /
    Bang,  // !
    Tilde, // ~
}

impl TokenKind {
    /// Source text for kinds whose spelling never varies.
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::IntLiteral | TokenKind::Ident => return None,
            TokenKind::Int => "int",
            TokenKind::Return => "return",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Bang => "!",
            TokenKind::Tilde => "~",
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fixed_text() {
            Some(text) => write!(f, "'{}'", text),
            None if *self == TokenKind::IntLiteral => write!(f, "integer literal"),
            None => write!(f, "identifier"),
        }
    }
}

/// A lexed token: kind, source text and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// Token of a fixed-spelling kind at the default location.
    ///
    /// For literals and identifiers the text is empty; use [`Token::literal`]
    /// and [`Token::ident`] for those.
    pub fn symbol(kind: TokenKind) -> Self {
        Token::new(
            kind,
            kind.fixed_text().unwrap_or_default(),
            SourceLocation::default(),
        )
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Token::new(TokenKind::IntLiteral, text, SourceLocation::default())
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Token::new(TokenKind::Ident, name, SourceLocation::default())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::IntLiteral => write!(f, "int literal {}", self.text),
            TokenKind::Ident => write!(f, "identifier '{}'", self.text),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        let mut table = FxHashMap::default();
        table.insert("int", TokenKind::Int);
        table.insert("return", TokenKind::Return);
        table
    })
}

/// Lexer for the subset's source text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            if self.is_at_end() {
                break;
            }

            if self.peek() == Some('#') {
                self.skip_preprocessor_directive();
                continue;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of file".to_string(),
            location: loc,
        })?;

        let kind = match ch {
            '0'..='9' => return Ok(self.number_literal(ch, loc)),
            'a'..='z' | 'A'..='Z' | '_' => return Ok(self.identifier_or_keyword(ch, loc)),
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '!' => TokenKind::Bang,
            '~' => TokenKind::Tilde,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            _ => {
                return Err(LexError {
                    message: format!("Unexpected character: '{}'", ch),
                    location: loc,
                });
            }
        };

        Ok(Token::new(kind, ch.to_string(), loc))
    }

    /// Decimal integer literal; the text is kept as written.
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Token {
        let mut text = String::from(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::IntLiteral, text, loc)
    }

    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::from(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = keywords()
            .get(ident.as_str())
            .copied()
            .unwrap_or(TokenKind::Ident);
        Token::new(kind, ident, loc)
    }

    /// Skip whitespace and comments
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') => {
                    if self.peek_ahead(1) == Some('/') {
                        self.skip_line_comment();
                    } else if self.peek_ahead(1) == Some('*') {
                        self.skip_block_comment()?;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.advance() {
            if ch == '\n' {
                break;
            }
        }
    }

    /// Skip multi-line comment (/* ... */)
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_loc = self.current_location();
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                return Ok(());
            }
            self.advance();
        }

        Err(LexError {
            message: "Unterminated block comment".to_string(),
            location: start_loc,
        })
    }

    /// Skip preprocessor directive (#include, etc.)
    fn skip_preprocessor_directive(&mut self) {
        self.skip_line_comment();
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("int main() { return 0; }");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens.len(), 9);
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].text, "main");
        assert_eq!(tokens[2].kind, TokenKind::LParen);
        assert_eq!(tokens[3].kind, TokenKind::RParen);
        assert_eq!(tokens[4].kind, TokenKind::LBrace);
        assert_eq!(tokens[5].kind, TokenKind::Return);
        assert_eq!(tokens[6].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[6].text, "0");
        assert_eq!(tokens[7].kind, TokenKind::Semicolon);
        assert_eq!(tokens[8].kind, TokenKind::RBrace);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("+ - * / ! ~"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Bang,
                TokenKind::Tilde,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens = Lexer::new("integer returned").tokenize().unwrap();
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Ident));
        assert_eq!(tokens[0].text, "integer");
    }

    #[test]
    fn test_literal_text_is_preserved() {
        let tokens = Lexer::new("007").tokenize().unwrap();
        assert_eq!(tokens[0].text, "007");
    }

    #[test]
    fn test_comments() {
        let source = "int // comment\nmain /* block\ncomment */ ( )";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::Int,
                TokenKind::Ident,
                TokenKind::LParen,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_preprocessor_skip() {
        assert_eq!(
            kinds("#include <stdio.h>\nint"),
            vec![TokenKind::Int]
        );
    }

    #[test]
    fn test_locations() {
        let tokens = Lexer::new("int\n  main").tokenize().unwrap();
        assert_eq!(tokens[0].location, SourceLocation::new(1, 1));
        assert_eq!(tokens[1].location, SourceLocation::new(2, 3));
    }

    #[test]
    fn test_empty_source_has_no_tokens() {
        assert!(Lexer::new("  // nothing\n").tokenize().unwrap().is_empty());
    }

    #[test]
    fn test_unexpected_character() {
        let err = Lexer::new("int x = 1;").tokenize().unwrap_err();
        assert_eq!(err.location, SourceLocation::new(1, 7));
        assert!(err.message.contains('='));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = Lexer::new("int /* oops").tokenize().unwrap_err();
        assert_eq!(err.message, "Unterminated block comment");
        assert_eq!(err.location, SourceLocation::new(1, 5));
    }
}
