// Integration tests: source text through lexer, parser and printer

use retc::parser::ast::{Expr, Statement};
use retc::parser::printer;
use retc::{parse_source, Dialect, Error, ParseError, ParserConfig, TokenKind};
use std::fs;
use std::path::Path;

fn parse_demo(name: &str, config: ParserConfig) -> Result<retc::Program, Error> {
    let path = Path::new("demos").join(name);
    let source = fs::read_to_string(&path).expect("Failed to read demo file");
    parse_source(&source, config)
}

#[test]
fn test_return_literal() {
    let program = parse_demo("return_2.c", ParserConfig::default()).expect("Parsing failed");

    assert_eq!(program.function.name, "main");
    let Statement::Return { expr, .. } = &program.function.body;
    assert!(matches!(expr, Expr::IntLiteral { text, .. } if text == "2"));
}

#[test]
fn test_arithmetic_demo() {
    let program = parse_demo("arithmetic.c", ParserConfig::default()).expect("Parsing failed");
    assert_eq!(
        program.return_expr().to_string(),
        "(((1 + 2) * 3) - ((8 / 4) / 2))"
    );
}

#[test]
fn test_arithmetic_demo_legacy_dialect_stops_at_minus() {
    let config = ParserConfig::default().with_dialect(Dialect::Legacy);
    let err = parse_demo("arithmetic.c", config).unwrap_err();

    match err {
        Error::Parse(ParseError::UnexpectedToken { expected, found }) => {
            assert!(expected.contains("';'"));
            assert_eq!(found.kind, TokenKind::Minus);
            assert_eq!(found.location.line, 5);
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_unary_demo_prints_nested_chain() {
    let program = parse_demo("unary.c", ParserConfig::default()).expect("Parsing failed");
    let expected = "\
Program
  FunctionDeclaration(main)
    Statement(return)
      UnaryOp(-)
        UnaryOp(~)
          UnaryOp(!)
            UnaryOp(-)
              IntegerLiteral(5)
";
    assert_eq!(printer::render(&program), expected);
}

#[test]
fn test_missing_semicolon_demo() {
    let err = parse_demo("missing_semicolon.c", ParserConfig::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error at line 3, column 1: expected ';' after the return expression, found '}'"
    );
}

#[test]
fn test_lex_error_is_reported() {
    let err = parse_source("int main() { return 1 % 2; }", ParserConfig::default()).unwrap_err();
    match err {
        Error::Lex(lex) => {
            assert_eq!(lex.location.column, 23);
            assert!(lex.message.contains('%'));
        }
        other => panic!("Expected lex error, got {:?}", other),
    }
}

#[test]
fn test_empty_source() {
    let err = parse_source("/* nothing here */", ParserConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::UnexpectedEndOfInput { .. })
    ));
}

#[test]
fn test_strict_mode_rejects_second_function() {
    let source = "int main() { return 0; } int other() { return 1; }";
    assert!(parse_source(source, ParserConfig::default()).is_ok());

    let strict = ParserConfig::default().with_trailing_tokens_rejected();
    let err = parse_source(source, strict).unwrap_err();
    assert!(err.to_string().contains("end of input"));
}

#[test]
fn test_whitespace_and_comments_do_not_change_tree() {
    let compact = parse_source("int f(){return 1+2*3;}", ParserConfig::default()).unwrap();
    let spaced = parse_source(
        "int f ( ) {\n  // comment\n  return 1 + /* two */ 2 * 3 ;\n}\n",
        ParserConfig::default(),
    )
    .unwrap();
    assert_eq!(printer::render(&compact), printer::render(&spaced));
}
