// retc: parse a return-expression C program and print its syntax tree

use std::fs;
use std::path::Path;

use retc::parser::config::{Dialect, ParserConfig};
use retc::parser::lexer::Lexer;
use retc::parser::parse::Parser;
use retc::parser::printer;

fn print_usage(program_name: &str) {
    eprintln!(
        "Usage: {} <file.c> [--legacy] [--strict] [--max-depth N | --no-depth-limit]",
        program_name
    );
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --legacy          Use the legacy operator grouping");
    eprintln!("  --strict          Reject tokens after the function body");
    eprintln!("  --max-depth N     Cap expression nesting at N levels");
    eprintln!("  --no-depth-limit  Disable the nesting cap");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {} demos/arithmetic.c", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("retc");

    let mut input_file = None;
    let mut config = ParserConfig::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--legacy" => config = config.with_dialect(Dialect::Legacy),
            "--strict" => config = config.with_trailing_tokens_rejected(),
            "--no-depth-limit" => config = config.with_max_depth(None),
            "--max-depth" => {
                let limit = rest.next().and_then(|n| n.parse::<usize>().ok());
                match limit {
                    Some(limit) => config = config.with_max_depth(Some(limit)),
                    None => {
                        eprintln!("Error: --max-depth expects a number");
                        std::process::exit(1);
                    }
                }
            }
            "-h" | "--help" => {
                print_usage(program_name);
                return Ok(());
            }
            other if other.starts_with("--") => {
                eprintln!("Error: Unknown option '{}'", other);
                print_usage(program_name);
                std::process::exit(1);
            }
            other => input_file = Some(other.to_string()),
        }
    }

    let Some(input_file) = input_file else {
        eprintln!("Error: No input file provided");
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    };

    if !Path::new(&input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        std::process::exit(1);
    }

    let source = fs::read_to_string(&input_file)?;

    eprintln!("Lexing {}...", input_file);
    let tokens = match Lexer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    eprintln!("Parsing {} tokens ({:?} dialect)...", tokens.len(), config.dialect);
    let mut parser = Parser::with_config(&tokens, config);
    let program = match parser.parse_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Parsed successfully. Function '{}' consumed {} of {} tokens.",
        program.function.name,
        parser.position(),
        tokens.len()
    );

    printer::print(&program);

    Ok(())
}
