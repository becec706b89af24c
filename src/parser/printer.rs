//! The `printer` module renders the AST as an indented tree, one node per line.
//!
//! ```text
//! Program
//!   FunctionDeclaration(main)
//!     Statement(return)
//!       IntegerLiteral(2)
//! ```

use crate::parser::ast::{NodeRef, Program};
use std::fmt::Write;

const INDENT: &str = "  ";

/// Renders the whole tree to a string
pub fn render(program: &Program) -> String {
    let mut out = String::new();
    render_node(&mut out, program.as_node(), 0);
    out
}

/// Prints the tree to stdout
pub fn print(program: &Program) {
    print!("{}", render(program));
}

fn render_node(out: &mut String, node: NodeRef<'_>, level: usize) {
    let indent = INDENT.repeat(level);
    let value = node.value();

    // Writing into a String cannot fail.
    let _ = if value.is_empty() {
        writeln!(out, "{}{}", indent, node.kind())
    } else {
        writeln!(out, "{}{}({})", indent, node.kind(), value)
    };

    for child in node.children() {
        render_node(out, child, level + 1);
    }
}
