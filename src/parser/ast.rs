// AST (Abstract Syntax Tree) definitions for the return-expression subset

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        SourceLocation::new(1, 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,    // -x
    Not,    // !x
    BitNot, // ~x
}

impl UnOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Neg => "-",
            UnOp::Not => "!",
            UnOp::BitNot => "~",
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

/// Expression nodes. Each variant holds exactly the children its arity allows.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLiteral {
        text: String,
        location: SourceLocation,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<Expr>,
        location: SourceLocation,
    },
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    pub fn int(text: impl Into<String>, location: SourceLocation) -> Self {
        Expr::IntLiteral {
            text: text.into(),
            location,
        }
    }

    pub fn unary(op: UnOp, operand: Expr, location: SourceLocation) -> Self {
        Expr::UnaryOp {
            op,
            operand: Box::new(operand),
            location,
        }
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr, location: SourceLocation) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            location,
        }
    }

    /// Get the source location of this node
    pub fn location(&self) -> &SourceLocation {
        match self {
            Expr::IntLiteral { location, .. } => location,
            Expr::UnaryOp { location, .. } => location,
            Expr::BinaryOp { location, .. } => location,
        }
    }
}

/// Fully parenthesized infix form, e.g. `((1 - 2) - 3)`
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::IntLiteral { text, .. } => write!(f, "{}", text),
            Expr::UnaryOp { op, operand, .. } => write!(f, "{}{}", op.symbol(), operand),
            Expr::BinaryOp {
                op, left, right, ..
            } => write!(f, "({} {} {})", left, op.symbol(), right),
        }
    }
}

/// Statements. The subset has a single statement form.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Return {
        expr: Expr,
        location: SourceLocation,
    },
}

impl Statement {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Statement::Return { location, .. } => location,
        }
    }
}

/// `int name() { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub body: Statement,
    pub location: SourceLocation,
}

/// Tree root: exactly one function declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub function: FunctionDeclaration,
}

/// Node kinds of the generic kind/value/children view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    FunctionDeclaration,
    Statement,
    UnaryOp,
    BinaryOp,
    IntegerLiteral,
}

impl NodeKind {
    /// Number of children every node of this kind has in a well-formed tree.
    pub fn arity(self) -> usize {
        match self {
            NodeKind::IntegerLiteral => 0,
            NodeKind::BinaryOp => 2,
            NodeKind::Program
            | NodeKind::FunctionDeclaration
            | NodeKind::Statement
            | NodeKind::UnaryOp => 1,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Program => "Program",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::Statement => "Statement",
            NodeKind::UnaryOp => "UnaryOp",
            NodeKind::BinaryOp => "BinaryOp",
            NodeKind::IntegerLiteral => "IntegerLiteral",
        };
        f.write_str(name)
    }
}

/// Borrowed, uniform view over any node of the tree.
///
/// Consumers that only care about the shape of the tree (printers, tree
/// walkers, structural checks) can use [`NodeRef::kind`], [`NodeRef::value`]
/// and [`NodeRef::children`] instead of matching on each node type.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    Function(&'a FunctionDeclaration),
    Statement(&'a Statement),
    Expr(&'a Expr),
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Program(_) => NodeKind::Program,
            NodeRef::Function(_) => NodeKind::FunctionDeclaration,
            NodeRef::Statement(_) => NodeKind::Statement,
            NodeRef::Expr(Expr::IntLiteral { .. }) => NodeKind::IntegerLiteral,
            NodeRef::Expr(Expr::UnaryOp { .. }) => NodeKind::UnaryOp,
            NodeRef::Expr(Expr::BinaryOp { .. }) => NodeKind::BinaryOp,
        }
    }

    /// Operator symbol, literal text or function name. Empty for the program root.
    pub fn value(&self) -> &'a str {
        match *self {
            NodeRef::Program(_) => "",
            NodeRef::Function(function) => function.name.as_str(),
            NodeRef::Statement(Statement::Return { .. }) => "return",
            NodeRef::Expr(Expr::IntLiteral { text, .. }) => text.as_str(),
            NodeRef::Expr(Expr::UnaryOp { op, .. }) => op.symbol(),
            NodeRef::Expr(Expr::BinaryOp { op, .. }) => op.symbol(),
        }
    }

    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match *self {
            NodeRef::Program(program) => vec![NodeRef::Function(&program.function)],
            NodeRef::Function(function) => vec![NodeRef::Statement(&function.body)],
            NodeRef::Statement(Statement::Return { expr, .. }) => vec![NodeRef::Expr(expr)],
            NodeRef::Expr(Expr::IntLiteral { .. }) => Vec::new(),
            NodeRef::Expr(Expr::UnaryOp { operand, .. }) => vec![NodeRef::Expr(operand)],
            NodeRef::Expr(Expr::BinaryOp { left, right, .. }) => {
                vec![NodeRef::Expr(left), NodeRef::Expr(right)]
            }
        }
    }
}

impl<'a> From<&'a Program> for NodeRef<'a> {
    fn from(program: &'a Program) -> Self {
        NodeRef::Program(program)
    }
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self {
        NodeRef::Expr(expr)
    }
}

impl Program {
    pub fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Program(self)
    }

    /// The expression returned by the program's single function.
    pub fn return_expr(&self) -> &Expr {
        match &self.function.body {
            Statement::Return { expr, .. } => expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> SourceLocation {
        SourceLocation::default()
    }

    fn sample_program() -> Program {
        let expr = Expr::binary(
            BinOp::Add,
            Expr::int("1", loc()),
            Expr::unary(UnOp::Neg, Expr::int("2", loc()), loc()),
            loc(),
        );
        Program {
            function: FunctionDeclaration {
                name: "main".to_string(),
                body: Statement::Return {
                    expr,
                    location: loc(),
                },
                location: loc(),
            },
        }
    }

    #[test]
    fn test_node_view_values() {
        let program = sample_program();
        let root = program.as_node();
        assert_eq!(root.kind(), NodeKind::Program);
        assert_eq!(root.value(), "");

        let function = root.children()[0];
        assert_eq!(function.kind(), NodeKind::FunctionDeclaration);
        assert_eq!(function.value(), "main");

        let statement = function.children()[0];
        assert_eq!(statement.kind(), NodeKind::Statement);
        assert_eq!(statement.value(), "return");

        let binary = statement.children()[0];
        assert_eq!(binary.kind(), NodeKind::BinaryOp);
        assert_eq!(binary.value(), "+");

        let operands = binary.children();
        assert_eq!(operands[0].value(), "1");
        assert_eq!(operands[1].kind(), NodeKind::UnaryOp);
        assert_eq!(operands[1].children()[0].value(), "2");
    }

    #[test]
    fn test_children_match_arity() {
        fn check(node: NodeRef<'_>) {
            let children = node.children();
            assert_eq!(children.len(), node.kind().arity(), "{}", node.kind());
            children.into_iter().for_each(check);
        }
        check(sample_program().as_node());
    }

    #[test]
    fn test_expr_display_parenthesizes_binary_ops() {
        let program = sample_program();
        assert_eq!(program.return_expr().to_string(), "(1 + -2)");
    }
}
