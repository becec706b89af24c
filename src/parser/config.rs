//! Parser configuration
//!
//! [`ParserConfig`] selects the operator-loop [`Dialect`], the nesting depth
//! cap, and whether tokens after the function are rejected. The defaults
//! follow the documented grammar with no trailing-token check.

/// Default cap on simultaneously active Expression/Factor frames
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Behavior of the Term and Expression operator loops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// `Term → Factor {("*" | "/") Factor}`, `Expression → Term {("+" | "-") Term}`,
    /// both left-associative.
    #[default]
    Standard,
    /// Tree shapes of the older front end: the right operand of `*` and `/`
    /// is a whole Term (right grouping) and the additive loop continues on
    /// `+` or `*`, never on `-`.
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub dialect: Dialect,
    /// `None` disables the cap; recursion is then bounded only by the stack.
    pub max_depth: Option<usize>,
    pub reject_trailing_tokens: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            dialect: Dialect::Standard,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            reject_trailing_tokens: false,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        ParserConfig::default()
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_trailing_tokens_rejected(mut self) -> Self {
        self.reject_trailing_tokens = true;
        self
    }
}
