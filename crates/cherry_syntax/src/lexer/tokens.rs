//! Token record produced by the lexer.
//!
//! A [`Token`] never owns text: its lexeme is a slice of the source buffer it was cut from, so tokens are `Copy` and
//! the buffer must outlive every token (and every AST node) derived from it.
//!
//! ## Notes
//! - Lines and columns are 0-based; a column counts characters since the last `\n`.
//! - Equality is structural over all four fields.

use std::fmt;

pub use cherry_core::lang::leaves::Leaf;

/// A lexeme tagged with its [`Leaf`] kind and starting position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub lexeme: &'src str,
    pub kind: Leaf,
    pub line: u64,
    pub column: u64,
}

impl<'src> Token<'src> {
    /// Construct a new token.
    pub const fn new(lexeme: &'src str, kind: Leaf, line: u64, column: u64) -> Self {
        Self {
            lexeme,
            kind,
            line,
            column,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' @{}:{}", self.kind, self.lexeme.escape_debug(), self.line, self.column)
    }
}
