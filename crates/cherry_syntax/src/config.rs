//! Configuration for the lexer and the syntax rules.
//!
//! Both configs are plain values with builder-style setters; nothing is read from the environment or from files.

/// Lexical analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    /// Whether comment tokens are handed to the caller (otherwise they are skipped like whitespace)
    pub emit_comments: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self { emit_comments: true }
    }
}

impl LexerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether comment tokens are emitted
    pub fn with_emit_comments(mut self, emit: bool) -> Self {
        self.emit_comments = emit;
        self
    }
}

/// Syntax rule configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxConfig {
    /// Whether the parser state drops comment tokens before syntax rules see them
    pub skip_comments: bool,
    /// Maximum nesting of types through generic arguments and function signatures
    pub max_depth: usize,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            skip_comments: true,
            max_depth: 64,
        }
    }
}

impl SyntaxConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether comment tokens are skipped
    pub fn with_skip_comments(mut self, skip: bool) -> Self {
        self.skip_comments = skip;
        self
    }

    /// Set the maximum type nesting depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
