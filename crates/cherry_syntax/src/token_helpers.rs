//! Small helper APIs for working with [`Token`] kinds.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites in the syntax rules.

use crate::lexer::{Leaf, Token};

impl Token<'_> {
    /// Return `true` if this token is of kind `leaf`.
    pub fn is(&self, leaf: Leaf) -> bool {
        self.kind == leaf
    }

    /// Return `true` for a plain identifier.
    pub fn is_identifier(&self) -> bool {
        self.kind == Leaf::Identifier
    }

    /// Return `true` for one of the 14 primitive type keywords.
    pub fn is_primitive(&self) -> bool {
        self.kind.is_primitive()
    }

    /// Return `true` once the lexer has run out of source.
    pub fn is_eos(&self) -> bool {
        self.kind == Leaf::Eos
    }

    /// Return `true` for comment tokens.
    pub fn is_trivia(&self) -> bool {
        self.kind == Leaf::Comment
    }
}
