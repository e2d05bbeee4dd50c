//! Grammar symbols.
//!
//! Terminals and non-terminals share one `i16` space: leaves take the lower half (their [`Leaf::id`]), roots take
//! the upper half starting just above [`LEAF_UPPER_LIMIT`]. The two sentinels ε and `$` sit below zero and behave
//! like terminals.

use std::fmt;

use cherry_core::lang::leaves::Leaf;

/// Every value below this is a terminal.
pub const LEAF_UPPER_LIMIT: i16 = i16::MAX / 2;

/// A terminal or non-terminal of a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(i16);

impl Symbol {
    /// The empty sequence.
    pub const EPSILON: Symbol = Symbol(-1);
    /// End of input.
    pub const FINAL: Symbol = Symbol(-2);
    /// The default start symbol, the first root.
    pub const START: Symbol = Symbol::root(1);

    pub const fn new(value: i16) -> Self {
        Symbol(value)
    }

    pub const fn leaf(leaf: Leaf) -> Self {
        Symbol(leaf.id())
    }

    /// The `n`th non-terminal. Roots are numbered from 1.
    pub const fn root(n: i16) -> Self {
        Symbol(LEAF_UPPER_LIMIT + n)
    }

    pub const fn value(self) -> i16 {
        self.0
    }

    /// Return `true` for terminals, including ε and `$`.
    pub const fn is_leaf(self) -> bool {
        self.0 < LEAF_UPPER_LIMIT
    }

    pub const fn is_root(self) -> bool {
        !self.is_leaf()
    }

    /// The leaf this symbol stands for, if it is a registered one.
    pub fn as_leaf(self) -> Option<Leaf> {
        Leaf::from_id(self.0)
    }

    /// Index of a root symbol (`1` for [`Symbol::START`]).
    pub fn root_index(self) -> Option<i16> {
        self.is_root().then(|| self.0 - LEAF_UPPER_LIMIT)
    }
}

impl From<Leaf> for Symbol {
    fn from(leaf: Leaf) -> Self {
        Symbol::leaf(leaf)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Symbol::EPSILON {
            return f.write_str("ε");
        }
        if *self == Symbol::FINAL {
            return f.write_str("$");
        }
        match (self.as_leaf(), self.root_index()) {
            (Some(leaf), _) => f.write_str(leaf.name()),
            (None, Some(index)) => write!(f, "root({index})"),
            (None, None) => write!(f, "leaf({})", self.0),
        }
    }
}
