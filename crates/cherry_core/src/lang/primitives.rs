//! Primitive (built-in scalar) types.
//!
//! A primitive is spelled by one of 14 type keywords. The parser turns a primitive keyword in path position into a
//! primitive segment instead of a named, possibly generic, one.
//!
//! ## Examples
//! ```rust
//! use cherry_core::lang::leaves::Leaf;
//! use cherry_core::lang::primitives::{self, Primitive};
//!
//! assert_eq!(primitives::from_leaf(Leaf::KwInt32), Some(Primitive::Int32));
//! assert_eq!(Primitive::Int32.as_str(), "int32");
//! ```

use std::fmt;

use super::leaves::{self, Leaf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Primitive {
    Bool,
    Char,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Single,
    Double,
    String,
    Void,
}

/// Every primitive paired with the keyword leaf that spells it.
pub const PRIMITIVES: &[(Primitive, Leaf)] = &[
    (Primitive::Bool, Leaf::KwBool),
    (Primitive::Char, Leaf::KwChar),
    (Primitive::Int8, Leaf::KwInt8),
    (Primitive::Int16, Leaf::KwInt16),
    (Primitive::Int32, Leaf::KwInt32),
    (Primitive::Int64, Leaf::KwInt64),
    (Primitive::Uint8, Leaf::KwUint8),
    (Primitive::Uint16, Leaf::KwUint16),
    (Primitive::Uint32, Leaf::KwUint32),
    (Primitive::Uint64, Leaf::KwUint64),
    (Primitive::Single, Leaf::KwSingle),
    (Primitive::Double, Leaf::KwDouble),
    (Primitive::String, Leaf::KwString),
    (Primitive::Void, Leaf::KwVoid),
];

impl Primitive {
    /// Keyword leaf that spells this primitive.
    pub fn leaf(self) -> Leaf {
        PRIMITIVES[self as usize].1
    }

    /// Source spelling, e.g. `uint16`.
    pub fn as_str(self) -> &'static str {
        leaves::info(self.leaf()).spelling.unwrap_or_default()
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a keyword leaf to the primitive it names.
pub fn from_leaf(leaf: Leaf) -> Option<Primitive> {
    PRIMITIVES.iter().find(|(_, l)| *l == leaf).map(|(p, _)| *p)
}
