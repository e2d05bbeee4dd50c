//! Cherry language vocabulary registries.
//!
//! Callers work with **stable IDs** ([`leaves::Leaf`], [`primitives::Primitive`]) and look up spellings and
//! metadata through const registry tables instead of matching on raw strings.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The lexer and parser enforce syntax; registries only provide spellings and metadata (diagnostics, grammar
//!   dumps, documentation).
//!
//! ## Examples
//! ```rust
//! use cherry_core::lang::leaves::{self, Leaf};
//!
//! assert_eq!(leaves::from_keyword("using"), Some(Leaf::KwUsing));
//! assert_eq!(leaves::as_str(Leaf::KwUsing), "kw_using");
//! ```

pub mod leaves;
pub mod primitives;
