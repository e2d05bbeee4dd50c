//! Provide the canonical language vocabulary shared by the Cherry lexer, parser, and grammar tooling.
//!
//! This crate is intentionally small and dependency-free. It answers "what is this token kind called, how is it
//! spelled, and what category does it belong to" without knowing anything about source text or syntax trees.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no syntax types.
//! - The numeric value of every [`lang::leaves::Leaf`] is stable and small so the grammar engine can pack leaves and
//!   non-terminals into a single 16-bit symbol space.

pub mod lang;
