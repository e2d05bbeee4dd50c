//! Syntax front-end for the Cherry language: lexer, grammar engine, parser, AST, diagnostics.
//!
//! Text flows one way: source → [`lexer::LexState`] → tokens pulled one at a time → [`parser::ParserState`] → AST.
//! The AST borrows every name from the source buffer.
//!
//! ## Notes
//! - This crate is "syntax-only": no name resolution, no type checking, no code generation.
//! - Vocabulary identity (leaves, keywords, primitive types) comes from `cherry_core::lang` registries.
//! - The [`grammar`] engine is a checking utility. It does not drive the parser at runtime.
//!
//! ## Examples
//! ```rust
//! use cherry_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("using std.io;").unwrap();
//! assert_eq!(tokens.len(), 6);
//!
//! let document = parser::parse("using std.io;").unwrap();
//! assert_eq!(document.to_string(), "using std.io;\n");
//! ```
//!
//! ## See also
//! - `cherry_core::lang` for the leaf and primitive registries.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
