//! Parser for the Cherry programming language
//!
//! Builds AST fragments from a token stream pulled one token at a time through a [`Lexer`]. Every construct is a
//! small [`SyntaxRule`]: a litmus over the current token's [`Leaf`], then a recursive-descent production.
//!
//! Rules report [`ParseError::NotMySyntax`] when their litmus fails and nothing was consumed, so a caller can try
//! alternative productions in sequence. Any other error means input was consumed and parsing cannot continue.
//!
//! ## Examples
//!
//! ```rust
//! use cherry_syntax::parser;
//!
//! let ty = parser::parse_type("std.map<string, int32>*").unwrap();
//! assert_eq!(ty.to_string(), "std.map<string, int32>*");
//!
//! let document = parser::parse("using std.io;").unwrap();
//! assert_eq!(document.imports[0].path.segments, vec!["std", "io"]);
//! ```

use std::path::{Path, PathBuf};

use cherry_core::lang::leaves;
use cherry_core::lang::primitives;
use thiserror::Error;

use crate::ast::*;
use crate::config::SyntaxConfig;
use crate::diagnostics::CompileError;
use crate::lexer::{LexError, LexState, Leaf, Lexer, LexicalAnalyzer, Token};

// NOTE: This module is split across multiple files using `include!` to keep every syntax rule in the same Rust
// module (sharing private helpers on `ParserState`) while avoiding a single large source file.

include!("parser/core.rs");
include!("parser/paths.rs");
include!("parser/types.rs");
include!("parser/import.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
