#![forbid(unsafe_code)]
//! Cherry Programming Language front-end
//!
//! Cherry is a statically-typed, C-family language. This crate bundles its front-end: the lexical analyzer, the
//! grammar engine, and the recursive-descent parser for imports, paths, and type expressions.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. Lexical and syntax rules report
//!   every failure through their error codes; malformed input never panics.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//!
//! ```rust
//! let document = cherry::check("main.cherry", "using std.io;").unwrap();
//! assert_eq!(document.imports.len(), 1);
//!
//! let report = cherry::check("main.cherry", "using std.io").unwrap_err();
//! assert!(format!("{report:?}").contains("expected ';'"));
//! ```

pub mod logging;
pub mod version;

pub use cherry_core::lang;
pub use cherry_syntax::ast;
pub use cherry_syntax::config;
pub use cherry_syntax::diagnostics;
pub use cherry_syntax::grammar;
pub use cherry_syntax::lexer;
pub use cherry_syntax::parser;

pub use cherry_syntax::ast::{Document, Type};
pub use cherry_syntax::config::{LexerConfig, SyntaxConfig};
pub use cherry_syntax::diagnostics::CompileError;

use miette::{NamedSource, Report};

/// Parse `source` as a Cherry document, attaching `name` and the source text to any error report.
///
/// ## Errors
/// Returns a [`miette::Report`] that renders the first lexical or syntax error with a labelled source excerpt.
#[tracing::instrument(skip(source), fields(source_len = source.len()))]
pub fn check<'src>(name: &str, source: &'src str) -> Result<Document<'src>, Report> {
    parser::parse(source).map_err(|error| {
        tracing::debug!(code = error.code, line = error.line, column = error.column, "check failed");
        Report::new(error).with_source_code(NamedSource::new(name, source.to_string()))
    })
}
