//! Diagnostics and error reporting for Cherry
//!
//! Lexical and syntax rules fail with small `Copy` error codes ([`LexError`], [`ParseError`]). The convenience
//! entrypoints turn the first failure into a [`CompileError`], which carries a human-readable message, a source
//! position, and optional notes and hints, and renders through `miette`.
//!
//! ## Examples
//! ```rust
//! use cherry_syntax::parser;
//!
//! let source = "using std.;";
//! let error = parser::parse(source).unwrap_err();
//! assert_eq!(error.code, "expected_identifier");
//! assert!(error.render("main.cherry", source).contains("expected an identifier"));
//! ```

use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, Report};
use thiserror::Error;

use crate::lexer::{LexError, LexState, Token};
use crate::parser::ParseError;

/// A front-end error with location information
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub kind: ErrorKind,
    /// Stable machine-readable error name, e.g. `invalid_octal`.
    pub code: &'static str,
    /// 0-based line of the offending token.
    pub line: u64,
    /// 0-based column of the offending token.
    pub column: u64,
    /// Byte offset of the offending token.
    pub offset: usize,
    /// Byte length of the offending token (`0` at end of source).
    pub len: usize,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

impl CompileError {
    /// Build a lexical diagnostic for a token that failed to lex at the cursor of `state`.
    pub fn lexical(error: LexError, state: &LexState<'_>) -> Self {
        let len = state.curr_char().map_or(0, char::len_utf8);
        let diagnostic = Self {
            message: error.to_string(),
            kind: ErrorKind::Lexical,
            code: error.code(),
            line: state.line(),
            column: state.column(),
            offset: state.index(),
            len,
            notes: Vec::new(),
            hints: Vec::new(),
        };
        match lexical_hint(error) {
            Some(hint) => diagnostic.with_hint(hint),
            None => diagnostic,
        }
    }

    /// Build a syntax diagnostic for `error`, reported at `token` within `source`.
    pub fn syntax(error: ParseError, token: &Token<'_>, source: &str) -> Self {
        let found = if token.is_eos() {
            "end of source".to_string()
        } else {
            format!("'{}'", token.lexeme)
        };
        let diagnostic = Self {
            message: format!("{error}, found {found}"),
            kind: ErrorKind::Syntax,
            code: error.code(),
            line: token.line,
            column: token.column,
            offset: byte_offset(source, token.line, token.column),
            len: token.lexeme.len(),
            notes: Vec::new(),
            hints: Vec::new(),
        };
        match error {
            ParseError::Lexical(inner) => match lexical_hint(inner) {
                Some(hint) => diagnostic.with_hint(hint),
                None => diagnostic,
            },
            ParseError::ExpectedTerminator => diagnostic.with_hint("statements end with ';'"),
            _ => diagnostic,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Render this error as a report over `source`, labelled with `name` (usually a file path).
    pub fn render(&self, name: &str, source: &str) -> String {
        let report = Report::new(self.clone()).with_source_code(NamedSource::new(name, source.to_string()));
        format!("{report:?}")
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let lines: Vec<String> = self
            .notes
            .iter()
            .map(|note| format!("note: {note}"))
            .chain(self.hints.iter().cloned())
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(Box::new(lines.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some("here".to_string()), (self.offset, self.len));
        Some(Box::new(std::iter::once(label)))
    }
}

fn lexical_hint(error: LexError) -> Option<&'static str> {
    match error {
        LexError::InvalidBinary => Some("binary literals need at least one 0 or 1 after '0b'"),
        LexError::InvalidOctal => Some("octal literals need at least one digit 0-7 after the leading '0'"),
        LexError::InvalidHexadecimal => Some("hexadecimal literals need at least one hex digit after '0x'"),
        LexError::InvalidUnicode => Some("unicode escapes take one to four hex digits, e.g. '\\u1F'"),
        LexError::InvalidRawString => Some("single-line strings must close before the end of the line"),
        LexError::InvalidMlString => Some("multiline strings close with \"\"\""),
        _ => None,
    }
}

/// Byte offset of a 0-based line/column (in characters) position.
fn byte_offset(source: &str, line: u64, column: u64) -> usize {
    let mut current_line = 0;
    let mut current_column = 0;
    for (index, ch) in source.char_indices() {
        if current_line == line && current_column == column {
            return index;
        }
        if ch == '\n' {
            current_line += 1;
            current_column = 0;
        } else {
            current_column += 1;
        }
    }
    source.len()
}
