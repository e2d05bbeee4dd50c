//! Lexical error codes.
//!
//! Lexical errors are never recovered inside the lexer: a rule returns one of these and the analyzer hands it to
//! the caller unchanged.

use thiserror::Error;

use super::tokens::Token;

/// Result of a single tokenize call.
pub type LexResult<'src> = Result<Token<'src>, LexError>;

/// Reasons a lexical rule (or the analyzer) can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LexError {
    /// Source remains but no rule's litmus claims it.
    #[error("no lexical rule matches the input")]
    NotMyToken,
    #[error("invalid binary number")]
    InvalidBinary,
    #[error("invalid octal number")]
    InvalidOctal,
    #[error("invalid hexadecimal number")]
    InvalidHexadecimal,
    #[error("invalid unicode character")]
    InvalidUnicode,
    #[error("invalid character literal")]
    InvalidCharacter,
    #[error("invalid string literal")]
    InvalidRawString,
    #[error("invalid multiline string literal")]
    InvalidMlString,
    /// Catch-all for rules that cannot describe their failure more precisely.
    #[error("lexical failure")]
    Failure,
    /// The analyzer cannot make progress (a rule produced a token without consuming input).
    #[error("unrecoverable lexical state")]
    Unrecoverable,
}

impl LexError {
    /// Stable machine-readable name of this error.
    pub fn code(self) -> &'static str {
        match self {
            LexError::NotMyToken => "not_my_token",
            LexError::InvalidBinary => "invalid_binary",
            LexError::InvalidOctal => "invalid_octal",
            LexError::InvalidHexadecimal => "invalid_hexadecimal",
            LexError::InvalidUnicode => "invalid_unicode",
            LexError::InvalidCharacter => "invalid_character",
            LexError::InvalidRawString => "invalid_raw_string",
            LexError::InvalidMlString => "invalid_ml_string",
            LexError::Failure => "failure",
            LexError::Unrecoverable => "unrecoverable",
        }
    }
}
