//! Numeric literal rules: binary, octal, decimal and hexadecimal.
//!
//! ## Notes
//! - Prefixed literals (`0b`, `0` + octal digit, `0x`) need at least one digit after the prefix.
//! - Integral literals are always [`Leaf::LvSigned`]; a trailing letter such as the `u8` in `10u8` is left for the next rule.
//! - A decimal only becomes fractional when the `.` is followed by a digit; `12.` lexes as `12` and leaves the dot.

use super::errors::{LexError, LexResult};
use super::rules::LexicalRule;
use super::state::LexState;
use super::tokens::Leaf;

fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_hexadecimal_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Shared body of the prefixed rules.
fn prefixed_integer<'src>(
    state: &mut LexState<'src>,
    prefix: &str,
    is_digit: fn(char) -> bool,
    error: LexError,
) -> LexResult<'src> {
    state.start_token();
    for expected in prefix.chars() {
        if !state.eat(expected) {
            return Err(error);
        }
    }
    if state.eat_while(is_digit) == 0 {
        return Err(error);
    }
    Ok(state.extract_token(Leaf::LvSigned))
}

/// `0b` followed by binary digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryRule;

impl LexicalRule for BinaryRule {
    fn name(&self) -> &'static str {
        "binary"
    }

    fn litmus(&self, source: &str) -> bool {
        source.starts_with("0b")
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> LexResult<'src> {
        prefixed_integer(state, "0b", is_binary_digit, LexError::InvalidBinary)
    }
}

/// `0` followed by octal digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct OctalRule;

impl LexicalRule for OctalRule {
    fn name(&self) -> &'static str {
        "octal"
    }

    fn litmus(&self, source: &str) -> bool {
        let mut chars = source.chars();
        chars.next() == Some('0') && chars.next().is_some_and(is_octal_digit)
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> LexResult<'src> {
        prefixed_integer(state, "0", is_octal_digit, LexError::InvalidOctal)
    }
}

/// Plain base-10 integers and fractional decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalRule;

impl LexicalRule for DecimalRule {
    fn name(&self) -> &'static str {
        "decimal"
    }

    /// A leading `0` is only accepted alone or when the next character cannot start another base.
    fn litmus(&self, source: &str) -> bool {
        let mut chars = source.chars();
        match (chars.next(), chars.next()) {
            (Some('0'), Some(next)) => !(next == 'b' || next == 'x' || is_decimal_digit(next)),
            (Some(first), _) => is_decimal_digit(first),
            (None, _) => false,
        }
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> LexResult<'src> {
        state.start_token();
        state.eat_while(is_decimal_digit);

        if state.curr_char() == Some('.') && state.next_char().is_some_and(is_decimal_digit) {
            state.read_char();
            state.eat_while(is_decimal_digit);
            return Ok(state.extract_token(Leaf::LvDecimal));
        }

        Ok(state.extract_token(Leaf::LvSigned))
    }
}

/// `0x` followed by hexadecimal digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexadecimalRule;

impl LexicalRule for HexadecimalRule {
    fn name(&self) -> &'static str {
        "hexadecimal"
    }

    fn litmus(&self, source: &str) -> bool {
        source.starts_with("0x")
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> LexResult<'src> {
        prefixed_integer(state, "0x", is_hexadecimal_digit, LexError::InvalidHexadecimal)
    }
}
