//! String literals.
//!
//! Three forms are recognized:
//!
//! - `"..."`: single-line; must close before the end of the line.
//! - `"""..."""`: multiline; may span lines and closes on the first unescaped `"""`.
//! - `r"""..."""`: raw; contents are taken literally and no escapes are recognized.
//!
//! ## Notes
//! - An unescaped `{` in a single-line or multiline body marks the string as interpolated
//!   ([`Leaf::LvIntString`] / [`Leaf::LvMliString`]). Raw strings are never interpolated.
//! - A backslash escapes the character after it, so `\"` does not close a string and `\{` does not interpolate.

use super::errors::{LexError, LexResult};
use super::rules::LexicalRule;
use super::state::LexState;
use super::tokens::Leaf;

pub(crate) const RAW_OPENER: &str = "r\"\"\"";
const TRIPLE_QUOTE: &str = "\"\"\"";

#[derive(Debug, Clone, Copy, Default)]
pub struct StringRule;

impl LexicalRule for StringRule {
    fn name(&self) -> &'static str {
        "string"
    }

    fn litmus(&self, source: &str) -> bool {
        source.starts_with('"') || source.starts_with(RAW_OPENER)
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> LexResult<'src> {
        state.start_token();

        if state.eat('r') {
            skip_triple_quote(state);
            return raw(state);
        }
        if state.starts_with(TRIPLE_QUOTE) {
            skip_triple_quote(state);
            return multiline(state);
        }
        state.read_char();
        single_line(state)
    }
}

fn skip_triple_quote(state: &mut LexState<'_>) {
    for _ in 0..TRIPLE_QUOTE.len() {
        state.read_char();
    }
}

fn single_line<'src>(state: &mut LexState<'src>) -> LexResult<'src> {
    let mut kind = Leaf::LvRawString;
    loop {
        match state.curr_char() {
            None | Some('\n') => return Err(LexError::InvalidRawString),
            Some('"') => {
                state.read_char();
                return Ok(state.extract_token(kind));
            }
            Some('\\') => {
                state.read_char();
                match state.read_char() {
                    None | Some('\n') => return Err(LexError::InvalidRawString),
                    Some(_) => {}
                }
            }
            Some(ch) => {
                if ch == '{' {
                    kind = Leaf::LvIntString;
                }
                state.read_char();
            }
        }
    }
}

fn multiline<'src>(state: &mut LexState<'src>) -> LexResult<'src> {
    let mut kind = Leaf::LvMlString;
    loop {
        if state.starts_with(TRIPLE_QUOTE) {
            skip_triple_quote(state);
            return Ok(state.extract_token(kind));
        }
        match state.read_char() {
            None => return Err(LexError::InvalidMlString),
            Some('\\') => {
                if state.read_char().is_none() {
                    return Err(LexError::InvalidMlString);
                }
            }
            Some('{') => kind = Leaf::LvMliString,
            Some(_) => {}
        }
    }
}

fn raw<'src>(state: &mut LexState<'src>) -> LexResult<'src> {
    loop {
        if state.starts_with(TRIPLE_QUOTE) {
            skip_triple_quote(state);
            return Ok(state.extract_token(Leaf::LvRawString));
        }
        if state.read_char().is_none() {
            return Err(LexError::InvalidRawString);
        }
    }
}
