//! Character literals: `'a'`, `'\n'`, `'\u1F'`.

use super::errors::{LexError, LexResult};
use super::rules::LexicalRule;
use super::state::LexState;
use super::tokens::Leaf;

/// Longest accepted `\u` escape.
const MAX_UNICODE_DIGITS: usize = 4;

/// A single character, a backslash escape, or `\u` plus one to four hex digits, closed by `'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterRule;

impl LexicalRule for CharacterRule {
    fn name(&self) -> &'static str {
        "character"
    }

    fn litmus(&self, source: &str) -> bool {
        source.starts_with('\'')
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> LexResult<'src> {
        state.start_token();
        state.read_char();

        match state.read_char() {
            None | Some('\'') => return Err(LexError::InvalidCharacter),
            Some('\\') => match state.read_char() {
                None => return Err(LexError::InvalidCharacter),
                Some('u') => return unicode_escape(state),
                Some(_) => {}
            },
            Some(_) => {}
        }

        if !state.eat('\'') {
            return Err(LexError::InvalidCharacter);
        }
        Ok(state.extract_token(Leaf::LvCharacter))
    }
}

/// Finish a `\u` escape once the `u` has been consumed.
fn unicode_escape<'src>(state: &mut LexState<'src>) -> LexResult<'src> {
    let mut digits = 0;
    while digits < MAX_UNICODE_DIGITS && state.curr_char().is_some_and(|c| c.is_ascii_hexdigit()) {
        state.read_char();
        digits += 1;
    }

    if digits == 0 || !state.eat('\'') {
        return Err(LexError::InvalidUnicode);
    }
    Ok(state.extract_token(Leaf::LvCharacter))
}
