//! Identifiers and reserved words.

use cherry_core::lang::leaves;

use super::errors::LexResult;
use super::rules::LexicalRule;
use super::state::LexState;
use super::strings::RAW_OPENER;
use super::tokens::Leaf;

/// Reads an ASCII word and resolves it against the keyword registry.
///
/// ## Notes
/// - A word starts with a letter or `_` and continues with letters, digits, or `_`.
/// - The raw string opener `r"""` is left to the string rule even though it starts with a letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordRule;

impl LexicalRule for KeywordRule {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn litmus(&self, source: &str) -> bool {
        source.chars().next().is_some_and(is_word_start) && !source.starts_with(RAW_OPENER)
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> LexResult<'src> {
        state.start_token();
        state.eat_while(is_word_continue);
        let kind = leaves::from_keyword(state.lexeme()).unwrap_or(Leaf::Identifier);
        Ok(state.extract_token(kind))
    }
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
