//! `#` line comments.

use super::errors::LexResult;
use super::rules::LexicalRule;
use super::state::LexState;
use super::tokens::Leaf;

/// Reads from `#` to the end of the line. The newline itself is left for the analyzer to skip.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentRule;

impl LexicalRule for CommentRule {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn litmus(&self, source: &str) -> bool {
        source.starts_with('#')
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> LexResult<'src> {
        state.start_token();
        state.eat_while(|c| c != '\n');
        Ok(state.extract_token(Leaf::Comment))
    }
}
