//! The lexical rule contract.
//!
//! A rule pairs a cheap, non-consuming [`LexicalRule::litmus`] predicate with a [`LexicalRule::tokenize`]
//! production. The analyzer tries rules in priority order and dispatches to the first one whose litmus accepts the
//! remaining source; there is no backtracking across rules.

use super::character::CharacterRule;
use super::comment::CommentRule;
use super::errors::LexResult;
use super::keyword::KeywordRule;
use super::numbers::{BinaryRule, DecimalRule, HexadecimalRule, OctalRule};
use super::operators::OperatorRule;
use super::state::LexState;
use super::strings::StringRule;

/// One tokenization rule.
///
/// ## Notes
/// - `litmus` must be pure: calling it twice on the same input yields the same answer.
/// - `tokenize` is only called after `litmus` accepted the remaining source. It must consume at least one character
///   and leave the cursor on the first character it did not consume.
pub trait LexicalRule {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Return `true` if this rule claims the start of `source`.
    fn litmus(&self, source: &str) -> bool;

    /// Consume one token from `state`.
    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> LexResult<'src>;
}

/// The nine built-in rules in priority order.
pub fn default_rules() -> Vec<Box<dyn LexicalRule>> {
    vec![
        Box::new(CommentRule) as Box<dyn LexicalRule>,
        Box::new(KeywordRule),
        Box::new(BinaryRule),
        Box::new(OctalRule),
        Box::new(DecimalRule),
        Box::new(HexadecimalRule),
        Box::new(CharacterRule),
        Box::new(StringRule),
        Box::new(OperatorRule),
    ]
}
