//! Lexer for the Cherry programming language
//!
//! Handles tokenization including:
//! - Keywords and identifiers
//! - Numeric literals in four bases
//! - Character and string literals (single-line, multiline, raw, interpolated)
//! - Operators and delimiters
//! - `#` line comments
//!
//! Tokens are pulled one at a time through the [`Lexer`] trait; nothing is buffered. The [`lex`] convenience
//! collects a whole source buffer into a vector.
//!
//! ## Module Structure
//!
//! - `tokens` - Token record
//! - `state` - Position-tracking cursor ([`LexState`])
//! - `rules` - The [`LexicalRule`] contract and the default rule order
//! - `comment`, `keyword`, `numbers`, `character`, `strings`, `operators` - The nine built-in rules

mod character;
mod comment;
mod errors;
mod keyword;
mod numbers;
mod operators;
mod rules;
mod state;
mod strings;
pub mod tokens;

pub use character::CharacterRule;
pub use comment::CommentRule;
pub use errors::{LexError, LexResult};
pub use keyword::KeywordRule;
pub use numbers::{BinaryRule, DecimalRule, HexadecimalRule, OctalRule};
pub use operators::OperatorRule;
pub use rules::{LexicalRule, default_rules};
pub use state::LexState;
pub use strings::StringRule;
pub use tokens::{Leaf, Token};

use crate::config::LexerConfig;
use crate::diagnostics::CompileError;

// ============================================================================
// LEXER CONTRACT
// ============================================================================

/// Anything that can produce the next token from a [`LexState`].
///
/// ## Notes
/// - Implementations return a [`Leaf::Eos`] token once the source is exhausted, and keep returning it when asked
///   again.
/// - The parser is generic over this trait, so tests can feed it a scripted token stream (see [`Replay`]).
pub trait Lexer<'src> {
    fn tokenize(&mut self, state: &mut LexState<'src>) -> LexResult<'src>;
}

// ============================================================================
// LEXICAL ANALYZER
// ============================================================================

/// Orchestrates an ordered list of lexical rules.
///
/// Each call skips whitespace, asks every rule's litmus in priority order, and dispatches to the first rule that
/// claims the remaining source.
pub struct LexicalAnalyzer {
    rules: Vec<Box<dyn LexicalRule>>,
    config: LexerConfig,
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalAnalyzer {
    /// Create an analyzer with the nine built-in rules.
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Create an analyzer over a custom rule list, tried in the given order.
    pub fn with_rules(rules: Vec<Box<dyn LexicalRule>>) -> Self {
        Self {
            rules,
            config: LexerConfig::default(),
        }
    }

    /// Replace the analyzer configuration.
    pub fn with_config(mut self, config: LexerConfig) -> Self {
        self.config = config;
        self
    }

    fn dispatch<'src>(&self, state: &mut LexState<'src>) -> LexResult<'src> {
        let remaining = state.remaining_source();
        let Some(rule) = self.rules.iter().find(|rule| rule.litmus(remaining)) else {
            tracing::trace!(line = state.line(), column = state.column(), "no lexical rule matched");
            return Err(LexError::NotMyToken);
        };

        tracing::trace!(
            rule = rule.name(),
            line = state.line(),
            column = state.column(),
            "dispatching lexical rule"
        );
        let start = state.index();
        let token = rule.tokenize(state)?;
        if state.index() == start {
            return Err(LexError::Unrecoverable);
        }
        Ok(token)
    }
}

impl<'src> Lexer<'src> for LexicalAnalyzer {
    fn tokenize(&mut self, state: &mut LexState<'src>) -> LexResult<'src> {
        loop {
            state.eat_while(|c| c.is_ascii_whitespace());
            if state.end_of_source() {
                return Ok(state.eos_token());
            }

            state.start_token();
            let token = self.dispatch(state)?;
            if token.kind == Leaf::Comment && !self.config.emit_comments {
                continue;
            }
            return Ok(token);
        }
    }
}

// ============================================================================
// REPLAY
// ============================================================================

/// A [`Lexer`] that replays a prepared token list, then reports end of source.
///
/// ## Notes
/// - The [`LexState`] handed to it is only used to position the final [`Leaf::Eos`] token.
#[derive(Debug, Clone, Default)]
pub struct Replay<'tok> {
    tokens: Vec<Token<'tok>>,
    position: usize,
}

impl<'tok> Replay<'tok> {
    pub fn new(tokens: Vec<Token<'tok>>) -> Self {
        Self { tokens, position: 0 }
    }
}

impl<'src, 'tok: 'src> Lexer<'src> for Replay<'tok> {
    fn tokenize(&mut self, state: &mut LexState<'src>) -> LexResult<'src> {
        match self.tokens.get(self.position) {
            Some(token) => {
                self.position += 1;
                Ok(*token)
            }
            None => Ok(state.eos_token()),
        }
    }
}

// ============================================================================
// CONVENIENCE
// ============================================================================

/// Lex a whole source buffer with the default analyzer.
///
/// The returned vector always ends with the [`Leaf::Eos`] token.
///
/// ## Errors
/// Returns the first lexical error as a [`CompileError`] positioned where the failing token started.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, CompileError> {
    lex_with(source, LexerConfig::default())
}

/// Like [`lex`], with an explicit [`LexerConfig`].
pub fn lex_with(source: &str, config: LexerConfig) -> Result<Vec<Token<'_>>, CompileError> {
    let mut analyzer = LexicalAnalyzer::new().with_config(config);
    let mut state = LexState::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = analyzer
            .tokenize(&mut state)
            .map_err(|error| CompileError::lexical(error, &state.token_start()))?;
        tokens.push(token);
        if token.kind == Leaf::Eos {
            return Ok(tokens);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn kinds(source: &str) -> Vec<Leaf> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_source_is_eos() {
        let tokens = lex("").unwrap();
        assert_eq!(tokens, vec![Token::new("", Leaf::Eos, 0, 0)]);
    }

    #[test]
    fn test_whitespace_only_source_is_eos() {
        let tokens = lex(" \t\r\n  \x0c").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!((tokens[0].kind, tokens[0].line), (Leaf::Eos, 1));
    }

    #[test]
    fn test_eos_repeats() {
        let mut analyzer = LexicalAnalyzer::new();
        let mut state = LexState::new("x");
        assert_eq!(analyzer.tokenize(&mut state).unwrap().kind, Leaf::Identifier);
        assert_eq!(analyzer.tokenize(&mut state).unwrap().kind, Leaf::Eos);
        assert_eq!(analyzer.tokenize(&mut state).unwrap().kind, Leaf::Eos);
    }

    #[test]
    fn test_rule_priority() {
        assert_eq!(
            kinds("# c\nusing 0b1 017 0 0.5 0x1F 'a' \"s\" <<="),
            vec![
                Leaf::Comment,
                Leaf::KwUsing,
                Leaf::LvSigned,
                Leaf::LvSigned,
                Leaf::LvSigned,
                Leaf::LvDecimal,
                Leaf::LvSigned,
                Leaf::LvCharacter,
                Leaf::LvRawString,
                Leaf::OpBitlshEq,
                Leaf::Eos,
            ]
        );
    }

    #[test]
    fn test_bare_zero_is_decimal_through_analyzer() {
        let tokens = lex("0").unwrap();
        assert_eq!((tokens[0].kind, tokens[0].lexeme), (Leaf::LvSigned, "0"));
    }

    #[test]
    fn test_raw_string_is_reachable() {
        let tokens = lex("r\"\"\"raw {x}\"\"\" r").unwrap();
        assert_eq!(tokens[0].kind, Leaf::LvRawString);
        assert_eq!(tokens[0].lexeme, "r\"\"\"raw {x}\"\"\"");
        assert_eq!(tokens[1].kind, Leaf::Identifier);
    }

    #[test]
    fn test_unclaimed_input_is_not_my_token() {
        let mut analyzer = LexicalAnalyzer::new();
        for source in ["@", "08", "$x", "π"] {
            let mut state = LexState::new(source);
            assert_eq!(analyzer.tokenize(&mut state), Err(LexError::NotMyToken), "{source}");
        }
    }

    #[test]
    fn test_lex_reports_error_position() {
        let err = lex("var x\n  = 0b;").unwrap_err();
        assert_eq!(err.message, "invalid binary number");
        assert_eq!((err.line, err.column), (1, 4));
    }

    #[test]
    fn test_integer_literals_take_no_suffix() {
        let tokens = lex("10u8 0xffu 12u").unwrap();
        let pairs: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme)).collect();
        assert_eq!(
            pairs,
            vec![
                (Leaf::LvSigned, "10"),
                (Leaf::Identifier, "u8"),
                (Leaf::LvSigned, "0xff"),
                (Leaf::Identifier, "u"),
                (Leaf::LvSigned, "12"),
                (Leaf::Identifier, "u"),
                (Leaf::Eos, ""),
            ]
        );
    }

    #[test]
    fn test_error_position_skips_dropped_comments() {
        for emit_comments in [true, false] {
            let config = LexerConfig::new().with_emit_comments(emit_comments);
            let err = lex_with("# c\n  0b;", config).unwrap_err();
            assert_eq!(err.code, "invalid_binary");
            assert_eq!((err.line, err.column, err.offset), (1, 2, 6), "emit_comments = {emit_comments}");
        }
    }

    #[test]
    fn test_unclaimed_input_is_reported_where_it_starts() {
        let err = lex("a\n  `").unwrap_err();
        assert_eq!(err.code, "not_my_token");
        assert_eq!((err.line, err.column, err.offset), (1, 2, 4));
    }

    #[test]
    fn test_comments_can_be_skipped() {
        let tokens = lex_with("# doc\nx # trailing", LexerConfig::new().with_emit_comments(false)).unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![Leaf::Identifier, Leaf::Eos]);
    }

    #[test]
    fn test_default_rule_order() {
        let names: Vec<_> = default_rules().iter().map(|rule| rule.name()).collect();
        assert_eq!(
            names,
            vec![
                "comment",
                "keyword",
                "binary",
                "octal",
                "decimal",
                "hexadecimal",
                "character",
                "string",
                "operator"
            ]
        );
    }

    struct Refusing {
        calls: Rc<Cell<usize>>,
    }

    impl LexicalRule for Refusing {
        fn name(&self) -> &'static str {
            "refusing"
        }

        fn litmus(&self, _source: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            false
        }

        fn tokenize<'src>(&self, _state: &mut LexState<'src>) -> LexResult<'src> {
            unreachable!("litmus never passes")
        }
    }

    #[test]
    fn test_every_rule_is_consulted_once() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut analyzer = LexicalAnalyzer::with_rules(vec![
            Box::new(Refusing { calls: first.clone() }) as Box<dyn LexicalRule>,
            Box::new(Refusing { calls: second.clone() }),
        ]);
        let mut state = LexState::new("anything");

        assert_eq!(analyzer.tokenize(&mut state), Err(LexError::NotMyToken));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    struct Stalling;

    impl LexicalRule for Stalling {
        fn name(&self) -> &'static str {
            "stalling"
        }

        fn litmus(&self, _source: &str) -> bool {
            true
        }

        fn tokenize<'src>(&self, state: &mut LexState<'src>) -> LexResult<'src> {
            state.start_token();
            Ok(state.extract_token(Leaf::Unknown))
        }
    }

    #[test]
    fn test_rule_that_consumes_nothing_is_unrecoverable() {
        let mut analyzer = LexicalAnalyzer::with_rules(vec![Box::new(Stalling) as Box<dyn LexicalRule>]);
        let mut state = LexState::new("x");
        assert_eq!(analyzer.tokenize(&mut state), Err(LexError::Unrecoverable));
    }

    #[test]
    fn test_replay_then_eos() {
        let mut replay = Replay::new(vec![Token::new("std", Leaf::Identifier, 0, 6)]);
        let mut state = LexState::new("");
        assert_eq!(replay.tokenize(&mut state).unwrap().lexeme, "std");
        assert_eq!(replay.tokenize(&mut state).unwrap().kind, Leaf::Eos);
        assert_eq!(replay.tokenize(&mut state).unwrap().kind, Leaf::Eos);
    }
}
