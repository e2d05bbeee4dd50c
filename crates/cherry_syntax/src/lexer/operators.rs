//! Operators and delimiters.
//!
//! Tokenizing is a short cascade over the first character:
//!
//! 1. Delimiters and `?` are emitted directly.
//! 2. `+ - & | < > .` may double (`++`, `&&`, `<<`, `..`); `..` may then triple into `...`.
//! 3. Whatever was matched so far may take an `=` suffix (`+=`, `<<=`, `==`, `!=`).
//!
//! ## Notes
//! - This rule never fails. Punctuation that reaches a combination with no meaning (for example `.=`) lexes as
//!   [`Leaf::Unknown`] so the lexer itself never halts on punctuation.

use super::errors::LexResult;
use super::rules::LexicalRule;
use super::state::LexState;
use super::tokens::Leaf;

/// Every character that can start an operator or delimiter.
const OPERATOR_CHARS: &str = "+-*/%=.?~&|^<>!(){}[],;:";

#[derive(Debug, Clone, Copy, Default)]
pub struct OperatorRule;

impl LexicalRule for OperatorRule {
    fn name(&self) -> &'static str {
        "operator"
    }

    fn litmus(&self, source: &str) -> bool {
        source.chars().next().is_some_and(|c| OPERATOR_CHARS.contains(c))
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> LexResult<'src> {
        state.start_token();
        let kind = match state.read_char() {
            Some('?') => Leaf::OpTernary,
            Some('(') => Leaf::DcLparen,
            Some(')') => Leaf::DcRparen,
            Some('[') => Leaf::DcLbracket,
            Some(']') => Leaf::DcRbracket,
            Some('{') => Leaf::DcLbrace,
            Some('}') => Leaf::DcRbrace,
            Some(',') => Leaf::DcComma,
            Some(';') => Leaf::DcTerminator,
            Some(':') => Leaf::DcColon,

            Some('+') => doubled(state, '+', Leaf::OpAdd),
            Some('-') => doubled(state, '-', Leaf::OpSub),
            Some('&') => doubled(state, '&', Leaf::OpBitand),
            Some('|') => doubled(state, '|', Leaf::OpBitor),
            Some('<') => doubled(state, '<', Leaf::OpLogless),
            Some('>') => doubled(state, '>', Leaf::OpLogmore),
            Some('.') => doubled(state, '.', Leaf::OpAccess),

            Some('*') => assigned(state, Leaf::OpMul),
            Some('/') => assigned(state, Leaf::OpDiv),
            Some('%') => assigned(state, Leaf::OpMod),
            Some('=') => assigned(state, Leaf::OpAssign),
            Some('~') => assigned(state, Leaf::OpBitnot),
            Some('^') => assigned(state, Leaf::OpBitxor),
            Some('!') => assigned(state, Leaf::OpLognot),

            _ => Leaf::Unknown,
        };
        Ok(state.extract_token(kind))
    }
}

/// Probe for a repeated character, then for the `=` suffix.
fn doubled(state: &mut LexState<'_>, ch: char, single: Leaf) -> Leaf {
    if !state.eat(ch) {
        return assigned(state, single);
    }
    match single {
        Leaf::OpAdd => Leaf::OpInc,
        Leaf::OpSub => Leaf::OpDec,
        Leaf::OpAccess => {
            if state.eat('.') {
                Leaf::OpEllipsis
            } else {
                Leaf::OpCascade
            }
        }
        Leaf::OpBitand => assigned(state, Leaf::OpLogand),
        Leaf::OpBitor => assigned(state, Leaf::OpLogor),
        Leaf::OpLogless => assigned(state, Leaf::OpBitlsh),
        Leaf::OpLogmore => assigned(state, Leaf::OpBitrsh),
        _ => Leaf::Unknown,
    }
}

/// Probe for the `=` suffix on an already matched operator.
fn assigned(state: &mut LexState<'_>, base: Leaf) -> Leaf {
    if !state.eat('=') {
        return base;
    }
    match base {
        Leaf::OpAdd => Leaf::OpAddEq,
        Leaf::OpSub => Leaf::OpSubEq,
        Leaf::OpMul => Leaf::OpMulEq,
        Leaf::OpDiv => Leaf::OpDivEq,
        Leaf::OpMod => Leaf::OpModEq,
        Leaf::OpAssign => Leaf::OpLogequals,
        Leaf::OpBitnot => Leaf::OpBitnotEq,
        Leaf::OpBitand => Leaf::OpBitandEq,
        Leaf::OpBitor => Leaf::OpBitorEq,
        Leaf::OpBitxor => Leaf::OpBitxorEq,
        Leaf::OpBitlsh => Leaf::OpBitlshEq,
        Leaf::OpBitrsh => Leaf::OpBitrshEq,
        Leaf::OpLognot => Leaf::OpLognotEq,
        Leaf::OpLogand => Leaf::OpLogandEq,
        Leaf::OpLogor => Leaf::OpLogorEq,
        Leaf::OpLogless => Leaf::OpLoglessEq,
        Leaf::OpLogmore => Leaf::OpLogmoreEq,
        _ => Leaf::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cherry_core::lang::leaves::{self, LeafCategory};

    fn tokenize(source: &str) -> (Leaf, &str) {
        let mut state = LexState::new(source);
        let token = OperatorRule.tokenize(&mut state).unwrap();
        (token.kind, token.lexeme)
    }

    #[test]
    fn longest_match() {
        assert_eq!(tokenize("<<="), (Leaf::OpBitlshEq, "<<="));
        assert_eq!(tokenize(">>=x"), (Leaf::OpBitrshEq, ">>="));
        assert_eq!(tokenize("&&="), (Leaf::OpLogandEq, "&&="));
        assert_eq!(tokenize("..."), (Leaf::OpEllipsis, "..."));
        assert_eq!(tokenize("...."), (Leaf::OpEllipsis, "..."));
        assert_eq!(tokenize("..x"), (Leaf::OpCascade, ".."));
        assert_eq!(tokenize("=="), (Leaf::OpLogequals, "=="));
        assert_eq!(tokenize("++="), (Leaf::OpInc, "++"));
        assert_eq!(tokenize("**"), (Leaf::OpMul, "*"));
    }

    #[test]
    fn every_registered_spelling_round_trips() {
        let spelled = leaves::LEAVES
            .iter()
            .filter(|l| matches!(l.category, LeafCategory::Operator | LeafCategory::Delimiter));
        for info in spelled {
            let spelling = info.spelling.unwrap_or_default();
            assert_eq!(tokenize(spelling), (info.id, spelling), "{}", info.name);
        }
    }

    #[test]
    fn unmapped_combinations_are_unknown() {
        assert_eq!(tokenize(".="), (Leaf::Unknown, ".="));
    }

    #[test]
    fn litmus() {
        for ch in OPERATOR_CHARS.chars() {
            assert!(OperatorRule.litmus(&ch.to_string()));
        }
        assert!(!OperatorRule.litmus("@"));
        assert!(!OperatorRule.litmus("#"));
        assert!(!OperatorRule.litmus(""));
    }
}
