//! Define the terminal vocabulary ("leaves") of the Cherry language.
//!
//! Every token the lexer can produce carries exactly one [`Leaf`]. This module is the single source of truth for
//! their identity, their registry names (as printed in token dumps and grammar tables), their source spellings, and
//! their grouping.
//!
//! ## Notes
//! - Leaf values are contiguous small integers starting at `0` ([`Leaf::Eos`]). The grammar engine relies on every
//!   leaf fitting below its non-terminal range and on no leaf colliding with the negative sentinel symbols.
//! - [`LEAVES`] is ordered by leaf value, so `LEAVES[leaf.id() as usize].id == leaf` always holds.
//! - Keyword lookup via [`from_keyword`] is **case-sensitive**.
//!
//! ## Examples
//! ```rust
//! use cherry_core::lang::leaves::{self, Leaf, LeafCategory};
//!
//! assert_eq!(leaves::from_keyword("int32"), Some(Leaf::KwInt32));
//! assert_eq!(leaves::from_keyword("Int32"), None);
//! assert_eq!(leaves::info(Leaf::OpBitlshEq).spelling, Some("<<="));
//! assert_eq!(leaves::info(Leaf::DcTerminator).category, LeafCategory::Delimiter);
//! ```

use std::fmt;

/// Stable identifier for every terminal kind.
///
/// ## Notes
/// - `Lv*` are literal values, `Kw*` declaration/type keywords, `Cf*` control-flow keywords, `Op*` operators and
///   `Dc*` delimiters.
/// - The discriminant is the leaf's symbol value; see [`Leaf::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i16)]
pub enum Leaf {
    // Special
    Eos,
    Unknown,
    Comment,
    Identifier,

    // Literal values
    LvSigned,
    LvUnsigned,
    LvDecimal,
    LvCharacter,
    LvRawString,
    LvIntString,
    LvMlString,
    LvMliString,
    LvNull,
    LvTrue,
    LvFalse,

    // Declaration and type keywords
    KwVar,
    KwConst,
    KwStatic,
    KwObject,
    KwExtend,
    KwDef,
    KwAlias,
    KwBool,
    KwChar,
    KwInt8,
    KwInt16,
    KwInt32,
    KwInt64,
    KwUint8,
    KwUint16,
    KwUint32,
    KwUint64,
    KwSingle,
    KwDouble,
    KwString,
    KwVoid,
    KwUsing,
    KwModule,
    KwExtern,

    // Control flow
    CfIf,
    CfElse,
    CfFor,
    CfDo,
    CfWhile,
    CfMatch,
    CfNext,
    CfBreak,
    CfAs,
    CfIs,
    CfReturn,

    // Arithmetic and assignment operators
    OpAdd,
    OpSub,
    OpMul,
    OpDiv,
    OpMod,
    OpAddEq,
    OpSubEq,
    OpMulEq,
    OpDivEq,
    OpModEq,
    OpInc,
    OpDec,
    OpAssign,
    OpAccess,
    OpTernary,
    OpCascade,
    OpEllipsis,

    // Bitwise operators
    OpBitnot,
    OpBitand,
    OpBitor,
    OpBitxor,
    OpBitlsh,
    OpBitrsh,
    OpBitnotEq,
    OpBitandEq,
    OpBitorEq,
    OpBitxorEq,
    OpBitlshEq,
    OpBitrshEq,

    // Logical operators
    OpLognot,
    OpLogand,
    OpLogor,
    OpLogless,
    OpLogmore,
    OpLogequals,
    OpLognotEq,
    OpLogandEq,
    OpLogorEq,
    OpLoglessEq,
    OpLogmoreEq,

    // Delimiters
    DcLparen,
    DcRparen,
    DcLbracket,
    DcRbracket,
    DcLbrace,
    DcRbrace,
    DcComma,
    DcTerminator,
    DcColon,
}

impl Leaf {
    /// The leaf's value in the shared symbol space.
    pub const fn id(self) -> i16 {
        self as i16
    }

    /// Resolve a symbol value back to its leaf, if it names one.
    pub fn from_id(id: i16) -> Option<Leaf> {
        let index = usize::try_from(id).ok()?;
        LEAVES.get(index).map(|info| info.id)
    }

    /// Registry name, e.g. `kw_using`.
    pub fn name(self) -> &'static str {
        info(self).name
    }

    /// Grouping of this leaf.
    pub fn category(self) -> LeafCategory {
        info(self).category
    }

    /// Return `true` for the 14 keywords that name a primitive type.
    pub fn is_primitive(self) -> bool {
        crate::lang::primitives::from_leaf(self).is_some()
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// High-level grouping for diagnostics and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafCategory {
    /// End of source, unknown punctuation, comments and identifiers.
    Special,
    Literal,
    Keyword,
    ControlFlow,
    Operator,
    Delimiter,
}

/// Metadata for a single leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafInfo {
    pub id: Leaf,
    /// Registry name used in token dumps and grammar tables.
    pub name: &'static str,
    /// Exact source spelling for fixed-text leaves; `None` for leaves whose lexeme varies.
    pub spelling: Option<&'static str>,
    pub category: LeafCategory,
}

impl LeafInfo {
    /// Return `true` if this leaf is spelled as a word (keywords, control flow, `null`/`true`/`false`).
    pub fn is_word(&self) -> bool {
        self.spelling
            .and_then(|s| s.chars().next())
            .is_some_and(|c| c.is_ascii_alphabetic())
    }
}

const fn entry(id: Leaf, name: &'static str, spelling: Option<&'static str>, category: LeafCategory) -> LeafInfo {
    LeafInfo {
        id,
        name,
        spelling,
        category,
    }
}

const fn special(id: Leaf, name: &'static str) -> LeafInfo {
    entry(id, name, None, LeafCategory::Special)
}

const fn literal(id: Leaf, name: &'static str) -> LeafInfo {
    entry(id, name, None, LeafCategory::Literal)
}

const fn word_literal(id: Leaf, name: &'static str, spelling: &'static str) -> LeafInfo {
    entry(id, name, Some(spelling), LeafCategory::Literal)
}

const fn keyword(id: Leaf, name: &'static str, spelling: &'static str) -> LeafInfo {
    entry(id, name, Some(spelling), LeafCategory::Keyword)
}

const fn control(id: Leaf, name: &'static str, spelling: &'static str) -> LeafInfo {
    entry(id, name, Some(spelling), LeafCategory::ControlFlow)
}

const fn operator(id: Leaf, name: &'static str, spelling: &'static str) -> LeafInfo {
    entry(id, name, Some(spelling), LeafCategory::Operator)
}

const fn delimiter(id: Leaf, name: &'static str, spelling: &'static str) -> LeafInfo {
    entry(id, name, Some(spelling), LeafCategory::Delimiter)
}

/// Registry of all leaves, ordered by leaf value.
pub const LEAVES: &[LeafInfo] = &[
    special(Leaf::Eos, "eos"),
    special(Leaf::Unknown, "unknown"),
    special(Leaf::Comment, "comment"),
    special(Leaf::Identifier, "identifier"),
    literal(Leaf::LvSigned, "lv_signed"),
    literal(Leaf::LvUnsigned, "lv_unsigned"),
    literal(Leaf::LvDecimal, "lv_decimal"),
    literal(Leaf::LvCharacter, "lv_character"),
    literal(Leaf::LvRawString, "lv_raw_string"),
    literal(Leaf::LvIntString, "lv_int_string"),
    literal(Leaf::LvMlString, "lv_ml_string"),
    literal(Leaf::LvMliString, "lv_mli_string"),
    word_literal(Leaf::LvNull, "lv_null", "null"),
    word_literal(Leaf::LvTrue, "lv_true", "true"),
    word_literal(Leaf::LvFalse, "lv_false", "false"),
    keyword(Leaf::KwVar, "kw_var", "var"),
    keyword(Leaf::KwConst, "kw_const", "const"),
    keyword(Leaf::KwStatic, "kw_static", "static"),
    keyword(Leaf::KwObject, "kw_object", "object"),
    keyword(Leaf::KwExtend, "kw_extend", "extend"),
    keyword(Leaf::KwDef, "kw_def", "def"),
    keyword(Leaf::KwAlias, "kw_alias", "alias"),
    keyword(Leaf::KwBool, "kw_bool", "bool"),
    keyword(Leaf::KwChar, "kw_char", "char"),
    keyword(Leaf::KwInt8, "kw_int8", "int8"),
    keyword(Leaf::KwInt16, "kw_int16", "int16"),
    keyword(Leaf::KwInt32, "kw_int32", "int32"),
    keyword(Leaf::KwInt64, "kw_int64", "int64"),
    keyword(Leaf::KwUint8, "kw_uint8", "uint8"),
    keyword(Leaf::KwUint16, "kw_uint16", "uint16"),
    keyword(Leaf::KwUint32, "kw_uint32", "uint32"),
    keyword(Leaf::KwUint64, "kw_uint64", "uint64"),
    keyword(Leaf::KwSingle, "kw_single", "single"),
    keyword(Leaf::KwDouble, "kw_double", "double"),
    keyword(Leaf::KwString, "kw_string", "string"),
    keyword(Leaf::KwVoid, "kw_void", "void"),
    keyword(Leaf::KwUsing, "kw_using", "using"),
    keyword(Leaf::KwModule, "kw_module", "module"),
    keyword(Leaf::KwExtern, "kw_extern", "extern"),
    control(Leaf::CfIf, "cf_if", "if"),
    control(Leaf::CfElse, "cf_else", "else"),
    control(Leaf::CfFor, "cf_for", "for"),
    control(Leaf::CfDo, "cf_do", "do"),
    control(Leaf::CfWhile, "cf_while", "while"),
    control(Leaf::CfMatch, "cf_match", "match"),
    control(Leaf::CfNext, "cf_next", "next"),
    control(Leaf::CfBreak, "cf_break", "break"),
    control(Leaf::CfAs, "cf_as", "as"),
    control(Leaf::CfIs, "cf_is", "is"),
    control(Leaf::CfReturn, "cf_return", "return"),
    operator(Leaf::OpAdd, "op_add", "+"),
    operator(Leaf::OpSub, "op_sub", "-"),
    operator(Leaf::OpMul, "op_mul", "*"),
    operator(Leaf::OpDiv, "op_div", "/"),
    operator(Leaf::OpMod, "op_mod", "%"),
    operator(Leaf::OpAddEq, "op_add_eq", "+="),
    operator(Leaf::OpSubEq, "op_sub_eq", "-="),
    operator(Leaf::OpMulEq, "op_mul_eq", "*="),
    operator(Leaf::OpDivEq, "op_div_eq", "/="),
    operator(Leaf::OpModEq, "op_mod_eq", "%="),
    operator(Leaf::OpInc, "op_inc", "++"),
    operator(Leaf::OpDec, "op_dec", "--"),
    operator(Leaf::OpAssign, "op_assign", "="),
    operator(Leaf::OpAccess, "op_access", "."),
    operator(Leaf::OpTernary, "op_ternary", "?"),
    operator(Leaf::OpCascade, "op_cascade", ".."),
    operator(Leaf::OpEllipsis, "op_ellipsis", "..."),
    operator(Leaf::OpBitnot, "op_bitnot", "~"),
    operator(Leaf::OpBitand, "op_bitand", "&"),
    operator(Leaf::OpBitor, "op_bitor", "|"),
    operator(Leaf::OpBitxor, "op_bitxor", "^"),
    operator(Leaf::OpBitlsh, "op_bitlsh", "<<"),
    operator(Leaf::OpBitrsh, "op_bitrsh", ">>"),
    operator(Leaf::OpBitnotEq, "op_bitnot_eq", "~="),
    operator(Leaf::OpBitandEq, "op_bitand_eq", "&="),
    operator(Leaf::OpBitorEq, "op_bitor_eq", "|="),
    operator(Leaf::OpBitxorEq, "op_bitxor_eq", "^="),
    operator(Leaf::OpBitlshEq, "op_bitlsh_eq", "<<="),
    operator(Leaf::OpBitrshEq, "op_bitrsh_eq", ">>="),
    operator(Leaf::OpLognot, "op_lognot", "!"),
    operator(Leaf::OpLogand, "op_logand", "&&"),
    operator(Leaf::OpLogor, "op_logor", "||"),
    operator(Leaf::OpLogless, "op_logless", "<"),
    operator(Leaf::OpLogmore, "op_logmore", ">"),
    operator(Leaf::OpLogequals, "op_logequals", "=="),
    operator(Leaf::OpLognotEq, "op_lognot_eq", "!="),
    operator(Leaf::OpLogandEq, "op_logand_eq", "&&="),
    operator(Leaf::OpLogorEq, "op_logor_eq", "||="),
    operator(Leaf::OpLoglessEq, "op_logless_eq", "<="),
    operator(Leaf::OpLogmoreEq, "op_logmore_eq", ">="),
    delimiter(Leaf::DcLparen, "dc_lparen", "("),
    delimiter(Leaf::DcRparen, "dc_rparen", ")"),
    delimiter(Leaf::DcLbracket, "dc_lbracket", "["),
    delimiter(Leaf::DcRbracket, "dc_rbracket", "]"),
    delimiter(Leaf::DcLbrace, "dc_lbrace", "{"),
    delimiter(Leaf::DcRbrace, "dc_rbrace", "}"),
    delimiter(Leaf::DcComma, "dc_comma", ","),
    delimiter(Leaf::DcTerminator, "dc_terminator", ";"),
    delimiter(Leaf::DcColon, "dc_colon", ":"),
];

/// Metadata lookup.
///
/// ## Notes
/// - Indexes [`LEAVES`] directly; the registry guardrail tests keep the table ordered by leaf value.
pub fn info(id: Leaf) -> &'static LeafInfo {
    &LEAVES[id as usize]
}

/// Registry name of a leaf.
pub fn as_str(id: Leaf) -> &'static str {
    info(id).name
}

/// Resolve a word (keyword, control-flow keyword, or `null`/`true`/`false`) to its leaf.
///
/// ## Parameters
/// - `word`: Candidate identifier-shaped lexeme.
///
/// ## Returns
/// - `Some(Leaf)` if `word` is reserved, `None` if it is an ordinary identifier.
pub fn from_keyword(word: &str) -> Option<Leaf> {
    LEAVES
        .iter()
        .find(|leaf| leaf.is_word() && leaf.spelling == Some(word))
        .map(|leaf| leaf.id)
}

/// All reserved words in registry order.
pub fn keywords() -> impl Iterator<Item = &'static LeafInfo> {
    LEAVES.iter().filter(|leaf| leaf.is_word())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_by_value() {
        for (index, leaf) in LEAVES.iter().enumerate() {
            assert_eq!(leaf.id.id() as usize, index, "{} is out of order", leaf.name);
        }
        assert_eq!(LEAVES.last().map(|l| l.id), Some(Leaf::DcColon));
    }

    #[test]
    fn from_id_round_trips() {
        assert_eq!(Leaf::from_id(0), Some(Leaf::Eos));
        assert_eq!(Leaf::from_id(Leaf::KwUsing.id()), Some(Leaf::KwUsing));
        assert_eq!(Leaf::from_id(-1), None);
        assert_eq!(Leaf::from_id(LEAVES.len() as i16), None);
    }

    #[test]
    fn keyword_lookup() {
        assert_eq!(from_keyword("var"), Some(Leaf::KwVar));
        assert_eq!(from_keyword("return"), Some(Leaf::CfReturn));
        assert_eq!(from_keyword("null"), Some(Leaf::LvNull));
        assert_eq!(from_keyword("std"), None);
        // Operators have spellings but are not words.
        assert_eq!(from_keyword("+"), None);
    }

    #[test]
    fn keyword_count() {
        assert_eq!(keywords().count(), 24 + 11 + 3);
    }

    #[test]
    fn display_uses_registry_name() {
        assert_eq!(Leaf::OpLogandEq.to_string(), "op_logand_eq");
        assert_eq!(Leaf::LvMliString.to_string(), "lv_mli_string");
    }
}
