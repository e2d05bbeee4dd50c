//! Declared grammar for the implemented subset of Cherry.
//!
//! Covers exactly what the parser handles: a document of imports, simple paths, path expressions with generic
//! arguments, and type expressions with their suffixes. The grammar is kept LL(1) so each non-terminal maps onto a
//! single-token litmus in the hand-written parser.

use std::fmt;

use cherry_core::lang::primitives::PRIMITIVES;

use super::{Grammar, GrammarRule, ProductionSet, Symbol};
use crate::lexer::Leaf;

/// Non-terminals of the Cherry grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i16)]
pub enum Root {
    Document = 1,
    Imports,
    Import,
    SimplePath,
    SimplePathTail,
    PathExpr,
    PathExprTail,
    Segment,
    Primitive,
    GenericArgs,
    TypeListTail,
    Type,
    TypeSuffix,
    FnParams,
    FnOutput,
    RefDepth,
    RefDepthTail,
    RefMarker,
}

impl Root {
    pub const ALL: &'static [Root] = &[
        Root::Document,
        Root::Imports,
        Root::Import,
        Root::SimplePath,
        Root::SimplePathTail,
        Root::PathExpr,
        Root::PathExprTail,
        Root::Segment,
        Root::Primitive,
        Root::GenericArgs,
        Root::TypeListTail,
        Root::Type,
        Root::TypeSuffix,
        Root::FnParams,
        Root::FnOutput,
        Root::RefDepth,
        Root::RefDepthTail,
        Root::RefMarker,
    ];

    pub const fn symbol(self) -> Symbol {
        Symbol::root(self as i16)
    }

    pub fn from_symbol(symbol: Symbol) -> Option<Root> {
        let index = symbol.root_index()?;
        Root::ALL.iter().copied().find(|root| *root as i16 == index)
    }

    pub fn name(self) -> &'static str {
        match self {
            Root::Document => "document",
            Root::Imports => "imports",
            Root::Import => "import",
            Root::SimplePath => "simple_path",
            Root::SimplePathTail => "simple_path_tail",
            Root::PathExpr => "path_expr",
            Root::PathExprTail => "path_expr_tail",
            Root::Segment => "segment",
            Root::Primitive => "primitive",
            Root::GenericArgs => "generic_args",
            Root::TypeListTail => "type_list_tail",
            Root::Type => "type",
            Root::TypeSuffix => "type_suffix",
            Root::FnParams => "fn_params",
            Root::FnOutput => "fn_output",
            Root::RefDepth => "ref_depth",
            Root::RefDepthTail => "ref_depth_tail",
            Root::RefMarker => "ref_marker",
        }
    }
}

impl From<Root> for Symbol {
    fn from(root: Root) -> Self {
        root.symbol()
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Shorthands for declaring bodies.
fn r(root: Root) -> Symbol {
    root.symbol()
}

fn l(leaf: Leaf) -> Symbol {
    Symbol::leaf(leaf)
}

const EMPTY: Symbol = Symbol::EPSILON;

/// `document -> imports`, `imports -> import imports | ε`, `import -> using simple_path ;`
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportGrammar;

impl GrammarRule for ImportGrammar {
    fn productions(&self) -> ProductionSet {
        [
            (r(Root::Document), vec![r(Root::Imports)]),
            (r(Root::Imports), vec![r(Root::Import), r(Root::Imports)]),
            (r(Root::Imports), vec![EMPTY]),
            (
                r(Root::Import),
                vec![l(Leaf::KwUsing), r(Root::SimplePath), l(Leaf::DcTerminator)],
            ),
        ]
        .into_iter()
        .collect()
    }
}

/// `simple_path -> ident ('.' ident)*` and `path_expr -> segment ('.' segment)*`, with their tails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathGrammar;

impl GrammarRule for PathGrammar {
    fn productions(&self) -> ProductionSet {
        [
            (r(Root::SimplePath), vec![l(Leaf::Identifier), r(Root::SimplePathTail)]),
            (
                r(Root::SimplePathTail),
                vec![l(Leaf::OpAccess), l(Leaf::Identifier), r(Root::SimplePathTail)],
            ),
            (r(Root::SimplePathTail), vec![EMPTY]),
            (r(Root::PathExpr), vec![r(Root::Segment), r(Root::PathExprTail)]),
            (
                r(Root::PathExprTail),
                vec![l(Leaf::OpAccess), r(Root::Segment), r(Root::PathExprTail)],
            ),
            (r(Root::PathExprTail), vec![EMPTY]),
        ]
        .into_iter()
        .collect()
    }
}

/// Segments: a primitive keyword, or an identifier with optional generic arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentGrammar;

impl GrammarRule for SegmentGrammar {
    fn productions(&self) -> ProductionSet {
        let mut set: ProductionSet = [
            (r(Root::Segment), vec![r(Root::Primitive)]),
            (r(Root::Segment), vec![l(Leaf::Identifier), r(Root::GenericArgs)]),
            (
                r(Root::GenericArgs),
                vec![l(Leaf::OpLogless), r(Root::Type), r(Root::TypeListTail), l(Leaf::OpLogmore)],
            ),
            (r(Root::GenericArgs), vec![EMPTY]),
            (
                r(Root::TypeListTail),
                vec![l(Leaf::DcComma), r(Root::Type), r(Root::TypeListTail)],
            ),
            (r(Root::TypeListTail), vec![EMPTY]),
        ]
        .into_iter()
        .collect();
        for (_, leaf) in PRIMITIVES {
            set.insert(r(Root::Primitive), vec![l(*leaf)]);
        }
        set
    }
}

/// `type -> path_expr type_suffix`, where the suffix selects a function, array, reference or plain type.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeGrammar;

impl GrammarRule for TypeGrammar {
    fn productions(&self) -> ProductionSet {
        [
            (r(Root::Type), vec![r(Root::PathExpr), r(Root::TypeSuffix)]),
            (
                r(Root::TypeSuffix),
                vec![l(Leaf::DcLparen), r(Root::FnParams), l(Leaf::DcRparen), r(Root::FnOutput)],
            ),
            (r(Root::TypeSuffix), vec![l(Leaf::DcLbracket), l(Leaf::DcRbracket)]),
            (r(Root::TypeSuffix), vec![r(Root::RefDepth)]),
            (r(Root::TypeSuffix), vec![EMPTY]),
            (r(Root::FnParams), vec![r(Root::Type), r(Root::TypeListTail)]),
            (r(Root::FnParams), vec![EMPTY]),
            (r(Root::FnOutput), vec![l(Leaf::DcColon), r(Root::Type)]),
            (r(Root::FnOutput), vec![EMPTY]),
            (r(Root::RefDepth), vec![r(Root::RefMarker), r(Root::RefDepthTail)]),
            (r(Root::RefDepthTail), vec![r(Root::RefMarker), r(Root::RefDepthTail)]),
            (r(Root::RefDepthTail), vec![EMPTY]),
            (r(Root::RefMarker), vec![l(Leaf::OpMul)]),
            (r(Root::RefMarker), vec![l(Leaf::OpBitand)]),
            (r(Root::RefMarker), vec![l(Leaf::OpLogand)]),
        ]
        .into_iter()
        .collect()
    }
}

/// The Cherry grammar, starting from [`Root::Document`].
pub fn grammar() -> Grammar {
    Grammar::new(vec![
        Box::new(ImportGrammar) as Box<dyn GrammarRule>,
        Box::new(PathGrammar),
        Box::new(SegmentGrammar),
        Box::new(TypeGrammar),
    ])
    .with_start(Root::Document.symbol())
}
