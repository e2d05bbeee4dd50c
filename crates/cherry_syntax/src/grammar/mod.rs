//! Grammar engine: production sets, FIRST/FOLLOW derivation and predictive tables.
//!
//! A [`Grammar`] is assembled from declarative [`GrammarRule`] objects, each contributing productions for one or
//! more non-terminals. FIRST and FOLLOW sets are derived by fixed-point iteration and memoized on first use.
//!
//! The engine does not drive the hand-written parser. It exists so tests and tooling can check that the parser's
//! litmus predicates agree with a declared grammar, and that the grammar stays LL(1).
//!
//! ## Examples
//!
//! ```rust
//! use cherry_syntax::grammar::{Grammar, GrammarRule, ProductionSet, Symbol};
//! use cherry_syntax::lexer::Leaf;
//!
//! const LIST: Symbol = Symbol::root(1);
//! const REST: Symbol = Symbol::root(2);
//!
//! struct ListRule;
//!
//! impl GrammarRule for ListRule {
//!     fn productions(&self) -> ProductionSet {
//!         let mut set = ProductionSet::new();
//!         set.insert(LIST, vec![Leaf::Identifier.into(), REST]);
//!         set.insert(REST, vec![Leaf::DcComma.into(), Leaf::Identifier.into(), REST]);
//!         set.insert(REST, vec![Symbol::EPSILON]);
//!         set
//!     }
//! }
//!
//! let grammar = Grammar::new(vec![Box::new(ListRule) as Box<dyn GrammarRule>]);
//! assert!(grammar.first_sets()[&REST].contains(&Symbol::EPSILON));
//! assert!(grammar.follow_sets()[&REST].contains(&Symbol::FINAL));
//! assert!(grammar.parse_table().is_ok());
//! ```

pub mod cherry;
mod symbol;

use std::cell::OnceCell;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub use symbol::{LEAF_UPPER_LIMIT, Symbol};

/// FIRST or FOLLOW sets, keyed by non-terminal.
pub type SymbolSets = BTreeMap<Symbol, BTreeSet<Symbol>>;

// ============================================================================
// PRODUCTIONS
// ============================================================================

/// Multimap from a head symbol to its alternative bodies, in insertion order per head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductionSet {
    bodies: BTreeMap<Symbol, Vec<Vec<Symbol>>>,
}

impl ProductionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one alternative `head -> body`.
    pub fn insert(&mut self, head: Symbol, body: Vec<Symbol>) {
        self.bodies.entry(head).or_default().push(body);
    }

    /// Move every production of `other` into this set.
    pub fn merge(&mut self, other: ProductionSet) {
        for (head, bodies) in other.bodies {
            self.bodies.entry(head).or_default().extend(bodies);
        }
    }

    /// Alternatives for `head`; empty when `head` has no productions.
    pub fn bodies(&self, head: Symbol) -> &[Vec<Symbol>] {
        self.bodies.get(&head).map_or(&[], Vec::as_slice)
    }

    pub fn heads(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.bodies.keys().copied()
    }

    /// Every `(head, body)` pair, ordered by head.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Symbol, &[Symbol])> + '_ {
        self.bodies
            .iter()
            .flat_map(|(head, bodies)| bodies.iter().map(move |body| (*head, body.as_slice())))
    }

    /// Number of productions (not heads).
    pub fn len(&self) -> usize {
        self.bodies.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl FromIterator<(Symbol, Vec<Symbol>)> for ProductionSet {
    fn from_iter<I: IntoIterator<Item = (Symbol, Vec<Symbol>)>>(iter: I) -> Self {
        let mut set = ProductionSet::new();
        for (head, body) in iter {
            set.insert(head, body);
        }
        set
    }
}

/// A declarative piece of a grammar.
pub trait GrammarRule {
    fn productions(&self) -> ProductionSet;
}

// ============================================================================
// GRAMMAR
// ============================================================================

/// A grammar assembled from rules, with lazily derived sets.
pub struct Grammar {
    rules: Vec<Box<dyn GrammarRule>>,
    start: Symbol,
    productions: OnceCell<ProductionSet>,
    firsts: OnceCell<SymbolSets>,
    follows: OnceCell<SymbolSets>,
}

impl Grammar {
    pub fn new(rules: Vec<Box<dyn GrammarRule>>) -> Self {
        Self {
            rules,
            start: Symbol::START,
            productions: OnceCell::new(),
            firsts: OnceCell::new(),
            follows: OnceCell::new(),
        }
    }

    /// Use `start` instead of [`Symbol::START`] as the start symbol.
    pub fn with_start(mut self, start: Symbol) -> Self {
        self.start = start;
        self.follows = OnceCell::new();
        self
    }

    pub fn start(&self) -> Symbol {
        self.start
    }

    /// All productions of all rules, merged.
    pub fn prod_sets(&self) -> &ProductionSet {
        self.productions.get_or_init(|| {
            let mut merged = ProductionSet::new();
            for rule in &self.rules {
                merged.merge(rule.productions());
            }
            merged
        })
    }

    /// FIRST set of every head.
    ///
    /// ## Notes
    /// - Iterates until a full round over all productions adds nothing. Productions are visited last to first,
    ///   which tends to reach the fixed point in fewer rounds when rules are declared top-down.
    pub fn first_sets(&self) -> &SymbolSets {
        self.firsts.get_or_init(|| {
            let productions = self.prod_sets();
            let mut result = SymbolSets::new();
            let mut round = 0;
            loop {
                round += 1;
                let mut changed = false;
                for (head, body) in productions.iter().rev() {
                    let firsts = firsts_of(body, &result);
                    changed |= extend(result.entry(head).or_default(), firsts);
                }
                tracing::debug!(round, changed, "FIRST sets round");
                if !changed {
                    break;
                }
            }
            result
        })
    }

    /// FOLLOW set of every non-terminal that appears in a body, plus the start symbol.
    pub fn follow_sets(&self) -> &SymbolSets {
        self.follows.get_or_init(|| {
            let productions = self.prod_sets();
            let firsts = self.first_sets();
            let mut result = SymbolSets::new();
            result.entry(self.start).or_default().insert(Symbol::FINAL);

            let mut round = 0;
            loop {
                round += 1;
                let mut changed = false;
                for (head, body) in productions.iter().rev() {
                    for (index, symbol) in body.iter().enumerate() {
                        if symbol.is_leaf() {
                            continue;
                        }
                        let rest = firsts_of(&body[index + 1..], firsts);
                        let head_follows = if rest.contains(&Symbol::EPSILON) {
                            result.get(&head).cloned().unwrap_or_default()
                        } else {
                            BTreeSet::new()
                        };
                        let follows = result.entry(*symbol).or_default();
                        let gained = rest.into_iter().filter(|s| *s != Symbol::EPSILON).chain(head_follows);
                        changed |= extend(follows, gained);
                    }
                }
                tracing::debug!(round, changed, "FOLLOW sets round");
                if !changed {
                    break;
                }
            }
            result
        })
    }

    /// Build the predictive parse table.
    ///
    /// ## Errors
    /// Returns every `(head, lookahead)` cell claimed by more than one production if the grammar is not LL(1).
    pub fn parse_table(&self) -> Result<ParseTable, Vec<Conflict>> {
        let firsts = self.first_sets();
        let follows = self.follow_sets();
        let mut cells: BTreeMap<(Symbol, Symbol), Vec<Symbol>> = BTreeMap::new();
        let mut conflicts = Vec::new();

        for (head, body) in self.prod_sets().iter() {
            for lookahead in predict(head, body, firsts, follows) {
                match cells.entry((head, lookahead)) {
                    Entry::Vacant(cell) => {
                        cell.insert(body.to_vec());
                    }
                    Entry::Occupied(cell) => conflicts.push(Conflict {
                        head,
                        lookahead,
                        first: cell.get().clone(),
                        second: body.to_vec(),
                    }),
                }
            }
        }

        if conflicts.is_empty() {
            Ok(ParseTable { cells })
        } else {
            Err(conflicts)
        }
    }
}

/// FIRST set of a symbol sequence, given the FIRST sets known so far.
///
/// ## Notes
/// - A terminal ends the scan. A non-terminal contributes its known FIRST set and ends the scan unless that set
///   holds ε. ε in the sequence itself is skipped.
/// - If the whole sequence can vanish the result holds ε.
pub fn firsts_of(sequence: &[Symbol], firsts: &SymbolSets) -> BTreeSet<Symbol> {
    let mut result = BTreeSet::new();
    for &symbol in sequence {
        if symbol == Symbol::EPSILON {
            continue;
        }
        if symbol.is_leaf() {
            result.insert(symbol);
            return result;
        }
        let Some(known) = firsts.get(&symbol) else {
            return result;
        };
        result.extend(known.iter().copied().filter(|s| *s != Symbol::EPSILON));
        if !known.contains(&Symbol::EPSILON) {
            return result;
        }
    }
    result.insert(Symbol::EPSILON);
    result
}

/// Lookaheads that select `head -> body`.
fn predict(head: Symbol, body: &[Symbol], firsts: &SymbolSets, follows: &SymbolSets) -> BTreeSet<Symbol> {
    let mut lookaheads = firsts_of(body, firsts);
    if lookaheads.remove(&Symbol::EPSILON) {
        if let Some(follow) = follows.get(&head) {
            lookaheads.extend(follow.iter().copied());
        }
    }
    lookaheads
}

fn extend(set: &mut BTreeSet<Symbol>, symbols: impl IntoIterator<Item = Symbol>) -> bool {
    let mut changed = false;
    for symbol in symbols {
        changed |= set.insert(symbol);
    }
    changed
}

// ============================================================================
// PARSE TABLE
// ============================================================================

/// LL(1) table: `(non-terminal, lookahead) -> body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTable {
    cells: BTreeMap<(Symbol, Symbol), Vec<Symbol>>,
}

impl ParseTable {
    pub fn get(&self, head: Symbol, lookahead: Symbol) -> Option<&[Symbol]> {
        self.cells.get(&(head, lookahead)).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Symbol, &[Symbol])> + '_ {
        self.cells
            .iter()
            .map(|((head, lookahead), body)| (*head, *lookahead, body.as_slice()))
    }
}

/// Two productions of one head predicted by the same lookahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub head: Symbol,
    pub lookahead: Symbol,
    pub first: Vec<Symbol>,
    pub second: Vec<Symbol>,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = |body: &[Symbol]| body.iter().map(Symbol::to_string).collect::<Vec<_>>().join(" ");
        write!(
            f,
            "{} on {}: `{}` and `{}`",
            self.head,
            self.lookahead,
            render(&self.first),
            render(&self.second)
        )
    }
}
