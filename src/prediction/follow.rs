//! FOLLOW sets.

use log::{debug, trace};

use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::symbol::{Nonterminal, Symbol, TerminalSet};

use super::{FirstSets, PerSymbolSets, PredictSets};

/// FOLLOW sets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: Vec<TerminalSet>,
    /// The number of passes needed to reach the fixpoint.
    passes: usize,
}

/// Collector of FOLLOW sets, one full pass over the grammar at a time.
pub struct FollowCollector<'a> {
    grammar: &'a Grammar,
    first_sets: &'a FirstSets,
    map: Vec<TerminalSet>,
    passes: usize,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Result<Self, GrammarError> {
        FollowCollector::new(grammar, first_sets).finish()
    }

    /// Returns the FOLLOW set of a nonterminal.
    pub fn follow_set(&self, nonterminal: Nonterminal) -> &TerminalSet {
        &self.map[nonterminal.usize()]
    }

    /// Returns the number of passes made, including the final pass that changed nothing.
    pub fn passes(&self) -> usize {
        self.passes
    }
}

impl<'a> FollowCollector<'a> {
    /// Creates a collector with every FOLLOW set empty.
    pub fn new(grammar: &'a Grammar, first_sets: &'a FirstSets) -> Self {
        FollowCollector {
            grammar,
            first_sets,
            map: vec![TerminalSet::new(grammar.vocabulary()); grammar.num_nonterminals()],
            passes: 0,
        }
    }

    /// Makes one full pass over every alternative of every nonterminal. Returns
    /// whether any FOLLOW set has grown.
    ///
    /// For a nonterminal `M` at some position of an alternative of `N`, FOLLOW(M) gains
    /// the FIRST terminals of the symbols after `M`. If those symbols can derive the
    /// empty string, or `M` is last, FOLLOW(M) gains FOLLOW(N) as well.
    pub fn pass(&mut self) -> bool {
        let grammar = self.grammar;
        self.passes += 1;
        let mut changed = false;
        for rule in grammar.rules() {
            for (pos, &sym) in rule.rhs.iter().enumerate() {
                let followed = match sym {
                    Symbol::Nonterminal(nonterminal) => nonterminal,
                    Symbol::Terminal(_) => continue,
                };
                let rest = self.first_sets.first_set_for_string(&rule.rhs[pos + 1..]);
                changed |= self.map[followed.usize()].union_with(&rest.terminals);
                if rest.empty && followed != rule.lhs {
                    let lhs_follow_set = self.map[rule.lhs.usize()].clone();
                    changed |= self.map[followed.usize()].union_with(&lhs_follow_set);
                }
            }
        }
        trace!("FOLLOW pass {}: changed = {}", self.passes, changed);
        changed
    }

    /// Returns the FOLLOW sets collected so far, indexed by nonterminal.
    pub fn sets(&self) -> &[TerminalSet] {
        &self.map[..]
    }

    /// Returns the number of passes made so far.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// An upper bound on passes that change something: each one adds at least one
    /// terminal to one set.
    fn max_changing_passes(&self) -> usize {
        self.grammar.num_nonterminals() * self.grammar.vocabulary().len()
    }

    /// Makes passes until one changes nothing.
    pub fn finish(mut self) -> Result<FollowSets, GrammarError> {
        while self.pass() {
            if self.passes > self.max_changing_passes() {
                return Err(GrammarError::FollowSetsDiverged {
                    passes: self.passes,
                });
            }
        }
        debug!("FOLLOW sets settled after {} passes", self.passes);
        Ok(FollowSets {
            map: self.map,
            passes: self.passes,
        })
    }
}

impl PredictSets for FollowSets {
    fn predict_sets(&self, grammar: &Grammar) -> PerSymbolSets {
        grammar
            .nonterminals()
            .map(|nonterminal| {
                let names = self
                    .follow_set(nonterminal)
                    .iter()
                    .map(|terminal| grammar.terminal_name(terminal).to_string())
                    .collect();
                (grammar.name(nonterminal).to_string(), names)
            })
            .collect()
    }
}
