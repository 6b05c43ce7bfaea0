//! The LL(1) parsing table.

use std::collections::BTreeMap;

use log::debug;

use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::prediction::{FirstSets, FollowSets};
use crate::symbol::{Nonterminal, Symbol, Terminal, TerminalSet};

/// LL(1) parse table: for every nonterminal and lookahead terminal, the one
/// alternative to expand.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseTable {
    map: BTreeMap<ParseTableKey, usize>,
}

#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
struct ParseTableKey {
    nonterminal: Nonterminal,
    terminal: Terminal,
}

/// The representation of the parsing table in reports: nonterminal name, then
/// terminal name, to a zero-based alternative index.
pub type TableReport = BTreeMap<String, BTreeMap<String, usize>>;

impl ParseTable {
    /// Creates an LL parse table.
    ///
    /// ParseTable[A, a] holds alternative `i` of `A` if and only if `a` selects that
    /// alternative: it is in the FIRST set of the alternative, or the alternative can
    /// derive the empty string and `a` is in FOLLOW(A). Fails when a cell would hold
    /// two different alternatives.
    pub fn new(
        grammar: &Grammar,
        first_sets: &FirstSets,
        follow_sets: &FollowSets,
    ) -> Result<Self, GrammarError> {
        let mut this = ParseTable {
            map: BTreeMap::new(),
        };
        for rule in grammar.rules() {
            let selectors = selector_set(grammar, first_sets, follow_sets, rule.lhs, rule.rhs);
            for terminal in &selectors {
                this.assign(grammar, rule.lhs, terminal, rule.alternative)?;
            }
        }
        debug!("parse table has {} entries", this.map.len());
        Ok(this)
    }

    fn assign(
        &mut self,
        grammar: &Grammar,
        nonterminal: Nonterminal,
        terminal: Terminal,
        alternative: usize,
    ) -> Result<(), GrammarError> {
        let key = ParseTableKey {
            nonterminal,
            terminal,
        };
        match self.map.get(&key) {
            Some(&existing) if existing != alternative => Err(GrammarError::TableConflict {
                nonterminal: grammar.name(nonterminal).to_string(),
                terminal: grammar.terminal_name(terminal).to_string(),
                first: existing,
                second: alternative,
            }),
            Some(_) => Ok(()),
            None => {
                self.map.insert(key, alternative);
                Ok(())
            }
        }
    }

    /// Looks up the alternative to expand.
    pub fn get(&self, nonterminal: Nonterminal, terminal: Terminal) -> Option<usize> {
        self.map
            .get(&ParseTableKey {
                nonterminal,
                terminal,
            })
            .copied()
    }

    /// Returns the number of cells in use.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks whether no cell is in use.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over all cells in use, ordered by nonterminal and then by terminal.
    pub fn entries(&self) -> impl Iterator<Item = (Nonterminal, Terminal, usize)> + '_ {
        self.map
            .iter()
            .map(|(key, &alternative)| (key.nonterminal, key.terminal, alternative))
    }

    /// Returns the table by name, for reporting.
    pub fn report(&self, grammar: &Grammar) -> TableReport {
        let mut report = TableReport::new();
        for nonterminal in grammar.nonterminals() {
            report.insert(grammar.name(nonterminal).to_string(), BTreeMap::new());
        }
        for (nonterminal, terminal, alternative) in self.entries() {
            report
                .entry(grammar.name(nonterminal).to_string())
                .or_default()
                .insert(grammar.terminal_name(terminal).to_string(), alternative);
        }
        report
    }
}

/// Computes the lookahead terminals that select an alternative.
///
/// A terminal selects on its own and ends the walk. A nonterminal contributes its
/// FIRST set without EMPTY, and the walk goes on only if that set held EMPTY. When
/// the walk runs off the end, FOLLOW of the alternative's nonterminal is added.
fn selector_set(
    grammar: &Grammar,
    first_sets: &FirstSets,
    follow_sets: &FollowSets,
    lhs: Nonterminal,
    rhs: &[Symbol],
) -> TerminalSet {
    let mut selectors = TerminalSet::new(grammar.vocabulary());
    for &sym in rhs {
        match sym {
            Symbol::Terminal(terminal) => {
                selectors.insert(terminal);
                return selectors;
            }
            Symbol::Nonterminal(nonterminal) => {
                let first_set = first_sets.nonterminal(nonterminal);
                selectors.union_with(&first_set.terminals);
                if !first_set.empty {
                    return selectors;
                }
            }
        }
    }
    selectors.union_with(follow_sets.follow_set(lhs));
    selectors
}
