//! FIRST sets.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::error::Diagnostic;
use crate::grammar::Grammar;
use crate::symbol::{FirstSet, Nonterminal, Symbol, Terminal};

use super::{PerSymbolSets, PredictSets, EMPTY_NAME};

/// FIRST sets, kept per alternative so that overlaps can be attributed to the
/// alternatives involved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstSets {
    /// FIRST set of every alternative, indexed by nonterminal and alternative.
    alternatives: Vec<Vec<FirstSet>>,
    /// FIRST set of every nonterminal: the union over its alternatives.
    nonterminals: Vec<FirstSet>,
    /// Overlapping alternatives.
    diagnostics: Vec<Diagnostic>,
    /// Size of the vocabulary.
    num_terminals: usize,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// A terminal in the leading position is its own FIRST set. A nonterminal in the
    /// leading position contributes its FIRST set, and when that set holds EMPTY,
    /// the next symbol contributes as well. An alternative whose symbols can all
    /// derive the empty string, including the empty alternative, holds EMPTY.
    ///
    /// Sets are grown until a full pass over all alternatives changes nothing, so
    /// nonterminals that refer to each other converge without recursion.
    pub fn new(grammar: &Grammar) -> Self {
        let vocabulary = grammar.vocabulary();
        let mut this = FirstSets {
            alternatives: grammar
                .nonterminals()
                .map(|nonterminal| {
                    vec![FirstSet::new(vocabulary); grammar.alternatives(nonterminal).len()]
                })
                .collect(),
            nonterminals: vec![FirstSet::new(vocabulary); grammar.num_nonterminals()],
            diagnostics: vec![],
            num_terminals: vocabulary.len(),
        };

        this.collect_from(grammar);
        this.diagnostics = this.ambiguities(grammar);
        this
    }

    fn collect_from(&mut self, grammar: &Grammar) {
        let mut changed = true;
        let mut passes = 0;
        while changed {
            changed = false;
            passes += 1;
            for rule in grammar.rules() {
                let lookahead = self.first_set_for_string(rule.rhs);
                let lhs = rule.lhs.usize();
                changed |= self.alternatives[lhs][rule.alternative].union_with(&lookahead);
                changed |= self.nonterminals[lhs].union_with(&lookahead);
            }
        }
        debug!("FIRST sets settled after {} passes", passes);
    }

    /// Calculates a FIRST set for a string of symbols, using the sets known so far.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> FirstSet {
        let mut result = FirstSet::with_len(self.num_terminals);
        for &sym in string {
            match sym {
                Symbol::Terminal(terminal) => {
                    result.terminals.insert(terminal);
                    return result;
                }
                Symbol::Nonterminal(nonterminal) => {
                    let first_set = &self.nonterminals[nonterminal.usize()];
                    result.terminals.union_with(&first_set.terminals);
                    if !first_set.empty {
                        return result;
                    }
                }
            }
        }
        result.empty = true;
        result
    }

    /// Overlaps between alternatives of the same nonterminal. One diagnostic is
    /// recorded per nonterminal and terminal.
    fn ambiguities(&self, grammar: &Grammar) -> Vec<Diagnostic> {
        let mut diagnostics = vec![];
        for nonterminal in grammar.nonterminals() {
            let mut used: BTreeMap<Option<Terminal>, usize> = BTreeMap::new();
            let mut reported = BTreeSet::new();
            for (alternative, first_set) in self.alternatives(nonterminal).iter().enumerate() {
                let leading = first_set
                    .terminals
                    .iter()
                    .map(Some)
                    .chain(if first_set.empty { Some(None) } else { None });
                for terminal in leading {
                    match used.get(&terminal) {
                        Some(&previous) => {
                            if reported.insert(terminal) {
                                let terminal = terminal.map(|t| grammar.terminal_name(t).to_string());
                                warn!(
                                    "`{}` has `{}` in multiple alternatives",
                                    grammar.name(nonterminal),
                                    terminal.as_deref().unwrap_or(EMPTY_NAME)
                                );
                                diagnostics.push(Diagnostic::AmbiguousFirstSet {
                                    nonterminal: grammar.name(nonterminal).to_string(),
                                    terminal,
                                    alternatives: (previous, alternative),
                                });
                            }
                        }
                        None => {
                            used.insert(terminal, alternative);
                        }
                    }
                }
            }
        }
        diagnostics
    }

    /// Returns the FIRST sets of a nonterminal's alternatives.
    pub fn alternatives(&self, nonterminal: Nonterminal) -> &[FirstSet] {
        &self.alternatives[nonterminal.usize()]
    }

    /// Returns the FIRST set of one alternative.
    pub fn alternative(&self, nonterminal: Nonterminal, alternative: usize) -> &FirstSet {
        &self.alternatives[nonterminal.usize()][alternative]
    }

    /// Returns the FIRST set of a nonterminal.
    pub fn nonterminal(&self, nonterminal: Nonterminal) -> &FirstSet {
        &self.nonterminals[nonterminal.usize()]
    }

    /// Checks whether a nonterminal can derive the empty string.
    pub fn is_nullable(&self, nonterminal: Nonterminal) -> bool {
        self.nonterminals[nonterminal.usize()].empty
    }

    /// Returns warnings about terminals shared by several alternatives.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics[..]
    }
}

impl PredictSets for FirstSets {
    fn predict_sets(&self, grammar: &Grammar) -> PerSymbolSets {
        grammar
            .nonterminals()
            .map(|nonterminal| {
                let first_set = self.nonterminal(nonterminal);
                let mut names: BTreeSet<String> = first_set
                    .terminals
                    .iter()
                    .map(|terminal| grammar.terminal_name(terminal).to_string())
                    .collect();
                if first_set.empty {
                    names.insert(EMPTY_NAME.to_string());
                }
                (grammar.name(nonterminal).to_string(), names)
            })
            .collect()
    }
}
