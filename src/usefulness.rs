//! Analysis of nonterminal usefulness: productivity, which is required, and reachability,
//! which is only reported.

use bit_matrix::BitMatrix;
use bit_vec::BitVec;
use log::{debug, trace, warn};

use crate::error::{Diagnostic, GrammarError};
use crate::grammar::Grammar;
use crate::symbol::{Nonterminal, Symbol};

/// Contains the information about usefulness of the grammar's nonterminals.
pub struct Usefulness {
    productivity: BitVec,
    reachability: BitMatrix,
    reachable: BitVec,
}

/// Returns the set of productive nonterminals.
///
/// Only the first symbol of each alternative is inspected. An alternative is productive
/// if it is empty, begins with a terminal, or begins with a productive nonterminal. A
/// nonterminal is productive once all of its alternatives are. One without
/// alternatives is productive.
fn productive_nonterminals(grammar: &Grammar) -> BitVec {
    let mut productivity = BitVec::from_elem(grammar.num_nonterminals(), false);
    let mut changed = true;
    let mut passes = 0;
    while changed {
        changed = false;
        passes += 1;
        for nonterminal in grammar.nonterminals() {
            if productivity[nonterminal.usize()] {
                continue;
            }
            let alternatives = grammar.alternatives(nonterminal);
            let productive = alternatives.iter().all(|rhs| match rhs.first() {
                None | Some(Symbol::Terminal(_)) => true,
                Some(&Symbol::Nonterminal(first)) => productivity[first.usize()],
            });
            if productive {
                trace!("productive: {}", grammar.name(nonterminal));
                productivity.set(nonterminal.usize(), true);
                changed = true;
            }
        }
    }
    debug!("productivity settled after {} passes", passes);
    productivity
}

/// Returns the reachability matrix. A nonterminal reaches itself and every nonterminal
/// that occurs in one of its alternatives, transitively.
fn reachability(grammar: &Grammar) -> BitMatrix {
    let num_nonterminals = grammar.num_nonterminals();
    let mut reachability = BitMatrix::new(num_nonterminals, num_nonterminals);

    for rule in grammar.rules() {
        for sym in rule.rhs {
            if let &Symbol::Nonterminal(nonterminal) = sym {
                reachability.set(rule.lhs.usize(), nonterminal.usize(), true);
            }
        }
    }
    for nonterminal in grammar.nonterminals() {
        reachability.set(nonterminal.usize(), nonterminal.usize(), true);
    }

    reachability.transitive_closure();

    reachability
}

impl Usefulness {
    /// Analyzes usefulness of the grammar's nonterminals.
    pub fn new(grammar: &Grammar) -> Self {
        let productivity = productive_nonterminals(grammar);
        let reachability = reachability(grammar);
        let start = grammar.start().usize();
        let mut reachable = BitVec::from_elem(grammar.num_nonterminals(), false);
        for nonterminal in grammar.nonterminals() {
            reachable.set(
                nonterminal.usize(),
                reachability[(start, nonterminal.usize())],
            );
        }
        Usefulness {
            productivity,
            reachability,
            reachable,
        }
    }

    /// Checks whether a nonterminal is productive.
    pub fn productivity(&self, nonterminal: Nonterminal) -> bool {
        self.productivity[nonterminal.usize()]
    }

    /// Checks whether a nonterminal is reachable from the start nonterminal.
    pub fn is_reachable(&self, nonterminal: Nonterminal) -> bool {
        self.reachable[nonterminal.usize()]
    }

    /// Checks whether `to` occurs in some derivation of `from`.
    pub fn reaches(&self, from: Nonterminal, to: Nonterminal) -> bool {
        self.reachability[(from.usize(), to.usize())]
    }

    /// Checks whether all nonterminals are productive.
    pub fn all_productive(&self) -> bool {
        self.productivity.all()
    }

    /// Fails with the first unproductive nonterminal, in declaration order.
    pub fn check_productive(&self, grammar: &Grammar) -> Result<(), GrammarError> {
        match grammar.nonterminals().find(|&n| !self.productivity(n)) {
            Some(nonterminal) => Err(GrammarError::NonTerminatingGrammar {
                nonterminal: grammar.name(nonterminal).to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Returns a diagnostic for every nonterminal unreachable from the start.
    pub fn unreachable_diagnostics(&self, grammar: &Grammar) -> Vec<Diagnostic> {
        grammar
            .nonterminals()
            .filter(|&nonterminal| !self.is_reachable(nonterminal))
            .map(|nonterminal| {
                warn!("nonterminal `{}` is unreachable", grammar.name(nonterminal));
                Diagnostic::UnreachableNonterminal {
                    nonterminal: grammar.name(nonterminal).to_string(),
                }
            })
            .collect()
    }
}

/// Returns a diagnostic for every nonterminal without alternatives.
pub fn empty_nonterminal_diagnostics(grammar: &Grammar) -> Vec<Diagnostic> {
    grammar
        .nonterminals()
        .filter(|&nonterminal| grammar.alternatives(nonterminal).is_empty())
        .map(|nonterminal| {
            warn!("nonterminal `{}` has no alternatives", grammar.name(nonterminal));
            Diagnostic::EmptyNonterminal {
                nonterminal: grammar.name(nonterminal).to_string(),
            }
        })
        .collect()
}

/// Validates a resolved grammar: every nonterminal must be productive.
/// Returns diagnostics about unreachable nonterminals, then about nonterminals
/// without alternatives.
pub fn validate(grammar: &Grammar) -> Result<Vec<Diagnostic>, GrammarError> {
    let usefulness = Usefulness::new(grammar);
    usefulness.check_productive(grammar)?;
    let mut diagnostics = usefulness.unreachable_diagnostics(grammar);
    diagnostics.extend(empty_nonterminal_diagnostics(grammar));
    Ok(diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::*;

    fn grammar(definition: &GrammarDefinition) -> Grammar {
        Grammar::new(definition).unwrap()
    }

    #[test]
    fn self_reference_is_not_terminating() {
        let mut definition = GrammarDefinition::new(["a"]);
        definition.rule("X").rhs([nonterminal("X")]);
        assert_eq!(
            validate(&grammar(&definition)),
            Err(GrammarError::NonTerminatingGrammar {
                nonterminal: "X".into()
            })
        );
    }

    #[test]
    fn productivity_propagates_through_first_symbols() {
        let mut definition = GrammarDefinition::new(["a"]);
        definition
            .rule("S")
            .rhs([nonterminal("A"), nonterminal("S")])
            .rule("A")
            .rhs([nonterminal("B")])
            .rule("B")
            .rhs([terminal("a")])
            .empty();
        let grammar = grammar(&definition);
        let usefulness = Usefulness::new(&grammar);
        assert!(usefulness.all_productive());
        assert_eq!(validate(&grammar), Ok(vec![]));
    }

    #[test]
    fn every_alternative_must_be_productive() {
        let mut definition = GrammarDefinition::new(["a"]);
        definition
            .rule("S")
            .rhs([nonterminal("T")])
            .rule("T")
            .rhs([terminal("a")])
            .rhs([nonterminal("T"), terminal("a")]);
        assert_eq!(
            validate(&grammar(&definition)),
            Err(GrammarError::NonTerminatingGrammar {
                nonterminal: "S".into()
            })
        );
    }

    #[test]
    fn nonterminal_without_alternatives() {
        let mut definition = GrammarDefinition::new(["a"]);
        definition
            .rule("S")
            .rhs([terminal("a"), nonterminal("E"), end_of_input()])
            .rule("T")
            .rhs([nonterminal("E")]);
        definition.declare("E");
        let grammar = grammar(&definition);
        let e = grammar.nonterminal("E").unwrap();
        let t = grammar.nonterminal("T").unwrap();
        let usefulness = Usefulness::new(&grammar);

        assert!(usefulness.productivity(e));
        assert!(usefulness.productivity(t));
        assert_eq!(
            validate(&grammar),
            Ok(vec![
                Diagnostic::UnreachableNonterminal {
                    nonterminal: "T".into()
                },
                Diagnostic::EmptyNonterminal {
                    nonterminal: "E".into()
                },
            ])
        );
    }

    #[test]
    fn unreachable_nonterminals_are_reported() {
        let mut definition = GrammarDefinition::new(["a"]);
        definition
            .rule("S")
            .rhs([terminal("a"), nonterminal("A")])
            .rule("A")
            .empty()
            .rule("Z")
            .rhs([nonterminal("A")]);
        let grammar = grammar(&definition);
        let usefulness = Usefulness::new(&grammar);
        let s = grammar.nonterminal("S").unwrap();
        let a = grammar.nonterminal("A").unwrap();
        let z = grammar.nonterminal("Z").unwrap();

        assert!(usefulness.reaches(s, a));
        assert!(usefulness.reaches(z, a));
        assert!(!usefulness.reaches(s, z));
        assert_eq!(
            validate(&grammar),
            Ok(vec![Diagnostic::UnreachableNonterminal {
                nonterminal: "Z".into()
            }])
        );
    }
}
