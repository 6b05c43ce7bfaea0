//! The analysis pipeline, run once per grammar: resolution, validation, FIRST sets,
//! FOLLOW sets and the parsing table.

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::definition::GrammarDefinition;
use crate::error::{Diagnostic, GrammarError};
use crate::grammar::Grammar;
use crate::parser::Parser;
use crate::prediction::{FirstSets, FollowSets, PerSymbolSets, PredictSets};
use crate::table::{ParseTable, TableReport};
use crate::usefulness;

/// Everything computed from one grammar. Immutable, and shared by any number of
/// parsers.
#[derive(Clone, Debug)]
pub struct Analysis {
    grammar: Grammar,
    first_sets: FirstSets,
    follow_sets: FollowSets,
    table: ParseTable,
    diagnostics: Vec<Diagnostic>,
}

/// Analysis results by name, for consumption by external tooling.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AnalysisReport {
    /// FIRST set of every nonterminal, with `EMPTY` when applicable.
    pub first_sets: PerSymbolSets,
    /// FOLLOW set of every nonterminal.
    pub follow_sets: PerSymbolSets,
    /// The parsing table.
    pub table: TableReport,
    /// The number of passes the FOLLOW set computation took.
    pub follow_passes: usize,
}

impl Analysis {
    /// Runs the full pipeline. The first error aborts it.
    pub fn new(definition: &GrammarDefinition) -> Result<Self, GrammarError> {
        let grammar = Grammar::new(definition)?;
        Analysis::from_grammar(grammar)
    }

    /// Runs the pipeline on a resolved grammar.
    pub fn from_grammar(grammar: Grammar) -> Result<Self, GrammarError> {
        let mut diagnostics = usefulness::validate(&grammar)?;
        let first_sets = FirstSets::new(&grammar);
        diagnostics.extend(first_sets.diagnostics().iter().cloned());
        let follow_sets = FollowSets::new(&grammar, &first_sets)?;
        let table = ParseTable::new(&grammar, &first_sets, &follow_sets)?;
        debug!(
            "analyzed {} nonterminals with {} diagnostics",
            grammar.num_nonterminals(),
            diagnostics.len()
        );
        Ok(Analysis {
            grammar,
            first_sets,
            follow_sets,
            table,
            diagnostics,
        })
    }

    /// Returns the resolved grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Returns the FIRST sets.
    pub fn first_sets(&self) -> &FirstSets {
        &self.first_sets
    }

    /// Returns the FOLLOW sets.
    pub fn follow_sets(&self) -> &FollowSets {
        &self.follow_sets
    }

    /// Returns the parsing table.
    pub fn table(&self) -> &ParseTable {
        &self.table
    }

    /// Returns non-fatal findings: unreachable nonterminals, nonterminals without
    /// alternatives, then overlapping FIRST sets.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics[..]
    }

    /// Creates a parser starting at the grammar's start nonterminal.
    pub fn parser(&self) -> Parser<'_> {
        Parser::new(&self.grammar, &self.table, self.grammar.start())
    }

    /// Returns all artifacts by name.
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            first_sets: self.first_sets.predict_sets(&self.grammar),
            follow_sets: self.follow_sets.predict_sets(&self.grammar),
            table: self.table.report(&self.grammar),
            follow_passes: self.follow_sets.passes(),
        }
    }
}
