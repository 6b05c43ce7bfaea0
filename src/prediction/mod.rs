//! Prediction for predictive parsers: FIRST and FOLLOW set computation.

pub mod first;
pub mod follow;

use std::collections::{BTreeMap, BTreeSet};

use crate::grammar::Grammar;

pub use self::first::FirstSets;
pub use self::follow::{FollowCollector, FollowSets};

/// Name under which the EMPTY marker appears in reports.
pub const EMPTY_NAME: &str = "EMPTY";

/// The representation of FIRST and FOLLOW sets in reports: a mapping from
/// nonterminal names to terminal names.
pub type PerSymbolSets = BTreeMap<String, BTreeSet<String>>;

/// Sets of terminals computed for every nonterminal.
pub trait PredictSets {
    /// Returns the sets by name, for reporting.
    fn predict_sets(&self, grammar: &Grammar) -> PerSymbolSets;
}
