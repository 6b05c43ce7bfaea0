//! LL(1) analysis of context-free grammars, and a table-driven predictive parser.
//!
//! A grammar is defined by name with a [`GrammarDefinition`], resolved into a [`Grammar`],
//! validated, and analyzed into FIRST sets, FOLLOW sets and a [`ParseTable`]. A
//! [`Parser`] then consumes tokens one at a time against that table.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod analysis;
pub mod definition;
pub mod error;
pub mod grammar;
pub mod parser;
pub mod prediction;
pub mod rule_builder;
pub mod symbol;
pub mod table;
pub mod usefulness;

pub use crate::analysis::{Analysis, AnalysisReport};
pub use crate::definition::{GrammarDefinition, SymbolRef};
pub use crate::error::{Diagnostic, GrammarError, ParseError};
pub use crate::grammar::Grammar;
pub use crate::parser::{Consumed, Parser, ParserState};
pub use crate::prediction::{FirstSets, FollowSets, PredictSets};
pub use crate::symbol::{Nonterminal, Symbol, Terminal, Vocabulary};
pub use crate::table::ParseTable;
