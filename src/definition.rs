//! Grammar definitions by name, as supplied by the grammar author.
//!
//! A definition is plain data. It becomes a [`Grammar`](crate::Grammar) once all names are
//! resolved against the terminal vocabulary and the set of defined nonterminals.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rule_builder::RuleBuilder;

/// A reference to a symbol, by name.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum SymbolRef {
    /// A reserved keyword.
    Terminal(String),
    /// Any lexeme that is not a reserved keyword.
    Identifier,
    /// The end of input.
    EndOfInput,
    /// A nonterminal.
    Nonterminal(String),
}

/// All alternatives of one nonterminal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RuleDefinition {
    /// Name of the nonterminal.
    pub name: String,
    /// Ordered alternatives. An empty alternative derives the empty string.
    pub alternatives: Vec<Vec<SymbolRef>>,
}

/// A grammar, by name.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GrammarDefinition {
    /// Reserved keywords.
    pub keywords: Vec<String>,
    /// Nonterminal definitions, in declaration order.
    pub rules: Vec<RuleDefinition>,
    /// Name of the start nonterminal. Defaults to the first defined rule.
    pub start: Option<String>,
}

/// Refers to a reserved keyword.
pub fn terminal(name: impl Into<String>) -> SymbolRef {
    SymbolRef::Terminal(name.into())
}

/// Refers to a nonterminal.
pub fn nonterminal(name: impl Into<String>) -> SymbolRef {
    SymbolRef::Nonterminal(name.into())
}

/// Refers to the identifier class.
pub fn identifier() -> SymbolRef {
    SymbolRef::Identifier
}

/// Refers to the end of input.
pub fn end_of_input() -> SymbolRef {
    SymbolRef::EndOfInput
}

impl GrammarDefinition {
    /// Creates an empty definition with the given reserved keywords.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GrammarDefinition {
            keywords: keywords.into_iter().map(Into::into).collect(),
            rules: vec![],
            start: None,
        }
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, name: impl Into<String>) -> RuleBuilder {
        RuleBuilder::new(self).rule(name)
    }

    /// Assigns the start nonterminal.
    pub fn set_start(&mut self, name: impl Into<String>) {
        self.start = Some(name.into());
    }

    /// Returns the name of the start nonterminal.
    pub fn start_name(&self) -> Option<&str> {
        self.start
            .as_deref()
            .or_else(|| self.rules.first().map(|rule| &rule.name[..]))
    }

    /// Adds an alternative to the named rule, declaring the rule if necessary.
    pub fn add_alternative(&mut self, name: &str, alternative: Vec<SymbolRef>) {
        match self.rules.iter_mut().find(|rule| rule.name == name) {
            Some(rule) => rule.alternatives.push(alternative),
            None => self.rules.push(RuleDefinition {
                name: name.to_string(),
                alternatives: vec![alternative],
            }),
        }
    }

    /// Declares a rule without adding alternatives.
    pub fn declare(&mut self, name: &str) {
        if !self.rules.iter().any(|rule| rule.name == name) {
            self.rules.push(RuleDefinition {
                name: name.to_string(),
                alternatives: vec![],
            });
        }
    }
}
