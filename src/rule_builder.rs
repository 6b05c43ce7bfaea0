//! Grammar rules can be built with the builder pattern.

use std::iter;

use crate::definition::{GrammarDefinition, SymbolRef};

/// The rule builder.
pub struct RuleBuilder<'a> {
    name: Option<String>,
    definition: &'a mut GrammarDefinition,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder.
    pub fn new(definition: &'a mut GrammarDefinition) -> Self {
        RuleBuilder {
            name: None,
            definition,
        }
    }

    /// Starts building a new rule with the given name. Alternatives are appended to
    /// any that the rule already has.
    pub fn rule(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.definition.declare(&name);
        self.name = Some(name);
        self
    }

    /// Adds an alternative to the current rule.
    ///
    /// # Panics
    ///
    /// Panics if no rule was started.
    pub fn rhs<I>(self, syms: I) -> Self
    where
        I: IntoIterator<Item = SymbolRef>,
    {
        let name = self.name.as_deref().expect("rhs called before rule");
        self.definition
            .add_alternative(name, syms.into_iter().collect());
        self
    }

    /// Adds the empty alternative to the current rule.
    pub fn empty(self) -> Self {
        self.rhs(iter::empty())
    }

    /// Makes the current rule the start nonterminal.
    pub fn start(self) -> Self {
        if let Some(name) = &self.name {
            self.definition.set_start(name.clone());
        }
        self
    }
}
