//! Definitions of the resolved grammar type and its rules.

use std::fmt::{self, Write};

use crate::definition::{GrammarDefinition, SymbolRef};
use crate::error::GrammarError;
use crate::prediction::EMPTY_NAME;
use crate::symbol::{Nonterminal, Symbol, Terminal, Vocabulary, END_OF_INPUT_NAME, IDENTIFIER_NAME};

/// Names that reports give to the special terminals and to EMPTY.
const RESERVED_NAMES: [&str; 3] = [END_OF_INPUT_NAME, IDENTIFIER_NAME, EMPTY_NAME];

/// An alternative of a nonterminal: an ordered sequence of symbols, possibly empty.
pub type Production = Vec<Symbol>;

/// Context-free grammar type, with every name resolved.
///
/// The grammar is immutable once built. Analysis results and parsers borrow it.
#[derive(Clone, Debug)]
pub struct Grammar {
    /// The terminal vocabulary.
    vocabulary: Vocabulary,
    /// Nonterminals in declaration order.
    nonterminals: Vec<NonterminalRule>,
    /// The start nonterminal.
    start: Nonterminal,
}

/// A nonterminal together with its ordered alternatives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NonterminalRule {
    /// The nonterminal's name.
    pub name: String,
    /// The nonterminal's alternatives. Alternative indices are table values.
    pub alternatives: Vec<Production>,
}

/// Reference to a single alternative in a grammar.
#[derive(Clone, Copy, Debug)]
pub struct RuleRef<'a> {
    /// The rule's left-hand side nonterminal.
    pub lhs: Nonterminal,
    /// The alternative's index among the alternatives of `lhs`.
    pub alternative: usize,
    /// The rule's right-hand side symbols.
    pub rhs: &'a [Symbol],
}

impl Grammar {
    /// Resolves a grammar definition.
    ///
    /// Fails if a keyword is spelled like a reserved name, if an alternative refers to
    /// an undeclared keyword or nonterminal, or if the start nonterminal has no rule.
    pub fn new(definition: &GrammarDefinition) -> Result<Self, GrammarError> {
        if let Some(keyword) = definition
            .keywords
            .iter()
            .find(|keyword| RESERVED_NAMES.contains(&&keyword[..]))
        {
            return Err(GrammarError::ReservedName {
                keyword: keyword.clone(),
            });
        }
        let vocabulary = Vocabulary::new(&definition.keywords);
        let mut nonterminals: Vec<NonterminalRule> = vec![];
        for rule in &definition.rules {
            // Repeated rules contribute further alternatives.
            if !nonterminals.iter().any(|nonterminal| nonterminal.name == rule.name) {
                nonterminals.push(NonterminalRule {
                    name: rule.name.clone(),
                    alternatives: vec![],
                });
            }
        }
        let lookup = |name: &str| {
            nonterminals
                .iter()
                .position(|nonterminal| nonterminal.name == name)
                .map(Nonterminal::from)
        };

        let mut resolved = vec![vec![]; nonterminals.len()];
        for rule in &definition.rules {
            let lhs = lookup(&rule.name).expect("rule was declared above");
            for alternative in &rule.alternatives {
                let mut production = Production::with_capacity(alternative.len());
                for sym in alternative {
                    let resolved_sym = match sym {
                        SymbolRef::Terminal(name) => {
                            vocabulary.keyword(name).map(Symbol::from).ok_or(name)
                        }
                        SymbolRef::Identifier => Ok(Symbol::from(Terminal::IDENTIFIER)),
                        SymbolRef::EndOfInput => Ok(Symbol::from(Terminal::END_OF_INPUT)),
                        SymbolRef::Nonterminal(name) => lookup(name).map(Symbol::from).ok_or(name),
                    };
                    let resolved_sym =
                        resolved_sym.map_err(|name| GrammarError::UndeclaredSymbol {
                            nonterminal: rule.name.clone(),
                            symbol: name.clone(),
                        })?;
                    production.push(resolved_sym);
                }
                resolved[lhs.usize()].push(production);
            }
        }

        let start = match definition.start_name() {
            Some(name) => lookup(name).ok_or_else(|| GrammarError::UndeclaredStart {
                start: Some(name.to_string()),
            })?,
            None => return Err(GrammarError::UndeclaredStart { start: None }),
        };

        for (nonterminal, alternatives) in nonterminals.iter_mut().zip(resolved) {
            nonterminal.alternatives = alternatives;
        }

        Ok(Grammar {
            vocabulary,
            nonterminals,
            start,
        })
    }

    /// Returns the terminal vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns the start nonterminal.
    pub fn start(&self) -> Nonterminal {
        self.start
    }

    /// Returns the number of nonterminals.
    pub fn num_nonterminals(&self) -> usize {
        self.nonterminals.len()
    }

    /// Iterates over all nonterminals, in declaration order.
    pub fn nonterminals(&self) -> impl Iterator<Item = Nonterminal> {
        (0..self.nonterminals.len()).map(Nonterminal::from)
    }

    /// Looks up a nonterminal by name.
    pub fn nonterminal(&self, name: &str) -> Option<Nonterminal> {
        self.nonterminals
            .iter()
            .position(|nonterminal| nonterminal.name == name)
            .map(Nonterminal::from)
    }

    /// Returns the alternatives of a nonterminal.
    pub fn alternatives(&self, nonterminal: Nonterminal) -> &[Production] {
        &self.nonterminals[nonterminal.usize()].alternatives
    }

    /// Returns the name of a nonterminal.
    pub fn name(&self, nonterminal: Nonterminal) -> &str {
        &self.nonterminals[nonterminal.usize()].name
    }

    /// Returns the name of a terminal.
    pub fn terminal_name(&self, terminal: Terminal) -> &str {
        self.vocabulary.name(terminal)
    }

    /// Returns the name of any symbol.
    pub fn symbol_name(&self, sym: Symbol) -> &str {
        match sym {
            Symbol::Terminal(terminal) => self.terminal_name(terminal),
            Symbol::Nonterminal(nonterminal) => self.name(nonterminal),
        }
    }

    /// Iterates over every alternative of every nonterminal.
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_>> {
        self.nonterminals.iter().enumerate().flat_map(|(id, rule)| {
            rule.alternatives
                .iter()
                .enumerate()
                .map(move |(alternative, rhs)| RuleRef {
                    lhs: Nonterminal::from(id),
                    alternative,
                    rhs: &rhs[..],
                })
        })
    }

    /// Formats the grammar in BNF, one line per nonterminal.
    pub fn stringify_to_bnf(&self) -> String {
        let mut result = String::new();
        for rule in &self.nonterminals {
            let alternatives = rule
                .alternatives
                .iter()
                .map(|rhs| {
                    if rhs.is_empty() {
                        "()".to_string()
                    } else {
                        rhs.iter()
                            .map(|&sym| match sym {
                                Symbol::Terminal(terminal) if terminal.is_keyword() => {
                                    format!("{:?}", self.terminal_name(terminal))
                                }
                                sym => self.symbol_name(sym).to_string(),
                            })
                            .collect::<Vec<_>>()
                            .join(" ")
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(&mut result, "{} ::= {};", rule.name, alternatives)
                .expect("writing to String failed");
        }
        result
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.stringify_to_bnf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::*;

    #[test]
    fn resolves_names() {
        let mut definition = GrammarDefinition::new(["a"]);
        definition
            .rule("S")
            .rhs([nonterminal("A"), end_of_input()])
            .rule("A")
            .rhs([terminal("a"), nonterminal("A")])
            .rhs([identifier()])
            .empty();
        let grammar = Grammar::new(&definition).unwrap();

        let s = grammar.nonterminal("S").unwrap();
        let a = grammar.nonterminal("A").unwrap();
        let a_keyword = grammar.vocabulary().keyword("a").unwrap();
        assert_eq!(grammar.start(), s);
        assert_eq!(
            grammar.alternatives(s),
            &[vec![Symbol::from(a), Symbol::from(Terminal::END_OF_INPUT)]]
        );
        assert_eq!(grammar.alternatives(a).len(), 3);
        assert_eq!(grammar.alternatives(a)[0], vec![Symbol::from(a_keyword), Symbol::from(a)]);
        assert_eq!(grammar.rules().count(), 4);
        assert_eq!(
            grammar.stringify_to_bnf(),
            "S ::= A $end;\nA ::= \"a\" A | $identifier | ();\n"
        );
    }

    #[test]
    fn terminal_and_nonterminal_namespaces_are_disjoint() {
        let mut definition = GrammarDefinition::new(["A"]);
        definition
            .rule("S")
            .rhs([terminal("A"), nonterminal("A")])
            .rule("A")
            .empty();
        let grammar = Grammar::new(&definition).unwrap();
        let s = grammar.nonterminal("S").unwrap();

        assert!(matches!(grammar.alternatives(s)[0][0], Symbol::Terminal(_)));
        assert!(matches!(grammar.alternatives(s)[0][1], Symbol::Nonterminal(_)));
    }

    #[test]
    fn undeclared_symbols() {
        let mut definition = GrammarDefinition::new(["a"]);
        definition.rule("S").rhs([terminal("b")]);
        assert_eq!(
            Grammar::new(&definition).unwrap_err(),
            GrammarError::UndeclaredSymbol {
                nonterminal: "S".into(),
                symbol: "b".into(),
            }
        );

        let mut definition = GrammarDefinition::new(["a"]);
        definition.rule("S").rhs([terminal("a"), nonterminal("T")]);
        assert_eq!(
            Grammar::new(&definition).unwrap_err(),
            GrammarError::UndeclaredSymbol {
                nonterminal: "S".into(),
                symbol: "T".into(),
            }
        );
    }

    #[test]
    fn reserved_keyword_names() {
        for reserved in ["$end", "$identifier", "EMPTY"] {
            let mut definition = GrammarDefinition::new(["a", reserved]);
            definition.rule("S").rhs([terminal(reserved)]).rhs([end_of_input()]);
            assert_eq!(
                Grammar::new(&definition).unwrap_err(),
                GrammarError::ReservedName {
                    keyword: reserved.into()
                }
            );
        }
    }

    #[test]
    fn undeclared_start() {
        let mut definition = GrammarDefinition::new(["a"]);
        definition.rule("S").rhs([terminal("a")]);
        definition.set_start("T");
        assert_eq!(
            Grammar::new(&definition).unwrap_err(),
            GrammarError::UndeclaredStart {
                start: Some("T".into())
            }
        );
        assert_eq!(
            Grammar::new(&GrammarDefinition::new(["a"])).unwrap_err(),
            GrammarError::UndeclaredStart { start: None }
        );
    }
}
