mod grammars;
mod support;

use cfg_ll1::definition::{end_of_input, identifier, nonterminal, terminal};
use cfg_ll1::usefulness::{self, Usefulness};
use cfg_ll1::{Analysis, Diagnostic, Grammar, GrammarDefinition, GrammarError};

#[test]
fn self_recursive_nonterminal_is_rejected() {
    support::init_logging();
    let mut definition = GrammarDefinition::new(Vec::<String>::new());
    definition.rule("X").rhs([nonterminal("X")]);

    assert_eq!(
        Analysis::new(&definition).err(),
        Some(GrammarError::NonTerminatingGrammar {
            nonterminal: "X".to_string()
        })
    );
}

#[test]
fn mutual_recursion_without_base_is_rejected() {
    support::init_logging();
    let mut definition = GrammarDefinition::new(["a"]);
    definition
        .rule("S")
        .rhs([nonterminal("A"), end_of_input()])
        .rule("A")
        .rhs([nonterminal("B")])
        .rule("B")
        .rhs([nonterminal("A")])
        .rhs([terminal("a")]);

    let error = Analysis::new(&definition).err();
    assert_eq!(
        error,
        Some(GrammarError::NonTerminatingGrammar {
            nonterminal: "S".to_string()
        })
    );
}

#[test]
fn undeclared_nonterminal() {
    let mut definition = GrammarDefinition::new(Vec::<String>::new());
    definition.rule("S").rhs([nonterminal("Missing")]);

    assert_eq!(
        Grammar::new(&definition).err(),
        Some(GrammarError::UndeclaredSymbol {
            nonterminal: "S".to_string(),
            symbol: "Missing".to_string(),
        })
    );
}

#[test]
fn undeclared_keyword() {
    let mut definition = GrammarDefinition::new(["a"]);
    definition.rule("S").rhs([terminal("b")]);

    assert_eq!(
        Grammar::new(&definition).err(),
        Some(GrammarError::UndeclaredSymbol {
            nonterminal: "S".to_string(),
            symbol: "b".to_string(),
        })
    );
}

#[test]
fn undeclared_start() {
    let mut definition = GrammarDefinition::new(Vec::<String>::new());
    definition.rule("S").rhs([identifier()]);
    definition.set_start("T");

    assert_eq!(
        Grammar::new(&definition).err(),
        Some(GrammarError::UndeclaredStart {
            start: Some("T".to_string())
        })
    );
    assert_eq!(
        Grammar::new(&GrammarDefinition::default()).err(),
        Some(GrammarError::UndeclaredStart { start: None })
    );
}

#[test]
fn unreachable_nonterminal_is_a_diagnostic() {
    let mut definition = grammars::minimal::grammar();
    definition.rule("Orphan").rhs([terminal("a")]);

    let analysis = support::analyze(&definition);
    assert_eq!(
        analysis.diagnostics(),
        &[Diagnostic::UnreachableNonterminal {
            nonterminal: "Orphan".to_string()
        }]
    );
}

#[test]
fn sample_grammars_are_useful() {
    for definition in [
        grammars::minimal::grammar(),
        grammars::arith::grammar(),
        grammars::statements::grammar(),
    ] {
        let grammar = Grammar::new(&definition).unwrap();
        let usefulness = Usefulness::new(&grammar);
        assert!(usefulness.all_productive());
        for nonterminal in grammar.nonterminals() {
            assert!(usefulness.is_reachable(nonterminal), "{}", grammar.name(nonterminal));
        }
        assert_eq!(usefulness::validate(&grammar), Ok(vec![]));
    }
}

#[test]
fn reachability_is_transitive() {
    let grammar = Grammar::new(&grammars::arith::grammar()).unwrap();
    let usefulness = Usefulness::new(&grammar);
    let program = grammar.nonterminal("Program").unwrap();
    let factor = grammar.nonterminal("F").unwrap();
    let expr = grammar.nonterminal("E").unwrap();

    assert!(usefulness.reaches(program, factor));
    assert!(usefulness.reaches(factor, expr));
    assert!(!usefulness.reaches(factor, program));
}

#[test]
fn nonterminal_without_alternatives_is_a_diagnostic() {
    let mut definition = GrammarDefinition::new(["a"]);
    definition
        .rule("S")
        .rhs([terminal("a"), nonterminal("E"), end_of_input()]);
    definition.declare("E");

    let analysis = support::analyze(&definition);
    assert_eq!(
        analysis.diagnostics(),
        &[Diagnostic::EmptyNonterminal {
            nonterminal: "E".to_string()
        }]
    );
    let mut parser = analysis.parser();
    assert!(parser.feed(Some("a")).is_ok());
    assert!(parser.feed(None).is_err());
}

#[test]
fn keywords_cannot_take_reserved_names() {
    support::init_logging();
    let mut definition = GrammarDefinition::new(["$end"]);
    definition
        .rule("S")
        .rhs([terminal("$end")])
        .rhs([end_of_input()]);

    assert_eq!(
        Analysis::new(&definition).err(),
        Some(GrammarError::ReservedName {
            keyword: "$end".to_string()
        })
    );

    let mut definition = GrammarDefinition::new(["x", "$identifier"]);
    definition.rule("S").rhs([identifier()]);
    assert_eq!(
        Grammar::new(&definition).err(),
        Some(GrammarError::ReservedName {
            keyword: "$identifier".to_string()
        })
    );
}
