use cfg_ll1::definition::{end_of_input, nonterminal, terminal};
use cfg_ll1::GrammarDefinition;

/// `S ::= A $end | ()`, `A ::= "a" A | ()`.
pub fn grammar() -> GrammarDefinition {
    let mut definition = GrammarDefinition::new(["a"]);
    definition
        .rule("S")
        .rhs([nonterminal("A"), end_of_input()])
        .empty()
        .rule("A")
        .rhs([terminal("a"), nonterminal("A")])
        .empty();
    definition
}
