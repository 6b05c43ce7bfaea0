use cfg_ll1::definition::{end_of_input, identifier, nonterminal as n, terminal as t};
use cfg_ll1::GrammarDefinition;

/// Arithmetic expressions without left recursion.
pub fn grammar() -> GrammarDefinition {
    let mut definition = GrammarDefinition::new(["+", "*", "(", ")"]);
    definition
        .rule("Program")
        .rhs([n("E"), end_of_input()])
        .rule("E")
        .rhs([n("T"), n("E'")])
        .rule("E'")
        .rhs([t("+"), n("T"), n("E'")])
        .empty()
        .rule("T")
        .rhs([n("F"), n("T'")])
        .rule("T'")
        .rhs([t("*"), n("F"), n("T'")])
        .empty()
        .rule("F")
        .rhs([t("("), n("E"), t(")")])
        .rhs([identifier()]);
    definition
}
