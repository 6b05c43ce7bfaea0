use cfg_ll1::definition::{end_of_input, identifier, nonterminal as n, terminal as t};
use cfg_ll1::GrammarDefinition;

pub const KEYWORDS: &[&str] = &[
    "Function", "End", "Equal", "Of", "Return", "Add", "Subtract", "Multiply", "Divide", "Is",
    "Equal", "To", "Is", "Less", "Than", "If", "Then", "EndIf", "Else", "While",
];

/// A small statement language with functions, conditionals, loops and operators.
pub fn grammar() -> GrammarDefinition {
    let mut definition = GrammarDefinition::new(KEYWORDS.iter().copied());
    definition
        .rule("Program")
        .rhs([n("GStatements"), end_of_input()])
        .rule("GStatements")
        .rhs([n("Function"), n("GStatements")])
        .rhs([n("Statement"), n("GStatements")])
        .empty()
        .rule("Function")
        .rhs([t("Function"), identifier(), n("Parameters"), n("FuncStates")])
        .rule("Parameters")
        .rhs([identifier(), n("Parameters")])
        .rhs([t("End")])
        .rule("Statements")
        .rhs([n("Statement"), n("Statements")])
        .rhs([t("End")])
        .rule("EndIfOrElse")
        .rhs([t("Else"), n("Statements")])
        .rhs([t("EndIf")])
        .rule("Statement")
        .rhs([
            t("If"),
            n("Statement"),
            t("Then"),
            n("Statements"),
            n("EndIfOrElse"),
        ])
        .rhs([t("While"), n("Statement"), n("Statements")])
        .rhs([n("TempStatement")])
        .rule("TempStates")
        .rhs([n("TempStatement"), n("TempStates")])
        .rhs([t("End")])
        .rule("TempStatement")
        .rhs([identifier(), n("StatementX")])
        .rule("StatementX")
        .rhs([n("Assignment")])
        .rhs([n("FunctionCall")])
        .rhs([n("Operation")])
        .empty()
        .rule("FuncStates")
        .rhs([n("FuncState"), n("FuncStates")])
        .rhs([t("End")])
        .rule("FuncState")
        .rhs([n("Statement")])
        .rhs([n("Return")])
        .rule("Assignment")
        .rhs([t("Equal"), n("Statement")])
        .rule("FunctionCall")
        .rhs([t("Of"), n("TempStates")])
        .rule("Operation")
        .rhs([n("Operator"), n("TempStatement")])
        .rule("Return")
        .rhs([t("Return"), n("TempStatement")])
        .rule("Operator")
        .rhs([t("Add")])
        .rhs([t("Subtract")])
        .rhs([t("Multiply")])
        .rhs([t("Divide")])
        .rhs([t("Is"), n("CmpOp")])
        .rule("CmpOp")
        .rhs([t("Less"), t("Than")])
        .rhs([t("Equal"), t("To")]);
    definition
}
