//! Errors and diagnostics.

use std::error::Error;
use std::fmt;

/// Represents an error in the grammar, found while analyzing it.
///
/// Each of these aborts the analysis. There is no parsing table for a grammar
/// that has any of them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// An alternative refers to a keyword that is not in the vocabulary, or to
    /// a nonterminal that has no rule.
    UndeclaredSymbol {
        /// The nonterminal whose alternative holds the reference.
        nonterminal: String,
        /// The name of the undeclared symbol.
        symbol: String,
    },
    /// A keyword is spelled like the end of input, the identifier class or EMPTY.
    ReservedName {
        /// The offending keyword.
        keyword: String,
    },
    /// The start nonterminal has no rule.
    UndeclaredStart {
        /// The requested start symbol, if any was given.
        start: Option<String>,
    },
    /// A nonterminal never bottoms out at a terminal or the empty alternative
    /// within first-symbol analysis.
    NonTerminatingGrammar {
        /// The offending nonterminal.
        nonterminal: String,
    },
    /// Two alternatives of one nonterminal are selected by the same lookahead.
    /// The grammar is not LL(1).
    TableConflict {
        /// The nonterminal.
        nonterminal: String,
        /// The shared lookahead terminal.
        terminal: String,
        /// The alternative already in the table cell.
        first: usize,
        /// The competing alternative.
        second: usize,
    },
    /// FOLLOW set computation did not reach a fixpoint.
    FollowSetsDiverged {
        /// The number of passes made before giving up.
        passes: usize,
    },
}

/// Represents an error encountered by the predictive parser. The parse in progress
/// is over, but the parser may be reset and reused.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The lookahead selects no alternative of the active nonterminal.
    UnexpectedToken {
        /// The active nonterminal.
        nonterminal: String,
        /// The lookahead terminal.
        token: String,
    },
    /// The expected terminal differs from the lookahead.
    TokenMismatch {
        /// The terminal required by the grammar.
        expected: String,
        /// The lookahead terminal.
        actual: String,
    },
    /// Input continued after the start nonterminal was complete.
    InputAfterEnd {
        /// The surplus terminal.
        token: String,
    },
}

/// A non-fatal finding about the grammar.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Diagnostic {
    /// Two alternatives of a nonterminal begin with the same terminal, or can
    /// both derive the empty string. The parsing table may still resolve this.
    AmbiguousFirstSet {
        /// The nonterminal.
        nonterminal: String,
        /// The shared terminal, or `None` for EMPTY.
        terminal: Option<String>,
        /// The first two alternatives that share it.
        alternatives: (usize, usize),
    },
    /// A nonterminal cannot be reached from the start nonterminal.
    UnreachableNonterminal {
        /// The nonterminal.
        nonterminal: String,
    },
    /// A nonterminal has no alternatives, so no input can complete it.
    EmptyNonterminal {
        /// The nonterminal.
        nonterminal: String,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::UndeclaredSymbol {
                nonterminal,
                symbol,
            } => {
                write!(
                    f,
                    "undeclared symbol `{}` in an alternative of `{}`",
                    symbol, nonterminal
                )
            }
            GrammarError::ReservedName { keyword } => {
                write!(f, "keyword `{}` is a reserved name", keyword)
            }
            GrammarError::UndeclaredStart { start: Some(start) } => {
                write!(f, "start nonterminal `{}` has no rule", start)
            }
            GrammarError::UndeclaredStart { start: None } => {
                write!(f, "grammar has no rules")
            }
            GrammarError::NonTerminatingGrammar { nonterminal } => {
                write!(f, "nonterminal `{}` is not terminating", nonterminal)
            }
            GrammarError::TableConflict {
                nonterminal,
                terminal,
                first,
                second,
            } => {
                write!(
                    f,
                    "grammar is not LL(1): `{}` on `{}` selects both alternative {} and {}",
                    nonterminal, terminal, first, second
                )
            }
            GrammarError::FollowSetsDiverged { passes } => {
                write!(f, "FOLLOW sets did not converge after {} passes", passes)
            }
        }
    }
}

impl Error for GrammarError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { nonterminal, token } => {
                write!(f, "unexpected token `{}` in `{}`", token, nonterminal)
            }
            ParseError::TokenMismatch { expected, actual } => {
                write!(f, "expected `{}`, found `{}`", expected, actual)
            }
            ParseError::InputAfterEnd { token } => {
                write!(f, "token `{}` after the end of input", token)
            }
        }
    }
}

impl Error for ParseError {}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::AmbiguousFirstSet {
                nonterminal,
                terminal,
                alternatives: (first, second),
            } => {
                write!(
                    f,
                    "`{}` has `{}` in the FIRST sets of alternatives {} and {}",
                    nonterminal,
                    terminal.as_deref().unwrap_or(crate::prediction::EMPTY_NAME),
                    first,
                    second
                )
            }
            Diagnostic::UnreachableNonterminal { nonterminal } => {
                write!(f, "nonterminal `{}` is unreachable", nonterminal)
            }
            Diagnostic::EmptyNonterminal { nonterminal } => {
                write!(f, "nonterminal `{}` has no alternatives", nonterminal)
            }
        }
    }
}
