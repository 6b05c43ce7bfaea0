//! Symbols of a resolved grammar. Terminals and nonterminals are distinguished by their
//! variant and identified by dense IDs.

pub mod set;
mod vocabulary;

pub use self::set::{FirstSet, TerminalSet};
pub use self::vocabulary::{Vocabulary, END_OF_INPUT_NAME, IDENTIFIER_NAME, UNKNOWN_NAME};

/// The representation of symbol IDs.
pub type SymbolRepr = u32;

/// A terminal symbol: a reserved keyword, the identifier class, or the end of input.
///
/// Terminals are numbered by their position in the [`Vocabulary`].
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Terminal(SymbolRepr);

/// A nonterminal symbol, numbered in declaration order.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Nonterminal(SymbolRepr);

/// A resolved grammar symbol.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Symbol {
    /// A terminal.
    Terminal(Terminal),
    /// A reference to a nonterminal.
    Nonterminal(Nonterminal),
}

impl Terminal {
    /// The end of input.
    pub const END_OF_INPUT: Terminal = Terminal(0);
    /// Matches any lexeme that is not a reserved keyword.
    pub const IDENTIFIER: Terminal = Terminal(1);

    /// Cast the terminal's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }

    /// Checks whether this is a reserved keyword, as opposed to one of
    /// the two special terminals.
    pub fn is_keyword(self) -> bool {
        self.0 > Terminal::IDENTIFIER.0
    }
}

impl Nonterminal {
    /// Cast the nonterminal's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for Terminal {
    #[inline]
    fn from(id: usize) -> Self {
        Terminal(id as SymbolRepr)
    }
}

impl From<usize> for Nonterminal {
    #[inline]
    fn from(id: usize) -> Self {
        Nonterminal(id as SymbolRepr)
    }
}

impl From<Terminal> for Symbol {
    fn from(terminal: Terminal) -> Self {
        Symbol::Terminal(terminal)
    }
}

impl From<Nonterminal> for Symbol {
    fn from(nonterminal: Nonterminal) -> Self {
        Symbol::Nonterminal(nonterminal)
    }
}

impl Symbol {
    /// Returns the terminal, if this symbol is one.
    pub fn terminal(self) -> Option<Terminal> {
        match self {
            Symbol::Terminal(terminal) => Some(terminal),
            Symbol::Nonterminal(_) => None,
        }
    }

    /// Returns the nonterminal, if this symbol is one.
    pub fn nonterminal(self) -> Option<Nonterminal> {
        match self {
            Symbol::Terminal(_) => None,
            Symbol::Nonterminal(nonterminal) => Some(nonterminal),
        }
    }
}
