//! The terminal vocabulary.

use std::collections::HashMap;

use super::Terminal;

/// Name under which the end of input appears in reports.
pub const END_OF_INPUT_NAME: &str = "$end";
/// Name under which the identifier class appears in reports.
pub const IDENTIFIER_NAME: &str = "$identifier";
/// Name given to a terminal outside the vocabulary.
pub const UNKNOWN_NAME: &str = "$unknown";

/// The set of terminals known to a grammar: the reserved keywords, followed by the
/// identifier class and the end of input.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Reserved keywords, in declaration order.
    keywords: Vec<String>,
    /// Mapping from keyword spellings to terminals.
    lookup: HashMap<String, Terminal>,
}

impl Vocabulary {
    /// Creates a vocabulary from a list of reserved keywords. Repeated keywords
    /// map to their first occurrence.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut this = Vocabulary::default();
        for keyword in keywords {
            this.reserve(keyword.as_ref());
        }
        this
    }

    fn reserve(&mut self, keyword: &str) -> Terminal {
        if let Some(&terminal) = self.lookup.get(keyword) {
            return terminal;
        }
        let terminal = Terminal::from(Terminal::IDENTIFIER.usize() + 1 + self.keywords.len());
        self.keywords.push(keyword.to_string());
        self.lookup.insert(keyword.to_string(), terminal);
        terminal
    }

    /// Returns the number of terminals, including the identifier class and the end of input.
    pub fn len(&self) -> usize {
        self.keywords.len() + 2
    }

    /// A vocabulary always contains the two special terminals.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Looks up a reserved keyword.
    pub fn keyword(&self, name: &str) -> Option<Terminal> {
        self.lookup.get(name).copied()
    }

    /// Classifies a raw lexeme. A lexeme equal to a reserved keyword is that keyword,
    /// any other lexeme is an identifier, and the exhausted stream is the end of input.
    pub fn classify(&self, lexeme: Option<&str>) -> Terminal {
        match lexeme {
            None => Terminal::END_OF_INPUT,
            Some(lexeme) => self.keyword(lexeme).unwrap_or(Terminal::IDENTIFIER),
        }
    }

    /// Returns the name of a terminal, or `$unknown` for a terminal outside
    /// the vocabulary.
    pub fn name(&self, terminal: Terminal) -> &str {
        match terminal {
            Terminal::END_OF_INPUT => END_OF_INPUT_NAME,
            Terminal::IDENTIFIER => IDENTIFIER_NAME,
            keyword => self
                .keywords
                .get(keyword.usize() - Terminal::IDENTIFIER.usize() - 1)
                .map_or(UNKNOWN_NAME, |name| &name[..]),
        }
    }

    /// Iterates over all terminals.
    pub fn terminals(&self) -> impl Iterator<Item = Terminal> {
        (0..self.len()).map(Terminal::from)
    }
}
