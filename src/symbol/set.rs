//! Sets of terminals in the form of bit vectors.

use std::iter;

use bit_vec::BitVec;

use super::{Terminal, Vocabulary};

/// A set of terminals in the form of a bit vector, sized to a vocabulary.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TerminalSet {
    bit_vec: BitVec,
}

/// An iterator over a terminal set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

/// A FIRST set: leading terminals, together with the EMPTY marker.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FirstSet {
    /// Terminals that can begin a derivation.
    pub terminals: TerminalSet,
    /// Whether the empty string can be derived.
    pub empty: bool,
}

impl TerminalSet {
    /// Constructs an empty `TerminalSet` for the given vocabulary.
    pub fn new(vocabulary: &Vocabulary) -> Self {
        TerminalSet::with_len(vocabulary.len())
    }

    /// Constructs an empty `TerminalSet` for a vocabulary of `len` terminals.
    pub fn with_len(len: usize) -> Self {
        TerminalSet {
            bit_vec: BitVec::from_elem(len, false),
        }
    }

    /// Constructs a set holding a single terminal.
    pub fn singleton(vocabulary: &Vocabulary, terminal: Terminal) -> Self {
        let mut set = TerminalSet::new(vocabulary);
        set.insert(terminal);
        set
    }

    /// Adds a terminal. Returns whether the set has changed.
    pub fn insert(&mut self, terminal: Terminal) -> bool {
        let present = self.contains(terminal);
        self.bit_vec.set(terminal.usize(), true);
        !present
    }

    /// Checks whether a given terminal is in this set.
    pub fn contains(&self, terminal: Terminal) -> bool {
        self.bit_vec.get(terminal.usize()).unwrap_or(false)
    }

    /// Adds all terminals of another set of the same vocabulary.
    /// Returns whether the set has changed.
    pub fn union_with(&mut self, other: &TerminalSet) -> bool {
        self.bit_vec.or(&other.bit_vec)
    }

    /// Checks whether every terminal of this set is in `other`.
    pub fn is_subset(&self, other: &TerminalSet) -> bool {
        self.iter().all(|terminal| other.contains(terminal))
    }

    /// Returns the number of terminals in the set.
    pub fn len(&self) -> usize {
        self.bit_vec.iter().filter(|&present| present).count()
    }

    /// Checks whether the set holds no terminals.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.none()
    }

    /// Iterates over terminals in the set, in ascending order.
    pub fn iter(&self) -> Iter {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Terminal;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Terminal::from(id));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a TerminalSet {
    type Item = Terminal;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FirstSet {
    /// Constructs an empty FIRST set, without the EMPTY marker.
    pub fn new(vocabulary: &Vocabulary) -> Self {
        FirstSet::with_len(vocabulary.len())
    }

    /// Constructs an empty FIRST set for a vocabulary of `len` terminals.
    pub fn with_len(len: usize) -> Self {
        FirstSet {
            terminals: TerminalSet::with_len(len),
            empty: false,
        }
    }

    /// Adds everything from another FIRST set, including the marker.
    /// Returns whether the set has changed.
    pub fn union_with(&mut self, other: &FirstSet) -> bool {
        let changed = self.terminals.union_with(&other.terminals);
        let gained_empty = other.empty && !self.empty;
        self.empty |= other.empty;
        changed || gained_empty
    }
}
