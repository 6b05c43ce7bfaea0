//! The predictive parser: a pushdown automaton driven by the LL(1) table, fed one
//! token at a time.

use log::trace;
use optional::Optioned;

use crate::error::ParseError;
use crate::grammar::Grammar;
use crate::symbol::{Nonterminal, Symbol, Terminal};
use crate::table::ParseTable;

/// A single stack frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParserState {
    /// The nonterminal being expanded.
    pub nonterminal: Nonterminal,
    /// The chosen alternative, or none while undecided.
    pub alternative: Optioned<u32>,
    /// Position within the chosen alternative's symbols.
    pub position: u32,
}

/// The outcome of a successful call to [`Parser::feed`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Consumed {
    /// The token was matched and the parse goes on.
    Matched,
    /// The token was matched and completed the start nonterminal.
    Accepted,
}

/// An incremental predictive parser. The grammar and table are shared; the stack
/// is owned.
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    grammar: &'a Grammar,
    table: &'a ParseTable,
    start: Nonterminal,
    stack: Vec<ParserState>,
}

impl ParserState {
    fn undecided(nonterminal: Nonterminal) -> Self {
        ParserState {
            nonterminal,
            alternative: Optioned::none(),
            position: 0,
        }
    }
}

impl<'a> Parser<'a> {
    /// Creates a parser with a single undecided frame for `start`.
    pub fn new(grammar: &'a Grammar, table: &'a ParseTable, start: Nonterminal) -> Self {
        let mut this = Parser {
            grammar,
            table,
            start,
            stack: vec![],
        };
        this.reset();
        this
    }

    /// Replaces the stack with the initial state.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.stack.push(ParserState::undecided(self.start));
    }

    /// Returns the stack, bottom first.
    pub fn stack(&self) -> &[ParserState] {
        &self.stack[..]
    }

    /// Checks whether the start nonterminal is complete.
    pub fn is_accepted(&self) -> bool {
        self.stack.is_empty()
    }

    /// Feeds one raw lexeme, or `None` once the stream is exhausted.
    pub fn feed(&mut self, lexeme: Option<&str>) -> Result<Consumed, ParseError> {
        let terminal = self.grammar.vocabulary().classify(lexeme);
        self.feed_terminal(terminal)
    }

    /// Feeds one classified token. The token is either consumed, possibly after
    /// expanding and completing several frames, or rejected. A terminal outside the
    /// grammar's vocabulary is rejected and reported as `$unknown`.
    pub fn feed_terminal(&mut self, token: Terminal) -> Result<Consumed, ParseError> {
        let grammar = self.grammar;
        loop {
            let top = match self.stack.last() {
                Some(&top) => top,
                None => {
                    return Err(ParseError::InputAfterEnd {
                        token: grammar.terminal_name(token).to_string(),
                    })
                }
            };
            if top.alternative.is_none() {
                self.decide(top.nonterminal, token)?;
                continue;
            }
            let alternative = top.alternative.unpack() as usize;
            let rhs = &grammar.alternatives(top.nonterminal)[alternative];
            match rhs.get(top.position as usize) {
                None => {
                    self.complete();
                    if self.stack.is_empty() {
                        // The start nonterminal completed without consuming the token.
                        return Err(ParseError::UnexpectedToken {
                            nonterminal: grammar.name(top.nonterminal).to_string(),
                            token: grammar.terminal_name(token).to_string(),
                        });
                    }
                }
                Some(&Symbol::Nonterminal(nonterminal)) => {
                    trace!("expand {}", grammar.name(nonterminal));
                    self.stack.push(ParserState::undecided(nonterminal));
                }
                Some(&Symbol::Terminal(expected)) if expected == token => {
                    self.advance();
                    while self.top_is_complete() {
                        self.complete();
                    }
                    return Ok(if self.stack.is_empty() {
                        Consumed::Accepted
                    } else {
                        Consumed::Matched
                    });
                }
                Some(&Symbol::Terminal(expected)) => {
                    return Err(ParseError::TokenMismatch {
                        expected: grammar.terminal_name(expected).to_string(),
                        actual: grammar.terminal_name(token).to_string(),
                    });
                }
            }
        }
    }

    /// Fixes the alternative of the top frame. Consumes nothing.
    fn decide(&mut self, nonterminal: Nonterminal, token: Terminal) -> Result<(), ParseError> {
        let alternative =
            self.table
                .get(nonterminal, token)
                .ok_or_else(|| ParseError::UnexpectedToken {
                    nonterminal: self.grammar.name(nonterminal).to_string(),
                    token: self.grammar.terminal_name(token).to_string(),
                })?;
        trace!(
            "decide {} -> alternative {}",
            self.grammar.name(nonterminal),
            alternative
        );
        if let Some(top) = self.stack.last_mut() {
            top.alternative = Optioned::some(alternative as u32);
            top.position = 0;
        }
        Ok(())
    }

    fn advance(&mut self) {
        if let Some(top) = self.stack.last_mut() {
            top.position += 1;
        }
    }

    /// Pops a finished frame. The completed nonterminal counts as one symbol of
    /// its parent.
    fn complete(&mut self) {
        self.stack.pop();
        self.advance();
    }

    fn top_is_complete(&self) -> bool {
        match self.stack.last() {
            Some(top) if top.alternative.is_some() => {
                let alternative = top.alternative.unpack() as usize;
                let rhs = &self.grammar.alternatives(top.nonterminal)[alternative];
                top.position as usize >= rhs.len()
            }
            _ => false,
        }
    }
}
