use thiserror::Error;

use crate::input::ParseError;

/// Raised when a DFA definition is malformed. Construction either succeeds completely or fails
/// with one of these, the offending identifier is rendered through [`crate::Show`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("state {0} is declared more than once")]
    DuplicateState(String),
    #[error("symbol {0} is declared more than once")]
    DuplicateSymbol(String),
    #[error("no initial state was given")]
    NoInitialState,
    #[error("initial state {0} is not a declared state")]
    UnknownInitialState(String),
    #[error("transition refers to undeclared state {0}")]
    UnknownState(String),
    #[error("transition refers to symbol {0}, which is not in the alphabet")]
    UnknownSymbol(String),
    #[error("accepting state {0} is not a declared state")]
    UnknownAcceptingState(String),
    #[error("no transition from state {state} on symbol {symbol}")]
    MissingTransition { state: String, symbol: String },
    #[error("state {state} has more than one target on symbol {symbol}")]
    ConflictingTransition { state: String, symbol: String },
}

/// Raised when a word that is run through a DFA contains a symbol outside of its alphabet.
/// The automaton itself stays valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{symbol}' is not contained in this DFA's alphabet.")]
pub struct AlphabetError {
    pub symbol: String,
}

/// Every error the crate can produce.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
