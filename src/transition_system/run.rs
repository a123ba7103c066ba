use std::borrow::Borrow;

use crate::{alphabet::Alphabet, error::AlphabetError, Show, Symbol};

use super::TransitionMatrix;

/// Translates a word into the columns of its symbols. Yields an [`AlphabetError`] for the first
/// symbol that is not part of the alphabet.
#[derive(Debug, Clone)]
pub struct Columns<'a, S: Symbol, W> {
    alphabet: &'a Alphabet<S>,
    word: W,
}

impl<'a, S: Symbol, W> Columns<'a, S, W> {
    /// Creates a new instance for the given alphabet and iterator over symbols.
    pub fn new(alphabet: &'a Alphabet<S>, word: W) -> Self {
        Self { alphabet, word }
    }
}

impl<'a, S, W> Iterator for Columns<'a, S, W>
where
    S: Symbol,
    W: Iterator,
    W::Item: Borrow<S>,
{
    type Item = Result<usize, AlphabetError>;

    fn next(&mut self) -> Option<Self::Item> {
        let symbol = self.word.next()?;
        let symbol = symbol.borrow();
        Some(self.alphabet.position(symbol).ok_or_else(|| AlphabetError {
            symbol: symbol.show(),
        }))
    }
}

impl TransitionMatrix {
    /// Folds the given columns through the matrix starting in `origin` and returns the state that
    /// is reached. The first error stops the run, no further columns are consumed.
    pub(crate) fn run_from<I, E>(&self, origin: usize, columns: I) -> Result<usize, E>
    where
        I: IntoIterator<Item = Result<usize, E>>,
    {
        columns
            .into_iter()
            .try_fold(origin, |state, column| Ok(self.successor(state, column?)))
    }

    /// Like [`TransitionMatrix::run_from`], but for columns that are known to be valid.
    pub(crate) fn run_columns<I>(&self, origin: usize, columns: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        columns
            .into_iter()
            .fold(origin, |state, column| self.successor(state, column))
    }
}
