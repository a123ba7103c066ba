use std::fmt::Debug;

use itertools::Itertools;

use crate::{error::DomainError, math::Bijection, Show, Symbol};

/// An ordered, finite collection of symbols. Each symbol is identified with a dense column
/// index in `[0, size)`, which is what the transition matrix is indexed by.
///
/// # Example
/// ```
/// use kleene::prelude::*;
///
/// let alphabet = Alphabet::try_from_symbols(['a', 'b']).unwrap();
/// assert_eq!(alphabet.position(&'b'), Some(1));
/// assert_eq!(alphabet.nth(0), Some(&'a'));
/// assert!(Alphabet::try_from_symbols(['a', 'a']).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet<S: Symbol> {
    symbols: Bijection<S, usize>,
}

impl<S: Symbol> Alphabet<S> {
    /// Builds an alphabet from the given symbols, which receive their column in the order in
    /// which they are given. Fails if a symbol is declared twice.
    pub fn try_from_symbols<I>(symbols: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
    {
        let mut bijection = Bijection::new();
        for (column, symbol) in symbols.into_iter().enumerate() {
            let rendered = symbol.show();
            if bijection.insert_no_overwrite(symbol, column).is_err() {
                return Err(DomainError::DuplicateSymbol(rendered));
            }
        }
        Ok(Self { symbols: bijection })
    }

    /// The number of symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if there are no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The column of `symbol`, if it belongs to the alphabet.
    pub fn position(&self, symbol: &S) -> Option<usize> {
        self.symbols.get_by_left(symbol).copied()
    }

    /// The symbol sitting in column `column`.
    pub fn nth(&self, column: usize) -> Option<&S> {
        self.symbols.get_by_right(&column)
    }

    /// Iterates over all symbols in column order.
    pub fn universe(&self) -> impl Iterator<Item = &S> + '_ {
        (0..self.size()).filter_map(|column| self.nth(column))
    }
}

impl<S: Symbol> Debug for Alphabet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.universe().map(|sym| sym.show()).join(", "))
    }
}

impl<S: Symbol> Show for Alphabet<S> {
    fn show(&self) -> String {
        format!("{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Alphabet;
    use crate::error::DomainError;

    #[test]
    fn columns_follow_declaration_order() {
        let alphabet = Alphabet::try_from_symbols(['b', 'a', 'c']).unwrap();
        assert_eq!(alphabet.size(), 3);
        assert_eq!(alphabet.position(&'b'), Some(0));
        assert_eq!(alphabet.position(&'c'), Some(2));
        assert_eq!(alphabet.position(&'d'), None);
        assert_eq!(alphabet.universe().copied().collect::<Vec<_>>(), vec!['b', 'a', 'c']);
        assert_eq!(format!("{:?}", alphabet), "{b, a, c}");
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        assert_eq!(
            Alphabet::try_from_symbols(["zero", "one", "zero"]),
            Err(DomainError::DuplicateSymbol("zero".to_string()))
        );
    }

    #[test]
    fn empty_alphabet() {
        let alphabet = Alphabet::<char>::try_from_symbols([]).unwrap();
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.universe().count(), 0);
    }
}
