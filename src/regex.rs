//! A small algebra for building regular expressions. Expressions are only ever built, never
//! parsed: the three operations [`Regex::star`], [`Regex::concat`] and [`Regex::union`] consume
//! their operands and produce a new expression whose text carries exactly the parentheses that
//! the precedence of the operators requires.

use std::fmt::Display;

use crate::Show;

/// The operators of a regular expression ordered by how tightly they bind, from tightest to
/// loosest. An [`Operation::Atom`] is a single symbol, which never needs to be parenthesized.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Operation {
    /// No operator was applied.
    Atom,
    /// Kleene star.
    Star,
    /// Concatenation.
    Concat,
    /// Union, also known as alternation.
    Union,
}

/// A regular expression over some alphabet of symbols.
///
/// The two sentinels [`Regex::EmptyLanguage`] and [`Regex::EmptyString`] are absorbed by the
/// operations wherever the algebra allows it, so they only show up in the text when they cannot
/// be simplified away.
///
/// # Example
/// ```
/// use kleene::prelude::*;
///
/// let a = Regex::from_symbol(&'a');
/// let b = Regex::from_symbol(&'b');
/// let re = a.clone().union(b).star().concat(a);
/// assert_eq!(re.to_string(), "(a|b)*a");
/// assert_eq!(Regex::empty_language().star(), Regex::empty_string());
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Regex {
    /// Denotes no strings at all, rendered as `{}`.
    EmptyLanguage,
    /// Denotes only the empty string, rendered as `''`.
    EmptyString,
    /// A proper expression together with the loosest operator that was applied to build it.
    Expression {
        /// The rendered text.
        text: String,
        /// The loosest operator occurring at the top level of `text`.
        binding: Operation,
    },
}

impl Regex {
    /// Textual representation of [`Regex::EmptyLanguage`].
    pub const EMPTY_LANGUAGE: &'static str = "{}";
    /// Textual representation of [`Regex::EmptyString`].
    pub const EMPTY_STRING: &'static str = "''";
    /// Characters that are escaped when they occur in a symbol.
    const METACHARACTERS: &'static str = "\\|*()[]{}.+?^$'";

    /// The expression denoting no strings.
    pub fn empty_language() -> Self {
        Regex::EmptyLanguage
    }

    /// The expression denoting exactly the empty string.
    pub fn empty_string() -> Self {
        Regex::EmptyString
    }

    /// The expression matching exactly the given symbol. Characters with a meaning in regex
    /// syntax are escaped with a backslash, so `|` becomes `\|`. A symbol rendered with more than
    /// one character is treated like a concatenation and gets parenthesized below a star.
    pub fn from_symbol<S: Show + ?Sized>(symbol: &S) -> Self {
        let shown = symbol.show();
        let mut text = String::with_capacity(shown.len());
        for c in shown.chars() {
            if Self::METACHARACTERS.contains(c) {
                text.push('\\');
            }
            text.push(c);
        }
        let binding = if shown.chars().nth(1).is_some() {
            Operation::Concat
        } else {
            Operation::Atom
        };
        Regex::Expression { text, binding }
    }

    /// Returns `true` if `self` is the empty language sentinel.
    pub fn is_empty_language(&self) -> bool {
        matches!(self, Regex::EmptyLanguage)
    }

    /// Returns `true` if `self` is the empty string sentinel.
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Regex::EmptyString)
    }

    /// The loosest operator at the top level of `self`. Sentinels behave like atoms.
    pub fn binding(&self) -> Operation {
        match self {
            Regex::Expression { binding, .. } => *binding,
            _ => Operation::Atom,
        }
    }

    /// Renders `self` as operand of `op`, which puts parentheses around it if it is held
    /// together by an operator binding less tightly than `op`.
    fn operand(&self, op: Operation) -> String {
        if op < self.binding() {
            format!("({})", self)
        } else {
            self.to_string()
        }
    }

    /// Kleene star. The star of either sentinel is the empty string and starring an expression
    /// that is already starred leaves it as is.
    pub fn star(self) -> Self {
        match self {
            Regex::EmptyLanguage | Regex::EmptyString => Regex::EmptyString,
            Regex::Expression {
                binding: Operation::Star,
                ..
            } => self,
            expression => Regex::Expression {
                text: format!("{}*", expression.operand(Operation::Star)),
                binding: Operation::Star,
            },
        }
    }

    /// Concatenation of `self` followed by `other`. The empty language absorbs, the empty string
    /// is neutral.
    pub fn concat(self, other: Regex) -> Self {
        match (self, other) {
            (_, Regex::EmptyLanguage) | (Regex::EmptyLanguage, _) => Regex::EmptyLanguage,
            (Regex::EmptyString, other) => other,
            (this, Regex::EmptyString) => this,
            (this, other) => Regex::Expression {
                text: format!(
                    "{}{}",
                    this.operand(Operation::Concat),
                    other.operand(Operation::Concat)
                ),
                binding: Operation::Concat,
            },
        }
    }

    /// Union of `self` and `other`, with `self` on the left. The empty language is neutral.
    pub fn union(self, other: Regex) -> Self {
        match (self, other) {
            (Regex::EmptyLanguage, other) => other,
            (this, Regex::EmptyLanguage) => this,
            (this, other) => Regex::Expression {
                text: format!(
                    "{}|{}",
                    this.operand(Operation::Union),
                    other.operand(Operation::Union)
                ),
                binding: Operation::Union,
            },
        }
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Regex::EmptyLanguage => write!(f, "{}", Self::EMPTY_LANGUAGE),
            Regex::EmptyString => write!(f, "{}", Self::EMPTY_STRING),
            Regex::Expression { text, .. } => write!(f, "{}", text),
        }
    }
}

impl Show for Regex {
    fn show(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Operation, Regex};

    fn sym(c: char) -> Regex {
        Regex::from_symbol(&c)
    }

    #[test]
    fn absorption_laws() {
        let x = sym('a').union(sym('b')).star();
        assert_eq!(
            Regex::empty_language().concat(x.clone()),
            Regex::empty_language()
        );
        assert_eq!(
            x.clone().concat(Regex::empty_language()),
            Regex::empty_language()
        );
        assert_eq!(Regex::empty_language().union(x.clone()), x);
        assert_eq!(x.clone().union(Regex::empty_language()), x);
        assert_eq!(Regex::empty_string().concat(x.clone()), x);
        assert_eq!(x.clone().concat(Regex::empty_string()), x);
        assert_eq!(Regex::empty_language().star(), Regex::empty_string());
        assert_eq!(Regex::empty_string().star(), Regex::empty_string());
        assert_eq!(
            Regex::empty_string().concat(Regex::empty_language()),
            Regex::empty_language()
        );
    }

    #[test]
    fn sentinels_render() {
        assert_eq!(Regex::empty_language().to_string(), "{}");
        assert_eq!(Regex::empty_string().to_string(), "''");
        assert_eq!(sym('a').union(Regex::empty_string()).to_string(), "a|''");
        assert_eq!(
            sym('a').union(Regex::empty_string()).star().to_string(),
            "(a|'')*"
        );
    }

    #[test]
    fn parenthesization_follows_precedence() {
        let ab = sym('a').concat(sym('b'));
        assert_eq!(ab.to_string(), "ab");
        assert_eq!(ab.binding(), Operation::Concat);
        assert_eq!(ab.clone().star().to_string(), "(ab)*");

        let a_or_b = sym('a').union(sym('b'));
        assert_eq!(a_or_b.clone().concat(sym('c')).to_string(), "(a|b)c");
        assert_eq!(sym('c').concat(a_or_b.clone()).to_string(), "c(a|b)");
        assert_eq!(a_or_b.clone().union(ab.clone()).to_string(), "a|b|ab");
        assert_eq!(ab.clone().union(a_or_b.clone()).to_string(), "ab|a|b");
        assert_eq!(a_or_b.star().to_string(), "(a|b)*");

        let a_star = sym('a').star();
        assert_eq!(a_star.clone().concat(sym('b')).to_string(), "a*b");
        assert_eq!(a_star.clone().union(sym('b')).to_string(), "a*|b");
        assert_eq!(ab.concat(a_star).to_string(), "aba*");
    }

    #[test]
    fn star_is_idempotent() {
        let a_star = sym('a').star();
        assert_eq!(a_star.clone().star(), a_star);
        assert_eq!(a_star.star().to_string(), "a*");
    }

    #[test]
    fn symbols_are_escaped() {
        assert_eq!(sym('|').to_string(), "\\|");
        assert_eq!(sym('*').star().to_string(), "\\**");
        assert_eq!(sym('(').concat(sym('a')).to_string(), "\\(a");
        assert_eq!(sym('\'').to_string(), "\\'");

        let word = Regex::from_symbol("ab");
        assert_eq!(word.binding(), Operation::Concat);
        assert_eq!(word.clone().star().to_string(), "(ab)*");
        assert_eq!(word.union(sym('c')).to_string(), "ab|c");
    }

    #[test]
    fn union_keeps_operand_order() {
        assert_eq!(sym('b').union(sym('a')).to_string(), "b|a");
        assert_eq!(sym('a').union(sym('b')).to_string(), "a|b");
    }
}
