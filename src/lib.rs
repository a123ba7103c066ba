//! Deterministic finite automata (DFA) that know which regular expression they are equivalent to.
//!
//! A [`DFA`] is built from a raw definition consisting of a list of states, an alphabet, a list of
//! transitions, an initial state and a set of accepting states. States and symbols may be of any
//! type implementing [`StateId`] respectively [`Symbol`], internally both are identified with dense
//! indices so that the transition function becomes a complete matrix (see
//! [`transition_system::TransitionMatrix`]). Unless told otherwise, construction first discards all states
//! that cannot be reached from the initial state and renumbers the remaining ones.
//!
//! Upon construction, the automaton is converted into an equivalent regular expression through
//! Kleene's theorem: the DFA is turned into a generalized automaton (see [`gnfa::Gnfa`]) whose
//! edges are labelled by regular expressions, and its states are eliminated one after another
//! until a single edge from a synthetic start to a synthetic accepting state remains. The label
//! of that edge is cached in the automaton and can be obtained through [`DFA::regex`] or by
//! simply printing the automaton. The expressions are built with the algebra in [`regex`], which
//! takes care of simplifying away the empty language and the empty string and of putting just
//! the parentheses that operator precedence requires.
//!
//! ```
//! use kleene::prelude::*;
//!
//! // accepts exactly the words with an odd number of `a`s
//! let dfa = DFA::builder()
//!     .with_states(["q0", "q1"])
//!     .with_alphabet(['a', 'b'])
//!     .with_transitions([
//!         ("q0", 'a', "q1"),
//!         ("q0", 'b', "q0"),
//!         ("q1", 'a', "q0"),
//!         ("q1", 'b', "q1"),
//!     ])
//!     .with_initial("q0")
//!     .with_accepting(["q1"])
//!     .into_dfa()
//!     .unwrap();
//!
//! assert_eq!(dfa.accepts("aba".chars()), Ok(false));
//! assert_eq!(dfa.accepts("ab".chars()), Ok(true));
//! assert!(dfa.accepts("abc".chars()).is_err());
//! println!("{}", dfa.regex());
//! ```

use std::{fmt::Debug, hash::Hash};

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use kleene::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::Alphabet,
        automaton::{DFABuilder, DFA},
        error::{AlphabetError, DomainError, Error},
        gnfa::Gnfa,
        kleene::KleeneStar,
        math,
        regex::{Operation, Regex},
        transition_system::TransitionMatrix,
        Show, StateId, Symbol,
    };
}

/// Collection types used throughout the crate.
pub mod math;

mod show;
pub use show::Show;

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;

/// Errors raised while constructing, running and reading automata.
pub mod error;

pub mod regex;

/// The dense transition matrix of a DFA and running words through it.
pub mod transition_system;

/// Defines the [`DFA`], how it is built and how unreachable states are pruned.
#[allow(clippy::upper_case_acronyms)]
pub mod automaton;
pub use automaton::DFA;

/// Generalized finite automata and state elimination.
pub mod gnfa;

/// Enumeration of words in length-lexicographic order.
pub mod kleene;

/// Reading DFA definitions from a line-based text format.
pub mod input;

/// Implements the generation of random DFA definitions.
#[cfg(feature = "random")]
pub mod random;

/// A state identifier. This is simply a type that can be hashed, compared and shown, which is all
/// that is needed to map it to a dense index.
pub trait StateId: Clone + Eq + Hash + Debug + Show {}

impl<T: Clone + Eq + Hash + Debug + Show> StateId for T {}

/// A symbol of an alphabet. Its [`Show`] representation is what appears in synthesized regular
/// expressions.
pub trait Symbol: Clone + Eq + Hash + Debug + Show {}

impl<T: Clone + Eq + Hash + Debug + Show> Symbol for T {}

#[cfg(test)]
pub(crate) mod tests {
    use itertools::Itertools;

    use crate::prelude::*;

    /// Scenario with one state looping on `a`, which denotes `a*`.
    pub fn a_star_dfa() -> DFA<&'static str, char> {
        DFA::builder()
            .with_states(["q0"])
            .with_alphabet(['a'])
            .with_transitions([("q0", 'a', "q0")])
            .with_initial("q0")
            .with_accepting(["q0"])
            .into_dfa()
            .unwrap()
    }

    /// Accepts the words over `{a, b}` with an odd number of `a`s.
    pub fn odd_a_dfa() -> DFA<&'static str, char> {
        odd_a_builder().into_dfa().unwrap()
    }

    pub fn odd_a_builder() -> DFABuilder<&'static str, char> {
        DFA::builder()
            .with_states(["q0", "q1"])
            .with_alphabet(['a', 'b'])
            .with_transitions([
                ("q0", 'a', "q1"),
                ("q0", 'b', "q0"),
                ("q1", 'a', "q0"),
                ("q1", 'b', "q1"),
            ])
            .with_initial("q0")
            .with_accepting(["q1"])
    }

    /// The DFA from the wikipedia article on DFA minimization, with two extra states `6` and `7`
    /// that cannot be reached from the initial state `0`.
    pub fn wiki_builder() -> DFABuilder<u32, char> {
        DFA::builder()
            .with_states(0..8)
            .with_alphabet(['a', 'b'])
            .with_transitions([
                (0, 'a', 1),
                (0, 'b', 2),
                (1, 'a', 0),
                (1, 'b', 3),
                (2, 'a', 4),
                (2, 'b', 5),
                (3, 'a', 4),
                (3, 'b', 5),
                (4, 'a', 4),
                (4, 'b', 5),
                (5, 'a', 5),
                (5, 'b', 5),
                (6, 'a', 7),
                (6, 'b', 2),
                (7, 'a', 6),
                (7, 'b', 7),
            ])
            .with_initial(0)
            .with_accepting([2, 3, 4, 6])
    }

    /// Compiles the text of `regex` with the `regex` crate, anchored at both ends. Returns `None`
    /// for the empty language, which no word matches.
    pub fn compile(regex: &Regex) -> Option<::regex::Regex> {
        if regex.is_empty_language() {
            return None;
        }
        let text = regex.to_string().replace(Regex::EMPTY_STRING, "(?:)");
        Some(
            ::regex::Regex::new(&format!("^(?:{text})$"))
                .unwrap_or_else(|e| panic!("synthesized {regex} does not compile: {e}")),
        )
    }

    /// Asserts that the synthesized regex of `dfa` matches precisely the words up to length
    /// `max_len` that the automaton accepts.
    pub fn assert_language_equivalent<Q: StateId>(dfa: &DFA<Q, char>, max_len: usize) {
        let compiled = compile(dfa.regex());
        let symbols = dfa.alphabet().universe().copied().collect_vec();
        for word in KleeneStar::new(symbols).take_while(|w| w.len() <= max_len) {
            let text: String = word.iter().collect();
            let expected = dfa.accepts(word.iter()).unwrap();
            let matched = compiled.as_ref().is_some_and(|re| re.is_match(&text));
            assert_eq!(
                expected,
                matched,
                "regex {} disagrees with the automaton on {:?}",
                dfa.regex(),
                text
            );
        }
    }
}
