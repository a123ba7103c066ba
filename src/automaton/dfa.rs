use std::{borrow::Borrow, fmt::Display};

use itertools::Itertools;
use tracing::trace;

use crate::{
    alphabet::Alphabet,
    error::{AlphabetError, DomainError},
    gnfa::Gnfa,
    kleene::KleeneStar,
    math::{Bijection, IndexSet},
    regex::Regex,
    transition_system::{run::Columns, TransitionMatrix},
    Show, StateId, Symbol,
};

use super::DFABuilder;

/// A deterministic finite automaton (DFA). It accepts a finite word if the state that is reached by
/// reading the word from the initial state is accepting.
///
/// States and symbols are identified with dense indices, the transition function is a complete
/// [`TransitionMatrix`]. The regular expression denoting the accepted language is synthesized
/// once during construction and stays available through [`DFA::regex`] for the lifetime of the
/// automaton, which is immutable after construction.
#[derive(Clone, Debug)]
pub struct DFA<Q: StateId = String, S: Symbol = char> {
    pub(super) states: Bijection<Q, usize>,
    pub(super) alphabet: Alphabet<S>,
    pub(super) matrix: TransitionMatrix,
    pub(super) initial: usize,
    pub(super) accepting: IndexSet,
    regex: Regex,
}

impl<Q: StateId, S: Symbol> DFA<Q, S> {
    /// Returns a [`DFABuilder`] to assemble the definition of a DFA piece by piece.
    pub fn builder() -> DFABuilder<Q, S> {
        DFABuilder::default()
    }

    /// Constructs a DFA from its raw definition. If `prune_unreachable` is set, states that
    /// cannot be reached from `initial` are discarded first, which yields the same language but
    /// usually a shorter regular expression.
    pub fn construct<SI, AI, TI, FI>(
        states: SI,
        alphabet: AI,
        transitions: TI,
        initial: Q,
        accepting: FI,
        prune_unreachable: bool,
    ) -> Result<Self, DomainError>
    where
        SI: IntoIterator<Item = Q>,
        AI: IntoIterator<Item = S>,
        TI: IntoIterator<Item = (Q, S, Q)>,
        FI: IntoIterator<Item = Q>,
    {
        Self::builder()
            .with_states(states)
            .with_alphabet(alphabet)
            .with_transitions(transitions)
            .with_initial(initial)
            .with_accepting(accepting)
            .prune_unreachable(prune_unreachable)
            .into_dfa()
    }

    /// Same as [`DFA::construct`] with pruning of unreachable states enabled.
    pub fn new<SI, AI, TI, FI>(
        states: SI,
        alphabet: AI,
        transitions: TI,
        initial: Q,
        accepting: FI,
    ) -> Result<Self, DomainError>
    where
        SI: IntoIterator<Item = Q>,
        AI: IntoIterator<Item = S>,
        TI: IntoIterator<Item = (Q, S, Q)>,
        FI: IntoIterator<Item = Q>,
    {
        Self::construct(states, alphabet, transitions, initial, accepting, true)
    }

    /// Assembles a validated definition, prunes it if requested and synthesizes the regex.
    pub(super) fn from_parts(
        states: Bijection<Q, usize>,
        alphabet: Alphabet<S>,
        matrix: TransitionMatrix,
        initial: usize,
        accepting: IndexSet,
        prune_unreachable: bool,
    ) -> Self {
        let mut dfa = Self {
            states,
            alphabet,
            matrix,
            initial,
            accepting,
            regex: Regex::empty_language(),
        };
        if prune_unreachable {
            dfa.remove_unreachable();
        }
        dfa.regex = Gnfa::from_dfa(&dfa).into_regex();
        dfa
    }

    /// The alphabet over which the accepted language is defined.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// The dense transition matrix.
    pub fn transitions(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// The number of states.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// The index of the initial state.
    pub fn initial(&self) -> usize {
        self.initial
    }

    /// Returns `true` if the state with index `state` is accepting.
    pub fn is_accepting(&self, state: usize) -> bool {
        self.accepting.contains(state)
    }

    /// Iterates over the indices of all accepting states in ascending order.
    pub fn accepting_states(&self) -> impl Iterator<Item = usize> + '_ {
        self.accepting.iter()
    }

    /// The identifier of the state with index `state`.
    pub fn state_id(&self, state: usize) -> Option<&Q> {
        self.states.get_by_right(&state)
    }

    /// The index of the state identified by `id`. States that were pruned have no index.
    pub fn state_index(&self, id: &Q) -> Option<usize> {
        self.states.get_by_left(id).copied()
    }

    /// The successor of the state with index `state` on the symbol in column `column`.
    pub fn successor(&self, state: usize, column: usize) -> Option<usize> {
        (state < self.size() && column < self.alphabet.size())
            .then(|| self.matrix.successor(state, column))
    }

    /// Returns the index of the state that is reached by reading `word` from the initial state.
    /// Fails on the first symbol that does not belong to the alphabet.
    pub fn reached_state<W>(&self, word: W) -> Result<usize, AlphabetError>
    where
        W: IntoIterator,
        W::Item: Borrow<S>,
    {
        let reached = self
            .matrix
            .run_from(self.initial, Columns::new(&self.alphabet, word.into_iter()))?;
        trace!("run from {} reached {}", self.initial, reached);
        Ok(reached)
    }

    /// Decides whether `word` belongs to the accepted language. Fails on the first symbol that
    /// does not belong to the alphabet, in which case the rest of the word is not read.
    pub fn accepts<W>(&self, word: W) -> Result<bool, AlphabetError>
    where
        W: IntoIterator,
        W::Item: Borrow<S>,
    {
        self.reached_state(word).map(|q| self.is_accepting(q))
    }

    /// The regular expression denoting precisely the accepted language.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The text of [`DFA::regex`].
    pub fn to_regex_text(&self) -> String {
        self.regex.to_string()
    }

    /// Returns `true` if no word at all is accepted.
    pub fn is_empty_language(&self) -> bool {
        self.regex.is_empty_language()
    }

    /// Iterates over all accepted words of length at most `max_len` in length-lexicographic
    /// order, where symbols are ordered as in the alphabet.
    pub fn accepted_words_up_to(&self, max_len: usize) -> impl Iterator<Item = Vec<S>> + '_ {
        KleeneStar::new((0..self.alphabet.size()).collect_vec())
            .take_while(move |columns| columns.len() <= max_len)
            .filter(move |columns| {
                self.is_accepting(self.matrix.run_columns(self.initial, columns.iter().copied()))
            })
            .map(move |columns| {
                columns
                    .into_iter()
                    .filter_map(|column| self.alphabet.nth(column).cloned())
                    .collect()
            })
    }

    /// Renders the transition table. The initial state is prefixed with `->` and accepting states
    /// are marked with a trailing `*`.
    pub fn transition_table(&self) -> String {
        let name = |state: usize| {
            self.state_id(state)
                .map(Show::show)
                .unwrap_or_else(|| state.to_string())
        };
        self.matrix.build_transition_table(
            self.alphabet.universe().map(Show::show),
            |state| {
                format!(
                    "{}{}{}",
                    if state == self.initial { "->" } else { "" },
                    name(state),
                    if self.is_accepting(state) { "*" } else { "" }
                )
            },
            &name,
        )
    }
}

impl<Q: StateId, S: Symbol> Display for DFA<Q, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.regex)
    }
}
