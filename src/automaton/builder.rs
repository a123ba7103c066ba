use tracing::debug;

use crate::{
    alphabet::Alphabet,
    error::DomainError,
    math::{Bijection, IndexSet},
    transition_system::TransitionMatrix,
    Show, StateId, Symbol, DFA,
};

/// Helper struct for the construction of a [`DFA`]. It collects the raw definition, that is a list
/// of states, the alphabet, a list of transitions, the initial state and the accepting states.
/// Nothing is validated until [`DFABuilder::into_dfa`] is called. As the builder can be cloned,
/// the same definition can be turned into several automata, for example with and without pruning
/// of unreachable states.
///
/// # Example
///
/// We want to create a DFA with two states 0 and 1 over the alphabet `['a', 'b']` which accepts
/// all words that end with `b`.
/// ```
/// use kleene::prelude::*;
///
/// let dfa = DFA::builder()
///     .with_states([0, 1])
///     .with_alphabet(['a', 'b'])
///     .with_transitions([(0, 'a', 0), (0, 'b', 1), (1, 'a', 0), (1, 'b', 1)])
///     .with_initial(0)
///     .with_accepting([1])
///     .into_dfa()
///     .unwrap();
/// assert_eq!(dfa.accepts("aab".chars()), Ok(true));
/// ```
#[derive(Debug, Clone)]
pub struct DFABuilder<Q, S> {
    states: Vec<Q>,
    alphabet: Vec<S>,
    transitions: Vec<(Q, S, Q)>,
    initial: Option<Q>,
    accepting: Vec<Q>,
    prune_unreachable: bool,
}

impl<Q, S> Default for DFABuilder<Q, S> {
    fn default() -> Self {
        Self {
            states: vec![],
            alphabet: vec![],
            transitions: vec![],
            initial: None,
            accepting: vec![],
            prune_unreachable: true,
        }
    }
}

impl<Q: StateId, S: Symbol> DFABuilder<Q, S> {
    /// Declares states, their order determines their initial indices.
    pub fn with_states<I: IntoIterator<Item = Q>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Declares alphabet symbols, their order determines their columns.
    pub fn with_alphabet<I: IntoIterator<Item = S>>(mut self, symbols: I) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Adds transitions given as `(source, symbol, target)` triples.
    pub fn with_transitions<I: IntoIterator<Item = (Q, S, Q)>>(mut self, transitions: I) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Sets the initial state, replacing a previously set one.
    pub fn with_initial(mut self, initial: Q) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Marks the given states as accepting.
    pub fn with_accepting<I: IntoIterator<Item = Q>>(mut self, accepting: I) -> Self {
        self.accepting.extend(accepting);
        self
    }

    /// Determines whether states that cannot be reached from the initial state are discarded
    /// before the regular expression is synthesized. This is enabled by default and does not
    /// change the accepted language.
    pub fn prune_unreachable(mut self, prune: bool) -> Self {
        self.prune_unreachable = prune;
        self
    }

    /// Validates the definition and builds the [`DFA`], which includes synthesizing its regular
    /// expression. Fails with a [`DomainError`] naming the first offending identifier.
    pub fn into_dfa(self) -> Result<DFA<Q, S>, DomainError> {
        let mut states = Bijection::new();
        for (index, state) in self.states.into_iter().enumerate() {
            let rendered = state.show();
            if states.insert_no_overwrite(state, index).is_err() {
                return Err(DomainError::DuplicateState(rendered));
            }
        }
        let alphabet = Alphabet::try_from_symbols(self.alphabet)?;

        let initial = self.initial.ok_or(DomainError::NoInitialState)?;
        let initial = *states
            .get_by_left(&initial)
            .ok_or_else(|| DomainError::UnknownInitialState(initial.show()))?;

        let size = states.len();
        let width = alphabet.size();
        let index_of = |state: &Q| {
            states
                .get_by_left(state)
                .copied()
                .ok_or_else(|| DomainError::UnknownState(state.show()))
        };

        let mut cells: Vec<Option<usize>> = vec![None; size * width];
        for (source, symbol, target) in &self.transitions {
            let p = index_of(source)?;
            let column = alphabet
                .position(symbol)
                .ok_or_else(|| DomainError::UnknownSymbol(symbol.show()))?;
            let q = index_of(target)?;
            match cells[p * width + column] {
                None => cells[p * width + column] = Some(q),
                Some(existing) if existing == q => {}
                Some(_) => {
                    return Err(DomainError::ConflictingTransition {
                        state: source.show(),
                        symbol: symbol.show(),
                    })
                }
            }
        }

        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(position, cell)| {
                cell.ok_or_else(|| DomainError::MissingTransition {
                    state: states
                        .get_by_right(&(position / width))
                        .map(Show::show)
                        .unwrap_or_default(),
                    symbol: alphabet
                        .nth(position % width)
                        .map(Show::show)
                        .unwrap_or_default(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut accepting = IndexSet::with_capacity(size);
        for state in &self.accepting {
            let index = states
                .get_by_left(state)
                .ok_or_else(|| DomainError::UnknownAcceptingState(state.show()))?;
            accepting.insert(*index);
        }

        debug!(
            "building DFA with {size} states, {} transitions and {} accepting states over {:?}",
            cells.len(),
            accepting.len(),
            alphabet
        );

        Ok(DFA::from_parts(
            states,
            alphabet,
            TransitionMatrix::from_cells(size, width, cells),
            initial,
            accepting,
            self.prune_unreachable,
        ))
    }
}
