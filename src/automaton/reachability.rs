use std::collections::VecDeque;

use tracing::debug;

use crate::{
    math::{Bijection, IndexSet},
    transition_system::TransitionMatrix,
    StateId, Symbol, DFA,
};

/// Returns the indices of all states that can be reached from `origin`, in the order in which a
/// breadth-first traversal visits them. `origin` always comes first.
fn reachable_from(matrix: &TransitionMatrix, origin: usize) -> Vec<usize> {
    let mut seen = IndexSet::with_capacity(matrix.size());
    seen.insert(origin);
    let mut queue = VecDeque::from([origin]);
    let mut order = Vec::with_capacity(matrix.size());

    while let Some(q) = queue.pop_front() {
        order.push(q);
        for &p in matrix.row(q) {
            if seen.insert(p) {
                queue.push_back(p);
            }
        }
    }
    order
}

impl<Q: StateId, S: Symbol> DFA<Q, S> {
    /// Returns the indices of all states that are reachable from the initial state, in the order
    /// of a breadth-first traversal.
    pub fn reachable_state_indices(&self) -> Vec<usize> {
        reachable_from(&self.matrix, self.initial)
    }

    /// Discards all states that are not reachable from the initial state. The remaining states are
    /// renumbered contiguously in the order in which they were visited, so the initial state
    /// becomes state `0`, even if nothing is removed. Returns the number of removed states.
    pub(crate) fn remove_unreachable(&mut self) -> usize {
        let order = self.reachable_state_indices();
        let removed = self.size() - order.len();

        let mut renumbering = vec![None; self.size()];
        for (new, &old) in order.iter().enumerate() {
            renumbering[old] = Some(new);
        }

        self.matrix = self.matrix.restrict(&order, &renumbering);
        // the traversal starts in the initial state
        self.initial = 0;
        self.accepting = self
            .accepting
            .iter()
            .filter_map(|q| renumbering[q])
            .collect();
        self.states = std::mem::replace(&mut self.states, Bijection::new())
            .into_iter()
            .filter_map(|(id, old)| renumbering[old].map(|new| (id, new)))
            .collect();

        debug!(
            "removed {removed} unreachable states, {} remain",
            order.len()
        );
        removed
    }
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, tests::wiki_builder};

    #[test]
    fn reachable_states() {
        let dfa = wiki_builder().prune_unreachable(false).into_dfa().unwrap();
        assert_eq!(dfa.reachable_state_indices(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test_log::test]
    fn unreachable_states_are_dropped() {
        let mut dfa = wiki_builder().prune_unreachable(false).into_dfa().unwrap();
        assert_eq!(dfa.remove_unreachable(), 2);
        assert_eq!(dfa.size(), 6);
        assert_eq!(dfa.state_index(&6), None);
        assert_eq!(dfa.state_index(&7), None);
        assert_eq!(dfa.accepting_states().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(dfa.remove_unreachable(), 0);
    }

    #[test]
    fn renumbering_follows_visitation_order() {
        // state `c` is initial, `a` is unreachable
        let dfa = DFA::builder()
            .with_states(['a', 'b', 'c'])
            .with_alphabet([0u8])
            .with_transitions([('a', 0, 'b'), ('b', 0, 'b'), ('c', 0, 'b')])
            .with_initial('c')
            .with_accepting(['a', 'b'])
            .into_dfa()
            .unwrap();
        assert_eq!(dfa.size(), 2);
        assert_eq!(dfa.initial(), 0);
        assert_eq!(dfa.state_id(0), Some(&'c'));
        assert_eq!(dfa.state_id(1), Some(&'b'));
        assert_eq!(dfa.successor(0, 0), Some(1));
        assert_eq!(dfa.accepting_states().collect::<Vec<_>>(), vec![1]);
        assert_eq!(dfa.accepts([0u8]), Ok(true));
        assert_eq!(dfa.accepts(std::iter::empty::<u8>()), Ok(false));
    }

    #[test]
    fn renumbering_without_removal() {
        let dfa = DFA::new(
            ["x", "y"],
            ['a'],
            [("x", 'a', "y"), ("y", 'a', "x")],
            "y",
            ["y"],
        )
        .unwrap();
        assert_eq!(dfa.size(), 2);
        assert_eq!(dfa.initial(), 0);
        assert_eq!(dfa.state_index(&"y"), Some(0));
        assert_eq!(dfa.accepting_states().collect::<Vec<_>>(), vec![0]);
        assert_eq!(dfa.accepts("aa".chars()), Ok(true));
        assert_eq!(dfa.accepts("a".chars()), Ok(false));
    }
}
