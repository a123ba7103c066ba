use tracing::{debug, trace};

use crate::{
    math::{OrderedMap, Set},
    regex::Regex,
    Show, StateId, Symbol, DFA,
};

/// A generalized finite automaton, whose edges are labelled by regular expressions instead of
/// single symbols. It serves as scaffolding for converting a [`DFA`] into an equivalent regular
/// expression by means of state elimination.
///
/// For a DFA with `n` states, the states `0..n` are those of the DFA, state `n` is a synthetic
/// start state with a single empty-string edge to the initial state and state `n + 1` is a
/// synthetic accepting state, which every accepting state of the DFA has an empty-string edge to.
/// Eliminating the states `0..n` one after another leaves a single edge from the start to the
/// accepting state, whose label is the result.
#[derive(Debug, Clone)]
pub struct Gnfa {
    /// Outgoing edges of every state, keyed by target.
    edges: Vec<OrderedMap<usize, Regex>>,
    /// For every state, the states that have an edge into it.
    predecessors: Vec<Set<usize>>,
    /// Number of states that stem from the DFA.
    original: usize,
}

impl Gnfa {
    /// Builds the generalized automaton for `dfa`. All symbols leading from one state to the
    /// same target are united into the label of a single edge.
    pub fn from_dfa<Q: StateId, S: Symbol>(dfa: &DFA<Q, S>) -> Self {
        let n = dfa.size();
        let mut gnfa = Self {
            edges: vec![OrderedMap::new(); n + 2],
            predecessors: vec![Set::default(); n + 2],
            original: n,
        };

        for (q, row) in dfa.transitions().rows().enumerate() {
            for (symbol, &p) in dfa.alphabet().universe().zip(row) {
                gnfa.add_edge(q, p, Regex::from_symbol(symbol));
            }
            if dfa.is_accepting(q) {
                gnfa.add_edge(q, gnfa.accept(), Regex::empty_string());
            }
        }
        gnfa.add_edge(gnfa.start(), dfa.initial(), Regex::empty_string());
        gnfa
    }

    /// Index of the synthetic start state.
    pub fn start(&self) -> usize {
        self.original
    }

    /// Index of the synthetic accepting state.
    pub fn accept(&self) -> usize {
        self.original + 1
    }

    /// The label of the edge from `source` to `target`, if there is one.
    pub fn edge(&self, source: usize, target: usize) -> Option<&Regex> {
        self.edges.get(source)?.get(&target)
    }

    /// Iterates over all edges as `(source, target, label)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, &Regex)> + '_ {
        self.edges.iter().enumerate().flat_map(|(source, outgoing)| {
            outgoing
                .iter()
                .map(move |(&target, label)| (source, target, label))
        })
    }

    /// The states that currently have an edge into `state`. A state that does not exist has
    /// none.
    pub fn predecessors(&self, state: usize) -> impl Iterator<Item = usize> + '_ {
        self.predecessors.get(state).into_iter().flatten().copied()
    }

    /// Unites `label` into the edge from `source` to `target`. An existing label stays on the
    /// left of the union, a newly created edge registers `source` as predecessor of `target`.
    fn add_edge(&mut self, source: usize, target: usize, label: Regex) {
        if label.is_empty_language() {
            return;
        }
        match self.edges[source].remove(&target) {
            Some(existing) => {
                self.edges[source].insert(target, existing.union(label));
            }
            None => {
                self.edges[source].insert(target, label);
                self.predecessors[target].insert(source);
            }
        }
    }

    /// Removes the state `rip` and reroutes every path `i -> rip -> j` through a direct edge
    /// `i -> j` labelled `edge(i, rip) edge(rip, rip)* edge(rip, j)`, which is united into a
    /// possibly existing edge from `i` to `j`.
    pub(crate) fn eliminate(&mut self, rip: usize) {
        let mut outgoing = std::mem::take(&mut self.edges[rip]);
        let repeat = outgoing
            .remove(&rip)
            .unwrap_or_else(Regex::empty_language)
            .star();
        let mut predecessors = std::mem::take(&mut self.predecessors[rip]);
        predecessors.remove(&rip);

        trace!(
            "eliminating state {rip} with {} predecessors, {} successors and loop {}",
            predecessors.len(),
            outgoing.len(),
            repeat.show()
        );

        for &target in outgoing.keys() {
            self.predecessors[target].remove(&rip);
        }

        for source in predecessors {
            let Some(entering) = self.edges[source].remove(&rip) else {
                continue;
            };
            let prefix = entering.concat(repeat.clone());
            for (&target, leaving) in &outgoing {
                self.add_edge(source, target, prefix.clone().concat(leaving.clone()));
            }
        }
    }

    /// Eliminates all states stemming from the DFA in ascending order of their indices and
    /// returns the label of the edge from the start to the accepting state. If there is no
    /// such edge, no word is accepted and the result is the empty language.
    pub fn into_regex(mut self) -> Regex {
        for rip in 0..self.original {
            self.eliminate(rip);
        }
        let (start, accept) = (self.start(), self.accept());
        let regex = self.edges[start]
            .remove(&accept)
            .unwrap_or_else(Regex::empty_language);
        debug!(
            "synthesized regex of length {} from {} states",
            regex.to_string().len(),
            self.original
        );
        regex
    }
}

#[cfg(test)]
mod tests {
    use super::Gnfa;
    use crate::{
        prelude::*,
        tests::{a_star_dfa, assert_language_equivalent, odd_a_dfa, wiki_builder},
    };

    #[test]
    fn construction_unites_parallel_edges() {
        let dfa = DFA::new(
            [0, 1],
            ['a', 'b', 'c'],
            [
                (0, 'a', 1),
                (0, 'b', 0),
                (0, 'c', 1),
                (1, 'a', 1),
                (1, 'b', 1),
                (1, 'c', 1),
            ],
            0,
            [1],
        )
        .unwrap();
        let gnfa = Gnfa::from_dfa(&dfa);
        assert_eq!(gnfa.start(), 2);
        assert_eq!(gnfa.accept(), 3);
        assert_eq!(gnfa.edge(0, 1).map(ToString::to_string), Some("a|c".into()));
        assert_eq!(gnfa.edge(0, 0).map(ToString::to_string), Some("b".into()));
        assert_eq!(gnfa.edge(1, 1).map(ToString::to_string), Some("a|b|c".into()));
        assert_eq!(gnfa.edge(1, 3), Some(&Regex::empty_string()));
        assert_eq!(gnfa.edge(2, 0), Some(&Regex::empty_string()));
        assert_eq!(gnfa.edge(0, 3), None);
        assert_eq!(gnfa.edge(7, 0), None);
        assert_eq!(gnfa.predecessors(7).count(), 0);
        assert_eq!(gnfa.edges().count(), 5);

        let mut predecessors = gnfa.predecessors(1).collect::<Vec<_>>();
        predecessors.sort();
        assert_eq!(predecessors, vec![0, 1]);

        assert_eq!(gnfa.into_regex().to_string(), "b*(a|c)(a|b|c)*");
    }

    #[test]
    fn elimination_updates_bookkeeping() {
        let mut gnfa = Gnfa::from_dfa(&odd_a_dfa());
        gnfa.eliminate(0);
        // start -> q1 and q1 -> q1 are rerouted through q0
        assert_eq!(gnfa.edge(2, 0), None);
        assert_eq!(gnfa.edge(2, 1).map(ToString::to_string), Some("b*a".into()));
        assert_eq!(
            gnfa.edge(1, 1).map(ToString::to_string),
            Some("b|ab*a".into())
        );
        assert_eq!(gnfa.predecessors(0).count(), 0);
        let mut predecessors = gnfa.predecessors(1).collect::<Vec<_>>();
        predecessors.sort();
        assert_eq!(predecessors, vec![1, 2]);

        gnfa.eliminate(1);
        assert_eq!(gnfa.edges().count(), 1);
        assert_eq!(
            gnfa.edge(2, 3).map(ToString::to_string),
            Some("b*a(b|ab*a)*".into())
        );
    }

    #[test]
    fn single_state_loop() {
        assert_eq!(Gnfa::from_dfa(&a_star_dfa()).into_regex().to_string(), "a*");
    }

    #[test]
    fn unreachable_accepting_states_do_not_contribute() {
        let dfa = wiki_builder()
            .with_accepting([7])
            .prune_unreachable(false)
            .into_dfa()
            .unwrap();
        assert_language_equivalent(&dfa, 6);

        let only_unreachable = DFA::builder()
            .with_states([0, 1])
            .with_alphabet(['a'])
            .with_transitions([(0, 'a', 0), (1, 'a', 0)])
            .with_initial(0)
            .with_accepting([1])
            .prune_unreachable(false)
            .into_dfa()
            .unwrap();
        assert!(only_unreachable.is_empty_language());
    }

    #[test_log::test]
    fn minimization_example() {
        let dfa = wiki_builder().into_dfa().unwrap();
        assert_language_equivalent(&dfa, 8);
    }
}
