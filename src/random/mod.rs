use crate::{automaton::DFABuilder, math};
use tracing::debug;

/// The first `symbols` letters starting from `a`, which serve as alphabet for random automata.
pub fn alphabet_of_size(symbols: usize) -> Vec<char> {
    ('a'..).take(symbols).collect()
}

/// Generate the definition of a random DFA with states `0..size` over the alphabet
/// [`alphabet_of_size`]`(symbols)` by randomly drawing transitions.
/// The algorithm is as follows:
/// 1. Start with `size` states and no transitions. A `size` of zero is treated as one.
/// 2. For each state, for each symbol draw a target state uniformly and add the corresponding edge.
/// 3. Every state is accepting with probability `accepting_probability`.
/// 4. The initial state is drawn uniformly.
///
/// Note that depending on which state is chosen as the initial state, there may be unreachable
/// states, so the returned builder exercises pruning.
pub fn generate_random_dfa_builder(
    symbols: usize,
    size: usize,
    accepting_probability: f64,
) -> DFABuilder<u32, char> {
    let size = size.max(1) as u32;
    let alphabet = alphabet_of_size(symbols);

    let mut transitions = Vec::with_capacity(size as usize * alphabet.len());
    for q in 0..size {
        for &sym in &alphabet {
            transitions.push((q, sym, fastrand::u32(..size)));
        }
    }
    let accepting = (0..size)
        .filter(|_| fastrand::f64() < accepting_probability)
        .collect::<Vec<_>>();
    let initial = fastrand::u32(..size);

    debug!(
        "drew random DFA with {size} states over {symbols} symbols, {} accepting, initial {initial}",
        accepting.len()
    );

    DFABuilder::default()
        .with_states(0..size)
        .with_alphabet(alphabet)
        .with_transitions(transitions)
        .with_initial(initial)
        .with_accepting(accepting)
}

/// Generate a random `String` over the given symbols.
/// The length of the `String` is drawn uniformly from the range `min_len..=max_len`, where a
/// `max_len` below `min_len` is raised to `min_len`. Over an empty list of symbols, the only
/// possible word is the empty one.
pub fn generate_random_word(symbols: &[char], min_len: usize, max_len: usize) -> String {
    if symbols.is_empty() {
        return String::new();
    }
    let length = fastrand::usize(min_len..=max_len.max(min_len));
    (0..length)
        .map(|_| symbols[fastrand::usize(..symbols.len())])
        .collect()
}

/// Generate up to `number` distinct random `String`s over the given symbols.
/// The length for each sampled word is drawn uniformly from the range `min_len..=max_len`.
/// Sampling stops early if every word in that range has been found, an empty range yields no
/// words at all.
pub fn generate_random_words(
    symbols: &[char],
    min_len: usize,
    max_len: usize,
    number: usize,
) -> math::Set<String> {
    if min_len > max_len {
        return math::Set::default();
    }
    let distinct = symbols.iter().collect::<math::Set<_>>().len();
    let number = number.min(count_words(distinct, min_len, max_len, number));

    let mut word_set = math::Set::default();
    word_set.reserve(number);
    while word_set.len() < number {
        word_set.insert(generate_random_word(symbols, min_len, max_len));
    }
    word_set
}

/// The number of distinct words with a length in `min_len..=max_len` over `distinct` symbols,
/// where counting stops as soon as `enough` is reached.
fn count_words(distinct: usize, min_len: usize, max_len: usize, enough: usize) -> usize {
    match distinct {
        0 => usize::from(min_len == 0),
        1 => (max_len - min_len).saturating_add(1),
        _ => {
            let mut available = 0usize;
            for len in min_len..=max_len {
                let words = u32::try_from(len)
                    .ok()
                    .and_then(|len| distinct.checked_pow(len))
                    .unwrap_or(usize::MAX);
                available = available.saturating_add(words);
                if available >= enough {
                    break;
                }
            }
            available
        }
    }
}
