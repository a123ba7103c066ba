use std::io::BufRead;

use thiserror::Error;
use tracing::{trace, warn};

use crate::automaton::DFABuilder;

/// Raised when a DFA description cannot be read.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("could not read DFA description: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended before the {0} could be read")]
    UnexpectedEof(&'static str),
    #[error("symbol {0:?} is not a single character")]
    InvalidSymbol(String),
}

/// Reads the definition of a DFA from a line based format:
/// 1. the comma separated states,
/// 2. the comma separated alphabet, where every symbol is a single character,
/// 3. any number of transitions `source,symbol,target`, one per line,
/// 4. the initial state, which is the first field of the first line that does not consist of
///    exactly three fields,
/// 5. optionally the comma separated accepting states.
///
/// Trailing whitespace is stripped from every line, an empty line denotes an empty list. The
/// returned builder is not validated yet, which happens in [`DFABuilder::into_dfa`].
///
/// ```
/// use kleene::input::read_dfa;
///
/// let description = "q0,q1\na,b\nq0,a,q1\nq0,b,q0\nq1,a,q0\nq1,b,q1\nq0\nq1\n";
/// let dfa = read_dfa(description.as_bytes()).unwrap().into_dfa().unwrap();
/// assert_eq!(dfa.accepts("ab".chars()), Ok(true));
/// ```
pub fn read_dfa<R: BufRead>(reader: R) -> Result<DFABuilder<String, char>, ParseError> {
    let mut lines = Lines { reader };

    let states = lines.next("states")?.map(fields).unwrap_or_default();
    let alphabet = lines
        .next("alphabet")?
        .map(|line| {
            fields(line)
                .into_iter()
                .map(single_char)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?
        .unwrap_or_default();
    trace!("read {} states and {} symbols", states.len(), alphabet.len());

    let mut transitions = vec![];
    let initial = loop {
        let Some(line) = lines.next("initial state")? else {
            return Err(ParseError::UnexpectedEof("initial state"));
        };
        let tokens = line.split(',').map(str::to_string).collect::<Vec<_>>();
        let [source, symbol, target] = match <[String; 3]>::try_from(tokens) {
            Ok(transition) => transition,
            Err(mut tokens) => break tokens.swap_remove(0),
        };
        transitions.push((source, single_char(symbol)?, target));
    };
    trace!("read {} transitions, initial state {initial}", transitions.len());

    let accepting = lines.next("accepting states")?.map(fields).unwrap_or_default();
    if let Some(extra) = lines.next("end of input")? {
        if !extra.is_empty() {
            warn!("ignoring input after the accepting states: {extra:?}");
        }
    }

    Ok(DFABuilder::default()
        .with_states(states)
        .with_alphabet(alphabet)
        .with_transitions(transitions)
        .with_initial(initial)
        .with_accepting(accepting))
}

fn single_char(symbol: String) -> Result<char, ParseError> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ParseError::InvalidSymbol(symbol)),
    }
}

/// Splits a line at commas, where the empty line yields no fields.
fn fields(line: String) -> Vec<String> {
    if line.is_empty() {
        vec![]
    } else {
        line.split(',').map(str::to_string).collect()
    }
}

struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    /// Reads the next line with trailing whitespace removed, `None` at the end of the input.
    fn next(&mut self, what: &'static str) -> Result<Option<String>, ParseError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            trace!("reached end of input while expecting {what}");
            return Ok(None);
        }
        buf.truncate(buf.trim_end().len());
        Ok(Some(buf))
    }
}
