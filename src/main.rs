use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use clap::Parser;
use kleene::{
    input::{read_dfa, ParseError},
    prelude::*,
};
use owo_colors::OwoColorize;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Converts a DFA into an equivalent regular expression and tests strings for acceptance.
///
/// The DFA description lists the comma separated states, the comma separated alphabet, one
/// `source,symbol,target` transition per line, the initial state and the comma separated
/// accepting states. Without a path it is read from stdin, and the remaining lines of stdin are
/// tested for acceptance.
#[derive(Debug, Clone, clap::Parser)]
#[clap(version, about)]
struct Cli {
    /// File containing the DFA description.
    path: Option<PathBuf>,
    /// Keep states that cannot be reached from the initial state.
    #[clap(long)]
    keep_unreachable: bool,
    /// Print the transition table of the DFA.
    #[clap(short = 't', long)]
    table: bool,
    /// Print all accepted words up to the given length.
    #[clap(short = 's', long, value_name = "N")]
    sample: Option<usize>,
    /// Increase log verbosity, can be repeated.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_filter(cli.level()),
        )
        .init();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    let builder = match &cli.path {
        Some(path) => {
            info!("reading DFA from {}", path.display());
            let file = File::open(path).map_err(ParseError::from)?;
            read_dfa(BufReader::new(file))?
        }
        None => {
            info!("reading DFA from stdin");
            read_dfa(&mut input)?
        }
    };
    let dfa = builder.prune_unreachable(!cli.keep_unreachable).into_dfa()?;

    println!("Equivalent regex: {dfa}");
    if cli.table {
        println!("{}", dfa.transition_table());
    }
    if let Some(max_len) = cli.sample {
        for word in dfa.accepted_words_up_to(max_len) {
            println!("{}", word.show());
        }
    }

    println!("Enter strings to test for acceptance by the DFA, one per line.");
    for line in input.lines() {
        let line = line.map_err(ParseError::from)?;
        match dfa.accepts(line.trim_end().chars()) {
            Ok(true) => println!("{}\n", "accepted".green()),
            Ok(false) => println!("{}\n", "rejected".red()),
            Err(e) => println!("{e}\n"),
        }
    }
    Ok(())
}
