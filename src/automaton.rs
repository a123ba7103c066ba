mod builder;
pub use builder::DFABuilder;

mod dfa;
pub use dfa::DFA;

mod reachability;
