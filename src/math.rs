use std::collections::BTreeMap;

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;

/// Type alias for maps whose iteration order is the order of the keys.
pub type OrderedMap<K, V> = BTreeMap<K, V>;

/// Represents a bijective mapping between `L` and `R`, that is a mapping which associates
/// each `L` with precisely one `R` and vice versa. States and symbols are identified with
/// their dense indices through such a mapping.
pub type Bijection<L, R> = bimap::BiHashMap<L, R>;

/// Dense set of indices, used for accepting states and traversal bookkeeping.
pub type IndexSet = bit_set::BitSet;
