/// How many of the most frequent phrases survive selection.
pub const TOP_N: usize = 5000;

/// Phrases whose character length is at or below this are dropped on export.
pub const MIN_PHRASE_LEN: usize = 5;

/// Fixed `category` field of every exported record.
pub const CATEGORY: &str = "literature";

/// Fixed `mode` field of every exported record.
pub const MODE: &str = "normal";

/// Default corpus location, relative to the working directory.
pub const DEFAULT_INPUT: &str = "data/sherlock.txt";

/// Default dataset location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "data/datasets/sherlock_learned.json";
