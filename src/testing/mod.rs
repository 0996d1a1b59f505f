pub mod generators;
pub mod oracle;

pub use generators::{shuffled, uniform_values};
pub use oracle::BatchStats;
