mod aggregate;
mod concurrent;
mod estimator;
mod snapshot;

pub use aggregate::Aggregate;
pub use concurrent::ConcurrentAggregate;
pub use estimator::Estimator;
pub use snapshot::Snapshot;
