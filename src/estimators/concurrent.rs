use crate::estimators::{Aggregate, Estimator, Snapshot};
use parking_lot::RwLock;
use std::fmt::{Display, Formatter};

/// [`Aggregate`] variant safe for concurrent producers and readers.
///
/// Wraps one aggregate in a readers-writer lock: mutation runs under the
/// exclusive lock, queries run under the shared lock, and no query can
/// observe a half-applied update. Every method takes `&self`, so a single
/// value behind an `Arc` serves any number of threads.
///
/// Updates from different threads land in lock-acquisition order. That order
/// only moves low-order rounding bits of the derived variances, so repeated
/// runs with different interleavings compare equal within a tolerance, not
/// bit-for-bit.
#[derive(Debug, Default)]
pub struct ConcurrentAggregate {
    inner: RwLock<Aggregate>,
}

impl ConcurrentAggregate {
    /// Creates an empty concurrent aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one observation in, under the exclusive lock.
    pub fn update(&self, value: f64) {
        self.inner.write().update(value);
    }

    /// Folds a batch of observations in under one exclusive-lock
    /// acquisition; the whole batch lands atomically with respect to
    /// readers.
    pub fn update_many<I>(&self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        self.inner.write().update_many(values);
    }

    /// Returns to the empty state, under the exclusive lock.
    pub fn reset(&self) {
        self.inner.write().reset();
    }

    /// Number of observations folded in so far.
    pub fn count(&self) -> u64 {
        self.inner.read().count()
    }

    /// Whether no observations have been folded in.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Running mean; 0.0 for the empty stream.
    pub fn mean(&self) -> f64 {
        self.inner.read().mean()
    }

    /// Population variance; 0.0 for the empty stream.
    pub fn variance(&self) -> f64 {
        self.inner.read().variance()
    }

    /// Bessel-corrected sample variance; 0.0 with fewer than two
    /// observations.
    pub fn sample_variance(&self) -> f64 {
        self.inner.read().sample_variance()
    }

    /// Population standard deviation.
    pub fn stddev(&self) -> f64 {
        self.inner.read().stddev()
    }

    /// Sample standard deviation.
    pub fn sample_stddev(&self) -> f64 {
        self.inner.read().sample_stddev()
    }

    /// All four derived statistics under a single shared-lock acquisition.
    ///
    /// Prefer this over separate accessor calls when the quantities must be
    /// mutually consistent; separate calls may interleave with writers.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.read().snapshot()
    }
}

impl Estimator for ConcurrentAggregate {
    #[inline]
    fn add(&mut self, v: f64) {
        self.update(v);
    }

    #[inline]
    fn estimation(&self) -> f64 {
        self.mean()
    }
}

impl Display for ConcurrentAggregate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.snapshot().fmt(f)
    }
}
