use crate::estimators::{Estimator, Snapshot};
use std::fmt::{Display, Formatter};

/// Sufficient statistics of an observation stream, maintained online.
///
/// Holds the count, the running mean, and the accumulated sum of squared
/// deviations from the evolving mean (Welford's `m2`), which together derive
/// the population and sample variance without storing any observation.
/// Memory stays constant no matter how long the stream runs.
///
/// Every accessor is total: the empty stream has mean 0 and both variances
/// are 0 whenever their denominator would vanish, rather than an error.
///
/// This type performs no synchronization. Share one across threads through
/// [`ConcurrentAggregate`](crate::estimators::ConcurrentAggregate) or
/// external locking only.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aggregate {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Aggregate {
    /// Creates an empty aggregate, ready for a new stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one observation into the running statistics.
    ///
    /// Non-finite values are not rejected; NaN and ±infinity propagate
    /// through `mean` and `m2` per IEEE arithmetic. Callers that want them
    /// out filter before updating.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        // delta2 must use the already-moved mean; collapsing the two deltas
        // into one breaks the recurrence's stability.
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Folds a batch of observations, in iteration order.
    ///
    /// Order affects floating-point rounding only, not the mathematical
    /// result.
    pub fn update_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        for value in values {
            self.update(value);
        }
    }

    /// Returns to the empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of observations folded in so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whether no observations have been folded in.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Running mean; 0.0 for the empty stream.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance, `m2 / count`; 0.0 for the empty stream.
    #[inline]
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Bessel-corrected sample variance, `m2 / (count - 1)`; 0.0 with fewer
    /// than two observations.
    #[inline]
    pub fn sample_variance(&self) -> f64 {
        if self.count <= 1 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Population standard deviation.
    #[inline]
    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Sample standard deviation.
    #[inline]
    pub fn sample_stddev(&self) -> f64 {
        self.sample_variance().sqrt()
    }

    /// All four derived statistics, taken from the same state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            count: self.count(),
            mean: self.mean(),
            variance: self.variance(),
            sample_variance: self.sample_variance(),
        }
    }
}

impl Estimator for Aggregate {
    #[inline]
    fn add(&mut self, v: f64) {
        self.update(v);
    }

    #[inline]
    fn estimation(&self) -> f64 {
        self.mean()
    }
}

impl Display for Aggregate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.snapshot().fmt(f)
    }
}
