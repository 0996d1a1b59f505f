//! Online (single-pass) mean and variance for unbounded value streams.
//!
//! An [`estimators::Aggregate`] folds observations in one at a time with
//! Welford's numerically stable recurrence, holding only a count, a running
//! mean, and a sum of squared deviations. [`estimators::ConcurrentAggregate`]
//! shares one aggregate across threads behind a readers-writer lock.
//!
//! ```
//! use welford::estimators::Aggregate;
//!
//! let mut agg = Aggregate::new();
//! agg.update_many([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
//!
//! assert_eq!(agg.count(), 8);
//! assert!((agg.mean() - 5.0).abs() < 1e-9);
//! assert!((agg.variance() - 4.0).abs() < 1e-9);
//! ```

pub mod estimators;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
