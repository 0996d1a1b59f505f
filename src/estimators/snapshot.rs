use std::fmt::{Display, Formatter, Result};

/// Point-in-time view of an aggregate's derived statistics.
///
/// All four quantities come from the same underlying state, so they are
/// mutually consistent; the concurrent variant fills one of these under a
/// single lock acquisition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub count: u64,
    pub mean: f64,
    pub variance: f64,
    pub sample_variance: f64,
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "Count: {}, Mean: {:.6}, Variance: {:.6}, Sample Variance: {:.6}",
            self.count, self.mean, self.variance, self.sample_variance
        )
    }
}
