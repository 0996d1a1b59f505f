/// Online scalar estimator over a stream of observations.
///
/// Implementations fold values in one at a time via [`add`](Estimator::add)
/// and expose a single summary value via
/// [`estimation`](Estimator::estimation); which summary that is (mean,
/// variance, ...) is up to the implementor.
pub trait Estimator {
    /// Incorporates a new observation.
    fn add(&mut self, v: f64);

    /// Returns the current estimate.
    fn estimation(&self) -> f64;
}
