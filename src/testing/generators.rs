use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeded stream of uniform values in `[lo, hi)`.
///
/// Deterministic per seed, so failing runs reproduce.
pub fn uniform_values(seed: u64, len: usize, lo: f64, hi: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(lo..hi)).collect()
}

/// Seeded permutation of `values`, for order-independence checks.
pub fn shuffled(seed: u64, values: &[f64]) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = values.to_vec();
    out.shuffle(&mut rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        assert_eq!(
            uniform_values(42, 100, 0.0, 1.0),
            uniform_values(42, 100, 0.0, 1.0)
        );
    }

    #[test]
    fn shuffle_keeps_the_multiset() {
        let values = uniform_values(7, 50, -1.0, 1.0);
        let mut permuted = shuffled(13, &values);

        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        permuted.sort_by(f64::total_cmp);
        assert_eq!(permuted, sorted);
    }

    #[test]
    fn values_respect_the_range() {
        for v in uniform_values(3, 1_000, 2.0, 5.0) {
            assert!((2.0..5.0).contains(&v));
        }
    }
}
