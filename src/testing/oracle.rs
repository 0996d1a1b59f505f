/// Two-pass batch statistics used as a test oracle.
///
/// Stores the whole sample and recomputes mean and variance directly from
/// their definitions, trading memory for obviousness. Tests compare the
/// online aggregates against this.
#[derive(Debug, Default, Clone)]
pub struct BatchStats {
    values: Vec<f64>,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn count(&self) -> u64 {
        self.values.len() as u64
    }

    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    pub fn variance(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.sum_sq_dev() / self.values.len() as f64
    }

    pub fn sample_variance(&self) -> f64 {
        if self.values.len() <= 1 {
            return 0.0;
        }
        self.sum_sq_dev() / (self.values.len() - 1) as f64
    }

    fn sum_sq_dev(&self) -> f64 {
        let mean = self.mean();
        self.values.iter().map(|v| (v - mean) * (v - mean)).sum()
    }
}
