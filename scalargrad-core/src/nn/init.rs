use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use crate::error::ScalarGradError;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Uniform initialization over the half-open range `[low, high)`.
///
/// The default range is `[-1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformInit {
    low: f64,
    high: f64,
}

impl Default for UniformInit {
    fn default() -> Self {
        UniformInit {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl UniformInit {
    /// Creates an initializer for `[low, high)`.
    ///
    /// # Errors
    /// `InvalidConfiguration` unless both bounds are finite and `low < high`.
    pub fn new(low: f64, high: f64) -> Result<Self, ScalarGradError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "uniform init range [{}, {}) is empty or not finite",
                low, high
            )));
        }
        Ok(UniformInit { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Draws one value from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        Uniform::new(self.low, self.high).sample(rng)
    }

    /// Creates a labelled leaf holding a freshly drawn value.
    pub fn leaf<R: Rng + ?Sized>(
        &self,
        graph: &mut Graph,
        rng: &mut R,
        label: impl Into<String>,
    ) -> NodeId {
        let value = self.sample(rng);
        graph.labeled_leaf(value, label)
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
