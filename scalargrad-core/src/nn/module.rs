use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use crate::error::ScalarGradError;

/// The base trait for all neural network modules (neurons, layers, MLPs).
///
/// A module owns its learnable parameters as leaf nodes of a [`Graph`]. Its
/// forward pass is ordinary graph building, so the backward engine needs no
/// knowledge of modules.
pub trait Module: std::fmt::Debug {
    /// What a forward pass produces (a single node or several).
    type Output;

    /// Builds the forward computation for `inputs` on `graph`.
    ///
    /// # Errors
    /// `DimensionMismatch` when `inputs` does not have the expected length.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Self::Output, ScalarGradError>;

    /// All learnable parameters, in a stable order.
    fn parameters(&self) -> Vec<NodeId>;

    /// Parameters with hierarchical names such as `layers.0.neurons.1.w2`.
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self, graph: &mut Graph) {
        for param in self.parameters() {
            graph.clear_grad(param);
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Returns `DimensionMismatch` unless `inputs` has exactly `expected` entries.
pub(crate) fn check_input_len(inputs: &[NodeId], expected: usize) -> Result<(), ScalarGradError> {
    if inputs.len() != expected {
        return Err(ScalarGradError::DimensionMismatch {
            expected,
            actual: inputs.len(),
        });
    }
    Ok(())
}
