use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use crate::error::ScalarGradError;
use crate::nn::init::UniformInit;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use log::debug;
use rand::Rng;
use std::slice;

/// Result of an [`Mlp`] forward pass.
#[derive(Debug, Clone, PartialEq)]
pub enum MlpOutput {
    /// The final layer has exactly one neuron.
    Single(NodeId),
    Many(Vec<NodeId>),
}

impl MlpOutput {
    pub fn single(&self) -> Option<NodeId> {
        match self {
            MlpOutput::Single(id) => Some(*id),
            MlpOutput::Many(_) => None,
        }
    }

    pub fn as_slice(&self) -> &[NodeId] {
        match self {
            MlpOutput::Single(id) => slice::from_ref(id),
            MlpOutput::Many(ids) => ids,
        }
    }

    pub fn into_vec(self) -> Vec<NodeId> {
        match self {
            MlpOutput::Single(id) => vec![id],
            MlpOutput::Many(ids) => ids,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// Multi-layer perceptron: layers chained so that each layer's output count is
/// the next layer's input count.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds an MLP taking `n_inputs` values, with one layer per entry of
    /// `layer_sizes`.
    ///
    /// # Errors
    /// `InvalidConfiguration` when `layer_sizes` is empty or contains a zero.
    pub fn new(
        graph: &mut Graph,
        n_inputs: usize,
        layer_sizes: &[usize],
    ) -> Result<Self, ScalarGradError> {
        Self::with_rng(graph, n_inputs, layer_sizes, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_inputs: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        Self::with_init(graph, n_inputs, layer_sizes, &UniformInit::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_inputs: usize,
        layer_sizes: &[usize],
        init: &UniformInit,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidConfiguration(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if let Some(pos) = layer_sizes.iter().position(|&size| size == 0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "layer {} has no outputs",
                pos
            )));
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_inputs;
        for &fan_out in layer_sizes {
            layers.push(Layer::with_init(graph, fan_in, fan_out, init, rng));
            fan_in = fan_out;
        }
        let mlp = Mlp { layers };
        debug!(
            "Mlp: built {} layers ({} -> {:?}) with {} parameters",
            mlp.layers.len(),
            n_inputs,
            layer_sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    type Output = MlpOutput;

    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<MlpOutput, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        if current.len() == 1 {
            Ok(MlpOutput::Single(current[0]))
        } else {
            Ok(MlpOutput::Many(current))
        }
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(Layer::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
