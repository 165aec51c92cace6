use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use crate::error::ScalarGradError;
use crate::nn::init::UniformInit;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{check_input_len, Module};
use rand::Rng;

/// A fully connected layer of independent tanh neurons sharing one input.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    pub fn new(graph: &mut Graph, n_inputs: usize, n_outputs: usize) -> Self {
        Self::with_rng(graph, n_inputs, n_outputs, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_inputs: usize,
        n_outputs: usize,
        rng: &mut R,
    ) -> Self {
        Self::with_init(graph, n_inputs, n_outputs, &UniformInit::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_inputs: usize,
        n_outputs: usize,
        init: &UniformInit,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::with_init(graph, n_inputs, init, rng))
            .collect();
        Layer { neurons, n_inputs }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    type Output = Vec<NodeId>;

    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        check_input_len(inputs, self.n_inputs)?;
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neurons.{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
