use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use crate::error::ScalarGradError;
use crate::nn::init::UniformInit;
use crate::nn::module::{check_input_len, Module};
use rand::Rng;

/// A single tanh neuron: `tanh(b + Σ w_i * x_i)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights and a bias, drawn from the
    /// default `[-1, 1)` range using the thread-local generator.
    pub fn new(graph: &mut Graph, n_inputs: usize) -> Self {
        Self::with_rng(graph, n_inputs, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(graph: &mut Graph, n_inputs: usize, rng: &mut R) -> Self {
        Self::with_init(graph, n_inputs, &UniformInit::default(), rng)
    }

    /// Creates a neuron whose weights (labelled `w1..wn`) and bias (labelled
    /// `b`) are drawn from `init`.
    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_inputs: usize,
        init: &UniformInit,
        rng: &mut R,
    ) -> Self {
        let weights = (1..=n_inputs)
            .map(|i| init.leaf(graph, rng, format!("w{}", i)))
            .collect();
        let bias = init.leaf(graph, rng, "b");
        Neuron { weights, bias }
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    type Output = NodeId;

    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        check_input_len(inputs, self.weights.len())?;
        // Bias first, then the weighted inputs left to right.
        let mut sum = self.bias;
        for (i, (&w, &x)) in self.weights.iter().zip(inputs).enumerate() {
            let wx = graph.mul(w, x);
            graph.set_label(wx, format!("w{}x{}", i + 1, i + 1));
            sum = graph.add(sum, wx);
        }
        Ok(graph.tanh(sum))
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params: Vec<(String, NodeId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("w{}", i + 1), w))
            .collect();
        params.push(("b".to_string(), self.bias));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
