// scalargrad-core/src/autograd/grad_check.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use crate::error::ScalarGradError;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Gradient check input {input_index} must be a leaf node")]
    InputNotLeaf { input_index: usize },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("Graph error during gradient check: {0}")]
    Graph(#[from] ScalarGradError),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds a scalar output from `inputs` on the given graph. It is called
/// once for the analytical pass and twice per input with that input nudged by
/// `±epsilon`. Every node `func` creates is discarded again, so the graph ends
/// with the same length it started with, also when `func` fails. On success
/// the inputs hold their analytical gradients; every other node keeps the
/// gradient it had before the call.
///
/// Inputs must be leaves, since their values are perturbed in place.
pub fn check_grad<F>(
    graph: &mut Graph,
    func: F,
    inputs: &[NodeId],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    for (input_index, &input) in inputs.iter().enumerate() {
        if !graph.node(input).is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index });
        }
    }
    let mark = graph.len();

    // --- 1. Analytical pass ---
    // Backward also reaches leaves that are not checked (e.g. model
    // parameters); their gradients are restored afterwards.
    let saved_grads: Vec<f64> = graph.iter().map(|(_, node)| node.grad()).collect();
    for &input in inputs {
        graph.clear_grad(input);
    }
    let output = match func(graph, inputs) {
        Ok(output) => output,
        Err(e) => {
            graph.truncate(mark);
            return Err(GradCheckError::ForwardPassError(e));
        }
    };
    let backward_result = graph.backward(output);
    let analytical: Vec<f64> = inputs.iter().map(|&input| graph.grad(input)).collect();
    graph.truncate(mark);
    restore_grads(graph, &saved_grads);
    backward_result.map_err(GradCheckError::BackwardPassError)?;
    for (&input, &grad) in inputs.iter().zip(&analytical) {
        graph.nodes_mut()[input.index()].grad = grad;
    }

    // --- 2. Numerical pass ---
    for (input_index, &input) in inputs.iter().enumerate() {
        let original = graph.value(input);
        let plus = forward_at(graph, &func, inputs, input, original + epsilon, mark);
        let minus = forward_at(graph, &func, inputs, input, original - epsilon, mark);
        graph.set_value(input, original)?;
        let loss_plus = plus.map_err(GradCheckError::ForwardPassError)?;
        let loss_minus = minus.map_err(GradCheckError::ForwardPassError)?;

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let analytical_grad = analytical[input_index];
        let difference = (analytical_grad - numerical).abs();
        debug!(
            "check_grad: input {} analytical {} numerical {} difference {}",
            input_index, analytical_grad, numerical, difference
        );
        if !relative_eq!(
            analytical_grad,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical: analytical_grad,
                numerical,
                difference,
            });
        }
    }

    Ok(())
}

fn restore_grads(graph: &mut Graph, saved: &[f64]) {
    for (node, &grad) in graph.nodes_mut().iter_mut().zip(saved) {
        node.grad = grad;
    }
}

/// Evaluates `func` with `input` set to `value`, then discards the nodes it
/// built.
fn forward_at<F>(
    graph: &mut Graph,
    func: &F,
    inputs: &[NodeId],
    input: NodeId,
    value: f64,
    mark: usize,
) -> Result<f64, ScalarGradError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    graph.set_value(input, value)?;
    let result = func(graph, inputs).map(|output| graph.value(output));
    graph.truncate(mark);
    result
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
