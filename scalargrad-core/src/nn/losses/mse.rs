// scalargrad-core/src/nn/losses/mse.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::{NodeId, Operand};
use crate::error::ScalarGradError;
use log::trace;
use std::str::FromStr;

/// How per-element squared errors are combined into a single loss node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            _ => Err(ScalarGradError::InvalidConfiguration(format!(
                "unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Builds the squared error between `predictions` and `targets` as graph
/// nodes, reduced according to `reduction`.
///
/// Targets may be nodes or plain numbers. Empty inputs yield a fresh leaf
/// holding `0.0`.
///
/// # Errors
/// `DimensionMismatch` when the slices differ in length.
pub fn squared_error<T>(
    graph: &mut Graph,
    predictions: &[NodeId],
    targets: &[T],
    reduction: Reduction,
) -> Result<NodeId, ScalarGradError>
where
    T: Into<Operand> + Copy,
{
    if predictions.len() != targets.len() {
        return Err(ScalarGradError::DimensionMismatch {
            expected: predictions.len(),
            actual: targets.len(),
        });
    }

    let mut squares = Vec::with_capacity(predictions.len());
    for (&prediction, &target) in predictions.iter().zip(targets) {
        let diff = graph.sub(prediction, target);
        squares.push(graph.pow(diff, 2.0)?);
    }

    let Some((&first, rest)) = squares.split_first() else {
        return Ok(graph.leaf(0.0));
    };
    let total = rest.iter().fold(first, |acc, &sq| graph.add(acc, sq));
    trace!(
        "squared_error: {} terms, total {}",
        squares.len(),
        graph.value(total)
    );

    let loss = match reduction {
        Reduction::Sum => total,
        Reduction::Mean => graph.mul(total, 1.0 / squares.len() as f64),
    };
    Ok(loss)
}

/// `Σ (prediction - target)^2`
pub fn sum_squared_error<T>(
    graph: &mut Graph,
    predictions: &[NodeId],
    targets: &[T],
) -> Result<NodeId, ScalarGradError>
where
    T: Into<Operand> + Copy,
{
    squared_error(graph, predictions, targets, Reduction::Sum)
}

/// Mean of `(prediction - target)^2` over all pairs.
pub fn mean_squared_error<T>(
    graph: &mut Graph,
    predictions: &[NodeId],
    targets: &[T],
) -> Result<NodeId, ScalarGradError>
where
    T: Into<Operand> + Copy,
{
    squared_error(graph, predictions, targets, Reduction::Mean)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
