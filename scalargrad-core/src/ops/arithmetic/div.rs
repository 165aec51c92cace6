// scalargrad-core/src/ops/arithmetic/div.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::{NodeId, Operand};
use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::{checked_pow, push_pow};

/// Divides `a` by `b`, built as `a * b^-1`.
///
/// # Errors
/// `Domain` when `b` is zero. The check runs before any node is created, so a
/// failed division leaves the graph unchanged.
pub fn div_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let (a, b) = (a.into(), b.into());
    let reciprocal = checked_pow(graph.operand_value(b), -1.0)?;
    let b = graph.materialize(b);
    let inverted = push_pow(graph, b, -1.0, reciprocal);
    Ok(mul_op(graph, a, inverted))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
