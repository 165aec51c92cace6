// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::{Node, NodeId, Op, Operand};
use crate::error::ScalarGradError;

/// Local derivative of `x^exponent` at `x = base`.
pub(crate) fn pow_local_grad(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        0.0
    } else {
        exponent * base.powf(exponent - 1.0)
    }
}

/// Computes `base^exponent`, failing when the power or its derivative is
/// mathematically undefined: a zero base with a negative exponent (including
/// the `x^(k-1)` of the derivative when `0 < k < 1`), a negative base with a
/// non-integer exponent, or a NaN operand.
///
/// Overflow is not an error; the result is whatever `f64::powf` returns.
pub(crate) fn checked_pow(base: f64, exponent: f64) -> Result<f64, ScalarGradError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(ScalarGradError::domain(
            "pow",
            format!("0^{} divides by zero", exponent),
        ));
    }
    if base == 0.0 && exponent > 0.0 && exponent < 1.0 {
        return Err(ScalarGradError::domain(
            "pow",
            format!("derivative of x^{} is undefined at x = 0", exponent),
        ));
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(ScalarGradError::domain(
            "pow",
            format!("negative base {} has no real power {}", base, exponent),
        ));
    }
    let value = base.powf(exponent);
    if value.is_nan() {
        return Err(ScalarGradError::domain(
            "pow",
            format!("{}^{} is not a number", base, exponent),
        ));
    }
    Ok(value)
}

/// Pushes a pow node whose value was already validated by [`checked_pow`].
pub(crate) fn push_pow(graph: &mut Graph, base: NodeId, exponent: f64, value: f64) -> NodeId {
    graph.push(Node::derived(
        value,
        Op::Pow(exponent),
        vec![base],
        format!("**{}", exponent),
    ))
}

/// Raises an operand to a constant power. Only the base is differentiated.
///
/// Backward: `grad_base += exponent * base^(exponent - 1) * upstream`.
///
/// # Errors
/// `Domain` when the result or its derivative is undefined, e.g. `0^-1` or
/// `(-2)^0.5`. Nothing is added to the graph in that case. Results too large
/// for `f64` are not errors and become infinite.
pub fn pow_op(
    graph: &mut Graph,
    base: impl Into<Operand>,
    exponent: f64,
) -> Result<NodeId, ScalarGradError> {
    let base = base.into();
    let value = checked_pow(graph.operand_value(base), exponent)?;
    let base = graph.materialize(base);
    Ok(push_pow(graph, base, exponent, value))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
