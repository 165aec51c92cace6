// scalargrad-core/src/ops/math_elem/tanh.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::{Node, NodeId, Op, Operand};

/// Hyperbolic tangent, `(e^2a - 1) / (e^2a + 1)`.
///
/// Computed with `f64::tanh`, which does not overflow for large inputs.
/// Backward: `grad_a += (1 - tanh(a)^2) * upstream`.
pub fn tanh_op(graph: &mut Graph, a: impl Into<Operand>) -> NodeId {
    let a = graph.materialize(a.into());
    let value = graph.value(a).tanh();
    graph.push(Node::derived(value, Op::Tanh, vec![a], String::new()))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
