// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::{Node, NodeId, Op, Operand};

/// Multiplies two operands.
///
/// Backward: each input receives the upstream gradient scaled by the value of
/// the other input.
pub fn mul_op(graph: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
    let a = graph.materialize(a.into());
    let b = graph.materialize(b.into());
    let value = graph.value(a) * graph.value(b);
    graph.push(Node::derived(value, Op::Mul, vec![a, b], String::new()))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
