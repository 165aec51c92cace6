// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::{Node, NodeId, Op, Operand};

/// Computes `e^a`. The new node is labelled `e^<input value>`.
///
/// Backward: `grad_a += e^a * upstream`, reusing the node's own value.
pub fn exp_op(graph: &mut Graph, a: impl Into<Operand>) -> NodeId {
    let a = graph.materialize(a.into());
    let input = graph.value(a);
    graph.push(Node::derived(
        input.exp(),
        Op::Exp,
        vec![a],
        format!("e^{}", input),
    ))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
