// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::{Node, NodeId, Op, Operand};

/// Adds two operands, recording both as inputs of the new node.
///
/// Backward: the upstream gradient flows unchanged into both inputs.
pub fn add_op(graph: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
    let a = graph.materialize(a.into());
    let b = graph.materialize(b.into());
    let value = graph.value(a) + graph.value(b);
    graph.push(Node::derived(value, Op::Add, vec![a, b], String::new()))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
