// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::{NodeId, Operand};
use crate::ops::arithmetic::{add::add_op, neg::neg_op};

/// Subtracts `b` from `a`, built as `a + (-b)`.
pub fn sub_op(graph: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
    let b = graph.materialize(b.into());
    let negated = neg_op(graph, b);
    add_op(graph, a, negated)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
