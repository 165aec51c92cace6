// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::{NodeId, Operand};
use crate::ops::arithmetic::mul::mul_op;

/// Negates an operand. Built as a multiplication by a `-1` constant leaf, so
/// it inherits the multiplication backward rule.
pub fn neg_op(graph: &mut Graph, a: impl Into<Operand>) -> NodeId {
    mul_op(graph, a, -1.0)
}
