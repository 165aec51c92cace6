// scalargrad-core/src/ops/mod.rs
//
// Graph-building operations. Each free function has a method twin on `Graph`
// so expressions can be written as `g.mul(x, w)`.

pub mod arithmetic;
pub mod math_elem;

pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, tanh_op};

use crate::autograd::graph::Graph;
use crate::autograd::node::{NodeId, Operand};
use crate::error::ScalarGradError;

impl Graph {
    /// `a + b`
    pub fn add(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
        add_op(self, a, b)
    }

    /// `a * b`
    pub fn mul(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
        mul_op(self, a, b)
    }

    /// `-a`, built as `a * -1`.
    pub fn neg(&mut self, a: impl Into<Operand>) -> NodeId {
        neg_op(self, a)
    }

    /// `a - b`, built as `a + (-b)`.
    pub fn sub(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> NodeId {
        sub_op(self, a, b)
    }

    /// `a / b`, built as `a * b^-1`. Fails with a domain error when `b` is zero.
    pub fn div(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        div_op(self, a, b)
    }

    /// `a^exponent` for a constant exponent.
    pub fn pow(&mut self, a: impl Into<Operand>, exponent: f64) -> Result<NodeId, ScalarGradError> {
        pow_op(self, a, exponent)
    }

    /// `e^a`
    pub fn exp(&mut self, a: impl Into<Operand>) -> NodeId {
        exp_op(self, a)
    }

    /// Hyperbolic tangent of `a`.
    pub fn tanh(&mut self, a: impl Into<Operand>) -> NodeId {
        tanh_op(self, a)
    }
}
