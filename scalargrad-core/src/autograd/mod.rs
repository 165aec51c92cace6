//! Computation graph and reverse-mode differentiation.
//!
//! [`graph::Graph`] is an arena of [`node::Node`]s. Forward operations (see
//! [`crate::ops`]) append nodes, and [`graph::Graph::backward`] walks the nodes
//! reachable from a root in reverse topological order, dispatching on each
//! node's [`node::Op`] to apply its local derivative rule.

pub mod backward;
pub mod grad_check;
pub mod graph;
pub mod node;
pub mod record;

pub use grad_check::{check_grad, GradCheckError};
pub use graph::Graph;
pub use node::{Node, NodeId, Op, Operand};
pub use record::GraphRecord;
