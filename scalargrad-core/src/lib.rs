//! Scalar reverse-mode automatic differentiation.
//!
//! A [`Graph`] arena holds every scalar node. Operations on the graph build new
//! nodes define-by-run, and [`Graph::backward`] propagates gradients from any
//! node to all of its ancestors. The [`nn`] module composes these operations
//! into neurons, layers and a multi-layer perceptron.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod utils;

// Re-export the types most callers need directly from the crate root.
pub use autograd::graph::Graph;
pub use autograd::node::{Node, NodeId, Op, Operand};
pub use autograd::record::GraphRecord;
pub use error::ScalarGradError;
