// scalargrad-core/src/autograd/backward.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::{Node, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::arithmetic::pow::pow_local_grad;
use log::{debug, trace};

impl Graph {
    /// Performs the backward pass starting from `root`.
    ///
    /// Computes the derivative of `root` with respect to every node reachable
    /// from it and adds it into that node's gradient. The root itself is seeded
    /// with a gradient of `1.0` (assigned, not accumulated). Nodes that are not
    /// reachable from `root` are left untouched.
    ///
    /// Gradients are never reset implicitly: calling `backward` twice on the
    /// same root doubles every ancestor's gradient. Use [`Graph::zero_grad`]
    /// between passes when that is not wanted.
    ///
    /// # Errors
    /// Returns an internal consistency error (`CycleDetected` or
    /// `InternalConsistency`) if the graph structure is malformed. This cannot
    /// happen for graphs built through the public API.
    pub fn backward(&mut self, root: NodeId) -> Result<(), ScalarGradError> {
        let order = self.topological_order(root)?;
        debug!(
            "backward: {} nodes reachable from node {}",
            order.len(),
            root.index()
        );

        // Gradients flowing during this pass only, indexed by node id. Every
        // reachable node has an id <= root.
        let mut pass = vec![0.0; root.index() + 1];
        pass[root.index()] = 1.0;

        let nodes = self.nodes_mut();
        for &id in order.iter().rev() {
            let node = &nodes[id.index()];
            if node.inputs.len() != node.op.arity() {
                return Err(ScalarGradError::InternalConsistency(format!(
                    "node {} has op '{}' with {} inputs, expected {}",
                    id.index(),
                    node.op,
                    node.inputs.len(),
                    node.op.arity()
                )));
            }
            let upstream = pass[id.index()];
            trace!(
                "backward: node {} ({}) upstream grad {}",
                id.index(),
                node.op,
                upstream
            );
            propagate(nodes, node, upstream, &mut pass);
        }

        for &id in &order {
            let node = &mut nodes[id.index()];
            if id == root {
                node.grad = 1.0;
            } else {
                node.grad += pass[id.index()];
            }
        }
        Ok(())
    }
}

/// Applies the local backward rule of `node`, adding its contribution to each
/// input's entry in `pass`.
fn propagate(nodes: &[Node], node: &Node, upstream: f64, pass: &mut [f64]) {
    match node.op {
        Op::Leaf => {}
        Op::Add => {
            let (a, b) = (node.inputs[0], node.inputs[1]);
            pass[a.index()] += upstream;
            pass[b.index()] += upstream;
        }
        Op::Mul => {
            let (a, b) = (node.inputs[0], node.inputs[1]);
            let (a_value, b_value) = (nodes[a.index()].value, nodes[b.index()].value);
            pass[a.index()] += b_value * upstream;
            pass[b.index()] += a_value * upstream;
        }
        Op::Pow(exponent) => {
            let a = node.inputs[0];
            pass[a.index()] += pow_local_grad(nodes[a.index()].value, exponent) * upstream;
        }
        Op::Exp => {
            // d/dx e^x = e^x, which is this node's own value.
            let a = node.inputs[0];
            pass[a.index()] += node.value * upstream;
        }
        Op::Tanh => {
            let a = node.inputs[0];
            pass[a.index()] += (1.0 - node.value * node.value) * upstream;
        }
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
