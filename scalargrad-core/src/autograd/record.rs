// scalargrad-core/src/autograd/record.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use serde::{Deserialize, Serialize};
use std::mem;

/// Tree-shaped snapshot of the graph below a node, for external renderers.
///
/// A node shared by several consumers is repeated once per path, so the
/// record is a tree even when the graph is a DAG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub label: String,
    pub value: f64,
    pub grad: f64,
    /// Operation symbol: `""`, `"+"`, `"*"`, `"pow"`, `"exp"` or `"tanh"`.
    pub op: String,
    pub children: Vec<GraphRecord>,
}

impl GraphRecord {
    /// Total number of records in this tree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(record) = stack.pop() {
            count += 1;
            stack.extend(record.children.iter());
        }
        count
    }
}

// Deep chains would otherwise be dropped through one stack frame per level.
impl Drop for GraphRecord {
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.children);
        while let Some(mut record) = stack.pop() {
            stack.append(&mut record.children);
        }
    }
}

impl Graph {
    /// Serializes `root` and everything it was computed from into a
    /// [`GraphRecord`] tree, using only public node fields.
    ///
    /// The walk uses an explicit stack, so graph depth is not limited by the
    /// thread's stack size.
    pub fn to_record(&self, root: NodeId) -> GraphRecord {
        // (node, whether its inputs have already been scheduled)
        let mut pending = vec![(root, false)];
        // Finished records; a node's children sit on top, in input order,
        // when the node is revisited.
        let mut built: Vec<GraphRecord> = Vec::new();

        while let Some((id, expanded)) = pending.pop() {
            let node = self.node(id);
            if expanded {
                let children = built.split_off(built.len() - node.inputs().len());
                built.push(GraphRecord {
                    label: node.label().to_string(),
                    value: node.value(),
                    grad: node.grad(),
                    op: node.op().symbol().to_string(),
                    children,
                });
            } else {
                pending.push((id, true));
                pending.extend(node.inputs().iter().rev().map(|&input| (input, false)));
            }
        }

        debug_assert_eq!(built.len(), 1);
        built.swap_remove(0)
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
