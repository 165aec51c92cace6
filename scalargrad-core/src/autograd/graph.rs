// scalargrad-core/src/autograd/graph.rs

use crate::autograd::node::{Node, NodeId, Op, Operand};
use crate::error::ScalarGradError;
use log::{debug, trace, warn};

/// Arena owning every node of a computation graph.
///
/// Nodes are addressed by [`NodeId`]. Accessors panic when given an id that
/// does not belong to this graph (or was discarded by [`Graph::truncate`]),
/// the same way slice indexing does.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

/// DFS state used by [`Graph::topological_order`].
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    Active,
    Done,
}

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    // --- Leaf construction ---

    /// Creates an unlabeled leaf holding `value`, with zero gradient.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(value, String::new()))
    }

    /// Creates a leaf holding `value` with a display label.
    pub fn labeled_leaf(&mut self, value: f64, label: impl Into<String>) -> NodeId {
        self.push(Node::leaf(value, label.into()))
    }

    // --- Accessors ---

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn value(&self, id: NodeId) -> f64 {
        self.nodes[id.0].value
    }

    pub fn grad(&self, id: NodeId) -> f64 {
        self.nodes[id.0].grad
    }

    pub fn op(&self, id: NodeId) -> Op {
        self.nodes[id.0].op
    }

    pub fn inputs(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].inputs
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.0].label
    }

    /// Replaces the display label of a node. Labels carry no semantics.
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) {
        self.nodes[id.0].label = label.into();
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all nodes in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    // --- Mutation ---

    /// Resets the gradient of every node to zero.
    pub fn zero_grad(&mut self) {
        for node in &mut self.nodes {
            node.grad = 0.0;
        }
    }

    /// Resets the gradient of a single node to zero.
    pub fn clear_grad(&mut self, id: NodeId) {
        self.nodes[id.0].grad = 0.0;
    }

    /// Overwrites the value of a leaf, e.g. a parameter update during training.
    ///
    /// Nodes derived from the leaf are not recomputed; rebuild the forward pass
    /// to observe the new value downstream.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> Result<(), ScalarGradError> {
        let node = &mut self.nodes[id.0];
        if !node.is_leaf() {
            return Err(ScalarGradError::NonLeafMutation { node: id.0 });
        }
        node.value = value;
        Ok(())
    }

    /// Discards every node created after the first `len` nodes.
    ///
    /// No surviving node can reference a discarded one, since inputs are always
    /// older than their consumers. Ids of discarded nodes become invalid.
    pub fn truncate(&mut self, len: usize) {
        if len > self.nodes.len() {
            warn!(
                "Graph::truncate: requested length {} exceeds current length {}, ignoring",
                len,
                self.nodes.len()
            );
            return;
        }
        debug!(
            "Graph::truncate: discarding {} nodes",
            self.nodes.len() - len
        );
        self.nodes.truncate(len);
    }

    // --- Internal construction helpers (used by ops) ---

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Value an operand would have, without creating a node for constants.
    pub(crate) fn operand_value(&self, operand: Operand) -> f64 {
        match operand {
            Operand::Node(id) => self.value(id),
            Operand::Const(value) => value,
        }
    }

    /// Turns an operand into a node id, coercing constants into fresh leaves.
    pub(crate) fn materialize(&mut self, operand: Operand) -> NodeId {
        match operand {
            Operand::Node(id) => {
                assert!(id.0 < self.nodes.len(), "node {} does not belong to this graph", id.0);
                id
            }
            Operand::Const(value) => self.leaf(value),
        }
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    // --- Traversal ---

    /// Returns every node reachable from `root` through `inputs`, ordered so
    /// that each node comes after all of its inputs. `root` is last.
    ///
    /// Each node appears once, however many consumers it has.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        assert!(root.0 < self.nodes.len(), "node {} does not belong to this graph", root.0);

        let mut marks = vec![Mark::Unvisited; root.0 + 1];
        let mut order = Vec::new();
        // (node, position of the next input to visit)
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
        marks[root.0] = Mark::Active;

        while let Some(frame) = stack.last_mut() {
            let (id, next) = *frame;
            let inputs = &self.nodes[id.0].inputs;

            if next < inputs.len() {
                frame.1 += 1;
                let input = inputs[next];
                if input.0 >= id.0 {
                    return Err(ScalarGradError::InternalConsistency(format!(
                        "node {} consumes node {}, which was not constructed before it",
                        id.0, input.0
                    )));
                }
                match marks[input.0] {
                    Mark::Unvisited => {
                        marks[input.0] = Mark::Active;
                        stack.push((input, 0));
                    }
                    Mark::Active => {
                        return Err(ScalarGradError::CycleDetected { node: input.0 });
                    }
                    Mark::Done => {
                        trace!("topological_order: node {} already visited", input.0);
                    }
                }
            } else {
                marks[id.0] = Mark::Done;
                order.push(id);
                stack.pop();
            }
        }

        Ok(order)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
