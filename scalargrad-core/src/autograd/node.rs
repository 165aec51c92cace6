// scalargrad-core/src/autograd/node.rs

use std::fmt;

/// Stable handle to a node stored in a [`Graph`](crate::Graph).
///
/// Ids are assigned in construction order, so an input always has a smaller
/// id than every node that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The operation that produced a node.
///
/// `Pow` carries its constant exponent so the backward rule is fully
/// determined by the tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add,
    Mul,
    Pow(f64),
    Exp,
    Tanh,
}

impl Op {
    /// Number of inputs a node with this operation must have.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Pow(_) | Op::Exp | Op::Tanh => 1,
            Op::Add | Op::Mul => 2,
        }
    }

    /// Short symbol used in graph records (`""` for leaves).
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Pow(_) => "pow",
            Op::Exp => "exp",
            Op::Tanh => "tanh",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single scalar in the computation graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) inputs: Vec<NodeId>,
    pub(crate) label: String,
}

impl Node {
    pub(crate) fn leaf(value: f64, label: String) -> Self {
        Node {
            value,
            grad: 0.0,
            op: Op::Leaf,
            inputs: Vec::new(),
            label,
        }
    }

    pub(crate) fn derived(value: f64, op: Op, inputs: Vec<NodeId>, label: String) -> Self {
        debug_assert_eq!(op.arity(), inputs.len());
        Node {
            value,
            grad: 0.0,
            op,
            inputs,
            label,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Gradient accumulated by backward passes so far.
    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> Op {
        self.op
    }

    /// Ordered operands this node was computed from. Empty for leaves.
    pub fn inputs(&self) -> &[NodeId] {
        &self.inputs
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_leaf(&self) -> bool {
        self.op == Op::Leaf
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.value)
    }
}

/// An argument to a graph operation: an existing node or a plain number.
///
/// Plain numbers are coerced into fresh unlabeled leaves when the operation
/// is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Const(f64),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<&NodeId> for Operand {
    fn from(id: &NodeId) -> Self {
        Operand::Node(*id)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Const(value)
    }
}
