use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;

/// Checks that a node's value is within `tolerance` of `expected`.
/// Panics with the node's label and both values otherwise.
pub fn check_value_near(graph: &Graph, id: NodeId, expected: f64, tolerance: f64) {
    let actual = graph.value(id);
    let diff = (actual - expected).abs();
    if diff > tolerance {
        panic!(
            "Value mismatch at node {} ('{}'): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            id.index(),
            graph.label(id),
            actual,
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks the gradients of several nodes at once, as `(node, expected)` pairs.
pub fn check_grads_near(graph: &Graph, expected: &[(NodeId, f64)], tolerance: f64) {
    for &(id, expected_grad) in expected {
        let actual = graph.grad(id);
        let diff = (actual - expected_grad).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at node {} ('{}'): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                id.index(),
                graph.label(id),
                actual,
                expected_grad,
                diff,
                tolerance
            );
        }
    }
}
