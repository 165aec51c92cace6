use super::*;
use approx::assert_abs_diff_eq;

/// Builds `o = tanh(x1*w1 + x2*w2 + b)` and returns
/// `(graph, [x1, w1, x2, w2, b, x1w1, x2w2, sum, n, o])`.
fn neuron_graph() -> (Graph, [NodeId; 10]) {
    let mut g = Graph::new();
    let x1 = g.labeled_leaf(2.0, "x1");
    let w1 = g.labeled_leaf(-3.0, "w1");
    let x1w1 = g.mul(x1, w1);

    let x2 = g.labeled_leaf(0.0, "x2");
    let w2 = g.labeled_leaf(1.0, "w2");
    let x2w2 = g.mul(x2, w2);

    let sum = g.add(x1w1, x2w2);
    let b = g.labeled_leaf(6.8813735870195432, "b");
    let n = g.add(sum, b);
    let o = g.tanh(n);
    (g, [x1, w1, x2, w2, b, x1w1, x2w2, sum, n, o])
}

#[test]
fn test_backward_full_neuron() -> Result<(), ScalarGradError> {
    let (mut g, [x1, w1, x2, w2, b, x1w1, x2w2, sum, n, o]) = neuron_graph();
    g.backward(o)?;

    assert_abs_diff_eq!(g.value(o), 0.7071067811865476, epsilon = 1e-12);
    assert_abs_diff_eq!(g.value(n), 0.8813735870195432, epsilon = 1e-12);
    assert_abs_diff_eq!(g.grad(x1), -1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(g.grad(w1), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(g.grad(x2), 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(g.grad(w2), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(g.grad(x1w1), 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(g.grad(x2w2), 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(g.grad(sum), 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(g.grad(n), 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(g.grad(b), 0.5, epsilon = 1e-9);
    assert_eq!(g.grad(o), 1.0);
    Ok(())
}

#[test]
fn test_backward_twice_doubles_ancestor_grads() -> Result<(), ScalarGradError> {
    let (mut g, ids) = neuron_graph();
    let o = ids[9];
    g.backward(o)?;
    let first: Vec<f64> = ids.iter().map(|&id| g.grad(id)).collect();

    g.backward(o)?;
    for (&id, &once) in ids[..9].iter().zip(&first) {
        assert_abs_diff_eq!(g.grad(id), 2.0 * once, epsilon = 1e-12);
    }
    // The root is re-seeded, not accumulated.
    assert_eq!(g.grad(o), 1.0);
    Ok(())
}

#[test]
fn test_backward_after_zero_grad_is_repeatable() -> Result<(), ScalarGradError> {
    let (mut g, ids) = neuron_graph();
    let o = ids[9];
    g.backward(o)?;
    let first: Vec<f64> = ids.iter().map(|&id| g.grad(id)).collect();
    g.zero_grad();
    g.backward(o)?;
    let second: Vec<f64> = ids.iter().map(|&id| g.grad(id)).collect();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_backward_leaves_unreachable_nodes_untouched() -> Result<(), ScalarGradError> {
    let mut g = Graph::new();
    let a = g.leaf(2.0);
    let b = g.leaf(3.0);
    let c = g.mul(a, b);
    let other = g.exp(b);
    g.backward(other)?;
    let a_grad = g.grad(a);
    let c_grad = g.grad(c);

    g.backward(c)?;
    // `other` is not an ancestor of `c`, so it keeps its seeded gradient.
    assert_eq!(g.grad(other), 1.0);
    assert_eq!(a_grad, 0.0);
    assert_eq!(c_grad, 0.0);
    assert_eq!(g.grad(a), 3.0);
    // b collected e^3 from the first pass and a from the second.
    assert_abs_diff_eq!(g.grad(b), 3f64.exp() + 2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_backward_diamond_accumulates_every_path() -> Result<(), ScalarGradError> {
    // f = (a*b) + (a+b) * a  => df/da = b + (a+b) + a, df/db = a + a
    let mut g = Graph::new();
    let a = g.leaf(3.0);
    let b = g.leaf(-2.0);
    let ab = g.mul(a, b);
    let a_plus_b = g.add(a, b);
    let right = g.mul(a_plus_b, a);
    let f = g.add(ab, right);
    g.backward(f)?;

    assert_eq!(g.value(f), -6.0 + 3.0);
    assert_eq!(g.grad(a), -2.0 + 1.0 + 3.0);
    assert_eq!(g.grad(b), 3.0 + 3.0);
    Ok(())
}

#[test]
fn test_backward_on_leaf_seeds_only_itself() -> Result<(), ScalarGradError> {
    let mut g = Graph::new();
    let a = g.leaf(4.0);
    g.backward(a)?;
    assert_eq!(g.grad(a), 1.0);
    Ok(())
}

#[test]
fn test_backward_deep_chain() -> Result<(), ScalarGradError> {
    // A long chain must not overflow the stack during traversal.
    let mut g = Graph::new();
    let x = g.leaf(1.0);
    let mut acc = x;
    for _ in 0..50_000 {
        acc = g.add(acc, 0.0);
    }
    g.backward(acc)?;
    assert_eq!(g.grad(x), 1.0);
    Ok(())
}

#[test]
fn test_record_deep_chain() -> Result<(), ScalarGradError> {
    let mut g = Graph::new();
    let x = g.labeled_leaf(1.0, "x");
    let mut acc = x;
    for _ in 0..50_000 {
        acc = g.add(acc, 0.0);
    }
    g.backward(acc)?;

    let record = g.to_record(acc);
    // No node is shared, so every arena node appears exactly once.
    assert_eq!(record.node_count(), g.len());

    let mut depth = 0;
    let mut current = &record;
    while let Some(first) = current.children.first() {
        current = first;
        depth += 1;
    }
    assert_eq!(depth, 50_000);
    assert_eq!(current.label, "x");
    assert_eq!(current.grad, 1.0);
    Ok(())
}

#[test]
fn test_backward_rejects_wrong_arity() {
    let mut g = Graph::new();
    let a = g.leaf(1.0);
    let bad = g.push(Node {
        value: 2.0,
        grad: 0.0,
        op: Op::Add,
        inputs: vec![a],
        label: String::new(),
    });
    let err = g.backward(bad).unwrap_err();
    assert!(matches!(err, ScalarGradError::InternalConsistency(_)));
    assert_eq!(g.grad(a), 0.0);
}
