use super::*;
use crate::error::ScalarGradError;

#[test]
fn test_mul_nodes() {
    let mut g = Graph::new();
    let a = g.leaf(5.0);
    let b = g.leaf(3.0);
    let c = mul_op(&mut g, a, b);
    assert_eq!(g.value(c), 15.0);
    assert_eq!(g.op(c), Op::Mul);
}

#[test]
fn test_mul_with_number() {
    let mut g = Graph::new();
    let a = g.leaf(5.0);
    let c = mul_op(&mut g, a, 3.0);
    assert_eq!(g.value(c), 15.0);
}

#[test]
fn test_mul_backward() -> Result<(), ScalarGradError> {
    let mut g = Graph::new();
    let a = g.leaf(5.0);
    let b = g.leaf(3.0);
    let c = mul_op(&mut g, a, b);
    g.backward(c)?;
    assert_eq!(g.grad(a), 3.0);
    assert_eq!(g.grad(b), 5.0);
    assert_eq!(g.grad(c), 1.0);
    Ok(())
}

#[test]
fn test_mul_square_via_shared_input() -> Result<(), ScalarGradError> {
    // c = a * a, dc/da = 2a
    let mut g = Graph::new();
    let a = g.leaf(-4.0);
    let c = mul_op(&mut g, a, a);
    g.backward(c)?;
    assert_eq!(g.value(c), 16.0);
    assert_eq!(g.grad(a), -8.0);
    Ok(())
}

#[test]
fn test_neg_is_mul_by_minus_one() -> Result<(), ScalarGradError> {
    let mut g = Graph::new();
    let a = g.leaf(5.0);
    let b = crate::ops::neg_op(&mut g, a);
    assert_eq!(g.value(b), -5.0);
    assert_eq!(g.op(b), Op::Mul);
    let minus_one = g.inputs(b)[1];
    assert_eq!(g.value(minus_one), -1.0);

    g.backward(b)?;
    assert_eq!(g.grad(a), -1.0);
    Ok(())
}
