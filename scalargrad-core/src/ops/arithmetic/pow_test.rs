use super::*;
use approx::assert_relative_eq;

#[test]
fn test_pow_positive_exponent() {
    let mut g = Graph::new();
    let a = g.leaf(2.0);
    let c = pow_op(&mut g, a, 3.0).unwrap();
    assert_eq!(g.value(c), 8.0);
    assert_eq!(g.op(c), Op::Pow(3.0));
    assert_eq!(g.label(c), "**3");
}

#[test]
fn test_pow_zero_exponent() {
    let mut g = Graph::new();
    let a = g.leaf(2.0);
    let c = pow_op(&mut g, a, 0.0).unwrap();
    assert_eq!(g.value(c), 1.0);
}

#[test]
fn test_pow_negative_exponent() {
    let mut g = Graph::new();
    let a = g.leaf(2.0);
    let c = pow_op(&mut g, a, -2.0).unwrap();
    assert_eq!(g.value(c), 0.25);
}

#[test]
fn test_pow_backward() -> Result<(), ScalarGradError> {
    let mut g = Graph::new();
    let a = g.leaf(2.0);
    let c = pow_op(&mut g, a, 3.0)?;
    g.backward(c)?;
    assert_eq!(g.grad(a), 12.0);
    assert_eq!(g.grad(c), 1.0);
    Ok(())
}

#[test]
fn test_pow_backward_fractional_exponent() -> Result<(), ScalarGradError> {
    let mut g = Graph::new();
    let a = g.leaf(4.0);
    let c = pow_op(&mut g, a, 0.5)?;
    g.backward(c)?;
    assert_relative_eq!(g.value(c), 2.0);
    assert_relative_eq!(g.grad(a), 0.25);
    Ok(())
}

#[test]
fn test_pow_zero_exponent_at_zero_base_has_zero_grad() -> Result<(), ScalarGradError> {
    let mut g = Graph::new();
    let a = g.leaf(0.0);
    let c = pow_op(&mut g, a, 0.0)?;
    g.backward(c)?;
    assert_eq!(g.value(c), 1.0);
    assert_eq!(g.grad(a), 0.0);
    Ok(())
}

#[test]
fn test_pow_undefined_values_are_domain_errors() {
    let mut g = Graph::new();
    let zero = g.leaf(0.0);
    let negative = g.leaf(-2.0);
    let len_before = g.len();

    assert!(matches!(pow_op(&mut g, zero, -1.0), Err(ScalarGradError::Domain { .. })));
    assert!(matches!(pow_op(&mut g, negative, 0.5), Err(ScalarGradError::Domain { .. })));
    // Value is defined but the derivative is not.
    assert!(matches!(pow_op(&mut g, zero, 0.5), Err(ScalarGradError::Domain { .. })));
    // A constant base is not materialized when the check fails.
    assert!(matches!(pow_op(&mut g, 0.0, -3.0), Err(ScalarGradError::Domain { .. })));
    assert!(matches!(pow_op(&mut g, f64::NAN, 2.0), Err(ScalarGradError::Domain { .. })));

    assert_eq!(g.len(), len_before);
}

#[test]
fn test_pow_overflow_is_not_a_domain_error() -> Result<(), ScalarGradError> {
    let mut g = Graph::new();
    let a = g.leaf(10.0);
    let c = pow_op(&mut g, a, 400.0)?;
    assert!(g.value(c).is_infinite());
    assert!(g.value(c) > 0.0);
    Ok(())
}

#[test]
fn test_pow_negative_base_integer_exponent() -> Result<(), ScalarGradError> {
    let mut g = Graph::new();
    let a = g.leaf(-2.0);
    let cube = pow_op(&mut g, a, 3.0)?;
    let inverse = pow_op(&mut g, a, -1.0)?;
    assert_eq!(g.value(cube), -8.0);
    assert_eq!(g.value(inverse), -0.5);
    g.backward(cube)?;
    assert_eq!(g.grad(a), 12.0);
    Ok(())
}
