use bothsides::{
    both_sides, both_sides_map, BothsidesError, BothsidesResult, Expr, RelOp, Relation, Symbol,
    Transform, TransformOutcome,
};
use rust_decimal::Decimal;

fn x() -> Expr {
    Expr::symbol("x")
}

fn y() -> Expr {
    Expr::symbol("y")
}

fn num(n: i64) -> Expr {
    Expr::number(n)
}

fn pos(name: &str) -> Expr {
    Expr::Symbol(Symbol::positive(name))
}

fn neg(name: &str) -> Expr {
    Expr::Symbol(Symbol::negative(name))
}

fn uniform(outcome: TransformOutcome) -> Relation {
    outcome.as_uniform().expect("uniform outcome").clone()
}

#[test]
fn test_adding_a_quantity_preserves_every_operator() -> BothsidesResult<()> {
    for op in [RelOp::Eq, RelOp::Ne, RelOp::Lt, RelOp::Le, RelOp::Gt, RelOp::Ge] {
        let relation = Relation::new(x(), op, y());
        let outcome = both_sides(&relation, Transform::Add(num(7)))?;
        assert_eq!(uniform(outcome).op, op);
    }
    Ok(())
}

#[test]
fn test_subtracting_reduces_the_documented_equation() -> BothsidesResult<()> {
    // 5x + x^2 = x + 5, minus 5x on both sides
    let equation = Relation::eq(
        num(5) * x() + Expr::pow(x(), num(2)),
        x() + num(5),
    );
    let outcome = both_sides(&equation, Transform::Sub(num(5) * x()))?;
    let reduced = uniform(outcome);
    assert_eq!(reduced.lhs, Expr::pow(x(), num(2)));
    assert_eq!(reduced.rhs, (num(-4) * x() + num(5)).simplified());
    assert_eq!(reduced.to_string(), "x^2 = -4*x + 5");
    Ok(())
}

#[test]
fn test_multiplying_by_a_positive_quantity_preserves() -> BothsidesResult<()> {
    let relation = Relation::lt(x(), y());
    let outcome = both_sides(&relation, Transform::Mul(pos("a")))?;
    let transformed = uniform(outcome);
    assert_eq!(transformed.op, RelOp::Lt);
    assert_eq!(transformed.lhs, (pos("a") * x()).simplified());
    Ok(())
}

#[test]
fn test_multiplying_by_a_negative_quantity_reverses() -> BothsidesResult<()> {
    let relation = Relation::ge(x(), y());
    let outcome = both_sides(&relation, Transform::Mul(num(-3)))?;
    assert_eq!(uniform(outcome).op, RelOp::Le);

    let relation = Relation::lt(x(), y());
    let outcome = both_sides(&relation, Transform::Mul(neg("b")))?;
    assert_eq!(uniform(outcome).op, RelOp::Gt);
    Ok(())
}

#[test]
fn test_multiplying_by_an_unresolved_sign_is_ambiguous() {
    let relation = Relation::lt(x(), y());
    let err = both_sides(&relation, Transform::Mul(Expr::symbol("c"))).unwrap_err();
    assert!(matches!(err, BothsidesError::AmbiguousSign(_)));
}

#[test]
fn test_multiplying_a_strict_inequality_by_zero_fails() {
    for relation in [Relation::lt(x(), y()), Relation::gt(x(), y()), Relation::ne(x(), y())] {
        let err = both_sides(&relation, Transform::Mul(num(0))).unwrap_err();
        assert!(matches!(err, BothsidesError::UnsupportedTransform(_)));
    }
}

#[test]
fn test_multiplying_a_non_strict_inequality_by_zero_collapses() -> BothsidesResult<()> {
    let relation = Relation::le(x(), y());
    let outcome = both_sides(&relation, Transform::Mul(num(0)))?;
    assert_eq!(uniform(outcome), Relation::le(num(0), num(0)));
    Ok(())
}

#[test]
fn test_equalities_transform_unconditionally() -> BothsidesResult<()> {
    // even a sign-dependent transform applies to an equality as is
    let equation = Relation::eq(x(), y());
    let outcome = both_sides(&equation, Transform::Mul(Expr::symbol("c")))?;
    assert_eq!(uniform(outcome).op, RelOp::Eq);

    let outcome = both_sides(&equation, Transform::recip())?;
    let transformed = uniform(outcome);
    assert_eq!(transformed.to_string(), "1/x = 1/y");

    let outcome = both_sides(&equation, Transform::Pow(Expr::symbol("k")))?;
    assert_eq!(uniform(outcome).op, RelOp::Eq);
    Ok(())
}

#[test]
fn test_reciprocal_of_same_signed_sides_reverses() -> BothsidesResult<()> {
    let relation = Relation::gt(pos("x"), pos("y"));
    let outcome = both_sides(&relation, Transform::recip())?;
    let transformed = uniform(outcome);
    assert_eq!(transformed.op, RelOp::Lt);
    assert_eq!(transformed.to_string(), "1/x < 1/y");

    let relation = Relation::lt(neg("x"), neg("y"));
    let outcome = both_sides(&relation, Transform::recip())?;
    assert_eq!(uniform(outcome).op, RelOp::Gt);
    Ok(())
}

#[test]
fn test_reciprocal_of_opposite_signed_sides_preserves() -> BothsidesResult<()> {
    let relation = Relation::gt(pos("x"), neg("y"));
    let outcome = both_sides(&relation, Transform::recip())?;
    let transformed = uniform(outcome);
    assert_eq!(transformed.op, RelOp::Gt);
    assert_eq!(transformed.to_string(), "1/x > 1/y");
    Ok(())
}

#[test]
fn test_reciprocal_of_a_zero_side_fails() {
    let relation = Relation::gt(num(0), neg("y"));
    let err = both_sides(&relation, Transform::recip()).unwrap_err();
    assert!(matches!(err, BothsidesError::Domain(_)));
}

#[test]
fn test_reciprocal_with_unresolved_signs_is_ambiguous() {
    let relation = Relation::gt(x(), y());
    let err = both_sides(&relation, Transform::recip()).unwrap_err();
    assert!(matches!(err, BothsidesError::AmbiguousSign(_)));
}

#[test]
fn test_odd_powers_preserve_without_sign_information() -> BothsidesResult<()> {
    let relation = Relation::lt(x(), y());
    let outcome = both_sides(&relation, Transform::Pow(num(3)))?;
    let transformed = uniform(outcome);
    assert_eq!(transformed.op, RelOp::Lt);
    assert_eq!(transformed.lhs, Expr::pow(x(), num(3)));
    Ok(())
}

#[test]
fn test_even_powers_need_both_sides_pinned() -> BothsidesResult<()> {
    let outcome = both_sides(&Relation::lt(pos("x"), pos("y")), Transform::Pow(num(2)))?;
    assert_eq!(uniform(outcome).op, RelOp::Lt);

    let outcome = both_sides(&Relation::lt(neg("x"), neg("y")), Transform::Pow(num(2)))?;
    assert_eq!(uniform(outcome).op, RelOp::Gt);

    let err = both_sides(&Relation::lt(x(), y()), Transform::Pow(num(2))).unwrap_err();
    assert!(matches!(err, BothsidesError::UnsupportedTransform(_)));

    let err = both_sides(&Relation::lt(neg("x"), pos("y")), Transform::Pow(num(2))).unwrap_err();
    assert!(matches!(err, BothsidesError::UnsupportedTransform(_)));
    Ok(())
}

#[test]
fn test_unruly_exponents_are_unsupported_on_inequalities() {
    for exponent in [num(0), num(-2), Expr::symbol("k"), Expr::number(Decimal::new(5, 1))] {
        let err = both_sides(&Relation::lt(pos("x"), pos("y")), Transform::Pow(exponent))
            .unwrap_err();
        assert!(matches!(err, BothsidesError::UnsupportedTransform(_)));
    }
}

#[test]
fn test_dividing_is_multiplying_by_the_reciprocal() -> BothsidesResult<()> {
    let relation = Relation::lt(x(), y());
    let outcome = both_sides(&relation, Transform::Div(num(2)))?;
    let halved = uniform(outcome);
    assert_eq!(halved.op, RelOp::Lt);
    assert_eq!(halved.lhs, (Expr::number(Decimal::new(5, 1)) * x()).simplified());

    let outcome = both_sides(&relation, Transform::Div(num(-2)))?;
    assert_eq!(uniform(outcome).op, RelOp::Gt);
    Ok(())
}

#[test]
fn test_dividing_by_zero_fails() {
    let relation = Relation::lt(x(), y());
    let err = both_sides(&relation, Transform::Div(num(0))).unwrap_err();
    assert!(matches!(err, BothsidesError::Domain(_)));
}

#[test]
fn test_simplify_and_expand_preserve_the_operator() -> BothsidesResult<()> {
    let relation = Relation::lt(x() + x(), Expr::pow(y() + num(1), num(2)));
    let outcome = both_sides(&relation, Transform::Simplify)?;
    let simplified = uniform(outcome);
    assert_eq!(simplified.op, RelOp::Lt);
    assert_eq!(simplified.lhs, (num(2) * x()).simplified());

    let outcome = both_sides(&relation, Transform::Expand)?;
    let expanded = uniform(outcome);
    assert_eq!(expanded.op, RelOp::Lt);
    assert_eq!(
        expanded.rhs,
        (Expr::pow(y(), num(2)) + num(2) * y() + num(1)).simplified()
    );
    Ok(())
}

#[test]
fn test_map_applies_an_arbitrary_function_to_an_equality() -> BothsidesResult<()> {
    let equation = Relation::eq(x(), y() + num(1));
    let mapped = both_sides_map(&equation, |side| {
        Expr::pow(side.clone(), num(3)) + num(1)
    })?;
    assert_eq!(
        mapped,
        Relation::eq(
            Expr::pow(x(), num(3)) + num(1),
            Expr::pow(y() + num(1), num(3)) + num(1),
        )
    );
    Ok(())
}

#[test]
fn test_map_rejects_inequalities() {
    let relation = Relation::le(x(), y());
    let err = both_sides_map(&relation, |side| side.clone()).unwrap_err();
    assert!(matches!(err, BothsidesError::UnsupportedTransform(_)));
}
