//! The examples shown in the crate documentation, kept compiling and honest

use bothsides::{
    add_equations, both_sides, BothsidesResult, Expr, RelOp, Relation, Transform,
};

#[test]
fn test_quick_start_example() -> BothsidesResult<()> {
    let x = Expr::symbol("x");

    // 5x + x^2 = x + 5
    let equation = Relation::eq(
        Expr::number(5) * x.clone() + Expr::pow(x.clone(), Expr::number(2)),
        x.clone() + Expr::number(5),
    );

    let outcome = both_sides(&equation, Transform::Sub(Expr::number(5) * x))?;
    let reduced = outcome.as_uniform().expect("equalities transform uniformly");
    assert_eq!(reduced.to_string(), "x^2 = -4*x + 5");

    Ok(())
}

#[test]
fn test_combining_two_equalities() -> BothsidesResult<()> {
    let x = Expr::symbol("x");
    let y = Expr::symbol("y");

    let first = Relation::eq(x.clone() + y.clone(), Expr::number(10));
    let second = Relation::eq(x - y, Expr::number(4));

    let sum = add_equations(&first, &second)?;
    assert_eq!(sum.to_string(), "2*x = 14");
    assert_eq!(sum.op, RelOp::Eq);
    Ok(())
}
