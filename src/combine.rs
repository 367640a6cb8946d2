//! Side-by-side combination of two equalities
//!
//! `a = b` and `c = d` combine into `a op c = b op d`. Only equalities may
//! be combined; inequalities have no side-by-side rule here and are
//! rejected up front.

use crate::error::BothsidesError;
use crate::expr::Expr;
use crate::relation::{RelOp, Relation};
use crate::sign::Sign;
use crate::BothsidesResult;

fn require_equality(relation: &Relation, position: &str) -> BothsidesResult<()> {
    if relation.op == RelOp::Eq {
        Ok(())
    } else {
        Err(BothsidesError::TypeMismatch(format!(
            "the {} argument must be an equality, got {}",
            position, relation
        )))
    }
}

/// `a = b` and `c = d` combined into `a + c = b + d`
pub fn add_equations(eq1: &Relation, eq2: &Relation) -> BothsidesResult<Relation> {
    require_equality(eq1, "first")?;
    require_equality(eq2, "second")?;
    Ok(Relation::eq(
        (eq1.lhs.clone() + eq2.lhs.clone()).simplified(),
        (eq1.rhs.clone() + eq2.rhs.clone()).simplified(),
    ))
}

/// `a = b` and `c = d` combined into `a - c = b - d`
pub fn sub_equations(eq1: &Relation, eq2: &Relation) -> BothsidesResult<Relation> {
    require_equality(eq1, "first")?;
    require_equality(eq2, "second")?;
    Ok(Relation::eq(
        (eq1.lhs.clone() - eq2.lhs.clone()).simplified(),
        (eq1.rhs.clone() - eq2.rhs.clone()).simplified(),
    ))
}

/// `a = b` and `c = d` combined into `a * c = b * d`
pub fn mul_equations(eq1: &Relation, eq2: &Relation) -> BothsidesResult<Relation> {
    require_equality(eq1, "first")?;
    require_equality(eq2, "second")?;
    Ok(Relation::eq(
        (eq1.lhs.clone() * eq2.lhs.clone()).simplified(),
        (eq1.rhs.clone() * eq2.rhs.clone()).simplified(),
    ))
}

/// `a = b` and `c = d` combined into `a / c = b / d`
///
/// Implemented as multiplication by the reciprocal. Fails when a divisor
/// side is provably zero; a side whose sign the assumptions cannot resolve
/// passes through, so the check is best effort rather than a guarantee.
pub fn div_equations(eq1: &Relation, eq2: &Relation) -> BothsidesResult<Relation> {
    require_equality(eq1, "first")?;
    require_equality(eq2, "second")?;

    let divisor_lhs = eq2.lhs.simplified();
    let divisor_rhs = eq2.rhs.simplified();
    if divisor_lhs.sign() == Sign::Zero {
        return Err(BothsidesError::Domain(format!(
            "cannot divide by {}: its left side is zero",
            eq2
        )));
    }
    if divisor_rhs.sign() == Sign::Zero {
        return Err(BothsidesError::Domain(format!(
            "cannot divide by {}: its right side is zero",
            eq2
        )));
    }

    Ok(Relation::eq(
        (eq1.lhs.clone() * Expr::recip(divisor_lhs)).simplified(),
        (eq1.rhs.clone() * Expr::recip(divisor_rhs)).simplified(),
    ))
}
