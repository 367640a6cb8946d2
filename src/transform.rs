//! Applying a transform to both sides of a relation
//!
//! The operator of the result follows from how the transform behaves on the
//! relevant part of the line: strictly increasing keeps the operator,
//! strictly decreasing reverses it, and sign-dependent transforms split the
//! analyzed interval into cells that each keep or reverse it on their own.
//! Equalities are exempt from all of this: substituting equals into any
//! function yields equals, so they transform unconditionally.
//!
//! Every case without a defined rule fails with a named error. A wrong
//! relation is never returned in place of one.

use crate::error::BothsidesError;
use crate::expr::{Expr, Symbol};
use crate::interval::{Interval, Region};
use crate::relation::{RelOp, Relation};
use crate::sign::Sign;
use crate::solve::sign_regions;
use crate::BothsidesResult;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A transform applied to both sides of a relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transform {
    /// Add a quantity to both sides
    Add(Expr),
    /// Subtract a quantity from both sides
    Sub(Expr),
    /// Multiply both sides by a quantity
    Mul(Expr),
    /// Divide both sides by a quantity
    Div(Expr),
    /// Raise both sides to a power
    Pow(Expr),
    /// Bring both sides to canonical simplified form
    Simplify,
    /// Distribute products over sums on both sides
    Expand,
}

impl Transform {
    /// Take the reciprocal of both sides
    pub fn recip() -> Transform {
        Transform::Pow(Expr::number(-1))
    }

    /// Subtraction becomes adding the negation and division becomes
    /// multiplying by the reciprocal, so the increasing/decreasing rules
    /// live in one place
    fn canonical(self) -> BothsidesResult<Transform> {
        match self {
            Transform::Sub(quantity) => Ok(Transform::Add(-quantity)),
            Transform::Div(quantity) => {
                if quantity.simplified().is_zero() {
                    return Err(BothsidesError::Domain(
                        "cannot divide both sides by zero".to_string(),
                    ));
                }
                Ok(Transform::Mul(Expr::recip(quantity)))
            }
            other => Ok(other),
        }
    }

    /// The transform applied to one expression
    fn apply(&self, expr: &Expr) -> Expr {
        match self {
            Transform::Add(quantity) => (expr.clone() + quantity.clone()).simplified(),
            Transform::Sub(quantity) => (expr.clone() - quantity.clone()).simplified(),
            Transform::Mul(quantity) => (expr.clone() * quantity.clone()).simplified(),
            Transform::Div(quantity) => (expr.clone() / quantity.clone()).simplified(),
            Transform::Pow(exponent) => {
                Expr::pow(expr.clone(), exponent.clone()).simplified()
            }
            Transform::Simplify => expr.simplified(),
            Transform::Expand => expr.expanded(),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Add(quantity) => write!(f, "add {}", quantity),
            Transform::Sub(quantity) => write!(f, "subtract {}", quantity),
            Transform::Mul(quantity) => write!(f, "multiply by {}", quantity),
            Transform::Div(quantity) => write!(f, "divide by {}", quantity),
            Transform::Pow(exponent) => write!(f, "raise to the power {}", exponent),
            Transform::Simplify => write!(f, "simplify"),
            Transform::Expand => write!(f, "expand"),
        }
    }
}

/// One sub-region case of a piecewise result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCase {
    pub region: Region,
    pub relation: Relation,
}

impl fmt::Display for RegionCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "on {}: {}", self.region, self.relation)
    }
}

/// Result of a both-sides transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformOutcome {
    /// A single relation, valid everywhere
    Uniform(Relation),
    /// Relations valid on pairwise-disjoint sub-regions of the analyzed
    /// interval
    Piecewise(Vec<RegionCase>),
}

impl TransformOutcome {
    /// The single relation, when the outcome is uniform
    pub fn as_uniform(&self) -> Option<&Relation> {
        match self {
            TransformOutcome::Uniform(relation) => Some(relation),
            TransformOutcome::Piecewise(_) => None,
        }
    }

    /// The sub-region cases, when the outcome is piecewise
    pub fn as_piecewise(&self) -> Option<&[RegionCase]> {
        match self {
            TransformOutcome::Uniform(_) => None,
            TransformOutcome::Piecewise(cases) => Some(cases),
        }
    }
}

impl fmt::Display for TransformOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformOutcome::Uniform(relation) => write!(f, "{}", relation),
            TransformOutcome::Piecewise(cases) => {
                for (i, case) in cases.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", case)?;
                }
                Ok(())
            }
        }
    }
}

/// Both sides transformed, with the operator swapped in
fn applied(relation: &Relation, transform: &Transform, op: RelOp) -> Relation {
    Relation::new(
        transform.apply(&relation.lhs),
        op,
        transform.apply(&relation.rhs),
    )
}

/// Apply `transform` to both sides of `relation`, resolving sign-dependent
/// cases from symbol assumptions alone
///
/// Fails with [`BothsidesError::AmbiguousSign`] when a sign is needed and
/// the assumptions do not pin it down; [`both_sides_within`] is the entry
/// point that analyzes signs over an interval instead.
pub fn both_sides(relation: &Relation, transform: Transform) -> BothsidesResult<TransformOutcome> {
    let transform = transform.canonical()?;

    // Equals substituted into any function stay equal
    if relation.op == RelOp::Eq {
        return Ok(TransformOutcome::Uniform(applied(
            relation,
            &transform,
            RelOp::Eq,
        )));
    }

    match &transform {
        Transform::Add(_) | Transform::Simplify | Transform::Expand => Ok(
            TransformOutcome::Uniform(applied(relation, &transform, relation.op)),
        ),
        Transform::Mul(multiplier) => mul_global(relation, &transform, multiplier),
        Transform::Pow(exponent) => pow_global(relation, &transform, exponent),
        Transform::Sub(_) | Transform::Div(_) => unreachable!("canonicalized away"),
    }
}

/// Apply an arbitrary function to both sides of an equality
///
/// Only equalities survive an arbitrary function; for any other operator
/// nothing can be said without monotonicity information, so the call fails
/// with [`BothsidesError::UnsupportedTransform`].
pub fn both_sides_map<F>(relation: &Relation, f: F) -> BothsidesResult<Relation>
where
    F: Fn(&Expr) -> Expr,
{
    if relation.op != RelOp::Eq {
        return Err(BothsidesError::UnsupportedTransform(format!(
            "an arbitrary function can only be applied to an equality, got {}",
            relation
        )));
    }
    Ok(Relation::eq(f(&relation.lhs), f(&relation.rhs)))
}

/// Apply `transform` to both sides of `relation`, analyzing signs over
/// `interval` in `variable`
///
/// Sign-dependent transforms partition the interval into cells of constant
/// monotonicity and return one case per cell. Points where the transform is
/// singular (poles of a reciprocal, zeros of an even power's sides) belong
/// to no case.
pub fn both_sides_within(
    relation: &Relation,
    transform: Transform,
    interval: &Interval,
    variable: &Symbol,
) -> BothsidesResult<TransformOutcome> {
    let transform = transform.canonical()?;

    if relation.op == RelOp::Eq {
        return Ok(TransformOutcome::Uniform(applied(
            relation,
            &transform,
            RelOp::Eq,
        )));
    }

    match &transform {
        Transform::Add(_) | Transform::Simplify | Transform::Expand => Ok(
            TransformOutcome::Uniform(applied(relation, &transform, relation.op)),
        ),
        Transform::Mul(multiplier) => {
            mul_within(relation, &transform, multiplier, interval, variable)
        }
        Transform::Pow(exponent) => {
            pow_within(relation, &transform, exponent, interval, variable)
        }
        Transform::Sub(_) | Transform::Div(_) => unreachable!("canonicalized away"),
    }
}

// ---------------------------
// Global (assumption-based) cases
// ---------------------------

fn mul_global(
    relation: &Relation,
    transform: &Transform,
    multiplier: &Expr,
) -> BothsidesResult<TransformOutcome> {
    match multiplier.simplified().sign() {
        Sign::Positive => Ok(TransformOutcome::Uniform(applied(
            relation,
            transform,
            relation.op,
        ))),
        Sign::Negative => Ok(TransformOutcome::Uniform(applied(
            relation,
            transform,
            relation.op.reversed(),
        ))),
        Sign::Zero => Ok(TransformOutcome::Uniform(zero_multiplier(relation)?)),
        Sign::Unknown => Err(BothsidesError::AmbiguousSign(format!(
            "the sign of {} is not determined by assumptions; supply an interval",
            multiplier
        ))),
    }
}

/// Multiplying by zero sends both sides to zero, which no strict relation
/// survives; `<=` and `>=` collapse to the trivial `0 <= 0` / `0 >= 0`
fn zero_multiplier(relation: &Relation) -> BothsidesResult<Relation> {
    if relation.op.is_strict() || relation.op == RelOp::Ne {
        return Err(BothsidesError::UnsupportedTransform(format!(
            "multiplying {} by zero cannot produce a valid {} relation",
            relation,
            relation.op.symbol()
        )));
    }
    Ok(Relation::new(
        Expr::number(0),
        relation.op,
        Expr::number(0),
    ))
}

fn pow_global(
    relation: &Relation,
    transform: &Transform,
    exponent: &Expr,
) -> BothsidesResult<TransformOutcome> {
    match integer_exponent(exponent) {
        Some(-1) => recip_global(relation, transform),
        Some(k) if k >= 1 && k % 2 == 1 => {
            // odd powers are strictly increasing on the whole line
            Ok(TransformOutcome::Uniform(applied(
                relation,
                transform,
                relation.op,
            )))
        }
        Some(k) if k >= 2 => even_pow_global(relation, transform, k),
        _ => Err(BothsidesError::UnsupportedTransform(format!(
            "raising {} to the power {} has no defined rule",
            relation, exponent
        ))),
    }
}

fn integer_exponent(exponent: &Expr) -> Option<i64> {
    match exponent.simplified().as_number() {
        Some(n) if n.fract().is_zero() => n.to_i64(),
        _ => None,
    }
}

/// Reciprocal reverses the operator when the sides share a sign and keeps
/// it when they straddle zero
fn recip_global(relation: &Relation, transform: &Transform) -> BothsidesResult<TransformOutcome> {
    let lhs_sign = relation.lhs.simplified().sign();
    let rhs_sign = relation.rhs.simplified().sign();
    if lhs_sign == Sign::Zero || rhs_sign == Sign::Zero {
        return Err(BothsidesError::Domain(format!(
            "cannot take the reciprocal of {}: one side is zero",
            relation
        )));
    }
    match (lhs_sign, rhs_sign) {
        (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => {
            Ok(TransformOutcome::Uniform(applied(
                relation,
                transform,
                relation.op.reversed(),
            )))
        }
        (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => {
            Ok(TransformOutcome::Uniform(applied(
                relation,
                transform,
                relation.op,
            )))
        }
        _ => Err(BothsidesError::AmbiguousSign(format!(
            "the side signs of {} are not determined by assumptions; supply an interval",
            relation
        ))),
    }
}

/// Even powers order magnitudes, so both sides must be pinned to one sign
fn even_pow_global(
    relation: &Relation,
    transform: &Transform,
    k: i64,
) -> BothsidesResult<TransformOutcome> {
    let lhs_sign = relation.lhs.simplified().sign();
    let rhs_sign = relation.rhs.simplified().sign();
    match (lhs_sign, rhs_sign) {
        (Sign::Positive, Sign::Positive) => Ok(TransformOutcome::Uniform(applied(
            relation,
            transform,
            relation.op,
        ))),
        (Sign::Negative, Sign::Negative) => Ok(TransformOutcome::Uniform(applied(
            relation,
            transform,
            relation.op.reversed(),
        ))),
        _ => Err(BothsidesError::UnsupportedTransform(format!(
            "raising {} to the even power {} needs both sides pinned to one sign",
            relation, k
        ))),
    }
}

// ---------------------------
// Interval (partitioning) cases
// ---------------------------

fn mul_within(
    relation: &Relation,
    transform: &Transform,
    multiplier: &Expr,
    interval: &Interval,
    variable: &Symbol,
) -> BothsidesResult<TransformOutcome> {
    let multiplier = multiplier.simplified();
    if multiplier.is_zero() {
        return Ok(TransformOutcome::Piecewise(vec![RegionCase {
            region: Region::Interval(*interval),
            relation: zero_multiplier(relation)?,
        }]));
    }

    let regions = sign_regions(&multiplier, variable, interval)?;
    let mut cases = Vec::new();
    for cell in &regions.positive {
        cases.push(RegionCase {
            region: Region::Interval(*cell),
            relation: applied(relation, transform, relation.op),
        });
    }
    for cell in &regions.negative {
        cases.push(RegionCase {
            region: Region::Interval(*cell),
            relation: applied(relation, transform, relation.op.reversed()),
        });
    }
    // Where the multiplier vanishes, non-strict relations collapse to
    // 0 <= 0; strict relations and != have no valid form there and the
    // points carry no case
    if !relation.op.is_strict() && relation.op != RelOp::Ne {
        if let Some(region) = Region::from_points(regions.zeros) {
            cases.push(RegionCase {
                region,
                relation: Relation::new(Expr::number(0), relation.op, Expr::number(0)),
            });
        }
    }
    sort_cases(&mut cases);
    Ok(TransformOutcome::Piecewise(cases))
}

fn pow_within(
    relation: &Relation,
    transform: &Transform,
    exponent: &Expr,
    interval: &Interval,
    variable: &Symbol,
) -> BothsidesResult<TransformOutcome> {
    match integer_exponent(exponent) {
        Some(-1) => recip_within(relation, transform, interval, variable),
        Some(k) if k >= 1 && k % 2 == 1 => Ok(TransformOutcome::Uniform(applied(
            relation,
            transform,
            relation.op,
        ))),
        Some(k) if k >= 2 => even_pow_within(relation, transform, interval, variable),
        _ => Err(BothsidesError::UnsupportedTransform(format!(
            "raising {} to the power {} has no defined rule",
            relation, exponent
        ))),
    }
}

fn recip_within(
    relation: &Relation,
    transform: &Transform,
    interval: &Interval,
    variable: &Symbol,
) -> BothsidesResult<TransformOutcome> {
    let lhs = sign_regions(&relation.lhs, variable, interval)?;
    let rhs = sign_regions(&relation.rhs, variable, interval)?;

    let mut cases = Vec::new();
    // matching side signs reverse the operator, straddling signs keep it;
    // zeros of either side are poles and belong to no case
    push_intersections(
        &mut cases,
        &lhs.positive,
        &rhs.positive,
        applied(relation, transform, relation.op.reversed()),
    );
    push_intersections(
        &mut cases,
        &lhs.negative,
        &rhs.negative,
        applied(relation, transform, relation.op.reversed()),
    );
    push_intersections(
        &mut cases,
        &lhs.positive,
        &rhs.negative,
        applied(relation, transform, relation.op),
    );
    push_intersections(
        &mut cases,
        &lhs.negative,
        &rhs.positive,
        applied(relation, transform, relation.op),
    );
    sort_cases(&mut cases);
    Ok(TransformOutcome::Piecewise(cases))
}

fn even_pow_within(
    relation: &Relation,
    transform: &Transform,
    interval: &Interval,
    variable: &Symbol,
) -> BothsidesResult<TransformOutcome> {
    let lhs = sign_regions(&relation.lhs, variable, interval)?;
    let rhs = sign_regions(&relation.rhs, variable, interval)?;

    let mut cases = Vec::new();
    // cells where the sides straddle zero compare magnitudes across signs
    // and stay undetermined, so only the matching-sign cells carry cases
    push_intersections(
        &mut cases,
        &lhs.positive,
        &rhs.positive,
        applied(relation, transform, relation.op),
    );
    push_intersections(
        &mut cases,
        &lhs.negative,
        &rhs.negative,
        applied(relation, transform, relation.op.reversed()),
    );
    sort_cases(&mut cases);
    Ok(TransformOutcome::Piecewise(cases))
}

fn push_intersections(
    cases: &mut Vec<RegionCase>,
    left: &[Interval],
    right: &[Interval],
    relation: Relation,
) {
    for a in left {
        for b in right {
            if let Some(overlap) = a.intersect(b) {
                cases.push(RegionCase {
                    region: Region::Interval(overlap),
                    relation: relation.clone(),
                });
            }
        }
    }
}

fn sort_cases(cases: &mut [RegionCase]) {
    cases.sort_by(|a, b| match (a.region.lower_value(), b.region.lower_value()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(&y),
    });
}
