//! Sign analysis of an expression over an interval
//!
//! Partitions an interval into the maximal cells on which an expression is
//! positive or negative, with the points where it vanishes kept separately.
//! Coverage is limited to what [`Polynomial`] can express (one variable,
//! degree at most two); everything beyond that is reported as an
//! ambiguous-sign failure rather than guessed at.

use crate::error::BothsidesError;
use crate::expr::polynomial::Polynomial;
use crate::expr::{Expr, Symbol};
use crate::interval::{compare_lower, Bound, Interval};
use crate::sign::Sign;
use crate::BothsidesResult;
use rust_decimal::Decimal;

/// Partition of an interval by the sign of one expression
///
/// `positive` and `negative` hold cells sorted left to right; `zeros` holds
/// the roots inside the interval. The three parts are pairwise disjoint and
/// together cover the interval exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRegions {
    pub positive: Vec<Interval>,
    pub negative: Vec<Interval>,
    pub zeros: Vec<Decimal>,
}

impl SignRegions {
    fn empty() -> Self {
        SignRegions {
            positive: Vec::new(),
            negative: Vec::new(),
            zeros: Vec::new(),
        }
    }

    fn uniform(sign: Sign, interval: Interval) -> Self {
        let mut regions = SignRegions::empty();
        match sign {
            Sign::Positive => regions.positive.push(interval),
            Sign::Negative => regions.negative.push(interval),
            Sign::Zero | Sign::Unknown => {}
        }
        regions
    }
}

/// Where `expr` is positive, negative, and zero on `interval`
///
/// The expression must either be free of `variable` with a sign determined
/// by assumptions, or polynomial in `variable` with locatable roots.
pub fn sign_regions(
    expr: &Expr,
    variable: &Symbol,
    interval: &Interval,
) -> BothsidesResult<SignRegions> {
    let expr = expr.simplified();
    if interval.is_empty() {
        return Ok(SignRegions::empty());
    }

    if !expr.contains_symbol(variable) {
        return match expr.sign() {
            sign @ (Sign::Positive | Sign::Negative) => Ok(SignRegions::uniform(sign, *interval)),
            Sign::Zero => Err(BothsidesError::Domain(format!(
                "{} is zero on all of {}",
                expr, interval
            ))),
            Sign::Unknown => Err(BothsidesError::AmbiguousSign(format!(
                "the sign of {} on {} is not determined by assumptions",
                expr, interval
            ))),
        };
    }

    let polynomial = Polynomial::from_expr(&expr, variable).ok_or_else(|| {
        BothsidesError::AmbiguousSign(format!(
            "cannot analyze the sign of {}: not a polynomial in {}",
            expr, variable
        ))
    })?;
    if polynomial.is_zero() {
        return Err(BothsidesError::Domain(format!(
            "{} is zero on all of {}",
            expr, interval
        )));
    }
    let roots: Vec<Decimal> = polynomial
        .real_roots()
        .ok_or_else(|| {
            BothsidesError::AmbiguousSign(format!(
                "cannot locate the zeros of {} (degree above two)",
                expr
            ))
        })?
        .into_iter()
        .filter(|root| interval.contains(*root))
        .collect();

    // Roots split the interval into cells; each cell keeps one sign, read
    // off at an interior sample point. Interval endpoints keep their own
    // inclusivity unless the endpoint is itself a root.
    let mut cells: Vec<Interval> = Vec::new();
    let mut lower = interval.min;
    for root in &roots {
        let cell = Interval::new(lower, Bound::Exclusive(*root));
        if !cell.is_empty() {
            cells.push(cell);
        }
        lower = Bound::Exclusive(*root);
    }
    let last = Interval::new(lower, interval.max);
    if !last.is_empty() {
        cells.push(last);
    }

    let mut regions = SignRegions {
        positive: Vec::new(),
        negative: Vec::new(),
        zeros: roots,
    };
    for cell in cells {
        if polynomial.eval(sample_point(&cell)).is_sign_negative() {
            regions.negative.push(cell);
        } else {
            regions.positive.push(cell);
        }
    }
    regions.positive.sort_by(compare_lower);
    regions.negative.sort_by(compare_lower);
    Ok(regions)
}

/// Any point strictly inside the cell (or the cell itself, when degenerate)
fn sample_point(cell: &Interval) -> Decimal {
    match (cell.min.value(), cell.max.value()) {
        (Some(min), Some(max)) => (min + max) / Decimal::from(2),
        (Some(min), None) => min + Decimal::ONE,
        (None, Some(max)) => max - Decimal::ONE,
        (None, None) => Decimal::ZERO,
    }
}
