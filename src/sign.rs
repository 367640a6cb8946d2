//! Sign propagation from symbol assumptions
//!
//! Determines what can be said about the sign of an expression from its
//! structure alone: numeric literals, sign-assumed symbols, sums of
//! same-signed terms, sign parity of products, and even/odd powers.
//! Anything else is `Unknown`, and callers must either supply an interval
//! to analyze over or fail with an ambiguous-sign error.

use crate::expr::{Expr, SignAssumption};
use rust_decimal::Decimal;

/// Resolved sign of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
    Unknown,
}

impl Sign {
    /// Positive and negative trade places; zero and unknown are fixed
    pub fn flipped(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Unknown => Sign::Unknown,
        }
    }

    pub fn is_known(self) -> bool {
        self != Sign::Unknown
    }

    fn of_number(n: Decimal) -> Sign {
        if n.is_zero() {
            Sign::Zero
        } else if n.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

impl Expr {
    /// Sign of this expression as far as assumptions determine it
    pub fn sign(&self) -> Sign {
        match self {
            Expr::Number(n) => Sign::of_number(*n),
            Expr::Symbol(s) => match s.assumption() {
                SignAssumption::Positive => Sign::Positive,
                SignAssumption::Negative => Sign::Negative,
                SignAssumption::Unspecified => Sign::Unknown,
            },
            Expr::Add(terms) => sum_sign(terms),
            Expr::Mul(factors) => product_sign(factors),
            Expr::Pow(base, exponent) => power_sign(base, exponent),
        }
    }
}

fn sum_sign(terms: &[Expr]) -> Sign {
    let mut positives = 0usize;
    let mut negatives = 0usize;
    let mut zeros = 0usize;
    for term in terms {
        match term.sign() {
            Sign::Positive => positives += 1,
            Sign::Negative => negatives += 1,
            Sign::Zero => zeros += 1,
            Sign::Unknown => return Sign::Unknown,
        }
    }
    if positives > 0 && negatives == 0 {
        Sign::Positive
    } else if negatives > 0 && positives == 0 {
        Sign::Negative
    } else if zeros == terms.len() {
        Sign::Zero
    } else {
        Sign::Unknown
    }
}

fn product_sign(factors: &[Expr]) -> Sign {
    let mut negative_parity = false;
    let mut unknown = false;
    for factor in factors {
        match factor.sign() {
            Sign::Positive => {}
            Sign::Negative => negative_parity = !negative_parity,
            Sign::Zero => return Sign::Zero,
            Sign::Unknown => unknown = true,
        }
    }
    if unknown {
        Sign::Unknown
    } else if negative_parity {
        Sign::Negative
    } else {
        Sign::Positive
    }
}

fn power_sign(base: &Expr, exponent: &Expr) -> Sign {
    let base_sign = base.sign();
    let exponent = match exponent.as_number() {
        Some(n) if n.fract().is_zero() => n,
        // fractional or symbolic exponents only make sense on positive bases
        _ => {
            return if base_sign == Sign::Positive {
                Sign::Positive
            } else {
                Sign::Unknown
            }
        }
    };

    if exponent.is_zero() {
        return Sign::Positive;
    }
    if base_sign == Sign::Zero {
        // zero base: positive exponents stay zero, negative ones are undefined
        return if exponent.is_sign_negative() {
            Sign::Unknown
        } else {
            Sign::Zero
        };
    }

    let even = (exponent % Decimal::from(2)).is_zero();
    match base_sign {
        Sign::Positive => Sign::Positive,
        Sign::Negative => {
            if even {
                Sign::Positive
            } else {
                Sign::Negative
            }
        }
        Sign::Zero => Sign::Zero,
        // an even power is nonnegative, but could still be zero
        Sign::Unknown => Sign::Unknown,
    }
}
