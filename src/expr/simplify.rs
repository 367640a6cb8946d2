//! Canonical simplification
//!
//! Brings expressions to a normal form: nested sums/products flattened,
//! numeric constants folded, like terms collected by their non-numeric key
//! (`5x + x^2 - 5x` becomes `x^2`), like factors collected by base
//! (`x * x^2` becomes `x^3`), and trivial powers removed. Term and factor
//! order is deterministic, so structurally equal inputs simplify to
//! identical trees.

use super::Expr;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use std::collections::BTreeMap;

/// Sums with more factors than this are left unexpanded by `expand`
const MAX_EXPANDED_POWER: i64 = 16;

pub(crate) fn simplify(expr: &Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Symbol(_) => expr.clone(),
        Expr::Add(terms) => simplify_sum(terms.iter().map(simplify).collect()),
        Expr::Mul(factors) => simplify_product(factors.iter().map(simplify).collect()),
        Expr::Pow(base, exponent) => simplify_power(simplify(base), simplify(exponent)),
    }
}

fn simplify_sum(terms: Vec<Expr>) -> Expr {
    let mut flat = Vec::with_capacity(terms.len());
    for term in terms {
        match term {
            Expr::Add(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }

    let mut constant = Decimal::ZERO;
    let mut coefficients: BTreeMap<Expr, Decimal> = BTreeMap::new();
    for term in flat {
        if let Expr::Number(n) = term {
            constant += n;
            continue;
        }
        let (coefficient, key) = split_coefficient(term);
        *coefficients.entry(key).or_default() += coefficient;
    }

    let mut out = Vec::new();
    for (key, coefficient) in coefficients {
        if coefficient.is_zero() {
            continue;
        }
        out.push(scale(coefficient, key));
    }
    if !constant.is_zero() {
        out.push(Expr::Number(constant));
    }

    match out.len() {
        0 => Expr::Number(Decimal::ZERO),
        1 => out.remove(0),
        _ => Expr::Add(out),
    }
}

/// Split a term into its numeric coefficient and the remaining key
fn split_coefficient(term: Expr) -> (Decimal, Expr) {
    match term {
        Expr::Mul(factors) => {
            let mut coefficient = Decimal::ONE;
            let mut rest = Vec::with_capacity(factors.len());
            for factor in factors {
                match factor {
                    Expr::Number(n) => coefficient *= n,
                    other => rest.push(other),
                }
            }
            match rest.len() {
                0 => (coefficient, Expr::Number(Decimal::ONE)),
                1 => (coefficient, rest.remove(0)),
                _ => (coefficient, Expr::Mul(rest)),
            }
        }
        other => (Decimal::ONE, other),
    }
}

fn scale(coefficient: Decimal, key: Expr) -> Expr {
    if key == Expr::Number(Decimal::ONE) {
        return Expr::Number(coefficient);
    }
    if coefficient == Decimal::ONE {
        return key;
    }
    match key {
        Expr::Mul(mut factors) => {
            factors.insert(0, Expr::Number(coefficient));
            Expr::Mul(factors)
        }
        other => Expr::Mul(vec![Expr::Number(coefficient), other]),
    }
}

fn simplify_product(factors: Vec<Expr>) -> Expr {
    let mut flat = Vec::with_capacity(factors.len());
    for factor in factors {
        match factor {
            Expr::Mul(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }

    let mut coefficient = Decimal::ONE;
    let mut exponents: BTreeMap<Expr, Decimal> = BTreeMap::new();
    let mut opaque = Vec::new();
    for factor in flat {
        match factor {
            Expr::Number(n) => {
                if n.is_zero() {
                    return Expr::Number(Decimal::ZERO);
                }
                coefficient *= n;
            }
            Expr::Pow(base, exponent) => match *exponent {
                Expr::Number(n) => *exponents.entry(*base).or_default() += n,
                other => opaque.push(Expr::Pow(base, Box::new(other))),
            },
            other => *exponents.entry(other).or_default() += Decimal::ONE,
        }
    }

    let mut out = Vec::new();
    for (base, exponent) in exponents {
        if exponent.is_zero() {
            continue;
        }
        if let Expr::Number(b) = &base {
            // numeric bases with integer exponents fold into the coefficient
            if exponent.fract().is_zero() && !(b.is_zero() && exponent.is_sign_negative()) {
                if let Some(folded) = exponent.to_i64().and_then(|k| b.checked_powi(k)) {
                    coefficient *= folded;
                    continue;
                }
            }
        }
        if exponent == Decimal::ONE {
            out.push(base);
        } else {
            out.push(Expr::Pow(Box::new(base), Box::new(Expr::Number(exponent))));
        }
    }
    out.extend(opaque);
    out.sort();

    if out.is_empty() {
        return Expr::Number(coefficient);
    }
    if coefficient.is_zero() {
        return Expr::Number(Decimal::ZERO);
    }
    if coefficient != Decimal::ONE {
        out.insert(0, Expr::Number(coefficient));
    }
    match out.len() {
        1 => out.remove(0),
        _ => Expr::Mul(out),
    }
}

fn simplify_power(base: Expr, exponent: Expr) -> Expr {
    if let Expr::Number(n) = &exponent {
        if n.is_zero() {
            return Expr::Number(Decimal::ONE);
        }
        if *n == Decimal::ONE {
            return base;
        }
    }

    if let (Expr::Number(b), Expr::Number(e)) = (&base, &exponent) {
        if e.fract().is_zero() && !(b.is_zero() && e.is_sign_negative()) {
            if let Some(folded) = e.to_i64().and_then(|k| b.checked_powi(k)) {
                return Expr::Number(folded);
            }
        }
    }

    if let Expr::Number(b) = &base {
        if *b == Decimal::ONE {
            return Expr::Number(Decimal::ONE);
        }
        if b.is_zero() {
            if let Expr::Number(e) = &exponent {
                if !e.is_zero() && !e.is_sign_negative() {
                    return Expr::Number(Decimal::ZERO);
                }
            }
        }
    }

    // (x^a)^k collapses and (x*y)^k distributes, for integer k
    let integer_exponent = matches!(&exponent, Expr::Number(n) if n.fract().is_zero());
    if integer_exponent {
        match base {
            Expr::Pow(inner_base, inner_exponent) => {
                let combined = simplify(&Expr::Mul(vec![*inner_exponent, exponent]));
                return simplify_power(*inner_base, combined);
            }
            Expr::Mul(factors) => {
                let factors = factors
                    .into_iter()
                    .map(|factor| simplify_power(factor, exponent.clone()))
                    .collect();
                return simplify_product(factors);
            }
            other => return Expr::Pow(Box::new(other), Box::new(exponent)),
        }
    }

    Expr::Pow(Box::new(base), Box::new(exponent))
}

/// Distribute products over sums and expand small integer powers of sums
pub(crate) fn expand(expr: &Expr) -> Expr {
    let distributed = distribute(expr);
    simplify(&distributed)
}

fn distribute(expr: &Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Symbol(_) => expr.clone(),
        Expr::Add(terms) => Expr::Add(terms.iter().map(distribute).collect()),
        Expr::Mul(factors) => {
            let mut terms = vec![Expr::Number(Decimal::ONE)];
            for factor in factors {
                let factor = distribute(factor);
                let addends = match factor {
                    Expr::Add(inner) => inner,
                    other => vec![other],
                };
                let mut next = Vec::with_capacity(terms.len() * addends.len());
                for term in &terms {
                    for addend in &addends {
                        next.push(term.clone() * addend.clone());
                    }
                }
                terms = next;
            }
            match terms.len() {
                1 => terms.remove(0),
                _ => Expr::Add(terms),
            }
        }
        Expr::Pow(base, exponent) => {
            let base = distribute(base);
            let exponent = distribute(exponent);
            if let (Expr::Add(_), Some(n)) = (&base, exponent.as_number()) {
                if n.fract().is_zero()
                    && n >= Decimal::from(2)
                    && n <= Decimal::from(MAX_EXPANDED_POWER)
                {
                    if let Some(k) = n.to_i64() {
                        let copies = vec![base.clone(); k as usize];
                        return distribute(&Expr::Mul(copies));
                    }
                }
            }
            Expr::Pow(Box::new(base), Box::new(exponent))
        }
    }
}
