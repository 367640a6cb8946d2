//! Dense univariate polynomial view over expressions
//!
//! Sign analysis needs to know where an expression crosses zero. This module
//! extracts the coefficients of an expression that is polynomial in one
//! symbol and locates its real roots, for degrees up to two. Anything it
//! cannot express reports `None`, which callers surface as an ambiguous-sign
//! failure rather than a guess.

use crate::expr::{Expr, Symbol};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

/// Largest exponent unfolded during coefficient extraction
const MAX_POLYNOMIAL_POWER: i64 = 32;

/// Coefficients indexed by degree; the zero polynomial has no coefficients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<Decimal>,
}

impl Polynomial {
    fn new(mut coefficients: Vec<Decimal>) -> Self {
        while coefficients.last().is_some_and(|c| c.is_zero()) {
            coefficients.pop();
        }
        Polynomial { coefficients }
    }

    fn zero() -> Self {
        Polynomial {
            coefficients: Vec::new(),
        }
    }

    fn constant(value: Decimal) -> Self {
        Polynomial::new(vec![value])
    }

    fn variable() -> Self {
        Polynomial::new(vec![Decimal::ZERO, Decimal::ONE])
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Degree of the polynomial; `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn coefficient(&self, degree: usize) -> Decimal {
        self.coefficients
            .get(degree)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Interpret `expr` as a polynomial in `variable`
    ///
    /// Returns `None` when the expression mentions another symbol, uses a
    /// negative or non-integer exponent, or nests powers too deep.
    pub fn from_expr(expr: &Expr, variable: &Symbol) -> Option<Polynomial> {
        match expr {
            Expr::Number(n) => Some(Polynomial::constant(*n)),
            Expr::Symbol(s) => {
                if s.name() == variable.name() {
                    Some(Polynomial::variable())
                } else {
                    None
                }
            }
            Expr::Add(terms) => {
                let mut sum = Polynomial::zero();
                for term in terms {
                    sum = sum.add(&Polynomial::from_expr(term, variable)?);
                }
                Some(sum)
            }
            Expr::Mul(factors) => {
                let mut product = Polynomial::constant(Decimal::ONE);
                for factor in factors {
                    product = product.mul(&Polynomial::from_expr(factor, variable)?);
                }
                Some(product)
            }
            Expr::Pow(base, exponent) => {
                let exponent = match exponent.as_number() {
                    Some(n) if n.fract().is_zero() => n.to_i64()?,
                    _ => return None,
                };
                if !(0..=MAX_POLYNOMIAL_POWER).contains(&exponent) {
                    return None;
                }
                let base = Polynomial::from_expr(base, variable)?;
                let mut power = Polynomial::constant(Decimal::ONE);
                for _ in 0..exponent {
                    power = power.mul(&base);
                }
                Some(power)
            }
        }
    }

    fn add(&self, other: &Polynomial) -> Polynomial {
        let len = self.coefficients.len().max(other.coefficients.len());
        let mut coefficients = Vec::with_capacity(len);
        for degree in 0..len {
            coefficients.push(self.coefficient(degree) + other.coefficient(degree));
        }
        Polynomial::new(coefficients)
    }

    fn mul(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let len = self.coefficients.len() + other.coefficients.len() - 1;
        let mut coefficients = vec![Decimal::ZERO; len];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }
        Polynomial::new(coefficients)
    }

    /// Evaluate at `x` by Horner's scheme
    pub fn eval(&self, x: Decimal) -> Decimal {
        let mut value = Decimal::ZERO;
        for coefficient in self.coefficients.iter().rev() {
            value = value * x + coefficient;
        }
        value
    }

    /// Real roots in ascending order
    ///
    /// `None` means the roots cannot be located (degree above two, or a
    /// discriminant whose square root is not representable). The zero
    /// polynomial also reports `None`: every point is a root, which callers
    /// must treat separately via [`Polynomial::is_zero`].
    pub fn real_roots(&self) -> Option<Vec<Decimal>> {
        let two = Decimal::from(2);
        match self.degree()? {
            0 => Some(Vec::new()),
            1 => {
                let root = -self.coefficient(0) / self.coefficient(1);
                Some(vec![root])
            }
            2 => {
                let a = self.coefficient(2);
                let b = self.coefficient(1);
                let c = self.coefficient(0);
                let discriminant = b * b - Decimal::from(4) * a * c;
                if discriminant.is_sign_negative() && !discriminant.is_zero() {
                    return Some(Vec::new());
                }
                if discriminant.is_zero() {
                    return Some(vec![-b / (two * a)]);
                }
                let sqrt = discriminant.sqrt()?;
                let mut roots = vec![(-b - sqrt) / (two * a), (-b + sqrt) / (two * a)];
                roots.sort();
                Some(roots)
            }
            _ => None,
        }
    }
}
