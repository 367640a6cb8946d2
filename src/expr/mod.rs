//! Symbolic expression core
//!
//! Expressions are immutable trees over decimal numbers and named symbols.
//! Sums and products are n-ary (flattened), so like terms and like factors
//! sit at the same level and can be collected in one pass. Subtraction and
//! division have no node of their own: `a - b` is `a + (-1)*b` and `a / b`
//! is `a * b^-1`, which keeps one source of truth for every rule that cares
//! about increasing/decreasing behavior.

pub mod polynomial;
mod simplify;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops;

/// Sign information attached to a symbol at construction time
///
/// The analogue of declaring a symbol positive or negative in an assumption
/// system; `Unspecified` symbols have unknown sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SignAssumption {
    Unspecified,
    Positive,
    Negative,
}

/// A named symbolic variable, optionally carrying a sign assumption
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol {
    name: String,
    assumption: SignAssumption,
}

impl Symbol {
    /// Create a symbol with no sign assumption
    pub fn new(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            assumption: SignAssumption::Unspecified,
        }
    }

    /// Create a symbol assumed strictly positive
    pub fn positive(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            assumption: SignAssumption::Positive,
        }
    }

    /// Create a symbol assumed strictly negative
    pub fn negative(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            assumption: SignAssumption::Negative,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn assumption(&self) -> SignAssumption {
        self.assumption
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A symbolic expression
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// A numeric literal
    Number(Decimal),
    /// A reference to a symbol
    Symbol(Symbol),
    /// An n-ary sum
    Add(Vec<Expr>),
    /// An n-ary product
    Mul(Vec<Expr>),
    /// Exponentiation, base then exponent
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Numeric literal expression
    pub fn number(n: impl Into<Decimal>) -> Self {
        Expr::Number(n.into())
    }

    /// Symbol expression with no sign assumption
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(Symbol::new(name))
    }

    /// `base` raised to `exponent`
    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Expr::Pow(Box::new(base), Box::new(exponent))
    }

    /// The reciprocal `expr^-1`
    pub fn recip(expr: Expr) -> Self {
        Expr::pow(expr, Expr::number(-1))
    }

    /// The numeric value, if this expression is a bare literal
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Expr::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Number(n) if n.is_zero())
    }

    /// Whether `symbol` occurs anywhere in this expression (matched by name)
    pub fn contains_symbol(&self, symbol: &Symbol) -> bool {
        match self {
            Expr::Number(_) => false,
            Expr::Symbol(s) => s.name() == symbol.name(),
            Expr::Add(terms) => terms.iter().any(|t| t.contains_symbol(symbol)),
            Expr::Mul(factors) => factors.iter().any(|x| x.contains_symbol(symbol)),
            Expr::Pow(base, exponent) => {
                base.contains_symbol(symbol) || exponent.contains_symbol(symbol)
            }
        }
    }

    /// Canonical simplified form: constants folded, like terms and factors
    /// collected, trivial powers removed
    pub fn simplified(&self) -> Expr {
        simplify::simplify(self)
    }

    /// Distribute products over sums and expand small integer powers of
    /// sums, then simplify
    pub fn expanded(&self) -> Expr {
        simplify::expand(self)
    }

    /// Evaluate numerically with `variable` bound to `value`
    ///
    /// Returns `None` if the expression mentions any other symbol, or uses
    /// an exponent that is not an integer (or sits on a zero base while
    /// negative).
    pub fn eval_at(&self, variable: &Symbol, value: Decimal) -> Option<Decimal> {
        use rust_decimal::prelude::ToPrimitive;
        use rust_decimal::MathematicalOps;

        match self {
            Expr::Number(n) => Some(*n),
            Expr::Symbol(s) => {
                if s.name() == variable.name() {
                    Some(value)
                } else {
                    None
                }
            }
            Expr::Add(terms) => {
                let mut sum = Decimal::ZERO;
                for term in terms {
                    sum = sum.checked_add(term.eval_at(variable, value)?)?;
                }
                Some(sum)
            }
            Expr::Mul(factors) => {
                let mut product = Decimal::ONE;
                for factor in factors {
                    product = product.checked_mul(factor.eval_at(variable, value)?)?;
                }
                Some(product)
            }
            Expr::Pow(base, exponent) => {
                let base = base.eval_at(variable, value)?;
                let exponent = exponent.eval_at(variable, value)?;
                if !exponent.fract().is_zero() {
                    return None;
                }
                let exponent = exponent.to_i64()?;
                if base.is_zero() && exponent < 0 {
                    return None;
                }
                base.checked_powi(exponent)
            }
        }
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Expr::Symbol(symbol)
    }
}

impl From<Decimal> for Expr {
    fn from(n: Decimal) -> Self {
        Expr::Number(n)
    }
}

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        match (self, rhs) {
            (Expr::Add(mut left), Expr::Add(right)) => {
                left.extend(right);
                Expr::Add(left)
            }
            (Expr::Add(mut left), term) => {
                left.push(term);
                Expr::Add(left)
            }
            (term, Expr::Add(mut right)) => {
                right.insert(0, term);
                Expr::Add(right)
            }
            (left, right) => Expr::Add(vec![left, right]),
        }
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        match self {
            Expr::Number(n) => Expr::Number(-n),
            other => Expr::Mul(vec![Expr::number(-1), other]),
        }
    }
}

impl ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        self + (-rhs)
    }
}

impl ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        match (self, rhs) {
            (Expr::Mul(mut left), Expr::Mul(right)) => {
                left.extend(right);
                Expr::Mul(left)
            }
            (Expr::Mul(mut left), factor) => {
                left.push(factor);
                Expr::Mul(left)
            }
            (factor, Expr::Mul(mut right)) => {
                right.insert(0, factor);
                Expr::Mul(right)
            }
            (left, right) => Expr::Mul(vec![left, right]),
        }
    }
}

impl ops::Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        self * Expr::recip(rhs)
    }
}

// ---------------------------
// Display
// ---------------------------

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n.normalize()),
            Expr::Symbol(s) => write!(f, "{}", s),
            Expr::Add(terms) => write_sum(f, terms),
            Expr::Mul(factors) => write_product(f, factors),
            Expr::Pow(base, exponent) => write_power(f, base, exponent),
        }
    }
}

/// A term rendered after a minus sign, if the term is negative-led
fn negated_view(term: &Expr) -> Option<Expr> {
    match term {
        Expr::Number(n) if n.is_sign_negative() => Some(Expr::Number(-*n)),
        Expr::Mul(factors) => match factors.first() {
            Some(Expr::Number(n)) if n.is_sign_negative() => {
                let mut rest = factors[1..].to_vec();
                if *n == Decimal::from(-1) && rest.len() == 1 {
                    rest.pop()
                } else if *n == Decimal::from(-1) {
                    Some(Expr::Mul(rest))
                } else {
                    let mut factors = vec![Expr::Number(-*n)];
                    factors.extend(rest);
                    Some(Expr::Mul(factors))
                }
            }
            _ => None,
        },
        _ => None,
    }
}

fn write_sum(f: &mut fmt::Formatter<'_>, terms: &[Expr]) -> fmt::Result {
    for (i, term) in terms.iter().enumerate() {
        if i == 0 {
            write!(f, "{}", term)?;
        } else if let Some(positive) = negated_view(term) {
            write!(f, " - {}", positive)?;
        } else {
            write!(f, " + {}", term)?;
        }
    }
    Ok(())
}

/// Write one factor of a product, parenthesized when needed
fn write_factor(f: &mut fmt::Formatter<'_>, factor: &Expr) -> fmt::Result {
    match factor {
        Expr::Add(_) => write!(f, "({})", factor),
        Expr::Number(n) if n.is_sign_negative() => write!(f, "({})", n.normalize()),
        _ => write!(f, "{}", factor),
    }
}

fn write_product(f: &mut fmt::Formatter<'_>, factors: &[Expr]) -> fmt::Result {
    // Factors with a negative numeric exponent render as a denominator
    let mut numerator: Vec<Expr> = Vec::new();
    let mut denominator: Vec<Expr> = Vec::new();
    for factor in factors {
        match factor {
            Expr::Pow(base, exponent) => match exponent.as_number() {
                Some(n) if n.is_sign_negative() => {
                    let flipped = -n;
                    if flipped == Decimal::ONE {
                        denominator.push((**base).clone());
                    } else {
                        denominator.push(Expr::pow((**base).clone(), Expr::Number(flipped)));
                    }
                }
                _ => numerator.push(factor.clone()),
            },
            _ => numerator.push(factor.clone()),
        }
    }

    if numerator.is_empty() {
        write!(f, "1")?;
    } else if numerator.len() == 2
        && numerator[0] == Expr::number(-1)
        && !matches!(numerator[1], Expr::Number(_))
    {
        write!(f, "-")?;
        write_factor(f, &numerator[1])?;
    } else {
        for (i, factor) in numerator.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            if i == 0 {
                // A leading coefficient needs no parentheses
                match factor {
                    Expr::Add(_) => write!(f, "({})", factor)?,
                    _ => write!(f, "{}", factor)?,
                }
            } else {
                write_factor(f, factor)?;
            }
        }
    }

    if !denominator.is_empty() {
        write!(f, "/")?;
        if denominator.len() == 1 {
            match &denominator[0] {
                Expr::Add(_) | Expr::Mul(_) => write!(f, "({})", denominator[0])?,
                other => write!(f, "{}", other)?,
            }
        } else {
            write!(f, "(")?;
            for (i, factor) in denominator.iter().enumerate() {
                if i > 0 {
                    write!(f, "*")?;
                }
                write_factor(f, factor)?;
            }
            write!(f, ")")?;
        }
    }
    Ok(())
}

fn write_power(f: &mut fmt::Formatter<'_>, base: &Expr, exponent: &Expr) -> fmt::Result {
    // A bare negative power reads better as a fraction: x^-2 as 1/x^2
    if let Some(n) = exponent.as_number() {
        if n.is_sign_negative() {
            let flipped = -n;
            write!(f, "1/")?;
            if flipped == Decimal::ONE {
                return match base {
                    Expr::Add(_) | Expr::Mul(_) | Expr::Pow(..) => write!(f, "({})", base),
                    Expr::Number(b) if b.is_sign_negative() => write!(f, "({})", base),
                    _ => write!(f, "{}", base),
                };
            }
            return write_power(f, base, &Expr::Number(flipped));
        }
    }

    match base {
        Expr::Add(_) | Expr::Mul(_) | Expr::Pow(..) => write!(f, "({})", base)?,
        Expr::Number(n) if n.is_sign_negative() => write!(f, "({})", base)?,
        _ => write!(f, "{}", base)?,
    }
    write!(f, "^")?;
    match exponent {
        Expr::Add(_) | Expr::Mul(_) | Expr::Pow(..) => write!(f, "({})", exponent),
        Expr::Number(n) if n.is_sign_negative() => write!(f, "({})", exponent),
        _ => write!(f, "{}", exponent),
    }
}
