//! Relational statements over symbolic expressions

use crate::expr::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relational operator of a statement
///
/// A closed set: every transform rule matches exhaustively over these six,
/// so an unhandled case is a compile error rather than a wrong relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl RelOp {
    /// The operator read right to left: `a < b` is `b > a`
    ///
    /// `Eq` and `Ne` are their own reversals. Strictness is never changed;
    /// this table and the identity are the only operator rewrites anywhere
    /// in the crate.
    pub fn reversed(self) -> RelOp {
        match self {
            RelOp::Eq => RelOp::Eq,
            RelOp::Ne => RelOp::Ne,
            RelOp::Lt => RelOp::Gt,
            RelOp::Le => RelOp::Ge,
            RelOp::Gt => RelOp::Lt,
            RelOp::Ge => RelOp::Le,
        }
    }

    pub fn is_equality(self) -> bool {
        matches!(self, RelOp::Eq)
    }

    /// Strict orderings exclude their boundary
    pub fn is_strict(self) -> bool {
        matches!(self, RelOp::Lt | RelOp::Gt)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Eq => "=",
            RelOp::Ne => "!=",
            RelOp::Lt => "<",
            RelOp::Le => "<=",
            RelOp::Gt => ">",
            RelOp::Ge => ">=",
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An immutable relational statement: left side, operator, right side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub lhs: Expr,
    pub op: RelOp,
    pub rhs: Expr,
}

impl Relation {
    pub fn new(lhs: Expr, op: RelOp, rhs: Expr) -> Self {
        Relation { lhs, op, rhs }
    }

    /// `lhs = rhs`
    pub fn eq(lhs: Expr, rhs: Expr) -> Self {
        Relation::new(lhs, RelOp::Eq, rhs)
    }

    /// `lhs != rhs`
    pub fn ne(lhs: Expr, rhs: Expr) -> Self {
        Relation::new(lhs, RelOp::Ne, rhs)
    }

    /// `lhs < rhs`
    pub fn lt(lhs: Expr, rhs: Expr) -> Self {
        Relation::new(lhs, RelOp::Lt, rhs)
    }

    /// `lhs <= rhs`
    pub fn le(lhs: Expr, rhs: Expr) -> Self {
        Relation::new(lhs, RelOp::Le, rhs)
    }

    /// `lhs > rhs`
    pub fn gt(lhs: Expr, rhs: Expr) -> Self {
        Relation::new(lhs, RelOp::Gt, rhs)
    }

    /// `lhs >= rhs`
    pub fn ge(lhs: Expr, rhs: Expr) -> Self {
        Relation::new(lhs, RelOp::Ge, rhs)
    }

    /// The same statement read right to left
    pub fn reversed(&self) -> Relation {
        Relation::new(self.rhs.clone(), self.op.reversed(), self.lhs.clone())
    }

    /// Both sides brought to canonical simplified form
    pub fn simplified(&self) -> Relation {
        Relation::new(self.lhs.simplified(), self.op, self.rhs.simplified())
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}
