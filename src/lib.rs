//! # Bothsides
//!
//! **Algebraic transformations for equations and inequalities**
//!
//! Bothsides combines equalities side by side and applies transforms to
//! both sides of a relation while keeping the relational operator honest:
//! preserved under increasing transforms, reversed under decreasing ones,
//! and split into sub-interval cases when the direction depends on where
//! on the line you are.
//!
//! ## Quick Start
//!
//! ```rust
//! use bothsides::{both_sides, BothsidesResult, Expr, Relation, Transform};
//!
//! fn main() -> BothsidesResult<()> {
//!     let x = Expr::symbol("x");
//!
//!     // 5x + x^2 = x + 5
//!     let equation = Relation::eq(
//!         Expr::number(5) * x.clone() + Expr::pow(x.clone(), Expr::number(2)),
//!         x.clone() + Expr::number(5),
//!     );
//!
//!     // subtracting 5x from both sides leaves x^2 = -4x + 5
//!     let outcome = both_sides(&equation, Transform::Sub(Expr::number(5) * x))?;
//!     let reduced = outcome.as_uniform().expect("equalities transform uniformly");
//!     assert_eq!(reduced.to_string(), "x^2 = -4*x + 5");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Relations
//! A [`Relation`] is two symbolic expressions joined by one of the six
//! relational operators. Relations are immutable; every operation returns
//! a new one.
//!
//! ### Combining equalities
//! [`add_equations`], [`sub_equations`], [`mul_equations`] and
//! [`div_equations`] combine two equalities left-with-left and
//! right-with-right.
//!
//! ### Transforming both sides
//! [`both_sides`] applies a [`Transform`] to both sides of a relation,
//! resolving sign-dependent cases from symbol assumptions.
//! [`both_sides_within`] analyzes signs over an [`Interval`] of a named
//! variable instead, and returns a piecewise result when the transform
//! changes direction across the interval.
//!
//! ### Failure
//! Misuse is answered with a named [`BothsidesError`] variant, never with
//! a silently wrong relation.

pub mod combine;
pub mod error;
pub mod expr;
pub mod interval;
pub mod relation;
pub mod sign;
pub mod solve;
pub mod transform;

pub use combine::{add_equations, div_equations, mul_equations, sub_equations};
pub use error::BothsidesError;
pub use expr::{Expr, SignAssumption, Symbol};
pub use interval::{Bound, Interval, Region};
pub use relation::{RelOp, Relation};
pub use sign::Sign;
pub use solve::{sign_regions, SignRegions};
pub use transform::{
    both_sides, both_sides_map, both_sides_within, RegionCase, Transform, TransformOutcome,
};

/// Result type for bothsides operations
pub type BothsidesResult<T> = Result<T, BothsidesError>;

#[cfg(test)]
mod tests;
