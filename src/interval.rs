//! Intervals and regions of the real line
//!
//! Piecewise transform results are keyed by where on the line they hold.
//! An [`Interval`] is one contiguous stretch; a [`Region`] is an interval,
//! a finite set of points, or a union of regions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One end of an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
    Inclusive(Decimal),
    Exclusive(Decimal),
    Unbounded,
}

impl Bound {
    /// The finite endpoint value, if there is one
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Bound::Inclusive(v) | Bound::Exclusive(v) => Some(*v),
            Bound::Unbounded => None,
        }
    }

    pub fn is_inclusive(&self) -> bool {
        matches!(self, Bound::Inclusive(_))
    }
}

/// A contiguous interval of the real line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub min: Bound,
    pub max: Bound,
}

impl Interval {
    pub fn new(min: Bound, max: Bound) -> Self {
        Interval { min, max }
    }

    /// `[min, max]`
    pub fn closed(min: impl Into<Decimal>, max: impl Into<Decimal>) -> Self {
        Interval::new(Bound::Inclusive(min.into()), Bound::Inclusive(max.into()))
    }

    /// `(min, max)`
    pub fn open(min: impl Into<Decimal>, max: impl Into<Decimal>) -> Self {
        Interval::new(Bound::Exclusive(min.into()), Bound::Exclusive(max.into()))
    }

    /// `(min, max]`
    pub fn open_closed(min: impl Into<Decimal>, max: impl Into<Decimal>) -> Self {
        Interval::new(Bound::Exclusive(min.into()), Bound::Inclusive(max.into()))
    }

    /// `[min, max)`
    pub fn closed_open(min: impl Into<Decimal>, max: impl Into<Decimal>) -> Self {
        Interval::new(Bound::Inclusive(min.into()), Bound::Exclusive(max.into()))
    }

    /// `[min, ∞)`
    pub fn at_least(min: impl Into<Decimal>) -> Self {
        Interval::new(Bound::Inclusive(min.into()), Bound::Unbounded)
    }

    /// `(min, ∞)`
    pub fn greater_than(min: impl Into<Decimal>) -> Self {
        Interval::new(Bound::Exclusive(min.into()), Bound::Unbounded)
    }

    /// `(-∞, max]`
    pub fn at_most(max: impl Into<Decimal>) -> Self {
        Interval::new(Bound::Unbounded, Bound::Inclusive(max.into()))
    }

    /// `(-∞, max)`
    pub fn less_than(max: impl Into<Decimal>) -> Self {
        Interval::new(Bound::Unbounded, Bound::Exclusive(max.into()))
    }

    /// The whole real line
    pub fn unbounded() -> Self {
        Interval::new(Bound::Unbounded, Bound::Unbounded)
    }

    pub fn contains(&self, value: Decimal) -> bool {
        let above_min = match self.min {
            Bound::Unbounded => true,
            Bound::Inclusive(m) => value >= m,
            Bound::Exclusive(m) => value > m,
        };
        let below_max = match self.max {
            Bound::Unbounded => true,
            Bound::Inclusive(m) => value <= m,
            Bound::Exclusive(m) => value < m,
        };
        above_min && below_max
    }

    /// Whether the bounds leave no value between them
    pub fn is_empty(&self) -> bool {
        match (self.min.value(), self.max.value()) {
            (Some(min), Some(max)) => match min.cmp(&max) {
                Ordering::Greater => true,
                Ordering::Equal => !(self.min.is_inclusive() && self.max.is_inclusive()),
                Ordering::Less => false,
            },
            _ => false,
        }
    }

    /// Overlap of two intervals; `None` when they do not meet
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let out = Interval::new(
            tighter_lower(self.min, other.min),
            tighter_upper(self.max, other.max),
        );
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }
}

fn tighter_lower(a: Bound, b: Bound) -> Bound {
    use Bound as B;
    match (a, b) {
        (B::Unbounded, x) | (x, B::Unbounded) => x,
        (B::Inclusive(v1), B::Inclusive(v2)) => B::Inclusive(v1.max(v2)),
        (B::Inclusive(v1), B::Exclusive(v2)) => {
            if v1 > v2 {
                B::Inclusive(v1)
            } else {
                B::Exclusive(v2)
            }
        }
        (B::Exclusive(v1), B::Inclusive(v2)) => {
            if v2 > v1 {
                B::Inclusive(v2)
            } else {
                B::Exclusive(v1)
            }
        }
        (B::Exclusive(v1), B::Exclusive(v2)) => B::Exclusive(v1.max(v2)),
    }
}

fn tighter_upper(a: Bound, b: Bound) -> Bound {
    use Bound as B;
    match (a, b) {
        (B::Unbounded, x) | (x, B::Unbounded) => x,
        (B::Inclusive(v1), B::Inclusive(v2)) => B::Inclusive(v1.min(v2)),
        (B::Inclusive(v1), B::Exclusive(v2)) => {
            if v1 < v2 {
                B::Inclusive(v1)
            } else {
                B::Exclusive(v2)
            }
        }
        (B::Exclusive(v1), B::Inclusive(v2)) => {
            if v2 < v1 {
                B::Inclusive(v2)
            } else {
                B::Exclusive(v1)
            }
        }
        (B::Exclusive(v1), B::Exclusive(v2)) => B::Exclusive(v1.min(v2)),
    }
}

/// Order two intervals by their lower bound; an unbounded lower end sorts first
pub(crate) fn compare_lower(a: &Interval, b: &Interval) -> Ordering {
    match (a.min.value(), b.min.value()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(&y),
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min {
            Bound::Inclusive(v) => write!(f, "[{}", v.normalize())?,
            Bound::Exclusive(v) => write!(f, "({}", v.normalize())?,
            Bound::Unbounded => write!(f, "(-inf")?,
        }
        write!(f, ", ")?;
        match self.max {
            Bound::Inclusive(v) => write!(f, "{}]", v.normalize()),
            Bound::Exclusive(v) => write!(f, "{})", v.normalize()),
            Bound::Unbounded => write!(f, "inf)"),
        }
    }
}

/// A subset of the real line: an interval, a finite set of points, or a
/// union of regions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Interval(Interval),
    Points(Vec<Decimal>),
    Union(Vec<Region>),
}

impl Region {
    /// Region covering the given intervals; `None` when all are empty
    ///
    /// Empty intervals are dropped, the rest are sorted by lower bound and
    /// touching neighbors are merged, so the result holds pairwise-disjoint
    /// components.
    pub fn from_intervals(intervals: Vec<Interval>) -> Option<Region> {
        let mut kept: Vec<Interval> = intervals.into_iter().filter(|i| !i.is_empty()).collect();
        kept.sort_by(compare_lower);

        let mut merged: Vec<Interval> = Vec::new();
        for interval in kept {
            if let Some(last) = merged.last_mut() {
                if touches(last, &interval) {
                    last.max = interval.max;
                    continue;
                }
            }
            merged.push(interval);
        }

        match merged.len() {
            0 => None,
            1 => Some(Region::Interval(merged[0])),
            _ => Some(Region::Union(
                merged.into_iter().map(Region::Interval).collect(),
            )),
        }
    }

    /// Region holding exactly the given points; `None` when there are none
    pub fn from_points(mut points: Vec<Decimal>) -> Option<Region> {
        if points.is_empty() {
            return None;
        }
        points.sort();
        points.dedup();
        Some(Region::Points(points))
    }

    pub fn contains(&self, value: Decimal) -> bool {
        match self {
            Region::Interval(interval) => interval.contains(value),
            Region::Points(points) => points.contains(&value),
            Region::Union(regions) => regions.iter().any(|r| r.contains(value)),
        }
    }

    /// Smallest value-side key for ordering regions left to right
    pub(crate) fn lower_value(&self) -> Option<Decimal> {
        match self {
            Region::Interval(interval) => interval.min.value(),
            Region::Points(points) => points.first().copied(),
            Region::Union(regions) => regions.first().and_then(|r| r.lower_value()),
        }
    }
}

/// Whether `a` ends exactly where `b` begins with no gap between them
fn touches(a: &Interval, b: &Interval) -> bool {
    match (a.max.value(), b.min.value()) {
        (Some(end), Some(start)) => {
            end == start && (a.max.is_inclusive() || b.min.is_inclusive())
        }
        _ => false,
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Interval(interval) => write!(f, "{}", interval),
            Region::Points(points) => {
                write!(f, "{{")?;
                for (i, point) in points.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", point.normalize())?;
                }
                write!(f, "}}")
            }
            Region::Union(regions) => {
                for (i, region) in regions.iter().enumerate() {
                    if i > 0 {
                        write!(f, " u ")?;
                    }
                    write!(f, "{}", region)?;
                }
                Ok(())
            }
        }
    }
}
