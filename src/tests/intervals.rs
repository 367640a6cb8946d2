use crate::interval::{Bound, Interval, Region};
use rust_decimal::Decimal;

fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

#[test]
fn test_membership_respects_bound_kinds() {
    let interval = Interval::open_closed(0, 2);
    assert!(!interval.contains(dec(0)));
    assert!(interval.contains(dec(1)));
    assert!(interval.contains(dec(2)));
    assert!(!interval.contains(dec(3)));

    let unbounded = Interval::unbounded();
    assert!(unbounded.contains(dec(-1000)));
    assert!(unbounded.contains(dec(1000)));
}

#[test]
fn test_half_bounded_membership() {
    assert!(Interval::at_least(5).contains(dec(5)));
    assert!(!Interval::greater_than(5).contains(dec(5)));
    assert!(Interval::at_most(5).contains(dec(5)));
    assert!(!Interval::less_than(5).contains(dec(5)));
}

#[test]
fn test_emptiness() {
    assert!(Interval::closed(2, 1).is_empty());
    assert!(Interval::open(1, 1).is_empty());
    assert!(Interval::closed_open(1, 1).is_empty());
    assert!(!Interval::closed(1, 1).is_empty());
    assert!(!Interval::open(0, 1).is_empty());
    assert!(!Interval::unbounded().is_empty());
}

#[test]
fn test_intersection() {
    let overlap = Interval::closed(-1, 1).intersect(&Interval::open(0, 2));
    assert_eq!(overlap, Some(Interval::open_closed(0, 1)));

    assert_eq!(Interval::closed(0, 1).intersect(&Interval::closed(2, 3)), None);
    assert_eq!(Interval::open(0, 1).intersect(&Interval::open(1, 2)), None);

    let touching = Interval::closed(0, 1).intersect(&Interval::closed(1, 2));
    assert_eq!(touching, Some(Interval::closed(1, 1)));
}

#[test]
fn test_intersection_with_unbounded() {
    let half = Interval::at_least(0).intersect(&Interval::less_than(5));
    assert_eq!(half, Some(Interval::closed_open(0, 5)));
}

#[test]
fn test_display() {
    assert_eq!(Interval::closed(-1, 1).to_string(), "[-1, 1]");
    assert_eq!(Interval::open(0, 2).to_string(), "(0, 2)");
    assert_eq!(Interval::open_closed(0, 1).to_string(), "(0, 1]");
    assert_eq!(Interval::at_most(3).to_string(), "(-inf, 3]");
    assert_eq!(Interval::greater_than(0).to_string(), "(0, inf)");
}

#[test]
fn test_bound_accessors() {
    assert_eq!(Bound::Inclusive(dec(1)).value(), Some(dec(1)));
    assert_eq!(Bound::Unbounded.value(), None);
    assert!(Bound::Inclusive(dec(1)).is_inclusive());
    assert!(!Bound::Exclusive(dec(1)).is_inclusive());
}

#[test]
fn test_region_from_intervals_drops_empty_and_sorts() {
    let region = Region::from_intervals(vec![
        Interval::open(0, 1),
        Interval::closed(2, 1),
        Interval::closed(-3, -2),
    ]);
    assert_eq!(
        region,
        Some(Region::Union(vec![
            Region::Interval(Interval::closed(-3, -2)),
            Region::Interval(Interval::open(0, 1)),
        ]))
    );
    assert_eq!(Region::from_intervals(vec![Interval::open(1, 1)]), None);
}

#[test]
fn test_region_merges_touching_neighbors() {
    let region = Region::from_intervals(vec![
        Interval::open_closed(0, 1),
        Interval::open(1, 2),
    ]);
    assert_eq!(region, Some(Region::Interval(Interval::open(0, 2))));

    // both ends excluding the meeting point stay separate
    let split = Region::from_intervals(vec![Interval::open(-1, 0), Interval::open_closed(0, 1)]);
    assert_eq!(
        split,
        Some(Region::Union(vec![
            Region::Interval(Interval::open(-1, 0)),
            Region::Interval(Interval::open_closed(0, 1)),
        ]))
    );
}

#[test]
fn test_region_membership() {
    let region = Region::Union(vec![
        Region::Interval(Interval::open(-1, 0)),
        Region::Points(vec![dec(5)]),
    ]);
    assert!(region.contains(Decimal::new(-5, 1)));
    assert!(region.contains(dec(5)));
    assert!(!region.contains(dec(0)));
    assert!(!region.contains(dec(1)));
}

#[test]
fn test_region_display() {
    let region = Region::Union(vec![
        Region::Interval(Interval::open(-1, 0)),
        Region::Interval(Interval::open_closed(0, 1)),
    ]);
    assert_eq!(region.to_string(), "(-1, 0) u (0, 1]");
    assert_eq!(
        Region::Points(vec![dec(0), dec(2)]).to_string(),
        "{0, 2}"
    );
}

#[test]
fn test_region_from_points() {
    assert_eq!(Region::from_points(Vec::new()), None);
    assert_eq!(
        Region::from_points(vec![dec(2), dec(0), dec(2)]),
        Some(Region::Points(vec![dec(0), dec(2)]))
    );
}
