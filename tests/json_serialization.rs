use bothsides::{
    both_sides_within, BothsidesResult, Expr, Interval, Region, Relation, Symbol, Transform,
    TransformOutcome,
};

#[test]
fn test_relation_round_trips_through_json() -> BothsidesResult<()> {
    let relation = Relation::ge(
        Expr::symbol("x") + Expr::number(1),
        Expr::pow(Expr::symbol("x"), Expr::number(2)),
    );
    let json = serde_json::to_string(&relation).expect("serialize");
    let back: Relation = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, relation);
    Ok(())
}

#[test]
fn test_symbol_assumptions_survive_a_round_trip() {
    let expr = Expr::Symbol(Symbol::positive("a")) * Expr::symbol("x");
    let json = serde_json::to_string(&expr).expect("serialize");
    let back: Expr = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, expr);
}

#[test]
fn test_intervals_and_regions_round_trip() {
    let region = Region::Union(vec![
        Region::Interval(Interval::open(-1, 0)),
        Region::Points(vec![5.into()]),
    ]);
    let json = serde_json::to_string(&region).expect("serialize");
    let back: Region = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, region);
}

#[test]
fn test_piecewise_outcomes_round_trip() -> BothsidesResult<()> {
    let x = Expr::symbol("x");
    let relation = Relation::ge(x.clone() + Expr::number(1), Expr::pow(x, Expr::number(2)));
    let outcome = both_sides_within(
        &relation,
        Transform::recip(),
        &Interval::closed(-1, 1),
        &Symbol::new("x"),
    )?;

    let json = serde_json::to_string(&outcome).expect("serialize");
    let back: TransformOutcome = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, outcome);
    Ok(())
}

#[test]
fn test_transforms_round_trip() {
    let transforms = vec![
        Transform::Add(Expr::number(5)),
        Transform::Mul(Expr::symbol("c")),
        Transform::recip(),
        Transform::Simplify,
    ];
    let json = serde_json::to_string(&transforms).expect("serialize");
    let back: Vec<Transform> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, transforms);
}
