use crate::expr::{Expr, Symbol};
use crate::sign::Sign;

fn pos(name: &str) -> Expr {
    Expr::Symbol(Symbol::positive(name))
}

fn neg(name: &str) -> Expr {
    Expr::Symbol(Symbol::negative(name))
}

fn num(n: i64) -> Expr {
    Expr::number(n)
}

#[test]
fn test_number_signs() {
    assert_eq!(num(3).sign(), Sign::Positive);
    assert_eq!(num(-3).sign(), Sign::Negative);
    assert_eq!(num(0).sign(), Sign::Zero);
}

#[test]
fn test_symbol_assumptions() {
    assert_eq!(pos("a").sign(), Sign::Positive);
    assert_eq!(neg("b").sign(), Sign::Negative);
    assert_eq!(Expr::symbol("c").sign(), Sign::Unknown);
}

#[test]
fn test_sums_of_same_signed_terms() {
    assert_eq!((pos("a") + num(2)).sign(), Sign::Positive);
    assert_eq!((neg("b") + num(-1)).sign(), Sign::Negative);
    assert_eq!((pos("a") + neg("b")).sign(), Sign::Unknown);
    assert_eq!((pos("a") + Expr::symbol("c")).sign(), Sign::Unknown);
}

#[test]
fn test_product_sign_parity() {
    assert_eq!((pos("a") * pos("b")).sign(), Sign::Positive);
    assert_eq!((pos("a") * neg("b")).sign(), Sign::Negative);
    assert_eq!((neg("a") * neg("b")).sign(), Sign::Positive);
    assert_eq!((num(0) * Expr::symbol("c")).sign(), Sign::Zero);
    assert_eq!((pos("a") * Expr::symbol("c")).sign(), Sign::Unknown);
}

#[test]
fn test_power_signs() {
    assert_eq!(Expr::pow(neg("a"), num(2)).sign(), Sign::Positive);
    assert_eq!(Expr::pow(neg("a"), num(3)).sign(), Sign::Negative);
    assert_eq!(Expr::pow(Expr::symbol("c"), num(2)).sign(), Sign::Unknown);
    assert_eq!(Expr::pow(pos("a"), num(0)).sign(), Sign::Positive);
}

#[test]
fn test_reciprocal_signs() {
    assert_eq!(Expr::recip(pos("a")).sign(), Sign::Positive);
    assert_eq!(Expr::recip(neg("a")).sign(), Sign::Negative);
    assert_eq!(Expr::recip(num(0)).sign(), Sign::Unknown);
    assert_eq!(Expr::recip(Expr::symbol("c")).sign(), Sign::Unknown);
}

#[test]
fn test_flipped() {
    assert_eq!(Sign::Positive.flipped(), Sign::Negative);
    assert_eq!(Sign::Negative.flipped(), Sign::Positive);
    assert_eq!(Sign::Zero.flipped(), Sign::Zero);
    assert_eq!(Sign::Unknown.flipped(), Sign::Unknown);
}

#[test]
fn test_is_known() {
    assert!(Sign::Positive.is_known());
    assert!(Sign::Zero.is_known());
    assert!(!Sign::Unknown.is_known());
}
