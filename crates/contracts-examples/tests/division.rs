use contracts_examples::division::{div, pos_div, unchecked};
use contracts_rs::{ContractKind, catch_violation};
use proptest::prelude::*;

#[test]
fn pos_div_small_cases() {
    assert_eq!(pos_div(0, 1), 0);
    assert_eq!(pos_div(0, 7), 0);
    assert_eq!(pos_div(6, 7), 0);
    assert_eq!(pos_div(7, 7), 1);
    assert_eq!(pos_div(7, 2), 3);
    assert_eq!(pos_div(100, 1), 100);
}

#[test]
fn div_truncates_toward_zero() {
    assert_eq!(div(7, 2), 3);
    assert_eq!(div(-7, 2), -3);
    assert_eq!(div(7, -2), -3);
    assert_eq!(div(-7, -2), 3);
    assert_eq!(div(-6, 3), -2);
}

#[test]
fn div_of_zero_is_zero() {
    assert_eq!(div(0, 5), 0);
    assert_eq!(div(0, -5), 0);
}

#[test]
#[should_panic(expected = "precondition of `div` violated: y must not be 0")]
fn div_by_zero_is_a_contract_violation() {
    div(1, 0);
}

#[test]
#[should_panic(expected = "precondition of `pos_div` violated: y must be positive")]
fn pos_div_by_zero_is_a_contract_violation() {
    pos_div(1, 0);
}

#[test]
fn pos_div_rejects_negative_operands() {
    let err = catch_violation(|| pos_div(-1, 2)).unwrap_err();
    assert_eq!(err.kind, ContractKind::Precondition);
    assert_eq!(err.function, "pos_div");
    assert_eq!(err.condition, "x must be non-negative");

    let err = catch_violation(|| pos_div(1, -2)).unwrap_err();
    assert_eq!(err.condition, "y must be positive");
}

#[test]
fn div_by_zero_never_returns_a_number() {
    for x in [-3, 0, 3] {
        let err = catch_violation(|| div(x, 0)).unwrap_err();
        assert_eq!(err.to_string(), "precondition of `div` violated: y must not be 0");
    }
}

proptest! {
    #[test]
    fn pos_div_brackets_the_quotient(x in 0..100_000i32, y in 1..1_000i32) {
        let q = pos_div(x, y);
        prop_assert!(q * y <= x);
        prop_assert!((q + 1) * y > x);
    }

    #[test]
    fn div_matches_native_division(x in -100_000..100_000i32, y in -1_000..1_000i32) {
        prop_assume!(y != 0);
        prop_assert_eq!(div(x, y), x / y);
    }

    #[test]
    fn unchecked_agrees_on_the_domain(x in -10_000..10_000i32, y in -100..100i32) {
        prop_assume!(y != 0);
        prop_assert_eq!(unchecked::div(x, y), div(x, y));
        if x >= 0 && y > 0 {
            prop_assert_eq!(unchecked::pos_div(x, y), pos_div(x, y));
        }
    }
}
