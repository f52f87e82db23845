use contracts_examples::toll::{fee, fee_simple, max, rate};
use proptest::prelude::*;

#[test]
fn day_and_night_rates() {
    assert_eq!(rate(12, 1), 90);
    assert_eq!(rate(12, 3), 72);
    assert_eq!(rate(20, 1), 70);
    assert_eq!(rate(20, 4), 56);
}

#[test]
fn daytime_bounds_are_inclusive() {
    assert_eq!(rate(8, 0), 70);
    assert_eq!(rate(9, 0), 90);
    assert_eq!(rate(17, 0), 90);
    assert_eq!(rate(18, 0), 70);
}

#[test]
fn carpool_starts_above_two_passengers() {
    assert_eq!(rate(12, 2), 90);
    assert_eq!(rate(12, 3), 72);
    assert_eq!(rate(3, 2), 70);
    assert_eq!(rate(3, 3), 56);
}

#[test]
fn hours_outside_a_day_are_night() {
    assert_eq!(rate(-5, 1), 70);
    assert_eq!(rate(100, 5), 56);
}

#[test]
fn max_returns_the_larger_value() {
    assert_eq!(max(1, 2), 2);
    assert_eq!(max(2, 1), 2);
    assert_eq!(max(-3, -3), -3);
}

#[test]
fn fees() {
    assert_eq!(fee_simple(12, 20, 1), 360);
    assert_eq!(fee_simple(20, 20, 3), 224);
    assert_eq!(fee(12, 12, 20, 1), 990);
    assert_eq!(fee(20, 20, 20, 1), 770);
    assert_eq!(fee(20, 12, 20, 3), 72 * 4 + 72 * 7);
}

proptest! {
    #[test]
    fn rate_takes_one_of_four_values(hour in any::<i32>(), passengers in 0..10i32) {
        prop_assert!([90, 72, 70, 56].contains(&rate(hour, passengers)));
    }

    #[test]
    fn max_is_commutative(x in any::<i32>(), y in any::<i32>()) {
        prop_assert_eq!(max(x, y), max(y, x));
        prop_assert_eq!(max(x, x), x);
    }

    #[test]
    fn fee_is_the_sum_of_its_sections(
        t1 in 0..24i32,
        t2 in 0..24i32,
        t3 in 0..24i32,
        p in 0..6i32,
    ) {
        prop_assert_eq!(fee(t1, t2, t3, p), fee_simple(t1, t2, p) + max(rate(t2, p), rate(t3, p)) * 7);
    }
}
