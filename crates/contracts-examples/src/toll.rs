//! Toll fees for trips through two or three toll stations.
//!
//! Every station charges a [`rate`] depending on the hour and the number of passengers. The
//! section between two consecutive stations is charged at the higher of their rates, times a
//! per-section weight.

use contracts_rs::ensures;

pub const DAY_RATE: i32 = 90;
pub const NIGHT_RATE: i32 = 70;

/// First daytime hour.
pub const DAY_START: i32 = 9;
/// Last daytime hour, inclusive.
pub const DAY_END: i32 = 17;

/// Trips with more passengers than this get a fifth off.
pub const CARPOOL_THRESHOLD: i32 = 2;

const CHEAPEST_RATE: i32 = NIGHT_RATE - NIGHT_RATE / 5;

/// Weight of the section between the first and second station.
pub const SECTION_A_WEIGHT: i32 = 4;
/// Weight of the section between the second and third station.
pub const SECTION_B_WEIGHT: i32 = 7;

const TRIP_WEIGHT: i32 = SECTION_A_WEIGHT + SECTION_B_WEIGHT;

/// Rate charged by a station at `hour` for a car carrying `passengers`.
///
/// `hour` is not required to be a valid hour of the day: anything outside `9..=17` is night.
#[ensures(matches!(result, 90 | 72 | 70 | 56), "result must be one of 90, 72, 70, 56")]
pub fn rate(hour: i32, passengers: i32) -> i32 {
    let mut r = if (DAY_START..=DAY_END).contains(&hour) { DAY_RATE } else { NIGHT_RATE };
    if passengers > CARPOOL_THRESHOLD {
        r -= r / 5;
    }
    r
}

/// The larger of `x` and `y`. On a tie `y` is returned.
#[ensures(result >= x && result >= y && (result == x || result == y))]
pub fn max(x: i32, y: i32) -> i32 {
    if x > y { x } else { y }
}

fn section_fee(from: i32, to: i32, passengers: i32, weight: i32) -> i32 {
    max(rate(from, passengers), rate(to, passengers)) * weight
}

/// Fee for a trip passing stations at hours `t1` and `t2`.
#[ensures(
    (SECTION_A_WEIGHT * CHEAPEST_RATE..=SECTION_A_WEIGHT * DAY_RATE).contains(&result),
    "fee must lie between the cheapest and the dearest section"
)]
pub fn fee_simple(t1: i32, t2: i32, p: i32) -> i32 {
    section_fee(t1, t2, p, SECTION_A_WEIGHT)
}

/// Fee for a trip passing stations at hours `t1`, `t2` and `t3`. The middle station's rate counts
/// for both sections.
#[ensures(
    (TRIP_WEIGHT * CHEAPEST_RATE..=TRIP_WEIGHT * DAY_RATE).contains(&result),
    "fee must lie between the cheapest and the dearest trip"
)]
pub fn fee(t1: i32, t2: i32, t3: i32, p: i32) -> i32 {
    section_fee(t1, t2, p, SECTION_A_WEIGHT) + section_fee(t2, t3, p, SECTION_B_WEIGHT)
}
