use contracts_rs::{bug, ensures, requires};

/// Credit score for a number of past `incidents` and a `tax` bracket.
///
/// | incidents | tax    | score |
/// |-----------|--------|-------|
/// | 0         | 3      | 2     |
/// | 0         | 1 or 2 | 1     |
/// | 1         | any    | 1     |
/// | 2 or 3    | any    | 0     |
#[requires((0..=3).contains(&incidents), "incidents must be within 0..=3")]
#[requires((1..=3).contains(&tax), "tax must be within 1..=3")]
#[ensures((0..=2).contains(&result), "score must be one of 0, 1, 2")]
pub fn comp_credit_score(incidents: i32, tax: i32) -> i32 {
    match (incidents, tax) {
        (0, 3) => 2,
        (0, _) | (1, _) => 1,
        (2 | 3, _) => 0,
        _ => bug!("no credit score for incidents={incidents}, tax={tax}"),
    }
}
