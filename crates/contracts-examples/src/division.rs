//! Truncating integer division by repeated subtraction.

use contracts_rs::{decreases, ensures, invariant, requires};

/// Quotient of `x` by `y`, i.e. `floor(x / y)`, computed by subtracting `y` from `x` until the
/// remainder drops below `y`.
///
/// The postcondition is evaluated in `i64` so that checking it cannot overflow.
#[requires(x >= 0, "x must be non-negative")]
#[requires(y > 0, "y must be positive")]
#[ensures(
    i64::from(result) * i64::from(y) <= i64::from(x)
        && i64::from(x) < (i64::from(result) + 1) * i64::from(y),
    "result * y <= x < (result + 1) * y"
)]
pub fn pos_div(x: i32, y: i32) -> i32 {
    let mut q = 0;
    let mut r = x;
    invariant!(r >= 0 && r + q * y == x);
    while r >= y {
        let previous = r;
        r -= y;
        q += 1;
        invariant!(r >= 0 && r + q * y == x);
        decreases!(r, previous);
    }
    q
}

/// Quotient of `x` by `y` rounded toward zero, the same as Rust's `/` on `i32`.
///
/// Negating `i32::MIN` overflows, so `x` and `y` must stay above it.
#[requires(y != 0, "y must not be 0")]
#[ensures(result == x / y)]
pub fn div(x: i32, y: i32) -> i32 {
    if x < 0 {
        if y < 0 { pos_div(-x, -y) } else { -pos_div(-x, y) }
    } else if y < 0 {
        -pos_div(x, -y)
    } else {
        pos_div(x, y)
    }
}

/// [`pos_div`] and [`div`] without any contract checks.
///
/// They agree with the checked versions on the checked versions' domain. Outside of it nothing
/// is guaranteed: `pos_div(x, y)` with `y <= 0 <= x` never terminates or overflows.
pub mod unchecked {
    pub fn pos_div(x: i32, y: i32) -> i32 {
        let mut q = 0;
        let mut r = x;
        while r >= y {
            r -= y;
            q += 1;
        }
        q
    }

    pub fn div(x: i32, y: i32) -> i32 {
        if x < 0 {
            if y < 0 { pos_div(-x, -y) } else { -pos_div(-x, y) }
        } else if y < 0 {
            -pos_div(x, -y)
        } else {
            pos_div(x, y)
        }
    }
}
