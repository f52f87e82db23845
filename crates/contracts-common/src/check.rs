//! Entry points used by the code that `#[requires]` and `#[ensures]` expand to, and by the
//! [`invariant!`] and [`decreases!`] macros.
//!
//! Preconditions are checked unconditionally. Every other clause is only evaluated when the
//! configuration asks for it, so callers are expected to test [`check_ensures`] or
//! [`check_invariants`] before evaluating the condition.

use std::fmt;

use contracts_config as config;

use crate::violation::{self, ContractKind, ContractViolation};

pub fn check_ensures() -> bool {
    config::check_ensures()
}

pub fn check_invariants() -> bool {
    config::check_invariants()
}

#[track_caller]
pub fn requires(function: &'static str, condition: &'static str, holds: bool) {
    clause(ContractKind::Precondition, function, condition, holds);
}

#[track_caller]
pub fn ensures(function: &'static str, condition: &'static str, holds: bool) {
    clause(ContractKind::Postcondition, function, condition, holds);
}

#[track_caller]
pub fn invariant(function: &'static str, condition: &'static str, holds: bool) {
    clause(ContractKind::Invariant, function, condition, holds);
}

/// Checks that `measure` stayed non-negative and went strictly below `previous`, its value at the
/// start of the iteration.
#[track_caller]
pub fn decreases<T>(function: &'static str, name: &'static str, previous: T, measure: T)
where
    T: PartialOrd + Default + fmt::Display,
{
    let holds = measure >= T::default() && measure < previous;
    if config::trace_contracts() {
        tracing::debug!(
            target: "contracts",
            kind = %ContractKind::Variant,
            function,
            measure = name,
            %previous,
            current = %measure,
            holds,
        );
    }
    if !holds {
        violation::raise(ContractViolation::new(
            ContractKind::Variant,
            function,
            format!("`{name}` must decrease towards 0, went from {previous} to {measure}"),
        ));
    }
}

#[track_caller]
fn clause(kind: ContractKind, function: &'static str, condition: &'static str, holds: bool) {
    if config::trace_contracts() {
        tracing::debug!(target: "contracts", %kind, function, condition, holds);
    }
    if !holds {
        violation::raise(ContractViolation::new(kind, function, condition));
    }
}

/// Checks a loop invariant when invariant checking is enabled.
///
/// Inside a function annotated with `#[requires]` or `#[ensures]` the enclosing function's name
/// is filled in automatically; elsewhere the module path is reported instead.
#[macro_export]
macro_rules! invariant {
    (@fn $function:expr; $cond:expr, $msg:literal $(,)?) => {
        if $crate::check::check_invariants() {
            $crate::check::invariant($function, $msg, $cond);
        }
    };
    (@fn $function:expr; $cond:expr $(,)?) => {
        if $crate::check::check_invariants() {
            $crate::check::invariant($function, ::std::stringify!($cond), $cond);
        }
    };
    ($($args:tt)+) => {
        $crate::invariant!(@fn ::std::module_path!(); $($args)+)
    };
}

/// Checks a loop's decreasing measure when invariant checking is enabled.
///
/// `decreases!(r, previous)` holds when `0 <= r < previous`.
#[macro_export]
macro_rules! decreases {
    (@fn $function:expr; $measure:ident, $previous:expr $(,)?) => {
        if $crate::check::check_invariants() {
            $crate::check::decreases($function, ::std::stringify!($measure), $previous, $measure);
        }
    };
    ($($args:tt)+) => {
        $crate::decreases!(@fn ::std::module_path!(); $($args)+)
    };
}
