use std::{fmt, panic::Location};

/// Reports an internal state that the surrounding contracts rule out. Unlike a contract violation
/// this is a bug in the callee, so it is never turned into a [`ContractViolation`].
///
/// [`ContractViolation`]: crate::ContractViolation
#[macro_export]
macro_rules! bug {
    () => ( $crate::bug!("impossible case reached") );
    ($msg:expr) => ({ $crate::bug::bug_fmt(::std::format_args!($msg)) });
    ($msg:expr,) => ({ $crate::bug!($msg) });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::bug::bug_fmt(::std::format_args!($fmt, $($arg)+))
    });
}

#[track_caller]
pub fn bug_fmt(args: fmt::Arguments<'_>) -> ! {
    let location = Location::caller();
    let msg = format!("{location}: {args}");
    tracing::error!(target: "contracts", %location, "bug: {args}");
    std::panic::panic_any(msg)
}
