//! Runtime-checked function contracts.
//!
//! ```ignore
//! use contracts_rs::{decreases, ensures, invariant, requires};
//!
//! #[requires(n >= 0)]
//! #[ensures(result == n * (n + 1) / 2)]
//! fn sum(n: i32) -> i32 {
//!     let (mut i, mut s) = (n, 0);
//!     while i > 0 {
//!         let previous = i;
//!         s += i;
//!         i -= 1;
//!         invariant!(s + i * (i + 1) / 2 == n * (n + 1) / 2);
//!         decreases!(i, previous);
//!     }
//!     s
//! }
//! ```
//!
//! Violations panic with a message such as ``precondition of `sum` violated: n >= 0``; use
//! [`catch_violation`] to get them back as a [`ContractViolation`].

pub use attrs::*;
pub use contracts_attrs as attrs;
pub use contracts_common::{
    ContractKind, ContractViolation, bug, catch_violation, check, decreases, invariant,
    violation::{self, install_panic_hook},
};
