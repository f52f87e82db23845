pub mod bug;
pub mod check;
pub mod violation;

pub use violation::{ContractKind, ContractViolation, catch_violation};
