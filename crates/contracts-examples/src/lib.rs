//! Small integer programs annotated with runtime-checked contracts: truncating division by
//! repeated subtraction, a credit-score decision table and a toll fee calculator.

pub mod credit;
pub mod division;
pub mod toll;
