use std::fmt;

use anyhow::{Context, bail};
use contracts_examples::{credit, division, toll};
use contracts_rs::{ContractViolation, catch_violation};
use itertools::Itertools;

pub mod logger;
pub mod utils;

/// The functions that can be called from the command line, each taking its `i32` arguments
/// positionally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    PosDiv,
    Div,
    CreditScore,
    Rate,
    Max,
    FeeSimple,
    Fee,
}

impl Function {
    pub const ALL: [Function; 7] = [
        Function::PosDiv,
        Function::Div,
        Function::CreditScore,
        Function::Rate,
        Function::Max,
        Function::FeeSimple,
        Function::Fee,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Function::PosDiv => "pos-div",
            Function::Div => "div",
            Function::CreditScore => "credit-score",
            Function::Rate => "rate",
            Function::Max => "max",
            Function::FeeSimple => "fee-simple",
            Function::Fee => "fee",
        }
    }

    pub fn params(self) -> &'static [&'static str] {
        match self {
            Function::PosDiv | Function::Div | Function::Max => &["x", "y"],
            Function::CreditScore => &["incidents", "tax"],
            Function::Rate => &["hour", "passengers"],
            Function::FeeSimple => &["t1", "t2", "p"],
            Function::Fee => &["t1", "t2", "t3", "p"],
        }
    }

    fn from_name(name: &str) -> Option<Function> {
        Function::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Calls the function. `args` must have exactly as many elements as [`Function::params`].
    fn call(self, args: &[i32]) -> i32 {
        match (self, args) {
            (Function::PosDiv, &[x, y]) => division::pos_div(x, y),
            (Function::Div, &[x, y]) => division::div(x, y),
            (Function::CreditScore, &[incidents, tax]) => {
                credit::comp_credit_score(incidents, tax)
            }
            (Function::Rate, &[hour, passengers]) => toll::rate(hour, passengers),
            (Function::Max, &[x, y]) => toll::max(x, y),
            (Function::FeeSimple, &[t1, t2, p]) => toll::fee_simple(t1, t2, p),
            (Function::Fee, &[t1, t2, t3, p]) => toll::fee(t1, t2, t3, p),
            _ => contracts_rs::bug!("`{}` called with {} arguments", self.name(), args.len()),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        for param in self.params() {
            write!(f, " <{param}>")?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub function: Function,
    pub args: Vec<i32>,
}

impl Invocation {
    /// Evaluates the call. A contract violation is returned as an error instead of unwinding.
    pub fn eval(&self) -> Result<i32, ContractViolation> {
        tracing::debug!(function = self.function.name(), args = ?self.args, "evaluating");
        catch_violation(|| self.function.call(&self.args))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Call(Invocation),
    /// Print the effective configuration.
    Config,
    Help,
}

impl Command {
    /// Parses the command line arguments, not including the program name.
    pub fn parse<I, S>(args: I) -> anyhow::Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let Some(name) = args.next() else { bail!("missing function name") };
        let name = name.as_ref();
        match name {
            "-h" | "--help" | "help" => return Ok(Command::Help),
            "config" => return Ok(Command::Config),
            _ => {}
        }
        let Some(function) = Function::from_name(name) else {
            bail!("unknown function `{name}`")
        };

        let args: Vec<i32> = args
            .zip(function.params().iter().chain(std::iter::repeat(&"")))
            .map(|(arg, param)| {
                let arg = arg.as_ref();
                arg.parse::<i32>()
                    .with_context(|| format!("invalid value `{arg}` for <{param}>"))
            })
            .collect::<anyhow::Result<_>>()?;
        if args.len() != function.params().len() {
            bail!(
                "`{}` takes {} arguments but {} were given",
                function.name(),
                function.params().len(),
                args.len()
            );
        }
        Ok(Command::Call(Invocation { function, args }))
    }
}

pub fn usage() -> String {
    let functions = Function::ALL
        .iter()
        .map(|function| format!("    contracts {function}"))
        .join("\n");
    format!(
        "Evaluate a contract-checked function.\n\n\
         USAGE:\n{functions}\n    contracts config\n    contracts help\n\n\
         Arguments are 32-bit signed integers."
    )
}
