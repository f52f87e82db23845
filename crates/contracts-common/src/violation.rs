use std::{
    any::Any,
    cell::RefCell,
    error, fmt,
    panic::{self, PanicHookInfo, UnwindSafe},
};

thread_local! {
    static PENDING: RefCell<Option<ContractViolation>> = const { RefCell::new(None) };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Precondition,
    Postcondition,
    Invariant,
    Variant,
}

impl ContractKind {
    pub fn descr(self) -> &'static str {
        match self {
            ContractKind::Precondition => "precondition",
            ContractKind::Postcondition => "postcondition",
            ContractKind::Invariant => "loop invariant",
            ContractKind::Variant => "decreasing measure",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descr())
    }
}

/// A contract clause that did not hold. A precondition violation blames the caller, every other
/// kind blames the function itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractViolation {
    pub kind: ContractKind,
    pub function: &'static str,
    pub condition: String,
}

impl ContractViolation {
    pub fn new(kind: ContractKind, function: &'static str, condition: impl Into<String>) -> Self {
        Self { kind, function, condition: condition.into() }
    }

    pub fn is_precondition(&self) -> bool {
        self.kind == ContractKind::Precondition
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of `{}` violated: {}", self.kind, self.function, self.condition)
    }
}

impl error::Error for ContractViolation {}

/// Logs `violation` and panics with its message.
///
/// The violation itself is stashed in a thread local so that [`catch_violation`] can hand it back
/// as a value; the panic payload is the plain message so `#[should_panic(expected = ..)]` works.
#[track_caller]
pub fn raise(violation: ContractViolation) -> ! {
    tracing::error!(
        target: "contracts",
        kind = %violation.kind,
        function = violation.function,
        condition = %violation.condition,
        "contract violated"
    );
    let msg = violation.to_string();
    PENDING.with(|pending| *pending.borrow_mut() = Some(violation));
    panic::panic_any(msg)
}

/// Runs `f`, turning a contract violation raised inside it into an `Err`. Any other panic is
/// resumed untouched.
pub fn catch_violation<R>(f: impl FnOnce() -> R + UnwindSafe) -> Result<R, ContractViolation> {
    PENDING.with(|pending| pending.borrow_mut().take());
    match panic::catch_unwind(f) {
        Ok(v) => Ok(v),
        Err(payload) => {
            match take_pending(&*payload) {
                Some(violation) => Err(violation),
                None => panic::resume_unwind(payload),
            }
        }
    }
}

/// Installs a panic hook that stays quiet for contract violations (they are reported by whoever
/// catches them) and defers to the previous hook for everything else.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
        if !is_raising(info.payload()) {
            previous(info);
        }
    }));
}

/// Whether `payload` is the panic of the violation pending on this thread. A pending violation
/// that does not match is stale (its panic was caught elsewhere) and is dropped.
fn is_raising(payload: &(dyn Any + Send)) -> bool {
    PENDING.with(|pending| {
        let mut pending = pending.borrow_mut();
        let raising = pending.as_ref().is_some_and(|violation| is_payload_of(violation, payload));
        if !raising {
            *pending = None;
        }
        raising
    })
}

fn take_pending(payload: &(dyn Any + Send)) -> Option<ContractViolation> {
    PENDING
        .with(|pending| pending.borrow_mut().take())
        .filter(|violation| is_payload_of(violation, payload))
}

fn is_payload_of(violation: &ContractViolation, payload: &(dyn Any + Send)) -> bool {
    payload.downcast_ref::<String>().is_some_and(|msg| *msg == violation.to_string())
}
