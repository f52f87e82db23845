use contracts_rs::{
    ContractKind, ContractViolation, catch_violation, check, decreases, ensures, invariant,
    requires,
};

#[requires(divisor != 0)]
fn checked_divide(dividend: i32, divisor: i32) -> i32 {
    dividend / divisor
}

#[requires(n >= 0, "n must be non-negative")]
#[ensures(result == n * (n + 1) / 2)]
fn sum(n: i32) -> i32 {
    let mut i = n;
    let mut s = 0;
    while i > 0 {
        let previous = i;
        s += i;
        i -= 1;
        invariant!(s + i * (i + 1) / 2 == n * (n + 1) / 2);
        decreases!(i, previous);
    }
    s
}

#[ensures(result > x, "result must exceed x")]
fn broken_inc(x: i32) -> i32 {
    x
}

#[ensures(result.is_ok())]
fn early_return(flag: bool) -> Result<i32, String> {
    if flag {
        return Ok(1);
    }
    let n: i32 = "2".parse().map_err(|_| "unreachable".to_string())?;
    Ok(n)
}

#[contracts_rs::requires(x > 0)]
fn stuck(x: i32) -> i32 {
    let mut r = x;
    loop {
        let previous = r;
        decreases!(r, previous);
        r -= 1;
    }
}

#[ensures(result)]
fn unit_like() -> bool {
    true
}

#[requires(n >= 0)]
#[ensures(n == 0, "n must reach 0")]
fn count_down(mut n: i32) {
    while n > 0 {
        n -= 1;
    }
}

#[ensures(v.is_empty(), "v must be left empty")]
fn fill(v: &mut Vec<i32>) {
    v.push(1);
}

#[test]
fn satisfied_contracts_are_transparent() {
    assert_eq!(checked_divide(10, 2), 5);
    assert_eq!(sum(0), 0);
    assert_eq!(sum(4), 10);
    assert_eq!(early_return(true), Ok(1));
    assert_eq!(early_return(false), Ok(2));
    assert!(unit_like());
    count_down(3);
}

#[test]
fn postcondition_on_unit_function_sees_final_state() {
    if !check::check_ensures() {
        return;
    }
    let err = catch_violation(|| {
        let mut v = vec![];
        fill(&mut v);
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "postcondition of `fill` violated: v must be left empty");
}

#[test]
#[should_panic(expected = "precondition of `checked_divide` violated: divisor != 0")]
fn precondition_uses_source_text() {
    checked_divide(10, 0);
}

#[test]
#[should_panic(expected = "precondition of `sum` violated: n must be non-negative")]
fn precondition_uses_message() {
    sum(-1);
}

#[test]
fn postcondition_violation_blames_function() {
    if !check::check_ensures() {
        return;
    }
    let err = catch_violation(|| broken_inc(1)).unwrap_err();
    assert_eq!(
        err,
        ContractViolation::new(ContractKind::Postcondition, "broken_inc", "result must exceed x")
    );
}

#[test]
fn variant_violation_names_enclosing_function() {
    if !check::check_invariants() {
        return;
    }
    let err = catch_violation(|| stuck(3)).unwrap_err();
    assert_eq!(err.kind, ContractKind::Variant);
    assert_eq!(err.function, "stuck");
}

#[test]
fn path_qualified_attribute_checks_precondition() {
    let err = catch_violation(|| stuck(0)).unwrap_err();
    assert_eq!(err.to_string(), "precondition of `stuck` violated: x > 0");
}
