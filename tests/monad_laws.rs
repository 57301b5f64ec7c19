//! Property-based tests for the laws of `Outcome::bind`.
//!
//! `bind` feeds whichever payload is present to the function, so the unit of
//! the right identity law is the constructor of the variant being tested.
//!
//! - **Left Identity**: `Outcome::Ok(x).bind(f) == f(x)`
//! - **Right Identity**: `r.bind(unit_of(r)) == r`
//! - **Associativity**: `r.bind(f).bind(g) == r.bind(|x| f(x).bind(g))`
//! - **fmap via bind**: `r.fmap(h) == r.bind(|x| unit_of(r)(h(x)))`
//! - **join via bind**: `r.join() == r.bind(|x| x)`

use outcome::Outcome;
use proptest::prelude::*;

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::Ok),
        any::<i32>().prop_map(Outcome::Err),
    ]
}

fn nested_strategy() -> impl Strategy<Value = Outcome<Outcome<i32, i32>, Outcome<i32, i32>>> {
    prop_oneof![
        outcome_strategy().prop_map(Outcome::Ok),
        outcome_strategy().prop_map(Outcome::Err),
    ]
}

fn unit_of(outcome: &Outcome<i32, i32>) -> fn(i32) -> Outcome<i32, i32> {
    if outcome.is_ok() {
        Outcome::Ok
    } else {
        Outcome::Err
    }
}

/// Halves even numbers, rejects odd ones.
fn halve(offset: i32) -> impl Fn(i32) -> Outcome<i32, i32> {
    move |x| {
        let shifted = x.wrapping_add(offset);
        if shifted % 2 == 0 {
            Outcome::Ok(shifted / 2)
        } else {
            Outcome::Err(shifted.wrapping_mul(3))
        }
    }
}

/// Decrements positives, recovers non-positives as their negation.
fn settle(x: i32) -> Outcome<i32, i32> {
    if x > 0 {
        Outcome::Err(x.wrapping_sub(1))
    } else {
        Outcome::Ok(x.wrapping_neg())
    }
}

proptest! {
    #[test]
    fn prop_left_identity(value in any::<i32>(), offset in any::<i32>()) {
        let function = halve(offset);
        let start: Outcome<i32, i32> = Outcome::Ok(value);
        prop_assert_eq!(start.bind(&function), function(value));
    }

    #[test]
    fn prop_right_identity(value in outcome_strategy()) {
        prop_assert_eq!(value.bind(unit_of(&value)), value);
    }

    #[test]
    fn prop_associativity(value in outcome_strategy(), offset in any::<i32>()) {
        let function = halve(offset);

        let left = value.bind(&function).bind(settle);
        let right = value.bind(|x| function(x).bind(settle));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_shr_is_bind(value in outcome_strategy(), offset in any::<i32>()) {
        let function = halve(offset);
        prop_assert_eq!((value >> &function) >> settle, value.bind(&function).bind(settle));
    }

    #[test]
    fn prop_fmap_via_bind(value in outcome_strategy(), factor in any::<i32>()) {
        let function = |x: i32| x.wrapping_mul(factor);
        let unit = unit_of(&value);

        prop_assert_eq!(value.fmap(function), value.bind(|x| unit(function(x))));
    }

    #[test]
    fn prop_join_via_bind(value in nested_strategy()) {
        prop_assert_eq!(value.join(), value.bind(|inner| inner));
    }

    #[test]
    fn prop_and_then_left_identity(value in any::<i32>(), offset in any::<i32>()) {
        let function = halve(offset);
        let start: Outcome<i32, i32> = Outcome::Ok(value);
        prop_assert_eq!(start.and_then(&function), function(value));
    }

    #[test]
    fn prop_and_then_right_identity(value in outcome_strategy()) {
        prop_assert_eq!(value.and_then(Outcome::Ok), value);
    }

    #[test]
    fn prop_bibind_with_same_function_is_bind(value in outcome_strategy(), offset in any::<i32>()) {
        let function = halve(offset);
        prop_assert_eq!(value.bibind(&function, &function), value.bind(&function));
    }
}
