//! Unit tests for the `Outcome<T, E>` combinators.
//!
//! Covers the literal scenarios for each combinator family:
//! transformers, composers, combiners and extractors.

use outcome::{Outcome, UnwrapError, Variant, err, ok};
use rstest::rstest;

// =============================================================================
// Construction and Predicates
// =============================================================================

#[rstest]
fn constructors_build_matching_variants() {
    let success: Outcome<i32, i32> = ok(2);
    let failure: Outcome<i32, i32> = err(3);
    assert_eq!(success, Outcome::Ok(2));
    assert_eq!(failure, Outcome::Err(3));
}

#[rstest]
#[case(Outcome::Ok(1), true)]
#[case(Outcome::Err(1), false)]
fn is_err_is_negation_of_is_ok(#[case] value: Outcome<i32, i32>, #[case] expected_ok: bool) {
    assert_eq!(value.is_ok(), expected_ok);
    assert_eq!(value.is_err(), !expected_ok);
}

// =============================================================================
// Transformers
// =============================================================================

#[rstest]
fn map_applies_to_ok() {
    let success: Outcome<i32, i32> = Outcome::Ok(2);
    assert_eq!(success.map(|x| x + 10), Outcome::Ok(12));
}

#[rstest]
fn map_passes_err_through() {
    let failure: Outcome<i32, i32> = Outcome::Err(3);
    assert_eq!(failure.map(|x| x + 10), Outcome::Err(3));
}

#[rstest]
fn fmap_applies_to_either_payload() {
    let success: Outcome<i32, i32> = Outcome::Ok(2);
    let failure: Outcome<i32, i32> = Outcome::Err(3);
    assert_eq!(success.fmap(|x| x + 10), Outcome::Ok(12));
    assert_eq!(failure.fmap(|x| x + 10), Outcome::Err(13));
}

#[rstest]
fn alter_applies_to_err_only() {
    let failure: Outcome<i32, &str> = Outcome::Err("Divide by zero");
    assert_eq!(failure.alter(str::to_uppercase), Outcome::Err("DIVIDE BY ZERO".to_string()));

    let success: Outcome<i32, &str> = Outcome::Ok(1);
    assert_eq!(success.alter(str::to_uppercase), Outcome::Ok(1));
}

// =============================================================================
// Composers
// =============================================================================

#[rstest]
fn bind_ok_to_ok() {
    let success: Outcome<i32, i32> = Outcome::Ok(2);
    assert_eq!(success.bind(|x| Outcome::<i32, i32>::Ok(x * 2)), Outcome::Ok(4));
}

#[rstest]
fn bind_ok_to_err() {
    let success: Outcome<i32, i32> = Outcome::Ok(2);
    assert_eq!(success.bind(|x| Outcome::<i32, i32>::Err(x * 2)), Outcome::Err(4));
}

#[rstest]
fn bind_recovers_from_err() {
    let failure: Outcome<String, String> = Outcome::Err("fallback".to_string());
    let recovered = failure.bind(|payload| Outcome::<usize, String>::Ok(payload.len()));
    assert_eq!(recovered, Outcome::Ok(8));
}

#[rstest]
fn shr_operator_chains_binds() {
    let start: Outcome<i32, i32> = Outcome::Ok(2);
    let result = (start >> (|x: i32| Outcome::<i32, i32>::Ok(x + 1)))
        >> (|x: i32| Outcome::<i32, i32>::Err(x * 10));
    assert_eq!(result, Outcome::Err(30));
}

#[rstest]
fn join_flattens_nested_ok() {
    let nested: Outcome<Outcome<i32, i32>, Outcome<i32, i32>> = Outcome::Ok(Outcome::Ok(5));
    assert_eq!(nested.join(), Outcome::Ok(5));
}

#[rstest]
fn bibind_handles_distinct_types() {
    let failure: Outcome<i32, String> = Outcome::Err("retry".to_string());
    let result: Outcome<i32, usize> = failure.bibind(
        |x| Outcome::Ok(x + 1),
        |reason| {
            if reason == "retry" {
                Outcome::Ok(0)
            } else {
                Outcome::Err(reason.len())
            }
        },
    );
    assert_eq!(result, Outcome::Ok(0));
}

// =============================================================================
// Combiners
// =============================================================================

#[rstest]
#[case(Outcome::Ok(2), Outcome::Ok(20), Outcome::Ok(20))]
#[case(Outcome::Ok(2), Outcome::Err(4), Outcome::Err(4))]
#[case(Outcome::Err(3), Outcome::Err(4), Outcome::Err(3))]
fn and_scenarios(
    #[case] first: Outcome<i32, i32>,
    #[case] second: Outcome<i32, i32>,
    #[case] expected: Outcome<i32, i32>,
) {
    assert_eq!(first.and(second), expected);
}

#[rstest]
#[case(Outcome::Ok(2), Outcome::Err(3), Outcome::Ok(2))]
#[case(Outcome::Err(3), Outcome::Err(5), Outcome::Err(5))]
fn or_scenarios(
    #[case] first: Outcome<i32, i32>,
    #[case] second: Outcome<i32, i32>,
    #[case] expected: Outcome<i32, i32>,
) {
    assert_eq!(first.or(second), expected);
}

// =============================================================================
// Extractors
// =============================================================================

#[rstest]
fn unwrap_returns_ok_payload() {
    let success: Outcome<i32, i32> = Outcome::Ok(2);
    assert_eq!(success.unwrap(), 2);
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value")]
fn unwrap_on_err_is_a_misuse_failure() {
    let failure: Outcome<i32, i32> = Outcome::Err(3);
    let _ = failure.unwrap();
}

#[rstest]
fn unwrap_or_uses_default_on_err() {
    let failure: Outcome<i32, i32> = Outcome::Err(3);
    assert_eq!(failure.unwrap_or(10), 10);
}

#[rstest]
fn unwrap_or_do_computes_from_error() {
    let failure: Outcome<i32, i32> = Outcome::Err(3);
    assert_eq!(failure.unwrap_or_do(|x| x + 1), 4);
}

#[rstest]
fn unwrap_err_returns_err_payload() {
    let failure: Outcome<i32, &str> = Outcome::Err("boom");
    assert_eq!(failure.unwrap_err(), "boom");
}

#[rstest]
#[should_panic(expected = "must be a valid port")]
fn expect_panics_with_literal_message() {
    let failure: Outcome<u16, String> = Outcome::Err("eighty".to_string());
    let _ = failure.expect("must be a valid port");
}

#[rstest]
#[case(Outcome::Ok(4), 8)]
#[case(Outcome::Err(4), -1)]
fn map_or_uses_static_fallback(#[case] value: Outcome<i32, i32>, #[case] expected: i32) {
    assert_eq!(value.map_or(-1, |x| x * 2), expected);
}

#[rstest]
#[case(Outcome::Ok(4), 8)]
#[case(Outcome::Err(4), -4)]
fn map_or_do_is_lazy_on_both_sides(#[case] value: Outcome<i32, i32>, #[case] expected: i32) {
    assert_eq!(value.map_or_do(|x| x * 2, |e| -e), expected);
}

#[rstest]
fn try_unwrap_err_reports_misuse_as_value() {
    let success: Outcome<i32, i32> = Outcome::Ok(2);
    let error: UnwrapError = success.try_unwrap_err().unwrap_err();
    assert_eq!(error.found(), Variant::Ok);
    assert_eq!(error.expected(), Variant::Err);
    assert_eq!(
        error.to_string(),
        "called `Outcome::unwrap_err()` on an `Ok` value"
    );
}

// =============================================================================
// Pipelines
// =============================================================================

fn parse_port(text: &str) -> Outcome<u16, String> {
    Outcome::from(text.parse::<u16>()).alter(|error| format!("{text}: {error}"))
}

fn reject_privileged(port: u16) -> Outcome<u16, String> {
    if port < 1024 {
        Outcome::Err(format!("{port} is privileged"))
    } else {
        Outcome::Ok(port)
    }
}

#[rstest]
#[case("8080", Outcome::Ok(8080))]
#[case("80", Outcome::Err("80 is privileged".to_string()))]
#[case("http", Outcome::Err("http: invalid digit found in string".to_string()))]
fn pipeline_without_branching(#[case] input: &str, #[case] expected: Outcome<u16, String>) {
    assert_eq!(parse_port(input).and_then(reject_privileged), expected);
}

#[rstest]
fn pipeline_fallback_with_or() {
    let configured = parse_port("http").and_then(reject_privileged);
    let port = configured.or(Outcome::<u16, String>::Ok(8080)).unwrap();
    assert_eq!(port, 8080);
}
