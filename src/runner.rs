//! Knows how to run & time the two passes needed to verify an algorithm's
//! advertised time complexity at the wall clock.\
//! See `tests/complexity_classes.rs` for examples.

use crate::{
    analysis::{
        self,
        types::{ComplexityClass, ComplexityReport, PassesInfo, TimeMeasurements},
    },
    features::OUTPUT,
};
use std::hint::black_box;
use std::time::{Duration, Instant};
use keen_retry::{loggable_retry_errors, ResolvedResult, RetryProducerResult, RetryResult};


/// Runs [time_algorithm()], checking that the observed time complexity does not exceed
/// the given `expected_max` -- retrying as much as `max_retry_attempts` to avoid flaky
/// results on busy machines.\
/// In case of rejection, a detailed run log with measurements & classification is issued.
///
/// `reset_fn` runs (untimed) before the passes; `pass1_algorithm` & `pass2_algorithm`
/// should execute the algorithm under verification on inputs of `pass1_n` & `pass2_n`
/// elements, returning a computed number -- XORed into the report to defeat call
/// cancellation optimizations.
pub fn verify_time_complexity(algorithm_name:      &str,
                              max_retry_attempts:  u32,
                              mut reset_fn:        impl FnMut(),
                              pass1_n:             u32,
                              mut pass1_algorithm: impl FnMut() -> u64,
                              pass2_n:             u32,
                              mut pass2_algorithm: impl FnMut() -> u64,
                              expected_max:        ComplexityClass) {
    let result = time_algorithm(algorithm_name, &mut reset_fn, pass1_n, &mut pass1_algorithm, pass2_n, &mut pass2_algorithm, expected_max)
        .retry_with(|_| time_algorithm(algorithm_name, &mut reset_fn, pass1_n, &mut pass1_algorithm, pass2_n, &mut pass2_algorithm, expected_max))
        .with_delays((0..max_retry_attempts).map(|_| Duration::from_millis(500)));
    let failure_msg = match result {
        ResolvedResult::Ok { .. } => None,
        ResolvedResult::Fatal { error, .. } => Some(error),
        ResolvedResult::Recovered { .. } => None,
        ResolvedResult::GivenUp { retry_errors, fatal_error, .. } => Some(format!("Given up with '{}' after {max_retry_attempts} attempts. Previous transient errors: {}", fatal_error, loggable_retry_errors(&retry_errors))),
        ResolvedResult::Unrecoverable { retry_errors, fatal_error, .. } => Some(format!("Stopped after retrying for {max_retry_attempts} attempts due to the fatal outcome '{}'. Previous transient errors: {}", fatal_error, loggable_retry_errors(&retry_errors))),
    };
    if let Some(failure_msg) = failure_msg {
        panic!("{}", failure_msg);
    }
}

/// Internal version of [verify_time_complexity()], allowing retries
fn time_algorithm(algorithm_name:  &str,
                  reset_fn:        &mut impl FnMut(),
                  pass1_n:         u32,
                  pass1_algorithm: &mut impl FnMut() -> u64,
                  pass2_n:         u32,
                  pass2_algorithm: &mut impl FnMut() -> u64,
                  expected_max:    ComplexityClass)
                 -> RetryProducerResult<String, String> {

    OUTPUT(&format!("Timing '{}':", algorithm_name));
    reset_fn();
    let (pass_1_elapsed, r1) = run_timed_pass("  Pass 1: ", "", pass1_algorithm);
    let (pass_2_elapsed, r2) = run_timed_pass("; Pass 2: ", "\n", pass2_algorithm);

    let observed_time_complexity = analysis::classify_pass_times(pass_1_elapsed, pass_2_elapsed, pass1_n, pass2_n);
    let report = ComplexityReport {
        algorithm_name,
        passes_info: PassesInfo { pass1_n, pass2_n },
        time_measurements: TimeMeasurements { pass_1_elapsed, pass_2_elapsed },
        time_complexity: observed_time_complexity,
    };
    OUTPUT(&format!("{}\n", report));

    if observed_time_complexity as u32 > expected_max as u32 {
        let msg = format!("\n ** TIME complexity mismatch on '{}': maximum: {:?}, measured: {:?} -- a reattempt may be performed...\n\n", algorithm_name, expected_max, observed_time_complexity);
        OUTPUT(&msg);
        RetryResult::Transient { input: (), error: msg }
    } else {
        let msg = format!("r={}\n\n", r1 ^ r2);
        OUTPUT(&msg);
        RetryResult::Ok { reported_input: (), output: msg }
    }
}

/// Runs a pass on the given synchronous `algorithm` callback function or closure,
/// measuring (and returning) the time it took to run it -- outputting progress along the way.
/// ```nocompile
///     /// Algorithm function under verification.
///     /// Returns a(ny) computed number to avoid compiler call cancellation optimizations
///     fn algorithm() -> u64 {0}
/// ```
/// returns: tuple with (elapsed: [Duration], computed_number: u64)
fn run_timed_pass(result_prefix: &str,
                  result_suffix: &str,
                  algorithm:     &mut impl FnMut() -> u64)
                 -> (Duration, u64) {
    let start = Instant::now();
    let r = black_box(algorithm());
    let elapsed = start.elapsed();
    OUTPUT(&format!("{}{:?}{}", result_prefix, elapsed, result_suffix));
    (elapsed, r)
}
