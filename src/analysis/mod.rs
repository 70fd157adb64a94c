//! Classifies an algorithm's observed resource growth into a big-O class.\
//! The resource may be anything countable: wall-clock time (see [crate::runner]) or the
//! deterministic operation counts reported by the `counting_*` algorithm variants.
//! Two passes on different input sizes are always required -- the classification
//! compares the observed utilization ratio against what each class on the ladder
//! would predict for that size change.

pub mod types;

use crate::features::PERCENT_TOLERANCE;
use std::time::Duration;
use types::ComplexityClass;


/// Classifies the growth of the resource denoted by `u`, where `u1` & `u2` are the
/// resource utilization on passes 1 & 2 and, likewise, `n1` & `n2` represent the number
/// of elements, iterations or computations -- in other words, the `n` in the Big-O
/// notation... `O(n)`, `O(log(n))`, `O(n²)`, etc.\
/// Ratios within [PERCENT_TOLERANCE] of a class' prediction match that class; ratios
/// that overshoot one class but undershoot the next fall in the "Between" grades.
pub fn classify_growth(u1: f64, u2: f64, n1: f64, n2: f64) -> ComplexityClass {
    if (u2 / u1) < 1.0 - PERCENT_TOLERANCE {
        ComplexityClass::BetterThanO1
    } else if ((u2 / u1) - 1.0).abs() <= PERCENT_TOLERANCE {
        ComplexityClass::O1
    } else if ((u2 / u1) / ( n2.log2() / n1.log2() )) < 1.0 - PERCENT_TOLERANCE {
        ComplexityClass::BetweenO1AndOLogN
    } else if ( ((u2 / u1) / ( n2.log2() / n1.log2() )) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        ComplexityClass::OLogN
    } else if ((u2 / u1) / (n2 / n1)) < 1.0 - PERCENT_TOLERANCE {
        ComplexityClass::BetweenOLogNAndON
    } else if ( ((u2 / u1) / (n2 / n1)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        ComplexityClass::ON
    } else if ((u2 / u1) / ( (n2*n2.log2()) / (n1*n1.log2()) )) < 1.0 - PERCENT_TOLERANCE {
        ComplexityClass::BetweenONAndONLogN
    } else if ( ((u2 / u1) / ( (n2*n2.log2()) / (n1*n1.log2()) )) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        ComplexityClass::ONLogN
    } else if ((u2 / u1) / (n2 / n1).powi(2)) < 1.0 - PERCENT_TOLERANCE {
        ComplexityClass::BetweenONLogNAndON2
    } else if ( ((u2 / u1) / (n2 / n1).powi(2)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        ComplexityClass::ON2
    } else if ((u2 / u1) / (n2 / n1).powi(3)) < 1.0 - PERCENT_TOLERANCE {
        ComplexityClass::BetweenON2AndON3
    } else if ( ((u2 / u1) / (n2 / n1).powi(3)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        ComplexityClass::ON3
    } else if ((u2 / u1) / (n2 / n1).powi(4)) < 1.0 - PERCENT_TOLERANCE {
        ComplexityClass::BetweenON3AndON4
    } else if ( ((u2 / u1) / (n2 / n1).powi(4)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        ComplexityClass::ON4
    } else if (u2 / u1.powf(n2/n1)) < 1.0 - PERCENT_TOLERANCE {
        ComplexityClass::BetweenON4AndOkN
    } else if ( (u2 / u1.powf(n2/n1)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        ComplexityClass::OkN
    } else {
        ComplexityClass::WorseThanExponential
    }
}

/// Classifies the growth of an algorithm's operation count between two passes\
/// -- `ops1` & `ops2` as reported by one of the `counting_*` functions when run on
/// input sizes `n1` & `n2`. Being a count rather than a measurement, the result is
/// fully deterministic.
pub fn classify_op_counts(ops1: u64, ops2: u64, n1: u32, n2: u32) -> ComplexityClass {
    classify_growth(ops1 as f64, ops2 as f64, n1 as f64, n2 as f64)
}

/// Classifies the growth of an algorithm's elapsed time between two passes of input
/// sizes `n1` & `n2`.\
/// The pass durations should be high enough to make OS, IO and network latencies
/// negligible -- if the operation is CPU bounded, the machine should be idle.
pub fn classify_pass_times(pass_1_elapsed: Duration, pass_2_elapsed: Duration, n1: u32, n2: u32) -> ComplexityClass {
    classify_growth(pass_1_elapsed.as_secs_f64(), pass_2_elapsed.as_secs_f64(), n1 as f64, n2 as f64)
}
