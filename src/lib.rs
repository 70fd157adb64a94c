#![doc = include_str!("../README.md")]

pub mod algorithms;
pub mod analysis;
pub mod runner;
pub mod features;
mod error;


// exported symbols
pub use {
    error::{AlgorithmError, Result},
    algorithms::{
        constant::{first_element, counting_first_element},
        linear::{factorial, counting_factorial, MAX_FACTORIAL_ARGUMENT},
        logarithmic::{binary_search, counting_binary_search},
        quadratic::{match_elements, counting_match_elements},
        exponential::{recursive_fibonacci, counting_recursive_fibonacci},
    },
    analysis::types::ComplexityClass,
    runner::verify_time_complexity,
};
