//! Error taxonomy for the algorithm contracts.
//!
//! Only true contract breaches live here -- "not found" / "no match" outcomes
//! are `None` sentinels on the algorithms' return types, never errors.

use thiserror::Error;

/// Errors raised by the demonstration algorithms. Every error is reported
/// synchronously to the immediate caller; nothing is recovered or retried
/// internally.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum AlgorithmError {

    /// Raised when an algorithm requiring at least one element is given none
    #[error("empty input: '{operation}' requires at least one element")]
    EmptyInput { operation: &'static str },

    /// Raised on negative inputs to algorithms defined over the non-negative integers
    #[error("invalid argument: '{operation}' is defined for non-negative inputs only -- got {value}")]
    InvalidArgument { operation: &'static str, value: i64 },

    /// Raised when binary search is handed a slice that is not sorted ascending --
    /// `inversion_index` is the first index whose element is smaller than its predecessor
    #[error("precondition violated: binary search requires an ascending-sorted haystack -- first inversion at index {inversion_index}")]
    PreconditionViolated { inversion_index: usize },

    /// Raised when a factorial would not fit the 128-bit result --
    /// `max_supported` documents the overflow boundary
    #[error("overflow: {n}! does not fit in 128 bits -- the largest supported argument is {max_supported}")]
    Overflow { n: i64, max_supported: i64 },
}

/// Result type alias for the algorithms in this crate.
pub type Result<T> = std::result::Result<T, AlgorithmError>;

#[cfg(test)]
mod tests {

    //! Unit tests for the [error](super) module

    use super::*;

    #[test]
    fn display_messages_carry_the_offending_details() {
        let err = AlgorithmError::InvalidArgument { operation: "factorial", value: -1 };
        assert!(err.to_string().contains("factorial"), "operation name missing from '{err}'");
        assert!(err.to_string().contains("-1"),        "offending value missing from '{err}'");

        let err = AlgorithmError::PreconditionViolated { inversion_index: 3 };
        assert!(err.to_string().contains("index 3"), "inversion index missing from '{err}'");

        let err = AlgorithmError::Overflow { n: 35, max_supported: 34 };
        assert!(err.to_string().contains("35!"), "argument missing from '{err}'");
        assert!(err.to_string().contains("34"),  "boundary missing from '{err}'");
    }
}
