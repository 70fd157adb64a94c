//! Exponential time -- O(2ⁿ).\
//! The naive recursive Fibonacci recomputes the same subproblems over and over:
//! each increment of `n` nearly doubles the number of recursive calls. The missing
//! memoization is the point of the demonstration, not an oversight.

use crate::error::{AlgorithmError, Result};

/// Returns the `n`th Fibonacci number under the convention `fib(0)` = 0, `fib(1)` = 1,
/// `fib(n)` = `fib(n-1)` + `fib(n-2)` -- by deliberately naive double recursion.
/// ```
///     # use complexity_classes::recursive_fibonacci;
///     assert_eq!(recursive_fibonacci(6), Ok(8));
///     assert_eq!(recursive_fibonacci(0), Ok(0));
/// ```
/// Negative inputs fail with [AlgorithmError::InvalidArgument].\
/// The `u64` result is exact through `fib(92)` -- far beyond what the O(2ⁿ)
/// recursion can compute in any reasonable time anyway.
pub fn recursive_fibonacci(n: i32) -> Result<u64> {
    counting_recursive_fibonacci(n)
        .map(|(fib, _calls)| fib)
}

/// Same as [recursive_fibonacci()], also returning the number of recursive invocations
/// performed -- `2·fib(n+1) - 1`, which grows by a factor approaching the golden
/// ratio (and so is bounded by 2) per unit of `n`.
pub fn counting_recursive_fibonacci(n: i32) -> Result<(u64, u64)> {
    if n < 0 {
        return Err(AlgorithmError::InvalidArgument { operation: "recursive_fibonacci", value: n as i64 });
    }
    let mut calls: u64 = 0;
    let fib = fib(n as u64, &mut calls);
    Ok((fib, calls))
}

fn fib(n: u64, calls: &mut u64) -> u64 {
    *calls += 1;
    if n < 2 {
        n
    } else {
        fib(n - 1, calls) + fib(n - 2, calls)
    }
}
