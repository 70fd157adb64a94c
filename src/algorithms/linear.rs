//! Linear time -- O(n).\
//! The iterative factorial multiplies once per value in `2..=n`: double the input,
//! double the work.

use crate::error::{AlgorithmError, Result};

/// The largest `n` whose factorial fits in an `u128` -- 34! ≈ 2.95e38, just under
/// the 128-bit ceiling of ≈ 3.40e38. Larger arguments fail with [AlgorithmError::Overflow].
pub const MAX_FACTORIAL_ARGUMENT: i64 = 34;

/// Returns `n!`, accumulating the product across a single pass from 2 to `n` inclusive\
/// -- 1 for `n` = 0 or 1. Runs in O(n): one multiplication per loop iteration.
/// ```
///     # use complexity_classes::factorial;
///     assert_eq!(factorial(5), Ok(120));
///     assert_eq!(factorial(0), Ok(1));
/// ```
/// Negative inputs fail with [AlgorithmError::InvalidArgument]; inputs past
/// [MAX_FACTORIAL_ARGUMENT] fail with [AlgorithmError::Overflow] -- every
/// multiplication is checked.
pub fn factorial(n: i64) -> Result<u128> {
    counting_factorial(n)
        .map(|(product, _ops)| product)
}

/// Same as [factorial()], also returning the number of multiplications performed
/// -- `n - 1` for `n` >= 2, showing the linear growth.
pub fn counting_factorial(n: i64) -> Result<(u128, u64)> {
    if n < 0 {
        return Err(AlgorithmError::InvalidArgument { operation: "factorial", value: n });
    }
    let mut product: u128 = 1;
    let mut multiplications: u64 = 0;
    for i in 2..=n as u128 {
        product = product.checked_mul(i)
            .ok_or(AlgorithmError::Overflow { n, max_supported: MAX_FACTORIAL_ARGUMENT })?;
        multiplications += 1;
    }
    Ok((product, multiplications))
}
