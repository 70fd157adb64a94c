//! Constant time -- O(1).\
//! No matter how long the slice is, returning its first element is a single operation.

use crate::error::{AlgorithmError, Result};

/// Returns a reference to the first element of the given non-empty `elements`.\
/// Runs in O(1): the cost does not depend on `elements.len()`.
/// ```
///     # use complexity_classes::first_element;
///     let scores = [12, 54, 68, 96, 20];
///     assert_eq!(first_element(&scores), Ok(&12));
/// ```
/// An empty slice fails with [AlgorithmError::EmptyInput] rather than silently
/// producing an undefined value.
pub fn first_element<T>(elements: &[T]) -> Result<&T> {
    counting_first_element(elements)
        .map(|(element, _ops)| element)
}

/// Same as [first_element()], also returning the number of element accesses performed
/// -- always 1, which is the whole point of the demonstration.
pub fn counting_first_element<T>(elements: &[T]) -> Result<(&T, u64)> {
    elements.first()
        .map(|element| (element, 1))
        .ok_or(AlgorithmError::EmptyInput { operation: "first_element" })
}
