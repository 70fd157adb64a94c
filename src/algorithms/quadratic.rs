//! Quadratic time -- O(n²).\
//! The duplicate finder nests one full scan inside another: every index pair is
//! implicitly considered until the first match, so n elements mean up to n·(n-1)
//! comparisons.

/// Returns the first pair of distinct indices `(i, j)` whose elements are equal,
/// scanning in row-major order -- `i` outer from 0, `j` inner from 0, skipping
/// `i == j` -- or `None` (the "NoMatch" sentinel) when all elements are distinct.
/// ```
///     # use complexity_classes::match_elements;
///     assert_eq!(match_elements(&["a", "b", "c", "b"]), Some((1, 3)));
///     assert_eq!(match_elements(&["a", "b", "c"]),      None);
/// ```
/// The scan order is deterministic: a pair with a smaller `i` is always found first
/// and, for a fixed `i`, a smaller `j` is found first. Runs in O(n²).
pub fn match_elements<T: PartialEq>(elements: &[T]) -> Option<(usize, usize)> {
    counting_match_elements(elements).0
}

/// Same as [match_elements()], also returning the number of element comparisons
/// performed -- `n·(n-1)` when no duplicate exists, showing the quadratic growth.
pub fn counting_match_elements<T: PartialEq>(elements: &[T]) -> (Option<(usize, usize)>, u64) {
    let mut comparisons: u64 = 0;
    for i in 0..elements.len() {
        for j in 0..elements.len() {
            if i == j {
                continue;
            }
            comparisons += 1;
            if elements[i] == elements[j] {
                return (Some((i, j)), comparisons);
            }
        }
    }
    (None, comparisons)
}

#[cfg(test)]
mod tests {

    //! Unit tests for the [quadratic](super) module

    use super::*;

    #[test]
    fn finds_the_first_matching_pair() {
        assert_eq!(match_elements(&["a", "b", "c", "b"]), Some((1, 3)), "wrong matching pair");
        assert_eq!(match_elements(&["🍓", "🍍", "🍊", "🍌", "🍍", "🍑"]), Some((1, 4)),
                   "the elements' type should not matter -- only equality");
    }

    #[test]
    fn distinct_elements_yield_the_no_match_sentinel() {
        assert_eq!(match_elements(&["a", "b", "c"]), None);
        assert_eq!(match_elements::<u32>(&[]),       None);
        assert_eq!(match_elements(&[1]),             None, "a single element cannot pair with itself");
    }

    /// row-major determinism: smaller i wins; for a fixed i, smaller j wins
    #[test]
    fn scan_order_is_deterministic() {
        assert_eq!(match_elements(&[7, 9, 7, 9]), Some((0, 2)), "the pair with the smaller outer index must be found first");
        assert_eq!(match_elements(&[5, 5, 5]),    Some((0, 1)), "for a fixed outer index, the smaller inner index must be found first");
    }

    /// with no duplicates present, every ordered pair of distinct indices gets compared
    #[test]
    fn comparison_count_grows_quadratically() {
        let comparisons_for = |n: u64| {
            let elements: Vec<u64> = (0..n).collect();
            counting_match_elements(&elements).1
        };
        assert_eq!(comparisons_for(10),  10 * 9);
        assert_eq!(comparisons_for(100), 100 * 99);
        assert_eq!(comparisons_for(200), 200 * 199, "doubling the size should quadruple the comparisons (asymptotically)");
    }
}
