//! Logarithmic time -- O(log n).\
//! Binary search halves the active region of an ascending-sorted slice on every probe,
//! so the probe count grows with log2 of the slice length rather than the length itself.

use crate::error::{AlgorithmError, Result};
use std::cmp::Ordering;

/// Searches `haystack` -- which must be sorted ascending -- for an element equal to
/// `target`, returning `Ok(Some(index))` on a hit or `Ok(None)` when absent
/// (the "NotFound" sentinel, in place of the traditional `-1`).
/// ```
///     # use complexity_classes::binary_search;
///     let haystack = [1, 3, 5, 7, 9, 11];
///     assert_eq!(binary_search(&haystack, &7), Ok(Some(3)));
///     assert_eq!(binary_search(&haystack, &4), Ok(None));
/// ```
/// Tie-break: the first exact match hit at a midpoint is returned -- among duplicates,
/// there is no first/last-occurrence guarantee.\
/// An unsorted `haystack` fails fast with [AlgorithmError::PreconditionViolated].
/// Note the sortedness guard is a full O(n) scan -- it is the robustness feature,
/// not part of the O(log n) demonstration, which is why [counting_binary_search()]
/// reports probes only.
pub fn binary_search<T: Ord>(haystack: &[T], target: &T) -> Result<Option<usize>> {
    counting_binary_search(haystack, target)
        .map(|(index, _probes)| index)
}

/// Same as [binary_search()], also returning the number of midpoint probes performed
/// -- at most `floor(log2(haystack.len())) + 1`.
pub fn counting_binary_search<T: Ord>(haystack: &[T], target: &T) -> Result<(Option<usize>, u64)> {
    if let Some(inversion_index) = first_inversion(haystack) {
        return Err(AlgorithmError::PreconditionViolated { inversion_index });
    }
    let mut low:  isize = 0;
    let mut high: isize = haystack.len() as isize - 1;
    let mut probes: u64 = 0;
    while low <= high {
        let mid = (low + high) / 2;
        probes += 1;
        match haystack[mid as usize].cmp(target) {
            Ordering::Equal   => return Ok((Some(mid as usize), probes)),
            Ordering::Greater => high = mid - 1,
            Ordering::Less    => low  = mid + 1,
        }
    }
    Ok((None, probes))
}

/// returns the index of the first element smaller than its predecessor, if any
fn first_inversion<T: Ord>(haystack: &[T]) -> Option<usize> {
    haystack.windows(2)
        .position(|pair| pair[0] > pair[1])
        .map(|position| position + 1)
}

#[cfg(test)]
mod tests {

    //! Unit tests for the [logarithmic](super) module

    use super::*;

    #[test]
    fn finds_present_targets() {
        assert_eq!(binary_search(&[1, 3, 5, 7, 9, 11], &7), Ok(Some(3)), "wrong index for a present target");
    }

    #[test]
    fn absent_targets_yield_the_not_found_sentinel() {
        assert_eq!(binary_search(&[1, 3, 5, 7, 9, 11], &4), Ok(None));
        assert_eq!(binary_search::<u32>(&[], &4),           Ok(None), "empty haystacks have nothing to find");
    }

    /// for all sorted S and all v in S, the returned index must point at an element equal to v
    #[test]
    fn every_member_is_findable() {
        let haystack = [0, 2, 4, 4, 8, 16, 23, 23, 42, 99, 1024];
        for target in &haystack {
            let index = binary_search(&haystack, target).unwrap()
                .unwrap_or_else(|| panic!("binary_search() missed the present target {target}"));
            assert_eq!(&haystack[index], target, "returned index does not hold the target");
        }
    }

    #[test]
    fn unsorted_input_fails_fast() {
        assert_eq!(binary_search(&[1, 3, 2, 7], &7),
                   Err(AlgorithmError::PreconditionViolated { inversion_index: 2 }),
                   "unsorted haystacks must be rejected, pointing at the first inversion");
    }

    /// worst case (absent target greater than every element) takes `floor(log2(n)) + 1` probes
    #[test]
    fn probe_count_grows_logarithmically() {
        let probes_for = |n: u32| {
            let haystack: Vec<u32> = (0..n).collect();
            let (index, probes) = counting_binary_search(&haystack, &n).unwrap();
            assert_eq!(index, None);
            probes
        };
        assert_eq!(probes_for(64),   7);
        assert_eq!(probes_for(4096), 13);
        assert_eq!(probes_for(65536), 17, "doubling the size 10 times over should add just 10 probes");
    }
}
