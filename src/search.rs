mod scan;
mod validate;

/// Error returned by the validating search when an argument is unusable.
///
/// Produced for unsorted input, unordered elements, and sums that cannot be
/// ordered against the target.
pub use crate::search::validate::PairSearchError;
pub use crate::search::validate::SortedSlice;
use crate::{
    observe::{LogObserver, ScanObserver},
    search::scan::{ScanOutcome, converge},
    types::{Element, IndexPair},
};

/// Find two elements of the ascending slice `arr` that sum to `target`.
///
/// Cursors start at both ends. While `left < right`, a sum below the target
/// advances `left`, a sum above it retreats `right`, and an exact match is
/// returned immediately. With several matching pairs, the first one met by
/// this converging order is returned.
///
/// Returns `None` when the cursors meet without a match, for slices shorter
/// than two elements, and when a sum cannot be ordered against the target.
/// Sortedness is not checked: on unsorted input the result is whatever the
/// scan produces. Use [`try_find_pair`] to reject such input instead.
///
/// Cursor moves are logged at trace level.
#[must_use]
pub fn find_pair<T: Element>(arr: &[T], target: T) -> Option<IndexPair> {
    find_pair_with(arr, target, &mut LogObserver)
}

/// Same as [`find_pair`], reporting every cursor move to `observer` instead
/// of the log.
#[must_use]
pub fn find_pair_with<T: Element>(
    arr: &[T],
    target: T,
    observer: &mut impl ScanObserver,
) -> Option<IndexPair> {
    match converge(arr, target, observer) {
        ScanOutcome::Found(pair) => Some(pair),
        ScanOutcome::Exhausted => None,
        ScanOutcome::Unordered { left, right } => {
            log::debug!("scan stopped: sum of elements {left} and {right} is unordered");
            None
        }
    }
}

/// Validating variant of [`find_pair`].
///
/// # Errors
/// If `arr` contains an unordered element or is not sorted ascending, or if
/// a sum met during the scan cannot be ordered against `target`.
pub fn try_find_pair<T: Element>(
    arr: &[T],
    target: T,
) -> Result<Option<IndexPair>, PairSearchError> {
    SortedSlice::new(arr)?.find_pair(target)
}
