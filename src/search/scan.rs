use crate::{
    observe::{ScanObserver, ScanStep},
    types::{Element, IndexPair},
};
use core::cmp::Ordering;

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ScanOutcome {
    Found(IndexPair),
    /// Cursors met without a match.
    Exhausted,
    /// The sum at these cursors has no ordering against the target.
    Unordered { left: usize, right: usize },
}

pub(super) fn converge<T: Element>(
    arr: &[T],
    target: T,
    observer: &mut impl ScanObserver,
) -> ScanOutcome {
    let Some(mut right) = arr.len().checked_sub(1) else {
        return ScanOutcome::Exhausted;
    };
    let mut left = 0;
    while left < right {
        match arr[left].cmp_sum(arr[right], target) {
            Some(Ordering::Equal) => return ScanOutcome::Found(IndexPair { left, right }),
            Some(Ordering::Less) => {
                left += 1;
                observer.on_step(ScanStep::Advanced { left });
            }
            Some(Ordering::Greater) => {
                right -= 1;
                observer.on_step(ScanStep::Retreated { right });
            }
            None => return ScanOutcome::Unordered { left, right },
        }
    }
    ScanOutcome::Exhausted
}
