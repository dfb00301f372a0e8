use crate::{
    observe::LogObserver,
    search::scan::{ScanOutcome, converge},
    types::{Element, IndexPair},
};
use derive_more::Deref;
use thiserror::Error;

/// Error kind for invalid arguments to the validating search.
///
/// Input is never corrected: the first offending position is reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PairSearchError {
    /// `arr[index - 1] > arr[index]`.
    #[error("element {index} is smaller than its predecessor")]
    Unsorted {
        /// Position of the first out-of-order element.
        index: usize,
    },
    /// `arr[index]` has no ordering, not even with itself.
    #[error("element {index} is unordered")]
    Unordered {
        /// Position of the unordered element.
        index: usize,
    },
    /// `arr[left] + arr[right]` has no ordering against the target.
    #[error("sum of elements {left} and {right} is unordered against the target")]
    UnorderedSum {
        /// Left cursor at the failing step.
        left: usize,
        /// Right cursor at the failing step.
        right: usize,
    },
}

/// A borrowed slice checked to be sorted ascending with every element
/// ordered.
#[must_use]
#[derive(Debug, Clone, Copy, Deref)]
#[deref(forward)]
pub struct SortedSlice<'a, T>(&'a [T]);

impl<'a, T: Element> SortedSlice<'a, T> {
    /// Check `arr` and wrap it.
    ///
    /// # Errors
    /// [`PairSearchError::Unordered`] for the first element that does not
    /// compare with itself, otherwise [`PairSearchError::Unsorted`] for the
    /// first element smaller than its predecessor.
    pub fn new(arr: &'a [T]) -> Result<Self, PairSearchError> {
        if let Some(index) = arr.iter().position(|x| x.partial_cmp(x).is_none()) {
            return Err(PairSearchError::Unordered { index });
        }
        if let Some(index) = arr.windows(2).position(|pair| pair[0] > pair[1]) {
            return Err(PairSearchError::Unsorted { index: index + 1 });
        }
        Ok(Self(arr))
    }

    /// The wrapped slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.0
    }

    /// Two-pointer search over the checked slice, logging cursor moves at
    /// trace level.
    ///
    /// # Errors
    /// [`PairSearchError::UnorderedSum`] if a sum met during the scan cannot
    /// be ordered against `target`.
    pub fn find_pair(&self, target: T) -> Result<Option<IndexPair>, PairSearchError> {
        match converge(self.0, target, &mut LogObserver) {
            ScanOutcome::Found(pair) => Ok(Some(pair)),
            ScanOutcome::Exhausted => Ok(None),
            ScanOutcome::Unordered { left, right } => {
                Err(PairSearchError::UnorderedSum { left, right })
            }
        }
    }
}
