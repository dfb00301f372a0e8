use core::cmp::Ordering;
use derive_more::Display;

/// A value the pair search can operate on.
///
/// Implemented for all primitive integers and floats. Integer sums that
/// overflow are still ordered correctly against the target, so a scan never
/// wraps or panics.
pub trait Element: Copy + PartialOrd {
    /// Order `self + rhs` against `target`.
    ///
    /// Returns `None` only when the sum and the target are unordered, which
    /// can happen for floats (`NaN`, `-inf + inf`).
    fn cmp_sum(self, rhs: Self, target: Self) -> Option<Ordering>;
}

macro_rules! impl_element_signed {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            #[inline]
            fn cmp_sum(self, rhs: Self, target: Self) -> Option<Ordering> {
                Some(match self.checked_add(rhs) {
                    Some(sum) => sum.cmp(&target),
                    // On overflow both operands carry the sign of the true sum.
                    None if self > 0 => Ordering::Greater,
                    None => Ordering::Less,
                })
            }
        }
    )*};
}

macro_rules! impl_element_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            #[inline]
            fn cmp_sum(self, rhs: Self, target: Self) -> Option<Ordering> {
                Some(self.checked_add(rhs).map_or(Ordering::Greater, |sum| sum.cmp(&target)))
            }
        }
    )*};
}

macro_rules! impl_element_float {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            #[inline]
            fn cmp_sum(self, rhs: Self, target: Self) -> Option<Ordering> {
                (self + rhs).partial_cmp(&target)
            }
        }
    )*};
}

impl_element_signed!(i8, i16, i32, i64, i128, isize);
impl_element_unsigned!(u8, u16, u32, u64, u128, usize);
impl_element_float!(f32, f64);

/// Sentinel form of "no pair found".
pub const NOT_FOUND: (isize, isize) = (-1, -1);

/// Indices of two elements of a slice, `left < right`.
///
/// Only produced by a scan, so both indices are always in bounds of the
/// scanned slice.
#[must_use]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("({left}, {right})")]
pub struct IndexPair {
    pub(crate) left: usize,
    pub(crate) right: usize,
}

impl IndexPair {
    /// Index of the smaller element.
    #[must_use]
    pub fn left(self) -> usize {
        self.left
    }

    /// Index of the larger element.
    #[must_use]
    pub fn right(self) -> usize {
        self.right
    }

    /// `(left, right)` as a tuple.
    #[must_use]
    pub fn as_tuple(self) -> (usize, usize) {
        (self.left, self.right)
    }

    /// Signed tuple form of a search result: the indices of a found pair, or
    /// [`NOT_FOUND`] for `None`.
    ///
    /// # Panics
    /// In case of internal invariant violations. Impossible: slice indices
    /// never exceed `isize::MAX`.
    #[must_use]
    pub fn to_signed(found: Option<Self>) -> (isize, isize) {
        found.map_or(NOT_FOUND, |pair| {
            (
                pair.left.try_into().expect("IndexPair::to_signed: [1]"),
                pair.right.try_into().expect("IndexPair::to_signed: [2]"),
            )
        })
    }
}

impl From<IndexPair> for (usize, usize) {
    fn from(pair: IndexPair) -> Self {
        pair.as_tuple()
    }
}
