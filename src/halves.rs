use crate::utils::RangeSplitAtHalf;

/// Boundary between the kept and the reversed half of a slice of length
/// `len`: `len / 2`.
#[must_use]
pub fn split_point(len: usize) -> usize {
    (0..len).split_at_half().1.start
}

/// Return `arr[..mid]` followed by `arr[mid..]` reversed, with
/// `mid = split_point(arr.len())`.
///
/// `arr` is left untouched.
///
/// ```
/// use apx::halves::reverse_second_half;
///
/// assert_eq!(reverse_second_half(&[1, 2, 3, 4, 5, 6]), [1, 2, 3, 6, 5, 4]);
/// assert!(reverse_second_half::<u8>(&[]).is_empty());
/// ```
#[must_use]
pub fn reverse_second_half<T: Clone>(arr: &[T]) -> Vec<T> {
    let (head, tail) = (0..arr.len()).split_at_half();
    let mut out = Vec::with_capacity(arr.len());
    out.extend_from_slice(&arr[head]);
    out.extend(arr[tail].iter().rev().cloned());
    out
}

/// Reverse the upper half of `arr` in place. Afterwards `arr` equals what
/// [`reverse_second_half`] returns for its previous contents.
pub fn reverse_second_half_in_place<T>(arr: &mut [T]) {
    let (_, tail) = (0..arr.len()).split_at_half();
    arr[tail].reverse();
}
