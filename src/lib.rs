//! Array practice routines over borrowed slices.
//!
//! This crate provides two independent, allocation-light algorithms:
//! - A two-pointer pair search over a sorted slice. It returns the first pair
//!   of indices whose elements sum to a target under the converging cursor
//!   order, or nothing when the cursors meet.
//! - A half reversal that keeps the first `len / 2` elements in place and
//!   reverses the remainder.
//!
//! Key modules:
//! - `search`: `find_pair`, its observer-driven and validating variants, and
//!   the `SortedSlice` wrapper.
//! - `halves`: `reverse_second_half` and its in-place counterpart.
//! - `observe`: the `ScanObserver` hook receiving cursor moves of a scan.
//! - `types`: the `Element` bound on searchable values and the `IndexPair`
//!   result with its `(-1, -1)` sentinel form.
//!
//! Quick start:
//!
//! ```
//! use apx::{halves::reverse_second_half, search::find_pair, types::IndexPair};
//!
//! let found = find_pair(&[2, 7, 11, 15], 9);
//! assert_eq!(found.map(IndexPair::as_tuple), Some((0, 1)));
//! assert_eq!(IndexPair::to_signed(find_pair(&[1, 2], 10)), (-1, -1));
//!
//! assert_eq!(reverse_second_half(&[1, 2, 3, 4, 5]), [1, 2, 5, 4, 3]);
//! ```
//!
//! Scans report every cursor move through the `log` facade at trace level.
//! The crate never installs a logger.

/// Splitting a slice at its midpoint and reversing the second half.
///
/// Both the allocating and the in-place form use the same boundary,
/// `len / 2`, so the second half absorbs the extra element of odd lengths.
pub mod halves;
/// Observation of two-pointer scans.
///
/// Exposes `ScanStep` events, the `ScanObserver` trait and the default
/// `LogObserver` that forwards steps to the `log` facade.
pub mod observe;
/// Two-pointer search for a pair summing to a target.
///
/// Contains the converging scan, its validating front-end and the error
/// type reported for invalid arguments.
pub mod search;
/// Core types shared by the search: the `Element` bound and `IndexPair`.
///
/// `Element` orders a sum against a target without overflowing, which keeps
/// the scan panic-free for every supported numeric type.
pub mod types;
mod utils;
