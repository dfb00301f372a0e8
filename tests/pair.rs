#![allow(missing_docs)]

use apx::{
    observe::ScanStep,
    search::{PairSearchError, SortedSlice, find_pair, find_pair_with, try_find_pair},
    types::{IndexPair, NOT_FOUND},
};

fn traced<T: apx::types::Element>(
    arr: &[T],
    target: T,
) -> (Option<(usize, usize)>, Vec<ScanStep>) {
    let mut steps = Vec::new();
    let found = find_pair_with(arr, target, &mut steps);
    (found.map(IndexPair::as_tuple), steps)
}

#[test]
fn finds_pair_after_advancing_left() {
    // 1+5 < 7 moves left to 1; 2+5 == 7.
    let (found, steps) = traced(&[1, 2, 3, 4, 5], 7);
    assert_eq!(found, Some((1, 4)));
    assert_eq!(steps, [ScanStep::Advanced { left: 1 }]);
}

#[test]
fn finds_pair_after_retreating_right() {
    // 2+15 > 9, 2+11 > 9, 2+7 == 9.
    let (found, steps) = traced(&[2, 7, 11, 15], 9);
    assert_eq!(found, Some((0, 1)));
    assert_eq!(
        steps,
        [
            ScanStep::Retreated { right: 2 },
            ScanStep::Retreated { right: 1 },
        ]
    );
}

#[test]
fn first_pair_in_converging_order_wins() {
    // (0, 5), (1, 4) and (2, 3) all sum to 7.
    let (found, steps) = traced(&[1, 2, 3, 4, 5, 6], 7);
    assert_eq!(found, Some((0, 5)));
    assert!(steps.is_empty());
}

#[test]
fn duplicate_values_pair_up() {
    let found = find_pair(&[1, 2, 3, 4, 4, 9, 56, 90], 8);
    assert_eq!(found.map(IndexPair::as_tuple), Some((3, 4)));
}

#[test]
fn mixed_walks() {
    let cases: [(&[i32], i32, (usize, usize)); 5] = [
        (&[2, 3, 4], 6, (0, 2)),
        (&[-1, 0], -1, (0, 1)),
        (&[5, 25, 75], 100, (1, 2)),
        (&[3, 24, 50, 79, 88, 150, 345], 200, (2, 5)),
        (&[-1000, -1, 0, 1], 1, (2, 3)),
    ];
    for (arr, target, expected) in cases {
        assert_eq!(
            find_pair(arr, target).map(IndexPair::as_tuple),
            Some(expected),
            "{arr:?} / {target}"
        );
    }
}

#[test]
fn short_inputs_find_nothing() {
    assert_eq!(find_pair::<i32>(&[], 0), None);
    assert_eq!(find_pair(&[4], 8), None);
    assert_eq!(traced(&[4], 4), (None, vec![]));
}

#[test]
fn exhausted_scan_reports_every_step() {
    let (found, steps) = traced(&[1, 2, 3], 100);
    assert_eq!(found, None);
    assert_eq!(
        steps,
        [ScanStep::Advanced { left: 1 }, ScanStep::Advanced { left: 2 }]
    );
}

#[test]
fn sentinel_form() {
    assert_eq!(IndexPair::to_signed(find_pair(&[1, 2], 10)), NOT_FOUND);
    assert_eq!(IndexPair::to_signed(find_pair(&[1, 2], 10)), (-1, -1));
    assert_eq!(IndexPair::to_signed(find_pair(&[2, 7, 11, 15], 9)), (0, 1));
}

#[test]
fn pair_accessors_and_display() {
    let pair = find_pair(&[1, 2, 3, 4, 5], 7).expect("pair exists");
    assert_eq!(pair.left(), 1);
    assert_eq!(pair.right(), 4);
    assert_eq!(<(usize, usize)>::from(pair), (1, 4));
    assert_eq!(pair.to_string(), "(1, 4)");
}

#[test]
fn signed_overflow_is_ordered_not_wrapped() {
    // 1 + i32::MAX overflows upward and must count as "too big".
    let (found, steps) = traced(&[1, 5, i32::MAX], 6);
    assert_eq!(found, Some((0, 1)));
    assert_eq!(steps, [ScanStep::Retreated { right: 1 }]);

    // i32::MIN + -1 overflows downward and must count as "too small".
    let (found, steps) = traced(&[i32::MIN, -5, -1], -6);
    assert_eq!(found, Some((1, 2)));
    assert_eq!(steps, [ScanStep::Advanced { left: 1 }]);
}

#[test]
fn unsigned_overflow_is_ordered_not_wrapped() {
    // 10 + 250 wraps to 4 in u8 arithmetic; it must not match.
    assert_eq!(find_pair(&[10u8, 250], 4), None);
    assert_eq!(
        find_pair(&[10u8, 245, 250], 255).map(IndexPair::as_tuple),
        Some((0, 1))
    );
}

#[test]
fn floats() {
    assert_eq!(
        find_pair(&[0.5, 1.5, 2.5], 3.0).map(IndexPair::as_tuple),
        Some((0, 2))
    );
    assert_eq!(find_pair(&[f64::NEG_INFINITY, f64::INFINITY], 0.0), None);
    assert_eq!(find_pair(&[1.0, 2.0], f64::NAN), None);
}

#[test]
fn unsorted_input_is_scanned_as_is() {
    // 1 + 2 == 3 exists, but the scan only checks (0, 2) and (0, 1).
    let (found, steps) = traced(&[3, 1, 2], 3);
    assert_eq!(found, None);
    assert_eq!(
        steps,
        [
            ScanStep::Retreated { right: 1 },
            ScanStep::Retreated { right: 0 },
        ]
    );
}

#[test]
fn validating_search_accepts_sorted_input() {
    assert_eq!(
        try_find_pair(&[2, 7, 11, 15], 9).map(|found| found.map(IndexPair::as_tuple)),
        Ok(Some((0, 1)))
    );
    assert_eq!(try_find_pair(&[1, 1, 1], 5), Ok(None));
    assert_eq!(try_find_pair::<i64>(&[], 0), Ok(None));
}

#[test]
fn validating_search_rejects_unsorted_input() {
    assert_eq!(
        try_find_pair(&[3, 1, 2], 3),
        Err(PairSearchError::Unsorted { index: 1 })
    );
    assert_eq!(
        try_find_pair(&[1, 2, 5, 4], 3),
        Err(PairSearchError::Unsorted { index: 3 })
    );
}

#[test]
fn validating_search_rejects_unordered_values() {
    assert_eq!(
        try_find_pair(&[1.0, f64::NAN, 3.0], 4.0),
        Err(PairSearchError::Unordered { index: 1 })
    );
    assert_eq!(
        try_find_pair(&[f64::NEG_INFINITY, f64::INFINITY], 0.0),
        Err(PairSearchError::UnorderedSum { left: 0, right: 1 })
    );
    assert_eq!(
        try_find_pair(&[1.0f32, 2.0], f32::NAN),
        Err(PairSearchError::UnorderedSum { left: 0, right: 1 })
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        PairSearchError::Unsorted { index: 3 }.to_string(),
        "element 3 is smaller than its predecessor"
    );
    assert_eq!(
        PairSearchError::UnorderedSum { left: 0, right: 1 }.to_string(),
        "sum of elements 0 and 1 is unordered against the target"
    );
}

#[test]
fn sorted_slice_derefs_to_its_elements() {
    let arr = [1, 2, 3, 4, 5];
    let sorted = SortedSlice::new(&arr).expect("sorted");
    assert_eq!(sorted.len(), 5);
    assert_eq!(sorted.first(), Some(&1));
    assert_eq!(sorted.as_slice(), &arr);
    assert_eq!(
        sorted.find_pair(9).map(|found| found.map(IndexPair::as_tuple)),
        Ok(Some((3, 4)))
    );
}
