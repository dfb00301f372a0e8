//! Walkthrough of both routines on the classic practice inputs.
//!
//! Run with `RUST_LOG=trace cargo run --example practice` to see every
//! cursor move of the pair search.

use apx::{halves::reverse_second_half, search::find_pair, types::IndexPair};

fn main() {
    env_logger::init();

    for (arr, target) in [(&[1, 2, 3, 4, 5][..], 7), (&[2, 7, 11, 15][..], 9)] {
        let found = find_pair(arr, target);
        println!("find_pair({arr:?}, {target}) = {:?}", IndexPair::to_signed(found));
    }

    for len in 5..=10 {
        let arr: Vec<u32> = (1..=len).collect();
        println!("reverse_second_half({arr:?}) = {:?}", reverse_second_half(&arr));
    }
}
