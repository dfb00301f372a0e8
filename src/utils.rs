use core::ops::Range;

pub(crate) trait RangeSplitAtHalf {
    /// Split into a lower half of `len / 2` indices and an upper half holding
    /// the rest.
    fn split_at_half(&self) -> (Range<usize>, Range<usize>);
}

impl RangeSplitAtHalf for Range<usize> {
    #[inline]
    fn split_at_half(&self) -> (Range<usize>, Range<usize>) {
        let mid_abs = self.start + self.len() / 2;
        (self.start..mid_abs, mid_abs..self.end)
    }
}
