/// A single non-matching step of a two-pointer scan.
///
/// Each variant carries the new position of the cursor that moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanStep {
    /// The sum was below the target; the left cursor moved up to `left`.
    Advanced {
        /// New left cursor.
        left: usize,
    },
    /// The sum was above the target; the right cursor moved down to `right`.
    Retreated {
        /// New right cursor.
        right: usize,
    },
}

/// Receiver of scan steps.
///
/// Observers see every cursor move in order. They cannot influence the scan.
pub trait ScanObserver {
    /// Called after a cursor moved.
    fn on_step(&mut self, step: ScanStep);
}

/// Discards all steps.
impl ScanObserver for () {
    #[inline]
    fn on_step(&mut self, _step: ScanStep) {}
}

/// Records all steps in order.
impl ScanObserver for Vec<ScanStep> {
    fn on_step(&mut self, step: ScanStep) {
        self.push(step);
    }
}

impl<O: ScanObserver + ?Sized> ScanObserver for &mut O {
    fn on_step(&mut self, step: ScanStep) {
        (**self).on_step(step);
    }
}

/// Forwards steps to the `log` facade at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ScanObserver for LogObserver {
    fn on_step(&mut self, step: ScanStep) {
        match step {
            ScanStep::Advanced { left } => log::trace!("sum below target, left cursor -> {left}"),
            ScanStep::Retreated { right } => {
                log::trace!("sum above target, right cursor -> {right}");
            }
        }
    }
}
