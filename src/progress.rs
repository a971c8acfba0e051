// src/progress.rs
/// Progress reporting for long-running work (reading sources, publishing).
/// The CLI implements this to print status lines.
pub trait Progress {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One candidate handled.
    fn item_done(&mut self, _name: &str) {}

    /// One candidate failed; the run continues.
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
