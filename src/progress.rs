// src/progress.rs
/// Lightweight progress reporting used by the crawl.
/// Frontends (CLI, tests) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of search queries.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one unique job has been handled (counted or not).
    fn item_done(&mut self, _job_id: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
