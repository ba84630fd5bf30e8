// src/progress.rs
/// Lightweight progress reporting for the long-running scrape loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of teams.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one team's roster has been fetched.
    fn item_done(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
