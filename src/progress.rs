// src/progress.rs
/// Lightweight progress reporting used by multi-retrieval queries (player stats).
/// Frontends implement this to surface status to users.
pub trait Progress: Send {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// One year's resource was retrieved and folded (`rows` decoded).
    fn item_done(&mut self, _year: i32, _rows: usize) {}

    /// One year's resource could not be retrieved.
    fn item_failed(&mut self, _year: i32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
