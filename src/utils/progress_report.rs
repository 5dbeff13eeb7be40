//! Progress reporting for batch conversions.
//!
//! Callers receive an update after each dictionary and may cancel the
//! remaining work.
//!
//! # Examples
//!
//! ```
//! use scel2rime::utils::progress_report::{ProgressState, ProgressReportFn};
//!
//! fn my_reporter(state: &mut ProgressState) -> bool {
//!     println!("{}: {}/{}", state.state_id, state.current + 1, state.total);
//!     false // Return true to cancel the operation
//! }
//!
//! let mut progress = ProgressState::new("converting", 3, Some(my_reporter));
//! for i in 0..3 {
//!     if progress.report(i, "dict") {
//!         break;
//!     }
//! }
//! ```

/// Function type for progress reporting callbacks.
///
/// The function receives a mutable reference to the progress state and
/// returns `true` to cancel the operation, or `false` to continue.
pub type ProgressReportFn = fn(&mut ProgressState) -> bool;

/// State information for progress reporting.
pub struct ProgressState {
    /// Identifier for this progress state (e.g., "converting")
    pub state_id: String,
    /// Total number of items to process
    pub total: u64,
    /// Current item being processed
    pub current: u64,
    /// Label of the current item
    pub item: String,
    /// Optional reporter function to call
    pub reporter: Option<ProgressReportFn>,
}

impl ProgressState {
    pub fn new(state_id: &str, total: u64, reporter: Option<ProgressReportFn>) -> Self {
        Self {
            state_id: state_id.to_string(),
            total,
            current: 0,
            item: String::new(),
            reporter,
        }
    }

    /// Reports that item `current` is done.
    ///
    /// Returns `true` if the operation should be cancelled, `false` otherwise.
    pub fn report(&mut self, current: u64, item: &str) -> bool {
        let Some(reporter) = self.reporter else {
            return false;
        };
        self.current = current;
        self.item = item.to_string();
        reporter(self)
    }
}
