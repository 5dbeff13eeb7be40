// Utility functions and helpers
//
// This module provides file and directory I/O helpers and progress reporting.

pub mod io_utils;
pub mod progress_report;

pub use io_utils::{bytes_from_file, expand_path, scan_dir, write_string_to_file};
pub use progress_report::{ProgressState, ProgressReportFn};
