//! Builder module for Rime dictionary output
//!
//! This module contains the text rendering of decoded word lists and the
//! batch converter that writes them to disk.

pub mod rime_writer;
pub mod batch;

// Re-export commonly used types for convenience
pub use rime_writer::{render_body, render_manifest, RimeHeader};
pub use batch::{BatchConfig, BatchEntry, BatchReport, ConvertOutcome, convert_batch, convert_entry};
