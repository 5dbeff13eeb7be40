//! # scel2rime - Sogou Cell Dictionary to Rime Converter
//!
//! This crate decodes Sogou cell dictionary files (.scel) and writes their word
//! lists as Rime input method dictionaries.
//!
//! ## Features
//!
//! - **Decode .scel files**: Both known header layouts (format masks `0x44` and `0x45`)
//! - **Metadata**: Title, category, description and sample words from the header
//! - **Tolerant decoding**: Malformed or truncated trailing records keep everything decoded before them
//! - **Rime output**: Plain `word<TAB>pinyin` lists and complete `.dict.yaml` files
//! - **Batch conversion**: Convert a JSON list or a directory of dictionaries, one failure never stops the rest
//!
//! ## Quick Start
//!
//! ### Decoding a Cell Dictionary
//!
//! ```no_run
//! use scel2rime::readers::ScelReader;
//! use scel2rime::builder::{render_manifest, RimeHeader};
//!
//! # fn main() -> scel2rime::Result<()> {
//! let dict = ScelReader::decode_file("网络流行新词.scel")?;
//! println!("{}: {} words", dict.meta.title, dict.records.len());
//!
//! let header = RimeHeader::today("net_words");
//! let yaml = render_manifest("网络流行新词.scel", &header, &dict.records);
//! std::fs::write(header.file_name(), yaml)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **Storage**: [`storage`] for the byte cursor, header layout, pinyin table and word records
//! - **Readers**: [`readers`] for the `decode` entry point
//! - **Builder**: [`builder`] for Rime text output and batch conversion
//! - **Utilities**: [`utils`] for file helpers and progress reporting
//!
//! ## Error Handling
//!
//! All fallible operations return a [`Result<T>`] type, where errors are represented by
//! [`ScelError`]. The crate uses the `snafu` library for ergonomic error handling with
//! context and backtraces.

pub mod builder;
pub mod error;
pub mod readers;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use readers::{DecodedDictionary, ScelReader};
pub use storage::{DictMeta, FormatVariant, WordRecord};

// Re-export error types for convenience
pub use error::{ScelError, Result, snafu};

/// Decodes an in-memory cell dictionary. See [`ScelReader::decode`].
pub fn decode(data: &[u8]) -> Result<DecodedDictionary> {
    ScelReader::decode(data)
}
