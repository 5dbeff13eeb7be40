//! Cell dictionary (.scel) reader.
//!
//! This module ties the decoding units together:
//! 1. format detection from the header mask byte
//! 2. metadata extraction
//! 3. pinyin table decoding
//! 4. word record decoding against the pinyin table
//!
//! Every decode owns its own cursor and pinyin table; nothing is shared
//! between files.
//!
//! # Examples
//!
//! ```no_run
//! use scel2rime::readers::ScelReader;
//!
//! # fn main() -> scel2rime::Result<()> {
//! let dict = ScelReader::decode_file("scel/网络流行新词.scel")?;
//! println!("{}: {} words", dict.meta.title, dict.records.len());
//! if let Some(reason) = &dict.stop_reason {
//!     println!("stopped early: {}", reason);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use log::*;

use crate::storage::meta_unit::{DictMeta, FormatVariant};
use crate::storage::pinyin_table::PinyinTable;
use crate::storage::reader_helper::ByteCursor;
use crate::storage::word_block::{WordRecord, WordStream};
use crate::utils::io_utils::bytes_from_file;
use crate::{Result, ScelError};

/// Everything decoded from one cell dictionary.
#[derive(Debug)]
pub struct DecodedDictionary {
    pub variant: FormatVariant,
    pub meta: DictMeta,
    pub pinyin_count: usize,
    pub records: Vec<WordRecord>,
    /// Set when the word records ended before the end of the source.
    /// `records` then holds everything decoded up to that point.
    pub stop_reason: Option<ScelError>,
}

impl DecodedDictionary {
    pub fn is_complete(&self) -> bool {
        self.stop_reason.is_none()
    }
}

pub struct ScelReader;

impl ScelReader {
    /// Decodes an in-memory cell dictionary.
    ///
    /// # Errors
    ///
    /// - [`ScelError::UnsupportedFormat`] if the mask byte is unknown
    /// - [`ScelError::TruncatedInput`] if the source ends inside the header or
    ///   the pinyin table
    ///
    /// Truncation inside the word records is not an error; see
    /// [`DecodedDictionary::stop_reason`].
    pub fn decode(data: &[u8]) -> Result<DecodedDictionary> {
        let mut cursor = ByteCursor::new(data);
        let variant = FormatVariant::detect(&mut cursor)?;
        debug!("Format mask {:#04x}, variant {:?}", variant.mask(), variant);

        let meta = DictMeta::from_cursor(&mut cursor)?;
        debug!("Title: {}, category: {}", meta.title, meta.category);

        let table = PinyinTable::from_cursor(&mut cursor)?;
        let stream = WordStream::from_cursor(&mut cursor, &table, variant.word_region_offset());

        Ok(DecodedDictionary {
            variant,
            meta,
            pinyin_count: table.len(),
            records: stream.records,
            stop_reason: stream.stop_reason,
        })
    }

    /// Reads and decodes a cell dictionary file.
    ///
    /// The file is read whole and closed before decoding starts.
    pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<DecodedDictionary> {
        let data = bytes_from_file(path.as_ref())?;
        debug!("Decoding {} ({} bytes)", path.as_ref().display(), data.len());
        Self::decode(&data)
    }
}
