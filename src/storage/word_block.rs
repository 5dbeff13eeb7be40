//! Word record stream of a cell dictionary.
//!
//! Records are grouped by pronunciation. Each group is laid out as:
//!
//! ```text
//! word_count:  u16            number of homophones in the group
//! idx_bytes:   u16            byte length of the pinyin index list
//! indexes:     u16 * (idx_bytes / 2)
//! word_count times:
//!     word_len: u16
//!     word:     UTF-16LE, word_len bytes
//!     trailer:  12 bytes       (ext_len u16 + 10 byte ext block, not interpreted;
//!                              may be cut short at the end of the source)
//! ```
//!
//! Groups follow each other until the end of the source. There is no group
//! count, so the stream is finished when the cursor lands exactly on the
//! source length.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::storage::pinyin_table::PinyinTable;
use crate::storage::reader_helper::ByteCursor;
use crate::{Result, ScelError};

/// Bytes following every word: a length field plus the extension block.
pub const WORD_TRAILER_LEN: u64 = 12;

/// A word and its space-separated pinyin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub pinyin: String,
    pub word: String,
}

impl WordRecord {
    pub fn new<P: Into<String>, W: Into<String>>(pinyin: P, word: W) -> Self {
        Self { pinyin: pinyin.into(), word: word.into() }
    }
}

/// Result of scanning the word record stream.
#[derive(Debug, Default)]
pub struct WordStream {
    pub records: Vec<WordRecord>,
    /// Number of pronunciation groups fully decoded
    pub group_count: usize,
    /// Why decoding stopped before the end of the source, if it did
    pub stop_reason: Option<ScelError>,
}

impl WordStream {
    /// Decodes word records from `start` to the end of the source.
    ///
    /// Decoding stops early, keeping every record produced so far, when a group
    /// refers to a pinyin index missing from `table` or when a read runs past
    /// the end of the source. The cause is kept in `stop_reason`.
    pub fn from_cursor(cursor: &mut ByteCursor, table: &PinyinTable, start: u64) -> Self {
        let mut stream = WordStream::default();
        if let Err(e) = cursor.seek(start) {
            stream.stop_reason = Some(e);
            return stream;
        }
        debug!("Word records: {:#x}..{:#x}", start, cursor.len());

        while cursor.position() != cursor.len() {
            if let Err(e) = stream.read_group(cursor, table) {
                warn!("Word records stopped at {:#x} after {} words: {}", cursor.position(), stream.records.len(), e);
                stream.stop_reason = Some(e);
                break;
            }
            stream.group_count += 1;
        }
        stream
    }

    fn read_group(&mut self, cursor: &mut ByteCursor, table: &PinyinTable) -> Result<()> {
        let word_count = cursor.read_u16_le()?;
        let index_count = cursor.read_u16_le()? / 2;

        let mut syllables = Vec::with_capacity(index_count as usize);
        for _ in 0..index_count {
            let offset = cursor.position();
            let index = cursor.read_u16_le()?;
            let syllable = table
                .get(index)
                .ok_or_else(|| ScelError::unresolved_pinyin_index(index, offset))?;
            syllables.push(syllable);
        }
        let pinyin = syllables.join(" ");

        for _ in 0..word_count {
            let word_len = cursor.read_u16_le()?;
            let word = cursor.read_fixed_string(None, word_len as u64)?;
            self.records.push(WordRecord::new(pinyin.clone(), word));
            // A short trailer on the last word ends the stream at the end of the source
            let skipped = cursor.skip_at_most(WORD_TRAILER_LEN);
            if skipped < WORD_TRAILER_LEN {
                debug!("Word trailer cut short: {} of {} bytes", skipped, WORD_TRAILER_LEN);
            }
        }
        Ok(())
    }

    /// Whether the stream ended exactly at the end of the source.
    pub fn is_complete(&self) -> bool {
        self.stop_reason.is_none()
    }
}
