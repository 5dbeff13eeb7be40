//! Global pinyin table of a cell dictionary.
//!
//! The table sits at `0x1540 + 4` (the 4 bytes at `0x1540` hold an entry count
//! that is not used) and is a run of `(index: u16, byte_len: u16, pinyin: UTF-16LE)`
//! entries. Word records refer to syllables by index instead of repeating them.

use indexmap::IndexMap;
use indexmap::map::Entry;
use log::debug;

use crate::storage::meta_unit::HEADER_END;
use crate::storage::reader_helper::ByteCursor;
use crate::Result;

/// Absolute offset of the first pinyin table entry.
pub const PINYIN_TABLE_OFFSET: u64 = HEADER_END + 4;

/// The table has no end marker; it is ordered alphabetically and `zuo`
/// is always the last syllable.
pub const LAST_PINYIN: &str = "zuo";

/// Maps pinyin indexes to syllables, in the order they were read.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct PinyinTable {
    entries: IndexMap<u16, String>,
}

impl PinyinTable {
    /// Decodes the pinyin table, leaving the cursor just past the `zuo` entry.
    ///
    /// The first entry seen for an index wins; later duplicates are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScelError::TruncatedInput`] if the source ends before `zuo` is read.
    pub fn from_cursor(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.seek(PINYIN_TABLE_OFFSET)?;
        let mut table = PinyinTable::default();
        loop {
            let index = cursor.read_u16_le()?;
            let byte_len = cursor.read_u16_le()?;
            let pinyin = cursor.read_fixed_string(None, byte_len as u64)?;
            let is_last = pinyin == LAST_PINYIN;
            table.insert(index, pinyin);
            if is_last {
                break;
            }
        }
        debug!("Pinyin table: {} entries, ends at {:#x}", table.len(), cursor.position());
        Ok(table)
    }

    /// Inserts `pinyin` under `index` unless the index is already taken.
    ///
    /// Returns `false` when the entry was ignored as a duplicate.
    pub fn insert(&mut self, index: u16, pinyin: String) -> bool {
        match self.entries.entry(index) {
            Entry::Occupied(_) => {
                debug!("Duplicate pinyin index {} ({}) ignored", index, pinyin);
                false
            }
            Entry::Vacant(e) => {
                e.insert(pinyin);
                true
            }
        }
    }

    pub fn get(&self, index: u16) -> Option<&str> {
        self.entries.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
