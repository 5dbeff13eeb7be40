//! Format detection and dictionary metadata.
//!
//! A cell dictionary starts with a fixed-layout header:
//! - a format mask byte at offset 4, selecting where the word records begin
//! - four NUL-padded UTF-16LE text fields (title, category, description, samples)
//! - the pinyin table, starting 4 bytes past the end of the samples field
//!
//! # Examples
//!
//! ```
//! use scel2rime::storage::meta_unit::FormatVariant;
//!
//! let variant = FormatVariant::from_mask(0x44)?;
//! assert_eq!(variant.word_region_offset(), 0x2628);
//! # Ok::<(), scel2rime::ScelError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::storage::reader_helper::ByteCursor;
use crate::{Result, ScelError};

/// Absolute offset of the format mask byte.
pub const FORMAT_MASK_OFFSET: u64 = 4;

pub const MASK_VARIANT_A: u8 = 0x44;
pub const MASK_VARIANT_B: u8 = 0x45;

pub const WORD_REGION_OFFSET_A: u64 = 0x2628;
pub const WORD_REGION_OFFSET_B: u64 = 0x26c4;

pub const TITLE_OFFSET: u64 = 0x130;
pub const CATEGORY_OFFSET: u64 = 0x338;
pub const DESCRIPTION_OFFSET: u64 = 0x540;
pub const SAMPLES_OFFSET: u64 = 0xd40;
/// End of the samples field, and nominal start of the pinyin table region.
pub const HEADER_END: u64 = 0x1540;

/// Header layout variant, selected by the format mask byte.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum FormatVariant {
    /// Mask `0x44`, word records at `0x2628`
    A,
    /// Mask `0x45`, word records at `0x26c4`
    B,
}

impl FormatVariant {
    /// Maps a format mask byte to its variant.
    ///
    /// # Errors
    ///
    /// Returns [`ScelError::UnsupportedFormat`] for any other mask value.
    pub fn from_mask(mask: u8) -> Result<Self> {
        match mask {
            MASK_VARIANT_A => Ok(FormatVariant::A),
            MASK_VARIANT_B => Ok(FormatVariant::B),
            _ => Err(ScelError::unsupported_format(mask)),
        }
    }

    /// Reads the mask byte at [`FORMAT_MASK_OFFSET`] and maps it.
    pub fn detect(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.seek(FORMAT_MASK_OFFSET)?;
        Self::from_mask(cursor.read_u8()?)
    }

    pub fn mask(&self) -> u8 {
        match self {
            FormatVariant::A => MASK_VARIANT_A,
            FormatVariant::B => MASK_VARIANT_B,
        }
    }

    /// Absolute offset where the word record stream begins.
    pub fn word_region_offset(&self) -> u64 {
        match self {
            FormatVariant::A => WORD_REGION_OFFSET_A,
            FormatVariant::B => WORD_REGION_OFFSET_B,
        }
    }
}

/// Descriptive header fields of a cell dictionary.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictMeta {
    pub title: String,
    pub category: String,
    pub description: String,
    /// Example words, as the dictionary author listed them
    pub samples: String,
}

impl DictMeta {
    /// Reads the four header text fields at their fixed offsets.
    pub fn from_cursor(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(Self {
            title: cursor.read_padded_string(TITLE_OFFSET, CATEGORY_OFFSET)?,
            category: cursor.read_padded_string(CATEGORY_OFFSET, DESCRIPTION_OFFSET)?,
            description: cursor.read_padded_string(DESCRIPTION_OFFSET, SAMPLES_OFFSET)?,
            samples: cursor.read_padded_string(SAMPLES_OFFSET, HEADER_END)?,
        })
    }
}
