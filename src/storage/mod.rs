// Decoding units for the cell dictionary binary layout
//
// This module provides the byte cursor, the header/metadata layout, the
// pinyin table and the word record stream.

pub mod reader_helper;
pub mod meta_unit;
pub mod pinyin_table;
pub mod word_block;

pub use reader_helper::ByteCursor;
pub use meta_unit::{DictMeta, FormatVariant};
pub use pinyin_table::PinyinTable;
pub use word_block::{WordRecord, WordStream};
