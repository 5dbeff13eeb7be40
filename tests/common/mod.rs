#![allow(dead_code)]

use scel2rime::storage::meta_unit::{
    FormatVariant, CATEGORY_OFFSET, DESCRIPTION_OFFSET, HEADER_END, SAMPLES_OFFSET, TITLE_OFFSET,
};

pub fn utf16le(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|c| c.to_le_bytes()).collect()
}

/// Builds synthetic cell dictionary images.
pub struct ScelBuilder {
    mask: u8,
    word_offset: usize,
    meta: [(u64, String); 4],
    pinyin: Vec<(u16, String)>,
    groups: Vec<(Vec<u16>, Vec<String>)>,
}

impl ScelBuilder {
    pub fn new(variant: FormatVariant) -> Self {
        Self {
            mask: variant.mask(),
            word_offset: variant.word_region_offset() as usize,
            meta: [
                (TITLE_OFFSET, String::new()),
                (CATEGORY_OFFSET, String::new()),
                (DESCRIPTION_OFFSET, String::new()),
                (SAMPLES_OFFSET, String::new()),
            ],
            pinyin: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn mask(mut self, mask: u8) -> Self {
        self.mask = mask;
        self
    }

    pub fn meta(mut self, title: &str, category: &str, description: &str, samples: &str) -> Self {
        self.meta[0].1 = title.to_string();
        self.meta[1].1 = category.to_string();
        self.meta[2].1 = description.to_string();
        self.meta[3].1 = samples.to_string();
        self
    }

    pub fn pinyin(mut self, index: u16, syllable: &str) -> Self {
        self.pinyin.push((index, syllable.to_string()));
        self
    }

    pub fn group(mut self, indexes: &[u16], words: &[&str]) -> Self {
        self.groups.push((indexes.to_vec(), words.iter().map(|w| w.to_string()).collect()));
        self
    }

    /// Byte offset where each group starts, in order.
    pub fn group_offsets(&self) -> Vec<usize> {
        let mut offsets = Vec::new();
        let mut offset = self.word_offset;
        for (indexes, words) in &self.groups {
            offsets.push(offset);
            offset += 4 + indexes.len() * 2;
            for word in words {
                offset += 2 + utf16le(word).len() + 12;
            }
        }
        offsets
    }

    pub fn build(&self) -> Vec<u8> {
        let mut data = vec![0u8; HEADER_END as usize];
        data[4] = self.mask;
        for (offset, text) in &self.meta {
            let bytes = utf16le(text);
            data[*offset as usize..*offset as usize + bytes.len()].copy_from_slice(&bytes);
        }
        data.extend((self.pinyin.len() as u32).to_le_bytes());
        for (index, syllable) in &self.pinyin {
            let bytes = utf16le(syllable);
            data.extend(index.to_le_bytes());
            data.extend((bytes.len() as u16).to_le_bytes());
            data.extend(bytes);
        }
        assert!(data.len() <= self.word_offset, "pinyin table overlaps word records");
        data.resize(self.word_offset, 0);

        for (indexes, words) in &self.groups {
            data.extend((words.len() as u16).to_le_bytes());
            data.extend((indexes.len() as u16 * 2).to_le_bytes());
            for index in indexes {
                data.extend(index.to_le_bytes());
            }
            for (i, word) in words.iter().enumerate() {
                let bytes = utf16le(word);
                data.extend((bytes.len() as u16).to_le_bytes());
                data.extend(bytes);
                data.extend(10u16.to_le_bytes());
                data.extend((i as u16 + 1).to_le_bytes());
                data.extend([0u8; 8]);
            }
        }
        data
    }
}

/// The smallest useful dictionary: `ni hao` -> 你好.
pub fn minimal(variant: FormatVariant) -> ScelBuilder {
    ScelBuilder::new(variant)
        .pinyin(0, "ni")
        .pinyin(1, "hao")
        .pinyin(2, "zuo")
        .group(&[0, 1], &["你好"])
}

pub fn sample(variant: FormatVariant) -> ScelBuilder {
    ScelBuilder::new(variant)
        .meta("网络流行新词", "网络", "最新网络流行词汇", "给力 神马 浮云")
        .pinyin(0, "fu")
        .pinyin(1, "gei")
        .pinyin(2, "li")
        .pinyin(3, "ma")
        .pinyin(4, "shen")
        .pinyin(5, "yun")
        .pinyin(6, "zuo")
        .group(&[1, 2], &["给力"])
        .group(&[4, 3], &["神马", "神码"])
        .group(&[0, 5], &["浮云"])
        .group(&[6], &["做", "作", "坐"])
}
