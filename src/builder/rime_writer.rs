//! Rime dictionary text output.
//!
//! Two outputs are produced from a decoded word list:
//! - the body: one `word<TAB>pinyin` line per record, joined by `\n`
//!   with no trailing newline
//! - the manifest: a `.dict.yaml` header block followed by the body
//!
//! Words and pinyin never contain tabs or newlines in cell dictionaries, so no
//! escaping is done.
//!
//! # Examples
//!
//! ```
//! use scel2rime::builder::rime_writer::{render_body, render_manifest, RimeHeader};
//! use scel2rime::storage::WordRecord;
//!
//! let records = vec![WordRecord::new("ni hao", "你好")];
//! assert_eq!(render_body(&records), "你好\tni hao");
//!
//! let header = RimeHeader::new("net_words", "2024.01.31");
//! let manifest = render_manifest("https://example.com/net.scel", &header, &records);
//! assert!(manifest.starts_with("# Rime dictionary\n"));
//! assert!(manifest.ends_with("...\n\n你好\tni hao"));
//! ```

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::storage::word_block::WordRecord;

pub const DEFAULT_NAMESPACE: &str = "luna_pinyin";
pub const VERSION_DATE_FORMAT: &str = "%Y.%m.%d";
pub const DICT_FILE_EXT: &str = "dict.yaml";

/// Identity of a generated Rime dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RimeHeader {
    /// Schema namespace the dictionary extends, e.g. `luna_pinyin`
    pub namespace: String,
    pub target_name: String,
    pub version_date: String,
}

impl RimeHeader {
    pub fn new<S: Into<String>, V: Into<String>>(target_name: S, version_date: V) -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            target_name: target_name.into(),
            version_date: version_date.into(),
        }
    }

    /// Header dated today.
    pub fn today<S: Into<String>>(target_name: S) -> Self {
        Self::new(target_name, today_version_date())
    }

    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// `<namespace>.<target_name>`
    pub fn dict_name(&self) -> String {
        format!("{}.{}", self.namespace, self.target_name)
    }

    /// `<namespace>.<target_name>.dict.yaml`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.dict_name(), DICT_FILE_EXT)
    }
}

/// Today's local date as a Rime version string.
pub fn today_version_date() -> String {
    Local::now().format(VERSION_DATE_FORMAT).to_string()
}

fn render_line(record: &WordRecord) -> String {
    format!("{}\t{}", record.word, record.pinyin)
}

/// Renders records as `word<TAB>pinyin` lines.
pub fn render_body(records: &[WordRecord]) -> String {
    records.iter().map(render_line).collect::<Vec<_>>().join("\n")
}

/// Renders the header block of a `.dict.yaml` file, ending with `...\n`.
pub fn render_header(source_label: &str, header: &RimeHeader) -> String {
    format!(
        "# Rime dictionary\n\
         # encoding: utf-8\n\
         # Source: {}\n\
         \n\
         ---\n\
         name: {}\n\
         version: \"{}\"\n\
         sort: by_weight\n\
         use_preset_vocabulary: false\n\
         ...\n",
        source_label,
        header.dict_name(),
        header.version_date
    )
}

/// Renders a complete `.dict.yaml` document.
///
/// The header block and each body line are joined by `\n`, so a blank line
/// separates `...` from the first entry. With no records the document is the
/// header block alone.
pub fn render_manifest(source_label: &str, header: &RimeHeader, records: &[WordRecord]) -> String {
    let mut parts = Vec::with_capacity(records.len() + 1);
    parts.push(render_header(source_label, header));
    parts.extend(records.iter().map(render_line));
    parts.join("\n")
}

/// Splits a rendered body back into records.
pub fn parse_body(body: &str) -> Vec<WordRecord> {
    body.lines()
        .filter_map(|line| line.split_once('\t'))
        .map(|(word, pinyin)| WordRecord::new(pinyin, word))
        .collect()
}
