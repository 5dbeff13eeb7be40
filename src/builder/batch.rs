//! Batch conversion of cell dictionaries into Rime dictionaries.
//!
//! A batch is a list of [`BatchEntry`] values, either loaded from a JSON list
//! (the same `config.json` shape used to fetch the dictionaries) or built from
//! the `.scel` files found in a directory. For every entry two files are
//! written to the output directory:
//!
//! - `<name>.txt`: the `word<TAB>pinyin` body
//! - `<namespace>.<dict_name>.dict.yaml`: the Rime dictionary
//!
//! Entries are converted one at a time and independently: a failed entry is
//! logged and recorded in the [`BatchReport`], and the batch moves on.
//!
//! # Examples
//!
//! ```no_run
//! use scel2rime::builder::{BatchConfig, convert_batch};
//!
//! # fn main() -> scel2rime::Result<()> {
//! let mut config = BatchConfig::default();
//! config.entries = BatchConfig::load_entries("config.json")?;
//! let report = convert_batch(&config, None);
//! println!("{} converted, {} failed", report.converted.len(), report.failures.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## JSON Configuration
//!
//! ```json
//! [
//!   { "name": "网络流行新词", "dictName": "net_words", "url": "https://pinyin.sogou.com/d/dict/download_cell.php?id=4" }
//! ]
//! ```

use std::path::{Path, PathBuf};

use log::*;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::builder::rime_writer::{render_body, render_manifest, today_version_date, RimeHeader, DEFAULT_NAMESPACE};
use crate::readers::scel_reader::ScelReader;
use crate::utils::io_utils::{bytes_from_file, expand_path, scan_dir, write_string_to_file};
use crate::utils::progress_report::{ProgressReportFn, ProgressState};
use crate::{Result, ScelError};

pub const SCEL_EXT: &str = "scel";
pub const TEXT_EXT: &str = "txt";

/// One dictionary to convert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Display name; also the stem of the `.scel` input and `.txt` output
    pub name: String,
    /// Target name inside the Rime namespace
    #[serde(rename = "dictName")]
    pub dict_name: String,
    /// Where the dictionary was fetched from; used as the manifest source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Configuration for a batch conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub scel_dir: String,
    pub out_dir: String,
    pub namespace: String,
    /// Fixed version stamp; today's date when unset
    pub version_date: Option<String>,
    pub entries: Vec<BatchEntry>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            scel_dir: "scel".to_string(),
            out_dir: "out".to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            version_date: None,
            entries: Vec::new(),
        }
    }
}

impl BatchConfig {
    /// Loads the entry list from a JSON file holding an array of entries.
    pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<BatchEntry>> {
        let data = bytes_from_file(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Builds a config converting every `.scel` file directly inside `dir`.
    ///
    /// The file stem is used as both the name and the target name.
    pub fn from_scel_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let pattern = Regex::new(&format!(r"(?i)\.{}$", SCEL_EXT))?;
        let mut entries = Vec::new();
        for path in scan_dir(dir.as_ref(), &pattern, false)? {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| ScelError::invalid_parameter(format!("Invalid file name: {}", path.display())))?;
            entries.push(BatchEntry { name: stem.to_string(), dict_name: stem.to_string(), url: None });
        }
        Ok(Self {
            scel_dir: dir.as_ref().to_string_lossy().into_owned(),
            entries,
            ..Default::default()
        })
    }

    pub fn scel_path(&self, entry: &BatchEntry) -> PathBuf {
        expand_path(&self.scel_dir).join(format!("{}.{}", entry.name, SCEL_EXT))
    }

    pub fn header_for(&self, entry: &BatchEntry) -> RimeHeader {
        let version_date = self.version_date.clone().unwrap_or_else(today_version_date);
        RimeHeader::new(entry.dict_name.clone(), version_date).with_namespace(self.namespace.clone())
    }
}

/// Outcome of one successfully converted entry.
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    pub name: String,
    pub word_count: usize,
    /// False when the word records stopped before the end of the source
    pub complete: bool,
    pub text_path: PathBuf,
    pub dict_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertOutcome>,
    pub failures: Vec<(String, ScelError)>,
    pub cancelled: bool,
}

impl BatchReport {
    /// Number of converted entries whose word records were cut short.
    pub fn partial(&self) -> usize {
        self.converted.iter().filter(|o| !o.complete).count()
    }
}

/// Decodes one entry and writes its `.txt` and `.dict.yaml` outputs.
pub fn convert_entry(config: &BatchConfig, entry: &BatchEntry) -> Result<ConvertOutcome> {
    if entry.name.is_empty() || entry.dict_name.is_empty() {
        return Err(ScelError::invalid_parameter("Entry name and dictName cannot be empty"));
    }
    let scel_path = config.scel_path(entry);
    let dict = ScelReader::decode_file(&scel_path)?;
    if let Some(reason) = &dict.stop_reason {
        warn!("{}: kept {} words, {}", entry.name, dict.records.len(), reason);
    }

    let out_dir = expand_path(&config.out_dir);
    let header = config.header_for(entry);
    let source_label = match &entry.url {
        Some(url) => url.clone(),
        None => scel_path.to_string_lossy().into_owned(),
    };

    let text_path = out_dir.join(format!("{}.{}", entry.name, TEXT_EXT));
    write_string_to_file(&text_path, &render_body(&dict.records))?;
    let dict_path = out_dir.join(header.file_name());
    write_string_to_file(&dict_path, &render_manifest(&source_label, &header, &dict.records))?;

    Ok(ConvertOutcome {
        name: entry.name.clone(),
        word_count: dict.records.len(),
        complete: dict.is_complete(),
        text_path,
        dict_path,
    })
}

/// Converts every entry in `config`, isolating failures per entry.
pub fn convert_batch(config: &BatchConfig, prog_rpt: Option<ProgressReportFn>) -> BatchReport {
    let mut report = BatchReport::default();
    let mut progress = ProgressState::new("convert_batch", config.entries.len() as u64, prog_rpt);

    for (i, entry) in config.entries.iter().enumerate() {
        match convert_entry(config, entry) {
            Ok(outcome) => {
                info!("{}.{}: {} words", entry.name, SCEL_EXT, outcome.word_count);
                report.converted.push(outcome);
            }
            Err(e) => {
                error!("{}.{}: {}", entry.name, SCEL_EXT, e);
                report.failures.push((entry.name.clone(), e));
            }
        }
        if progress.report(i as u64, &entry.name) {
            report.cancelled = i + 1 < config.entries.len();
            break;
        }
    }
    report
}
