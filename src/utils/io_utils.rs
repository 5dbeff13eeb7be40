//! I/O utility functions for file and directory operations.
//!
//! This module provides helper functions for:
//! - Reading whole files into memory
//! - Writing text outputs, creating parent directories as needed
//! - Scanning directories for dictionary files
//! - Expanding `~` in configured paths
//!
//! # Examples
//!
//! ```no_run
//! use scel2rime::utils::io_utils::{bytes_from_file, scan_dir};
//! use regex::Regex;
//!
//! // Read bytes from a file
//! let data = bytes_from_file("scel/网络流行新词.scel").unwrap();
//!
//! // Find all cell dictionaries in a directory
//! let pattern = Regex::new(r"(?i)\.scel$").unwrap();
//! let files = scan_dir("scel", &pattern, false).unwrap();
//! ```

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::{Result, ScelError};

/// Reads all bytes from a file path.
///
/// The file handle is dropped before returning, whether or not the read succeeded.
pub fn bytes_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, creating missing parent directories.
pub fn write_string_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Expands a leading `~` in a configured path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Scan a directory for files matching the given regex pattern
///
/// # Arguments
/// * `target_dir` - The directory to scan
/// * `pattern` - A regex pattern to match file names against
/// * `recursive` - Whether to scan subdirectories recursively
///
/// # Returns
/// Returns the matching file paths sorted by path, or an error if the scan fails
pub fn scan_dir<P: AsRef<Path>>(target_dir: P, pattern: &Regex, recursive: bool) -> Result<Vec<PathBuf>> {
    let walker = if recursive {
        WalkDir::new(&target_dir).follow_links(true).into_iter()
    } else {
        WalkDir::new(&target_dir).follow_links(true).max_depth(1).into_iter()
    };

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| ScelError::invalid_parameter(format!("Walk directory error: {}", e)))?;

        if entry.file_type().is_file() {
            let file_name = entry.file_name().to_str().ok_or_else(||
                ScelError::invalid_parameter("Invalid file name encoding")
            )?;

            if pattern.is_match(file_name) {
                files.push(entry.path().to_path_buf());
            }
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_scan() {
        let dir = tempfile::tempdir().unwrap();
        write_string_to_file(dir.path().join("a.scel"), "a").unwrap();
        write_string_to_file(dir.path().join("b.SCEL"), "b").unwrap();
        write_string_to_file(dir.path().join("notes.txt"), "c").unwrap();
        write_string_to_file(dir.path().join("sub/c.scel"), "d").unwrap();

        let pattern = Regex::new(r"(?i)\.scel$").unwrap();
        let flat = scan_dir(dir.path(), &pattern, false).unwrap();
        assert_eq!(flat, vec![dir.path().join("a.scel"), dir.path().join("b.SCEL")]);

        let deep = scan_dir(dir.path(), &pattern, true).unwrap();
        assert_eq!(deep.len(), 3);
        assert_eq!(bytes_from_file(dir.path().join("sub/c.scel")).unwrap(), b"d");
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("out/dicts"), PathBuf::from("out/dicts"));
        // Variables are left alone, defined or not
        assert_eq!(expand_path("$SCEL2RIME_UNDEFINED/scel"), PathBuf::from("$SCEL2RIME_UNDEFINED/scel"));
    }
}
