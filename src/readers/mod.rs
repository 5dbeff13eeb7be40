// Readers for cell dictionary files
//
// This module provides the decode entry point over in-memory sources and files.

pub mod scel_reader;

pub use scel_reader::{DecodedDictionary, ScelReader};
