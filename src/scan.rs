//! Entry discovery and ordering for the exercise workspace.
//!
//! Only the immediate children of the base directory are considered. A child
//! matches when its name starts with the `Ex` label prefix and it is either a
//! `.cpp` source file or a folder. Everything else is skipped silently.

use crate::error::PackError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Naming-convention prefix shared by all exercise entries
pub const LABEL_PREFIX: &str = "Ex";

/// Extension required for single-file entries
pub const SOURCE_EXTENSION: &str = ".cpp";

/// Kind of a discovered entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A single labeled source file (e.g. `Ex01.cpp`)
    File,
    /// A labeled folder containing multiple sub-files (e.g. `Ex22&23/`)
    Folder,
}

/// One discovered exercise entry. Immutable after creation.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Display title and sort key source (`Ex01`, `Ex22&23`, ...)
    pub label: String,
    pub kind: EntryKind,
    pub path: PathBuf,
}

/// Enumerate matching top-level entries of `base`.
///
/// An empty result is not an error; the caller produces a document with only
/// the preamble. A base directory that cannot be listed is a structural
/// failure and aborts the run.
pub fn scan_entries(base: &Path) -> Result<Vec<Entry>, PackError> {
    let mut entries = Vec::new();

    for item in WalkDir::new(base).min_depth(1).max_depth(1) {
        let item = item.map_err(|e| PackError::BaseDirUnreadable {
            path: base.to_path_buf(),
            source: e.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "directory traversal failed")
            }),
        })?;

        let name = item.file_name().to_string_lossy().into_owned();
        if !name.starts_with(LABEL_PREFIX) {
            continue;
        }

        if item.file_type().is_file() {
            if let Some(label) = name.strip_suffix(SOURCE_EXTENSION) {
                entries.push(Entry {
                    label: label.to_string(),
                    kind: EntryKind::File,
                    path: item.path().to_path_buf(),
                });
            }
        } else if item.file_type().is_dir() {
            entries.push(Entry {
                label: name,
                kind: EntryKind::Folder,
                path: item.path().to_path_buf(),
            });
        }
    }

    Ok(entries)
}

/// Extract the exercise number from a label for sorting.
///
/// Parses the digit run immediately following the `Ex` prefix. Returns `None`
/// when the prefix is missing or no digits follow it.
pub fn exercise_number(label: &str) -> Option<u64> {
    let rest = label.strip_prefix(LABEL_PREFIX)?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Sort entries ascending by exercise number.
///
/// Labels without a parsable number sort after all numbered ones; the sort is
/// stable, so their relative order follows enumeration order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by_key(|e| exercise_number(&e.label).unwrap_or(u64::MAX));
}
