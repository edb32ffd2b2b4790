//! Load order reader for MO2 `modlist.txt` files.
//!
//! MO2 writes the profile's mod list top-down from highest to lowest priority
//! with a `#` header comment. Each line carries a `+`/`-`/`*` marker and
//! separators end in `_separator`:
//!
//! ```text
//! # This file was automatically generated by Mod Organizer.
//! +Patches_separator
//! +Unofficial Skyrim Special Edition Patch
//! -Disabled Mod
//! *DLC: Dawnguard
//! ```

use crate::models::LoadOrderEntry;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadOrderError {
    #[error("Failed to read load order file {path}: {source}")]
    Unreadable {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Drop a leading UTF-8 byte order mark.
pub fn strip_bom(contents: &str) -> &str {
    contents.strip_prefix('\u{feff}').unwrap_or(contents)
}

/// Parse the contents of a load order file.
///
/// Blank lines and `#` comments are dropped, the remaining lines are trimmed
/// and the order is reversed so the last-installed mod comes first.
pub fn parse_load_order(contents: &str) -> Vec<LoadOrderEntry> {
    let mut entries: Vec<LoadOrderEntry> = strip_bom(contents)
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(LoadOrderEntry::parse)
        .collect();

    entries.reverse();
    entries
}

/// Read and parse a load order file.
///
/// # Errors
///
/// Returns [`LoadOrderError::Unreadable`] if the file cannot be opened or is
/// not valid UTF-8.
pub fn read_load_order(path: &Utf8Path) -> Result<Vec<LoadOrderEntry>, LoadOrderError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadOrderError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_load_order(&contents);
    tracing::info!("Read {} lines from {}", entries.len(), path);

    Ok(entries)
}
