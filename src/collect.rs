use std::fs;
use std::path::Path;

use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

use crate::entry::{Entry, EntryKind};
use crate::error::{Error, Result};

#[cfg(windows)]
pub const MAX_PATH_LEN: usize = 260;
#[cfg(not(windows))]
pub const MAX_PATH_LEN: usize = 4096;

/// Entries of one directory in enumeration order, plus the widest name seen.
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<Entry>,
    /// `2 + width(name)` of the widest retained name, at least 1.
    pub max_name_len: usize,
}

pub fn collect(path: &Path, show_hidden: bool) -> Result<Listing> {
    let dir_reader = fs::read_dir(path).map_err(|source| Error::OpenDir {
        path: path.to_path_buf(),
        source,
    })?;
    let base_len = path.as_os_str().len();

    let mut listing = Listing {
        entries: Vec::new(),
        max_name_len: 1,
    };

    for entry in dir_reader {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().to_string();

        if !fits_path(base_len, &name) {
            debug!(name = %name, "path too long, ignoring entry");
            continue;
        }
        if !keep_name(&name, show_hidden) {
            trace!(name = %name, "filtered");
            continue;
        }

        listing.max_name_len = listing.max_name_len.max(name.width() + 2);
        listing.entries.push(Entry::new(name, EntryKind::Unknown));
    }

    debug!(
        path = %path.display(),
        count = listing.entries.len(),
        max_name_len = listing.max_name_len,
        "collected entries"
    );
    Ok(listing)
}

/// Whether `base + '/' + name` stays within `MAX_PATH_LEN` bytes.
pub fn fits_path(base_len: usize, name: &str) -> bool {
    base_len + 1 + name.len() <= MAX_PATH_LEN
}

pub fn keep_name(name: &str, show_hidden: bool) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    show_hidden || !name.starts_with('.')
}
