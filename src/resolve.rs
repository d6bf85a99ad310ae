use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::entry::{Entry, ResolvedStat};
use crate::error::{Error, Result};

/// How a renderer wants symlinks treated. The grid sizes and colors by the
/// link target; the detailed list describes the link itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Follow,
    NoFollow,
}

impl Resolution {
    pub fn stat(self, path: &Path) -> io::Result<fs::Metadata> {
        match self {
            Resolution::Follow => fs::metadata(path),
            Resolution::NoFollow => fs::symlink_metadata(path),
        }
    }
}

pub fn entry_path(base: &Path, entry: &Entry) -> PathBuf {
    base.join(&entry.name)
}

pub fn resolve(base: &Path, entry: &Entry, resolution: Resolution) -> Result<ResolvedStat> {
    let path = entry_path(base, entry);
    resolution
        .stat(&path)
        .map(|metadata| ResolvedStat::from_metadata(&metadata))
        .map_err(|source| Error::Stat { path, source })
}

/// One stat per entry, index-parallel to `entries`. Failures are logged and
/// leave a zeroed stat in place.
pub fn resolve_all(base: &Path, entries: &[Entry], resolution: Resolution) -> Vec<ResolvedStat> {
    entries
        .iter()
        .map(|entry| {
            resolve(base, entry, resolution).unwrap_or_else(|err| {
                warn!("{err}");
                ResolvedStat::default()
            })
        })
        .collect()
}
