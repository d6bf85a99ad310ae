use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to stat '{}': {source}", path.display())]
    Stat { path: PathBuf, source: io::Error },
    #[error("failed to open '{}': {source}", path.display())]
    OpenDir { path: PathBuf, source: io::Error },
    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("failed to open '{}': {source}", path.display())]
    OpenFile { path: PathBuf, source: io::Error },
    #[error("failed to read from '{}': {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("unhandled entry type for '{}'", path.display())]
    UnhandledType { path: PathBuf },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// True when stdout was closed under us (e.g. `lls | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}
