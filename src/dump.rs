use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::cli::DumpMode;
use crate::error::{Error, Result};

pub const CHUNK_SIZE: usize = 8192;

/// Copies a regular file to `out`. In framed mode every read chunk is
/// followed by a newline, which alters content that is not newline-free at
/// chunk boundaries.
pub fn dump_file<W: Write>(out: &mut W, path: &Path, mode: DumpMode) -> Result<()> {
    let mut file = File::open(path).map_err(|source| Error::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0usize;

    loop {
        let read = file.read(&mut buf).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }
        out.write_all(&buf[..read])?;
        if mode == DumpMode::Framed {
            out.write_all(b"\n")?;
        }
        total += read;
    }

    debug!(path = %path.display(), bytes = total, ?mode, "dumped file");
    Ok(())
}
