pub mod cli;
pub mod collect;
pub mod detailed;
pub mod dump;
pub mod entry;
pub mod error;
pub mod grid;
pub mod identity;
pub mod logging;
pub mod palette;
pub mod resolve;
pub mod sort;
pub mod terminal;

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::cli::{DisplayOptions, Format};
use crate::error::{Error, Result};
use crate::identity::SystemIdentities;
use crate::resolve::Resolution;

/// Lists a directory or dumps a regular file to `out`.
pub fn run<W: Write>(out: &mut W, path: &Path, options: &DisplayOptions) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|source| Error::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_file() {
        return dump::dump_file(out, path, options.dump);
    }
    if !metadata.is_dir() {
        return Err(Error::UnhandledType {
            path: path.to_path_buf(),
        });
    }

    let mut listing = collect::collect(path, options.show_hidden)?;
    sort::sort_entries(&mut listing.entries);
    debug!(format = ?options.format, "rendering");

    match options.format {
        Format::Grid => {
            let stats = resolve::resolve_all(path, &listing.entries, Resolution::Follow);
            let width = options.width.unwrap_or_else(terminal::terminal_width);
            grid::write_grid(out, &listing.entries, &stats, width, listing.max_name_len, options)?;
        }
        Format::DetailedList => {
            let identities = SystemIdentities::default();
            detailed::write_detailed(out, path, &listing.entries, options, &identities)?;
        }
    }
    Ok(())
}
