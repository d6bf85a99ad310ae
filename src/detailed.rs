use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::warn;
use unicode_width::UnicodeWidthStr;

use crate::cli::DisplayOptions;
use crate::entry::{Entry, ResolvedStat};
use crate::error::Error;
use crate::identity::IdentityResolver;
use crate::palette;
use crate::resolve::{Resolution, entry_path};

/// Owner and group names are padded toward this width, never below one space.
pub const NAME_FIELD: usize = 8;
pub const SIZE_FIELD: usize = 8;

const HAS_PERMISSIONS: bool = cfg!(unix);

pub struct Owner {
    pub user: String,
    pub group: String,
}

/// Re-stats every entry without following symlinks and prints one line each.
/// Entries that fail to stat are reported and left out.
pub fn write_detailed<W: Write, I: IdentityResolver>(
    out: &mut W,
    base: &Path,
    entries: &[Entry],
    options: &DisplayOptions,
    identities: &I,
) -> io::Result<()> {
    for entry in entries {
        let path = entry_path(base, entry);
        let metadata = match Resolution::NoFollow.stat(&path) {
            Ok(metadata) => metadata,
            Err(source) => {
                warn!("{}", Error::Stat { path, source });
                continue;
            }
        };

        let stat = ResolvedStat::from_metadata(&metadata);
        let owner = if options.show_owner {
            owner_ids(&metadata).map(|(uid, gid)| Owner {
                user: identities.owner_name(uid),
                group: identities.group_name(gid),
            })
        } else {
            None
        };

        writeln!(out, "{}", format_line(&entry.name, &stat, owner.as_ref(), options))?;
    }
    Ok(())
}

pub fn format_line(
    name: &str,
    stat: &ResolvedStat,
    owner: Option<&Owner>,
    options: &DisplayOptions,
) -> String {
    let mut line = String::new();
    if HAS_PERMISSIONS {
        line.push_str(&stat.permissions.to_rwx_string());
        line.push(' ');
    }
    if let Some(owner) = owner {
        line.push_str(&pad_name(&owner.user));
        line.push(' ');
        line.push_str(&pad_name(&owner.group));
        line.push(' ');
    }
    line.push_str(&format!("{:<width$} ", stat.size, width = SIZE_FIELD));

    if options.use_color {
        let color = palette::kind_color(stat.kind, stat.permissions);
        line.push_str(&palette::paint(name, color));
    } else {
        line.push_str(name);
    }
    line
}

fn pad_name(name: &str) -> String {
    let pad = NAME_FIELD.saturating_sub(name.width()).max(1);
    format!("{name}{}", " ".repeat(pad))
}

#[cfg(unix)]
fn owner_ids(metadata: &fs::Metadata) -> Option<(u32, u32)> {
    use std::os::unix::fs::MetadataExt;
    Some((metadata.uid(), metadata.gid()))
}

#[cfg(not(unix))]
fn owner_ids(_metadata: &fs::Metadata) -> Option<(u32, u32)> {
    None
}
