use crate::entry::{EntryKind, Permissions};

pub const RESET: &str = "\x1b[0m";
pub const WARN: &str = "\x1b[38;5;214m";

pub const BOLD_GREEN: &str = "\x1b[1m\x1b[32m";
pub const BOLD_YELLOW: &str = "\x1b[1m\x1b[33m";
pub const BOLD_BLUE: &str = "\x1b[1m\x1b[34m";
pub const BOLD_MAGENTA: &str = "\x1b[1m\x1b[35m";
pub const BOLD_CYAN: &str = "\x1b[1m\x1b[36m";

pub fn paint(text: impl AsRef<str>, color: &str) -> String {
    format!("{}{}{}", color, text.as_ref(), RESET)
}

/// Foreground for an entry name. Regular files are only colored when some
/// execute bit is set.
pub fn kind_color(kind: EntryKind, permissions: Permissions) -> &'static str {
    match kind {
        EntryKind::File if permissions.any_execute() => BOLD_GREEN,
        EntryKind::File | EntryKind::Unknown => "",
        EntryKind::Pipe | EntryKind::Device => BOLD_YELLOW,
        EntryKind::Socket => BOLD_MAGENTA,
        EntryKind::Dir => BOLD_BLUE,
        EntryKind::Symlink => BOLD_CYAN,
    }
}
