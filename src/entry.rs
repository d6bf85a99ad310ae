use std::fs;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryKind {
    #[default]
    Unknown,
    File,
    Dir,
    Symlink,
    Pipe,
    Socket,
    Device,
}

impl EntryKind {
    #[cfg(unix)]
    pub fn from_file_type(file_type: fs::FileType) -> Self {
        use std::os::unix::fs::FileTypeExt;

        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_fifo() {
            EntryKind::Pipe
        } else if file_type.is_socket() {
            EntryKind::Socket
        } else if file_type.is_block_device() || file_type.is_char_device() {
            EntryKind::Device
        } else {
            EntryKind::Unknown
        }
    }

    #[cfg(not(unix))]
    pub fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Unknown
        }
    }
}

/// The nine `rwx` bits of a mode, nothing else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Permissions(u16);

impl Permissions {
    pub const OWNER_R: u16 = 0o400;
    pub const OWNER_W: u16 = 0o200;
    pub const OWNER_X: u16 = 0o100;
    pub const GROUP_R: u16 = 0o040;
    pub const GROUP_W: u16 = 0o020;
    pub const GROUP_X: u16 = 0o010;
    pub const OTHER_R: u16 = 0o004;
    pub const OTHER_W: u16 = 0o002;
    pub const OTHER_X: u16 = 0o001;

    const ORDER: [(u16, char); 9] = [
        (Self::OWNER_R, 'r'),
        (Self::OWNER_W, 'w'),
        (Self::OWNER_X, 'x'),
        (Self::GROUP_R, 'r'),
        (Self::GROUP_W, 'w'),
        (Self::GROUP_X, 'x'),
        (Self::OTHER_R, 'r'),
        (Self::OTHER_W, 'w'),
        (Self::OTHER_X, 'x'),
    ];

    pub fn from_mode(mode: u32) -> Self {
        Permissions((mode & 0o777) as u16)
    }

    #[cfg(unix)]
    pub fn from_metadata(metadata: &fs::Metadata) -> Self {
        use std::os::unix::fs::PermissionsExt;
        Self::from_mode(metadata.permissions().mode())
    }

    #[cfg(not(unix))]
    pub fn from_metadata(metadata: &fs::Metadata) -> Self {
        if metadata.permissions().readonly() {
            Self::from_mode(0o444)
        } else {
            Self::from_mode(0o666)
        }
    }

    pub fn contains(self, bit: u16) -> bool {
        self.0 & bit == bit
    }

    pub fn any_execute(self) -> bool {
        self.0 & (Self::OWNER_X | Self::GROUP_X | Self::OTHER_X) != 0
    }

    /// `rwxr-x---` style, `-` for every absent bit.
    pub fn to_rwx_string(self) -> String {
        Self::ORDER
            .iter()
            .map(|&(bit, ch)| if self.contains(bit) { ch } else { '-' })
            .collect()
    }

    /// Owner triplet for the grid. Executable directories show `s`, not `x`.
    pub fn owner_triplet(self, kind: EntryKind) -> String {
        let r = if self.contains(Self::OWNER_R) { 'r' } else { '-' };
        let w = if self.contains(Self::OWNER_W) { 'w' } else { '-' };
        let x = match (self.contains(Self::OWNER_X), kind) {
            (false, _) => '-',
            (true, EntryKind::Dir) => 's',
            (true, _) => 'x',
        };
        [r, w, x].iter().collect()
    }
}

/// A directory member as enumerated. The collector does not classify it;
/// renderers take kind, permission bits and size from a `ResolvedStat`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Entry {
            name: name.into(),
            kind,
        }
    }
}

/// Metadata attached to an entry by index. The zero value stands in for a
/// failed resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolvedStat {
    pub kind: EntryKind,
    pub permissions: Permissions,
    pub size: u64,
}

impl ResolvedStat {
    pub fn from_metadata(metadata: &fs::Metadata) -> Self {
        ResolvedStat {
            kind: EntryKind::from_file_type(metadata.file_type()),
            permissions: Permissions::from_metadata(metadata),
            size: metadata.len(),
        }
    }
}
