use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const DEFAULT_PATH: &str = "./";

#[derive(Parser, Debug)]
#[command(name = "lls", author, version, about = "List directory entries in a grid or a detailed list.")]
pub struct Cli {
    /// File or directory to show
    pub path: Option<PathBuf>,

    /// Show hidden entries
    #[arg(short = 'a', long = "hidden", action = ArgAction::SetTrue)]
    pub hidden: bool,

    /// Display output in multiple colors
    #[arg(short = 'c', long = "color", action = ArgAction::SetTrue)]
    pub color: bool,

    /// Show detailed list
    #[arg(short = 'l', long = "list", action = ArgAction::SetTrue)]
    pub list: bool,

    /// Show entry owner and group (detailed list)
    #[arg(short = 'o', long = "owner", action = ArgAction::SetTrue)]
    pub owner: bool,

    /// Show entry permissions
    #[arg(short = 'p', long = "permit", action = ArgAction::SetTrue)]
    pub permit: bool,

    /// Show file size
    #[arg(short = 's', long = "size", action = ArgAction::SetTrue)]
    pub size: bool,

    /// Grid width in columns instead of the terminal width
    #[arg(short = 'w', long = "width", value_name = "COLS")]
    pub width: Option<usize>,

    /// Dump files byte for byte, without a newline after each chunk
    #[arg(long = "raw", action = ArgAction::SetTrue)]
    pub raw: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Grid,
    DetailedList,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpMode {
    /// Newline after every read chunk.
    #[default]
    Framed,
    Raw,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_hidden: bool,
    pub show_owner: bool,
    pub show_permit: bool,
    pub show_size: bool,
    pub use_color: bool,
    pub format: Format,
    pub width: Option<usize>,
    pub dump: DumpMode,
}

impl Cli {
    pub fn target(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH))
    }

    pub fn options(&self) -> DisplayOptions {
        DisplayOptions {
            show_hidden: self.hidden,
            show_owner: self.owner,
            show_permit: self.permit,
            show_size: self.size,
            use_color: self.color,
            format: if self.list {
                Format::DetailedList
            } else {
                Format::Grid
            },
            width: self.width,
            dump: if self.raw { DumpMode::Raw } else { DumpMode::Framed },
        }
    }
}
