use std::io::{self, Write};

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::cli::DisplayOptions;
use crate::entry::{Entry, ResolvedStat};
use crate::palette;

pub const MAX_COLUMNS: usize = 64;

/// Flat allowance per entry for the `rwx ` field.
pub const PERMIT_ALLOWANCE: usize = 4;
/// Flat allowance per entry for the size field.
pub const SIZE_ALLOWANCE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub width: usize,
    pub size_pad: usize,
}

impl Default for Column {
    fn default() -> Self {
        Column {
            width: 2,
            size_pad: 1,
        }
    }
}

pub fn effective_min_width(max_name_len: usize, options: &DisplayOptions) -> usize {
    let mut width = max_name_len;
    if options.show_permit {
        width += PERMIT_ALLOWANCE;
    }
    if options.show_size {
        width += SIZE_ALLOWANCE;
    }
    width
}

/// Width 0 means the terminal could not be measured.
pub fn column_count(terminal_width: usize, min_width: usize) -> usize {
    if terminal_width == 0 || min_width == 0 {
        return 1;
    }
    (terminal_width / min_width).clamp(1, MAX_COLUMNS)
}

pub fn decimal_digits(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

pub fn measure_columns(entries: &[Entry], stats: &[ResolvedStat], count: usize) -> Vec<Column> {
    let mut columns = vec![Column::default(); count];
    for (i, (entry, stat)) in entries.iter().zip(stats).enumerate() {
        let column = &mut columns[i % count];
        column.width = column.width.max(entry.name.width() + 2);
        column.size_pad = column.size_pad.max(decimal_digits(stat.size) + 1);
    }
    columns
}

/// Lays entries out row-major: entry `i` lands in column `i % columns`.
/// Each column is sized from the entries that fall into it, so a long name
/// only widens its own column. All entries are measured before the first
/// row is written.
pub fn render(
    entries: &[Entry],
    stats: &[ResolvedStat],
    terminal_width: usize,
    max_name_len: usize,
    options: &DisplayOptions,
) -> String {
    let min_width = effective_min_width(max_name_len, options);
    let count = column_count(terminal_width, min_width);
    debug!(terminal_width, min_width, columns = count, "grid layout");

    let columns = measure_columns(entries, stats, count);

    let mut out = String::new();
    let cells: Vec<_> = entries.iter().zip(stats).collect();
    for row in cells.chunks(count) {
        for (column, (entry, stat)) in columns.iter().zip(row) {
            push_cell(&mut out, column, entry, stat, options);
        }
        out.push('\n');
    }
    out
}

fn push_cell(
    out: &mut String,
    column: &Column,
    entry: &Entry,
    stat: &ResolvedStat,
    options: &DisplayOptions,
) {
    if options.show_size {
        out.push_str(&format!("{:>pad$} ", stat.size, pad = column.size_pad));
    }
    if options.show_permit {
        out.push_str(&stat.permissions.owner_triplet(stat.kind));
        out.push(' ');
    }

    if options.use_color {
        let color = palette::kind_color(stat.kind, stat.permissions);
        out.push_str(&palette::paint(&entry.name, color));
    } else {
        out.push_str(&entry.name);
    }
    let pad = column.width.saturating_sub(entry.name.width());
    out.push_str(&" ".repeat(pad));
}

pub fn write_grid<W: Write>(
    out: &mut W,
    entries: &[Entry],
    stats: &[ResolvedStat],
    terminal_width: usize,
    max_name_len: usize,
    options: &DisplayOptions,
) -> io::Result<()> {
    let text = render(entries, stats, terminal_width, max_name_len, options);
    out.write_all(text.as_bytes())
}
