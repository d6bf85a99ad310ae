use tracing::debug;

/// Width of the terminal on stdout, 0 when stdout is not a terminal.
pub fn terminal_width() -> usize {
    let width = term_size::dimensions_stdout().map(|(w, _)| w).unwrap_or(0);
    debug!(width, "measured terminal");
    width
}
