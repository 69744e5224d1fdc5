use is_terminal::IsTerminal;

/// Width assumed when the terminal does not tell us
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

const WIDTH_VARIABLE: &str = "COLUMNS";

/// Resolve the terminal width: an explicit width wins, then `COLUMNS`, then
/// the size reported by the terminal stdout is attached to, then the default.
pub fn terminal_width(explicit: Option<usize>) -> usize {
    let columns = std::env::var(WIDTH_VARIABLE).ok();
    resolve_width(explicit, columns.as_deref(), detect_width)
}

/// Missing, non-numeric or zero values fall through to the next source.
/// `detect` is only asked when neither override is usable.
fn resolve_width(
    explicit: Option<usize>,
    columns: Option<&str>,
    detect: impl FnOnce() -> Option<usize>,
) -> usize {
    explicit
        .filter(|width| *width > 0)
        .or_else(|| parse_width(columns))
        .or_else(|| detect().filter(|width| *width > 0))
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

fn detect_width() -> Option<usize> {
    if !std::io::stdout().is_terminal() {
        return None;
    }
    crossterm::terminal::size()
        .ok()
        .map(|(columns, _)| usize::from(columns))
}

fn parse_width(value: Option<&str>) -> Option<usize> {
    value?.trim().parse::<usize>().ok().filter(|width| *width > 0)
}
