use chrono::{DateTime, Local};
use thiserror::Error;

const UNITS: [&str; 5] = ["b", "kb", "mb", "gb", "tb"];
const STEP: f64 = 1024.0;

/// Modification times in the detail list, e.g. `Jan 02,2006 15:04`
pub const TIMESTAMP_FORMAT: &str = "%b %d,%Y %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error("negative input")]
    Negative,
}

/// Format a byte count with one decimal in the first unit that keeps it
/// below 1024. Sizes beyond the last unit stay in terabytes.
pub fn humanize_size(size: i64) -> Result<String, SizeError> {
    if size < 0 {
        return Err(SizeError::Negative);
    }

    let mut value = size as f64;
    let mut unit = UNITS[0];
    for (i, name) in UNITS.iter().enumerate() {
        unit = name;
        if value < STEP || i == UNITS.len() - 1 {
            break;
        }
        value /= STEP;
    }

    Ok(format!("{value:.1} {unit}"))
}

pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
