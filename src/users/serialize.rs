/// Serializer: renders exported users as JSON or CSV.
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use csv::{Terminator, WriterBuilder};

use super::record::UserRecord;
use crate::errors::{SerializationError, ToolError};

/// Fixed CSV header row.
pub const CSV_HEADER: [&str; 4] = ["name", "id", "home", "shell"];

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Pretty-printed JSON array, 2-space indent.
    #[default]
    Json,
    /// Header row plus one row per user.
    Csv,
}

impl FromStr for ExportFormat {
    type Err = ToolError;

    /// Case-insensitive: `JSON`, `Csv` etc. are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(ToolError::UnsupportedFormat {
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Csv => "csv",
        })
    }
}

/// Write `users` to `out` in the given format.
///
/// # Errors
///
/// Returns `ToolError::Serialization` on any encode or write failure.
pub fn write_records<W: Write>(
    format: ExportFormat,
    users: &[UserRecord],
    out: &mut W,
) -> Result<(), ToolError> {
    match format {
        ExportFormat::Json => {
            // Fully encoded before the first byte goes out.
            let data = render_json(users)?;
            out.write_all(&data)?;
            Ok(())
        }
        ExportFormat::Csv => write_csv(users, out),
    }
}

/// Encode `users` as a pretty-printed JSON array with a trailing newline.
///
/// # Errors
///
/// Returns `ToolError::Serialization` if encoding fails.
pub fn render_json(users: &[UserRecord]) -> Result<Vec<u8>, ToolError> {
    // An empty slice encodes as `[]`; the newline keeps files line-terminated.
    let mut data = serde_json::to_vec_pretty(users)?;
    data.push(b'\n');
    Ok(data)
}

/// Stream `users` as CSV: the `name,id,home,shell` header, then one row each.
///
/// Text fields are quoted only when they need it. Rows already written stay
/// written if `out` fails part-way.
///
/// # Errors
///
/// Returns `ToolError::Serialization` if a row or the final flush fails.
pub fn write_csv<W: Write>(users: &[UserRecord], out: &mut W) -> Result<(), ToolError> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    wtr.write_record(CSV_HEADER).map_err(SerializationError::from)?;
    for user in users {
        let id = user.id.to_string();
        wtr.write_record([user.name.as_str(), id.as_str(), user.home.as_str(), user.shell.as_str()])
            .map_err(SerializationError::from)?;
    }
    wtr.flush()?;
    Ok(())
}
