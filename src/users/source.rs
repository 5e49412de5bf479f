/// Account source reader: splits a passwd-style file into raw 7-field records.
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use super::record::{PASSWD_FIELDS, RawAccount};
use crate::errors::ToolError;

/// Conventional location of the system account database.
pub const DEFAULT_SOURCE: &str = "/etc/passwd";

/// Open `path` and read every account in it.
///
/// # Errors
///
/// - `ToolError::SourceUnavailable` if the file cannot be opened or read
/// - `ToolError::MalformedRecord` if any line does not have 7 fields
pub fn read_accounts_from_path(path: &Path) -> Result<Vec<RawAccount>, ToolError> {
    let file = File::open(path).map_err(|source| ToolError::SourceUnavailable {
        what: path.display().to_string(),
        source,
    })?;
    let accounts = read_accounts(file, &path.display().to_string())?;
    debug!(source = %path.display(), count = accounts.len(), "read account records");
    Ok(accounts)
}

/// Read colon-delimited account records from any byte stream, in order.
///
/// Blank lines are skipped but still counted, so `RawAccount::line` is the
/// physical line in the source. Fields are taken verbatim (no quote handling);
/// non-UTF-8 bytes are replaced rather than rejected.
///
/// # Errors
///
/// - `ToolError::SourceUnavailable` on an I/O error while reading
/// - `ToolError::MalformedRecord` if a line does not have 7 fields
pub fn read_accounts<R: Read>(reader: R, what: &str) -> Result<Vec<RawAccount>, ToolError> {
    let mut accounts = Vec::new();
    for (idx, chunk) in BufReader::new(reader).split(b'\n').enumerate() {
        let mut bytes = chunk.map_err(|source| ToolError::SourceUnavailable {
            what: what.to_owned(),
            source,
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        if bytes.is_empty() {
            continue;
        }
        let line = idx as u64 + 1;
        accounts.push(to_raw(&bytes, line)?);
    }
    Ok(accounts)
}

fn to_raw(bytes: &[u8], line: u64) -> Result<RawAccount, ToolError> {
    let fields: Vec<&[u8]> = bytes.split(|b| *b == b':').collect();
    if fields.len() != PASSWD_FIELDS {
        return Err(ToolError::MalformedRecord {
            line,
            expected: PASSWD_FIELDS,
            found: fields.len(),
        });
    }
    let field = |i: usize| String::from_utf8_lossy(fields[i]).into_owned();
    Ok(RawAccount {
        line,
        name: field(0),
        password: field(1),
        uid: field(2),
        gid: field(3),
        comment: field(4),
        home: field(5),
        shell: field(6),
    })
}
