/// Account types flowing through the export pipeline.
use serde::{Deserialize, Serialize};

/// Number of colon-separated fields in a passwd line.
pub const PASSWD_FIELDS: usize = 7;

/// One passwd line, split but not yet interpreted.
///
/// Field names follow the conventional `/etc/passwd` layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAccount {
    /// 1-based line number in the source.
    pub line: u64,
    pub name: String,
    pub password: String,
    pub uid: String,
    pub gid: String,
    pub comment: String,
    pub home: String,
    pub shell: String,
}

/// A human (non-system) account, as exported.
///
/// Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub home: String,
    pub shell: String,
}
