/// Filter/projector: turns raw account records into exported `UserRecord`s.
use super::record::{RawAccount, UserRecord};
use crate::errors::ToolError;

/// Accounts with a uid below this are system/service accounts.
pub const SYSTEM_UID_THRESHOLD: i64 = 1000;

/// Keep accounts with `uid >= min_uid`, projected to name, id, home and shell.
///
/// Source order is preserved. Every uid is parsed before anything is returned,
/// so one bad line anywhere yields no records at all.
///
/// # Errors
///
/// Returns `ToolError::InvalidIdentifier` if any uid is not a base-10 integer.
pub fn project(accounts: &[RawAccount], min_uid: i64) -> Result<Vec<UserRecord>, ToolError> {
    let mut users = Vec::new();
    for account in accounts {
        let id = parse_uid(account)?;
        if id < min_uid {
            continue;
        }
        users.push(UserRecord {
            id,
            name: account.name.clone(),
            home: account.home.clone(),
            shell: account.shell.clone(),
        });
    }
    Ok(users)
}

fn parse_uid(account: &RawAccount) -> Result<i64, ToolError> {
    account
        .uid
        .parse::<i64>()
        .map_err(|source| ToolError::InvalidIdentifier {
            line: account.line,
            value: account.uid.clone(),
            source,
        })
}
