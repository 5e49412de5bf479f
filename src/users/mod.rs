/// User export domain: passwd parsing, system-account filtering, JSON/CSV encoding.
pub mod filter;
pub mod record;
pub mod serialize;
pub mod source;

pub use filter::{SYSTEM_UID_THRESHOLD, project};
pub use record::{RawAccount, UserRecord};
pub use serialize::{ExportFormat, render_json, write_csv, write_records};
pub use source::{DEFAULT_SOURCE, read_accounts, read_accounts_from_path};
