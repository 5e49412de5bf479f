/// `user-export`: passwd → filter → JSON/CSV → stdout or file.
use tracing::debug;

use crate::cli::DebugTimer;
use crate::config::ExportConfig;
use crate::errors::ToolError;
use crate::sink::Sink;
use crate::users::{project, read_accounts_from_path, write_records};

/// Run the export pipeline.
///
/// The source is read and validated in full before the destination is
/// touched, so a bad record leaves no output file behind.
///
/// # Errors
///
/// Returns the first `ToolError` hit by any stage.
pub fn run(config: &ExportConfig) -> Result<(), ToolError> {
    let t_read = DebugTimer::start("read_accounts");
    let accounts = read_accounts_from_path(&config.source)?;
    drop(t_read);

    let users = project(&accounts, config.min_uid)?;
    debug!(
        read = accounts.len(),
        kept = users.len(),
        min_uid = config.min_uid,
        "filtered system accounts"
    );

    let _t_write = DebugTimer::start("write_records");
    let mut sink = Sink::create(&config.destination)?;
    write_records(config.format, &users, &mut sink)?;
    sink.finish()
}
