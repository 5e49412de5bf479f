//! user-export — non-system accounts from /etc/passwd as JSON or CSV.

use clap::Parser;

use hello_users::ExportConfig;
use hello_users::cli::{ExportCli, init_logging, write_error};
use hello_users::commands::export;

fn main() {
    let cli = ExportCli::parse();
    init_logging(cli.debug);

    let result = ExportConfig::from_args(&cli).and_then(|config| export::run(&config));
    if let Err(err) = result {
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}
