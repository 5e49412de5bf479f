/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;

/// user-export — list human accounts from a passwd file as JSON or CSV.
#[derive(Debug, Parser)]
#[command(
    name = "user-export",
    about = "Export non-system user accounts as JSON or CSV",
    version
)]
pub struct ExportCli {
    /// The path to export to. Empty writes to stdout.
    #[arg(short, long, value_name = "PATH", default_value = "")]
    pub path: String,

    /// The output format: 'json' or 'csv' (case-insensitive).
    #[arg(short, long, value_name = "FORMAT", default_value = "json")]
    pub format: String,

    /// Account database to read.
    #[arg(long, value_name = "PATH", default_value = crate::users::DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Lowest uid treated as a human account.
    #[arg(long, value_name = "UID", default_value_t = crate::users::SYSTEM_UID_THRESHOLD)]
    pub min_uid: i64,

    /// Log pipeline steps and timings to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// greeting — render a greeting and write it to out.txt or stdout.
#[derive(Debug, Parser)]
#[command(
    name = "greeting",
    about = "Write a greeting message to ./out.txt (or preview it on stdout)",
    version
)]
pub struct GreetingCli {
    /// Name to use within the message.
    #[arg(short, long, value_name = "NAME", default_value = "")]
    pub name: String,

    /// Phrase to use within the greeting.
    #[arg(short, long, value_name = "PHRASE", default_value = "")]
    pub greeting: String,

    /// Prompt for the name and greeting on stdin.
    #[arg(long)]
    pub prompt: bool,

    /// Print the message instead of writing it to the output file.
    #[arg(long)]
    pub preview: bool,

    /// File to write; it must already exist.
    #[arg(long, value_name = "PATH", default_value = "out.txt")]
    pub out: PathBuf,

    /// Log pipeline steps to stderr.
    #[arg(long)]
    pub debug: bool,
}
