/// CLI layer: argument parsing, logging and error output.
pub mod args;
pub mod output;

pub use args::{ExportCli, GreetingCli};
pub use output::{DebugTimer, init_logging, write_error};
