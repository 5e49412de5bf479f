/// Immutable run configuration, built once from parsed flags.
use std::path::PathBuf;

use crate::cli::{ExportCli, GreetingCli};
use crate::errors::ToolError;
use crate::sink::Destination;
use crate::users::ExportFormat;

/// Everything the export pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub source: PathBuf,
    pub destination: Destination,
    pub format: ExportFormat,
    pub min_uid: i64,
}

impl ExportConfig {
    /// Validate flags. The format is checked here, before anything is read.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::UnsupportedFormat` if `--format` is not json or csv.
    pub fn from_args(args: &ExportCli) -> Result<Self, ToolError> {
        Ok(Self {
            source: args.source.clone(),
            destination: Destination::from_flag(&args.path),
            format: args.format.parse()?,
            min_uid: args.min_uid,
        })
    }
}

/// Everything the greeting pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingConfig {
    pub name: String,
    pub greeting: String,
    pub prompt: bool,
    pub preview: bool,
    pub out: PathBuf,
}

impl GreetingConfig {
    /// Validate flags: outside prompt mode both name and greeting are required.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Configuration` if either is empty without `--prompt`.
    pub fn from_args(args: &GreetingCli) -> Result<Self, ToolError> {
        if !args.prompt && (args.name.is_empty() || args.greeting.is_empty()) {
            return Err(ToolError::Configuration(
                "--name and --greeting are required unless --prompt is given".to_owned(),
            ));
        }
        Ok(Self {
            name: args.name.clone(),
            greeting: args.greeting.clone(),
            prompt: args.prompt,
            preview: args.preview,
            out: args.out.clone(),
        })
    }
}
