/// Error taxonomy shared by both tools.
use std::path::PathBuf;

use thiserror::Error;

/// Every failure either pipeline can hit. All of them are fatal to the run.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Bad or missing flags.
    #[error("{0}")]
    Configuration(String),

    /// `--format` was given a value other than `json` or `csv`.
    #[error("invalid format '{value}'. Use 'json' or 'csv'")]
    UnsupportedFormat {
        /// The rejected value, as typed.
        value: String,
    },

    /// The record source (or interactive input) could not be opened or read.
    #[error("unable to read {what}: {source}")]
    SourceUnavailable {
        /// Path or stream name.
        what: String,
        #[source]
        source: std::io::Error,
    },

    /// The output destination could not be opened.
    #[error("unable to open {}: {source}", .path.display())]
    DestinationUnavailable {
        /// Destination path.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source line did not split into the expected number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        /// 1-based line in the source.
        line: u64,
        /// Required field count.
        expected: usize,
        /// Field count actually present.
        found: usize,
    },

    /// The uid field was not a base-10 integer.
    #[error("line {line}: invalid uid '{value}'")]
    InvalidIdentifier {
        /// 1-based line in the source.
        line: u64,
        /// The offending field text.
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Encoding or writing the output failed.
    #[error("failed to write output: {0}")]
    Serialization(#[from] SerializationError),
}

/// Underlying cause of a [`ToolError::Serialization`].
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        Self::Serialization(SerializationError::Io(err))
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(SerializationError::Json(err))
    }
}

/// Exit code mapping for `ToolError` variants.
impl ToolError {
    /// Return the CLI exit code for this error.
    ///
    /// Neither tool distinguishes failure kinds at the process boundary.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_)
            | Self::UnsupportedFormat { .. }
            | Self::SourceUnavailable { .. }
            | Self::DestinationUnavailable { .. }
            | Self::MalformedRecord { .. }
            | Self::InvalidIdentifier { .. }
            | Self::Serialization(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_exits_one() {
        let errs = [
            ToolError::Configuration("missing --name".to_owned()),
            ToolError::UnsupportedFormat {
                value: "xml".to_owned(),
            },
            ToolError::MalformedRecord {
                line: 3,
                expected: 7,
                found: 2,
            },
        ];
        for err in &errs {
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn test_messages_name_the_problem() {
        let err = ToolError::UnsupportedFormat {
            value: "XML".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid format 'XML'. Use 'json' or 'csv'");

        let err = ToolError::MalformedRecord {
            line: 12,
            expected: 7,
            found: 5,
        };
        assert_eq!(err.to_string(), "line 12: expected 7 fields, found 5");
    }
}
