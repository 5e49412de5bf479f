/// Output sink shared by both tools: standard output or a file.
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::ToolError;

/// Where output bytes go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Interpret a `--path` style flag: empty means stdout.
    #[must_use]
    pub fn from_flag(path: &str) -> Self {
        if path.is_empty() {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(path))
        }
    }
}

/// An acquired destination. The handle is released when dropped.
pub enum Sink {
    Stdout(BufWriter<StdoutLock<'static>>),
    File(BufWriter<File>),
}

impl Sink {
    /// Acquire `dest`, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::DestinationUnavailable` if the file cannot be created.
    pub fn create(dest: &Destination) -> Result<Self, ToolError> {
        match dest {
            Destination::Stdout => Ok(Self::stdout()),
            Destination::File(path) => {
                let file = File::create(path).map_err(|source| unavailable(path, source))?;
                debug!(path = %path.display(), "created output file");
                Ok(Self::File(BufWriter::new(file)))
            }
        }
    }

    /// Acquire `dest` for writing without creating it.
    ///
    /// The file must already exist. It is truncated on open, so a shorter
    /// message never leaves bytes from the previous one behind.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::DestinationUnavailable` if the file is missing or
    /// not writable.
    pub fn open_existing(dest: &Destination) -> Result<Self, ToolError> {
        match dest {
            Destination::Stdout => Ok(Self::stdout()),
            Destination::File(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|source| unavailable(path, source))?;
                debug!(path = %path.display(), "opened existing output file");
                Ok(Self::File(BufWriter::new(file)))
            }
        }
    }

    fn stdout() -> Self {
        Self::Stdout(BufWriter::new(io::stdout().lock()))
    }

    /// Flush everything buffered and release the destination.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Serialization` if the final flush fails.
    pub fn finish(mut self) -> Result<(), ToolError> {
        self.flush()?;
        Ok(())
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::File(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

fn unavailable(path: &Path, source: io::Error) -> ToolError {
    ToolError::DestinationUnavailable {
        path: path.to_owned(),
        source,
    }
}
