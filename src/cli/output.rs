/// Diagnostics: tracing setup, debug timings and error reporting on stderr.
use std::io::Write;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::errors::ToolError;

/// Install the stderr log subscriber.
///
/// `--debug` forces the `debug` level; otherwise `RUST_LOG` applies, falling
/// back to `warn`. Calling this twice is harmless.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Write a one-line error message to stderr.
pub fn write_error(err: &ToolError) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds at `debug` level on drop.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    /// Start timing `label`.
    #[must_use]
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!(step = self.label, elapsed_ms = ms, "done");
    }
}
