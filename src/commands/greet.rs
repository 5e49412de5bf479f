/// `greeting`: collect inputs → render → preview on stdout or write the out file.
use std::ffi::OsStr;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::GreetingConfig;
use crate::errors::ToolError;
use crate::greeting::{InputSource, render};
use crate::sink::{Destination, Sink};

/// Pick the input strategy for `config`.
///
/// `input` and `prompt` are only used in `--prompt` mode.
#[must_use]
pub fn input_source<R: BufRead, W: Write>(
    config: &GreetingConfig,
    input: R,
    prompt: W,
) -> InputSource<R, W> {
    if config.prompt {
        InputSource::Interactive { input, prompt }
    } else {
        InputSource::Direct {
            name: config.name.clone(),
            greeting: config.greeting.clone(),
        }
    }
}

/// Whether the `DEBUG` environment value asks for the flag dump.
///
/// Any non-empty value counts.
#[must_use]
pub fn debug_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// The `DEBUG=1` dump: flag values, one per line.
#[must_use]
pub fn debug_dump(config: &GreetingConfig) -> String {
    format!(
        "Name: {}\nGreeting: {}\nPrompt: {}\n",
        config.name, config.greeting, config.prompt
    )
}

/// Run the greeting pipeline and return the message that was emitted.
///
/// # Errors
///
/// - `ToolError::SourceUnavailable` if interactive input fails
/// - `ToolError::DestinationUnavailable` if the out file does not exist
/// - `ToolError::Serialization` if writing fails
pub fn run<R: BufRead, W: Write>(
    config: &GreetingConfig,
    source: InputSource<R, W>,
) -> Result<String, ToolError> {
    let (name, greeting) = source.resolve()?;
    let message = render(&name, &greeting);

    if config.preview {
        let mut sink = Sink::create(&Destination::Stdout)?;
        writeln!(sink, "{message}")?;
        sink.finish()?;
    } else {
        let mut sink = Sink::open_existing(&Destination::File(config.out.clone()))?;
        sink.write_all(message.as_bytes())?;
        sink.finish()?;
        debug!(path = %config.out.display(), bytes = message.len(), "wrote greeting");
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::{Cursor, Empty, Sink as NullSink};
    use std::path::PathBuf;

    use super::*;

    fn scratch(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hello-users-greet-{}-{label}", std::process::id()))
    }

    fn config(name: &str, greeting: &str, out: PathBuf) -> GreetingConfig {
        GreetingConfig {
            name: name.to_owned(),
            greeting: greeting.to_owned(),
            prompt: false,
            preview: false,
            out,
        }
    }

    #[test]
    fn test_writes_existing_out_file() {
        let out = scratch("existing");
        fs::write(&out, "").unwrap();
        let cfg = config("Bob", "Hi", out.clone());

        let message = run(&cfg, input_source(&cfg, std::io::empty(), std::io::sink())).unwrap();

        assert_eq!(message, "Hi, Bob!");
        assert_eq!(fs::read_to_string(&out).unwrap(), "Hi, Bob!");
        fs::remove_file(&out).unwrap();
    }

    // The out file is never created: a missing file is an error.
    #[test]
    fn test_missing_out_file_is_not_created() {
        let out = scratch("absent");
        let _ = fs::remove_file(&out);
        let cfg = config("Bob", "Hi", out.clone());

        let err = run(&cfg, input_source(&cfg, std::io::empty(), std::io::sink())).unwrap_err();

        assert!(matches!(err, ToolError::DestinationUnavailable { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_preview_leaves_file_alone() {
        let out = scratch("preview");
        fs::write(&out, "untouched").unwrap();
        let mut cfg = config("Bob", "Hi", out.clone());
        cfg.preview = true;

        let message = run(&cfg, input_source(&cfg, std::io::empty(), std::io::sink())).unwrap();

        assert_eq!(message, "Hi, Bob!");
        assert_eq!(fs::read_to_string(&out).unwrap(), "untouched");
        fs::remove_file(&out).unwrap();
    }

    #[test]
    fn test_prompt_mode_reads_stream() {
        let out = scratch("prompt");
        fs::write(&out, "").unwrap();
        let mut cfg = config("", "", out.clone());
        cfg.prompt = true;

        let source = input_source(&cfg, Cursor::new("Howdy\nPardner\n"), Vec::new());
        let message = run(&cfg, source).unwrap();

        assert_eq!(message, "Howdy, Pardner!");
        fs::remove_file(&out).unwrap();
    }

    #[test]
    fn test_direct_mode_ignores_stream() {
        let cfg = config("Ann", "Hello", scratch("unused"));
        let source: InputSource<Empty, NullSink> = input_source(&cfg, std::io::empty(), std::io::sink());
        assert!(matches!(source, InputSource::Direct { .. }));
    }

    #[test]
    fn test_debug_requested_needs_non_empty_value() {
        assert!(!debug_requested(None));
        assert!(!debug_requested(Some(OsStr::new(""))));
        assert!(debug_requested(Some(OsStr::new("1"))));
        assert!(debug_requested(Some(OsStr::new("false"))));
    }

    #[test]
    fn test_debug_dump_in_prompt_mode_has_empty_values() {
        let mut cfg = config("", "", PathBuf::from("out.txt"));
        cfg.prompt = true;
        assert_eq!(debug_dump(&cfg), "Name: \nGreeting: \nPrompt: true\n");
    }

    #[test]
    fn test_debug_dump_lists_flags() {
        let cfg = config("Ann", "Hello", PathBuf::from("out.txt"));
        assert_eq!(debug_dump(&cfg), "Name: Ann\nGreeting: Hello\nPrompt: false\n");
    }
}
