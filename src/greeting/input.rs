/// Input collection for the greeting: straight from flags, or by prompting.
use std::io::{BufRead, Write};

use crate::errors::ToolError;

/// Where the name and greeting phrase come from.
pub enum InputSource<R, W> {
    /// Values already supplied on the command line.
    Direct { name: String, greeting: String },
    /// Ask on `prompt`, read trimmed lines from `input`.
    Interactive { input: R, prompt: W },
}

impl<R: BufRead, W: Write> InputSource<R, W> {
    /// Produce `(name, greeting)`.
    ///
    /// Interactive mode asks for the greeting first, then the name. End of
    /// input yields an empty string; nothing is required to be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::SourceUnavailable` if the prompt or input stream fails.
    pub fn resolve(self) -> Result<(String, String), ToolError> {
        match self {
            Self::Direct { name, greeting } => Ok((name, greeting)),
            Self::Interactive {
                mut input,
                mut prompt,
            } => {
                let greeting = ask(&mut input, &mut prompt, "Your Greeting: ")?;
                let name = ask(&mut input, &mut prompt, "Your Name: ")?;
                Ok((name, greeting))
            }
        }
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, prompt: &mut W, label: &str) -> Result<String, ToolError> {
    let stdin_err = |source: std::io::Error| ToolError::SourceUnavailable {
        what: "standard input".to_owned(),
        source,
    };
    prompt
        .write_all(label.as_bytes())
        .and_then(|()| prompt.flush())
        .map_err(stdin_err)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(stdin_err)?;
    Ok(line.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Empty, Sink};

    use super::*;

    #[test]
    fn test_direct_passes_values_through() {
        let src: InputSource<Empty, Sink> = InputSource::Direct {
            name: "Ada".to_owned(),
            greeting: "Hello".to_owned(),
        };
        assert_eq!(src.resolve().unwrap(), ("Ada".to_owned(), "Hello".to_owned()));
    }

    #[test]
    fn test_interactive_reads_greeting_then_name() {
        let mut prompt = Vec::new();
        let src = InputSource::Interactive {
            input: Cursor::new("  Good morning \nGrace\n"),
            prompt: &mut prompt,
        };
        let (name, greeting) = src.resolve().unwrap();
        assert_eq!(greeting, "Good morning");
        assert_eq!(name, "Grace");
        assert_eq!(String::from_utf8(prompt).unwrap(), "Your Greeting: Your Name: ");
    }

    #[test]
    fn test_interactive_accepts_empty_and_eof() {
        let src = InputSource::Interactive {
            input: Cursor::new("\n"),
            prompt: Vec::new(),
        };
        assert_eq!(src.resolve().unwrap(), (String::new(), String::new()));
    }
}
