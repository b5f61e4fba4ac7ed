//! Input resolution: positional text, then `--file`, then piped stdin.

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use crate::error::{Result, TokenCountError};

/// Where the text to estimate comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Pick a source by precedence. Empty positional text does not count.
    pub fn resolve(text: &str, file: Option<&Path>) -> Self {
        if !text.is_empty() {
            Self::Text(text.to_string())
        } else if let Some(path) = file {
            Self::File(path.to_path_buf())
        } else {
            Self::Stdin
        }
    }

    /// Short label for logging.
    pub fn describe(&self) -> String {
        match self {
            Self::Text(_) => "arguments".to_string(),
            Self::File(path) => format!("file '{}'", path.display()),
            Self::Stdin => "stdin".to_string(),
        }
    }

    /// Read the full input text.
    ///
    /// Errors if stdin is an interactive terminal or the result is empty.
    pub fn read(self) -> Result<String> {
        let text = match self {
            Self::Text(text) => text,
            Self::File(path) => read_file(&path)?,
            Self::Stdin => {
                let stdin = std::io::stdin();
                if stdin.is_terminal() {
                    return Err(TokenCountError::no_input(
                        "no input provided (use -f for file or pipe content)",
                    ));
                }
                read_from(stdin.lock(), "reading from stdin")?
            }
        };

        if text.is_empty() {
            return Err(TokenCountError::no_input("no input text provided"));
        }
        Ok(text)
    }
}

/// Invalid UTF-8 is replaced rather than rejected.
fn read_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| TokenCountError::io(format!("reading file '{}'", path.display()), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_from(mut reader: impl Read, context: &str) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| TokenCountError::io(context, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_wins_over_file() {
        let source = InputSource::resolve("hello", Some(Path::new("a.txt")));
        assert_eq!(source, InputSource::Text("hello".to_string()));
    }

    #[test]
    fn file_used_when_text_empty() {
        let source = InputSource::resolve("", Some(Path::new("a.txt")));
        assert_eq!(source, InputSource::File(PathBuf::from("a.txt")));
    }

    #[test]
    fn stdin_is_last_resort() {
        assert_eq!(InputSource::resolve("", None), InputSource::Stdin);
    }

    #[test]
    fn reads_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "hello world\n").unwrap();
        let text = InputSource::File(path).read().unwrap();
        assert_eq!(text, "hello world\n");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InputSource::File(dir.path().join("missing.txt"))
            .read()
            .unwrap_err();
        assert!(matches!(err, TokenCountError::Io { .. }));
    }

    #[test]
    fn empty_file_is_no_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();
        let err = InputSource::File(path).read().unwrap_err();
        assert_eq!(err.to_string(), "no input text provided");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let text = read_from(&[b'h', b'i', 0xff][..], "test").unwrap();
        assert_eq!(text, "hi\u{fffd}");
    }
}
