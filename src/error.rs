use std::io;
use thiserror::Error;

/// Error type for the tokencount command layer.
///
/// The estimator itself is total and never fails; everything here comes
/// from reading input, loading config or writing output.
#[derive(Error, Debug)]
pub enum TokenCountError {
    #[error("config error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("{hint}")]
    NoInput { hint: String },
}

impl TokenCountError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn no_input(hint: impl Into<String>) -> Self {
        Self::NoInput { hint: hint.into() }
    }
}

pub type Result<T> = std::result::Result<T, TokenCountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = TokenCountError::config("bad value");
        assert_eq!(err.to_string(), "config error: bad value");
    }

    #[test]
    fn no_input_displays_hint_only() {
        let err = TokenCountError::no_input("no input text provided");
        assert_eq!(err.to_string(), "no input text provided");
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;

        let err = TokenCountError::io(
            "reading 'missing.txt'",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "I/O error: reading 'missing.txt'");
        assert!(err.source().is_some());
    }
}
