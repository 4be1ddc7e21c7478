use std::path::PathBuf;

use thiserror::Error;

/// Problems with the command line itself. These are collected while scanning
/// and reported together; none of them stop the scan except `UnknownOption`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Missing argument for option {0}")]
    MissingArgument(String),

    #[error("Invalid length for option {0}: {1}")]
    InvalidLength(String, String),

    #[error("Empty charset for option {0}")]
    EmptyCharset(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

impl UsageError {
    /// Unknown options print their message before the help text, every other
    /// usage error prints it after.
    pub fn help_first(&self) -> bool {
        !matches!(self, UsageError::UnknownOption(_))
    }
}

#[derive(Debug, Error)]
pub enum PassgenError {
    #[error("Error opening file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error writing file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Unable to copy to clipboard: {0}")]
    Clipboard(String),

    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Charset must contain at least one character")]
    EmptyCharset,
}

impl PassgenError {
    pub fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        PassgenError::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_names_option() {
        let e = UsageError::MissingArgument("-l".into());
        assert_eq!(e.to_string(), "Missing argument for option -l");
        assert!(e.help_first());
    }

    #[test]
    fn unknown_option_prints_before_help() {
        let e = UsageError::UnknownOption("-x".into());
        assert_eq!(e.to_string(), "Unknown option: -x");
        assert!(!e.help_first());
    }

    #[test]
    fn io_error_shows_os_message() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        let e = PassgenError::from(source);
        assert_eq!(e.to_string(), "Error opening file: No such file or directory");
    }

    #[test]
    fn write_error_is_worded_separately() {
        let source = std::io::Error::new(std::io::ErrorKind::StorageFull, "No space left on device");
        let e = PassgenError::Write(source);
        assert_eq!(e.to_string(), "Error writing file: No space left on device");
    }
}
