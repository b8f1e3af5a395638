//! CLI error types.

use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Configuration error.
    Config(String),
    /// Data store error.
    Store(String),
    /// IO error.
    Io(std::io::Error),
    /// Spreadsheet import failed.
    Import(galiontek_import::ImportError),
    /// Export rendering failed.
    Export(galiontek_export::ExportError),
    /// A meeting record failed validation.
    Meeting(galiontek_core::MeetingError),
    /// The requested order does not exist in the data file.
    OrderNotFound(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Store(msg) => write!(f, "data store error: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Import(err) => write!(f, "import failed: {}", err),
            Self::Export(err) => write!(f, "export failed: {}", err),
            Self::Meeting(err) => write!(f, "invalid meeting: {}", err),
            Self::OrderNotFound(id) => write!(f, "order not found: {}", id),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Import(err) => Some(err),
            Self::Export(err) => Some(err),
            Self::Meeting(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<galiontek_import::ImportError> for CliError {
    fn from(err: galiontek_import::ImportError) -> Self {
        Self::Import(err)
    }
}

impl From<galiontek_export::ExportError> for CliError {
    fn from(err: galiontek_export::ExportError) -> Self {
        Self::Export(err)
    }
}

impl From<galiontek_core::MeetingError> for CliError {
    fn from(err: galiontek_core::MeetingError) -> Self {
        Self::Meeting(err)
    }
}
