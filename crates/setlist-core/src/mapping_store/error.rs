//! Error types for the sort-name mapping store.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a mapping store operation.
///
/// Read-only queries (`get_mapping`, `get_all_mappings`) swallow `Format` and
/// `Encoding` into an empty table; only `load` surfaces them.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Header missing, wrong field count, or a blank field.
    #[error("{}", format_message(*line, message))]
    Format {
        /// 1-based line number in the file, when the problem is tied to a line.
        line: Option<usize>,
        message: String,
    },

    /// File is not valid UTF-8.
    #[error("mapping file {} is not valid UTF-8", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Any other failure reading the file.
    #[error("failed to read mapping file {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the snapshot failed.
    #[error("failed to write mapping file {}: {cause}", path.display())]
    Write {
        path: PathBuf,
        cause: WriteCause,
        #[source]
        source: io::Error,
    },

    /// Artist or sort name cannot be stored (blank, or contains tab/newline).
    #[error("invalid mapping: {0}")]
    InvalidInput(String),
}

fn format_message(line: Option<usize>, message: &str) -> String {
    match line {
        Some(n) => format!("invalid mapping file (line {}): {}", n, message),
        None => format!("invalid mapping file: {}", message),
    }
}

impl StoreError {
    pub(crate) fn format(line: Option<usize>, message: impl Into<String>) -> Self {
        StoreError::Format {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn write(path: PathBuf, source: io::Error) -> Self {
        StoreError::Write {
            path,
            cause: WriteCause::from_io(&source),
            source,
        }
    }

    /// Format and encoding problems: the file exists but its contents are unusable.
    pub fn is_format_level(&self) -> bool {
        matches!(self, StoreError::Format { .. } | StoreError::Encoding { .. })
    }
}

/// Why a snapshot write failed, for user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteCause {
    PermissionDenied,
    Os,
}

impl WriteCause {
    fn from_io(err: &io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            WriteCause::PermissionDenied
        } else {
            WriteCause::Os
        }
    }
}

impl fmt::Display for WriteCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteCause::PermissionDenied => write!(f, "permission denied"),
            WriteCause::Os => write!(f, "operating system error"),
        }
    }
}
