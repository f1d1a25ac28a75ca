//! View-specific error types.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use slate_core::ConfigError;

/// External failures surfaced by [`MemLink`](crate::MemLink) I/O.
///
/// Contract violations (null pointers, reading into a view) are not errors;
/// they go through `slate_core::contract!`.
#[derive(Debug)]
pub enum ViewError {
    /// A file operation in `write_file` failed.
    File {
        /// The failing step: `"open"` or `"write"`.
        op: &'static str,
        /// The file being written.
        path: PathBuf,
        /// The underlying OS error.
        source: io::Error,
    },
    /// Writing to a stream sink failed.
    Io(io::Error),
    /// The stream configuration is unusable.
    InvalidConfig(ConfigError),
    /// The view is too large for the `u32` length prefix.
    TooLarge {
        /// Size of the view in bytes.
        len: usize,
    },
}

impl ViewError {
    pub(crate) fn file(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self::File {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { op, path, source } => {
                write!(f, "{op} failed for {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidConfig(e) => write!(f, "{e}"),
            Self::TooLarge { len } => {
                write!(f, "view of {len} bytes does not fit a u32 length prefix")
            }
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::File { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::InvalidConfig(e) => Some(e),
            Self::TooLarge { .. } => None,
        }
    }
}

impl From<io::Error> for ViewError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for ViewError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}
