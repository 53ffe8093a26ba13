//! Crate-level error types.

use std::fmt;
use std::path::PathBuf;

/// Errors produced by the molviz crate.
#[derive(Debug)]
pub enum MolvizError {
    /// Failed to open or read a structure file.
    FileOpen(PathBuf, std::io::Error),
    /// Structure file contents could not be interpreted.
    StructureParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for MolvizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileOpen(path, e) => {
                write!(f, "failed to open {}: {e}", path.display())
            }
            Self::StructureParse(msg) => {
                write!(f, "structure parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for MolvizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileOpen(_, e) | Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MolvizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
