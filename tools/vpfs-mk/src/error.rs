//! Errors reported by the packaging tool

use std::path::PathBuf;
use vpfs::VpfsError;

#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// Missing flag, unsupported format or empty file list; shown with help text
    #[error("{0}")]
    Usage(String),

    #[error("cannot open {}: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: VpfsError,
    },

    #[error("invalid container {}: {source}", .path.display())]
    InvalidContainer {
        path: PathBuf,
        #[source]
        source: VpfsError,
    },
}

impl PackError {
    pub fn is_usage(&self) -> bool {
        matches!(self, PackError::Usage(_))
    }
}
