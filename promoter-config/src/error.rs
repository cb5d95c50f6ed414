//! Error types for configuration loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading a deployment configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Error when reading config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a valid deployment configuration
    #[error("Error when unmarshalling config file{}: {source}", location(.path))]
    Parse {
        /// File the content came from, if any
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

impl ConfigError {
    /// Check if this error is a syntax or schema error in the content
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    pub(crate) fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            Self::Parse { source, .. } => Self::Parse {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}
