use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything a demo can fail with.
#[derive(Error, Debug)]
pub enum DemoError {
    /// Raised on purpose to show cleanup on the failure path.
    #[error("{0}")]
    Simulated(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid demo configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl DemoError {
    pub fn simulated(message: impl Into<String>) -> Self {
        Self::Simulated(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
