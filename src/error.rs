use std::path::PathBuf;

use thiserror::Error;

use crate::keyvalues::{DecodeError, ParseError};

/// Everything that can go wrong while resolving a game's install directory.
#[derive(Debug, Error)]
pub enum GamePathError {
    /// Steam's install location could not be read. Usually means Steam is not installed.
    #[error("Steam installation not found: {detail}")]
    PlatformNotFound { detail: String },

    #[error("unable to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed KeyValues text in {path:?}: {source}")]
    Parse { path: PathBuf, source: ParseError },

    #[error("unexpected structure in {path:?}: {source}")]
    Decode { path: PathBuf, source: DecodeError },

    #[error("app {app_id} is listed in multiple Steam libraries: {candidates:?}")]
    AmbiguousInstallation {
        app_id: u32,
        candidates: Vec<PathBuf>,
    },

    #[error("computed game path {path:?} does not exist: {source}")]
    PathValidation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings file {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

impl GamePathError {
    /// Stable machine-readable name of the failure
    pub fn kind(&self) -> &'static str {
        match self {
            GamePathError::PlatformNotFound { .. } => "platform_not_found",
            GamePathError::Io { .. } => "io",
            GamePathError::Parse { .. } => "parse",
            GamePathError::Decode { .. } => "decode",
            GamePathError::AmbiguousInstallation { .. } => "ambiguous",
            GamePathError::PathValidation { .. } => "path_validation",
            GamePathError::Config { .. } => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, GamePathError>;
