//! Error types of the crate.

use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error raised by index construction, sampling and image resolution.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the path '{}' does not exist", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to list directory '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode image file '{}'", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("index {index} is out of range for length {len}")]
    Index { index: usize, len: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("requested {requested} characters, but only {available} are available")]
    InsufficientCharacters { requested: usize, available: usize },
    #[error(
        "requested {requested} samples of character {character_id}, but only {available} are available"
    )]
    InsufficientSamples {
        character_id: usize,
        requested: usize,
        available: usize,
    },
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Returns [Error::InvalidArgument] with a formatted message unless the condition holds.
macro_rules! ensure_arg {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::Error::invalid_argument(format!($($arg)+)));
        }
    };
}
pub(crate) use ensure_arg;
