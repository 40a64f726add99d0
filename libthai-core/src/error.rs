//! Error types for the libthai engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown keyboard layout: {0}")]
    UnknownLayout(String),

    #[error("Unknown strictness level: {0}")]
    UnknownStrictness(String),

    #[error("Transcoding error: {0}")]
    Codec(#[from] crate::codec::CodecError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
