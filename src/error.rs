//! Error types for the conversion pipeline.
//!
//! Parsing is total; only serialization of the emitted document can fail,
//! and only if the underlying writer does.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error while writing XML: {0}")]
    Io(#[from] io::Error),

    #[error("emitted document is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
