//! Error types for the morsekit codec

use thiserror::Error;

/// Codec error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid character '{ch}' at position {position}: expected an ASCII letter or space")]
    InvalidCharacter { ch: char, position: usize },

    #[error("Unrecognized Morse symbol '{ch}' at position {position}: expected '.', '-' or space")]
    UnrecognizedSymbol { ch: char, position: usize },

    #[error("Codec '{id}' already registered")]
    DuplicateCodec { id: String },

    #[error("Serialization failed: {msg}")]
    Serialization { msg: String },
}

/// Result type for morsekit codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
