//! morsekit codec - bidirectional text/Morse conversion
//!
//! This crate converts plain text to Morse code strings and back, and
//! maps Morse strings to compact 2-bit symbol values for binary
//! transports.

pub mod alphabet;
pub mod morse;
pub mod wire;
pub mod registry;
pub mod error;

pub use error::{CodecError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        alphabet::{MorseSymbol, ALPHABET},
        morse::{decode_morse, encode_text},
        wire::to_symbol_values,
        registry::{CodecRegistry, CodecInfo},
        error::{CodecError, Result},
    };
}
