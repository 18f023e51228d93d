//! Morse string to 2-bit symbol values
//!
//! Each character of a Morse string maps to one small integer
//! (space = 0b00, dot = 0b01, dash = 0b10), ready for packing into a
//! binary transport. The mapping is one-to-one, so the output always has
//! exactly one value per input character.

use crate::alphabet::MorseSymbol;
use crate::{CodecError, Result};

/// Map a Morse string to its 2-bit symbol values.
///
/// Fails with [`CodecError::UnrecognizedSymbol`] on any character
/// outside `{' ', '.', '-'}`, naming the character and its position.
///
/// ```
/// use morsekit_codec::wire::to_symbol_values;
///
/// assert_eq!(to_symbol_values(".-").unwrap(), vec![0b01, 0b10]);
/// ```
pub fn to_symbol_values(morse: &str) -> Result<Vec<u8>> {
    morse
        .chars()
        .enumerate()
        .map(|(position, ch)| match MorseSymbol::from_char(ch) {
            Some(symbol) => Ok(symbol.value()),
            None => Err(CodecError::UnrecognizedSymbol { ch, position }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morse::encode_text;

    #[test]
    fn test_single_token() {
        assert_eq!(to_symbol_values(".-").unwrap(), vec![0b01, 0b10]);
    }

    #[test]
    fn test_encoded_text_maps_through() {
        // "EE" encodes as "." " " "." after the trailing separator pop.
        let morse = encode_text("EE").unwrap();
        assert_eq!(morse, ". .");
        assert_eq!(to_symbol_values(&morse).unwrap(), vec![0b01, 0b00, 0b01]);

        let morse = encode_text("Ee").unwrap();
        assert_eq!(to_symbol_values(&morse).unwrap(), vec![0b01, 0b00, 0b01]);
    }

    #[test]
    fn test_length_is_preserved() {
        let morse = encode_text("PARIS IN SPRING").unwrap();
        let values = to_symbol_values(&morse).unwrap();
        assert_eq!(values.len(), morse.len());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_symbol_values("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_rejects_foreign_characters() {
        assert_eq!(
            to_symbol_values(".- X"),
            Err(CodecError::UnrecognizedSymbol { ch: 'X', position: 3 })
        );
    }
}
