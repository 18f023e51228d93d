//! ITU Morse alphabet and the on-air symbol set
//!
//! The letter table is a compile-time constant indexed by letter offset
//! ('A' = 0 .. 'Z' = 25). Only the 26 Latin letters are covered; digits
//! and punctuation are out of scope for this codec.

/// Number of letters in the codec alphabet
pub const LETTER_COUNT: usize = 26;

/// ITU Morse patterns for 'A'..='Z', indexed by `letter - 'A'`
pub const ALPHABET: [&str; LETTER_COUNT] = [
    ".-",   // A
    "-...", // B
    "-.-.", // C
    "-..",  // D
    ".",    // E
    "..-.", // F
    "--.",  // G
    "....", // H
    "..",   // I
    ".---", // J
    "-.-",  // K
    ".-..", // L
    "--",   // M
    "-.",   // N
    "---",  // O
    ".--.", // P
    "--.-", // Q
    ".-.",  // R
    "...",  // S
    "-",    // T
    "..-",  // U
    "...-", // V
    ".--",  // W
    "-..-", // X
    "-.--", // Y
    "--..", // Z
];

/// Look up the Morse pattern for a letter (case-insensitive).
///
/// Returns `None` for anything that is not an ASCII letter.
pub fn pattern_for(letter: char) -> Option<&'static str> {
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let index = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
    Some(ALPHABET[index])
}

/// Look up the letter for a Morse pattern.
///
/// Returns `None` when the pattern matches none of the 26 known letters.
pub fn letter_for(pattern: &str) -> Option<char> {
    ALPHABET
        .iter()
        .position(|&p| p == pattern)
        .map(|index| (b'A' + index as u8) as char)
}

/// One character of a Morse string as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorseSymbol {
    /// Token/word separator
    Space,
    /// Dit
    Dot,
    /// Dah
    Dash,
}

impl MorseSymbol {
    /// Parse a single Morse string character
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(MorseSymbol::Space),
            '.' => Some(MorseSymbol::Dot),
            '-' => Some(MorseSymbol::Dash),
            _ => None,
        }
    }

    /// The character this symbol uses in Morse text
    pub fn as_char(&self) -> char {
        match self {
            MorseSymbol::Space => ' ',
            MorseSymbol::Dot => '.',
            MorseSymbol::Dash => '-',
        }
    }

    /// The 2-bit wire code for this symbol
    pub fn value(&self) -> u8 {
        match self {
            MorseSymbol::Space => 0b00,
            MorseSymbol::Dot => 0b01,
            MorseSymbol::Dash => 0b10,
        }
    }
}
