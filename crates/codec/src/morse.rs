//! Text to Morse conversion and back
//!
//! Encoded output uses the classic on-air text convention: letter tokens
//! separated by one space, word boundaries by two consecutive spaces
//! (the word space lands next to the separator already trailing the
//! previous letter's pattern).

use crate::alphabet::{letter_for, pattern_for};
use crate::{CodecError, Result};

/// Encode plain text to a Morse string.
///
/// Letters are case-insensitive; spaces become word boundaries. Any
/// other character is rejected with [`CodecError::InvalidCharacter`].
///
/// ```
/// use morsekit_codec::morse::encode_text;
///
/// assert_eq!(encode_text("Ola").unwrap(), "--- .-.. .-");
/// assert_eq!(encode_text("A A").unwrap(), ".-  .-");
/// ```
pub fn encode_text(text: &str) -> Result<String> {
    let mut output = String::new();

    for (position, ch) in text.chars().enumerate() {
        if ch == ' ' {
            output.push(' ');
        } else if let Some(pattern) = pattern_for(ch) {
            output.push_str(pattern);
            output.push(' ');
        } else {
            return Err(CodecError::InvalidCharacter { ch, position });
        }
    }

    // Every appended piece carries a trailing separator; drop the last one.
    output.pop();
    Ok(output)
}

/// Decode a Morse string back to plain text.
///
/// Tokens resolve to uppercase letters, an empty token between two
/// delimiters resolves to a word space. A token matching none of the 26
/// known patterns is silently dropped (logged at debug level), so
/// decoding never fails.
pub fn decode_morse(morse: &str) -> String {
    let mut output = String::new();
    let mut token = String::new();

    for ch in morse.chars() {
        if ch == ' ' {
            if token.is_empty() {
                // Second delimiter in a row marks a word boundary.
                output.push(' ');
            } else {
                resolve_token(&token, &mut output);
                token.clear();
            }
        } else {
            token.push(ch);
        }
    }

    // No trailing delimiter after the last token; a dangling empty
    // buffer contributes nothing.
    if !token.is_empty() {
        resolve_token(&token, &mut output);
    }

    output
}

fn resolve_token(token: &str, output: &mut String) {
    match letter_for(token) {
        Some(letter) => output.push(letter),
        None => tracing::debug!(token, "dropping unknown Morse token"),
    }
}
