//! Codec registry for managing available codecs

use crate::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Information about a codec
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub codec_type: CodecType,
    pub version: String,
}

/// Type of codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodecType {
    Text,
    Wire,
}

/// Registry for managing available codecs
pub struct CodecRegistry {
    codecs: HashMap<String, CodecInfo>,
}

impl CodecRegistry {
    /// Create a new codec registry with the built-in codecs registered
    pub fn new() -> Self {
        let mut registry = Self {
            codecs: HashMap::new(),
        };

        registry.register_builtin_codecs();
        registry
    }

    fn register_builtin_codecs(&mut self) {
        let morse_info = CodecInfo {
            id: "morse-itu".to_string(),
            name: "ITU Morse".to_string(),
            description: "Text to Morse code for the 26 Latin letters".to_string(),
            codec_type: CodecType::Text,
            version: "1.0.0".to_string(),
        };
        self.codecs.insert(morse_info.id.clone(), morse_info);

        let wire_info = CodecInfo {
            id: "morse-2bit".to_string(),
            name: "Morse 2-bit symbols".to_string(),
            description: "Morse string characters as 2-bit symbol values".to_string(),
            codec_type: CodecType::Wire,
            version: "1.0.0".to_string(),
        };
        self.codecs.insert(wire_info.id.clone(), wire_info);
    }

    /// Register a new codec
    pub fn register(&mut self, info: CodecInfo) -> Result<()> {
        if self.codecs.contains_key(&info.id) {
            return Err(CodecError::DuplicateCodec { id: info.id });
        }

        self.codecs.insert(info.id.clone(), info);
        Ok(())
    }

    /// Get information about a codec
    pub fn get(&self, id: &str) -> Option<&CodecInfo> {
        self.codecs.get(id)
    }

    /// List all available codecs
    pub fn list(&self) -> Vec<&CodecInfo> {
        self.codecs.values().collect()
    }

    /// List codecs by type
    pub fn list_by_type(&self, codec_type: CodecType) -> Vec<&CodecInfo> {
        self.codecs
            .values()
            .filter(|info| info.codec_type == codec_type)
            .collect()
    }

    /// Check if a codec is available
    pub fn is_available(&self, id: &str) -> bool {
        self.codecs.contains_key(id)
    }

    /// Export codec registry to JSON
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.codecs.values().collect::<Vec<_>>()).map_err(|e| {
            CodecError::Serialization {
                msg: format!("Failed to serialize registry: {}", e),
            }
        })
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}
