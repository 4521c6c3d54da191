//! # Error Types — Document Conversion Errors
//!
//! Defines the errors raised while turning a parser's value tree into a
//! [`Document`](crate::Document). All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Parse and IO errors name the source they came from.
//! - Shape errors name the document path of the offending value.

use thiserror::Error;

/// Error while reading, parsing or converting a document tree.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("cannot read '{source_name}': {error}")]
    Io {
        /// File path or other source identifier.
        source_name: String,
        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// The document text could not be parsed.
    #[error("cannot parse '{source_name}' as {format}: {reason}")]
    Parse {
        /// File path or other source identifier.
        source_name: String,
        /// Serialization format that was attempted (`YAML` or `JSON`).
        format: &'static str,
        /// Parser error message.
        reason: String,
    },

    /// A mapping key cannot be used as a string key, or collides with
    /// another key once stringified.
    #[error("unsupported mapping key at {path}: {found}")]
    UnsupportedKey {
        /// Path of the mapping holding the key.
        path: String,
        /// Description of the key shape.
        found: String,
    },

    /// A number that has no finite representation (NaN, infinity).
    #[error("unsupported number at {path}: {value}")]
    UnsupportedNumber {
        /// Path of the offending value.
        path: String,
        /// Display form of the number.
        value: String,
    },
}

impl DocumentError {
    /// Path of the offending value for shape errors, `None` for IO and
    /// parse errors.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::UnsupportedKey { path, .. } | Self::UnsupportedNumber { path, .. } => {
                Some(path.as_str())
            }
            Self::Io { .. } | Self::Parse { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_key_display() {
        let err = DocumentError::UnsupportedKey {
            path: "/spec".to_string(),
            found: "sequence".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported mapping key at /spec: sequence");
        assert_eq!(err.path(), Some("/spec"));
    }

    #[test]
    fn test_parse_error_has_no_path() {
        let err = DocumentError::Parse {
            source_name: "doc.yaml".to_string(),
            format: "YAML",
            reason: "did not find expected key".to_string(),
        };
        assert!(err.path().is_none());
        assert!(err.to_string().contains("doc.yaml"));
        assert!(err.to_string().contains("YAML"));
    }
}
