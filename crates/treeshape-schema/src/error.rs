//! # Validation Errors
//!
//! Every failure aborts the validation call that raised it. Variants carry
//! the document path of the offending value and the expected vs actual
//! shape so callers can report without re-walking the document.

use thiserror::Error;
use treeshape_core::DocumentError;

/// Error raised while loading a schema or validating a document.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// `validate` was called on a validator with no schema bound.
    #[error("schema not loaded: bind a schema before calling validate()")]
    SchemaNotLoaded,

    /// A value has the wrong type: a scalar where a container is
    /// expected, or a non-number under `Type: int`.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Path of the offending value.
        path: String,
        /// What the schema requires.
        expected: String,
        /// What the document holds.
        found: String,
    },

    /// A document key has no schema node at its level.
    #[error("unexpected key '{key}' at {path}")]
    UnexpectedKey {
        /// Path of the mapping holding the key.
        path: String,
        /// The undeclared key.
        key: String,
    },

    /// `IsArray` was violated.
    #[error(
        "array mismatch at {path}: expected {} for key '{key}'",
        array_expectation(.expected_array)
    )]
    ArrayMismatch {
        /// Path of the offending value.
        path: String,
        /// Key whose node declares `IsArray`.
        key: String,
        /// The declared `IsArray` value.
        expected_array: bool,
    },

    /// A value did not match the node's `Regex`.
    #[error("regex mismatch at {path}: key '{key}' expects /{pattern}/, received {value}")]
    RegexMismatch {
        /// Path of the offending value.
        path: String,
        /// Key whose node declares `Regex`.
        key: String,
        /// The declared pattern.
        pattern: String,
        /// String form of the received value.
        value: String,
    },

    /// A `Mandatory` key is absent.
    #[error("missing mandatory key '{key}' at {path}")]
    MissingMandatoryKey {
        /// Path of the mapping that lacks the key.
        path: String,
        /// The absent key.
        key: String,
    },

    /// A value in a foreign tree has no document form.
    #[error("unsupported value at {path}: {reason}")]
    UnsupportedType {
        /// Path of the offending value.
        path: String,
        /// Why the value cannot be classified.
        reason: String,
    },

    /// The document nests deeper than the configured maximum.
    #[error("document at {path} exceeds maximum nesting depth of {max_depth}")]
    DepthExceeded {
        /// Path of the first value past the limit.
        path: String,
        /// Configured limit.
        max_depth: usize,
    },

    /// A schema (or a document read from disk) could not be loaded.
    #[error("load error for '{source_name}': {reason}")]
    Load {
        /// File path or other source identifier.
        source_name: String,
        /// Reason the source could not be loaded.
        reason: String,
    },
}

fn array_expectation(expected_array: &bool) -> &'static str {
    if *expected_array {
        "a sequence"
    } else {
        "a non-sequence value"
    }
}

/// Fieldless discriminant of [`ValidationError`], for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    SchemaNotLoaded,
    TypeMismatch,
    UnexpectedKey,
    ArrayMismatch,
    RegexMismatch,
    MissingMandatoryKey,
    UnsupportedType,
    DepthExceeded,
    Load,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::SchemaNotLoaded => ValidationErrorKind::SchemaNotLoaded,
            Self::TypeMismatch { .. } => ValidationErrorKind::TypeMismatch,
            Self::UnexpectedKey { .. } => ValidationErrorKind::UnexpectedKey,
            Self::ArrayMismatch { .. } => ValidationErrorKind::ArrayMismatch,
            Self::RegexMismatch { .. } => ValidationErrorKind::RegexMismatch,
            Self::MissingMandatoryKey { .. } => ValidationErrorKind::MissingMandatoryKey,
            Self::UnsupportedType { .. } => ValidationErrorKind::UnsupportedType,
            Self::DepthExceeded { .. } => ValidationErrorKind::DepthExceeded,
            Self::Load { .. } => ValidationErrorKind::Load,
        }
    }

    /// Document path of the violation, if the error has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::UnexpectedKey { path, .. }
            | Self::ArrayMismatch { path, .. }
            | Self::RegexMismatch { path, .. }
            | Self::MissingMandatoryKey { path, .. }
            | Self::UnsupportedType { path, .. }
            | Self::DepthExceeded { path, .. } => Some(path.as_str()),
            Self::SchemaNotLoaded | Self::Load { .. } => None,
        }
    }

    /// Map a document conversion failure. Shape problems are
    /// `UnsupportedType`; IO and parse failures are `Load`.
    pub(crate) fn from_document(err: DocumentError) -> Self {
        match err {
            DocumentError::UnsupportedKey { path, found } => Self::UnsupportedType {
                path,
                reason: found,
            },
            DocumentError::UnsupportedNumber { path, value } => Self::UnsupportedType {
                path,
                reason: format!("non-finite number {value}"),
            },
            DocumentError::Io { source_name, error } => Self::Load {
                source_name,
                reason: error.to_string(),
            },
            DocumentError::Parse {
                source_name,
                format,
                reason,
            } => Self::Load {
                source_name,
                reason: format!("invalid {format}: {reason}"),
            },
        }
    }
}
