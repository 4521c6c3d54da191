//! # Document Tree
//!
//! The in-memory value a document is validated as. A closed sum type:
//! every value is a scalar, a string-keyed mapping, or a sequence, so
//! consumers match exhaustively and never meet an unclassifiable shape.
//!
//! Documents are produced from `serde_yaml` or `serde_json` value trees.
//! YAML is the richer source (tags, non-string keys, non-finite floats);
//! the conversion strips tags and rejects what has no document form.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_json::Number;

use crate::error::DocumentError;
use crate::path::DocPath;

/// A leaf value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The value as text: strings verbatim, other scalars through their
    /// display form (`42`, `true`, `null`).
    pub fn string_form(&self) -> Cow<'_, str> {
        match self {
            Self::String(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Bool(b) => Cow::Owned(b.to_string()),
            Self::Null => Cow::Borrowed("null"),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            other => f.write_str(&other.string_form()),
        }
    }
}

/// Shape of a [`Document`] value, without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Scalar,
    Mapping,
    Sequence,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scalar => "scalar",
            Self::Mapping => "mapping",
            Self::Sequence => "sequence",
        })
    }
}

/// A document tree.
///
/// Mappings are ordered by key so traversal, and therefore the first
/// violation a validator reports, is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Scalar(Scalar),
    Mapping(BTreeMap<String, Document>),
    Sequence(Vec<Document>),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Scalar(_) => DocumentKind::Scalar,
            Self::Mapping(_) => DocumentKind::Mapping,
            Self::Sequence(_) => DocumentKind::Sequence,
        }
    }

    /// Description used in error messages: the scalar type name, or
    /// `mapping` / `sequence`.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Scalar(s) => s.type_name(),
            Self::Mapping(_) => "mapping",
            Self::Sequence(_) => "sequence",
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Document>> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a key of a mapping document.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_mapping()?.get(key)
    }

    /// Convert a `serde_json::Value`. JSON values always have a
    /// document form, so this cannot fail.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Self::Scalar(Scalar::Bool(*b)),
            serde_json::Value::Number(n) => Self::Scalar(Scalar::Number(n.clone())),
            serde_json::Value::String(s) => Self::Scalar(Scalar::String(s.clone())),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(map) => Self::Mapping(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Convert a `serde_yaml::Value`.
    ///
    /// Merge keys (`<<: *anchor`) are resolved before conversion.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::UnsupportedKey` for mapping keys that are
    /// not strings, numbers or booleans, or that collide with another key
    /// once stringified, and `DocumentError::UnsupportedNumber` for NaN or
    /// infinite floats. A malformed merge is `DocumentError::Parse`.
    pub fn from_yaml(value: &serde_yaml::Value) -> Result<Self, DocumentError> {
        convert_yaml(value.clone(), "<value>")
    }

    /// Parse YAML text into a document.
    pub fn from_yaml_str(text: &str) -> Result<Self, DocumentError> {
        parse_yaml(text, "<string>")
    }

    /// Parse JSON text into a document.
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        parse_json(text, "<string>")
    }

    /// Read and parse a document file.
    ///
    /// The format is chosen from the extension: `.yaml` / `.yml` are read
    /// as YAML, everything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|error| DocumentError::Io {
            source_name: source_name.clone(),
            error,
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "yaml" | "yml" => parse_yaml(&content, &source_name),
            _ => parse_json(&content, &source_name),
        }
    }
}

impl From<Scalar> for Document {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&serde_json::Value> for Document {
    fn from(value: &serde_json::Value) -> Self {
        Self::from_json(value)
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        Self::from_json(&value)
    }
}

impl TryFrom<&serde_yaml::Value> for Document {
    type Error = DocumentError;

    fn try_from(value: &serde_yaml::Value) -> Result<Self, Self::Error> {
        Self::from_yaml(value)
    }
}

fn parse_yaml(text: &str, source_name: &str) -> Result<Document, DocumentError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| DocumentError::Parse {
            source_name: source_name.to_string(),
            format: "YAML",
            reason: e.to_string(),
        })?;
    convert_yaml(value, source_name)
}

fn convert_yaml(
    mut value: serde_yaml::Value,
    source_name: &str,
) -> Result<Document, DocumentError> {
    value.apply_merge().map_err(|e| DocumentError::Parse {
        source_name: source_name.to_string(),
        format: "YAML",
        reason: format!("invalid merge key: {e}"),
    })?;
    yaml_to_document(&value, &DocPath::root())
}

fn parse_json(text: &str, source_name: &str) -> Result<Document, DocumentError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| DocumentError::Parse {
            source_name: source_name.to_string(),
            format: "JSON",
            reason: e.to_string(),
        })?;
    Ok(Document::from_json(&value))
}

fn yaml_number(n: &serde_yaml::Number, path: &DocPath) -> Result<Number, DocumentError> {
    if let Some(i) = n.as_i64() {
        Ok(Number::from(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Number::from(u))
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .ok_or_else(|| DocumentError::UnsupportedNumber {
                path: path.to_string(),
                value: n.to_string(),
            })
    }
}

fn yaml_to_document(yaml: &serde_yaml::Value, path: &DocPath) -> Result<Document, DocumentError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Document::Scalar(Scalar::Null)),
        serde_yaml::Value::Bool(b) => Ok(Document::Scalar(Scalar::Bool(*b))),
        serde_yaml::Value::Number(n) => Ok(Document::Scalar(Scalar::Number(yaml_number(n, path)?))),
        serde_yaml::Value::String(s) => Ok(Document::Scalar(Scalar::String(s.clone()))),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .enumerate()
            .map(|(i, item)| yaml_to_document(item, &path.index(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Document::Sequence),
        serde_yaml::Value::Mapping(map) => {
            let mut out = BTreeMap::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    serde_yaml::Value::Tagged(tagged) => match &tagged.value {
                        serde_yaml::Value::String(s) => s.clone(),
                        other => return Err(unsupported_key(other, path)),
                    },
                    other => return Err(unsupported_key(other, path)),
                };
                let child = yaml_to_document(v, &path.key(&key))?;
                if out.contains_key(&key) {
                    return Err(DocumentError::UnsupportedKey {
                        path: path.to_string(),
                        found: format!("duplicate key '{key}' after stringification"),
                    });
                }
                out.insert(key, child);
            }
            Ok(Document::Mapping(out))
        }
        // Tags carry no meaning for validation; keep the inner value.
        serde_yaml::Value::Tagged(tagged) => yaml_to_document(&tagged.value, path),
    }
}

fn unsupported_key(key: &serde_yaml::Value, path: &DocPath) -> DocumentError {
    let found = match key {
        serde_yaml::Value::Null => "null key",
        serde_yaml::Value::Sequence(_) => "sequence key",
        serde_yaml::Value::Mapping(_) => "mapping key",
        _ => "tagged non-string key",
    };
    DocumentError::UnsupportedKey {
        path: path.to_string(),
        found: found.to_string(),
    }
}
