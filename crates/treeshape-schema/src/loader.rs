//! # Schema Loading
//!
//! Reads a schema file, parses it with `serde_yaml` or `serde_json`, and
//! builds a [`Schema`]. Every failure (unreadable file, unparsable text,
//! malformed schema) is reported as `ValidationError::Load` naming the
//! source.

use std::path::Path;

use treeshape_core::Document;

use crate::config::ValidatorConfig;
use crate::error::ValidationError;
use crate::node::Schema;
use crate::validate::Validator;

/// Load a schema file and return a validator bound to it.
///
/// `.yaml` / `.yml` files are parsed as YAML, everything else as JSON.
///
/// # Errors
///
/// Returns `ValidationError::Load` if the file cannot be read or parsed,
/// or does not describe a valid schema.
pub fn load_schema(path: impl AsRef<Path>) -> Result<Validator, ValidationError> {
    load_schema_with_config(path, ValidatorConfig::default())
}

/// Load a schema file and return a validator with explicit config.
pub fn load_schema_with_config(
    path: impl AsRef<Path>,
    config: ValidatorConfig,
) -> Result<Validator, ValidationError> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let document = Document::load(path).map_err(|e| ValidationError::Load {
        source_name: source_name.clone(),
        reason: e.to_string(),
    })?;
    let schema = build_schema(&document, &source_name)?;

    tracing::debug!(
        path = %source_name,
        keys = schema.root().children().len(),
        "loaded schema"
    );
    Ok(Validator::new(schema).with_config(config))
}

impl Schema {
    /// Parse a schema from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ValidationError> {
        let document = Document::from_yaml_str(text).map_err(|e| ValidationError::Load {
            source_name: "<string>".to_string(),
            reason: e.to_string(),
        })?;
        build_schema(&document, "<string>")
    }

    /// Parse a schema from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ValidationError> {
        let document = Document::from_json_str(text).map_err(|e| ValidationError::Load {
            source_name: "<string>".to_string(),
            reason: e.to_string(),
        })?;
        build_schema(&document, "<string>")
    }
}

fn build_schema(document: &Document, source_name: &str) -> Result<Schema, ValidationError> {
    Schema::from_document(document).map_err(|reason| ValidationError::Load {
        source_name: source_name.to_string(),
        reason,
    })
}
