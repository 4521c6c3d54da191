//! # Structural Validation
//!
//! Walks a document depth-first in lock-step with its schema. At every
//! mapping level each key must be declared by the schema, its value must
//! satisfy the declared directives, and every mandatory key must be
//! present. Validation stops descending at scalars and at
//! `Type: KeyValuePairs` nodes, whose contents are free-form.
//!
//! ## Traversal
//!
//! - Mapping: each key is checked against its node, then the value is
//!   descended into with that node. After all keys, mandatory keys of the
//!   level are checked.
//! - Sequence value: every element is checked against the node of the
//!   field holding the sequence. Scalar elements are leaves checked
//!   against `Type` and `Regex`; mapping elements are descended into.
//! - Sequence document: every element is validated as a container against
//!   the same node.
//!
//! The first violation aborts the walk and is returned as is. Mapping
//! keys are visited in sorted order, so the violation reported for a given
//! document and schema never changes between runs.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use treeshape_core::{DocPath, Document, Scalar};

use crate::config::{RegexScalarPolicy, ValidatorConfig};
use crate::error::ValidationError;
use crate::node::{Schema, SchemaNode, ValueType};

/// A validator bound to a schema.
///
/// The schema is shared behind an `Arc` and never mutated, so a
/// `Validator` is cheap to clone and `Send + Sync`; concurrent calls to
/// [`validate`](Self::validate) need no coordination.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    schema: Option<Arc<Schema>>,
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator bound to `schema` with default configuration.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema: Some(Arc::new(schema)),
            config: ValidatorConfig::default(),
        }
    }

    /// Create a validator with no schema. [`validate`](Self::validate)
    /// fails with `SchemaNotLoaded` until one is bound.
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Load a schema file and bind it. See [`crate::load_schema`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        crate::loader::load_schema(path)
    }

    /// Replace the validator's configuration.
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Bind (or replace) the schema.
    pub fn bind(&mut self, schema: Schema) {
        self.schema = Some(Arc::new(schema));
    }

    /// The bound schema, if any.
    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_deref()
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a document against the bound schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaNotLoaded` if no schema is bound, `TypeMismatch` if
    /// the document is a scalar, and otherwise the first violation found.
    pub fn validate(&self, document: &Document) -> Result<(), ValidationError> {
        let schema = self.bound_schema()?;
        self.validate_with(document, schema.root())
    }

    /// Validate a document against an explicit schema node instead of the
    /// bound root. Does not require a bound schema.
    pub fn validate_with(
        &self,
        document: &Document,
        node: &SchemaNode,
    ) -> Result<(), ValidationError> {
        self.check_container(document, node, &DocPath::root())
    }

    /// Convert a YAML value tree and validate it.
    ///
    /// Values with no document form (non-string keys, non-finite numbers)
    /// fail with `UnsupportedType`.
    pub fn validate_yaml(&self, value: &serde_yaml::Value) -> Result<(), ValidationError> {
        let schema = self.bound_schema()?;
        let document = Document::from_yaml(value).map_err(ValidationError::from_document)?;
        self.validate_with(&document, schema.root())
    }

    /// Convert a JSON value tree and validate it.
    pub fn validate_json(&self, value: &serde_json::Value) -> Result<(), ValidationError> {
        self.validate(&Document::from_json(value))
    }

    /// Read a YAML or JSON document file and validate it.
    ///
    /// # Errors
    ///
    /// Returns `Load` if the file cannot be read or parsed, otherwise as
    /// [`validate`](Self::validate).
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<(), ValidationError> {
        let schema = self.bound_schema()?;
        let document = Document::load(path).map_err(ValidationError::from_document)?;
        self.validate_with(&document, schema.root())
    }

    /// Check one key/value pair of a mapping against the schema level that
    /// holds the mapping's keys.
    ///
    /// Does not descend into `value`.
    pub fn validate_node(
        &self,
        key: &str,
        value: &Document,
        level: &SchemaNode,
    ) -> Result<(), ValidationError> {
        self.check_node(key, value, level, &DocPath::root()).map(|_| ())
    }

    /// Check that every mandatory key of `level` is present in `mapping`.
    pub fn validate_mandatory(
        &self,
        mapping: &BTreeMap<String, Document>,
        level: &SchemaNode,
    ) -> Result<(), ValidationError> {
        check_mandatory(mapping, level, &DocPath::root())
    }

    fn bound_schema(&self) -> Result<&Schema, ValidationError> {
        self.schema.as_deref().ok_or(ValidationError::SchemaNotLoaded)
    }

    fn check_depth(&self, path: &DocPath) -> Result<(), ValidationError> {
        if path.depth() > self.config.max_depth {
            return Err(ValidationError::DepthExceeded {
                path: path.to_string(),
                max_depth: self.config.max_depth,
            });
        }
        Ok(())
    }

    fn check_container(
        &self,
        document: &Document,
        node: &SchemaNode,
        path: &DocPath,
    ) -> Result<(), ValidationError> {
        self.check_depth(path)?;
        match document {
            Document::Scalar(scalar) => Err(ValidationError::TypeMismatch {
                path: path.to_string(),
                expected: "mapping or sequence".to_string(),
                found: scalar.type_name().to_string(),
            }),
            Document::Mapping(mapping) => self.check_mapping(mapping, node, path),
            Document::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    tracing::trace!(path = %path, index = i, "validating sequence element");
                    self.check_container(item, node, &path.index(i))?;
                }
                Ok(())
            }
        }
    }

    fn check_mapping(
        &self,
        mapping: &BTreeMap<String, Document>,
        level: &SchemaNode,
        path: &DocPath,
    ) -> Result<(), ValidationError> {
        for (key, value) in mapping {
            tracing::trace!(path = %path, key = %key, "validating key");
            let node = self.check_node(key, value, level, path)?;
            let value_path = path.key(key);

            match value {
                Document::Scalar(_) => {
                    tracing::debug!(path = %value_path, "stop nesting: scalar");
                }
                Document::Mapping(_) if node.is_key_value_pairs() => {
                    tracing::debug!(path = %value_path, "stop nesting: KeyValuePairs");
                }
                Document::Mapping(_) => self.check_container(value, node, &value_path)?,
                Document::Sequence(items) => self.check_elements(key, items, node, &value_path)?,
            }
        }

        check_mandatory(mapping, level, path)
    }

    /// Elements of a sequence held by `key`, all checked against `node`.
    fn check_elements(
        &self,
        key: &str,
        items: &[Document],
        node: &SchemaNode,
        path: &DocPath,
    ) -> Result<(), ValidationError> {
        self.check_depth(path)?;
        for (i, item) in items.iter().enumerate() {
            let item_path = path.index(i);
            tracing::trace!(path = %item_path, "validating sequence element");
            match item {
                Document::Scalar(scalar) => self.check_scalar(key, scalar, node, &item_path)?,
                Document::Mapping(_) => {
                    check_structured(item, node, &item_path)?;
                    if node.is_key_value_pairs() {
                        tracing::debug!(path = %item_path, "stop nesting: KeyValuePairs");
                    } else {
                        self.check_container(item, node, &item_path)?;
                    }
                }
                Document::Sequence(inner) => self.check_elements(key, inner, node, &item_path)?,
            }
        }
        Ok(())
    }

    /// Checks `key` is declared at `level` and its value satisfies the
    /// node's directives. Returns the node for descending.
    fn check_node<'s>(
        &self,
        key: &str,
        value: &Document,
        level: &'s SchemaNode,
        path: &DocPath,
    ) -> Result<&'s SchemaNode, ValidationError> {
        let node = level
            .get_child(key)
            .ok_or_else(|| ValidationError::UnexpectedKey {
                path: path.to_string(),
                key: key.to_string(),
            })?;
        let value_path = path.key(key);

        if let Some(expected_array) = node.is_array() {
            if expected_array != value.is_sequence() {
                return Err(ValidationError::ArrayMismatch {
                    path: value_path.to_string(),
                    key: key.to_string(),
                    expected_array,
                });
            }
        }

        match value {
            Document::Scalar(scalar) => self.check_scalar(key, scalar, node, &value_path)?,
            Document::Mapping(_) => check_structured(value, node, &value_path)?,
            // Type and Regex apply to the elements.
            Document::Sequence(_) => {}
        }

        Ok(node)
    }

    fn check_scalar(
        &self,
        key: &str,
        scalar: &Scalar,
        node: &SchemaNode,
        path: &DocPath,
    ) -> Result<(), ValidationError> {
        if node.get_value_type() == Some(ValueType::Int) && !scalar.is_number() {
            return Err(ValidationError::TypeMismatch {
                path: path.to_string(),
                expected: format!("number for key '{key}'"),
                found: scalar.type_name().to_string(),
            });
        }

        if let Some(pattern) = node.pattern() {
            let text = match (scalar, self.config.regex_scalars) {
                (Scalar::String(s), _) => Cow::Borrowed(s.as_str()),
                (other, RegexScalarPolicy::Coerce) => other.string_form(),
                (other, RegexScalarPolicy::StringsOnly) => {
                    return Err(ValidationError::TypeMismatch {
                        path: path.to_string(),
                        expected: format!("string for key '{key}'"),
                        found: other.type_name().to_string(),
                    })
                }
            };
            if !pattern.is_match(&text) {
                return Err(ValidationError::RegexMismatch {
                    path: path.to_string(),
                    key: key.to_string(),
                    pattern: pattern.as_str().to_string(),
                    value: text.into_owned(),
                });
            }
        }

        Ok(())
    }
}

/// `Type: int` and `Regex` describe scalars; a mapping under either is a
/// type mismatch.
fn check_structured(
    value: &Document,
    node: &SchemaNode,
    path: &DocPath,
) -> Result<(), ValidationError> {
    let expected = if node.get_value_type() == Some(ValueType::Int) {
        "number"
    } else if node.pattern().is_some() {
        "string"
    } else {
        return Ok(());
    };
    Err(ValidationError::TypeMismatch {
        path: path.to_string(),
        expected: expected.to_string(),
        found: value.describe().to_string(),
    })
}

fn check_mandatory(
    mapping: &BTreeMap<String, Document>,
    level: &SchemaNode,
    path: &DocPath,
) -> Result<(), ValidationError> {
    for (name, node) in level.children() {
        if node.is_mandatory() && !mapping.contains_key(name) {
            return Err(ValidationError::MissingMandatoryKey {
                path: path.to_string(),
                key: name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;
    use serde_json::json;

    fn validator(schema: serde_json::Value) -> Validator {
        let schema = Schema::from_document(&Document::from_json(&schema)).unwrap();
        Validator::new(schema)
    }

    fn example_validator() -> Validator {
        validator(json!({
            "name": {"Mandatory": true},
            "age": {"Type": "int"},
            "tags": {"IsArray": true}
        }))
    }

    fn kind_of(v: &Validator, doc: serde_json::Value) -> ValidationErrorKind {
        v.validate_json(&doc).unwrap_err().kind()
    }

    #[test]
    fn test_example_document_is_valid() {
        let v = example_validator();
        v.validate_json(&json!({"name": "x", "age": 5, "tags": ["a", "b"]}))
            .unwrap();
    }

    #[test]
    fn test_example_missing_mandatory_name() {
        let v = example_validator();
        let err = v.validate_json(&json!({"age": 5, "tags": ["a"]})).unwrap_err();
        match &err {
            ValidationError::MissingMandatoryKey { key, path } => {
                assert_eq!(key, "name");
                assert_eq!(path, "(root)");
            }
            other => panic!("Expected MissingMandatoryKey, got: {other}"),
        }
    }

    #[test]
    fn test_example_age_not_int() {
        let v = example_validator();
        let err = v.validate_json(&json!({"name": "x", "age": "old"})).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::TypeMismatch);
        assert_eq!(err.path(), Some("/age"));
    }

    #[test]
    fn test_unbound_validator_fails() {
        let v = Validator::unbound();
        assert!(matches!(
            v.validate(&Document::from_json(&json!({}))),
            Err(ValidationError::SchemaNotLoaded)
        ));
    }

    #[test]
    fn test_bind_after_construction() {
        let mut v = Validator::unbound();
        assert!(v.schema().is_none());
        v.bind(Schema::new(SchemaNode::new().child("a", SchemaNode::new())));
        v.validate_json(&json!({"a": 1})).unwrap();
    }

    #[test]
    fn test_validate_with_does_not_need_bound_schema() {
        let v = Validator::unbound();
        let node = SchemaNode::new().child("a", SchemaNode::new());
        v.validate_with(&Document::from_json(&json!({"a": 1})), &node)
            .unwrap();
    }

    #[test]
    fn test_scalar_document_rejected() {
        let v = example_validator();
        assert_eq!(kind_of(&v, json!("just a string")), ValidationErrorKind::TypeMismatch);
        assert_eq!(kind_of(&v, json!(42)), ValidationErrorKind::TypeMismatch);
    }

    #[test]
    fn test_unexpected_key_named() {
        let v = example_validator();
        let err = v
            .validate_json(&json!({"name": "x", "colour": "red"}))
            .unwrap_err();
        match err {
            ValidationError::UnexpectedKey { key, .. } => assert_eq!(key, "colour"),
            other => panic!("Expected UnexpectedKey, got: {other}"),
        }
    }

    #[test]
    fn test_unexpected_nested_key_has_path() {
        let v = validator(json!({"spec": {"image": {}}}));
        let err = v
            .validate_json(&json!({"spec": {"image": "nginx", "replicas": 3}}))
            .unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::UnexpectedKey);
        assert_eq!(err.path(), Some("/spec"));
    }

    #[test]
    fn test_is_array_true_rejects_scalar_and_mapping() {
        let v = example_validator();
        assert_eq!(
            kind_of(&v, json!({"name": "x", "tags": "a"})),
            ValidationErrorKind::ArrayMismatch
        );
        assert_eq!(
            kind_of(&v, json!({"name": "x", "tags": {}})),
            ValidationErrorKind::ArrayMismatch
        );
    }

    #[test]
    fn test_is_array_false_rejects_sequence() {
        let v = validator(json!({"name": {"IsArray": false}}));
        assert_eq!(kind_of(&v, json!({"name": ["x"]})), ValidationErrorKind::ArrayMismatch);
        v.validate_json(&json!({"name": "x"})).unwrap();
    }

    #[test]
    fn test_array_elements_use_field_node() {
        let v = validator(json!({
            "containers": {
                "IsArray": true,
                "name": {"Mandatory": true},
                "image": {}
            }
        }));
        v.validate_json(&json!({
            "containers": [{"name": "a", "image": "x"}, {"name": "b"}]
        }))
        .unwrap();

        let err = v
            .validate_json(&json!({
                "containers": [{"name": "a"}, {"image": "x"}]
            }))
            .unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MissingMandatoryKey);
        assert_eq!(err.path(), Some("/containers/1"));
    }

    #[test]
    fn test_one_bad_element_fails_whole_document() {
        let v = validator(json!({"ports": {"IsArray": true, "Type": "int"}}));
        v.validate_json(&json!({"ports": [80, 443]})).unwrap();
        let err = v.validate_json(&json!({"ports": [80, "http", 443]})).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::TypeMismatch);
        assert_eq!(err.path(), Some("/ports/1"));
    }

    #[test]
    fn test_nested_sequences_share_node() {
        let v = validator(json!({"grid": {"IsArray": true, "Type": "int"}}));
        v.validate_json(&json!({"grid": [[1, 2], [3]]})).unwrap();
        let err = v.validate_json(&json!({"grid": [[1], ["x"]]})).unwrap_err();
        assert_eq!(err.path(), Some("/grid/1/0"));
    }

    #[test]
    fn test_int_type() {
        let v = validator(json!({"age": {"Type": "int"}}));
        v.validate_json(&json!({"age": 42})).unwrap();
        v.validate_json(&json!({"age": 4.5})).unwrap();
        assert_eq!(kind_of(&v, json!({"age": "abc"})), ValidationErrorKind::TypeMismatch);
        assert_eq!(kind_of(&v, json!({"age": true})), ValidationErrorKind::TypeMismatch);
        assert_eq!(kind_of(&v, json!({"age": {}})), ValidationErrorKind::TypeMismatch);
    }

    #[test]
    fn test_regex() {
        let v = validator(json!({"name": {"Regex": "^[a-z]+$"}}));
        v.validate_json(&json!({"name": "abc"})).unwrap();
        let err = v.validate_json(&json!({"name": "ABC"})).unwrap_err();
        match err {
            ValidationError::RegexMismatch { key, pattern, value, .. } => {
                assert_eq!(key, "name");
                assert_eq!(pattern, "^[a-z]+$");
                assert_eq!(value, "ABC");
            }
            other => panic!("Expected RegexMismatch, got: {other}"),
        }
    }

    #[test]
    fn test_regex_applies_to_sequence_elements() {
        let v = validator(json!({"tags": {"IsArray": true, "Regex": "^[a-z]+$"}}));
        v.validate_json(&json!({"tags": ["a", "b"]})).unwrap();
        let err = v.validate_json(&json!({"tags": ["a", "B"]})).unwrap_err();
        match &err {
            ValidationError::RegexMismatch { path, key, value, .. } => {
                assert_eq!(path, "/tags/1");
                assert_eq!(key, "tags");
                assert_eq!(value, "B");
            }
            other => panic!("Expected RegexMismatch, got: {other}"),
        }
    }

    #[test]
    fn test_regex_coerces_non_strings_by_default() {
        let v = validator(json!({"code": {"Regex": "^[0-9]{3}$"}}));
        v.validate_json(&json!({"code": 404})).unwrap();
        assert_eq!(kind_of(&v, json!({"code": 4040})), ValidationErrorKind::RegexMismatch);
        assert_eq!(kind_of(&v, json!({"code": true})), ValidationErrorKind::RegexMismatch);
    }

    #[test]
    fn test_regex_strings_only_policy() {
        let v = validator(json!({"code": {"Regex": "^[0-9]{3}$"}})).with_config(ValidatorConfig {
            regex_scalars: RegexScalarPolicy::StringsOnly,
            ..ValidatorConfig::default()
        });
        v.validate_json(&json!({"code": "404"})).unwrap();
        assert_eq!(kind_of(&v, json!({"code": 404})), ValidationErrorKind::TypeMismatch);
    }

    #[test]
    fn test_regex_on_mapping_is_type_mismatch() {
        let v = validator(json!({"name": {"Regex": "^a$"}}));
        assert_eq!(kind_of(&v, json!({"name": {}})), ValidationErrorKind::TypeMismatch);
    }

    #[test]
    fn test_key_value_pairs_stops_recursion() {
        let v = validator(json!({
            "labels": {"Type": "KeyValuePairs", "known": {"Mandatory": true}}
        }));
        v.validate_json(&json!({
            "labels": {"anything": "goes", "nested": {"deep": [1, 2]}}
        }))
        .unwrap();
    }

    #[test]
    fn test_key_value_pairs_elements_stop_recursion() {
        let v = validator(json!({"env": {"IsArray": true, "Type": "KeyValuePairs"}}));
        v.validate_json(&json!({"env": [{"A": "1"}, {"B": "2", "C": {"x": 1}}]}))
            .unwrap();
    }

    #[test]
    fn test_key_value_pairs_node_itself_still_checked() {
        let v = validator(json!({"labels": {"Type": "KeyValuePairs", "IsArray": false}}));
        assert_eq!(kind_of(&v, json!({"labels": [{"a": 1}]})), ValidationErrorKind::ArrayMismatch);
        assert_eq!(kind_of(&v, json!({"other": {}})), ValidationErrorKind::UnexpectedKey);
    }

    #[test]
    fn test_mandatory_checked_only_at_declaring_level() {
        let v = validator(json!({
            "spec": {"image": {"Mandatory": true}}
        }));
        // Absent parent: the nested mandatory key is not pre-checked.
        v.validate_json(&json!({})).unwrap();
        assert_eq!(kind_of(&v, json!({"spec": {}})), ValidationErrorKind::MissingMandatoryKey);
        v.validate_json(&json!({"spec": {"image": "nginx"}})).unwrap();
    }

    #[test]
    fn test_top_level_sequence_uses_root_for_each_element() {
        let v = example_validator();
        v.validate_json(&json!([{"name": "a"}, {"name": "b", "age": 1}]))
            .unwrap();
        assert_eq!(
            kind_of(&v, json!([{"name": "a"}, {"age": 1}])),
            ValidationErrorKind::MissingMandatoryKey
        );
        assert_eq!(kind_of(&v, json!([{"name": "a"}, "b"])), ValidationErrorKind::TypeMismatch);
    }

    #[test]
    fn test_validate_node_does_not_descend() {
        let v = Validator::unbound();
        let level = SchemaNode::new().child("spec", SchemaNode::new());
        let value = Document::from_json(&json!({"undeclared": 1}));
        v.validate_node("spec", &value, &level).unwrap();
        let err = v.validate_node("other", &value, &level).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::UnexpectedKey);
    }

    #[test]
    fn test_validate_mandatory_presence_only() {
        let v = Validator::unbound();
        let level = SchemaNode::new().child(
            "name",
            SchemaNode::new().mandatory(true).value_type(ValueType::Int),
        );
        let doc = Document::from_json(&json!({"name": "not a number"}));
        v.validate_mandatory(doc.as_mapping().unwrap(), &level).unwrap();
        let empty = BTreeMap::new();
        assert_eq!(
            v.validate_mandatory(&empty, &level).unwrap_err().kind(),
            ValidationErrorKind::MissingMandatoryKey
        );
    }

    #[test]
    fn test_depth_limit() {
        let v = validator(json!({"a": {"a": {"a": {}}}})).with_config(ValidatorConfig {
            max_depth: 2,
            ..ValidatorConfig::default()
        });
        v.validate_json(&json!({"a": {"a": {}}})).unwrap();
        assert_eq!(kind_of(&v, json!({"a": {"a": {"a": {}}}})), ValidationErrorKind::DepthExceeded);
    }

    #[test]
    fn test_validate_yaml_rejects_unsupported_key() {
        let v = example_validator();
        let value: serde_yaml::Value = serde_yaml::from_str("? [a, b]\n: 1\n").unwrap();
        assert_eq!(
            v.validate_yaml(&value).unwrap_err().kind(),
            ValidationErrorKind::UnsupportedType
        );
    }

    #[test]
    fn test_validate_yaml_accepts_plain_document() {
        let v = example_validator();
        let value: serde_yaml::Value =
            serde_yaml::from_str("name: x\nage: 5\ntags: [a, b]\n").unwrap();
        v.validate_yaml(&value).unwrap();
    }

    #[test]
    fn test_validate_yaml_resolves_merge_keys() {
        let v = validator(json!({
            "base": {"name": {"Mandatory": true}, "image": null}
        }));
        let value: serde_yaml::Value =
            serde_yaml::from_str("base:\n  <<: {name: a}\n  image: x\n").unwrap();
        v.validate_yaml(&value).unwrap();
    }

    #[test]
    fn test_validate_yaml_rejects_colliding_keys() {
        let v = validator(json!({"1": {"Type": "int"}}));
        let value: serde_yaml::Value = serde_yaml::from_str("1: notanumber\n\"1\": 5\n").unwrap();
        let err = v.validate_yaml(&value).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::UnsupportedType);
        assert!(err.to_string().contains("duplicate key '1'"), "got: {err}");
    }

    #[test]
    fn test_first_violation_is_deterministic() {
        let v = example_validator();
        let doc = json!({"zeta": 1, "alpha": 2, "name": "x"});
        let first = v.validate_json(&doc).unwrap_err().to_string();
        for _ in 0..5 {
            assert_eq!(v.validate_json(&doc).unwrap_err().to_string(), first);
        }
        // Keys are visited in sorted order.
        assert!(first.contains("'alpha'"), "got: {first}");
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
    }
}
