//! # Schema Tree
//!
//! A schema mirrors the shape of the documents it accepts. Each key a
//! document may hold at a level has a [`SchemaNode`] carrying the rules for
//! that key's value plus the nodes for its own children.
//!
//! ## Serialized form
//!
//! In a schema file a node is a mapping. The reserved keys `IsArray`,
//! `Type`, `Regex` and `Mandatory` (or their prefixed spellings
//! `SchemaIsArray`, `SchemaType`, `SchemaRegex`, `SchemaMandatory`) are
//! directives; every other key is a child node:
//!
//! ```yaml
//! name:
//!   Mandatory: true
//!   Regex: "^[a-z]+$"
//! ports:
//!   IsArray: true
//!   Type: int
//! labels:
//!   Type: KeyValuePairs
//! ```
//!
//! Once parsed, directives are typed fields and children live in their own
//! map, so a document key can never be mistaken for a directive.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use treeshape_core::{DocPath, Document, Scalar};

/// Value type named by a `Type` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// The value must be a number.
    Int,
    /// The value is a free-form mapping; its keys are not checked and
    /// validation does not descend into it.
    KeyValuePairs,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::KeyValuePairs => "KeyValuePairs",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Self::Int),
            "KeyValuePairs" => Ok(Self::KeyValuePairs),
            other => Err(format!(
                "unknown Type '{other}' (expected 'int' or 'KeyValuePairs')"
            )),
        }
    }
}

/// A `Regex` directive, compiled once when the schema is built.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(source)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Rules for one key, plus the nodes for that key's children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    is_array: Option<bool>,
    value_type: Option<ValueType>,
    regex: Option<Pattern>,
    mandatory: bool,
    children: BTreeMap<String, SchemaNode>,
}

impl SchemaNode {
    /// A node with no directives and no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `IsArray` directive.
    pub fn array(mut self, is_array: bool) -> Self {
        self.is_array = Some(is_array);
        self
    }

    /// Set the `Type` directive.
    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }

    /// Set the `Regex` directive.
    ///
    /// # Errors
    ///
    /// Returns the compile error if `pattern` is not a valid regex.
    pub fn regex(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.regex = Some(Pattern::new(pattern)?);
        Ok(self)
    }

    /// Set the `Mandatory` directive.
    pub fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Add (or replace) a child node.
    pub fn child(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.children.insert(name.into(), node);
        self
    }

    /// The `IsArray` directive, if declared.
    pub fn is_array(&self) -> Option<bool> {
        self.is_array
    }

    /// The `Type` directive, if declared.
    pub fn get_value_type(&self) -> Option<ValueType> {
        self.value_type
    }

    /// The compiled `Regex` directive, if declared.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.regex.as_ref()
    }

    /// The `Mandatory` directive; absent means `false`.
    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// True for a `Type: KeyValuePairs` node.
    pub fn is_key_value_pairs(&self) -> bool {
        self.value_type == Some(ValueType::KeyValuePairs)
    }

    /// Child nodes keyed by field name, in sorted order.
    pub fn children(&self) -> &BTreeMap<String, SchemaNode> {
        &self.children
    }

    /// Look up a single child node.
    pub fn get_child(&self, name: &str) -> Option<&SchemaNode> {
        self.children.get(name)
    }

    fn has_directives(&self) -> bool {
        self.is_array.is_some()
            || self.value_type.is_some()
            || self.regex.is_some()
            || self.mandatory
    }

    /// Build a node from its serialized form.
    ///
    /// `Null` is accepted as a node with no rules (`tags:` in YAML).
    pub fn from_document(doc: &Document) -> Result<Self, String> {
        parse_node(doc, &DocPath::root())
    }
}

/// A complete schema: the node for the document root.
///
/// The root has children only. Directives set on it through
/// [`Schema::new`] are never consulted, because a node's directives are
/// read by its parent level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    root: SchemaNode,
}

impl Schema {
    pub fn new(root: SchemaNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    /// Build a schema from a parsed schema file.
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found: a root that is
    /// not a mapping, a directive on the root, a directive of the wrong
    /// type, an unknown `Type`, a regex that does not compile, or a child
    /// that is neither a mapping nor null.
    pub fn from_document(doc: &Document) -> Result<Self, String> {
        if !matches!(doc, Document::Mapping(_)) {
            return Err(format!(
                "schema root must be a mapping, found {}",
                doc.describe()
            ));
        }
        let root = parse_node(doc, &DocPath::root())?;
        if root.has_directives() {
            return Err("directives are not allowed on the schema root".to_string());
        }
        Ok(Self { root })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    IsArray,
    Type,
    Regex,
    Mandatory,
}

impl Directive {
    fn from_key(key: &str) -> Option<Self> {
        match key.strip_prefix("Schema").unwrap_or(key) {
            "IsArray" => Some(Self::IsArray),
            "Type" => Some(Self::Type),
            "Regex" => Some(Self::Regex),
            "Mandatory" => Some(Self::Mandatory),
            _ => None,
        }
    }
}

fn parse_node(doc: &Document, path: &DocPath) -> Result<SchemaNode, String> {
    let map = match doc {
        Document::Mapping(map) => map,
        Document::Scalar(Scalar::Null) => return Ok(SchemaNode::new()),
        other => {
            return Err(format!(
                "schema node at {path} must be a mapping, found {}",
                other.describe()
            ))
        }
    };

    let mut node = SchemaNode::new();
    let mut seen: Vec<(Directive, &str)> = Vec::new();
    for (key, value) in map {
        let key_path = path.key(key);
        let directive = Directive::from_key(key);
        if let Some(directive) = directive {
            if let Some((_, first)) = seen.iter().find(|(d, _)| *d == directive) {
                return Err(format!(
                    "{key_path}: duplicate directive, already given as '{first}'"
                ));
            }
            seen.push((directive, key.as_str()));
        }
        match directive {
            Some(Directive::IsArray) => node.is_array = Some(expect_bool(value, &key_path)?),
            Some(Directive::Mandatory) => node.mandatory = expect_bool(value, &key_path)?,
            Some(Directive::Type) => {
                let name = expect_str(value, &key_path)?;
                let value_type = name
                    .parse::<ValueType>()
                    .map_err(|e| format!("{key_path}: {e}"))?;
                node.value_type = Some(value_type);
            }
            Some(Directive::Regex) => {
                let source = expect_str(value, &key_path)?;
                let pattern = Pattern::new(source)
                    .map_err(|e| format!("{key_path}: invalid regex: {e}"))?;
                node.regex = Some(pattern);
            }
            None => {
                let child = parse_node(value, &key_path)?;
                node.children.insert(key.clone(), child);
            }
        }
    }
    Ok(node)
}

fn expect_bool(value: &Document, path: &DocPath) -> Result<bool, String> {
    match value {
        Document::Scalar(Scalar::Bool(b)) => Ok(*b),
        other => Err(format!("{path}: expected a boolean, found {}", other.describe())),
    }
}

fn expect_str<'a>(value: &'a Document, path: &DocPath) -> Result<&'a str, String> {
    match value {
        Document::Scalar(Scalar::String(s)) => Ok(s),
        other => Err(format!("{path}: expected a string, found {}", other.describe())),
    }
}
