//! # treeshape-schema — Schema Loading & Structural Validation
//!
//! Validates YAML/JSON document trees against a declarative schema that
//! mirrors the expected document shape.
//!
//! ## Schema language
//!
//! Each key a document may hold has a schema node with optional
//! directives:
//!
//! - `IsArray: bool` — the value must (or must not) be a sequence.
//! - `Type: int` — the value must be a number.
//! - `Type: KeyValuePairs` — the value is free-form; its keys are not
//!   checked and validation does not descend into it.
//! - `Regex: <pattern>` — the value's string form must match.
//! - `Mandatory: bool` — the key must be present at its level.
//!
//! Any other key of a node declares a child. A document key with no node
//! at its level is always rejected.
//!
//! ## Entry points
//!
//! - [`load_schema`] — read a schema file into a bound [`Validator`].
//! - [`Validator::validate`] — validate a [`Document`](treeshape_core::Document).
//!
//! ## Crate Policy
//!
//! - Depends only on `treeshape-core` internally.
//! - Validation is all-or-nothing: the first violation is returned with the
//!   document path of the offending value, and nothing is aggregated.
//! - Regexes are compiled once, when the schema is built.

pub mod config;
pub mod error;
pub mod loader;
pub mod node;
pub mod validate;

pub use config::{RegexScalarPolicy, ValidatorConfig};
pub use error::{ValidationError, ValidationErrorKind};
pub use loader::{load_schema, load_schema_with_config};
pub use node::{Pattern, Schema, SchemaNode, ValueType};
pub use validate::Validator;
