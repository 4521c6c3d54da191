//! # treeshape-core — Document Tree for treeshape
//!
//! Defines the value type every treeshape document is validated as, and
//! the conversions that produce it from parser output.
//!
//! ## Key Design Principles
//!
//! 1. **Closed document type.** [`Document`] is a scalar, a mapping or a
//!    sequence. Consumers match exhaustively; there is no "unknown shape".
//!
//! 2. **Parsers are collaborators.** YAML and JSON parsing is delegated to
//!    `serde_yaml` and `serde_json`; this crate only converts their trees.
//!
//! 3. **Paths in errors.** Shape problems are reported with a [`DocPath`]
//!    pointing at the offending value.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `treeshape-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod path;

pub use document::{Document, DocumentKind, Scalar};
pub use error::DocumentError;
pub use path::{DocPath, PathSegment};
