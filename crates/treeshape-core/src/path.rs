//! # Document Paths
//!
//! Locates a value inside a document tree for error reporting. Paths
//! render in JSON Pointer style (`/spec/containers/0/name`); the empty
//! path renders as `(root)`.

use std::fmt;

/// One step from a container to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Mapping key.
    Key(String),
    /// Sequence index.
    Index(usize),
}

/// Path from the document root to a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DocPath {
    segments: Vec<PathSegment>,
}

impl DocPath {
    /// The empty path (document root).
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path extended by a mapping key.
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self { segments }
    }

    /// Returns a new path extended by a sequence index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Number of segments; also the nesting depth of the addressed value.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "(root)");
        }
        for segment in &self.segments {
            match segment {
                // RFC 6901 escaping for keys containing '~' or '/'.
                PathSegment::Key(k) => write!(f, "/{}", k.replace('~', "~0").replace('/', "~1"))?,
                PathSegment::Index(i) => write!(f, "/{i}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_display() {
        assert_eq!(DocPath::root().to_string(), "(root)");
        assert!(DocPath::root().is_root());
    }

    #[test]
    fn test_nested_display() {
        let path = DocPath::root().key("spec").key("containers").index(0).key("name");
        assert_eq!(path.to_string(), "/spec/containers/0/name");
        assert_eq!(path.depth(), 4);
    }

    #[test]
    fn test_key_escaping() {
        let path = DocPath::root().key("a/b").key("c~d");
        assert_eq!(path.to_string(), "/a~1b/c~0d");
    }

    #[test]
    fn test_extension_does_not_mutate_parent() {
        let parent = DocPath::root().key("spec");
        let child = parent.index(3);
        assert_eq!(parent.depth(), 1);
        assert_eq!(child.segments()[1], PathSegment::Index(3));
    }
}
