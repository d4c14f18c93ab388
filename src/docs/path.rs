// src/docs/path.rs
// =============================================================================
// Doc path handling.
//
// Two kinds of path flow through the docs pipeline:
// - Logical paths, as stored in the registry: "/docs/gsap/animation.md"
// - Relative references, as sent to the proxy: "gsap/animation.md"
//
// The proxy only ever touches the filesystem (or the upstream origin) with a
// RelativeDocPath, and the only way to get one is through `validate`, which
// rejects anything that could climb out of the documents root.
//
// Rust concepts:
// - Newtype pattern: RelativeDocPath can only be built by validation
// - thiserror: Describe each rejection reason as an enum variant
// =============================================================================

use std::fmt;
use thiserror::Error;

/// Why a requested relative path was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("path contains a parent-directory sequence")]
    Traversal,
    #[error("path is absolute")]
    Absolute,
    #[error("path contains an encoded separator or dot")]
    Encoded,
    #[error("path contains a backslash or NUL byte")]
    IllegalCharacter,
    #[error("path has an empty or '.' segment")]
    BadSegment,
}

/// A relative document path that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeDocPath(String);

impl RelativeDocPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments, all guaranteed to be plain names
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for RelativeDocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns a logical doc path into the relative reference sent to the proxy.
///
/// Everything after a "docs" segment is kept; without one, the last two
/// segments are used.
///
/// Examples:
///   "/docs/gsap/animation.md" -> "gsap/animation.md"
///   "static/threejs/basic-setup.md" -> "threejs/basic-setup.md"
pub fn relative_reference(logical_path: &str) -> String {
    let segments: Vec<&str> = logical_path.split('/').collect();

    match segments.iter().position(|segment| *segment == "docs") {
        Some(docs_index) => segments[docs_index + 1..].join("/"),
        None => segments[segments.len().saturating_sub(2)..].join("/"),
    }
}

/// Validates a relative path requested from the proxy.
///
/// The ".." check runs first so any traversal attempt is reported as such,
/// whatever else the path contains.
pub fn validate(file: &str) -> Result<RelativeDocPath, PathError> {
    if file.contains("..") {
        return Err(PathError::Traversal);
    }
    if file.is_empty() {
        return Err(PathError::Empty);
    }
    if file.contains('\\') || file.contains('\0') {
        return Err(PathError::IllegalCharacter);
    }
    if file.starts_with('/') {
        return Err(PathError::Absolute);
    }

    // The query string was already decoded once; anything still encoded here
    // was double-encoded on purpose
    let lowered = file.to_ascii_lowercase();
    if ["%2e", "%2f", "%5c", "%00"]
        .iter()
        .any(|encoded| lowered.contains(encoded))
    {
        return Err(PathError::Encoded);
    }

    if file
        .split('/')
        .any(|segment| segment.is_empty() || segment == ".")
    {
        return Err(PathError::BadSegment);
    }

    Ok(RelativeDocPath(file.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_reference_after_docs_segment() {
        assert_eq!(relative_reference("/docs/gsap/animation.md"), "gsap/animation.md");
        assert_eq!(
            relative_reference("https://example.com/docs/threejs/basic-setup.md"),
            "threejs/basic-setup.md"
        );
    }

    #[test]
    fn test_relative_reference_without_docs_segment() {
        assert_eq!(
            relative_reference("/static/threejs/basic-setup.md"),
            "threejs/basic-setup.md"
        );
        assert_eq!(relative_reference("animation.md"), "animation.md");
    }

    #[test]
    fn test_validate_accepts_plain_paths() {
        let path = validate("threejs/basic-setup.md").unwrap();
        assert_eq!(path.as_str(), "threejs/basic-setup.md");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["threejs", "basic-setup.md"]);
    }

    #[test]
    fn test_validate_rejects_any_dot_dot() {
        for file in ["../../etc/passwd", "gsap/../secret.md", "a..b.md", "/..", "..\\x"] {
            assert_eq!(validate(file), Err(PathError::Traversal), "{}", file);
        }
    }

    #[test]
    fn test_validate_rejects_other_escapes() {
        assert_eq!(validate(""), Err(PathError::Empty));
        assert_eq!(validate("/etc/passwd"), Err(PathError::Absolute));
        assert_eq!(validate("gsap\\animation.md"), Err(PathError::IllegalCharacter));
        assert_eq!(validate("%2E%2E/etc/passwd"), Err(PathError::Encoded));
        assert_eq!(validate("gsap%2fanimation.md"), Err(PathError::Encoded));
        assert_eq!(validate("gsap//animation.md"), Err(PathError::BadSegment));
        assert_eq!(validate("./gsap/animation.md"), Err(PathError::BadSegment));
        assert_eq!(validate("gsap/"), Err(PathError::BadSegment));
    }
}
