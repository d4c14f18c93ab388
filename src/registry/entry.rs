// src/registry/entry.rs
// =============================================================================
// The data types that describe one gallery example.
//
// - Category: which animation library an example belongs to
// - ExampleEntry: title, renderable unit, fallback prose and doc path
//
// Rust concepts:
// - Enums with FromStr/Display: Parse and print the category slugs
// - serde attributes: Control how the types look as JSON
// =============================================================================

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::scene::RenderUnit;
use super::RegistryError;

/// The animation library an example demonstrates.
///
/// The slugs ("threejs", "gsap", "framer-motion") are the same ones used in
/// URLs and in the docs tree (`docs/<category>/<name>.md`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "threejs")]
    ThreeJs,
    #[serde(rename = "gsap")]
    Gsap,
    #[serde(rename = "framer-motion")]
    FramerMotion,
}

impl Category {
    /// All categories in gallery order
    pub const ALL: [Category; 3] = [Category::ThreeJs, Category::Gsap, Category::FramerMotion];

    pub fn slug(self) -> &'static str {
        match self {
            Category::ThreeJs => "threejs",
            Category::Gsap => "gsap",
            Category::FramerMotion => "framer-motion",
        }
    }

    /// Human-readable library name shown in listings
    pub fn display_name(self) -> &'static str {
        match self {
            Category::ThreeJs => "Three.js",
            Category::Gsap => "GSAP",
            Category::FramerMotion => "Framer Motion",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::ThreeJs => "🧊",
            Category::Gsap => "✨",
            Category::FramerMotion => "🔄",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| RegistryError::UnknownCategory(s.to_string()))
    }
}

/// One example in the gallery.
///
/// Entries are declared once at startup and never mutated in place; see
/// `Registry::update_example` for the replace operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleEntry {
    /// Unique within its category (e.g. "basic-setup")
    pub id: String,
    pub title: String,
    /// The visual unit mounted for this example
    pub scene: RenderUnit,
    /// Fallback prose shown when the Markdown docs can't be loaded
    pub explanation: String,
    /// Logical path to the Markdown docs, e.g. "/docs/gsap/animation.md"
    #[serde(rename = "docPath", skip_serializing_if = "Option::is_none")]
    pub doc_path: Option<String>,
}

impl ExampleEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        scene: RenderUnit,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            scene,
            explanation: explanation.into(),
            doc_path: None,
        }
    }

    /// Builder-style setter for the Markdown doc path
    pub fn with_doc_path(mut self, doc_path: impl Into<String>) -> Self {
        self.doc_path = Some(doc_path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_slug() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let err = "pixi".parse::<Category>().unwrap_err();
        assert!(matches!(err, RegistryError::UnknownCategory(ref s) if s == "pixi"));
    }

    #[test]
    fn test_category_serializes_as_slug() {
        let json = serde_json::to_string(&Category::FramerMotion).unwrap();
        assert_eq!(json, "\"framer-motion\"");
    }
}
