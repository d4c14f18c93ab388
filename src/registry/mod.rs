// src/registry/mod.rs
// =============================================================================
// The example registry: category + id -> example metadata.
//
// The registry is a plain immutable value. It is built once at startup
// (`Registry::builtin()`), shared behind an Arc, and handed to whatever needs
// lookups. "Updating" an example produces a new snapshot and leaves the old
// one untouched, so readers holding the old snapshot never see a half-made
// change.
//
// Submodules:
// - entry: Category and ExampleEntry types
// - scene: the compile-time set of renderable units
// - catalog: the static example declarations
// =============================================================================

mod catalog;
mod entry;
mod scene;

pub use entry::{Category, ExampleEntry};
pub use scene::RenderUnit;

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("example '{id}' not found in category '{category}'")]
    NotFound { category: Category, id: String },
    #[error("entry id '{entry_id}' does not match the id '{id}' being updated")]
    IdMismatch { id: String, entry_id: String },
}

/// One category as shown in listings
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing<'a> {
    pub category: Category,
    pub name: &'static str,
    pub icon: &'static str,
    pub examples: Vec<&'a ExampleEntry>,
}

/// Immutable snapshot of every example, grouped by category.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    // IndexMap keeps declaration order for listings and O(1) id lookups
    categories: HashMap<Category, IndexMap<String, ExampleEntry>>,
}

impl Registry {
    /// Builds a registry from (category, entries) declarations.
    ///
    /// A later entry with the same id replaces the earlier one, mirroring
    /// what `update_example` does.
    pub fn from_entries<I>(declarations: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<ExampleEntry>)>,
    {
        let mut categories: HashMap<Category, IndexMap<String, ExampleEntry>> = HashMap::new();
        for (category, entries) in declarations {
            let examples = categories.entry(category).or_default();
            for entry in entries {
                examples.insert(entry.id.clone(), entry);
            }
        }
        Self { categories }
    }

    /// The built-in gallery catalog
    pub fn builtin() -> Self {
        Self::from_entries(catalog::builtin_examples())
    }

    /// Looks up one example. A missing id is an ordinary outcome, not a bug.
    pub fn lookup(&self, category: Category, id: &str) -> Result<&ExampleEntry, RegistryError> {
        self.categories
            .get(&category)
            .and_then(|examples| examples.get(id))
            .ok_or_else(|| RegistryError::NotFound {
                category,
                id: id.to_string(),
            })
    }

    /// Examples of one category in declaration order
    pub fn examples(&self, category: Category) -> impl Iterator<Item = &ExampleEntry> {
        self.categories
            .get(&category)
            .into_iter()
            .flat_map(|examples| examples.values())
    }

    /// Every (category, entry) pair, categories in gallery order
    pub fn all(&self) -> impl Iterator<Item = (Category, &ExampleEntry)> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.examples(category).map(move |entry| (category, entry)))
    }

    /// Categories in gallery order, each with its display name, icon and
    /// entries
    pub fn categories(&self) -> Vec<CategoryListing<'_>> {
        Category::ALL
            .into_iter()
            .map(|category| CategoryListing {
                category,
                name: category.display_name(),
                icon: category.icon(),
                examples: self.examples(category).collect(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a new registry with `id` replaced by `entry` as a whole.
    ///
    /// An unknown id is appended at the end of its category. `self` is not
    /// modified.
    pub fn update_example(
        &self,
        category: Category,
        id: &str,
        entry: ExampleEntry,
    ) -> Result<Registry, RegistryError> {
        if entry.id != id {
            return Err(RegistryError::IdMismatch {
                id: id.to_string(),
                entry_id: entry.id,
            });
        }

        let mut next = self.clone();
        next.categories
            .entry(category)
            .or_default()
            .insert(id.to_string(), entry);
        Ok(next)
    }
}
