//! Filter catalog
//!
//! The catalog is the consumer-supplied, ordered list of filter definitions.
//! It is immutable once built: its order is both the browse order and the
//! search order.
//!
//! # Storage
//!
//! For the CLI a catalog can be loaded from a TOML file:
//!
//! ```toml
//! [[filter]]
//! id = "status"
//! label = "Status"
//! kind = "single_choice"
//! choices = [
//!     { value = "running", label = "Running" },
//!     { value = "stopped", label = "Stopped" },
//! ]
//! ```

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{ChoiceOption, DisplayHook, FilterDefinition, FilterKind, Scalar};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// On-disk catalog layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(rename = "filter", default)]
    filters: Vec<FilterDefinition>,
}

/// Immutable, ordered list of filter definitions with unique ids
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    definitions: Vec<FilterDefinition>,
}

impl Catalog {
    /// Build a catalog, validating that ids are non-empty and unique
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if an id is empty or appears twice.
    pub fn new(definitions: Vec<FilterDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for def in &definitions {
            if def.id.is_empty() {
                return Err(CatalogError::EmptyId(def.label.clone()));
            }
            if !seen.insert(def.id.as_str()) {
                return Err(CatalogError::DuplicateId(def.id.clone()));
            }
        }
        Ok(Self { definitions })
    }

    /// Parse a catalog from TOML text
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the text is not a valid catalog.
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::new(file.filters)
    }

    /// Load a catalog from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Look up a definition by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FilterDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// Check whether a definition exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All definitions in catalog order
    #[must_use]
    pub fn definitions(&self) -> &[FilterDefinition] {
        &self.definitions
    }

    /// Iterate over definitions in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, FilterDefinition> {
        self.definitions.iter()
    }

    /// The only definition, when the catalog has exactly one
    #[must_use]
    pub fn single(&self) -> Option<&FilterDefinition> {
        match self.definitions.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Number of definitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FilterDefinition;
    type IntoIter = std::slice::Iter<'a, FilterDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            FilterDefinition::text("name", "Name"),
            FilterDefinition::text("name", "Other"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "name"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = Catalog::new(vec![FilterDefinition::text("", "Name")]);
        assert!(matches!(result, Err(CatalogError::EmptyId(_))));
    }

    #[test]
    fn test_single() {
        let one = Catalog::new(vec![FilterDefinition::text("name", "Name")]).unwrap();
        assert_eq!(one.single().map(|d| d.id.as_str()), Some("name"));

        let two = Catalog::new(vec![
            FilterDefinition::text("name", "Name"),
            FilterDefinition::date("created", "Created"),
        ])
        .unwrap();
        assert!(two.single().is_none());
        assert!(Catalog::default().single().is_none());
    }

    #[test]
    fn test_from_toml_str() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[filter]]
            id = "status"
            label = "Status"
            kind = "single_choice"
            choices = [
                { value = "running", label = "Running" },
                { value = 3, label = "Three" },
            ]

            [[filter]]
            id = "name"
            label = "Name"
            kind = "text"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let status = catalog.get("status").unwrap();
        assert_eq!(status.kind, FilterKind::SingleChoice);
        assert_eq!(status.choice_label(&Scalar::from(3)), Some("Three"));
        assert_eq!(catalog.definitions()[1].id, "name");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[filter]]\nid = \"created\"\nlabel = \"Created\"\nkind = \"date\"").unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert!(catalog.contains("created"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = Catalog::from_toml_str("[[filter]]\nid = 3");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
