//! Melon catalog store.

use std::collections::HashMap;
use std::path::Path;

use tracing::instrument;
use ubermelon_core::{CatalogLookup, Melon, MelonId};

use super::{IN_MEMORY, StoreError, parse_lines, read_file};

/// All melons for sale, in catalog file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    melons: Vec<Melon>,
    by_id: HashMap<MelonId, usize>,
}

impl Catalog {
    /// Load the catalog from a pipe-delimited file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read and
    /// `StoreError::Parse` for the first malformed line.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = read_file(path)?;
        let catalog = Self::parse_from(&text, &path.display().to_string())?;
        tracing::info!(melons = catalog.len(), "Melon catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog held in memory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` for the first malformed line.
    pub fn parse(text: &str) -> Result<Self, StoreError> {
        Self::parse_from(text, IN_MEMORY)
    }

    fn parse_from(text: &str, origin: &str) -> Result<Self, StoreError> {
        let records = parse_lines(text, origin, Melon::parse_record)?;
        Ok(Self::from_melons(records))
    }

    /// Build a catalog from melon records.
    ///
    /// A repeated ID replaces the earlier record but keeps its position.
    #[must_use]
    pub fn from_melons(records: impl IntoIterator<Item = Melon>) -> Self {
        let mut catalog = Self::default();
        for melon in records {
            if let Some(&idx) = catalog.by_id.get(&melon.id) {
                tracing::warn!(melon_id = %melon.id, "Duplicate melon ID in catalog; keeping the later record");
                if let Some(slot) = catalog.melons.get_mut(idx) {
                    *slot = melon;
                }
            } else {
                catalog.by_id.insert(melon.id.clone(), catalog.melons.len());
                catalog.melons.push(melon);
            }
        }
        catalog
    }

    /// All melons in catalog order.
    #[must_use]
    pub fn get_all(&self) -> &[Melon] {
        &self.melons
    }

    /// Look up one melon.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no melon has this ID.
    pub fn get_by_id(&self, id: &MelonId) -> Result<&Melon, StoreError> {
        self.lookup(id).ok_or_else(|| StoreError::NotFound {
            kind: "melon",
            key: id.to_string(),
        })
    }

    /// Number of melons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.melons.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.melons.is_empty()
    }
}

impl CatalogLookup for Catalog {
    fn lookup(&self, id: &MelonId) -> Option<&Melon> {
        self.by_id.get(id).and_then(|&idx| self.melons.get(idx))
    }
}
