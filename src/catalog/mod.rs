//! Disease reference catalog: ordered mapping of symptom phrase to record.
//!
//! Loaded once at startup and read-only afterwards, so concurrent requests
//! can share it without locking. `SharedCatalog` adds optional atomic
//! hot-reload for deployments that replace the catalog file in place.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use thiserror::Error;

use crate::models::DiseaseRecord;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no entries")]
    Empty,
}

/// One catalog row: the symptom phrase key and its disease record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub phrase: String,
    pub record: DiseaseRecord,
}

/// Immutable symptom-phrase index. Entry order is the JSON document order;
/// every tie-break downstream (first hit wins) is defined against it.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    /// Distinct phrase keys in insertion order, the fuzzy-match universe.
    vocabulary: Vec<String>,
}

impl Catalog {
    /// Parse a catalog from JSON text: `{"phrase": {disease, description, medicine}}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let OrderedEntries(entries) = serde_json::from_str(json)?;
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        let vocabulary = entries.iter().map(|e| e.phrase.clone()).collect();
        Ok(Self { entries, vocabulary })
    }

    /// Load the catalog from disk. Fatal at startup on any failure: the
    /// process must not serve until a valid catalog is in memory.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            entries = catalog.len(),
            "disease catalog loaded"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Distinct phrase keys in insertion order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// First entry whose record carries the given disease name.
    /// Multiple phrases may share a disease label; first occurrence wins.
    pub fn first_by_disease(&self, disease: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.record.disease == disease)
    }

    /// Autocomplete lookup: case-insensitive substring containment over
    /// phrase keys, returned in catalog order with no further ranking.
    pub fn search_phrases(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        self.vocabulary
            .iter()
            .filter(|phrase| phrase.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

/// JSON object deserialized as an ordered entry list. A plain map would
/// lose document order, which defines all first-hit tie-breaking.
struct OrderedEntries(Vec<CatalogEntry>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of symptom phrase to disease record")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<CatalogEntry> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((phrase, record)) =
                    map.next_entry::<String, DiseaseRecord>()?
                {
                    if entries.iter().any(|e| e.phrase == phrase) {
                        tracing::warn!(%phrase, "duplicate catalog phrase ignored");
                        continue;
                    }
                    entries.push(CatalogEntry { phrase, record });
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Handle for sharing one catalog across requests with atomic hot-reload.
///
/// Readers clone the inner `Arc` and keep using their snapshot; `replace`
/// swaps the pointer so nobody ever observes a half-updated catalog.
pub struct SharedCatalog {
    inner: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Current catalog snapshot.
    pub fn current(&self) -> Arc<Catalog> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Atomically swap in a freshly loaded catalog.
    pub fn replace(&self, catalog: Catalog) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(catalog);
    }
}
