//! In-memory backend.
//!
//! Holds the dataset in an immutable vector shared behind an [`Arc`]. Useful
//! for tests and for serving a seed file without a database.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::ElementStore;
use crate::error::{SeedError, StorageResult};
use crate::types::{Element, NumericField, TextField};

/// Element store backed by a vector kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    elements: Arc<Vec<Element>>,
}

impl MemoryBackend {
    /// Creates a backend holding the given elements.
    ///
    /// Fails if two elements share an atomic number.
    pub fn new(elements: Vec<Element>) -> StorageResult<Self> {
        let mut seen = HashSet::with_capacity(elements.len());
        for element in &elements {
            if !seen.insert(element.atomic_number) {
                return Err(SeedError::DuplicateAtomicNumber {
                    atomic_number: element.atomic_number,
                }
                .into());
            }
        }

        tracing::debug!(count = elements.len(), "Created in-memory element store");

        Ok(Self {
            elements: Arc::new(elements),
        })
    }

    /// Creates an empty backend.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of elements held.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the backend holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn filter_exact(&self, field: NumericField, value: i64) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(move |e| e.numeric(field) == Some(value))
    }

    fn filter_case_insensitive<'a>(
        &'a self,
        field: TextField,
        value: &str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        let needle = value.to_lowercase();
        self.elements.iter().filter(move |e| {
            e.text(field)
                .is_some_and(|stored| stored.to_lowercase() == needle)
        })
    }
}

#[async_trait]
impl ElementStore for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn find_one_exact(
        &self,
        field: NumericField,
        value: i64,
    ) -> StorageResult<Option<Element>> {
        Ok(self.filter_exact(field, value).next().cloned())
    }

    async fn find_one_case_insensitive(
        &self,
        field: TextField,
        value: &str,
    ) -> StorageResult<Option<Element>> {
        Ok(self.filter_case_insensitive(field, value).next().cloned())
    }

    async fn find_all_exact(&self, field: NumericField, value: i64) -> StorageResult<Vec<Element>> {
        Ok(self.filter_exact(field, value).cloned().collect())
    }

    async fn find_all_case_insensitive(
        &self,
        field: TextField,
        value: &str,
    ) -> StorageResult<Vec<Element>> {
        Ok(self.filter_case_insensitive(field, value).cloned().collect())
    }

    async fn find_all(&self) -> StorageResult<Vec<Element>> {
        Ok(self.elements.as_ref().clone())
    }

    async fn count(&self) -> StorageResult<u64> {
        Ok(self.elements.len() as u64)
    }
}
