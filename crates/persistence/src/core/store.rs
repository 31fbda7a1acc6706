//! Element dataset storage traits.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Element, NumericField, TextField};

/// Read access to the element dataset.
///
/// Every operation is a single-column equality filter. Numeric filters compare
/// exactly; text filters lowercase both the stored value and the query value
/// before comparing. Multi-row results preserve storage order.
///
/// # Errors
///
/// Only infrastructure faults are errors. A filter that matches nothing returns
/// `None` or an empty vector.
///
/// # Example
///
/// ```ignore
/// use periodic_persistence::core::ElementStore;
/// use periodic_persistence::types::{NumericField, TextField};
///
/// async fn example<S: ElementStore>(store: &S) -> StorageResult<()> {
///     let hydrogen = store.find_one_exact(NumericField::AtomicNumber, 1).await?;
///     let helium = store.find_one_case_insensitive(TextField::Symbol, "he").await?;
///     let period_one = store.find_all_exact(NumericField::Period, 1).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ElementStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns the first element whose numeric field equals `value`.
    async fn find_one_exact(
        &self,
        field: NumericField,
        value: i64,
    ) -> StorageResult<Option<Element>>;

    /// Returns the first element whose text field equals `value`, ignoring case.
    async fn find_one_case_insensitive(
        &self,
        field: TextField,
        value: &str,
    ) -> StorageResult<Option<Element>>;

    /// Returns every element whose numeric field equals `value`.
    async fn find_all_exact(&self, field: NumericField, value: i64) -> StorageResult<Vec<Element>>;

    /// Returns every element whose text field equals `value`, ignoring case.
    async fn find_all_case_insensitive(
        &self,
        field: TextField,
        value: &str,
    ) -> StorageResult<Vec<Element>>;

    /// Returns the whole dataset in storage order.
    async fn find_all(&self) -> StorageResult<Vec<Element>>;

    /// Returns the number of stored elements.
    async fn count(&self) -> StorageResult<u64>;
}

/// Type-erased element store.
pub type DynElementStore = Arc<dyn ElementStore>;

#[async_trait]
impl<S: ElementStore + ?Sized> ElementStore for Arc<S> {
    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }

    async fn find_one_exact(
        &self,
        field: NumericField,
        value: i64,
    ) -> StorageResult<Option<Element>> {
        (**self).find_one_exact(field, value).await
    }

    async fn find_one_case_insensitive(
        &self,
        field: TextField,
        value: &str,
    ) -> StorageResult<Option<Element>> {
        (**self).find_one_case_insensitive(field, value).await
    }

    async fn find_all_exact(&self, field: NumericField, value: i64) -> StorageResult<Vec<Element>> {
        (**self).find_all_exact(field, value).await
    }

    async fn find_all_case_insensitive(
        &self,
        field: TextField,
        value: &str,
    ) -> StorageResult<Vec<Element>> {
        (**self).find_all_case_insensitive(field, value).await
    }

    async fn find_all(&self) -> StorageResult<Vec<Element>> {
        (**self).find_all().await
    }

    async fn count(&self) -> StorageResult<u64> {
        (**self).count().await
    }
}

/// Bulk import of elements into a backend.
///
/// Seeding happens once at startup, before the store is shared with request
/// handlers. Importing an element whose atomic number already exists replaces
/// the stored row, so re-running a seed is idempotent.
#[async_trait]
pub trait ElementLoader: Send + Sync {
    /// Inserts or replaces the given elements and returns how many were written.
    async fn insert_elements(&self, elements: &[Element]) -> StorageResult<usize>;
}
