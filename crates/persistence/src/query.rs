//! Element query service.
//!
//! Each operation is a named single-column filter over an injected
//! [`ElementStore`]. Keyed lookups (`by_atomic_number`, `by_symbol`,
//! `by_name`) return exactly one element or fail with
//! [`LookupError::NotFound`]. Classification queries return every match in
//! storage order, and an empty vector when nothing matches.

use std::sync::Arc;

use tracing::debug;

use crate::core::ElementStore;
use crate::error::{LookupError, StorageResult};
use crate::types::{Element, NumericField, TextField};

/// Query operations over the element dataset.
pub struct ElementQueryService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for ElementQueryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ElementStore + ?Sized> ElementQueryService<S> {
    /// Creates a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn one_exact(&self, field: NumericField, value: i64) -> StorageResult<Element> {
        debug!(field = %field, value, "Looking up element");
        self.store
            .find_one_exact(field, value)
            .await?
            .ok_or_else(|| {
                LookupError::NotFound {
                    field: field.column().to_string(),
                    value: value.to_string(),
                }
                .into()
            })
    }

    async fn one_case_insensitive(&self, field: TextField, value: &str) -> StorageResult<Element> {
        debug!(field = %field, value, "Looking up element");
        self.store
            .find_one_case_insensitive(field, value)
            .await?
            .ok_or_else(|| {
                LookupError::NotFound {
                    field: field.column().to_string(),
                    value: value.to_string(),
                }
                .into()
            })
    }

    async fn all_case_insensitive(
        &self,
        field: TextField,
        value: &str,
    ) -> StorageResult<Vec<Element>> {
        let elements = self.store.find_all_case_insensitive(field, value).await?;
        debug!(field = %field, value, count = elements.len(), "Filtered elements");
        Ok(elements)
    }

    async fn all_exact(&self, field: NumericField, value: i64) -> StorageResult<Vec<Element>> {
        let elements = self.store.find_all_exact(field, value).await?;
        debug!(field = %field, value, count = elements.len(), "Filtered elements");
        Ok(elements)
    }

    /// Returns the element with the given atomic number.
    pub async fn by_atomic_number(&self, atomic_number: i64) -> StorageResult<Element> {
        self.one_exact(NumericField::AtomicNumber, atomic_number).await
    }

    /// Returns the element with the given symbol, ignoring case.
    pub async fn by_symbol(&self, symbol: &str) -> StorageResult<Element> {
        self.one_case_insensitive(TextField::Symbol, symbol).await
    }

    /// Returns the element with the given name, ignoring case.
    pub async fn by_name(&self, name: &str) -> StorageResult<Element> {
        self.one_case_insensitive(TextField::Name, name).await
    }

    /// Returns the whole dataset in storage order.
    pub async fn all_elements(&self) -> StorageResult<Vec<Element>> {
        self.store.find_all().await
    }

    /// Returns the elements in the given period.
    pub async fn by_period(&self, period: i64) -> StorageResult<Vec<Element>> {
        self.all_exact(NumericField::Period, period).await
    }

    /// Returns the elements in the given group.
    pub async fn by_group(&self, group: i64) -> StorageResult<Vec<Element>> {
        self.all_exact(NumericField::Group, group).await
    }

    /// Returns the elements of the given type, ignoring case.
    pub async fn by_type(&self, element_type: &str) -> StorageResult<Vec<Element>> {
        self.all_case_insensitive(TextField::Type, element_type).await
    }

    /// Returns the elements whose `Natural` flag equals `value`, ignoring case.
    pub async fn by_natural(&self, value: &str) -> StorageResult<Vec<Element>> {
        self.all_case_insensitive(TextField::Natural, value).await
    }

    /// Returns the elements whose `Metal` flag equals `value`, ignoring case.
    pub async fn by_metal(&self, value: &str) -> StorageResult<Vec<Element>> {
        self.all_case_insensitive(TextField::Metal, value).await
    }

    /// Returns the elements whose `Metalloid` flag equals `value`, ignoring case.
    pub async fn by_metalloid(&self, value: &str) -> StorageResult<Vec<Element>> {
        self.all_case_insensitive(TextField::Metalloid, value).await
    }

    /// Returns the elements whose `Nonmetal` flag equals `value`, ignoring case.
    pub async fn by_nonmetal(&self, value: &str) -> StorageResult<Vec<Element>> {
        self.all_case_insensitive(TextField::Nonmetal, value).await
    }

    /// Returns the elements whose `Radioactive` flag equals `value`, ignoring case.
    pub async fn by_radioactive(&self, value: &str) -> StorageResult<Vec<Element>> {
        self.all_case_insensitive(TextField::Radioactive, value).await
    }

    /// Returns the elements in the given phase (`gas`, `liq`, `solid`, ...), ignoring case.
    pub async fn by_phase(&self, phase: &str) -> StorageResult<Vec<Element>> {
        self.all_case_insensitive(TextField::Phase, phase).await
    }
}
