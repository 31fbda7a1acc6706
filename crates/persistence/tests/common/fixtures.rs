//! Test fixtures for persistence layer testing.
//!
//! The shared dataset is the repository's sample seed (`data/elements.json`),
//! holding the ten elements of periods 1 and 2.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use periodic_persistence::backends::MemoryBackend;
use periodic_persistence::backends::sqlite::SqliteBackend;
use periodic_persistence::seed::load_seed_file;
use periodic_persistence::{Element, ElementLoader};

/// Number of elements in the sample seed.
pub const SAMPLE_COUNT: usize = 10;

/// Path to the sample seed shipped with the repository.
pub fn sample_seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/elements.json")
}

/// Loads the sample seed.
pub fn sample_elements() -> Vec<Element> {
    load_seed_file(sample_seed_path()).expect("Failed to load sample seed")
}

/// Hydrogen and Helium as described in the lookup scenarios.
pub fn hydrogen_and_helium() -> Vec<Element> {
    vec![
        Element {
            period: Some(1),
            group: Some(1),
            element_type: Some("Nonmetal".to_string()),
            ..Element::new(1, "Hydrogen", "H")
        },
        Element {
            period: Some(1),
            group: Some(18),
            element_type: Some("Nonmetal".to_string()),
            ..Element::new(2, "Helium", "He")
        },
    ]
}

/// Creates an in-memory SQLite backend seeded with `elements`.
pub async fn sqlite_with(elements: &[Element]) -> Arc<SqliteBackend> {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    backend
        .insert_elements(elements)
        .await
        .expect("Failed to seed elements");
    Arc::new(backend)
}

/// Creates a memory backend holding `elements`.
pub fn memory_with(elements: Vec<Element>) -> Arc<MemoryBackend> {
    Arc::new(MemoryBackend::new(elements).expect("Failed to create memory backend"))
}
