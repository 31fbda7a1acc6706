//! Test fixtures for the element routes.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum_test::TestServer;
use periodic_persistence::backends::MemoryBackend;
use periodic_persistence::backends::sqlite::SqliteBackend;
use periodic_persistence::seed::load_seed_file;
use periodic_persistence::{Element, ElementLoader, ElementStore};
use periodic_rest::{ServerConfig, create_app_with_config};

/// Number of elements in the sample seed.
pub const SAMPLE_COUNT: usize = 10;

/// Path to the sample seed shipped with the repository.
pub fn sample_seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/elements.json")
}

/// Loads the sample seed (Hydrogen through Neon).
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

/// Creates a test server over any store.
pub fn server_for<S>(store: Arc<S>, config: ServerConfig) -> TestServer
where
    S: ElementStore + ?Sized + 'static,
{
    let app = create_app_with_config(store, config);
    TestServer::new(app).expect("Failed to create test server")
}

/// Creates a test server over an in-memory SQLite database holding `elements`.
pub async fn sqlite_server(elements: &[Element]) -> TestServer {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");
    backend
        .insert_elements(elements)
        .await
        .expect("Failed to seed elements");
    server_for(Arc::new(backend), ServerConfig::for_testing())
}

/// Creates a test server over the memory backend holding `elements`.
pub fn memory_server(elements: Vec<Element>) -> TestServer {
    let backend = MemoryBackend::new(elements).expect("Failed to create memory backend");
    server_for(Arc::new(backend), ServerConfig::for_testing())
}
