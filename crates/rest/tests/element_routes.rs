//! Element route tests.
//!
//! Exercises the full HTTP surface through `axum-test`:
//! - Single-element lookups and the fixed 404 body
//! - Collection filters, including empty results
//! - Rejection of non-numeric and undecodable path parameters
//! - Health, liveness, fallback and CORS behavior

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use periodic_persistence::error::{BackendError, StorageResult};
use periodic_persistence::{Element, ElementStore, NumericField, TextField};
use periodic_rest::ServerConfig;
use serde_json::{Value, json};

use common::fixtures::*;

const ORIGIN: HeaderName = HeaderName::from_static("origin");
const ACCESS_CONTROL_ALLOW_ORIGIN: HeaderName =
    HeaderName::from_static("access-control-allow-origin");

fn symbols(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|e| e["Symbol"].as_str().unwrap_or_default().to_string())
        .collect()
}

// =============================================================================
// Hydrogen/Helium scenario
// =============================================================================

mod scenario {
    use super::*;

    async fn check(server: axum_test::TestServer) {
        let response = server.get("/element/atomic_number/1").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["Symbol"], "H");

        let response = server.get("/element/symbol/he").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["AtomicNumber"], 2);

        let response = server.get("/elements/period/1").await;
        response.assert_status_ok();
        assert_eq!(symbols(&response.json()), vec!["H", "He"]);

        let response = server.get("/elements/group/1").await;
        response.assert_status_ok();
        assert_eq!(symbols(&response.json()), vec!["H"]);

        let response = server.get("/element/atomic_number/999").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({"Error": "Element not found"}));

        let response = server.get("/elements/group/999").await;
        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_scenario_over_sqlite() {
        check(sqlite_server(&hydrogen_and_helium()).await).await;
    }

    #[tokio::test]
    async fn test_scenario_over_memory() {
        check(memory_server(hydrogen_and_helium())).await;
    }
}

// =============================================================================
// Single-element lookups
// =============================================================================

mod single_lookups {
    use super::*;

    #[tokio::test]
    async fn test_symbol_ignores_case() {
        let server = sqlite_server(&sample_elements()).await;

        for path in ["/element/symbol/Ne", "/element/symbol/ne", "/element/symbol/NE"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            assert_eq!(response.json::<Value>()["Element"], "Neon");
        }
    }

    #[tokio::test]
    async fn test_name_ignores_case() {
        let server = sqlite_server(&sample_elements()).await;

        let response = server.get("/element/name/cARBON").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["Symbol"], "C");
    }

    #[tokio::test]
    async fn test_misses_share_one_body() {
        let server = sqlite_server(&sample_elements()).await;

        for path in [
            "/element/atomic_number/0",
            "/element/atomic_number/-3",
            "/element/symbol/Xx",
            "/element/name/Unobtainium",
        ] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::NOT_FOUND);
            response.assert_json(&json!({"Error": "Element not found"}));
        }
    }

    #[tokio::test]
    async fn test_trailing_space_is_not_trimmed() {
        let server = memory_server(sample_elements());

        let response = server.get("/element/symbol/H%20").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_record_keeps_column_order_and_nulls() {
        let server = sqlite_server(&sample_elements()).await;

        let response = server.get("/element/atomic_number/6").await;
        response.assert_status_ok();

        let text = response.text();
        assert!(text.starts_with(r#"{"AtomicNumber":6,"Element":"Carbon","Symbol":"C","#));

        let body: Value = response.json();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 28);
        assert!(object["Year"].is_null());
    }
}

// =============================================================================
// Collection filters
// =============================================================================

mod collections {
    use super::*;

    #[tokio::test]
    async fn test_all_elements() {
        let server = sqlite_server(&sample_elements()).await;

        let response = server.get("/elements").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let numbers: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["AtomicNumber"].as_i64().unwrap())
            .collect();
        assert_eq!(numbers, (1..=SAMPLE_COUNT as i64).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_periods_partition_the_dataset() {
        let server = sqlite_server(&sample_elements()).await;
        let mut seen = HashSet::new();

        for period in 1..=7 {
            let response = server.get(&format!("/elements/period/{}", period)).await;
            response.assert_status_ok();
            for symbol in symbols(&response.json()) {
                assert!(seen.insert(symbol));
            }
        }

        assert_eq!(seen.len(), SAMPLE_COUNT);
    }

    #[tokio::test]
    async fn test_type_with_space() {
        let server = sqlite_server(&sample_elements()).await;

        let response = server.get("/elements/type/noble%20gas").await;
        response.assert_status_ok();
        assert_eq!(symbols(&response.json()), vec!["He", "Ne"]);
    }

    #[tokio::test]
    async fn test_flag_filters() {
        let server = sqlite_server(&sample_elements()).await;

        let cases = [
            ("/elements/metal/yes", vec!["Li", "Be"]),
            ("/elements/metalloid/YES", vec!["B"]),
            ("/elements/nonmetal/yes", vec!["H", "He", "C", "N", "O", "F", "Ne"]),
            ("/elements/radioactive/yes", vec![]),
            ("/elements/phase/Solid", vec!["Li", "Be", "B", "C"]),
        ];

        for (path, expected) in cases {
            let response = server.get(path).await;
            response.assert_status_ok();
            assert_eq!(symbols(&response.json()), expected, "{}", path);
        }

        let response = server.get("/elements/natural/yes").await;
        assert_eq!(symbols(&response.json()).len(), SAMPLE_COUNT);
    }

    #[tokio::test]
    async fn test_no_match_is_empty_array() {
        let server = memory_server(sample_elements());

        for path in [
            "/elements/period/7",
            "/elements/group/999",
            "/elements/type/Actinide",
            "/elements/metal/no",
        ] {
            let response = server.get(path).await;
            response.assert_status_ok();
            response.assert_json(&json!([]));
        }
    }
}

// =============================================================================
// Invalid input
// =============================================================================

mod invalid_input {
    use super::*;

    #[tokio::test]
    async fn test_non_numeric_parameters_are_rejected() {
        let server = memory_server(sample_elements());

        for path in [
            "/element/atomic_number/abc",
            "/element/atomic_number/1.5",
            "/elements/period/two",
            "/elements/group/x",
        ] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::BAD_REQUEST);

            let body: Value = response.json();
            assert!(body["Error"].as_str().unwrap().contains("not an integer"));
        }
    }

    #[tokio::test]
    async fn test_undecodable_segments_get_json_errors() {
        let server = memory_server(sample_elements());

        for path in [
            "/element/atomic_number/%FF",
            "/element/symbol/%FF",
            "/element/name/%C3",
            "/elements/type/%FF",
            "/elements/phase/%FF",
        ] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::BAD_REQUEST);

            let body: Value = serde_json::from_str(&response.text())
                .unwrap_or_else(|_| panic!("non-JSON error body for {}", path));
            assert!(body["Error"].is_string(), "{}", path);
        }
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let server = memory_server(sample_elements());

        let response = server.get("/element/mass/1").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({"Error": "Not found"}));
    }

    #[tokio::test]
    async fn test_write_methods_not_allowed() {
        let server = memory_server(sample_elements());

        let response = server.post("/elements").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}

// =============================================================================
// Operational endpoints
// =============================================================================

mod operational {
    use super::*;

    /// A store whose every query fails as if the database were unreachable.
    struct UnreachableStore;

    fn refused<T>() -> StorageResult<T> {
        Err(BackendError::Unavailable {
            backend_name: "unreachable".to_string(),
            message: "connection refused".to_string(),
        }
        .into())
    }

    #[async_trait]
    impl ElementStore for UnreachableStore {
        fn backend_name(&self) -> &'static str {
            "unreachable"
        }

        async fn find_one_exact(&self, _: NumericField, _: i64) -> StorageResult<Option<Element>> {
            refused()
        }

        async fn find_one_case_insensitive(
            &self,
            _: TextField,
            _: &str,
        ) -> StorageResult<Option<Element>> {
            refused()
        }

        async fn find_all_exact(&self, _: NumericField, _: i64) -> StorageResult<Vec<Element>> {
            refused()
        }

        async fn find_all_case_insensitive(
            &self,
            _: TextField,
            _: &str,
        ) -> StorageResult<Vec<Element>> {
            refused()
        }

        async fn find_all(&self) -> StorageResult<Vec<Element>> {
            refused()
        }

        async fn count(&self) -> StorageResult<u64> {
            refused()
        }
    }

    #[tokio::test]
    async fn test_health_reports_element_count() {
        let server = sqlite_server(&sample_elements()).await;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["backend"], "sqlite");
        assert_eq!(body["elements"], SAMPLE_COUNT);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_unreachable_store() {
        let server = server_for(Arc::new(UnreachableStore), ServerConfig::for_testing());

        let response = server.get("/health").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json::<Value>()["status"], "unhealthy");

        let response = server.get("/element/symbol/H").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        response.assert_json(&json!({"Error": "Service unavailable"}));
    }

    #[tokio::test]
    async fn test_liveness() {
        let server = server_for(Arc::new(UnreachableStore), ServerConfig::for_testing());
        server.get("/_liveness").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let config = ServerConfig {
            enable_cors: true,
            ..ServerConfig::for_testing()
        };
        let backend = periodic_persistence::backends::MemoryBackend::new(sample_elements())
            .expect("Failed to create memory backend");
        let server = server_for(Arc::new(backend), config);

        let response = server
            .get("/elements")
            .add_header(ORIGIN, HeaderValue::from_static("https://example.com"))
            .await;
        response.assert_status_ok();
        assert_eq!(response.header(ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    }

    #[tokio::test]
    async fn test_dyn_store_from_seeded_file() {
        use periodic_persistence::backends::sqlite::SqliteBackend;
        use periodic_persistence::seed::seed_from_file;

        let dir = tempfile::tempdir().unwrap();
        let backend = SqliteBackend::open(dir.path().join("elements.db")).unwrap();
        backend.init_schema().unwrap();
        seed_from_file(&backend, sample_seed_path()).await.unwrap();

        let store: Arc<dyn ElementStore> = Arc::new(backend);
        let server = server_for(store, ServerConfig::for_testing());

        let response = server.get("/element/name/fluorine").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["Type"], "Halogen");
    }
}
