//! Seed dataset import.
//!
//! A seed file is a JSON array of element records using the wire field names
//! (`AtomicNumber`, `Element`, `Symbol`, ...). Missing optional fields load as
//! `None`.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::core::ElementLoader;
use crate::error::{SeedError, StorageResult};
use crate::types::Element;

/// Parses seed data from a JSON string.
///
/// `origin` is only used in error messages.
pub fn parse_seed(json: &str, origin: &Path) -> StorageResult<Vec<Element>> {
    let elements: Vec<Element> =
        serde_json::from_str(json).map_err(|e| SeedError::InvalidFormat {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut seen = HashSet::with_capacity(elements.len());
    for element in &elements {
        if !seen.insert(element.atomic_number) {
            return Err(SeedError::DuplicateAtomicNumber {
                atomic_number: element.atomic_number,
            }
            .into());
        }
    }

    Ok(elements)
}

/// Reads and parses a seed file.
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> StorageResult<Vec<Element>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let elements = parse_seed(&json, path)?;
    info!(path = %path.display(), count = elements.len(), "Loaded seed file");
    Ok(elements)
}

/// Reads a seed file and writes its elements into `loader`.
pub async fn seed_from_file<L, P>(loader: &L, path: P) -> StorageResult<usize>
where
    L: ElementLoader + ?Sized,
    P: AsRef<Path>,
{
    let elements = load_seed_file(path)?;
    loader.insert_elements(&elements).await
}
