//! SQLite schema definitions.

use rusqlite::Connection;

use crate::error::{BackendError, StorageError, StorageResult};

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Element columns in wire order, with their SQLite types.
pub(crate) const ELEMENT_COLUMNS: [(&str, &str); 28] = [
    ("AtomicNumber", "INTEGER NOT NULL UNIQUE"),
    ("Element", "TEXT NOT NULL"),
    ("Symbol", "TEXT NOT NULL"),
    ("AtomicMass", "REAL"),
    ("NumberofNeutrons", "INTEGER"),
    ("NumberofProtons", "INTEGER"),
    ("NumberofElectrons", "INTEGER"),
    ("Period", "INTEGER"),
    ("Group", "INTEGER"),
    ("Phase", "TEXT"),
    ("Radioactive", "TEXT"),
    ("Natural", "TEXT"),
    ("Metal", "TEXT"),
    ("Nonmetal", "TEXT"),
    ("Metalloid", "TEXT"),
    ("Type", "TEXT"),
    ("AtomicRadius", "REAL"),
    ("Electronegativity", "REAL"),
    ("FirstIonization", "REAL"),
    ("Density", "REAL"),
    ("MeltingPoint", "REAL"),
    ("BoilingPoint", "REAL"),
    ("NumberOfIsotopes", "INTEGER"),
    ("Discoverer", "TEXT"),
    ("Year", "INTEGER"),
    ("SpecificHeat", "REAL"),
    ("NumberofShells", "INTEGER"),
    ("NumberofValence", "INTEGER"),
];

/// Returns the quoted, comma-separated column list in wire order.
///
/// `Group` is an SQL keyword, so every identifier is quoted.
pub(crate) fn column_list() -> String {
    ELEMENT_COLUMNS
        .iter()
        .map(|(name, _)| format!("\"{}\"", name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn migration_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::MigrationError { message })
}

/// Initialize the database schema.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    let current_version = get_schema_version(conn)?;

    match current_version {
        0 => {
            create_schema_v1(conn)?;
            set_schema_version(conn, SCHEMA_VERSION)
        }
        SCHEMA_VERSION => Ok(()),
        other => Err(migration_error(format!(
            "Unsupported schema version {} (expected {})",
            other, SCHEMA_VERSION
        ))),
    }
}

/// Get the current schema version.
fn get_schema_version(conn: &Connection) -> StorageResult<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create schema_version table: {}", e)))?;

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .ok();

    Ok(version.unwrap_or(0))
}

/// Set the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> StorageResult<()> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| migration_error(format!("Failed to clear schema_version: {}", e)))?;

    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
        .map_err(|e| migration_error(format!("Failed to set schema_version: {}", e)))?;

    Ok(())
}

/// Create the initial schema (version 1).
///
/// Case-insensitive lookups filter on `lower(column)`, so those columns get
/// expression indexes.
fn create_schema_v1(conn: &Connection) -> StorageResult<()> {
    let columns = ELEMENT_COLUMNS
        .iter()
        .map(|(name, ty)| format!("\"{}\" {}", name, ty))
        .collect::<Vec<_>>()
        .join(",\n            ");

    let sql = format!(
        "CREATE TABLE IF NOT EXISTS elements (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            {}
        )",
        columns
    );

    conn.execute(&sql, [])
        .map_err(|e| migration_error(format!("Failed to create elements table: {}", e)))?;

    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_elements_symbol ON elements(lower(\"Symbol\"))",
        "CREATE INDEX IF NOT EXISTS idx_elements_name ON elements(lower(\"Element\"))",
        "CREATE INDEX IF NOT EXISTS idx_elements_period ON elements(\"Period\")",
        "CREATE INDEX IF NOT EXISTS idx_elements_group ON elements(\"Group\")",
        "CREATE INDEX IF NOT EXISTS idx_elements_type ON elements(lower(\"Type\"))",
    ];

    for index_sql in &indexes {
        conn.execute(index_sql, [])
            .map_err(|e| migration_error(format!("Failed to create index: {}", e)))?;
    }

    Ok(())
}
