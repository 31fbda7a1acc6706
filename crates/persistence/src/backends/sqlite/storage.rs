//! ElementStore and ElementLoader implementations for SQLite.

use async_trait::async_trait;
use rusqlite::{Connection, Row, ToSql, params};

use crate::core::{ElementLoader, ElementStore};
use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::{Element, NumericField, TextField};

use super::SqliteBackend;
use super::schema::{ELEMENT_COLUMNS, column_list};

fn query_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::QueryFailed { message })
}

/// Maps a row selected with [`column_list`] to an element.
fn row_to_element(row: &Row<'_>) -> rusqlite::Result<Element> {
    Ok(Element {
        atomic_number: row.get(0)?,
        name: row.get(1)?,
        symbol: row.get(2)?,
        atomic_mass: row.get(3)?,
        number_of_neutrons: row.get(4)?,
        number_of_protons: row.get(5)?,
        number_of_electrons: row.get(6)?,
        period: row.get(7)?,
        group: row.get(8)?,
        phase: row.get(9)?,
        radioactive: row.get(10)?,
        natural: row.get(11)?,
        metal: row.get(12)?,
        nonmetal: row.get(13)?,
        metalloid: row.get(14)?,
        element_type: row.get(15)?,
        atomic_radius: row.get(16)?,
        electronegativity: row.get(17)?,
        first_ionization: row.get(18)?,
        density: row.get(19)?,
        melting_point: row.get(20)?,
        boiling_point: row.get(21)?,
        number_of_isotopes: row.get(22)?,
        discoverer: row.get(23)?,
        year: row.get(24)?,
        specific_heat: row.get(25)?,
        number_of_shells: row.get(26)?,
        number_of_valence: row.get(27)?,
    })
}

/// Runs a SELECT over the elements table and collects every row in storage order.
fn select_elements(
    conn: &Connection,
    where_clause: &str,
    params: &[&dyn ToSql],
    limit_one: bool,
) -> StorageResult<Vec<Element>> {
    let mut sql = format!("SELECT {} FROM elements", column_list());
    if !where_clause.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(where_clause);
    }
    sql.push_str(" ORDER BY id");
    if limit_one {
        sql.push_str(" LIMIT 1");
    }

    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| query_error(format!("Failed to prepare query: {}", e)))?;

    let rows = stmt
        .query_map(params, row_to_element)
        .map_err(|e| query_error(format!("Failed to query elements: {}", e)))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| query_error(format!("Failed to read element row: {}", e)))
}

fn exact_clause(field: NumericField) -> String {
    format!("\"{}\" = ?1", field.column())
}

fn case_insensitive_clause(field: TextField) -> String {
    format!("lower(\"{}\") = lower(?1)", field.column())
}

/// Builds the upsert statement keyed on atomic number.
///
/// Conflicting rows are updated in place so their row id, and with it their
/// position in storage order, is kept.
fn upsert_sql() -> String {
    let placeholders = (1..=ELEMENT_COLUMNS.len())
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ");
    let updates = ELEMENT_COLUMNS
        .iter()
        .skip(1)
        .map(|(name, _)| format!("\"{0}\" = excluded.\"{0}\"", name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO elements ({}) VALUES ({}) ON CONFLICT(\"AtomicNumber\") DO UPDATE SET {}",
        column_list(),
        placeholders,
        updates
    )
}

fn insert_element(conn: &Connection, sql: &str, e: &Element) -> rusqlite::Result<usize> {
    conn.prepare_cached(sql)?.execute(params![
        e.atomic_number,
        e.name,
        e.symbol,
        e.atomic_mass,
        e.number_of_neutrons,
        e.number_of_protons,
        e.number_of_electrons,
        e.period,
        e.group,
        e.phase,
        e.radioactive,
        e.natural,
        e.metal,
        e.nonmetal,
        e.metalloid,
        e.element_type,
        e.atomic_radius,
        e.electronegativity,
        e.first_ionization,
        e.density,
        e.melting_point,
        e.boiling_point,
        e.number_of_isotopes,
        e.discoverer,
        e.year,
        e.specific_heat,
        e.number_of_shells,
        e.number_of_valence,
    ])
}

#[async_trait]
impl ElementStore for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn find_one_exact(
        &self,
        field: NumericField,
        value: i64,
    ) -> StorageResult<Option<Element>> {
        self.with_connection(move |conn| {
            let mut rows = select_elements(conn, &exact_clause(field), &[&value], true)?;
            Ok(rows.pop())
        })
        .await
    }

    async fn find_one_case_insensitive(
        &self,
        field: TextField,
        value: &str,
    ) -> StorageResult<Option<Element>> {
        let value = value.to_string();
        self.with_connection(move |conn| {
            let mut rows =
                select_elements(conn, &case_insensitive_clause(field), &[&value], true)?;
            Ok(rows.pop())
        })
        .await
    }

    async fn find_all_exact(&self, field: NumericField, value: i64) -> StorageResult<Vec<Element>> {
        self.with_connection(move |conn| {
            select_elements(conn, &exact_clause(field), &[&value], false)
        })
        .await
    }

    async fn find_all_case_insensitive(
        &self,
        field: TextField,
        value: &str,
    ) -> StorageResult<Vec<Element>> {
        let value = value.to_string();
        self.with_connection(move |conn| {
            select_elements(conn, &case_insensitive_clause(field), &[&value], false)
        })
        .await
    }

    async fn find_all(&self) -> StorageResult<Vec<Element>> {
        self.with_connection(|conn| select_elements(conn, "", &[], false))
            .await
    }

    async fn count(&self) -> StorageResult<u64> {
        self.with_connection(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM elements", [], |row| row.get(0))
                .map_err(|e| query_error(format!("Failed to count elements: {}", e)))?;
            Ok(count as u64)
        })
        .await
    }
}

#[async_trait]
impl ElementLoader for SqliteBackend {
    async fn insert_elements(&self, elements: &[Element]) -> StorageResult<usize> {
        let elements = elements.to_vec();
        self.with_connection(move |conn| {
            let sql = upsert_sql();
            let tx = conn.unchecked_transaction()?;
            for element in &elements {
                insert_element(&tx, &sql, element).map_err(|e| {
                    query_error(format!(
                        "Failed to insert element {}: {}",
                        element.atomic_number, e
                    ))
                })?;
            }
            tx.commit()?;

            tracing::info!(count = elements.len(), "Seeded elements into SQLite");
            Ok(elements.len())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clauses() {
        assert_eq!(exact_clause(NumericField::Group), "\"Group\" = ?1");
        assert_eq!(
            case_insensitive_clause(TextField::Name),
            "lower(\"Element\") = lower(?1)"
        );
    }

    #[test]
    fn test_upsert_sql_shape() {
        let sql = upsert_sql();
        assert!(sql.contains("?28"));
        assert!(!sql.contains("?29"));
        assert!(sql.contains("ON CONFLICT(\"AtomicNumber\")"));
        assert!(!sql.contains("\"AtomicNumber\" = excluded"));
    }

    #[tokio::test]
    async fn test_round_trip_preserves_nulls() {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.init_schema().unwrap();

        let boron = Element {
            atomic_mass: Some(10.811),
            period: Some(2),
            group: Some(13),
            metalloid: Some("yes".to_string()),
            ..Element::new(5, "Boron", "B")
        };
        backend.insert_elements(&[boron.clone()]).await.unwrap();

        let found = backend
            .find_one_exact(NumericField::AtomicNumber, 5)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, boron);
        assert!(found.metal.is_none());
    }

    #[tokio::test]
    async fn test_reseed_keeps_storage_order() {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.init_schema().unwrap();

        let first = vec![Element::new(1, "Hydrogen", "H"), Element::new(2, "Helium", "He")];
        backend.insert_elements(&first).await.unwrap();

        let updated = Element {
            year: Some(1895),
            ..Element::new(1, "Hydrogen", "H")
        };
        backend.insert_elements(&[updated]).await.unwrap();

        let all = backend.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].atomic_number, 1);
        assert_eq!(all[0].year, Some(1895));
        assert_eq!(all[1].atomic_number, 2);
    }
}
