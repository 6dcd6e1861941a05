// CREATE TABLE / INSERT statement generation from a CSV header row.
// Statements are printed for manual use; nothing is executed here.

use std::path::Path;

/// Header row of a CSV file, in file order.
pub fn read_csv_header(path: &Path) -> anyhow::Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?;
    Ok(headers.iter().map(String::from).collect())
}

/// CREATE TABLE over the first `limit` columns as quoted text columns, plus a
/// synthetic id UUID primary key.
pub fn create_table_statement(table: &str, columns: &[String], limit: usize) -> String {
    let values = columns
        .iter()
        .take(limit)
        .map(|col| format!("\"{}\" text", col))
        .collect::<Vec<_>>()
        .join(", ");
    format!("CREATE TABLE {} (id UUID PRIMARY KEY, {});", table, values)
}

/// INSERT INTO over the first `limit` columns with positional placeholders;
/// the leading placeholder is the id column.
pub fn insert_statement(table: &str, columns: &[String], limit: usize) -> String {
    let taken: Vec<&String> = columns.iter().take(limit).collect();
    let names = taken
        .iter()
        .map(|col| format!("\"{}\"", col))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = taken.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
    format!(
        "INSERT INTO {} (\"id\", {}) VALUES (?, {});",
        table, names, placeholders
    )
}
