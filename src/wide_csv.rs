// Wide CSV serialization of a collected sample table

use crate::models::WideTable;
use std::io;
use std::path::Path;

/// Writes `timestamp,<alias...>` header plus one row per timestamp, ascending.
/// Alias column order is first-seen order. Cells with no sample stay blank.
pub fn write_wide<W: io::Write>(table: &WideTable, writer: W) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(table.aliases().len() + 1);
    header.push("timestamp");
    header.extend(table.aliases().iter().map(String::as_str));
    csv_writer.write_record(&header)?;

    for (timestamp, cells) in table.rows() {
        let mut record = Vec::with_capacity(header.len());
        record.push(timestamp.to_string());
        for alias in table.aliases() {
            record.push(cells.get(alias).cloned().unwrap_or_default());
        }
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_wide_csv(table: &WideTable, path: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)?;
    write_wide(table, file)
}
