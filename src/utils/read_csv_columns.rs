use crate::Error;
use csv::ReaderBuilder;
use std::io::Cursor;

/// Reads the named columns out of a headered CSV string.
///
/// Each returned row holds the trimmed values of `columns`, in the order requested.
/// Rows whose first requested value is empty are skipped.
pub fn read_csv_columns(csv: &str, columns: &[&str]) -> Result<Vec<Vec<String>>, Error> {
    // Use a cursor to simulate a file reader from the string
    let mut reader = ReaderBuilder::new()
        .has_headers(true) // Ensure headers are expected
        .from_reader(Cursor::new(csv));

    // Extract column headers
    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let column_positions = columns
        .iter()
        .map(|column| {
            headers
                .iter()
                .position(|header| header.trim() == *column)
                .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", column)))
        })
        .collect::<Result<Vec<usize>, Error>>()?;

    let mut rows = Vec::new();

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let row: Vec<String> = column_positions
            .iter()
            .map(|position| record.get(*position).unwrap_or("").trim().to_string())
            .collect();

        if row.first().map_or(true, |value| value.is_empty()) {
            continue;
        }

        rows.push(row);
    }

    Ok(rows)
}
