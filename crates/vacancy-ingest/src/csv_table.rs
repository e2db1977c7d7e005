use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use vacancy_model::VacancyError;

use crate::error::{IngestError, Result};

/// A loaded vacancy file: the header plus the rows that passed validation.
///
/// Every row has exactly one value per header column and no empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn is_valid_row(row: &[String], width: usize) -> bool {
    row.len() == width && row.iter().all(|value| !value.is_empty())
}

impl CsvTable {
    /// Builds a table from a header and unvalidated rows.
    ///
    /// Rows with a missing, extra, or empty value are dropped. Fails with
    /// [`VacancyError::EmptyInput`] when there is no header and with
    /// [`VacancyError::NoValidData`] when no row survives.
    pub fn from_rows(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> std::result::Result<CsvTable, VacancyError> {
        if headers.is_empty() {
            return Err(VacancyError::EmptyInput);
        }
        let headers: Vec<String> = headers.into_iter().map(|h| normalize_header(&h)).collect();
        let total = rows.len();
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .filter(|row| is_valid_row(row, headers.len()))
            .collect();
        let dropped = total - rows.len();
        if dropped > 0 {
            debug!(dropped, kept = rows.len(), "dropped incomplete rows");
        }
        if rows.is_empty() {
            return Err(VacancyError::NoValidData);
        }
        Ok(CsvTable { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the position of a column in the header.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Checks that every named column is present.
    pub fn require_columns(&self, columns: &[&str]) -> std::result::Result<(), VacancyError> {
        match columns.iter().find(|c| self.column_index(c).is_none()) {
            Some(missing) => Err(VacancyError::MissingColumn {
                column: (*missing).to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Iterates over the rows as column-keyed records, in file order.
    pub fn records(&self) -> impl Iterator<Item = RawRecord<'_>> {
        self.rows.iter().map(|row| RawRecord {
            headers: &self.headers,
            values: row,
        })
    }
}

/// One validated row, addressed by column name.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> RawRecord<'a> {
    /// Returns the value of a column.
    pub fn get(&self, column: &str) -> std::result::Result<&'a str, VacancyError> {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|idx| self.values.get(idx))
            .map(String::as_str)
            .ok_or_else(|| VacancyError::MissingColumn {
                column: column.to_string(),
            })
    }

    /// Values in header order.
    pub fn values(&self) -> &'a [String] {
        self.values
    }
}

/// Parses CSV text from any reader. `origin` names the source in errors.
pub fn parse_csv_table<R: Read>(input: R, origin: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => {
            let record = record.map_err(|e| IngestError::CsvParse {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;
            record.iter().map(str::to_string).collect()
        }
        None => return Err(VacancyError::EmptyInput.into()),
    };
    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    let table = CsvTable::from_rows(headers, rows)?;
    debug!(path = %origin.display(), rows = table.len(), "loaded vacancy table");
    Ok(table)
}

/// Reads and validates a vacancy CSV file.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv_table(file, path)
}
