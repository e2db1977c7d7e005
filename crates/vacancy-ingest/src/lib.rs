//! Vacancy data ingestion.
//!
//! Loads vacancy CSV files into a validated [`CsvTable`], exposes each row as
//! a [`RawRecord`] keyed by column name, and splits a corpus into per-year
//! part files.

pub mod csv_table;
pub mod error;
pub mod split;

pub use csv_table::{CsvTable, RawRecord, parse_csv_table, read_csv_table};
pub use error::{IngestError, Result};
pub use split::{YearPart, split_by_year};
