//! Per-year splitting of a vacancy corpus.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use csv::Writer;
use tracing::{debug, info};

use vacancy_model::{columns, parse_published_at};

use crate::csv_table::CsvTable;
use crate::error::{IngestError, Result};

/// A part file written by [`split_by_year`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearPart {
    pub year: i32,
    pub path: PathBuf,
    pub rows: usize,
}

/// Writes one `part_<year>.csv` per publication year into `out_dir`.
///
/// Parts are returned in order of first appearance of their year. Each part
/// keeps only the statistics columns ([`columns::STATISTICS`]), in that order.
pub fn split_by_year(table: &CsvTable, out_dir: &Path) -> Result<Vec<YearPart>> {
    table.require_columns(&columns::STATISTICS)?;
    let indices: Vec<usize> = columns::STATISTICS
        .iter()
        .filter_map(|column| table.column_index(column))
        .collect();
    let published_at = indices[indices.len() - 1];

    let mut groups: Vec<(i32, Vec<Vec<&str>>)> = Vec::new();
    for row in &table.rows {
        let year = parse_published_at(&row[published_at])?.year();
        let part_row: Vec<&str> = indices.iter().map(|idx| row[*idx].as_str()).collect();
        match groups.iter_mut().find(|(y, _)| *y == year) {
            Some((_, rows)) => rows.push(part_row),
            None => groups.push((year, vec![part_row])),
        }
    }

    std::fs::create_dir_all(out_dir).map_err(|source| IngestError::FileWrite {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut parts = Vec::with_capacity(groups.len());
    for (year, rows) in groups {
        let path = out_dir.join(format!("part_{year}.csv"));
        write_part(&path, &rows)?;
        debug!(year, rows = rows.len(), path = %path.display(), "wrote part file");
        parts.push(YearPart {
            year,
            path,
            rows: rows.len(),
        });
    }
    info!(parts = parts.len(), dir = %out_dir.display(), "split corpus by year");
    Ok(parts)
}

fn write_part(path: &Path, rows: &[Vec<&str>]) -> Result<()> {
    let csv_error = |e: csv::Error| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut writer = Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(columns::STATISTICS).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
