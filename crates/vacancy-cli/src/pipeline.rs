//! Command pipelines, independent of argument parsing and printing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use vacancy_ingest::{YearPart, read_csv_table, split_by_year};
use vacancy_stats::{Statistics, aggregate, aggregate_partitioned, stats_records};
use vacancy_transform::{QueryInput, TableQuery, TableView, normalize_table, prepare_table};

/// Validates the query, then loads, filters, and sorts the vacancy table.
pub fn build_table(csv: &Path, input: &QueryInput) -> Result<TableView> {
    let _span = info_span!("table", csv = %csv.display()).entered();
    let query = TableQuery::parse(input).context("invalid table query")?;
    let table = read_csv_table(csv).with_context(|| format!("load {}", csv.display()))?;
    let vacancies = normalize_table(&table).context("normalize vacancies")?;
    let view = prepare_table(vacancies, &query).context("prepare table")?;
    Ok(view)
}

/// Loads a vacancy file and aggregates its statistics.
pub fn build_statistics(csv: &Path, job: &str, partitioned: bool) -> Result<Statistics> {
    let _span = info_span!("stats", csv = %csv.display(), partitioned).entered();
    let table = read_csv_table(csv).with_context(|| format!("load {}", csv.display()))?;
    let records = stats_records(&table).context("read statistics columns")?;
    let stats = if partitioned {
        aggregate_partitioned(&records, job)
    } else {
        aggregate(&records, job)
    };
    info!(
        records = records.len(),
        years = stats.count_by_year.len(),
        cities = stats.salary_by_city.len(),
        "aggregated statistics"
    );
    Ok(stats)
}

/// Writes statistics as pretty-printed JSON.
pub fn write_statistics_json(stats: &Statistics, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(stats).context("serialize statistics")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote statistics JSON");
    Ok(())
}

/// Splits a vacancy file into per-year part files.
pub fn split_file(csv: &Path, output_dir: &Path) -> Result<Vec<YearPart>> {
    let _span = info_span!("split", csv = %csv.display()).entered();
    let table = read_csv_table(csv).with_context(|| format!("load {}", csv.display()))?;
    split_by_year(&table, output_dir)
        .with_context(|| format!("split into {}", output_dir.display()))
}
