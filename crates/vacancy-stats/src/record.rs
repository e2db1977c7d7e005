use chrono::Datelike;
use serde::Serialize;

use vacancy_ingest::{CsvTable, RawRecord};
use vacancy_model::{Result, Salary, columns, parse_published_at};

/// The part of a vacancy statistics need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsVacancy {
    pub name: String,
    /// Mean salary in whole roubles.
    pub salary: i64,
    pub city: String,
    pub year: i32,
}

impl StatsVacancy {
    pub fn from_record(record: &RawRecord<'_>) -> Result<StatsVacancy> {
        // Gross flag does not affect the mean.
        let salary = Salary::parse(
            record.get(columns::SALARY_FROM)?,
            record.get(columns::SALARY_TO)?,
            record.get(columns::SALARY_CURRENCY)?,
            "",
        )?;
        Ok(StatsVacancy {
            name: record.get(columns::NAME)?.to_string(),
            salary: salary.mean_rub(),
            city: record.get(columns::AREA_NAME)?.to_string(),
            year: parse_published_at(record.get(columns::PUBLISHED_AT)?)?.year(),
        })
    }
}

/// Reads every row of a table as a [`StatsVacancy`], in file order.
///
/// Both the full twelve-column export and six-column part files work.
pub fn stats_records(table: &CsvTable) -> Result<Vec<StatsVacancy>> {
    table.require_columns(&columns::STATISTICS)?;
    table
        .records()
        .map(|record| StatsVacancy::from_record(&record))
        .collect()
}
