//! Table pipeline: filter, sort, project, number, and cut to range.

use serde::Serialize;
use tracing::info;

use vacancy_model::{DisplayVacancy, Field, Result, Vacancy};

use crate::filter::apply_filter;
use crate::normalize::to_display;
use crate::query::TableQuery;
use crate::sort::sort_vacancies;

/// One printed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// 1-based position after filtering and sorting.
    pub number: usize,
    pub vacancy: DisplayVacancy,
}

impl TableRow {
    /// Cell values for the given columns, in order.
    pub fn cells(&self, columns: &[Field]) -> Vec<&str> {
        columns.iter().map(|field| self.vacancy.get(*field)).collect()
    }
}

/// Rows and columns ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub columns: Vec<Field>,
    pub rows: Vec<TableRow>,
}

/// Runs a table query over normalized vacancies.
///
/// Rows are numbered after sorting and before the output range is applied,
/// so the numbers always reflect the position in the full sorted result.
pub fn prepare_table(vacancies: Vec<Vacancy>, query: &TableQuery) -> Result<TableView> {
    let filtered = apply_filter(vacancies, query.filter.as_ref())?;
    let sorted = sort_vacancies(filtered, query.sort);
    let total = sorted.len();
    let rows: Vec<TableRow> = sorted
        .iter()
        .enumerate()
        .map(|(idx, vacancy)| (idx + 1, vacancy))
        .filter(|(number, _)| query.range.contains(*number))
        .map(|(number, vacancy)| TableRow {
            number,
            vacancy: to_display(vacancy),
        })
        .collect();
    info!(total, shown = rows.len(), "prepared vacancy table");
    Ok(TableView {
        columns: query.columns.clone(),
        rows,
    })
}
