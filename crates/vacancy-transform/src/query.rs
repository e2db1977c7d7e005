//! User table queries.
//!
//! A [`QueryInput`] holds the five query strings exactly as the user typed
//! them; [`TableQuery::parse`] validates them all up front so a bad query
//! fails before any output is produced.

use serde::{Deserialize, Serialize};

use vacancy_model::{Field, Result, VacancyError};

use crate::filter::FilterCriterion;
use crate::sort::SortCriterion;

/// Raw query strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryInput {
    /// `"<field>: <value>"`, or blank for no filter.
    pub filter: String,
    /// Field label to sort by, or blank.
    pub sort: String,
    /// `Да`, `Нет`, or blank.
    pub reverse: String,
    /// `""`, `"N"`, or `"N M"`.
    pub range: String,
    /// Comma-separated field labels, or blank for all.
    pub columns: String,
}

/// Parses the sort direction flag. `Да` means descending.
pub fn parse_sort_order(value: &str) -> Result<bool> {
    match value.trim() {
        "Да" => Ok(true),
        "Нет" | "" => Ok(false),
        other => Err(VacancyError::InvalidSortOrderFlag {
            value: other.to_string(),
        }),
    }
}

/// Rows to print, by 1-based row number, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputRange {
    pub start: usize,
    pub end: Option<usize>,
}

impl Default for OutputRange {
    fn default() -> Self {
        OutputRange {
            start: 1,
            end: None,
        }
    }
}

impl OutputRange {
    pub fn parse(input: &str) -> Result<OutputRange> {
        let invalid = || VacancyError::InvalidRange {
            input: input.to_string(),
        };
        let bounds = input
            .split_whitespace()
            .map(|token| token.parse::<usize>().ok().filter(|n| *n > 0))
            .collect::<Option<Vec<usize>>>()
            .ok_or_else(invalid)?;
        match bounds.as_slice() {
            [] => Ok(OutputRange::default()),
            [start] => Ok(OutputRange {
                start: *start,
                end: None,
            }),
            [start, end] if start <= end => Ok(OutputRange {
                start: *start,
                end: Some(*end),
            }),
            _ => Err(invalid()),
        }
    }

    /// Returns true when the 1-based row `number` is printed.
    pub fn contains(&self, number: usize) -> bool {
        number >= self.start && self.end.is_none_or(|end| number <= end)
    }
}

/// Resolves the requested columns, kept in table order.
///
/// Blank input selects every column.
pub fn parse_columns(input: &str) -> Result<Vec<Field>> {
    if input.trim().is_empty() {
        return Ok(Field::ALL.to_vec());
    }
    let mut requested = Vec::new();
    for label in input.split(", ") {
        let field = Field::from_label(label).ok_or_else(|| VacancyError::InvalidColumn {
            label: label.trim().to_string(),
        })?;
        requested.push(field);
    }
    Ok(Field::ALL
        .into_iter()
        .filter(|field| requested.contains(field))
        .collect())
}

/// A validated table query.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub filter: Option<FilterCriterion>,
    pub sort: Option<SortCriterion>,
    pub range: OutputRange,
    pub columns: Vec<Field>,
}

impl Default for TableQuery {
    fn default() -> Self {
        TableQuery {
            filter: None,
            sort: None,
            range: OutputRange::default(),
            columns: Field::ALL.to_vec(),
        }
    }
}

impl TableQuery {
    /// Validates every part of the query.
    ///
    /// Parts are checked in the order they are asked for: filter, sort field,
    /// sort order, range, then columns. The first bad part is reported.
    pub fn parse(input: &QueryInput) -> Result<TableQuery> {
        let filter = FilterCriterion::parse(&input.filter)?;
        let sort = SortCriterion::parse(&input.sort, false)?;
        let descending = parse_sort_order(&input.reverse)?;
        Ok(TableQuery {
            filter,
            sort: sort.map(|criterion| SortCriterion {
                descending,
                ..criterion
            }),
            range: OutputRange::parse(&input.range)?,
            columns: parse_columns(&input.columns)?,
        })
    }
}
