//! Vacancy transformation pipeline.
//!
//! Raw rows are normalized into [`vacancy_model::Vacancy`] records, filtered,
//! sorted, and projected into a [`TableView`] according to a [`TableQuery`].

pub mod filter;
pub mod normalize;
pub mod pipeline;
pub mod query;
pub mod sort;

pub use filter::{FilterCriterion, TextField, apply_filter};
pub use normalize::{
    REQUIRED_COLUMNS, SalaryRange, format_number, normalize_record, normalize_table,
    parse_salary_description, salary_description, strip_markup, to_display,
};
pub use pipeline::{TableRow, TableView, prepare_table};
pub use query::{OutputRange, QueryInput, TableQuery, parse_columns, parse_sort_order};
pub use sort::{SortCriterion, sort_vacancies};
