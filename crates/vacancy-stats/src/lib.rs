//! Vacancy statistics.
//!
//! Salary levels and vacancy counts by publication year (overall and for one
//! job), and salary levels and vacancy shares by city.

pub mod aggregate;
pub mod parallel;
pub mod record;

pub use aggregate::{
    Accumulator, OTHER_CITIES_LABEL, Statistics, TOP_CITIES, aggregate, round4,
};
pub use parallel::aggregate_partitioned;
pub use record::{StatsVacancy, stats_records};
