//! Salary and vacancy-count aggregation.
//!
//! Records are folded into an [`Accumulator`] of running totals. Accumulators
//! built over disjoint slices of the input can be merged, and
//! [`Accumulator::finish`] turns the totals into [`Statistics`]: averages,
//! the qualifying cities, and the top-ten city rankings.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::{debug, warn};

use crate::record::StatsVacancy;

/// Label of the share bucket that sums every city outside the top ten.
pub const OTHER_CITIES_LABEL: &str = "Другие";

/// Number of cities kept in each city ranking.
pub const TOP_CITIES: usize = 10;

/// Aggregate statistics over a vacancy corpus.
///
/// Year maps cover every year present in the input. Job-scoped maps hold
/// zero where no vacancy of that year matched the job, so a zero average
/// means either "no match" or a real zero salary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub salary_by_year: BTreeMap<i32, i64>,
    pub count_by_year: BTreeMap<i32, u64>,
    pub job_salary_by_year: BTreeMap<i32, i64>,
    pub job_count_by_year: BTreeMap<i32, u64>,
    /// Mean salary per city, highest first.
    pub salary_by_city: Vec<(String, i64)>,
    /// Share of all vacancies per city, highest first.
    pub share_by_city: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct YearTotals {
    salary: i128,
    count: u64,
    job_salary: i128,
    job_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CityTotals {
    /// Position of the city's first record in the whole input.
    first_seen: usize,
    salary: i128,
    count: u64,
}

/// Running totals over a set of records.
#[derive(Debug, Clone)]
pub struct Accumulator {
    job: String,
    years: BTreeMap<i32, YearTotals>,
    cities: HashMap<String, CityTotals>,
    total: u64,
}

impl Accumulator {
    /// Creates an empty accumulator scoped to vacancies whose name contains `job`.
    pub fn new(job: &str) -> Self {
        Accumulator {
            job: job.to_string(),
            years: BTreeMap::new(),
            cities: HashMap::new(),
            total: 0,
        }
    }

    /// Adds one record. `position` is its index in the whole input.
    pub fn add(&mut self, position: usize, record: &StatsVacancy) {
        let year = self.years.entry(record.year).or_default();
        let salary = i128::from(record.salary);
        year.salary += salary;
        year.count += 1;
        if record.name.contains(self.job.as_str()) {
            year.job_salary += salary;
            year.job_count += 1;
        }

        let city = self
            .cities
            .entry(record.city.clone())
            .or_insert(CityTotals {
                first_seen: position,
                salary: 0,
                count: 0,
            });
        city.first_seen = city.first_seen.min(position);
        city.salary += salary;
        city.count += 1;

        self.total += 1;
    }

    /// Folds the totals of another accumulator into this one.
    pub fn merge(&mut self, other: Accumulator) {
        for (year, totals) in other.years {
            let entry = self.years.entry(year).or_default();
            entry.salary += totals.salary;
            entry.count += totals.count;
            entry.job_salary += totals.job_salary;
            entry.job_count += totals.job_count;
        }
        for (name, totals) in other.cities {
            self.cities
                .entry(name)
                .and_modify(|entry| {
                    entry.first_seen = entry.first_seen.min(totals.first_seen);
                    entry.salary += totals.salary;
                    entry.count += totals.count;
                })
                .or_insert(totals);
        }
        self.total += other.total;
    }

    /// Number of records added so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Computes averages and city rankings.
    pub fn finish(self) -> Statistics {
        let mut stats = Statistics::default();
        for (year, totals) in &self.years {
            stats
                .salary_by_year
                .insert(*year, floor_mean(totals.salary, totals.count));
            stats.count_by_year.insert(*year, totals.count);
            stats
                .job_salary_by_year
                .insert(*year, floor_mean(totals.job_salary, totals.job_count));
            stats.job_count_by_year.insert(*year, totals.job_count);
        }

        let job_matches: u64 = stats.job_count_by_year.values().sum();
        if self.total > 0 && job_matches == 0 {
            warn!(job = %self.job, "no vacancy name contains the job filter");
        }

        let mut cities: Vec<(String, CityTotals)> = self
            .cities
            .into_iter()
            .filter(|(_, totals)| qualifies(totals.count, self.total))
            .collect();
        cities.sort_by_key(|(_, totals)| totals.first_seen);
        debug!(qualifying = cities.len(), "ranked cities");

        let mut salary_by_city: Vec<(String, i64)> = cities
            .iter()
            .map(|(name, totals)| (name.clone(), floor_mean(totals.salary, totals.count)))
            .collect();
        salary_by_city.sort_by(|a, b| b.1.cmp(&a.1));
        salary_by_city.truncate(TOP_CITIES);
        stats.salary_by_city = salary_by_city;

        let qualifying = cities.len();
        let mut share_by_city: Vec<(String, f64)> = cities
            .into_iter()
            .map(|(name, totals)| (name, round4(totals.count as f64 / self.total as f64)))
            .collect();
        share_by_city.sort_by(|a, b| b.1.total_cmp(&a.1));
        share_by_city.truncate(TOP_CITIES);
        if qualifying > TOP_CITIES {
            let shown: f64 = share_by_city.iter().map(|(_, share)| share).sum();
            share_by_city.push((OTHER_CITIES_LABEL.to_string(), round4(1.0 - shown)));
        }
        stats.share_by_city = share_by_city;

        stats
    }
}

/// A city qualifies when it holds at least one percent of all vacancies.
fn qualifies(count: u64, total: u64) -> bool {
    total > 0 && 100 * count >= total
}

/// Floor of `sum / count`, or 0 for an empty group.
///
/// Sums are kept as `i128` so that they cannot overflow.
fn floor_mean(sum: i128, count: u64) -> i64 {
    if count == 0 {
        return 0;
    }
    let mean = sum.div_euclid(i128::from(count));
    i64::try_from(mean).unwrap_or(if mean < 0 { i64::MIN } else { i64::MAX })
}

/// Rounds to four decimal places.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Aggregates records sequentially.
pub fn aggregate(records: &[StatsVacancy], job: &str) -> Statistics {
    let mut accumulator = Accumulator::new(job);
    for (position, record) in records.iter().enumerate() {
        accumulator.add(position, record);
    }
    accumulator.finish()
}
