//! Vacancy sorting.

use std::cmp::Ordering;

use vacancy_model::{Field, Result, Vacancy, VacancyError};

/// Field and direction to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCriterion {
    pub field: Field,
    pub descending: bool,
}

impl SortCriterion {
    /// Resolves a sort field label. Blank input means "keep input order".
    pub fn parse(label: &str, descending: bool) -> Result<Option<SortCriterion>> {
        if label.trim().is_empty() {
            return Ok(None);
        }
        let field = Field::from_label(label).ok_or_else(|| VacancyError::InvalidSortField {
            field: label.trim().to_string(),
        })?;
        Ok(Some(SortCriterion { field, descending }))
    }
}

/// Sort key extracted once per vacancy.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Number(f64),
    Count(usize),
    Instant(i64),
    Text(String),
}

impl SortKey {
    fn of(vacancy: &Vacancy, field: Field) -> SortKey {
        match field {
            Field::Salary => SortKey::Number(vacancy.salary.shown_mean_rub()),
            Field::KeySkills => SortKey::Count(vacancy.key_skills.len()),
            Field::PublishedAt => SortKey::Instant(vacancy.published_at.timestamp()),
            Field::Experience => SortKey::Count(usize::from(vacancy.experience.priority())),
            Field::Name => SortKey::Text(vacancy.name.clone()),
            Field::Description => SortKey::Text(vacancy.description.clone()),
            Field::Premium => SortKey::Text(vacancy.premium_label().to_string()),
            Field::Employer => SortKey::Text(vacancy.employer_name.clone()),
            Field::Area => SortKey::Text(vacancy.area_name.clone()),
        }
    }

    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Count(a), SortKey::Count(b)) => a.cmp(b),
            (SortKey::Instant(a), SortKey::Instant(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            // Keys of one sort always share a variant.
            _ => Ordering::Equal,
        }
    }
}

/// Sorts vacancies by `criterion`, stably.
///
/// Descending order reverses the comparator, so equal keys keep their input
/// order in both directions. Without a criterion the input order is kept.
pub fn sort_vacancies(vacancies: Vec<Vacancy>, criterion: Option<SortCriterion>) -> Vec<Vacancy> {
    let Some(SortCriterion { field, descending }) = criterion else {
        return vacancies;
    };
    let mut keyed: Vec<(SortKey, Vacancy)> = vacancies
        .into_iter()
        .map(|v| (SortKey::of(&v, field), v))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.compare(b);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    keyed.into_iter().map(|(_, v)| v).collect()
}
