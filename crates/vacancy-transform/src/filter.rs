//! Vacancy filtering.

use tracing::debug;

use vacancy_model::{Currency, Experience, Field, FilterField, Result, Vacancy, VacancyError};

/// A parsed filter criterion.
///
/// Values are converted to the type they are compared against when the
/// criterion is parsed. A value outside a closed table (an unknown currency,
/// experience label, or premium flag) parses to `None` and matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterCriterion {
    /// Every listed skill must be among the vacancy's skills.
    Skills(Vec<String>),
    /// The threshold must lie within the salary bounds.
    Salary(f64),
    /// Currency given by its display name, e.g. `Рубли`.
    SalaryCurrency(Option<Currency>),
    /// Publication date as `DD.MM.YYYY`.
    PublishedAt(String),
    Experience(Option<Experience>),
    /// `Да` or `Нет`.
    Premium(Option<bool>),
    /// Exact match on a free-text field.
    Text { field: TextField, value: String },
}

/// Fields compared as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Description,
    Employer,
    Area,
}

impl TextField {
    fn value(self, vacancy: &Vacancy) -> &str {
        match self {
            TextField::Name => &vacancy.name,
            TextField::Description => &vacancy.description,
            TextField::Employer => &vacancy.employer_name,
            TextField::Area => &vacancy.area_name,
        }
    }
}

impl FilterCriterion {
    /// Parses `"<field label>: <value>"`.
    ///
    /// Returns `Ok(None)` for blank input, which means "no filter".
    pub fn parse(input: &str) -> Result<Option<FilterCriterion>> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        let (label, value) =
            input
                .split_once(':')
                .ok_or_else(|| VacancyError::InvalidFilterFormat {
                    input: input.to_string(),
                })?;
        let field =
            FilterField::from_label(label).ok_or_else(|| VacancyError::InvalidFilterField {
                field: label.trim().to_string(),
            })?;
        let value = value.trim();
        let text = |field: TextField| FilterCriterion::Text {
            field,
            value: value.to_string(),
        };

        let criterion = match field {
            FilterField::SalaryCurrency => {
                FilterCriterion::SalaryCurrency(Currency::from_display_name(value))
            }
            FilterField::Display(Field::KeySkills) => FilterCriterion::Skills(
                value.split(", ").map(|s| s.trim().to_string()).collect(),
            ),
            FilterField::Display(Field::Salary) => {
                let threshold =
                    value
                        .parse::<f64>()
                        .map_err(|_| VacancyError::InvalidNumber {
                            field: field.label().to_string(),
                            value: value.to_string(),
                        })?;
                FilterCriterion::Salary(threshold)
            }
            FilterField::Display(Field::PublishedAt) => {
                FilterCriterion::PublishedAt(value.to_string())
            }
            FilterField::Display(Field::Experience) => {
                FilterCriterion::Experience(Experience::from_label(value).ok())
            }
            FilterField::Display(Field::Premium) => FilterCriterion::Premium(match value {
                "Да" => Some(true),
                "Нет" => Some(false),
                _ => None,
            }),
            FilterField::Display(Field::Name) => text(TextField::Name),
            FilterField::Display(Field::Description) => text(TextField::Description),
            FilterField::Display(Field::Employer) => text(TextField::Employer),
            FilterField::Display(Field::Area) => text(TextField::Area),
        };
        if matches!(
            criterion,
            FilterCriterion::SalaryCurrency(None)
                | FilterCriterion::Experience(None)
                | FilterCriterion::Premium(None)
        ) {
            debug!(field = field.label(), value, "filter value matches no vacancy");
        }
        Ok(Some(criterion))
    }

    /// Returns true when the vacancy satisfies the criterion.
    pub fn matches(&self, vacancy: &Vacancy) -> bool {
        match self {
            FilterCriterion::Skills(required) => required
                .iter()
                .all(|skill| vacancy.key_skills.iter().any(|s| s == skill)),
            FilterCriterion::Salary(threshold) => vacancy.salary.contains(*threshold),
            FilterCriterion::SalaryCurrency(currency) => {
                *currency == Some(vacancy.salary.currency)
            }
            FilterCriterion::PublishedAt(date) => vacancy.published_date() == *date,
            FilterCriterion::Experience(experience) => *experience == Some(vacancy.experience),
            FilterCriterion::Premium(premium) => *premium == Some(vacancy.premium),
            FilterCriterion::Text { field, value } => field.value(vacancy) == value,
        }
    }
}

/// Keeps the vacancies matching `criterion`, in input order.
///
/// Without a criterion every vacancy is kept. Fails with
/// [`VacancyError::EmptyFilterResult`] when a criterion rejects everything.
pub fn apply_filter(
    vacancies: Vec<Vacancy>,
    criterion: Option<&FilterCriterion>,
) -> Result<Vec<Vacancy>> {
    let Some(criterion) = criterion else {
        return Ok(vacancies);
    };
    let total = vacancies.len();
    let kept: Vec<Vacancy> = vacancies
        .into_iter()
        .filter(|v| criterion.matches(v))
        .collect();
    debug!(total, kept = kept.len(), "applied filter");
    if kept.is_empty() {
        return Err(VacancyError::EmptyFilterResult);
    }
    Ok(kept)
}
