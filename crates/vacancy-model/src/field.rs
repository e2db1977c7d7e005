//! Field catalogue.
//!
//! Raw vacancy files carry twelve columns; the table shows nine display
//! fields derived from them. Users address display fields by their label in
//! filter, sort, and column queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw column names as they appear in the CSV header.
pub mod columns {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const KEY_SKILLS: &str = "key_skills";
    pub const EXPERIENCE_ID: &str = "experience_id";
    pub const PREMIUM: &str = "premium";
    pub const EMPLOYER_NAME: &str = "employer_name";
    pub const SALARY_FROM: &str = "salary_from";
    pub const SALARY_TO: &str = "salary_to";
    pub const SALARY_GROSS: &str = "salary_gross";
    pub const SALARY_CURRENCY: &str = "salary_currency";
    pub const AREA_NAME: &str = "area_name";
    pub const PUBLISHED_AT: &str = "published_at";

    /// Columns statistics are computed from, in part-file order.
    pub const STATISTICS: [&str; 6] = [
        NAME,
        SALARY_FROM,
        SALARY_TO,
        SALARY_CURRENCY,
        AREA_NAME,
        PUBLISHED_AT,
    ];
}

/// A display field of the vacancy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Description,
    KeySkills,
    Experience,
    Premium,
    Employer,
    Salary,
    Area,
    PublishedAt,
}

impl Field {
    /// Display fields in table order.
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Description,
        Field::KeySkills,
        Field::Experience,
        Field::Premium,
        Field::Employer,
        Field::Salary,
        Field::Area,
        Field::PublishedAt,
    ];

    /// Returns the column header shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Название",
            Field::Description => "Описание",
            Field::KeySkills => "Навыки",
            Field::Experience => "Опыт работы",
            Field::Premium => "Премиум-вакансия",
            Field::Employer => "Компания",
            Field::Salary => "Оклад",
            Field::Area => "Название региона",
            Field::PublishedAt => "Дата публикации вакансии",
        }
    }

    /// Returns the raw column the field is read from.
    ///
    /// The salary field is composed from four raw columns; its key is the
    /// synthetic `salary_description`.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => columns::NAME,
            Field::Description => columns::DESCRIPTION,
            Field::KeySkills => columns::KEY_SKILLS,
            Field::Experience => columns::EXPERIENCE_ID,
            Field::Premium => columns::PREMIUM,
            Field::Employer => columns::EMPLOYER_NAME,
            Field::Salary => "salary_description",
            Field::Area => columns::AREA_NAME,
            Field::PublishedAt => columns::PUBLISHED_AT,
        }
    }

    /// Resolves a user-supplied label or raw key.
    pub fn from_label(label: &str) -> Option<Field> {
        let trimmed = label.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.label() == trimmed || f.key() == trimmed)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A field a filter criterion may name.
///
/// Every display field is filterable; the salary currency is filterable on
/// its own even though it is only shown inside the salary description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Display(Field),
    SalaryCurrency,
}

impl FilterField {
    pub const SALARY_CURRENCY_LABEL: &'static str = "Идентификатор валюты оклада";

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Display(field) => field.label(),
            FilterField::SalaryCurrency => Self::SALARY_CURRENCY_LABEL,
        }
    }

    pub fn from_label(label: &str) -> Option<FilterField> {
        let trimmed = label.trim();
        if trimmed == Self::SALARY_CURRENCY_LABEL || trimmed == columns::SALARY_CURRENCY {
            return Some(FilterField::SalaryCurrency);
        }
        Field::from_label(trimmed).map(FilterField::Display)
    }
}
