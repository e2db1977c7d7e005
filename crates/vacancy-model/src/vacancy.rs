//! Vacancy records.
//!
//! [`Vacancy`] is the single typed record every pipeline stage works on.
//! [`DisplayVacancy`] is its string projection for table output.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::error::{Result, VacancyError};
use crate::experience::Experience;
use crate::field::Field;

/// Timestamp layout of the `published_at` column, e.g. `2022-07-06T02:03:11+0300`.
pub const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Layout of publication dates shown to users and used in date filters.
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a publication timestamp, keeping its UTC offset.
pub fn parse_published_at(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value.trim(), PUBLISHED_AT_FORMAT).map_err(|_| {
        VacancyError::InvalidDate {
            value: value.to_string(),
        }
    })
}

/// Interprets a boolean column. Only `true` (any ASCII case) is true.
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Largest whole amount that still has an exact `i64` representation.
const MAX_WHOLE_AMOUNT: f64 = i64::MAX as f64;

/// Parses a salary bound. The whole part must fit in an `i64`.
fn parse_amount(field: &str, value: &str) -> Result<f64> {
    let invalid = || VacancyError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    };
    let amount = value.trim().parse::<f64>().map_err(|_| invalid())?;
    let whole = amount.trunc();
    if !amount.is_finite() || whole >= MAX_WHOLE_AMOUNT || whole < -MAX_WHOLE_AMOUNT {
        return Err(invalid());
    }
    Ok(amount)
}

/// Published salary range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub from: f64,
    pub to: f64,
    pub currency: Currency,
    /// Whether the amounts are before tax.
    pub gross: bool,
}

impl Salary {
    /// Builds a salary from the four raw salary columns.
    pub fn parse(from: &str, to: &str, currency: &str, gross: &str) -> Result<Salary> {
        let currency_code = currency.trim();
        let currency =
            Currency::from_code(currency_code).ok_or_else(|| VacancyError::UnknownCurrency {
                currency: currency_code.to_string(),
            })?;
        Ok(Salary {
            from: parse_amount("salary_from", from)?,
            to: parse_amount("salary_to", to)?,
            currency,
            gross: parse_flag(gross),
        })
    }

    /// Lower bound with the fraction discarded, as shown to users.
    pub fn from_whole(&self) -> i64 {
        self.from.trunc() as i64
    }

    /// Upper bound with the fraction discarded, as shown to users.
    pub fn to_whole(&self) -> i64 {
        self.to.trunc() as i64
    }

    /// Returns true when `threshold` lies within the shown bounds, inclusive.
    pub fn contains(&self, threshold: f64) -> bool {
        self.from.trunc() <= threshold && threshold <= self.to.trunc()
    }

    /// Mean of the shown bounds converted to roubles.
    pub fn shown_mean_rub(&self) -> f64 {
        self.currency.rate_to_rub() * (self.from.trunc() + self.to.trunc()) / 2.0
    }

    /// Mean of the exact bounds converted to roubles, truncated to whole roubles.
    pub fn mean_rub(&self) -> i64 {
        (0.5 * self.currency.rate_to_rub() * (self.from + self.to)) as i64
    }

    pub fn tax_note(&self) -> &'static str {
        if self.gross {
            "Без вычета налогов"
        } else {
            "С вычетом налогов"
        }
    }
}

/// Canonical vacancy record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub name: String,
    pub description: String,
    pub key_skills: Vec<String>,
    pub experience: Experience,
    pub premium: bool,
    pub employer_name: String,
    pub salary: Salary,
    pub area_name: String,
    pub published_at: DateTime<FixedOffset>,
}

impl Vacancy {
    /// Publication date in the vacancy's own offset, as `DD.MM.YYYY`.
    pub fn published_date(&self) -> String {
        self.published_at.format(DISPLAY_DATE_FORMAT).to_string()
    }

    pub fn premium_label(&self) -> &'static str {
        if self.premium { "Да" } else { "Нет" }
    }
}

/// String projection of a [`Vacancy`] for table output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayVacancy {
    pub name: String,
    pub description: String,
    /// Skills joined by newlines.
    pub key_skills: String,
    pub experience: String,
    pub premium: String,
    pub employer_name: String,
    /// `"<from> - <to> (<currency>) (<tax note>)"`.
    pub salary: String,
    pub area_name: String,
    /// `DD.MM.YYYY`.
    pub published_at: String,
}

impl DisplayVacancy {
    /// Returns the value shown in the given column.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::KeySkills => &self.key_skills,
            Field::Experience => &self.experience,
            Field::Premium => &self.premium,
            Field::Employer => &self.employer_name,
            Field::Salary => &self.salary,
            Field::Area => &self.area_name,
            Field::PublishedAt => &self.published_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_published_at_keeps_offset() {
        let dt = parse_published_at("2022-07-06T02:03:11+0300").unwrap();
        assert_eq!(dt.year(), 2022);
        assert_eq!(dt.hour(), 2);
        assert_eq!(dt.offset().local_minus_utc(), 3 * 3600);
        assert!(parse_published_at("06.07.2022").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("True"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("False"));
        assert!(!parse_flag("yes"));
    }

    #[test]
    fn test_salary_parse_and_bounds() {
        let salary = Salary::parse("70000.9", "80000", "RUR", "True").unwrap();
        assert_eq!(salary.from_whole(), 70000);
        assert!(salary.gross);
        assert!(salary.contains(70000.0));
        assert!(salary.contains(80000.0));
        assert!(!salary.contains(80001.0));
    }

    #[test]
    fn test_salary_parse_errors() {
        assert!(matches!(
            Salary::parse("70000", "80000", "XXX", "False"),
            Err(VacancyError::UnknownCurrency { .. })
        ));
        assert!(matches!(
            Salary::parse("seventy", "80000", "RUR", "False"),
            Err(VacancyError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_salary_rejects_amounts_beyond_whole_range() {
        for amount in ["1e19", "-1e19", "NaN", "inf"] {
            assert!(
                matches!(
                    Salary::parse(amount, amount, "RUR", "False"),
                    Err(VacancyError::InvalidNumber { ref value, .. }) if value == amount
                ),
                "{amount} should be rejected"
            );
        }
    }

    #[test]
    fn test_large_salary_mean_does_not_overflow() {
        let salary = Salary::parse("9e18", "9e18", "USD", "False").unwrap();
        assert_eq!(salary.from_whole(), 9_000_000_000_000_000_000);
        assert!((salary.shown_mean_rub() - 60.66 * 9e18).abs() < 1e6);
        assert_eq!(salary.mean_rub(), i64::MAX);
    }

    #[test]
    fn test_salary_means() {
        let salary = Salary::parse("4500", "5500", "EUR", "False").unwrap();
        assert_eq!(salary.mean_rub(), 299_500);
        assert!((salary.shown_mean_rub() - 299_500.0).abs() < 1e-6);
    }
}
