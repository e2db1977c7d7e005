//! Record normalization.
//!
//! Turns raw CSV rows into [`Vacancy`] records and vacancies into their
//! [`DisplayVacancy`] projection.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use vacancy_ingest::{CsvTable, RawRecord};
use vacancy_model::{
    Currency, DisplayVacancy, Experience, Result, Salary, Vacancy, VacancyError, columns,
    parse_flag, parse_published_at,
};

/// Matches a complete markup tag such as `<li>` or `</strong>`.
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid markup tag regex"));

/// Raw columns a vacancy table must provide.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    columns::NAME,
    columns::DESCRIPTION,
    columns::KEY_SKILLS,
    columns::EXPERIENCE_ID,
    columns::PREMIUM,
    columns::EMPLOYER_NAME,
    columns::SALARY_FROM,
    columns::SALARY_TO,
    columns::SALARY_GROSS,
    columns::SALARY_CURRENCY,
    columns::AREA_NAME,
    columns::PUBLISHED_AT,
];

/// Removes markup tags and normalizes whitespace.
///
/// With `keep_lines` the line structure survives (each line kept as-is);
/// otherwise every whitespace run, newlines included, becomes one space and
/// the ends are trimmed. Angle brackets of unbalanced tags are dropped too,
/// so the result never contains `<` or `>`.
pub fn strip_markup(value: &str, keep_lines: bool) -> String {
    let without_tags = TAG_REGEX.replace_all(value, "");
    let cleaned: String = without_tags
        .chars()
        .filter(|ch| *ch != '<' && *ch != '>')
        .collect();
    if keep_lines {
        cleaned.lines().collect::<Vec<_>>().join("\n")
    } else {
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Formats an integer with its digits grouped by three, separated by spaces.
///
/// `1500003` becomes `1 500 003`.
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders `"<from> - <to> (<currency>) (<tax note>)"`.
pub fn salary_description(salary: &Salary) -> String {
    format!(
        "{} - {} ({}) ({})",
        format_number(salary.from_whole()),
        format_number(salary.to_whole()),
        salary.currency.display_name(),
        salary.tax_note()
    )
}

/// Salary bounds and currency recovered from a salary description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRange {
    pub from: f64,
    pub to: f64,
    pub currency: Currency,
}

/// Parses a string produced by [`salary_description`].
pub fn parse_salary_description(description: &str) -> Result<SalaryRange> {
    let invalid = || VacancyError::InvalidNumber {
        field: "salary_description".to_string(),
        value: description.to_string(),
    };

    let chars: Vec<char> = description.chars().collect();
    let compact: String = chars
        .iter()
        .enumerate()
        .filter(|&(idx, ch)| {
            let between_digits = idx > 0
                && chars[idx - 1].is_ascii_digit()
                && chars.get(idx + 1).is_some_and(char::is_ascii_digit);
            !(*ch == ' ' && between_digits)
        })
        .map(|(_, ch)| *ch)
        .collect();

    let tokens: Vec<&str> = compact.split_whitespace().collect();
    let from = tokens
        .first()
        .and_then(|t| t.parse::<f64>().ok())
        .ok_or_else(invalid)?;
    let to = tokens
        .get(2)
        .and_then(|t| t.parse::<f64>().ok())
        .ok_or_else(invalid)?;

    let name = description
        .split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(name, _)| name)
        .ok_or_else(invalid)?;
    let currency =
        Currency::from_display_name(name).ok_or_else(|| VacancyError::UnknownCurrency {
            currency: name.to_string(),
        })?;

    Ok(SalaryRange { from, to, currency })
}

/// Builds a vacancy from one raw row.
pub fn normalize_record(record: &RawRecord<'_>) -> Result<Vacancy> {
    let text = |column: &str| record.get(column).map(|v| strip_markup(v, false));

    let key_skills = strip_markup(record.get(columns::KEY_SKILLS)?, true)
        .split('\n')
        .map(str::to_string)
        .collect();
    let salary = Salary::parse(
        &text(columns::SALARY_FROM)?,
        &text(columns::SALARY_TO)?,
        &text(columns::SALARY_CURRENCY)?,
        &text(columns::SALARY_GROSS)?,
    )?;

    Ok(Vacancy {
        name: text(columns::NAME)?,
        description: text(columns::DESCRIPTION)?,
        key_skills,
        experience: Experience::from_code(&text(columns::EXPERIENCE_ID)?)?,
        premium: parse_flag(&text(columns::PREMIUM)?),
        employer_name: text(columns::EMPLOYER_NAME)?,
        salary,
        area_name: text(columns::AREA_NAME)?,
        published_at: parse_published_at(&text(columns::PUBLISHED_AT)?)?,
    })
}

/// Normalizes every row of a vacancy table, in file order.
pub fn normalize_table(table: &CsvTable) -> Result<Vec<Vacancy>> {
    table.require_columns(&REQUIRED_COLUMNS)?;
    let vacancies = table
        .records()
        .map(|record| normalize_record(&record))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = vacancies.len(), "normalized vacancies");
    Ok(vacancies)
}

/// Projects a vacancy onto its display strings.
pub fn to_display(vacancy: &Vacancy) -> DisplayVacancy {
    DisplayVacancy {
        name: vacancy.name.clone(),
        description: vacancy.description.clone(),
        key_skills: vacancy.key_skills.join("\n"),
        experience: vacancy.experience.label().to_string(),
        premium: vacancy.premium_label().to_string(),
        employer_name: vacancy.employer_name.clone(),
        salary: salary_description(&vacancy.salary),
        area_name: vacancy.area_name.clone(),
        published_at: vacancy.published_date(),
    }
}
