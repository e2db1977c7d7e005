//! Required work experience.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VacancyError;

/// Experience level as published with a vacancy.
///
/// Variants are declared in ascending order of seniority, which is also
/// their sort priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Experience {
    /// No experience required.
    NoExperience,
    /// From one to three years.
    Between1And3,
    /// From three to six years.
    Between3And6,
    /// More than six years.
    MoreThan6,
}

impl Experience {
    pub const ALL: [Experience; 4] = [
        Experience::NoExperience,
        Experience::Between1And3,
        Experience::Between3And6,
        Experience::MoreThan6,
    ];

    /// Returns the code used in the `experience_id` column.
    pub fn code(&self) -> &'static str {
        match self {
            Experience::NoExperience => "noExperience",
            Experience::Between1And3 => "between1And3",
            Experience::Between3And6 => "between3And6",
            Experience::MoreThan6 => "moreThan6",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Experience::NoExperience => "Нет опыта",
            Experience::Between1And3 => "От 1 года до 3 лет",
            Experience::Between3And6 => "От 3 до 6 лет",
            Experience::MoreThan6 => "Более 6 лет",
        }
    }

    /// Returns the ordinal used when sorting by experience.
    pub fn priority(&self) -> u8 {
        match self {
            Experience::NoExperience => 0,
            Experience::Between1And3 => 1,
            Experience::Between3And6 => 2,
            Experience::MoreThan6 => 3,
        }
    }

    /// Parses a data code such as `between1And3`.
    pub fn from_code(code: &str) -> Result<Experience, VacancyError> {
        Experience::ALL
            .into_iter()
            .find(|e| e.code() == code)
            .ok_or_else(|| VacancyError::UnknownEnumValue {
                field: "experience_id".to_string(),
                value: code.to_string(),
            })
    }

    /// Parses a display label such as `От 3 до 6 лет`.
    pub fn from_label(label: &str) -> Result<Experience, VacancyError> {
        Experience::ALL
            .into_iter()
            .find(|e| e.label() == label)
            .ok_or_else(|| VacancyError::UnknownExperienceLabel {
                label: label.to_string(),
            })
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Experience {
    type Err = VacancyError;

    /// Parses a display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Experience::from_label(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(
            Experience::from_code("between1And3").unwrap(),
            Experience::Between1And3
        );
        assert!(matches!(
            Experience::from_code("between6And10"),
            Err(VacancyError::UnknownEnumValue { .. })
        ));
    }

    #[test]
    fn test_from_label() {
        assert_eq!(
            "Более 6 лет".parse::<Experience>().unwrap(),
            Experience::MoreThan6
        );
        assert!(matches!(
            Experience::from_label("Много лет"),
            Err(VacancyError::UnknownExperienceLabel { .. })
        ));
    }

    #[test]
    fn test_priority_matches_order() {
        let priorities: Vec<u8> = Experience::ALL.iter().map(Experience::priority).collect();
        assert_eq!(priorities, vec![0, 1, 2, 3]);
    }
}
