use thiserror::Error;

/// Errors raised while turning raw vacancy data and user queries into results.
///
/// Every variant is fatal for the current run: callers report it and stop
/// before producing any table or statistics.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VacancyError {
    // === Input ===
    /// The input has no header row.
    #[error("input is empty")]
    EmptyInput,

    /// Every data row was rejected during validation.
    #[error("input contains no valid rows")]
    NoValidData,

    /// A required column is absent from the header.
    #[error("required column '{column}' is missing")]
    MissingColumn { column: String },

    // === Query ===
    /// The filter criterion has no `:` separator.
    #[error("invalid filter format '{input}': expected '<field>: <value>'")]
    InvalidFilterFormat { input: String },

    /// The filter criterion names a field that cannot be filtered on.
    #[error("unknown filter field '{field}'")]
    InvalidFilterField { field: String },

    /// The sort criterion names an unknown field.
    #[error("unknown sort field '{field}'")]
    InvalidSortField { field: String },

    /// The sort order flag is neither yes nor no.
    #[error("invalid sort order flag '{value}'")]
    InvalidSortOrderFlag { value: String },

    /// The output range is not one or two positive integers.
    #[error("invalid output range '{input}'")]
    InvalidRange { input: String },

    /// A requested column label is unknown.
    #[error("unknown column '{label}'")]
    InvalidColumn { label: String },

    /// The filter excluded every record.
    #[error("no vacancies match the filter")]
    EmptyFilterResult,

    // === Values ===
    /// A coded value has no entry in its lookup table.
    #[error("unknown {field} value '{value}'")]
    UnknownEnumValue { field: String, value: String },

    /// A currency code or name is not in the conversion table.
    #[error("unknown currency '{currency}'")]
    UnknownCurrency { currency: String },

    /// An experience label has no sort priority.
    #[error("unknown experience label '{label}'")]
    UnknownExperienceLabel { label: String },

    /// A numeric field failed to parse.
    #[error("invalid number '{value}' in {field}")]
    InvalidNumber { field: String, value: String },

    /// A publication timestamp failed to parse.
    #[error("invalid publication date '{value}'")]
    InvalidDate { value: String },
}

pub type Result<T> = std::result::Result<T, VacancyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VacancyError::UnknownCurrency {
            currency: "XYZ".to_string(),
        };
        assert_eq!(err.to_string(), "unknown currency 'XYZ'");

        let err = VacancyError::InvalidNumber {
            field: "salary_from".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid number 'abc' in salary_from");
    }
}
