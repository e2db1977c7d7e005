pub mod currency;
pub mod error;
pub mod experience;
pub mod field;
pub mod vacancy;

pub use currency::Currency;
pub use error::{Result, VacancyError};
pub use experience::Experience;
pub use field::{Field, FilterField, columns};
pub use vacancy::{
    DISPLAY_DATE_FORMAT, DisplayVacancy, PUBLISHED_AT_FORMAT, Salary, Vacancy, parse_flag,
    parse_published_at,
};
