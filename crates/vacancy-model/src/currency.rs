//! Currency conversion table.
//!
//! Salaries are published in ten currencies. Each one has an ISO-like code as
//! it appears in the source data, a display name used in salary descriptions,
//! and a fixed exchange rate to roubles used for every salary comparison,
//! sort key, and statistic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VacancyError;

/// A supported salary currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Azerbaijani manat.
    Azn,
    /// Belarusian rouble (pre-2016 code).
    Byr,
    /// Euro.
    Eur,
    /// Georgian lari.
    Gel,
    /// Kyrgyz som.
    Kgs,
    /// Kazakh tenge.
    Kzt,
    /// Russian rouble, the reference currency.
    Rur,
    /// Ukrainian hryvnia.
    Uah,
    /// US dollar.
    Usd,
    /// Uzbek sum.
    Uzs,
}

impl Currency {
    /// All currencies in table order.
    pub const ALL: [Currency; 10] = [
        Currency::Azn,
        Currency::Byr,
        Currency::Eur,
        Currency::Gel,
        Currency::Kgs,
        Currency::Kzt,
        Currency::Rur,
        Currency::Uah,
        Currency::Usd,
        Currency::Uzs,
    ];

    /// Returns the code as it appears in the `salary_currency` column.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Azn => "AZN",
            Currency::Byr => "BYR",
            Currency::Eur => "EUR",
            Currency::Gel => "GEL",
            Currency::Kgs => "KGS",
            Currency::Kzt => "KZT",
            Currency::Rur => "RUR",
            Currency::Uah => "UAH",
            Currency::Usd => "USD",
            Currency::Uzs => "UZS",
        }
    }

    /// Returns the display name used inside salary descriptions.
    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Azn => "Манаты",
            Currency::Byr => "Белорусские рубли",
            Currency::Eur => "Евро",
            Currency::Gel => "Грузинский лари",
            Currency::Kgs => "Киргизский сом",
            Currency::Kzt => "Тенге",
            Currency::Rur => "Рубли",
            Currency::Uah => "Гривны",
            Currency::Usd => "Доллары",
            Currency::Uzs => "Узбекский сум",
        }
    }

    /// Returns the number of roubles per unit of this currency.
    pub fn rate_to_rub(&self) -> f64 {
        match self {
            Currency::Azn => 35.68,
            Currency::Byr => 23.91,
            Currency::Eur => 59.90,
            Currency::Gel => 21.74,
            Currency::Kgs => 0.76,
            Currency::Kzt => 0.13,
            Currency::Rur => 1.0,
            Currency::Uah => 1.64,
            Currency::Usd => 60.66,
            Currency::Uzs => 0.0055,
        }
    }

    /// Converts an amount in this currency to roubles.
    pub fn to_rub(&self, amount: f64) -> f64 {
        amount * self.rate_to_rub()
    }

    /// Looks up a currency by its data code (e.g. `RUR`).
    pub fn from_code(code: &str) -> Option<Currency> {
        Currency::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Looks up a currency by its display name (e.g. `Рубли`).
    pub fn from_display_name(name: &str) -> Option<Currency> {
        Currency::ALL.into_iter().find(|c| c.display_name() == name)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Currency {
    type Err = VacancyError;

    /// Accepts either the data code or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Currency::from_code(trimmed)
            .or_else(|| Currency::from_display_name(trimmed))
            .ok_or_else(|| VacancyError::UnknownCurrency {
                currency: trimmed.to_string(),
            })
    }
}
