use crate::domain::errors::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Accepted range for current and last-month prices (currency units per kg).
pub const PRICE_RANGE: RangeInclusive<u32> = 100..=10_000;

/// Accepted range for last month's unit sales.
pub const UNITS_SOLD_RANGE: RangeInclusive<u32> = 0..=5_000;

/// Median monthly sales in the training data, used as the form default.
pub const DEFAULT_UNITS_SOLD: u32 = 1008;
pub const DEFAULT_CURRENT_PRICE: u32 = 1500;
pub const DEFAULT_LAST_MONTH_PRICE: u32 = 1450;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Calendar number, 1 for January through 12 for December.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_number(number: u32) -> Result<Self, InputError> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize).copied())
            .ok_or_else(|| InputError::InvalidMonth(number.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Christmas/New Year (December, January) and Easter (April).
    pub fn is_typically_festive(self) -> bool {
        matches!(self, Month::December | Month::January | Month::April)
    }

    /// Peak harvest runs July through September.
    pub fn is_typically_harvest(self) -> bool {
        matches!(self, Month::July | Month::August | Month::September)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = InputError;

    /// Accepts "2", "February", "feb" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::from_number(number).map_err(|_| InputError::InvalidMonth(s.to_string()));
        }

        let lower = trimmed.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| {
                let name = m.name().to_lowercase();
                name == lower || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| InputError::InvalidMonth(s.to_string()))
    }
}

/// Raw user inputs for a single prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub month: Month,
    pub current_price: u32,
    pub last_month_price: u32,
    pub units_sold_last_month: u32,
    pub is_festive: bool,
    pub is_harvest: bool,
    pub reference_year: i32,
}

impl PredictionInput {
    /// Builds a validated input. Bounds mirror the limits of the input form.
    pub fn new(
        month: Month,
        current_price: u32,
        last_month_price: u32,
        units_sold_last_month: u32,
        is_festive: bool,
        is_harvest: bool,
        reference_year: i32,
    ) -> Result<Self, InputError> {
        let input = Self {
            month,
            current_price,
            last_month_price,
            units_sold_last_month,
            is_festive,
            is_harvest,
            reference_year,
        };
        input.validate()?;
        Ok(input)
    }

    /// Form defaults for the given year.
    pub fn default_for_year(reference_year: i32) -> Self {
        Self {
            month: Month::January,
            current_price: DEFAULT_CURRENT_PRICE,
            last_month_price: DEFAULT_LAST_MONTH_PRICE,
            units_sold_last_month: DEFAULT_UNITS_SOLD,
            is_festive: false,
            is_harvest: false,
            reference_year,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        check_range("current_price", self.current_price, &PRICE_RANGE)?;
        check_range("last_month_price", self.last_month_price, &PRICE_RANGE)?;
        check_range(
            "units_sold_last_month",
            self.units_sold_last_month,
            &UNITS_SOLD_RANGE,
        )?;
        Ok(())
    }

    /// Current price minus last month's price. May be negative.
    pub fn price_change(&self) -> i64 {
        i64::from(self.current_price) - i64::from(self.last_month_price)
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), InputError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(InputError::OutOfRange {
            field,
            value: i64::from(value),
            min: i64::from(*range.start()),
            max: i64::from(*range.end()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_numbers_round_trip() {
        for (idx, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.number(), idx as u32 + 1);
            assert_eq!(Month::from_number(month.number()).unwrap(), *month);
        }
        assert!(Month::from_number(0).is_err());
        assert!(Month::from_number(13).is_err());
    }

    #[test]
    fn test_month_parsing() {
        assert_eq!("2".parse::<Month>().unwrap(), Month::February);
        assert_eq!("december".parse::<Month>().unwrap(), Month::December);
        assert_eq!(" Sep ".parse::<Month>().unwrap(), Month::September);
        assert_eq!(
            "Smarch".parse::<Month>(),
            Err(InputError::InvalidMonth("Smarch".to_string()))
        );
        assert!("ju".parse::<Month>().is_err());
    }

    #[test]
    fn test_seasonal_calendar() {
        let festive: Vec<_> = Month::ALL
            .iter()
            .filter(|m| m.is_typically_festive())
            .collect();
        assert_eq!(
            festive,
            vec![&Month::January, &Month::April, &Month::December]
        );
        assert!(Month::August.is_typically_harvest());
        assert!(!Month::October.is_typically_harvest());
    }

    #[test]
    fn test_input_bounds() {
        assert!(PredictionInput::new(Month::May, 100, 10_000, 0, false, false, 2025).is_ok());

        let err = PredictionInput::new(Month::May, 99, 1450, 10, false, false, 2025).unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange {
                field: "current_price",
                value: 99,
                min: 100,
                max: 10_000
            }
        );

        let err =
            PredictionInput::new(Month::May, 1500, 1450, 5_001, false, false, 2025).unwrap_err();
        assert!(matches!(
            err,
            InputError::OutOfRange {
                field: "units_sold_last_month",
                ..
            }
        ));
    }

    #[test]
    fn test_defaults_are_valid() {
        let input = PredictionInput::default_for_year(2026);
        assert!(input.validate().is_ok());
        assert_eq!(input.units_sold_last_month, 1008);
        assert_eq!(input.price_change(), 50);
    }
}
