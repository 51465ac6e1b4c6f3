use crate::consts::{MAX_YEAR, MIN_YEAR};
use crate::Error;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar year guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999).
///
/// Every anchor date of a year in this range, and every week start inside it,
/// is representable, so anchor arithmetic on a `Year` never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct Year(i16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `Error::InvalidYear` if the value is outside the supported range.
    pub fn new(value: i16) -> Result<Self, Error> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(Error::InvalidYear(value));
        }
        Ok(Self(value))
    }

    /// The year of the given date
    ///
    /// # Errors
    /// Returns `Error::InvalidYear` if the date's year is outside the supported range.
    pub fn of(date: Date) -> Result<Self, Error> {
        Self::new(date.year())
    }

    /// Returns the year value as i16
    #[inline]
    pub const fn get(self) -> i16 {
        self.0
    }
}

impl TryFrom<i16> for Year {
    type Error = Error;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        Self::from(year.0)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2024).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(Error::InvalidYear(0))));
        assert!(matches!(Year::new(-44), Err(Error::InvalidYear(-44))));
        assert!(matches!(Year::new(10000), Err(Error::InvalidYear(10000))));
    }

    #[test]
    fn test_year_of_date() {
        let year = Year::of(date(2024, 3, 31)).expect("2024 is in range");
        assert_eq!(year.get(), 2024);

        let result = Year::of(date(0, 12, 25));
        assert!(matches!(result, Err(Error::InvalidYear(0))));
    }

    #[test]
    fn test_year_conversions() {
        let year: Year = 2024.try_into().expect("2024 is in range");
        assert_eq!(i16::from(year), 2024);
        assert_eq!(i32::from(year), 2024);
        assert_eq!(year.to_string(), "2024");

        let result: Result<Year, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_ordering() {
        let y1 = Year::new(2020).expect("2020 is in range");
        let y2 = Year::new(2024).expect("2024 is in range");
        assert!(y1 < y2);
        assert!(y2 > y1);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).expect("2024 is in range");
        let json = serde_json::to_string(&year).expect("year serializes");
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).expect("year deserializes");
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }
}
