//! Positions within the liturgical calendar for any Gregorian date.
//!
//! A [`Calculator`] is bound to one date and derives, lazily, the anchor
//! dates of that year (Easter, Advent, Christmas, Epiphany and the feasts
//! counted from them), the [`Season`] the date falls in, its week of the
//! church year and of the season, whether its week is privileged, and, for
//! the three-year lectionary, the reading [`Series`].
//!
//! ```
//! use jiff::civil::date;
//! use lectionary::{Calculator, Policy, Season, Series};
//!
//! let calc = Calculator::with_policy(date(2025, 12, 1), Policy::THREE_YEAR).unwrap();
//!
//! assert_eq!(calc.season(), Season::ADVENT);
//! assert_eq!(calc.week(), 0);
//! assert_eq!(calc.series(), Some(Series::A));
//! ```

mod anchors;
mod calculator;
mod consts;
mod policy;
mod prelude;
mod season;
#[cfg(test)]
mod test_utils;
mod year;

pub use anchors::{Anchor, Anchors, advent, christmas, easter, epiphany, week_diff};
pub use calculator::{Calculator, Observance};
pub use consts::*;
pub use policy::{EndOfYear, Lectionary, Policy, Series};
pub use season::{SEASONS, Season, SeasonRegistry};
pub use year::Year;

use jiff::civil::Date;

/// Error type for calendar and season lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Week difference requested with the later date first.
    #[error("Cannot calculate difference in weeks for date ({start}) which exists after its comparing date ({end})")]
    Ordering { start: Date, end: Date },

    /// No season matches the normalized name.
    #[error("No season named {0:?}")]
    SeasonNotFound(String),

    /// Season rank past the end of the registry.
    #[error("Season rank {rank} out of range (registry has {len})")]
    RankOutOfRange { rank: usize, len: usize },

    /// Year outside the supported range.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i16),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_error_messages() {
        let err = Error::Ordering {
            start: date(2024, 4, 1),
            end:   date(2024, 3, 31),
        };
        assert_eq!(
            err.to_string(),
            "Cannot calculate difference in weeks for date (2024-04-01) which exists after its comparing date \
             (2024-03-31)"
        );

        let err = Error::SeasonNotFound("Harvest".to_owned());
        assert_eq!(err.to_string(), r#"No season named "Harvest""#);

        let err = Error::RankOutOfRange { rank: 12, len: 9 };
        assert_eq!(err.to_string(), "Season rank 12 out of range (registry has 9)");

        let err = Error::InvalidYear(0);
        assert_eq!(err.to_string(), "Invalid year: 0 (must be 1-9999)");
    }

    #[test]
    fn test_constants() {
        assert_eq!(MIN_YEAR, 1);
        assert_eq!(MAX_YEAR, 9999);
        assert_eq!(SEASON_NAMES.len(), 9);
    }

    #[test]
    fn test_end_to_end() {
        let mut calc = Calculator::new(date(2024, 3, 31)).expect("date in range");
        assert_eq!(calc.season(), Season::EASTER);
        assert_eq!(calc.season_week(), 1);

        // Advent 2024 begins with the week of December 2
        calc.set_date(date(2024, 12, 1)).expect("date in range");
        assert_eq!(calc.season(), Season::END_OF_YEAR);
        calc.set_date(date(2024, 12, 2)).expect("date in range");
        assert_eq!(calc.season(), Season::ADVENT);

        // Epiphany itself is no longer Christmas
        calc.set_date(date(2025, 1, 5)).expect("date in range");
        assert_eq!(calc.season(), Season::CHRISTMAS);
        calc.set_date(date(2025, 1, 6)).expect("date in range");
        assert_eq!(calc.season(), Season::EPIPHANY);
    }
}
