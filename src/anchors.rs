//! Fixed and movable feast dates that the church year is measured from.
//!
//! Weeks here start on the day the ISO weekday offset counts from (Monday),
//! so a week start is `date - weekday offset` and two dates are a whole
//! number of weeks apart once both are moved to their week starts.

use jiff::{
    ToSpan,
    civil::{self, Date},
};
use serde::{Deserialize, Serialize};

use crate::{
    CHRISTMAS_DAY, DECEMBER, EPIPHANY_DAY, Error, JANUARY, Year,
    consts::{ADVENT_ALIGNED_WEEKS, ADVENT_WEEKS, DAYS_PER_WEEK},
    prelude::*,
};

/// A named anchor date cached by a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Start of the week containing the calculator's date
    #[display(fmt = "sunday")]
    Sunday,
    #[display(fmt = "christmas")]
    Christmas,
    #[display(fmt = "advent")]
    Advent,
    /// Last Sunday of the church year, one week before Advent
    #[display(fmt = "last_sunday")]
    LastSunday,
    /// Start of the end-of-year window
    #[display(fmt = "end_of_year")]
    EndOfYear,
    #[display(fmt = "epiphany")]
    Epiphany,
    #[display(fmt = "easter")]
    Easter,
    #[display(fmt = "lent")]
    Lent,
    #[display(fmt = "transfiguration")]
    Transfiguration,
    #[display(fmt = "pentecost")]
    Pentecost,
}

impl Anchor {
    pub const ALL: [Self; 10] = [
        Self::Sunday,
        Self::Christmas,
        Self::Advent,
        Self::LastSunday,
        Self::EndOfYear,
        Self::Epiphany,
        Self::Easter,
        Self::Lent,
        Self::Transfiguration,
        Self::Pentecost,
    ];
}

/// The anchor dates of one calendar year under one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchors {
    pub epiphany:        Date,
    pub transfiguration: Date,
    pub lent:            Date,
    pub easter:          Date,
    pub pentecost:       Date,
    pub end_of_year:     Date,
    pub last_sunday:     Date,
    pub advent:          Date,
    pub christmas:       Date,
}

/// Easter Sunday of the given year (Gregorian computus).
#[allow(clippy::many_single_char_names, clippy::cast_possible_truncation)]
pub fn easter(year: Year) -> Date {
    let y = i32::from(year);
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    // n / 31 is 3 or 4, n % 31 + 1 at most 31
    civil::date(year.get(), (n / 31) as i8, (n % 31 + 1) as i8)
}

/// December 25 of the given year
pub const fn christmas(year: Year) -> Date {
    civil::date(year.get(), DECEMBER, CHRISTMAS_DAY)
}

/// January 6 of the given year
pub const fn epiphany(year: Year) -> Date {
    civil::date(year.get(), JANUARY, EPIPHANY_DAY)
}

/// Start of Advent preceding Christmas of the given year.
pub fn advent(year: Year) -> Date {
    advent_from(christmas(year))
}

/// Start of Advent preceding the given Christmas Day.
pub(crate) fn advent_from(christmas: Date) -> Date {
    match christmas.weekday().to_monday_zero_offset() {
        0 => christmas - ADVENT_WEEKS.weeks(),
        offset => christmas - i64::from(offset).days() - ADVENT_ALIGNED_WEEKS.weeks(),
    }
}

/// The start of the week containing `date`.
///
/// Only called with dates of a [`Year`], whose week starts are all in range.
pub(crate) fn week_start(date: Date) -> Date {
    date - i64::from(date.weekday().to_monday_zero_offset()).days()
}

/// Number of whole weeks between the week starts of `start` and `end`.
///
/// # Errors
/// Returns `Error::Ordering` if `start` is after `end`.
pub fn week_diff(start: Date, end: Date) -> Result<i32, Error> {
    if start > end {
        return Err(Error::Ordering { start, end });
    }
    Ok(weeks_between(start, end))
}

/// [`week_diff`] for a pair already known to be ordered.
pub(crate) fn weeks_between(start: Date, end: Date) -> i32 {
    debug_assert!(start <= end);
    let days = (end - start).get_days();
    let start_offset = i32::from(start.weekday().to_monday_zero_offset());
    let end_offset = i32::from(end.weekday().to_monday_zero_offset());
    (days - end_offset + start_offset) / DAYS_PER_WEEK
}
