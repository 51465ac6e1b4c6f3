//! Constructors shared by unit tests.

use jiff::civil::{self, Date};

use crate::Year;

pub fn date(year: i16, month: i8, day: i8) -> Date {
    civil::date(year, month, day)
}

pub fn year(value: i16) -> Year {
    Year::new(value).unwrap_or_else(|err| panic!("test year {value}: {err}"))
}
