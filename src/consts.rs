/// Earliest year a calculator accepts (inclusive)
pub const MIN_YEAR: i16 = 1;
/// Latest year a calculator accepts (inclusive)
pub const MAX_YEAR: i16 = 9999;

/// Liturgical season names, in rank order.
pub const SEASON_NAMES: [&str; 9] = [
    "Advent",
    "Christmas",
    "Epiphany",
    "Transfiguration",
    "Lent",
    "Easter",
    "Pentecost",
    "End Of Year",
    "Last Sunday",
];

/// Month number for January
pub const JANUARY: i8 = 1;
/// Month number for December
pub const DECEMBER: i8 = 12;
/// Day of the month of Christmas
pub const CHRISTMAS_DAY: i8 = 25;
/// Day of the month of Epiphany
pub const EPIPHANY_DAY: i8 = 6;

pub(crate) const DAYS_PER_WEEK: i32 = 7;

// Offsets below are in weeks.

/// Advent when Christmas needs no weekday alignment
pub(crate) const ADVENT_WEEKS: i64 = 4;
/// Advent after aligning Christmas to the start of its week
pub(crate) const ADVENT_ALIGNED_WEEKS: i64 = 3;
/// Last Sunday of the church year, before Advent
pub(crate) const LAST_SUNDAY_WEEKS: i64 = 1;
/// End of year window, before Last Sunday
pub(crate) const END_OF_YEAR_WEEKS: i64 = 3;
/// Michaelmas end of year window, before Last Sunday
pub(crate) const MICHAELMAS_END_OF_YEAR_WEEKS: i64 = 9;
/// Lent, before Easter
pub(crate) const LENT_WEEKS: i64 = 5;
/// Transfiguration, before Easter
pub(crate) const TRANSFIGURATION_WEEKS: i64 = 10;
/// Three-year lectionary Transfiguration, before Easter
pub(crate) const THREE_YEAR_TRANSFIGURATION_WEEKS: i64 = 7;
/// Pentecost, after Easter
pub(crate) const PENTECOST_WEEKS: i64 = 7;

// Church-year week offsets, one per window.
pub(crate) const EPIPHANY_WEEK_BASE: i32 = 5;
pub(crate) const CHRISTMAS_WEEK_BASE: i32 = 8;
pub(crate) const TRANSFIGURATION_WEEK_BASE: i32 = 11;
pub(crate) const LAST_SUNDAY_WEEK: i32 = 58;

/// (month, day) pairs whose week start is never privileged unless it is week 12
pub(crate) const UNPRIVILEGED_WEEK_STARTS: [(i8, i8); 6] = [
    (DECEMBER, 24),
    (DECEMBER, 25),
    (DECEMBER, 26),
    (DECEMBER, 27),
    (DECEMBER, 28),
    (JANUARY, EPIPHANY_DAY),
];

/// Word separator in normalized season lookup keys
pub const KEY_SEPARATOR: &str = "_";
