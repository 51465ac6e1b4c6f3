use std::{cell::OnceCell, fmt};

use jiff::{ToSpan, Zoned, civil::Date};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    Anchor, Anchors, Error, Policy, Season, Series, Year, anchors,
    anchors::{week_start, weeks_between},
    consts::{
        CHRISTMAS_WEEK_BASE, EPIPHANY_WEEK_BASE, LAST_SUNDAY_WEEK, LAST_SUNDAY_WEEKS, LENT_WEEKS,
        PENTECOST_WEEKS, TRANSFIGURATION_WEEK_BASE,
    },
};

/// Liturgical position of a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observance {
    pub date:        Date,
    pub season:      Season,
    /// Week of the church year
    pub week:        i32,
    /// Week of the season, starting at 1
    pub season_week: i32,
    pub privileged:  bool,
    /// Present only for three-year lectionaries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series:      Option<Series>,
}

/// Values derived from the reference date, each computed at most once.
#[derive(Debug, Clone, Default)]
struct Cache {
    sunday:          OnceCell<Date>,
    christmas:       OnceCell<Date>,
    advent:          OnceCell<Date>,
    last_sunday:     OnceCell<Date>,
    end_of_year:     OnceCell<Date>,
    epiphany:        OnceCell<Date>,
    easter:          OnceCell<Date>,
    lent:            OnceCell<Date>,
    transfiguration: OnceCell<Date>,
    pentecost:       OnceCell<Date>,
    week:            OnceCell<i32>,
    privileged:      OnceCell<bool>,
    season:          OnceCell<Season>,
    season_week:     OnceCell<i32>,
    series:          OnceCell<Option<Series>>,
}

impl Cache {
    const fn anchor(&self, anchor: Anchor) -> &OnceCell<Date> {
        match anchor {
            Anchor::Sunday => &self.sunday,
            Anchor::Christmas => &self.christmas,
            Anchor::Advent => &self.advent,
            Anchor::LastSunday => &self.last_sunday,
            Anchor::EndOfYear => &self.end_of_year,
            Anchor::Epiphany => &self.epiphany,
            Anchor::Easter => &self.easter,
            Anchor::Lent => &self.lent,
            Anchor::Transfiguration => &self.transfiguration,
            Anchor::Pentecost => &self.pentecost,
        }
    }

    fn len(&self) -> usize {
        let anchors = Anchor::ALL.iter().filter(|&&anchor| self.anchor(anchor).get().is_some()).count();
        let derived = [
            self.week.get().is_some(),
            self.privileged.get().is_some(),
            self.season.get().is_some(),
            self.season_week.get().is_some(),
            self.series.get().is_some(),
        ];
        anchors + derived.iter().filter(|&&cached| cached).count()
    }
}

fn memo<T: Copy + fmt::Debug>(cell: &OnceCell<T>, name: impl fmt::Display, compute: impl FnOnce() -> T) -> T {
    *cell.get_or_init(|| {
        let value = compute();
        trace!(anchor = %name, ?value, "computed");
        value
    })
}

/// Places a date within the liturgical calendar.
///
/// Anchor dates and derived values are computed lazily and cached until the
/// date changes. A calculator is not `Sync`; give each thread its own.
///
/// # Example
///
/// ```
/// use jiff::civil::date;
/// use lectionary::{Calculator, Season};
///
/// let calc = Calculator::new(date(2024, 3, 31)).unwrap();
///
/// assert_eq!(calc.easter(), date(2024, 3, 31));
/// assert_eq!(calc.season(), Season::EASTER);
/// assert_eq!(calc.season_week(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    date:   Date,
    year:   Year,
    policy: Policy,
    cache:  Cache,
}

impl Calculator {
    /// Creates a calculator for `date` under the historic policy.
    ///
    /// # Errors
    /// Returns `Error::InvalidYear` if the date's year is outside 1..=9999.
    pub fn new(date: Date) -> Result<Self, Error> {
        Self::with_policy(date, Policy::HISTORIC)
    }

    /// Creates a calculator for `date` under `policy`.
    ///
    /// # Errors
    /// Returns `Error::InvalidYear` if the date's year is outside 1..=9999.
    pub fn with_policy(date: Date, policy: Policy) -> Result<Self, Error> {
        Ok(Self {
            date,
            year: Year::of(date)?,
            policy,
            cache: Cache::default(),
        })
    }

    /// Creates a calculator for today's date in the system time zone.
    ///
    /// # Errors
    /// Returns `Error::InvalidYear` if the system clock is outside 1..=9999.
    pub fn today(policy: Policy) -> Result<Self, Error> {
        Self::with_policy(Zoned::now().date(), policy)
    }

    pub const fn date(&self) -> Date {
        self.date
    }

    pub const fn policy(&self) -> Policy {
        self.policy
    }

    /// Moves the calculator to another date.
    ///
    /// A different date discards every cached value; the same date keeps them.
    ///
    /// # Errors
    /// Returns `Error::InvalidYear` if the date's year is outside 1..=9999.
    /// The calculator is left unchanged.
    pub fn set_date(&mut self, date: Date) -> Result<(), Error> {
        if date == self.date {
            return Ok(());
        }
        let year = Year::of(date)?;

        debug!(from = %self.date, to = %date, cached = self.cache.len(), "date changed, clearing cache");
        self.date = date;
        self.year = year;
        self.cache = Cache::default();
        Ok(())
    }

    /// Whether an anchor has been computed for the current date.
    pub fn is_cached(&self, anchor: Anchor) -> bool {
        self.cache.anchor(anchor).get().is_some()
    }

    /// Number of values, anchors and derived alike, cached for the current date.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Looks up an anchor date by name.
    pub fn anchor(&self, anchor: Anchor) -> Date {
        match anchor {
            Anchor::Sunday => self.sunday(),
            Anchor::Christmas => self.christmas(),
            Anchor::Advent => self.advent(),
            Anchor::LastSunday => self.last_sunday(),
            Anchor::EndOfYear => self.end_of_year(),
            Anchor::Epiphany => self.epiphany(),
            Anchor::Easter => self.easter(),
            Anchor::Lent => self.lent(),
            Anchor::Transfiguration => self.transfiguration(),
            Anchor::Pentecost => self.pentecost(),
        }
    }

    /// All anchors of the current year.
    pub fn anchors(&self) -> Anchors {
        Anchors {
            epiphany:        self.epiphany(),
            transfiguration: self.transfiguration(),
            lent:            self.lent(),
            easter:          self.easter(),
            pentecost:       self.pentecost(),
            end_of_year:     self.end_of_year(),
            last_sunday:     self.last_sunday(),
            advent:          self.advent(),
            christmas:       self.christmas(),
        }
    }

    /// Start of the week containing the date.
    pub fn sunday(&self) -> Date {
        memo(&self.cache.sunday, Anchor::Sunday, || week_start(self.date))
    }

    pub fn christmas(&self) -> Date {
        memo(&self.cache.christmas, Anchor::Christmas, || anchors::christmas(self.year))
    }

    pub fn advent(&self) -> Date {
        memo(&self.cache.advent, Anchor::Advent, || {
            anchors::advent_from(self.christmas())
        })
    }

    pub fn last_sunday(&self) -> Date {
        memo(&self.cache.last_sunday, Anchor::LastSunday, || {
            self.advent() - LAST_SUNDAY_WEEKS.weeks()
        })
    }

    pub fn end_of_year(&self) -> Date {
        memo(&self.cache.end_of_year, Anchor::EndOfYear, || {
            self.last_sunday() - self.policy.end_of_year_weeks().weeks()
        })
    }

    pub fn epiphany(&self) -> Date {
        memo(&self.cache.epiphany, Anchor::Epiphany, || anchors::epiphany(self.year))
    }

    pub fn easter(&self) -> Date {
        memo(&self.cache.easter, Anchor::Easter, || anchors::easter(self.year))
    }

    pub fn lent(&self) -> Date {
        memo(&self.cache.lent, Anchor::Lent, || self.easter() - LENT_WEEKS.weeks())
    }

    pub fn transfiguration(&self) -> Date {
        memo(&self.cache.transfiguration, Anchor::Transfiguration, || {
            self.easter() - self.policy.transfiguration_weeks().weeks()
        })
    }

    pub fn pentecost(&self) -> Date {
        memo(&self.cache.pentecost, Anchor::Pentecost, || self.easter() + PENTECOST_WEEKS.weeks())
    }

    /// Week of the church year containing the date.
    pub fn week(&self) -> i32 {
        memo(&self.cache.week, "week", || {
            let sunday = self.sunday();
            if sunday >= self.advent() {
                weeks_between(self.advent(), sunday)
            } else if sunday >= self.epiphany() && sunday < self.transfiguration() {
                weeks_between(self.epiphany(), sunday) + EPIPHANY_WEEK_BASE
            } else if sunday < self.epiphany() {
                CHRISTMAS_WEEK_BASE - weeks_between(sunday, self.epiphany())
            } else if sunday >= self.transfiguration() && sunday < self.end_of_year() {
                weeks_between(self.transfiguration(), sunday) + TRANSFIGURATION_WEEK_BASE
            } else {
                // Week starts are aligned, so nothing falls between Last Sunday and Advent
                LAST_SUNDAY_WEEK - weeks_between(sunday, self.last_sunday())
            }
        })
    }

    /// Whether the date's week keeps its own propers over the season's.
    pub fn privileged(&self) -> bool {
        memo(&self.cache.privileged, "privileged", || {
            self.policy.is_privileged(self.week(), self.sunday())
        })
    }

    /// Season containing the date.
    pub fn season(&self) -> Season {
        memo(&self.cache.season, "season", || {
            let date = self.date;
            if date >= self.advent() && date < self.christmas() {
                Season::ADVENT
            } else if date >= self.christmas() || date < self.epiphany() {
                Season::CHRISTMAS
            } else if date == self.transfiguration() {
                Season::TRANSFIGURATION
            } else if date < self.lent() {
                Season::EPIPHANY
            } else if date < self.easter() {
                Season::LENT
            } else if date < self.pentecost() {
                Season::EASTER
            } else if date < self.end_of_year() {
                Season::PENTECOST
            } else if date == self.last_sunday() {
                Season::LAST_SUNDAY
            } else {
                Season::END_OF_YEAR
            }
        })
    }

    /// Week of the current season, starting at 1.
    pub fn season_week(&self) -> i32 {
        memo(&self.cache.season_week, "season_week", || {
            let season = self.season();
            let start = if season == Season::ADVENT {
                self.advent()
            } else if season == Season::CHRISTMAS {
                // Early January belongs to the previous year's Christmas
                let christmas = self.christmas();
                if self.date < christmas { christmas - 1.years() } else { christmas }
            } else if season == Season::EPIPHANY {
                self.epiphany()
            } else if season == Season::LENT {
                self.lent()
            } else if season == Season::EASTER {
                self.easter()
            } else if season == Season::PENTECOST {
                self.pentecost()
            } else if season == Season::END_OF_YEAR {
                self.end_of_year()
            } else {
                // Transfiguration and Last Sunday last a single day
                return 1;
            };
            1 + weeks_between(start, self.date)
        })
    }

    /// Reading series, for three-year lectionaries. Rolls over at Advent.
    pub fn series(&self) -> Option<Series> {
        memo(&self.cache.series, "series", || {
            self.policy.has_series().then(|| {
                let year = i32::from(self.year);
                Series::for_year(if self.date < self.advent() { year - 1 } else { year })
            })
        })
    }

    /// Everything known about the date.
    pub fn observance(&self) -> Observance {
        Observance {
            date:        self.date,
            season:      self.season(),
            week:        self.week(),
            season_week: self.season_week(),
            privileged:  self.privileged(),
            series:      self.series(),
        }
    }
}
