use std::{
    cmp::Ordering,
    collections::HashMap,
    hash::{Hash, Hasher},
    iter::Copied,
    slice,
    str::FromStr,
    sync::LazyLock,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::debug;

use crate::{Error, KEY_SEPARATOR, SEASON_NAMES, prelude::*};

/// The liturgical seasons, built once from [`SEASON_NAMES`].
pub static SEASONS: LazyLock<SeasonRegistry> = LazyLock::new(|| SeasonRegistry::new(&SEASON_NAMES));

/// A named season with a fixed rank in its registry.
///
/// Equality, ordering and hashing use the rank only, so a season also
/// compares directly against a bare `usize` rank.
///
/// Seasons serialize as their display name and deserialize through
/// [`SEASONS`]. A season from any other registry serializes, but reads back
/// only if [`SEASONS`] has a season of the same name.
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "{name}")]
pub struct Season {
    name: &'static str,
    rank: usize,
}

impl Season {
    pub const ADVENT: Self = Self::new(SEASON_NAMES[0], 0);
    pub const CHRISTMAS: Self = Self::new(SEASON_NAMES[1], 1);
    pub const EPIPHANY: Self = Self::new(SEASON_NAMES[2], 2);
    pub const TRANSFIGURATION: Self = Self::new(SEASON_NAMES[3], 3);
    pub const LENT: Self = Self::new(SEASON_NAMES[4], 4);
    pub const EASTER: Self = Self::new(SEASON_NAMES[5], 5);
    pub const PENTECOST: Self = Self::new(SEASON_NAMES[6], 6);
    pub const END_OF_YEAR: Self = Self::new(SEASON_NAMES[7], 7);
    pub const LAST_SUNDAY: Self = Self::new(SEASON_NAMES[8], 8);

    pub(crate) const fn new(name: &'static str, rank: usize) -> Self {
        Self { name, rank }
    }

    /// Display name, as declared
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Zero-based position in the registry
    pub const fn rank(&self) -> usize {
        self.rank
    }

    /// Normalized lookup key, e.g. `end_of_year`
    pub fn key(&self) -> String {
        normalize(self.name)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', KEY_SEPARATOR)
}

impl PartialEq for Season {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Season {}

impl PartialEq<usize> for Season {
    fn eq(&self, other: &usize) -> bool {
        self.rank == *other
    }
}

impl PartialOrd for Season {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Season {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl PartialOrd<usize> for Season {
    fn partial_cmp(&self, other: &usize) -> Option<Ordering> {
        Some(self.rank.cmp(other))
    }
}

impl Hash for Season {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SEASONS.get(s)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        SEASONS.get(&name).map_err(de::Error::custom)
    }
}

/// An ordered, immutable set of seasons.
///
/// Ranks follow declaration order. Names are looked up case-insensitively,
/// with spaces and underscores treated alike.
#[derive(Debug, Clone)]
pub struct SeasonRegistry {
    seasons: Vec<Season>,
    ranks:   HashMap<String, usize>,
}

impl SeasonRegistry {
    /// Builds a registry from unique season names, ranked by position.
    ///
    /// # Panics
    /// Panics if two names normalize to the same key, e.g. `"End Of Year"`
    /// and `"end_of_year"`.
    pub fn new(names: &[&'static str]) -> Self {
        let seasons: Vec<Season> = names
            .iter()
            .enumerate()
            .map(|(rank, name)| Season::new(*name, rank))
            .collect();
        let ranks: HashMap<String, usize> = seasons.iter().map(|season| (season.key(), season.rank)).collect();
        assert_eq!(ranks.len(), seasons.len(), "season names must be unique: {names:?}");

        debug!(seasons = seasons.len(), "built season registry");
        Self { seasons, ranks }
    }

    /// Looks up a season by name.
    ///
    /// # Errors
    /// Returns `Error::SeasonNotFound` if no season matches the normalized name.
    pub fn get(&self, name: &str) -> Result<Season, Error> {
        self.ranks
            .get(&normalize(name))
            .and_then(|&rank| self.seasons.get(rank))
            .copied()
            .ok_or_else(|| Error::SeasonNotFound(name.to_owned()))
    }

    /// Looks up a season by rank.
    ///
    /// # Errors
    /// Returns `Error::RankOutOfRange` if `rank >= self.len()`.
    pub fn get_rank(&self, rank: usize) -> Result<Season, Error> {
        self.seasons.get(rank).copied().ok_or(Error::RankOutOfRange {
            rank,
            len: self.seasons.len(),
        })
    }

    /// Whether a season matches the normalized name
    pub fn contains(&self, name: &str) -> bool {
        self.ranks.contains_key(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }

    /// Seasons in rank order
    pub fn iter(&self) -> Copied<slice::Iter<'_, Season>> {
        self.seasons.iter().copied()
    }

    /// Normalized lookup keys in rank order
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.seasons.iter().map(Season::key)
    }
}

impl<'a> IntoIterator for &'a SeasonRegistry {
    type IntoIter = Copied<slice::Iter<'a, Season>>;
    type Item = Season;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
