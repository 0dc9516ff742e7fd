use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Day of the planning week, Monday first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// Meal of the day, in eating order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

/// One cell of the week grid.
///
/// Ordering is day-major: `Mon-Breakfast < Mon-Lunch < ... < Sun-Dinner`.
/// On the wire a key is the `"<Day>-<Meal>"` string, so it can be used as a
/// JSON object key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub day: Day,
    pub meal: Meal,
}

impl SlotKey {
    pub const fn new(day: Day, meal: Meal) -> Self {
        Self { day, meal }
    }

    /// All 21 slots in grid order.
    pub fn all() -> impl Iterator<Item = SlotKey> {
        Day::VARIANTS.iter().flat_map(|&day| {
            Meal::VARIANTS
                .iter()
                .map(move |&meal| SlotKey::new(day, meal))
        })
    }

    /// The seven slots of one meal, Monday first.
    pub fn for_meal(meal: Meal) -> impl Iterator<Item = SlotKey> {
        Day::VARIANTS.iter().map(move |&day| SlotKey::new(day, meal))
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.meal)
    }
}

impl FromStr for SlotKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, meal) = s
            .split_once('-')
            .ok_or_else(|| format!("expected <Day>-<Meal>, got '{}'", s))?;
        let day = Day::from_str(day.trim()).map_err(|_| format!("unknown day '{}'", day))?;
        let meal = Meal::from_str(meal.trim()).map_err(|_| format!("unknown meal '{}'", meal))?;
        Ok(SlotKey::new(day, meal))
    }
}

impl Serialize for SlotKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
