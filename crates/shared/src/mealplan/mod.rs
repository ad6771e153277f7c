use std::{fmt, str::FromStr};

use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Store record holding every planned meal.
pub const PLAN_RECORD: &str = "planRecords";

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Slot {
    Breakfast,
    Lunch,
    Dinner,
}

/// One cell of the weekly grid.
///
/// Ordering follows the grid: day first, then slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MealSlotKey {
    pub day: Day,
    pub slot: Slot,
}

impl MealSlotKey {
    pub fn new(day: Day, slot: Slot) -> Self {
        Self { day, slot }
    }

    /// Every cell of the week in grid order.
    pub fn all() -> impl Iterator<Item = MealSlotKey> {
        Day::VARIANTS.iter().flat_map(|day| {
            Slot::VARIANTS
                .iter()
                .map(move |slot| MealSlotKey::new(*day, *slot))
        })
    }
}

impl fmt::Display for MealSlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.slot)
    }
}

impl FromStr for MealSlotKey {
    type Err = crate::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let Some((day, slot)) = value.trim().split_once('-') else {
            crate::user!("invalid meal slot '{value}', expected <day>-<slot>");
        };

        let Ok(day) = Day::from_str(day) else {
            crate::user!("unknown day '{day}'");
        };

        let Ok(slot) = Slot::from_str(slot) else {
            crate::user!("unknown meal slot '{slot}'");
        };

        Ok(Self { day, slot })
    }
}
