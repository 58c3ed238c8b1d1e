use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Storage location of an item.
///
/// The declaration order is the display order used everywhere
/// (Fridge, Freezer, Pantry).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Location {
    #[default]
    Fridge,
    Freezer,
    Pantry,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Fridge, Location::Freezer, Location::Pantry];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Fridge => "Fridge",
            Location::Freezer => "Freezer",
            Location::Pantry => "Pantry",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Location::Fridge => 0,
            Location::Freezer => 1,
            Location::Pantry => 2,
        }
    }

    /// Next location in display order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous location in display order, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fridge" => Ok(Location::Fridge),
            "freezer" => Ok(Location::Freezer),
            "pantry" => Ok(Location::Pantry),
            _ => Err(Error::UnknownLocation(s.to_string())),
        }
    }
}
