//! Administrative depth levels.
//!
//! Levels 0–5 have fixed meanings (nation down to village). The builder does
//! not enforce that a child sits exactly one level below its parent — source
//! data occasionally skips a tier, and such records are structurally accepted
//! — so out-of-range values must render without panicking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Administrative depth (0 = nation, 5 = village).
///
/// A thin wrapper over the raw level byte from the source data. Values
/// outside 0–5 are representable and display as `unknown (n)`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Level(pub u8);

impl Level {
    pub const NATION: Level = Level(0);
    pub const PROVINCE: Level = Level(1);
    pub const PREFECTURE: Level = Level(2);
    pub const COUNTY: Level = Level(3);
    pub const TOWNSHIP: Level = Level(4);
    pub const VILLAGE: Level = Level(5);

    /// Display name for the six known levels, `None` otherwise.
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("nation"),
            1 => Some("province"),
            2 => Some("prefecture"),
            3 => Some("county"),
            4 => Some("township"),
            5 => Some("village"),
            _ => None,
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self.0
    }

    /// Whether this is the synthetic root's level.
    #[inline]
    pub fn is_nation(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "unknown ({})", self.0),
        }
    }
}

impl From<u8> for Level {
    fn from(v: u8) -> Self {
        Level(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_have_names() {
        assert_eq!(Level::NATION.name(), Some("nation"));
        assert_eq!(Level::VILLAGE.name(), Some("village"));
        assert_eq!(Level(3).to_string(), "county (3)");
    }

    #[test]
    fn out_of_range_levels_render() {
        assert_eq!(Level(7).name(), None);
        assert_eq!(Level(7).to_string(), "unknown (7)");
    }
}
