//! Division record data model.
//!
//! A [`Region`] is one flat record from the source dataset: no tree
//! relationships, just a code, a display name, a level, and a parent-code
//! reference. The hierarchy builder turns an ordered sequence of these into
//! a navigable tree.

use crate::level::Level;
use serde::{Deserialize, Serialize};

/// Parent-code sentinel marking a top-level (province) division.
///
/// Records carrying this value have no administrative parent other than the
/// synthetic root.
pub const NO_PARENT: &str = "0";

/// Reserved code of the synthetic nation-level root.
pub const ROOT_CODE: &str = "000000000000";

/// Display name of the synthetic root.
pub const ROOT_NAME: &str = "People's Republic of China";

/// One administrative-division record, immutable once read.
///
/// Codes are fixed-format identifier strings, unique across the dataset, and
/// compared byte-wise. The two extension fields are independently optional;
/// absence is `None`, never a magic zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Unique division code, e.g. `"110101000000"`.
    pub code: String,
    /// Display name, e.g. `"东城区"`.
    pub name: String,
    /// Administrative depth (informational; not validated against parent).
    pub level: Level,
    /// Code of the parent division, or [`NO_PARENT`] for provinces.
    pub parent_code: String,
    /// Classification tag from the source data.
    pub division_type: i32,
    /// Average house price, when the dataset carries one.
    pub avg_house_price: Option<f64>,
    /// Employment rate, when the dataset carries one.
    pub employment_rate: Option<String>,
}

impl Region {
    /// A record with no extension data, for the common five-column case.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        level: Level,
        parent_code: impl Into<String>,
        division_type: i32,
    ) -> Self {
        Region {
            code: code.into(),
            name: name.into(),
            level,
            parent_code: parent_code.into(),
            division_type,
            avg_house_price: None,
            employment_rate: None,
        }
    }

    /// The synthetic nation-level root record.
    pub fn synthetic_root() -> Self {
        Region::new(ROOT_CODE, ROOT_NAME, Level::NATION, NO_PARENT, 0)
    }

    /// Whether this record attaches directly under the synthetic root.
    #[inline]
    pub fn is_top_level(&self) -> bool {
        self.parent_code == NO_PARENT
    }
}
