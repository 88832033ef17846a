use std::fmt;

use serde::{Deserialize, Serialize};

/// Occupancy code stored in the second word of an item record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemStatus {
    Active,
    #[default]
    Inactive,
}

impl ItemStatus {
    pub const ACTIVE_RAW: i32 = 0x0007_0000;
    pub const INACTIVE_RAW: i32 = -1;

    /// Codes other than the two known values collapse to `Inactive`.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            Self::ACTIVE_RAW => Self::Active,
            _ => Self::Inactive,
        }
    }

    pub fn is_known_raw(raw: i32) -> bool {
        raw == Self::ACTIVE_RAW || raw == Self::INACTIVE_RAW
    }

    pub fn raw(&self) -> i32 {
        match *self {
            Self::Active => Self::ACTIVE_RAW,
            Self::Inactive => Self::INACTIVE_RAW,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
