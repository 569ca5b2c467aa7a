use core::fmt;

use serde::{Deserialize, Serialize};

/// Which rendering branch the battery glyph takes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum BatteryStatus {
    /// No battery, or no data: drawn full and crossed out.
    Loss = 1,
    Charge = 2,
    #[default]
    Work = 3,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownStatus(pub i32);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown battery status code {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownStatus {}

impl TryFrom<i32> for BatteryStatus {
    type Error = UnknownStatus;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Loss),
            2 => Ok(Self::Charge),
            3 => Ok(Self::Work),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl From<BatteryStatus> for i32 {
    fn from(status: BatteryStatus) -> Self {
        status as i32
    }
}
