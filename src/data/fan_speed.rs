//! Fan speed setting.

use crate::error::{Error, Result};

/// Fan speed of the cooling unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FanSpeed {
    /// Quietest setting.
    Silent = 0,
    /// Normal operation.
    #[default]
    Regular = 1,
    /// Maximum airflow.
    Boost = 2,
}

impl FanSpeed {
    /// Create from raw value.
    pub fn from_raw(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Silent),
            1 => Ok(Self::Regular),
            2 => Ok(Self::Boost),
            other => Err(Error::InvalidData {
                context: format!("unknown fan speed {}", other),
            }),
        }
    }

    /// Convert to raw value.
    pub fn to_raw(&self) -> u8 {
        *self as u8
    }

    /// Get a human-readable name for this speed.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Silent => "Silent",
            Self::Regular => "Regular",
            Self::Boost => "Boost",
        }
    }
}

impl std::fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
