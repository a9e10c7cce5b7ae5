use std::{fmt::Display, str::FromStr};

use clap::ValueEnum;

use super::PlacementError;

/// How lamps are spread along the vault.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum DistributionMode {
    /// Evenly spaced along the floor, then projected up onto the dome.
    Linear,
    /// Evenly spaced by angle along the dome.
    #[default]
    Radial,
}

impl DistributionMode {
    pub const NAMES: [&'static str; 2] = ["linear", "radial"];
}

impl Display for DistributionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionMode::Linear => write!(f, "linear"),
            DistributionMode::Radial => write!(f, "radial"),
        }
    }
}

impl FromStr for DistributionMode {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "radial" => Ok(Self::Radial),
            _ => Err(PlacementError::InvalidMode(s.to_string())),
        }
    }
}
