//! Lamp anchor positions on the vault.
//!
//! The vault cross-section is the upper half of a circle of radius [`VAULT_R`]
//! centred at the origin. Every function here is pure: the same lamp count,
//! mode and padding always produce the same points, in the same order.

pub mod linear;
pub mod mode;
pub mod radial;

use std::fmt::Display;

use log::debug;

use crate::math::Point;

pub use mode::DistributionMode;

pub const VAULT_R: f64 = 1.;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    InvalidMode(String),
}

impl Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::InvalidMode(name) => write!(
                f,
                "invalid distribution mode `{name}`, expected one of: {}",
                DistributionMode::NAMES.join(", ")
            ),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Anchor points for `lamp_count` lamps.
///
/// The result is symmetric under `x -> -x`; an odd count adds exactly one
/// lamp at `x = 0`. Padding is not bounded here, extreme values only make
/// lamps overlap or slide down to the rim.
pub fn generate_points(lamp_count: usize, mode: DistributionMode, padding: f64) -> Vec<Point> {
    let points = match mode {
        DistributionMode::Linear => linear::linear_points(lamp_count, padding),
        DistributionMode::Radial => radial::radial_points(lamp_count, padding),
    };
    debug!("{mode} placement of {lamp_count} lamps with padding {padding}: {points:?}");
    points
}

/// Same as [`generate_points`] with the mode given by name.
pub fn generate_points_by_name(
    lamp_count: usize,
    mode: &str,
    padding: f64,
) -> Result<Vec<Point>, PlacementError> {
    let mode = mode.parse()?;
    Ok(generate_points(lamp_count, mode, padding))
}
