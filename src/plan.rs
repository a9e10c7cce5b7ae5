use std::{fmt::Display, ops::RangeInclusive};

use crate::{
    math::Point,
    placement::{self, DistributionMode},
    scene::Scene,
};

/// Checked inputs of the point generator, as the planner front ends accept
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LampPlan {
    lamp_count: usize,
    mode: DistributionMode,
    padding: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    LampCountOutOfRange(usize),
    PaddingOutOfRange(f64),
}

impl Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::LampCountOutOfRange(count) => write!(
                f,
                "lamp count {count} is out of range, expected at most {}",
                LampPlan::MAX_LAMPS
            ),
            PlanError::PaddingOutOfRange(padding) => write!(
                f,
                "padding {padding} is out of range, expected a value in [{}, {}]",
                LampPlan::PADDING_RANGE.start(),
                LampPlan::PADDING_RANGE.end()
            ),
        }
    }
}

impl std::error::Error for PlanError {}

impl Default for LampPlan {
    fn default() -> Self {
        Self {
            lamp_count: Self::DEFAULT_LAMPS,
            mode: DistributionMode::default(),
            padding: Self::DEFAULT_PADDING,
        }
    }
}

impl LampPlan {
    pub const MAX_LAMPS: usize = 12;
    pub const DEFAULT_LAMPS: usize = 7;
    pub const PADDING_RANGE: RangeInclusive<f64> = -0.3..=0.04;
    pub const DEFAULT_PADDING: f64 = -0.07;

    pub fn new(lamp_count: usize, mode: DistributionMode, padding: f64) -> Result<Self, PlanError> {
        if lamp_count > Self::MAX_LAMPS {
            return Err(PlanError::LampCountOutOfRange(lamp_count));
        }
        Self::check_padding(padding)?;
        Ok(Self {
            lamp_count,
            mode,
            padding,
        })
    }

    pub fn check_padding(padding: f64) -> Result<f64, PlanError> {
        if Self::PADDING_RANGE.contains(&padding) {
            Ok(padding)
        } else {
            Err(PlanError::PaddingOutOfRange(padding))
        }
    }

    pub fn lamp_count(&self) -> usize {
        self.lamp_count
    }

    pub fn mode(&self) -> DistributionMode {
        self.mode
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn points(&self) -> Vec<Point> {
        placement::generate_points(self.lamp_count, self.mode, self.padding)
    }

    pub fn scene(&self) -> Scene {
        Scene::lamp_plan(self.lamp_count, self.mode, self.padding)
    }
}
