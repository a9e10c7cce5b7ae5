use std::ops;

use super::approx_eq::ApproxEq;

/// A position in the vault cross-section plane.
/// The origin is the centre of the dome and `y` grows upward.
#[derive(Copy, Clone, Debug, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(0., 0.)
    }

    /// A point on the floor line `y = 0`.
    pub fn on_floor(x: f64) -> Self {
        Self::new(x, 0.)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Reflection across the vertical axis.
    pub fn mirrored(&self) -> Self {
        Self::new(-self.x, self.y)
    }

    pub fn distance_from_origin(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: Self) -> f64 {
        (*self - other).distance_from_origin()
    }
}

impl ApproxEq for Point {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.x.approx_eq_epsilon(&other.x, epsilon) && self.y.approx_eq_epsilon(&other.y, epsilon)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
