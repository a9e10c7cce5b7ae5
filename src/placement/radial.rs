use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::VAULT_R;
use crate::math::Point;

/// Angles from the vault apex, one per lamp.
/// Positive angles lean to the right, each followed by its negative twin.
pub fn angles(lamp_count: usize, padding: f64) -> Vec<f64> {
    let n = lamp_count as f64;
    let (mut phis, shift) = if lamp_count % 2 == 0 {
        (Vec::with_capacity(lamp_count), 0.)
    } else {
        (vec![0.], PI / (2. * n) * (0.25 + padding) / 0.25)
    };

    let spread = FRAC_PI_2 + TAU * padding;
    for k in 0..lamp_count / 2 {
        let phi = (2 * k + 1) as f64 / n * spread + shift;
        phis.push(phi);
        phis.push(-phi);
    }
    phis
}

/// Position on the vault circle for an angle measured from the apex.
pub fn point_at_angle(phi: f64) -> Point {
    let theta = FRAC_PI_2 - phi;
    Point::new(VAULT_R * theta.cos(), VAULT_R * theta.sin())
}

pub fn radial_points(lamp_count: usize, padding: f64) -> Vec<Point> {
    angles(lamp_count, padding)
        .into_iter()
        .map(point_at_angle)
        .collect()
}
