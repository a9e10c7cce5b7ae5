use super::VAULT_R;
use crate::math::Point;

/// Spreads `lamp_count` points over the floor line, symmetric about `x = 0`.
///
/// Positive candidates come first, followed by their mirrored counterparts.
/// For an odd count the centre point is emitted once.
pub fn floor_points(lamp_count: usize, padding: f64) -> Vec<Point> {
    if lamp_count == 0 {
        return Vec::new();
    }
    let step = 2. / lamp_count as f64;

    let xs: Vec<f64> = if lamp_count % 2 == 0 {
        let half_step = step / 2.;
        (0..lamp_count / 2)
            .map(|i| {
                let i = i as f64;
                half_step + step * i + padding * (i + step)
            })
            .collect()
    } else {
        (0..=lamp_count / 2)
            .map(|i| {
                let i = i as f64;
                step * i + padding * i
            })
            .collect()
    };

    let mirrored = if lamp_count % 2 == 0 { &xs[..] } else { &xs[1..] };

    xs.iter()
        .map(|&x| Point::on_floor(x))
        .chain(mirrored.iter().map(|&x| Point::on_floor(-x)))
        .collect()
}

/// Lifts a floor point vertically onto the upper half of the vault circle.
/// Points beyond the vault radius end up on its rim at `y = 0`.
pub fn project_to_roof(point: Point) -> Point {
    let ratio = (point.x() / VAULT_R).abs().min(1.);
    Point::new(point.x(), VAULT_R * ratio.acos().sin())
}

pub fn linear_points(lamp_count: usize, padding: f64) -> Vec<Point> {
    floor_points(lamp_count, padding)
        .into_iter()
        .map(project_to_roof)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq_low_prec, math::approx_eq::ApproxEq};

    fn xs(points: &[Point]) -> Vec<f64> {
        points.iter().map(Point::x).collect()
    }

    #[test]
    fn floor_points_even() {
        let points = floor_points(4, 0.);
        let expected = [0.25, 0.75, -0.25, -0.75];
        assert_eq!(points.len(), expected.len());
        for (x, expected) in xs(&points).into_iter().zip(expected) {
            assert_approx_eq_low_prec!(x, expected);
        }
        assert!(points.iter().all(|p| p.y() == 0.));
    }

    #[test]
    fn floor_points_odd_has_single_centre() {
        let points = floor_points(3, 0.);
        let expected = [0., 2. / 3., -2. / 3.];
        assert_eq!(points.len(), 3);
        for (x, expected) in xs(&points).into_iter().zip(expected) {
            assert_approx_eq_low_prec!(x, expected);
        }
        assert_eq!(points.iter().filter(|p| p.x() == 0.).count(), 1);
    }

    #[test]
    fn floor_points_single_lamp() {
        assert_eq!(floor_points(1, -0.2), vec![Point::zero()]);
    }

    #[test]
    fn floor_points_padding_even() {
        // step = 0.5, so x_i = 0.25 + 0.5 i + p (i + 0.5)
        let points = floor_points(4, -0.1);
        assert_approx_eq_low_prec!(points[0].x(), 0.2);
        assert_approx_eq_low_prec!(points[1].x(), 0.6);
        assert_approx_eq_low_prec!(points[2].x(), -0.2);
        assert_approx_eq_low_prec!(points[3].x(), -0.6);
    }

    #[test]
    fn floor_points_padding_odd() {
        let points = floor_points(5, 0.04);
        assert_approx_eq_low_prec!(points[0].x(), 0.);
        assert_approx_eq_low_prec!(points[1].x(), 0.44);
        assert_approx_eq_low_prec!(points[2].x(), 0.88);
        assert_approx_eq_low_prec!(points[3].x(), -0.44);
        assert_approx_eq_low_prec!(points[4].x(), -0.88);
    }

    #[test]
    fn project_to_roof_lies_on_circle() {
        for x in [0., 0.25, -0.5, 0.75, 0.999, -1.] {
            let projected = project_to_roof(Point::on_floor(x));
            assert_approx_eq_low_prec!(projected.x(), x);
            assert_approx_eq_low_prec!(projected.distance_from_origin(), VAULT_R);
            assert!(projected.y() >= 0.);
        }
    }

    #[test]
    fn project_to_roof_clamps_outside_vault() {
        let projected = project_to_roof(Point::on_floor(1.4));
        assert_approx_eq_low_prec!(projected.x(), 1.4);
        assert_approx_eq_low_prec!(projected.y(), 0.);

        let projected = project_to_roof(Point::on_floor(-3.));
        assert_approx_eq_low_prec!(projected.y(), 0.);
    }

    #[test]
    fn linear_four_lamps() {
        let points = linear_points(4, 0.);
        let expected_y = [0.968, 0.661, 0.968, 0.661];
        for (point, y) in points.iter().zip(expected_y) {
            assert_approx_eq_low_prec!(point.y(), y);
            assert_approx_eq_low_prec!(point.y(), (1. - point.x().powi(2)).sqrt());
        }
    }

    #[test]
    fn linear_zero_lamps() {
        assert!(linear_points(0, 0.).is_empty());
        assert!(linear_points(0, -0.3).is_empty());
    }
}
