use derive_builder::Builder;

use super::shape::{Patch, Shape};
use crate::{
    math::{Color, Point},
    placement::VAULT_R,
};

/// Dimensions of the hanging lamp drawn at every anchor point.
///
/// The fixture hangs below its anchor: a thin string, the upper housing,
/// the bulb and a small lower housing, painted in that order.
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
#[builder(default)]
pub struct LampGlyph {
    string_width: f64,
    string_height: f64,
    top_width: f64,
    top_height: f64,
    bulb_radius: f64,
    bottom_width: f64,
    bottom_height: f64,
    color: Color,
}

impl Default for LampGlyph {
    fn default() -> Self {
        Self::with_scale(VAULT_R)
    }
}

impl LampGlyph {
    /// Fixture sized relative to a vault of radius `scale`.
    pub fn with_scale(scale: f64) -> Self {
        Self {
            string_width: scale / 40.,
            string_height: scale / 15.,
            top_width: scale / 15.,
            top_height: scale / 7.,
            bulb_radius: scale / 11.,
            bottom_width: scale / 12.,
            bottom_height: scale / 12.,
            color: Color::red(),
        }
    }

    pub fn bulb_radius(&self) -> f64 {
        self.bulb_radius
    }

    /// Centre of the bulb for a lamp hanging from `anchor`.
    pub fn bulb_center(&self, anchor: Point) -> Point {
        Point::new(anchor.x(), anchor.y() - self.top_height - self.string_height)
    }

    pub fn shapes(&self, anchor: Point) -> [Shape; 4] {
        let (x, y) = (anchor.x(), anchor.y());
        let below_string = y - self.string_height;
        let bulb = self.bulb_center(anchor);

        [
            Shape::rect(
                x - self.string_width / 2.,
                below_string,
                self.string_width,
                self.string_height,
            ),
            Shape::rect(
                x - self.top_width / 2.,
                below_string - self.top_height,
                self.top_width,
                self.top_height,
            ),
            Shape::disc(bulb.x(), bulb.y(), self.bulb_radius),
            Shape::rect(
                x - self.bottom_width / 2.,
                bulb.y() - 1.2 * self.bulb_radius,
                self.bottom_width,
                self.bottom_height,
            ),
        ]
    }

    pub fn patches(&self, anchor: Point) -> [Patch; 4] {
        self.shapes(anchor)
            .map(|shape| Patch::new(shape, self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq_low_prec, math::approx_eq::ApproxEq};

    fn assert_rect(shape: Shape, x: f64, y: f64, w: f64, h: f64) {
        match shape {
            Shape::Rect { min, width, height } => {
                assert_approx_eq_low_prec!(min, Point::new(x, y));
                assert_approx_eq_low_prec!(width, w);
                assert_approx_eq_low_prec!(height, h);
            }
            other => panic!("expected a rectangle, got {other:?}"),
        }
    }

    #[test]
    fn default_glyph_geometry() {
        let glyph = LampGlyph::default();
        let (x, y) = (0.5, 0.8);
        let [string, top, bulb, bottom] = glyph.shapes(Point::new(x, y));

        assert_rect(string, x - 1. / 80., y - 1. / 15., 1. / 40., 1. / 15.);
        assert_rect(top, x - 1. / 30., y - 1. / 7. - 1. / 15., 1. / 15., 1. / 7.);
        assert_eq!(bulb, Shape::disc(x, y - 1. / 7. - 1. / 15., 1. / 11.));
        assert_rect(
            bottom,
            x - 1. / 24.,
            y - 1. / 7. - 1.2 / 11. - 1. / 15.,
            1. / 12.,
            1. / 12.,
        );
    }

    #[test]
    fn glyph_scales_with_vault() {
        let glyph = LampGlyph::with_scale(2.);
        assert_approx_eq_low_prec!(glyph.bulb_radius(), 2. / 11.);
        assert_approx_eq_low_prec!(
            glyph.bulb_center(Point::zero()),
            Point::new(0., -2. / 7. - 2. / 15.)
        );
    }

    #[test]
    fn builder_overrides_color() {
        let glyph = LampGlyphBuilder::default()
            .color(Color::white())
            .build()
            .unwrap();
        assert!(glyph.patches(Point::zero()).iter().all(|p| p.color() == Color::white()));
        assert_eq!(glyph.bulb_radius(), 1. / 11.);
    }

    #[test]
    fn patches_are_red_by_default() {
        let patches = LampGlyph::default().patches(Point::new(0., 1.));
        assert!(patches.iter().all(|p| p.color() == Color::red()));
    }
}
