pub mod camera;
pub mod glyph;
pub mod shape;

use derive_builder::Builder;
use glyph::LampGlyph;
use shape::{Patch, Shape};

use crate::{
    math::{Color, Point},
    placement::{self, DistributionMode, VAULT_R},
};

/// Everything drawn in the picture, in painting order.
#[derive(PartialEq, Debug, Clone, Builder)]
#[builder(default)]
pub struct Scene {
    patches: Vec<Patch>,
    background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self::empty()
    }
}

impl SceneBuilder {
    pub fn patch(&mut self, patch: Patch) -> &mut Self {
        self.patches.get_or_insert_with(Vec::new).push(patch);
        self
    }

    pub fn lamps(&mut self, anchors: &[Point], glyph: &LampGlyph) -> &mut Self {
        let patches = self.patches.get_or_insert_with(Vec::new);
        patches.extend(anchors.iter().flat_map(|&anchor| glyph.patches(anchor)));
        self
    }

    // Every field has a default, so building cannot fail.
    pub fn build_scene(&self) -> Scene {
        self.build().unwrap_or_default()
    }
}

impl Scene {
    pub fn empty() -> Self {
        Self {
            patches: Vec::new(),
            background: Color::white(),
        }
    }

    pub fn vault_color() -> Color {
        Color::grey(0.5)
    }

    /// Grey wall below the springing line and the dome above it.
    pub fn vault_patches() -> [Patch; 2] {
        [
            Patch::new(
                Shape::rect(-VAULT_R, -2. * VAULT_R, 2. * VAULT_R, 2. * VAULT_R),
                Self::vault_color(),
            ),
            Patch::new(Shape::disc(0., 0., VAULT_R), Self::vault_color()),
        ]
    }

    pub fn builder_with_vault() -> SceneBuilder {
        let mut builder = SceneBuilder::default();
        for patch in Self::vault_patches() {
            builder.patch(patch);
        }
        builder
    }

    /// The vault with a lamp hanging from every anchor.
    pub fn with_lamps(anchors: &[Point], glyph: &LampGlyph) -> Self {
        Self::builder_with_vault().lamps(anchors, glyph).build_scene()
    }

    pub fn lamp_plan(lamp_count: usize, mode: DistributionMode, padding: f64) -> Self {
        let anchors = placement::generate_points(lamp_count, mode, padding);
        Self::with_lamps(&anchors, &LampGlyph::default())
    }

    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// Color of the topmost patch covering `point`.
    pub fn color_at(&self, point: Point) -> Color {
        self.patches
            .iter()
            .rev()
            .find_map(|patch| patch.color_at(point))
            .unwrap_or(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scene_is_background() {
        let scene = Scene::empty();
        assert_eq!(scene.color_at(Point::zero()), Color::white());
        assert_eq!(SceneBuilder::default().build_scene(), scene);
    }

    #[test]
    fn vault_is_grey() {
        let scene = Scene::lamp_plan(0, DistributionMode::Radial, 0.);
        assert_eq!(scene.patches().len(), 2);
        assert_eq!(scene.color_at(Point::zero()), Color::grey(0.5));
        assert_eq!(scene.color_at(Point::new(0., 0.99)), Color::grey(0.5));
        assert_eq!(scene.color_at(Point::new(-0.9, -1.9)), Color::grey(0.5));
        assert_eq!(scene.color_at(Point::new(1.15, 1.15)), Color::white());
        assert_eq!(scene.color_at(Point::new(0.9, 0.9)), Color::white());
    }

    #[test]
    fn lamps_are_painted_over_vault() {
        let glyph = LampGlyph::default();
        let anchors = placement::generate_points(4, DistributionMode::Linear, 0.);
        let scene = Scene::with_lamps(&anchors, &glyph);

        assert_eq!(scene.patches().len(), 2 + 4 * 4);
        for anchor in anchors {
            assert_eq!(scene.color_at(glyph.bulb_center(anchor)), Color::red());
        }
    }

    #[test]
    fn background_can_be_changed() {
        let scene = SceneBuilder::default()
            .background(Color::black())
            .build_scene();
        assert_eq!(scene.color_at(Point::new(5., 5.)), Color::black());
    }

    #[test]
    fn last_patch_wins() {
        let scene = SceneBuilder::default()
            .patch(Patch::new(Shape::disc(0., 0., 1.), Color::red()))
            .patch(Patch::new(Shape::disc(0., 0., 0.5), Color::black()))
            .build_scene();
        assert_eq!(scene.color_at(Point::zero()), Color::black());
        assert_eq!(scene.color_at(Point::new(0.75, 0.)), Color::red());
    }
}
