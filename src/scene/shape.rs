use crate::math::{Color, Point};

/// Filled 2D primitive in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis aligned rectangle given by its lower-left corner.
    Rect {
        min: Point,
        width: f64,
        height: f64,
    },
    Disc {
        center: Point,
        radius: f64,
    },
}

impl Shape {
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Rect {
            min: Point::new(x, y),
            width,
            height,
        }
    }

    pub fn disc(x: f64, y: f64, radius: f64) -> Self {
        Self::Disc {
            center: Point::new(x, y),
            radius,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        match *self {
            Shape::Rect { min, width, height } => {
                let offset = point - min;
                (0. ..=width).contains(&offset.x()) && (0. ..=height).contains(&offset.y())
            }
            Shape::Disc { center, radius } => point.distance(center) <= radius,
        }
    }
}

/// A shape painted with a single color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patch {
    shape: Shape,
    color: Color,
}

impl Patch {
    pub fn new(shape: Shape, color: Color) -> Self {
        Self { shape, color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn color_at(&self, point: Point) -> Option<Color> {
        self.shape.contains(point).then_some(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains() {
        let rect = Shape::rect(-1., -2., 2., 2.);
        assert!(rect.contains(Point::new(0., -1.)));
        assert!(rect.contains(Point::new(-1., -2.)));
        assert!(rect.contains(Point::new(1., 0.)));
        assert!(!rect.contains(Point::new(1.1, -1.)));
        assert!(!rect.contains(Point::new(0., 0.1)));
        assert!(!rect.contains(Point::new(0., -2.1)));
    }

    #[test]
    fn disc_contains() {
        let disc = Shape::disc(0., 0., 1.);
        assert!(disc.contains(Point::zero()));
        assert!(disc.contains(Point::new(0., 1.)));
        assert!(disc.contains(Point::new(0.7, 0.7)));
        assert!(!disc.contains(Point::new(0.8, 0.8)));
    }

    #[test]
    fn patch_color_at() {
        let patch = Patch::new(Shape::disc(1., 1., 0.5), Color::red());
        assert_eq!(patch.color_at(Point::new(1.2, 1.)), Some(Color::red()));
        assert_eq!(patch.color_at(Point::zero()), None);
    }
}
