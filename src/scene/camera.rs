use crate::{math::Point, render::canvas::Canvas};

// Image rows grow downward while world y grows upward.
// The world window is fitted into the image with equal scale on both axes
// and centred along the axis with spare room.
#[derive(PartialEq, Debug, Clone)]
pub struct Camera {
    target_width: usize,
    target_height: usize,

    pixel_size: f64,
    top_left: Point,
}

impl Camera {
    pub const WINDOW_MIN: (f64, f64) = (-1.2, -2.);
    pub const WINDOW_MAX: (f64, f64) = (1.2, 1.2);

    fn window_width() -> f64 {
        Self::WINDOW_MAX.0 - Self::WINDOW_MIN.0
    }

    fn window_height() -> f64 {
        Self::WINDOW_MAX.1 - Self::WINDOW_MIN.1
    }

    /// Height keeping the aspect ratio of the world window.
    pub fn height_for_width(target_width: usize) -> usize {
        (target_width as f64 * Self::window_height() / Self::window_width()).round() as usize
    }

    pub fn new(target_width: usize, target_height: usize) -> Option<Self> {
        if target_width == 0 || target_height == 0 {
            return None;
        }
        let pixel_size = f64::max(
            Self::window_width() / target_width as f64,
            Self::window_height() / target_height as f64,
        );

        let half_width = target_width as f64 * pixel_size / 2.;
        let half_height = target_height as f64 * pixel_size / 2.;
        let center_x = (Self::WINDOW_MIN.0 + Self::WINDOW_MAX.0) / 2.;
        let center_y = (Self::WINDOW_MIN.1 + Self::WINDOW_MAX.1) / 2.;

        Some(Self {
            target_width,
            target_height,
            pixel_size,
            top_left: Point::new(center_x - half_width, center_y + half_height),
        })
    }

    pub fn with_width(target_width: usize) -> Option<Self> {
        Self::new(target_width, Self::height_for_width(target_width))
    }

    /// World position of a pixel. `x` and `y` may carry a sub-pixel offset.
    pub fn point_for_pixel(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.top_left.x() + (x + 0.5) * self.pixel_size,
            self.top_left.y() - (y + 0.5) * self.pixel_size,
        )
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.target_width, self.target_height)
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    pub fn target_height(&self) -> usize {
        self.target_height
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }
}
