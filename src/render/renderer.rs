use derive_builder::Builder;
use log::info;

use crate::{
    math::Color,
    render::canvas::Canvas,
    scene::{Scene, camera::Camera},
};

#[derive(PartialEq, Debug, Clone, Builder)]
/// The renderer colors each pixel from the scene as seen through the camera.
pub struct Renderer {
    scene: Scene,
    camera: Camera,
    /// offset from the center of the pixel
    /// so it should be in range [-0.5, 0.5]
    #[builder(setter(custom))]
    #[builder(field(
        ty = "Option<usize>",
        build = "Renderer::gen_supersampling_offsets(self.supersampling_offsets.unwrap_or(Renderer::DEFAULT_SUPERSAMPLING_LEVEL))"
    ))]
    supersampling_offsets: Vec<f64>,
    #[builder(default = "false")]
    use_progress_bar: bool,
}

impl RendererBuilder {
    pub fn supersampling_level(&mut self, level: usize) -> &mut Self {
        self.supersampling_offsets = Some(level);
        self
    }
}

impl Renderer {
    pub const DEFAULT_SUPERSAMPLING_LEVEL: usize = 2;

    pub fn new(
        scene: Scene,
        camera: Camera,
        supersampling_level: usize,
        use_progress_bar: bool,
    ) -> Self {
        Self {
            scene,
            camera,
            supersampling_offsets: Self::gen_supersampling_offsets(supersampling_level),
            use_progress_bar,
        }
    }

    fn gen_supersampling_offsets(level: usize) -> Vec<f64> {
        match level {
            0 | 1 => vec![0.],
            2 => vec![-0.25, 0.25],
            3 => vec![-0.25, 0., 0.25],
            4 => vec![-0.5, -0.25, 0.25, 0.5],
            _ => vec![-0.5, -0.25, 0., 0.25, 0.5],
        }
    }

    fn color_at_pixel(&self, x: usize, y: usize) -> Color {
        let x = x as f64;
        let y = y as f64;

        let offsets = &self.supersampling_offsets;
        let mut color = Color::black();

        for dx in offsets {
            for dy in offsets {
                color = color + self.scene.color_at(self.camera.point_for_pixel(x + dx, y + dy));
            }
        }
        color / offsets.len().pow(2) as f64
    }

    fn progress_bar(&self) -> Option<indicatif::ProgressBar> {
        if !self.use_progress_bar {
            return None;
        }
        let pixels_count =
            self.camera.target_width() as u64 * self.camera.target_height() as u64;
        let bar = indicatif::ProgressBar::new(pixels_count);
        match indicatif::ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {wide_bar:.cyan/blue} pixels shaded: {human_pos}/{human_len} {percent}% ({eta})",
        ) {
            Ok(style) => Some(bar.with_style(style)),
            Err(_) => Some(bar),
        }
    }

    /// Shades a canvas without timing logs, used for animation frames.
    pub fn render_frame(&self, progressbar: Option<indicatif::ProgressBar>) -> Canvas {
        let mut canvas = self.camera.canvas();
        canvas.set_each_pixel(|x: usize, y: usize| self.color_at_pixel(x, y), progressbar);
        canvas
    }

    pub fn render(&self) -> Canvas {
        let now = std::time::Instant::now();
        let canvas = self.render_frame(self.progress_bar());
        info!(
            "rendered {}x{} image in {:?}",
            canvas.width(),
            canvas.height(),
            now.elapsed()
        );
        canvas
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}
