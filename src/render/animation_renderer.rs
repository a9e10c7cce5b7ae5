use std::io::Write;

use derive_builder::Builder;
use indicatif::ProgressIterator;
use log::info;

use super::{
    canvas::{self, Canvas},
    renderer::Renderer,
};
use crate::{
    placement::DistributionMode,
    scene::{Scene, camera::Camera},
};

/// Renders the vault while the padding slides from one value to another,
/// one frame per padding step.
#[derive(Clone, PartialEq, Debug, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct PaddingSweep {
    lamp_count: usize,
    mode: DistributionMode,
    padding_from: f64,
    padding_to: f64,
    framerate: u32,
    duration_sec: f64,
    camera: Camera,
    #[builder(default = "Renderer::DEFAULT_SUPERSAMPLING_LEVEL")]
    supersampling_level: usize,
    #[builder(default = "false")]
    use_progress_bar: bool,
}

impl PaddingSweepBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(camera) = &self.camera {
            canvas::gif_dimensions(camera.target_width(), camera.target_height())
                .map_err(|_| format!("gif frames are at most {} pixels wide and high", u16::MAX))?;
        }
        if self.framerate == Some(0) {
            return Err("framerate must be positive".to_string());
        }
        match self.duration_sec {
            Some(duration) if duration <= 0. || !duration.is_finite() => {
                Err("duration must be positive".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl PaddingSweep {
    fn frame_count(&self) -> u32 {
        (self.framerate as f64 * self.duration_sec).round().max(1.) as u32
    }

    /// Frame delay in hundredths of a second, as gif stores it.
    fn frame_delay(&self) -> u16 {
        (100. / self.framerate as f64).round().max(1.) as u16
    }

    fn padding_at(&self, frame: u32) -> f64 {
        let frames = self.frame_count();
        if frames <= 1 {
            return self.padding_from;
        }
        let t = frame as f64 / (frames - 1) as f64;
        self.padding_from + (self.padding_to - self.padding_from) * t
    }

    fn renderer_for_frame(&self, frame: u32) -> Renderer {
        let scene = Scene::lamp_plan(self.lamp_count, self.mode, self.padding_at(frame));
        Renderer::new(scene, self.camera.clone(), self.supersampling_level, false)
    }

    fn render_frame(&self, frame: u32) -> Canvas {
        self.renderer_for_frame(frame).render_frame(None)
    }

    fn render_animation<F>(&self, mut encode_fun: F) -> std::io::Result<()>
    where
        F: FnMut(Canvas) -> std::io::Result<()>,
    {
        let mut frames = 0..self.frame_count();
        if self.use_progress_bar {
            let bar = indicatif::ProgressBar::new(self.frame_count() as u64);
            let bar = match indicatif::ProgressStyle::with_template(
                "[{elapsed_precise}] {wide_bar:.cyan/blue} rendering frame: {human_pos}/{human_len} {percent}% ({eta})",
            ) {
                Ok(style) => bar.with_style(style),
                Err(_) => bar,
            };
            frames
                .progress_with(bar)
                .try_for_each(|frame| encode_fun(self.render_frame(frame)))
        } else {
            frames.try_for_each(|frame| encode_fun(self.render_frame(frame)))
        }
    }

    pub fn render_gif<W: Write>(&self, writer: W) -> std::io::Result<()> {
        let now = std::time::Instant::now();
        let (width, height) =
            canvas::gif_dimensions(self.camera.target_width(), self.camera.target_height())?;
        let mut encoder =
            gif::Encoder::new(writer, width, height, &[]).map_err(std::io::Error::other)?;
        encoder
            .set_repeat(gif::Repeat::Infinite)
            .map_err(std::io::Error::other)?;

        let delay = self.frame_delay();
        self.render_animation(|canvas| {
            let mut frame = canvas.gif_frame()?;
            frame.delay = delay;
            encoder.write_frame(&frame).map_err(std::io::Error::other)
        })?;
        info!(
            "encoded {} frames in {:?}",
            self.frame_count(),
            now.elapsed()
        );
        Ok(())
    }
}
