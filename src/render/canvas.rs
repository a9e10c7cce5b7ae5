use std::{fmt::Display, io::Write};

use clap::ValueEnum;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use crate::math::Color;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum ImageFormat {
    Ppm,
    #[default]
    Png,
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Ppm => write!(f, "ppm"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn with_color(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; height * width],
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_color(width, height, Color::white())
    }

    fn index(&self, x: usize, y: usize) -> usize {
        self.width * y + x
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }
    pub fn write_pixel(&mut self, x: usize, y: usize, new_color: Color) {
        let id = self.index(x, y);
        self.pixels[id] = new_color;
    }

    pub fn set_each_pixel<F>(&mut self, fun: F, progressbar: Option<indicatif::ProgressBar>)
    where
        F: Fn(usize, usize) -> Color + Sync,
    {
        let width = self.width;
        let shade = |(id, pixel_color): (usize, &mut Color)| {
            *pixel_color = fun(id % width, id / width);
        };

        let pixels = self.pixels.par_iter_mut().enumerate();
        match progressbar {
            Some(bar) => pixels.progress_with(bar).for_each(shade),
            None => pixels.for_each(shade),
        }
    }

    pub fn as_u8_rgb(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color.as_scaled_values())
            .collect()
    }
}

/// Gif stores both dimensions as `u16`.
pub fn gif_dimensions(width: usize, height: usize) -> std::io::Result<(u16, u16)> {
    let width = u16::try_from(width).map_err(std::io::Error::other)?;
    let height = u16::try_from(height).map_err(std::io::Error::other)?;
    Ok((width, height))
}

/// saving image as a gif frame
impl Canvas {
    pub fn gif_frame(&self) -> std::io::Result<gif::Frame<'static>> {
        let (width, height) = gif_dimensions(self.width, self.height)?;
        Ok(gif::Frame::from_rgb(width, height, &self.as_u8_rgb()))
    }
}

/// saving image in ppm format
impl Canvas {
    const MAX_LINE_LEN: usize = 70;

    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    fn ppm_data(&self) -> String {
        let mut data = String::new();
        for row in self.pixels.chunks(self.width.max(1)) {
            let mut line_len = 0;
            for val in row.iter().flat_map(|color| color.as_scaled_values()) {
                let val_str = val.to_string();
                if line_len > 0 && line_len + val_str.len() + 1 > Self::MAX_LINE_LEN {
                    data.push('\n');
                    line_len = 0;
                } else if line_len > 0 {
                    data.push(' ');
                    line_len += 1;
                }
                data.push_str(&val_str);
                line_len += val_str.len();
            }
            data.push('\n');
        }
        data
    }

    pub fn save_to_writer<W: Write>(&self, writer: W, format: ImageFormat) -> std::io::Result<()> {
        match format {
            ImageFormat::Ppm => self.save_to_ppm(writer),
            ImageFormat::Png => self.save_to_png(writer),
        }
    }

    pub fn save_to_ppm<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.ppm_header().as_bytes())?;
        writer.write_all(self.ppm_data().as_bytes())?;
        Ok(())
    }
}

/// saving image in png format
impl Canvas {
    pub fn save_to_png<W: Write>(&self, writer: W) -> std::io::Result<()> {
        let mut encoder = png::Encoder::new(writer, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;

        writer
            .write_image_data(&self.as_u8_rgb())
            .map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index() {
        let width = 5;
        let height = 3;
        let canvas = Canvas::new(width, height);
        assert_eq!(canvas.index(0, 1), width);
        assert_eq!(canvas.index(1, 0), 1);
        assert_eq!(canvas.index(width - 1, height - 1), width * height - 1);
        assert_eq!(canvas.index(1, 2), width * 2 + 1);
    }

    #[test]
    fn new_blank_is_white() {
        let canvas = Canvas::new(10, 20);
        assert!(canvas.pixels.iter().all(|pixel| *pixel == Color::white()));
    }

    #[test]
    fn write_pixel() {
        let mut canvas = Canvas::new(10, 10);
        canvas.write_pixel(2, 3, Color::red());
        assert_eq!(canvas.pixel_at(2, 3), Color::red());
    }

    #[test]
    fn set_each_pixel() {
        let mut canvas = Canvas::new(4, 3);
        canvas.set_each_pixel(|x, y| Color::new(x as f64, y as f64, 0.), None);
        assert_eq!(canvas.pixel_at(3, 0), Color::new(3., 0., 0.));
        assert_eq!(canvas.pixel_at(1, 2), Color::new(1., 2., 0.));
    }

    #[test]
    fn gif_frame() -> std::io::Result<()> {
        let frame = Canvas::new(4, 3).gif_frame()?;
        assert_eq!((frame.width, frame.height), (4, 3));
        Ok(())
    }

    #[test]
    fn gif_frame_rejects_oversized_canvas() {
        assert!(Canvas::new(usize::from(u16::MAX) + 1, 1).gif_frame().is_err());
        assert!(gif_dimensions(1, 70_000).is_err());
        assert_eq!(gif_dimensions(65_535, 2).unwrap(), (65_535, 2));
    }

    #[test]
    fn ppm_header() {
        assert_eq!(Canvas::new(5, 3).ppm_header(), "P3\n5 3\n255\n");
    }

    #[test]
    fn ppm_pixel_data() {
        let mut canvas = Canvas::with_color(5, 3, Color::black());

        canvas.write_pixel(0, 0, Color::new(1.5, 0., 0.));
        canvas.write_pixel(2, 1, Color::new(0., 0.5, 0.));
        canvas.write_pixel(4, 2, Color::new(-1.5, 0., 1.));

        assert_eq!(
            canvas.ppm_data(),
            r#"255 0 0 0 0 0 0 0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 128 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0 0 0 0 0 0 0 255
"#
        )
    }

    #[test]
    fn split_long_lines_ppm_data() {
        let canvas = Canvas::with_color(10, 2, Color::new(1., 0.8, 0.6));

        assert_eq!(
            canvas.ppm_data(),
            r#"255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204
153 255 204 153 255 204 153 255 204 153 255 204 153
255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204
153 255 204 153 255 204 153 255 204 153 255 204 153
"#
        )
    }

    #[test]
    fn ppm_data_ends_with_newline() {
        assert!(Canvas::new(5, 3).ppm_data().ends_with('\n'))
    }

    #[test]
    fn save_ppm_to_buffer() -> std::io::Result<()> {
        let mut buffer = Vec::new();
        Canvas::new(2, 1).save_to_writer(&mut buffer, ImageFormat::Ppm)?;
        assert_eq!(
            String::from_utf8_lossy(&buffer),
            "P3\n2 1\n255\n255 255 255 255 255 255\n"
        );
        Ok(())
    }

    #[test]
    fn save_png_to_buffer() -> std::io::Result<()> {
        let mut buffer = Vec::new();
        Canvas::new(3, 2).save_to_writer(&mut buffer, ImageFormat::Png)?;
        assert_eq!(&buffer[..8], b"\x89PNG\r\n\x1a\n");
        Ok(())
    }
}
