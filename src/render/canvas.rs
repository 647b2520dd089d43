use std::{fmt::Display, io::Write};

use clap::ValueEnum;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;

use crate::math::color::Color;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Ppm,
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

/// Grid of colors addressed by `(x, y)`, with `(0, 0)` in the top left corner.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn with_color(width: usize, height: usize, color: Color) -> Self {
        assert!(
            width > 0 && height > 0,
            "canvas dimensions must be positive, got {width}x{height}"
        );
        let Some(len) = width.checked_mul(height) else {
            panic!("canvas of {width}x{height} pixels is too large");
        };
        Self {
            width,
            height,
            pixels: vec![color; len],
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_color(width, height, Color::black())
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} canvas",
            self.width,
            self.height
        );
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

    /// Computes every pixel independently in parallel.
    /// Pass `ProgressBar::hidden()` to render without progress output.
    pub fn set_each_pixel<F>(&mut self, fun: F, progressbar: ProgressBar)
    where
        F: Fn(usize, usize) -> Color + Sync,
    {
        let width = self.width;
        progressbar.set_length(self.pixels.len() as u64);

        self.pixels
            .par_iter_mut()
            .enumerate()
            .progress_with(progressbar)
            .for_each(|(id, pixel_color)| {
                let x = id % width;
                let y = id / width;
                *pixel_color = fun(x, y);
            })
    }

    pub fn as_u8_rgb(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color.as_u8_rgb())
            .collect()
    }

    pub fn save_to_writer<W: Write>(&self, writer: W, format: ImageFormat) -> std::io::Result<()> {
        match format {
            ImageFormat::Ppm => self.save_to_ppm(writer),
            ImageFormat::Png => self.save_to_png(writer),
        }
    }
}

/// plain ppm (P3)
impl Canvas {
    const MAX_LINE_LEN: usize = 70;

    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    /// One or more lines per pixel row, never longer than `MAX_LINE_LEN`.
    fn ppm_data(&self) -> String {
        let mut data = String::new();

        for row in self.pixels.chunks(self.width) {
            let mut line_len = 0;
            for val in row.iter().flat_map(|color| color.as_u8_rgb()) {
                let val_str = val.to_string();
                if line_len > 0 {
                    if line_len + val_str.len() + 1 > Self::MAX_LINE_LEN {
                        data.push('\n');
                        line_len = 0;
                    } else {
                        data.push(' ');
                        line_len += 1;
                    }
                }
                line_len += val_str.len();
                data.push_str(&val_str);
            }
            data.push('\n');
        }
        data
    }

    pub fn save_to_ppm<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.ppm_header().as_bytes())?;
        writer.write_all(self.ppm_data().as_bytes())?;
        Ok(())
    }
}

/// png
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
