//! Software pixel canvas.

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::color::Color;

/// Rectangular grid of colors, row-major, origin at the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a canvas with every pixel black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Color at (`x`, `y`), or `None` outside the canvas.
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set the pixel at (`x`, `y`).
    ///
    /// Returns `false` and writes nothing when the coordinates fall outside
    /// the canvas, so plotting code can clip freely.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Evaluate `shade` for every pixel, rows in parallel.
    ///
    /// Pixels where `shade` returns `None` keep their current color.
    pub fn fill_par<F>(&mut self, shade: F)
    where
        F: Fn(usize, usize) -> Option<Color> + Sync,
    {
        if self.width == 0 {
            return;
        }

        info!("Rendering {}x{} using {} CPU cores...", self.width, self.height, rayon::current_num_threads());
        let start = std::time::Instant::now();
        let pb = ProgressBar::new(self.height as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}") {
            pb.set_style(style);
        }

        self.pixels
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    if let Some(color) = shade(x, y) {
                        *pixel = color;
                    }
                }
                pb.inc(1);
            });

        pb.finish_and_clear();
        info!("Canvas rendered in {:.2?}", start.elapsed());
    }

    /// Copy into a linear f32 RGB image buffer.
    pub fn to_rgb_image(&self) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            Rgb(self.pixels[y as usize * self.width + x as usize].to_array())
        })
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creating_a_canvas() {
        let c = Canvas::new(10, 20);
        assert_eq!(c.width(), 10);
        assert_eq!(c.height(), 20);
        for y in 0..c.height() {
            for x in 0..c.width() {
                assert_eq!(c.pixel_at(x, y), Some(Color::BLACK));
            }
        }
    }

    #[test]
    fn writing_pixels() {
        let mut c = Canvas::new(10, 20);
        assert!(c.write_pixel(2, 3, Color::RED));
        assert_eq!(c.pixel_at(2, 3), Some(Color::RED));
    }

    #[test]
    fn writes_outside_the_canvas_are_clipped() {
        let mut c = Canvas::new(10, 20);
        assert!(!c.write_pixel(10, 0, Color::RED));
        assert!(!c.write_pixel(0, 20, Color::RED));
        assert_eq!(c.pixel_at(10, 0), None);
        assert_eq!(c, Canvas::new(10, 20));
    }

    #[test]
    fn parallel_fill_visits_every_pixel() {
        let mut c = Canvas::new(7, 5);
        c.fill_par(|x, y| (x == y).then_some(Color::WHITE));
        assert_eq!(c.pixel_at(3, 3), Some(Color::WHITE));
        assert_eq!(c.pixel_at(4, 3), Some(Color::BLACK));
        assert_eq!(c.pixel_at(6, 4), Some(Color::BLACK));
    }

    #[test]
    fn converting_to_an_image() {
        let mut c = Canvas::new(3, 2);
        c.write_pixel(2, 1, Color::new(0.5, 0.25, 1.0));
        let image = c.to_rgb_image();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1), &Rgb([0.5, 0.25, 1.0]));
        assert_eq!(image.get_pixel(0, 0), &Rgb([0.0, 0.0, 0.0]));
    }
}
