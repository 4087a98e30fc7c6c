//! # Output Module
//!
//! Writes a rendered [`Canvas`] to disk:
//! - PNG export with values clamped to [0.0, 1.0] and scaled to 8 bits
//! - EXR export keeping the full f32 values
//!
//! The format is chosen from the file extension by [`save_canvas`].

use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::{debug, info};

use crate::canvas::Canvas;
use crate::error::OutputError;

/// Save a canvas, picking the encoder from the extension of `output_path`.
///
/// `.png` and `.exr` (case-insensitive) are supported; anything else is an
/// [`OutputError::UnsupportedFormat`].
pub fn save_canvas(canvas: &Canvas, output_path: &Path) -> Result<(), OutputError> {
    let extension = output_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => save_canvas_as_png(canvas, output_path),
        "exr" => save_canvas_as_exr(canvas, output_path),
        _ => Err(OutputError::UnsupportedFormat(extension)),
    }
}

/// Save a canvas as an 8-bit PNG
///
/// Each channel goes through:
///
/// 1. Clamping to [0.0, 1.0] (out-of-range values saturate)
/// 2. Scaling to [0, 255] with rounding to the nearest integer
///
/// Canvas colors are display values, so no gamma curve is applied.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use raycore::{Canvas, output::save_canvas_as_png};
///
/// let canvas = Canvas::new(256, 256);
/// save_canvas_as_png(&canvas, Path::new("sphere.png")).unwrap();
/// ```
///
/// # Errors
///
/// Any encoding or I/O failure from the `image` crate.
pub fn save_canvas_as_png(canvas: &Canvas, output_path: &Path) -> Result<(), OutputError> {
    let image = canvas.to_rgb_image();
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            let pixel = image.get_pixel(x, y);
            Rgb([to_byte(pixel[0]), to_byte(pixel[1]), to_byte(pixel[2])])
        });

    debug!("Encoding {}x{} PNG", u8_image.width(), u8_image.height());
    u8_image.save(output_path)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save a canvas as EXR with full f32 precision
///
/// No clamping or tone mapping: channels outside [0, 1] survive, which is
/// handy when inspecting intermediate results in an HDR viewer.
///
/// # Errors
///
/// Any encoding or I/O failure from the `exr` crate.
pub fn save_canvas_as_exr(canvas: &Canvas, output_path: &Path) -> Result<(), OutputError> {
    let image = canvas.to_rgb_image();

    write_rgb_file(output_path, canvas.width(), canvas.height(), |x, y| {
        let pixel = image.get_pixel(x as u32, y as u32);
        (pixel[0], pixel[1], pixel[2])
    })?;

    info!("HDR image saved as EXR: {}", output_path.display());
    Ok(())
}

fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::color::Color;

    #[test]
    fn channels_are_clamped_and_rounded() {
        assert_eq!(to_byte(-0.5), 0);
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(0.5), 128);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(1.5), 255);
    }

    #[test]
    fn saving_a_png() {
        let mut canvas = Canvas::new(16, 8);
        canvas.write_pixel(3, 2, Color::new(1.5, 0.0, 0.5));
        let dir = tempdir().unwrap();
        let path = dir.path().join("canvas.png");

        save_canvas(&canvas, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (16, 8));
        assert_eq!(decoded.get_pixel(3, 2), &Rgb([255, 0, 128]));
        assert_eq!(decoded.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn saving_an_exr() {
        let canvas = Canvas::new(4, 4);
        let dir = tempdir().unwrap();
        let path = dir.path().join("canvas.exr");
        save_canvas(&canvas, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn uppercase_extensions_are_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("CANVAS.PNG");
        save_canvas(&Canvas::new(2, 2), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        let canvas = Canvas::new(1, 1);
        let err = save_canvas(&canvas, Path::new("out.ppm")).unwrap_err();
        assert!(matches!(err, OutputError::UnsupportedFormat(ext) if ext == "ppm"));
    }
}
