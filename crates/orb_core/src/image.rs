//! Image buffer the renderer writes into, plus 8-bit conversion and
//! PNG output.

use std::path::Path;

use thiserror::Error;

use crate::Color;

/// Errors that can occur when writing an image to disk.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("image dimensions {0}x{1} are invalid")]
    InvalidDimensions(u32, u32),

    #[error("image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

/// A dense 2D grid of colors, addressed by (row, column).
///
/// Row 0 is the top of the image. Pixels are stored row-major.
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Reallocate the buffer at a new size, filled with black.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![Color::ZERO; (width * height) as usize];
    }

    /// Image width in pixels (columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels (rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (row, col).
    pub fn get(&self, row: u32, col: u32) -> Color {
        self.pixels[(row * self.width + col) as usize]
    }

    /// Set the pixel at (row, col).
    pub fn set_pixel(&mut self, row: u32, col: u32, color: Color) {
        self.pixels[(row * self.width + col) as usize] = color;
    }

    /// Fill every pixel with the given color.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Convert to RGBA bytes (for display or saving).
    ///
    /// Channels are clamped to [0, 1] and scaled to 8 bits. Values are
    /// written linearly; the Phong pass produces display-ready colors,
    /// so no gamma curve is applied.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Encode the buffer as a PNG file at the given path.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), ImageError> {
        let buffer = image::RgbaImage::from_raw(self.width, self.height, self.to_rgba())
            .ok_or(ImageError::InvalidDimensions(self.width, self.height))?;
        buffer.save(path.as_ref())?;
        log::debug!(
            "wrote {}x{} png to {}",
            self.width,
            self.height,
            path.as_ref().display()
        );
        Ok(())
    }
}

/// Convert a color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * color.x.clamp(0.0, 1.0)) as u8;
    let g = (255.0 * color.y.clamp(0.0, 1.0)) as u8;
    let b = (255.0 * color.z.clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_set_get() {
        let mut image = Image::new(4, 2);
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 2);
        assert_eq!(image.get(0, 0), Color::ZERO);

        let red = Color::new(1.0, 0.0, 0.0);
        image.set_pixel(1, 3, red);
        assert_eq!(image.get(1, 3), red);
        assert_eq!(image.get(1, 2), Color::ZERO);
    }

    #[test]
    fn test_image_resize_clears() {
        let mut image = Image::new(2, 2);
        image.set_pixel(0, 0, Color::ONE);

        image.resize(3, 3);
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 3);
        assert_eq!(image.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_fill() {
        let mut image = Image::new(2, 2);
        let grey = Color::new(0.25, 0.25, 0.25);
        image.fill(grey);
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(image.get(row, col), grey);
            }
        }
    }

    #[test]
    fn test_color_to_rgba_clamps() {
        assert_eq!(color_to_rgba(Color::new(0.0, 0.5, 1.0)), [0, 127, 255, 255]);
        // Out-of-range values clamp instead of wrapping
        assert_eq!(color_to_rgba(Color::new(-1.0, 2.0, 0.5)), [0, 255, 127, 255]);
    }

    #[test]
    fn test_to_rgba_layout() {
        let mut image = Image::new(2, 1);
        image.set_pixel(0, 1, Color::new(1.0, 0.0, 0.0));
        let bytes = image.to_rgba();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[0..4], &[0, 0, 0, 255]);
        assert_eq!(&bytes[4..8], &[255, 0, 0, 255]);
    }
}
