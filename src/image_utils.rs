use image::{DynamicImage, RgbaImage, imageops::FilterType};

use crate::error::{GlowError, Result};

/// Side length of the working grid every image is stretched onto.
pub const GRID_SIZE: u32 = 64;

/// One normalized pixel of the working grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSample {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl PixelSample {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Perceptual luminance (Rec. 601 weights).
    pub fn brightness(&self) -> f64 {
        0.299 * self.red + 0.587 * self.green + 0.114 * self.blue
    }

    pub fn saturation(&self) -> f64 {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);

        if max == 0.0 { 0.0 } else { (max - min) / max }
    }
}

pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    let image = image::load_from_memory(bytes)?;

    if image.width() == 0 || image.height() == 0 {
        return Err(GlowError::Decode("decoded image has no pixels".into()));
    }

    Ok(image)
}

/// Stretches the image onto a `GRID_SIZE` square. Aspect ratio is discarded.
pub fn resample_to_grid(image: &DynamicImage) -> RgbaImage {
    image::imageops::resize(&image.to_rgba8(), GRID_SIZE, GRID_SIZE, FilterType::Triangle)
}

/// Reads the grid as samples drawn over black, so transparent areas count as dark.
pub fn grid_samples(grid: &RgbaImage) -> Vec<PixelSample> {
    grid.pixels()
        .map(|pixel| {
            let alpha = pixel[3] as f64 / 255.0;
            PixelSample::new(
                pixel[0] as f64 / 255.0 * alpha,
                pixel[1] as f64 / 255.0 * alpha,
                pixel[2] as f64 / 255.0 * alpha,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage, Rgba};

    use super::*;

    #[test]
    fn test_brightness_weights() {
        assert!((PixelSample::new(1.0, 0.0, 0.0).brightness() - 0.299).abs() < 1e-12);
        assert!((PixelSample::new(0.0, 1.0, 0.0).brightness() - 0.587).abs() < 1e-12);
        assert!((PixelSample::new(1.0, 1.0, 1.0).brightness() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_saturation_of_black_is_zero() {
        assert_eq!(PixelSample::new(0.0, 0.0, 0.0).saturation(), 0.0);
        assert_eq!(PixelSample::new(1.0, 0.0, 0.0).saturation(), 1.0);
        assert!((PixelSample::new(0.5, 0.25, 0.5).saturation() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_pixel_resamples_to_full_grid() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([200, 40, 90])));
        let grid = resample_to_grid(&image);

        assert_eq!(grid.dimensions(), (GRID_SIZE, GRID_SIZE));
        assert!(grid.pixels().all(|p| *p == Rgba([200, 40, 90, 255])));
    }

    #[test]
    fn test_wide_image_is_stretched_not_cropped() {
        let mut source = RgbImage::from_pixel(256, 16, Rgb([0, 0, 0]));
        for y in 0..16 {
            for x in 128..256 {
                source.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
        let grid = resample_to_grid(&DynamicImage::ImageRgb8(source));

        assert_eq!(grid.get_pixel(0, 0)[0], 0);
        assert_eq!(grid.get_pixel(GRID_SIZE - 1, GRID_SIZE - 1)[0], 255);
    }

    #[test]
    fn test_transparent_pixels_read_as_black() {
        let grid = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 0]));
        let samples = grid_samples(&grid);

        assert_eq!(samples.len(), 4);
        assert!(samples.iter().all(|s| s.brightness() == 0.0));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode_bytes(&[0xde, 0xad, 0xbe, 0xef]), Err(GlowError::Decode(_))));
    }
}
