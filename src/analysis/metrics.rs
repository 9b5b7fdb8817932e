use image::DynamicImage;
use log::debug;

use crate::{
    ImageStatistics,
    error::{GlowError, Result},
    image_utils::{PixelSample, decode_bytes, grid_samples, resample_to_grid},
};

pub const HIGHLIGHT_THRESHOLD: f64 = 0.75;
pub const SHADOW_THRESHOLD: f64 = 0.25;

/// Reduces a photo to the five aggregate statistics the score is built from.
///
/// Statistics are always taken over the fixed 64x64 working grid, so two
/// uploads of the same photo at different resolutions produce the same
/// numbers.
pub struct MetricExtractor;

impl MetricExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, bytes: &[u8]) -> Result<ImageStatistics> {
        let image = decode_bytes(bytes)?;
        self.extract_image(&image)
    }

    pub fn extract_image(&self, image: &DynamicImage) -> Result<ImageStatistics> {
        let grid = resample_to_grid(image);
        let samples = grid_samples(&grid);

        debug!(
            "Sampling {}x{} source onto {}x{} grid",
            image.width(),
            image.height(),
            grid.width(),
            grid.height()
        );

        self.reduce(&samples)
    }

    pub fn reduce(&self, samples: &[PixelSample]) -> Result<ImageStatistics> {
        if samples.is_empty() {
            return Err(GlowError::Decode("image produced no samples".into()));
        }

        let mut brightness_sum = 0.0;
        let mut saturation_sum = 0.0;
        let mut sum_squares = 0.0;
        let mut highlight_count = 0usize;
        let mut shadow_count = 0usize;

        for sample in samples {
            let brightness = sample.brightness();

            brightness_sum += brightness;
            saturation_sum += sample.saturation();
            sum_squares += brightness * brightness;

            if brightness > HIGHLIGHT_THRESHOLD {
                highlight_count += 1;
            }
            if brightness < SHADOW_THRESHOLD {
                shadow_count += 1;
            }
        }

        let total = samples.len() as f64;
        let brightness = brightness_sum / total;
        let variance = (sum_squares / total - brightness * brightness).clamp(0.0, 1.0);

        Ok(ImageStatistics {
            brightness,
            saturation: saturation_sum / total,
            highlight_ratio: highlight_count as f64 / total,
            shadow_ratio: shadow_count as f64 / total,
            std_deviation: variance.sqrt(),
        })
    }
}

impl Default for MetricExtractor {
    fn default() -> Self {
        Self::new()
    }
}
