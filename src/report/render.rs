use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use image::{ImageFormat, Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut},
    rect::Rect,
};
use log::{debug, info};

use crate::{
    error::{GlowError, Result},
    report::{
        ReportContent, ReportOptions,
        html::build_sample_report_html,
        sample::{SAMPLE_METRICS, SAMPLE_ROUTINE, SAMPLE_TIPS},
    },
};

pub const REPORT_FILE_STEM: &str = "ai-lana-buddy-sample-report";

/// Layout below is designed against this width and scaled from it.
const BASE_WIDTH: f32 = 816.0;
const BASE_HEIGHT: f32 = 1060.0;
const MIN_CARD_WIDTH: u32 = 320;
const MAX_CARD_WIDTH: u32 = 4096;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([15, 23, 42]);
const TRACK: Rgb<u8> = Rgb([226, 232, 240]);
const MIST: Rgb<u8> = Rgb([248, 250, 252]);
const ROSE: Rgb<u8> = Rgb([255, 228, 230]);
const SKY: Rgb<u8> = Rgb([224, 242, 254]);
const FUCHSIA: Rgb<u8> = Rgb([217, 70, 239]);
const MINT: Rgb<u8> = Rgb([52, 211, 153]);
const SLATE: Rgb<u8> = Rgb([100, 116, 139]);

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub file_stem: String,
    pub card_width: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_stem: REPORT_FILE_STEM.to_string(),
            card_width: BASE_WIDTH as u32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifacts {
    pub html_path: PathBuf,
    pub image_path: PathBuf,
}

impl ReportArtifacts {
    pub fn image_file_name(&self) -> String {
        self.image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

pub struct ReportRenderer {
    config: ReportConfig,
}

impl ReportRenderer {
    pub fn new() -> Self {
        Self::with_config(ReportConfig::default())
    }

    pub fn with_config(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.config.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Draws the report card off-screen. Text lives in the HTML document;
    /// the raster carries the score, metric and routine geometry.
    pub fn rasterize(&self, content: &ReportContent) -> Result<RgbImage> {
        let width = self.config.card_width;
        if !(MIN_CARD_WIDTH..=MAX_CARD_WIDTH).contains(&width) {
            return Err(GlowError::Render(format!(
                "card width {width} outside {MIN_CARD_WIDTH}..={MAX_CARD_WIDTH}"
            )));
        }

        let scale = width as f32 / BASE_WIDTH;
        let height = (BASE_HEIGHT * scale).round() as u32;
        let mut card = RgbImage::from_pixel(width, height, WHITE);
        let px = |v: f32| (v * scale).round() as i32;

        self.draw_header_gradient(&mut card, px(320.0) as u32);
        draw_filled_circle_mut(&mut card, (px(80.0), px(72.0)), px(24.0), FUCHSIA);

        // Score progress bar.
        let track_width = px(BASE_WIDTH * 0.5) - px(56.0);
        fill(&mut card, px(56.0), px(220.0), track_width, px(16.0), TRACK);
        fill(&mut card, px(56.0), px(220.0), track_width * content.score as i32 / 100, px(16.0), INK);
        fill(&mut card, px(56.0), px(252.0), px(120.0), px(12.0), MINT);

        // Demo visual placeholder.
        let hero_x = px(BASE_WIDTH * 0.56);
        let hero_width = px(BASE_WIDTH) - hero_x - px(56.0);
        fill(&mut card, hero_x, px(140.0), hero_width, px(160.0), MIST);
        outline(&mut card, hero_x, px(140.0), hero_width, px(160.0), TRACK);

        let content_width = px(BASE_WIDTH) - 2 * px(56.0);
        let metric_width = (content_width - 2 * px(24.0)) / 3;
        for (i, metric) in SAMPLE_METRICS.iter().enumerate() {
            let x = px(56.0) + i as i32 * (metric_width + px(24.0));
            let y = px(368.0);
            outline(&mut card, x, y, metric_width, px(160.0), TRACK);

            let bar_width = metric_width - 2 * px(24.0);
            fill(&mut card, x + px(24.0), y + px(96.0), bar_width, px(12.0), TRACK);
            fill(&mut card, x + px(24.0), y + px(96.0), bar_width * metric.value as i32 / 100, px(12.0), INK);
        }

        let routine_width = (content_width - px(24.0)) / 2;
        for (i, _) in SAMPLE_ROUTINE.iter().enumerate() {
            let x = px(56.0) + (i % 2) as i32 * (routine_width + px(24.0));
            let y = px(568.0) + (i / 2) as i32 * px(124.0);
            fill(&mut card, x, y, routine_width, px(100.0), MIST);
            outline(&mut card, x, y, routine_width, px(100.0), TRACK);
            fill(&mut card, x + px(24.0), y + px(72.0), px(12.0), px(12.0), MINT);
        }

        let tips_y = px(832.0);
        fill(&mut card, px(56.0), tips_y, content_width, px(144.0), INK);
        let longest_tip = SAMPLE_TIPS.iter().map(|tip| tip.len()).max().unwrap_or(1) as i32;
        for (i, tip) in SAMPLE_TIPS.iter().enumerate() {
            let y = tips_y + px(32.0) + i as i32 * px(32.0);
            fill(&mut card, px(88.0), y, px(12.0), px(12.0), MINT);
            let line_width = (content_width - px(96.0)) * tip.len() as i32 / longest_tip;
            fill(&mut card, px(112.0), y + px(4.0), line_width, px(4.0), MIST);
        }

        fill(&mut card, 0, px(1000.0), width as i32, height as i32 - px(1000.0), MIST);
        fill(&mut card, 0, px(1000.0), width as i32, 1, TRACK);
        fill(&mut card, px(56.0), px(1026.0), px(240.0), px(6.0), SLATE);

        Ok(card)
    }

    pub fn encode_png(&self, card: &RgbImage) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        card.write_to(&mut buffer, ImageFormat::Png)
            .map_err(|err| GlowError::Render(format!("PNG encoding failed: {err}")))?;
        Ok(buffer.into_inner())
    }

    /// Writes the HTML document and its raster under the fixed file stem.
    pub fn export(&self, options: &ReportOptions) -> Result<ReportArtifacts> {
        let content = ReportContent::resolve(options);
        let html = build_sample_report_html(options);
        let card = self.rasterize(&content)?;
        let png = self.encode_png(&card)?;

        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|err| export_error(dir, err))?;

        let html_path = dir.join(format!("{}.html", self.config.file_stem));
        let image_path = dir.join(format!("{}.png", self.config.file_stem));

        fs::write(&html_path, html).map_err(|err| export_error(&html_path, err))?;
        fs::write(&image_path, png).map_err(|err| export_error(&image_path, err))?;

        info!("Sample report written to {}", image_path.display());

        Ok(ReportArtifacts { html_path, image_path })
    }

    fn draw_header_gradient(&self, card: &mut RgbImage, header_height: u32) {
        let (width, height) = card.dimensions();
        let header_height = header_height.min(height);

        for x in 0..width {
            let t = x as f32 / (width - 1).max(1) as f32;
            let color = if t < 0.45 {
                lerp(ROSE, WHITE, t / 0.45)
            } else {
                lerp(WHITE, SKY, (t - 0.45) / 0.55)
            };

            for y in 0..header_height {
                card.put_pixel(x, y, color);
            }
        }

        debug!("Header gradient drawn over {width}x{header_height}");
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn lerp(from: Rgb<u8>, to: Rgb<u8>, t: f32) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgb([mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2])])
}

fn fill(card: &mut RgbImage, x: i32, y: i32, width: i32, height: i32, color: Rgb<u8>) {
    if width > 0 && height > 0 {
        draw_filled_rect_mut(card, Rect::at(x, y).of_size(width as u32, height as u32), color);
    }
}

fn outline(card: &mut RgbImage, x: i32, y: i32, width: i32, height: i32, color: Rgb<u8>) {
    if width > 0 && height > 0 {
        draw_hollow_rect_mut(card, Rect::at(x, y).of_size(width as u32, height as u32), color);
    }
}

fn export_error(path: &Path, err: std::io::Error) -> GlowError {
    GlowError::Render(format!("could not write {}: {err}", path.display()))
}
