use serde::{Deserialize, Serialize};

use crate::{
    GlowScore, ImageStatistics,
    error::{GlowError, Result},
};

/// Targets and weights of the composite glow score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub target_brightness: f64,
    pub target_texture: f64,
    pub target_highlights: f64,
    pub target_saturation: f64,
    /// Shadow ratio at which the penalty saturates.
    pub shadow_cap: f64,
    pub brightness_weight: f64,
    pub texture_weight: f64,
    pub highlight_weight: f64,
    pub saturation_weight: f64,
    pub shadow_weight: f64,
    pub floor: f64,
    pub ceiling: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            target_brightness: 0.62,
            target_texture: 0.18,
            target_highlights: 0.08,
            target_saturation: 0.28,
            shadow_cap: 0.20,
            brightness_weight: 0.40,
            texture_weight: 0.25,
            highlight_weight: 0.15,
            saturation_weight: 0.15,
            shadow_weight: 0.10,
            floor: 5.0,
            ceiling: 98.0,
        }
    }
}

impl ScoringConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let targets = [
            ("target_brightness", self.target_brightness),
            ("target_texture", self.target_texture),
            ("target_highlights", self.target_highlights),
            ("target_saturation", self.target_saturation),
            ("shadow_cap", self.shadow_cap),
        ];

        for (name, value) in targets {
            if !(value > 0.0 && value.is_finite()) {
                return Err(GlowError::InvalidConfig(format!("{name} must be positive, got {value}")));
            }
        }

        let weights = [
            self.brightness_weight,
            self.texture_weight,
            self.highlight_weight,
            self.saturation_weight,
            self.shadow_weight,
        ];
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(GlowError::InvalidConfig("weights must be finite".into()));
        }

        if !(0.0..=100.0).contains(&self.floor) || !(0.0..=100.0).contains(&self.ceiling) {
            return Err(GlowError::InvalidConfig("score bounds must lie within 0..=100".into()));
        }

        if self.floor >= self.ceiling {
            return Err(GlowError::InvalidConfig(format!(
                "floor {} must be below ceiling {}",
                self.floor, self.ceiling
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub brightness: f64,
    pub texture: f64,
    pub highlights: f64,
    pub saturation: f64,
    pub shadow_penalty: f64,
    pub composite: f64,
}

pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self { config: ScoringConfig::default() }
    }

    pub fn with_config(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn breakdown(&self, stats: &ImageStatistics) -> ScoreBreakdown {
        let c = &self.config;

        let brightness = closeness(stats.brightness, c.target_brightness);
        let texture = closeness(stats.std_deviation, c.target_texture);
        let highlights = closeness(stats.highlight_ratio, c.target_highlights);
        let saturation = closeness(stats.saturation, c.target_saturation);
        let shadow_penalty = (stats.shadow_ratio / c.shadow_cap).clamp(0.0, 1.0);

        let composite = brightness * c.brightness_weight
            + texture * c.texture_weight
            + highlights * c.highlight_weight
            + saturation * c.saturation_weight
            - shadow_penalty * c.shadow_weight;

        ScoreBreakdown { brightness, texture, highlights, saturation, shadow_penalty, composite }
    }

    pub fn score(&self, stats: &ImageStatistics) -> GlowScore {
        let composite = self.breakdown(stats).composite;
        let bounded = (composite * 100.0).clamp(self.config.floor, self.config.ceiling);

        GlowScore::from_rounded(bounded.round())
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 1 at the target, falling linearly to 0 once off by a full target's width.
fn closeness(actual: f64, target: f64) -> f64 {
    1.0 - ((actual - target).abs() / target).clamp(0.0, 1.0)
}
