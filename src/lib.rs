use std::{
    fmt,
    path::{Path, PathBuf},
};

use image::DynamicImage;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use crate::{
    analysis::{
        comment::{AnalysisComment, CommentSelector},
        metrics::MetricExtractor,
        scoring::{ScoreEngine, ScoringConfig},
    },
    error::{GlowError, Result},
};

pub mod analysis;
pub mod error;
pub mod image_utils;
pub mod report;
pub mod session;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageStatistics {
    pub brightness: f64,
    pub saturation: f64,
    pub highlight_ratio: f64,
    pub shadow_ratio: f64,
    pub std_deviation: f64,
}

/// Integer glow score. The default engine keeps it within 5..=98.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GlowScore(u8);

impl GlowScore {
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub(crate) fn from_rounded(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for GlowScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlowAnalysis {
    pub statistics: ImageStatistics,
    pub score: GlowScore,
    pub comment: AnalysisComment,
}

pub struct GlowAnalyzer {
    original: DynamicImage,
    config: ScoringConfig,
}

impl GlowAnalyzer {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(&path).map_err(|source| GlowError::FileRead {
            path: path.as_ref().to_path_buf(),
            source,
        })?;

        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let original = image_utils::decode_bytes(bytes)?;
        Ok(Self::from_image(original))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            original: image,
            config: ScoringConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn image(&self) -> &DynamicImage {
        &self.original
    }

    pub fn statistics(&self) -> Result<ImageStatistics> {
        MetricExtractor::new().extract_image(&self.original)
    }

    pub fn analyze(&self) -> Result<GlowAnalysis> {
        let statistics = self.statistics()?;
        let engine = ScoreEngine::with_config(self.config.clone())?;
        Ok(evaluate(&statistics, &engine))
    }
}

/// Decodes, scores and comments on a photo in one call.
pub fn analyze_bytes(bytes: &[u8]) -> Result<GlowAnalysis> {
    GlowAnalyzer::from_bytes(bytes)?.analyze()
}

/// Scores several photos in parallel, keeping each result next to its path.
pub fn analyze_batch(paths: &[PathBuf]) -> Vec<(PathBuf, Result<GlowAnalysis>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), GlowAnalyzer::open(path).and_then(|a| a.analyze())))
        .collect()
}

pub fn evaluate(statistics: &ImageStatistics, engine: &ScoreEngine) -> GlowAnalysis {
    let score = engine.score(statistics);
    let comment = CommentSelector::select(score, statistics);

    GlowAnalysis {
        statistics: *statistics,
        score,
        comment,
    }
}
