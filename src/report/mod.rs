pub mod html;
pub mod render;
pub mod sample;

use serde::Serialize;

use crate::{GlowAnalysis, report::sample::SAMPLE_SCORE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreLabel {
    #[serde(rename = "Radiant baseline")]
    RadiantBaseline,
    #[serde(rename = "Glow in progress")]
    GlowInProgress,
    #[serde(rename = "Needs barrier boost")]
    NeedsBarrierBoost,
    #[serde(rename = "Gentle care recommended")]
    GentleCare,
}

impl ScoreLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => ScoreLabel::RadiantBaseline,
            s if s >= 55 => ScoreLabel::GlowInProgress,
            s if s >= 40 => ScoreLabel::NeedsBarrierBoost,
            _ => ScoreLabel::GentleCare,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            ScoreLabel::RadiantBaseline => "Radiant baseline",
            ScoreLabel::GlowInProgress => "Glow in progress",
            ScoreLabel::NeedsBarrierBoost => "Needs barrier boost",
            ScoreLabel::GentleCare => "Gentle care recommended",
        }
    }
}

/// Live values to splice into the sample report. Missing values fall back to
/// the built-in sample score and description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOptions {
    pub score: Option<f64>,
    pub analysis: Option<String>,
}

impl ReportOptions {
    pub fn from_analysis(analysis: Option<&GlowAnalysis>) -> Self {
        match analysis {
            Some(a) => Self {
                score: Some(a.score.value() as f64),
                analysis: Some(a.comment.message().to_string()),
            },
            None => Self::default(),
        }
    }
}

/// Report values after fallbacks are applied. Text here is not yet escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContent {
    pub score: u8,
    pub label: &'static str,
    pub description: String,
}

impl ReportContent {
    pub fn resolve(options: &ReportOptions) -> Self {
        let (score, label) = match options.score.filter(|s| s.is_finite()) {
            Some(raw) => {
                let score = raw.round().clamp(0.0, 100.0) as u8;
                (score, ScoreLabel::from_score(score).text())
            }
            None => (SAMPLE_SCORE.value, SAMPLE_SCORE.label),
        };

        let description = options
            .analysis
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(SAMPLE_SCORE.description)
            .to_string();

        Self { score, label, description }
    }
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

#[derive(Serialize)]
pub struct JsonReport {
    pub score: u8,
    pub label: ScoreLabel,
    pub comment: String,
    pub statistics: StatisticsSection,
}

#[derive(Serialize)]
pub struct StatisticsSection {
    pub brightness: f64,
    pub saturation: f64,
    pub highlight_ratio: f64,
    pub shadow_ratio: f64,
    pub std_deviation: f64,
}

impl From<&GlowAnalysis> for JsonReport {
    fn from(analysis: &GlowAnalysis) -> Self {
        let stats = &analysis.statistics;

        Self {
            score: analysis.score.value(),
            label: ScoreLabel::from_score(analysis.score.value()),
            comment: analysis.comment.message().to_string(),
            statistics: StatisticsSection {
                brightness: stats.brightness,
                saturation: stats.saturation,
                highlight_ratio: stats.highlight_ratio,
                shadow_ratio: stats.shadow_ratio,
                std_deviation: stats.std_deviation,
            },
        }
    }
}

impl JsonReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
