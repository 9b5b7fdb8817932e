use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GlowScore, ImageStatistics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisComment {
    BalancedTone,
    MinorTexture,
    LowLight,
    Dryness,
}

impl AnalysisComment {
    pub fn message(&self) -> &'static str {
        match self {
            AnalysisComment::BalancedTone => {
                "Balanced hydration and even tone detected. Consider light moisturizer + daily SPF."
            }
            AnalysisComment::MinorTexture => {
                "Minor texture or uneven tone detected. Try gentle exfoliant twice weekly + barrier-friendly moisturizer."
            }
            AnalysisComment::LowLight => {
                "Low-light image detected. Retake in brighter, natural light for a clearer preview."
            }
            AnalysisComment::Dryness => {
                "Dryness/signs of sensitivity detected. Start simple: cleanser + rich moisturizer + SPF."
            }
        }
    }
}

impl fmt::Display for AnalysisComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub struct CommentRule {
    pub name: &'static str,
    pub applies: fn(GlowScore, &ImageStatistics) -> bool,
    pub comment: AnalysisComment,
}

/// Evaluated top to bottom; the first rule that applies wins.
///
/// The low-light rule sits below both score rules, so a dark photo that still
/// scores 55 or more never gets the retake hint.
pub const COMMENT_RULES: [CommentRule; 4] = [
    CommentRule {
        name: "balanced",
        applies: |score, _| score.value() >= 80,
        comment: AnalysisComment::BalancedTone,
    },
    CommentRule {
        name: "minor-texture",
        applies: |score, _| score.value() >= 55,
        comment: AnalysisComment::MinorTexture,
    },
    CommentRule {
        name: "low-light",
        applies: |_, stats| stats.shadow_ratio > 0.25,
        comment: AnalysisComment::LowLight,
    },
    CommentRule {
        name: "dryness",
        applies: |_, _| true,
        comment: AnalysisComment::Dryness,
    },
];

pub struct CommentSelector;

impl CommentSelector {
    pub fn select(score: GlowScore, stats: &ImageStatistics) -> AnalysisComment {
        COMMENT_RULES
            .iter()
            .find(|rule| (rule.applies)(score, stats))
            .map(|rule| {
                log::debug!("Comment rule '{}' matched score {}", rule.name, score.value());
                rule.comment
            })
            .unwrap_or(AnalysisComment::Dryness)
    }
}
