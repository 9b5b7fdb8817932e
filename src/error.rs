use std::path::PathBuf;

use thiserror::Error;

pub const PHOTO_ADVISORY: &str =
    "We couldn't read that photo. Try a clearer image with good lighting.";

pub const REPORT_ADVISORY: &str =
    "We couldn't generate the sample report. Please try again.";

#[derive(Error, Debug)]
pub enum GlowError {
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Report rendering failed: {0}")]
    Render(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<image::ImageError> for GlowError {
    fn from(err: image::ImageError) -> Self {
        GlowError::Decode(err.to_string())
    }
}

impl GlowError {
    /// Advisory shown to the user in place of the internal error text.
    pub fn user_message(&self) -> &'static str {
        match self {
            GlowError::Render(_) => REPORT_ADVISORY,
            _ => PHOTO_ADVISORY,
        }
    }
}

pub type Result<T> = std::result::Result<T, GlowError>;
