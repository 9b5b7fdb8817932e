use std::{path::Path, sync::Arc};

use image::DynamicImage;
use log::{debug, error};
use parking_lot::Mutex;

use crate::{
    GlowAnalysis, GlowScore,
    analysis::{metrics::MetricExtractor, scoring::ScoreEngine},
    error::{GlowError, REPORT_ADVISORY},
    evaluate, image_utils,
    report::{ReportOptions, render::{ReportArtifacts, ReportRenderer}},
};

pub const PLACEHOLDER_TEXT: &str = "Your private, on-device preview. Real app provides dermatologist-reviewed guidance without medical claims.";
pub const ANALYZING_TEXT: &str = "Analyzing...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    token: u64,
    file_name: String,
    size: u64,
}

impl Submission {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Outcome of trying to write a result back into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publish {
    Published,
    /// A newer submission took over; the result was dropped.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct DemoView {
    pub preview: Option<Arc<DynamicImage>>,
    pub analysis: Option<GlowAnalysis>,
    /// Analysis comment, or the advisory after a failed upload.
    pub comment: Option<String>,
    pub loading: bool,
    pub report_generating: bool,
    pub report_message: Option<String>,
}

impl DemoView {
    pub fn score(&self) -> Option<GlowScore> {
        self.analysis.map(|a| a.score)
    }

    pub fn score_display(&self) -> String {
        match self.score() {
            Some(score) => score.to_string(),
            None => "—".to_string(),
        }
    }

    /// Value bound to the progress bar.
    pub fn progress(&self) -> u8 {
        self.score().map_or(0, |s| s.value())
    }

    pub fn status_text(&self) -> &str {
        if self.loading {
            ANALYZING_TEXT
        } else {
            self.comment.as_deref().unwrap_or(PLACEHOLDER_TEXT)
        }
    }
}

#[derive(Default)]
struct SessionState {
    issued: u64,
    current: Option<u64>,
    view: DemoView,
}

impl SessionState {
    fn is_current(&self, submission: &Submission) -> bool {
        self.current == Some(submission.token)
    }
}

/// Single-active-submission state for the interactive demo.
///
/// Every upload gets a token that becomes the current one. Work for an upload
/// may finish in any order, but a result is only written if its token is
/// still current; the comparison and the write happen under one lock.
pub struct DemoSession {
    state: Mutex<SessionState>,
    engine: ScoreEngine,
}

impl DemoSession {
    pub fn new() -> Self {
        Self::with_engine(ScoreEngine::new())
    }

    pub fn with_engine(engine: ScoreEngine) -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
            engine,
        }
    }

    pub fn view(&self) -> DemoView {
        self.state.lock().view.clone()
    }

    pub fn submit(&self, file_name: &str, size: u64) -> Submission {
        let mut state = self.state.lock();
        state.issued += 1;
        state.current = Some(state.issued);

        state.view.loading = true;
        state.view.preview = None;
        state.view.analysis = None;
        state.view.comment = None;

        debug!("Submission {} ({file_name}, {size} bytes) is now current", state.issued);

        Submission {
            token: state.issued,
            file_name: file_name.to_string(),
            size,
        }
    }

    pub fn is_current(&self, submission: &Submission) -> bool {
        self.state.lock().is_current(submission)
    }

    pub fn publish_preview(&self, submission: &Submission, preview: Arc<DynamicImage>) -> Publish {
        self.publish(submission, |view| view.preview = Some(preview))
    }

    pub fn publish_analysis(&self, submission: &Submission, analysis: GlowAnalysis) -> Publish {
        self.publish(submission, |view| {
            view.analysis = Some(analysis);
            view.comment = Some(analysis.comment.message().to_string());
            view.loading = false;
        })
    }

    /// Terminal for the submission; the user has to upload again to retry.
    pub fn publish_failure(&self, submission: &Submission, err: &GlowError) -> Publish {
        let outcome = self.publish(submission, |view| {
            view.preview = None;
            view.analysis = None;
            view.comment = Some(err.user_message().to_string());
            view.loading = false;
        });

        if outcome == Publish::Published {
            error!("Analysis of '{}' failed: {err}", submission.file_name);
        }

        outcome
    }

    pub fn analyze_file<P: AsRef<Path>>(&self, submission: &Submission, path: P) -> Publish {
        match std::fs::read(&path) {
            Ok(bytes) => self.analyze_bytes(submission, &bytes),
            Err(source) => {
                let err = GlowError::FileRead { path: path.as_ref().to_path_buf(), source };
                self.publish_failure(submission, &err)
            }
        }
    }

    pub fn analyze_bytes(&self, submission: &Submission, bytes: &[u8]) -> Publish {
        let image = match image_utils::decode_bytes(bytes) {
            Ok(image) => Arc::new(image),
            Err(err) => return self.publish_failure(submission, &err),
        };

        if self.publish_preview(submission, Arc::clone(&image)) == Publish::Stale {
            return Publish::Stale;
        }

        match MetricExtractor::new().extract_image(&image) {
            Ok(statistics) => {
                let analysis = evaluate(&statistics, &self.engine);
                self.publish_analysis(submission, analysis)
            }
            Err(err) => self.publish_failure(submission, &err),
        }
    }

    /// Renders the sample report from the current analysis, or from the
    /// built-in sample values when no analysis has completed yet.
    pub fn generate_report(&self, renderer: &ReportRenderer) -> Option<ReportArtifacts> {
        let options = {
            let mut state = self.state.lock();
            state.view.report_generating = true;
            state.view.report_message = None;
            ReportOptions::from_analysis(state.view.analysis.as_ref())
        };

        let result = renderer.export(&options);

        let mut state = self.state.lock();
        state.view.report_generating = false;

        match result {
            Ok(artifacts) => {
                state.view.report_message = Some(format!(
                    "Sample report saved as {}.",
                    artifacts.image_file_name()
                ));
                Some(artifacts)
            }
            Err(err) => {
                error!("Sample report generation failed: {err}");
                state.view.report_message = Some(REPORT_ADVISORY.to_string());
                None
            }
        }
    }

    fn publish(&self, submission: &Submission, apply: impl FnOnce(&mut DemoView)) -> Publish {
        let mut state = self.state.lock();

        if !state.is_current(submission) {
            debug!(
                "Dropping result for stale submission {} (current: {:?})",
                submission.token, state.current
            );
            return Publish::Stale;
        }

        apply(&mut state.view);
        Publish::Published
    }
}

impl Default for DemoSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ImageStatistics, analysis::comment::AnalysisComment, error::PHOTO_ADVISORY};

    use super::*;

    fn analysis(score: u8, comment: AnalysisComment) -> GlowAnalysis {
        GlowAnalysis {
            statistics: ImageStatistics {
                brightness: 0.5,
                saturation: 0.2,
                highlight_ratio: 0.05,
                shadow_ratio: 0.1,
                std_deviation: 0.15,
            },
            score: GlowScore::new(score),
            comment,
        }
    }

    #[test]
    fn test_initial_view() {
        let view = DemoSession::new().view();

        assert_eq!(view.score_display(), "—");
        assert_eq!(view.progress(), 0);
        assert_eq!(view.status_text(), PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_submit_clears_previous_result() {
        let session = DemoSession::new();
        let first = session.submit("a.jpg", 10);
        session.publish_analysis(&first, analysis(70, AnalysisComment::MinorTexture));
        assert_eq!(session.view().score_display(), "70/100");

        session.submit("b.jpg", 20);
        let view = session.view();
        assert!(view.loading);
        assert_eq!(view.score(), None);
        assert_eq!(view.status_text(), ANALYZING_TEXT);
    }

    #[test]
    fn test_submission_records_file_details() {
        let session = DemoSession::new();
        let first = session.submit("morning.jpg", 48_213);
        let second = session.submit("evening.png", 1_024);

        assert_eq!(first.file_name(), "morning.jpg");
        assert_eq!(first.size(), 48_213);
        assert_eq!(second.file_name(), "evening.png");
        assert_eq!(second.size(), 1_024);
        assert!(second.token() > first.token());
        assert!(!session.is_current(&first));
        assert!(session.is_current(&second));
    }

    #[test]
    fn test_submit_drops_previous_preview() {
        let session = DemoSession::new();
        let first = session.submit("a.png", 10);
        let preview = Arc::new(DynamicImage::new_rgb8(4, 4));
        assert_eq!(session.publish_preview(&first, preview), Publish::Published);
        assert!(session.view().preview.is_some());

        session.submit("b.png", 20);
        assert!(session.view().preview.is_none());
    }

    #[test]
    fn test_failure_drops_published_preview() {
        let session = DemoSession::new();
        let a = session.submit("a.png", 10);
        session.publish_preview(&a, Arc::new(DynamicImage::new_rgb8(4, 4)));

        let err = GlowError::Decode("truncated".into());
        assert_eq!(session.publish_failure(&a, &err), Publish::Published);

        let view = session.view();
        assert!(view.preview.is_none());
        assert_eq!(view.status_text(), PHOTO_ADVISORY);
    }

    #[test]
    fn test_late_result_for_old_submission_is_dropped() {
        let session = DemoSession::new();
        let a = session.submit("a.jpg", 10);
        let b = session.submit("b.jpg", 20);

        assert_eq!(session.publish_analysis(&b, analysis(90, AnalysisComment::BalancedTone)), Publish::Published);
        assert_eq!(session.publish_analysis(&a, analysis(30, AnalysisComment::Dryness)), Publish::Stale);

        let view = session.view();
        assert_eq!(view.progress(), 90);
        assert_eq!(view.comment.as_deref(), Some(AnalysisComment::BalancedTone.message()));
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let session = DemoSession::new();
        let a = session.submit("a.jpg", 10);
        let b = session.submit("b.jpg", 20);
        session.publish_analysis(&b, analysis(60, AnalysisComment::MinorTexture));

        let err = GlowError::Decode("bad".into());
        assert_eq!(session.publish_failure(&a, &err), Publish::Stale);
        assert_eq!(session.view().progress(), 60);
    }

    #[test]
    fn test_failure_replaces_comment_and_clears_score() {
        let session = DemoSession::new();
        let a = session.submit("a.jpg", 10);

        assert_eq!(session.analyze_bytes(&a, b"definitely not a photo"), Publish::Published);

        let view = session.view();
        assert!(!view.loading);
        assert_eq!(view.score(), None);
        assert_eq!(view.status_text(), PHOTO_ADVISORY);
    }

    #[test]
    fn test_missing_file_is_reported_once() {
        let session = DemoSession::new();
        let a = session.submit("missing.png", 0);

        assert_eq!(session.analyze_file(&a, "/nonexistent/missing.png"), Publish::Published);
        assert_eq!(session.view().comment.as_deref(), Some(PHOTO_ADVISORY));
    }
}
