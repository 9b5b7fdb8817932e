use std::{
    io::Cursor,
    sync::{Arc, Barrier},
    thread,
};

use glow_insights::{
    analyze_bytes,
    error::{PHOTO_ADVISORY, REPORT_ADVISORY},
    report::render::{ReportConfig, ReportRenderer},
    session::{DemoSession, Publish},
};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

fn photo(color: [u8; 3]) -> Vec<u8> {
    let image = RgbImage::from_fn(48, 48, |x, y| {
        let shade = ((x + y) % 8) as u8 * 6;
        Rgb([color[0].saturating_add(shade), color[1].saturating_add(shade), color[2].saturating_add(shade)])
    });
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image).write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

#[test]
fn test_newer_submission_wins_when_older_finishes_last() {
    let session = Arc::new(DemoSession::new());
    let dark = photo([10, 10, 10]);
    let bright = photo([190, 150, 130]);
    let expected = analyze_bytes(&bright).unwrap();

    let a = session.submit("dark.png", dark.len() as u64);
    let b = session.submit("bright.png", bright.len() as u64);
    let b_done = Arc::new(Barrier::new(2));

    let outcome_a = thread::scope(|scope| {
        let late = scope.spawn({
            let session = Arc::clone(&session);
            let b_done = Arc::clone(&b_done);
            let dark = &dark;
            let a = &a;
            move || {
                b_done.wait();
                session.analyze_bytes(a, dark)
            }
        });

        assert_eq!(session.analyze_bytes(&b, &bright), Publish::Published);
        b_done.wait();
        late.join().unwrap()
    });

    assert_eq!(outcome_a, Publish::Stale);

    let view = session.view();
    assert_eq!(view.score(), Some(expected.score));
    assert_eq!(view.comment.as_deref(), Some(expected.comment.message()));
    assert!(!view.loading);
}

#[test]
fn test_newer_submission_wins_when_older_finishes_first() {
    let session = DemoSession::new();
    let dark = photo([10, 10, 10]);
    let bright = photo([190, 150, 130]);
    let expected = analyze_bytes(&bright).unwrap();

    let a = session.submit("dark.png", dark.len() as u64);
    let b = session.submit("bright.png", bright.len() as u64);

    assert_eq!(session.analyze_bytes(&a, &dark), Publish::Stale);
    // The stale run must not have touched the view.
    assert!(session.view().loading);
    assert!(session.view().preview.is_none());

    assert_eq!(session.analyze_bytes(&b, &bright), Publish::Published);
    assert_eq!(session.view().score(), Some(expected.score));
}

#[test]
fn test_many_concurrent_submissions_keep_latest() {
    let session = Arc::new(DemoSession::new());
    let bytes = Arc::new(photo([150, 120, 100]));

    let submissions: Vec<_> = (0..8)
        .map(|i| session.submit(&format!("photo-{i}.png"), bytes.len() as u64))
        .collect();
    let latest = submissions.last().unwrap().clone();

    let handles: Vec<_> = submissions
        .into_iter()
        .map(|submission| {
            let session = Arc::clone(&session);
            let bytes = Arc::clone(&bytes);
            thread::spawn(move || (submission.token(), session.analyze_bytes(&submission, &bytes)))
        })
        .collect();

    for handle in handles {
        let (token, outcome) = handle.join().unwrap();
        let expected = if token == latest.token() { Publish::Published } else { Publish::Stale };
        assert_eq!(outcome, expected);
    }

    assert!(session.view().score().is_some());
}

#[test]
fn test_decode_failure_shows_single_advisory_without_score() {
    let session = DemoSession::new();
    let good = session.submit("good.png", 0);
    session.analyze_bytes(&good, &photo([180, 140, 120]));
    assert!(session.view().score().is_some());
    assert!(session.view().preview.is_some());

    let bad = session.submit("bad.png", 4);
    assert_eq!(session.analyze_bytes(&bad, &[1, 2, 3, 4]), Publish::Published);

    let view = session.view();
    assert_eq!(view.score(), None);
    assert_eq!(view.score_display(), "—");
    assert_eq!(view.status_text(), PHOTO_ADVISORY);
    assert!(view.preview.is_none());
}

#[test]
fn test_report_uses_live_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let session = DemoSession::new();
    let bytes = photo([180, 140, 120]);
    let submission = session.submit("selfie.png", bytes.len() as u64);
    session.analyze_bytes(&submission, &bytes);
    let score = session.view().score().unwrap();

    let artifacts = session
        .generate_report(&ReportRenderer::new().output_dir(dir.path()))
        .unwrap();

    let html = std::fs::read_to_string(&artifacts.html_path).unwrap();
    assert!(html.contains(&format!(r#"<p class="score-value">{}</p>"#, score.value())));

    let view = session.view();
    assert!(!view.report_generating);
    assert_eq!(
        view.report_message.as_deref(),
        Some("Sample report saved as ai-lana-buddy-sample-report.png.")
    );
}

#[test]
fn test_report_without_analysis_uses_sample_score() {
    let dir = tempfile::tempdir().unwrap();
    let session = DemoSession::new();

    let artifacts = session
        .generate_report(&ReportRenderer::new().output_dir(dir.path()))
        .unwrap();

    let html = std::fs::read_to_string(&artifacts.html_path).unwrap();
    assert!(html.contains(r#"<p class="score-value">82</p>"#));
}

#[test]
fn test_report_failure_becomes_advisory() {
    let session = DemoSession::new();
    let renderer = ReportRenderer::with_config(ReportConfig { card_width: 0, ..ReportConfig::default() });

    assert!(session.generate_report(&renderer).is_none());

    let view = session.view();
    assert!(!view.report_generating);
    assert_eq!(view.report_message.as_deref(), Some(REPORT_ADVISORY));
}
