//! Glow Score Demo
//!
//! Scores one or more photos, replays them through a demo session the way the
//! landing page does, and writes the sample report.
//!
//! Run with: cargo run --example glow_demo -- <image_path>... [--out <dir>]

use std::{env, path::PathBuf};

use glow_insights::{
    analyze_batch,
    report::{JsonReport, render::ReportRenderer},
    session::DemoSession,
};

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let mut paths = Vec::new();
    let mut output_dir = PathBuf::from("./output");

    while let Some(arg) = args.next() {
        if arg == "--out" {
            match args.next() {
                Some(dir) => output_dir = PathBuf::from(dir),
                None => {
                    eprintln!("--out needs a directory");
                    std::process::exit(1);
                }
            }
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    if paths.is_empty() {
        println!("Glow Score Demo");
        println!("===============");
        println!();
        println!("Usage: glow_demo <image_path>... [--out <dir>]");
        return;
    }

    println!("📊 Scoring {} photo(s)", paths.len());
    println!();

    for (path, result) in analyze_batch(&paths) {
        match &result {
            Ok(analysis) => {
                println!("{}: {}", path.display(), analysis.score);
                println!("   {}", analysis.comment);
                if let Ok(json) = JsonReport::from(analysis).to_json() {
                    println!("{json}");
                }
            }
            Err(err) => {
                log::warn!("{}: {err}", path.display());
                println!("{}: {}", path.display(), err.user_message());
            }
        }
    }

    // Replay uploads in order; only the last one stays on screen.
    let session = DemoSession::new();
    for path in &paths {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let submission = session.submit(&name, size);
        session.analyze_file(&submission, path);
    }

    let view = session.view();
    println!();
    println!("AI Glow Score: {}", view.score_display());
    println!("{}", view.status_text());

    let renderer = ReportRenderer::new().output_dir(&output_dir);
    session.generate_report(&renderer);

    if let Some(message) = session.view().report_message {
        println!("📁 {message}");
    }
}
