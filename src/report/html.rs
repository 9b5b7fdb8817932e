use std::fmt::Write;

use crate::report::{
    ReportContent, ReportOptions, escape_html,
    sample::{REPORT_METADATA, SAMPLE_BADGES, SAMPLE_METRICS, SAMPLE_ROUTINE, SAMPLE_TIPS},
};

const REPORT_STYLE: &str = r#"
  :root { color-scheme: light; }
  * { box-sizing: border-box; }
  body { margin: 0; padding: 0; background: #f8fafc; color: #1f2937; font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif; }
  .card { width: 816px; background: #ffffff; border: 1px solid #e2e8f0; border-radius: 32px; box-shadow: 0 24px 60px rgba(15,23,42,0.12); overflow: hidden; }
  .header { padding: 48px 56px 40px; background: linear-gradient(135deg,#ffe4e6 5%,#ffffff 45%,#e0f2fe 100%); border-bottom: 1px solid #e2e8f0; }
  .row { display: flex; justify-content: space-between; align-items: flex-start; gap: 24px; }
  .brand { display: flex; align-items: center; gap: 18px; }
  .brand-badge { width: 48px; height: 48px; border-radius: 24px; background: linear-gradient(135deg,#d946ef 0%,#fbbf24 100%); }
  .eyebrow { margin: 0; font-size: 12px; letter-spacing: 0.3em; font-weight: 600; text-transform: uppercase; color: #64748b; }
  .title { margin: 8px 0 0; font-size: 32px; font-weight: 800; color: #0f172a; }
  .meta { text-align: right; font-size: 14px; color: #475569; }
  .meta p { margin: 0; }
  .meta .name { font-weight: 600; color: #0f172a; }
  .meta .generated { margin-top: 8px; font-size: 12px; color: #64748b; }
  .score-grid { margin-top: 40px; display: grid; grid-template-columns: 1.1fr 0.9fr; gap: 40px; align-items: center; }
  .label { margin: 0; font-size: 12px; letter-spacing: 0.3em; font-weight: 600; text-transform: uppercase; color: #64748b; }
  .score-row { display: flex; align-items: flex-end; gap: 16px; margin-top: 12px; }
  .score-value { margin: 0; font-size: 60px; font-weight: 900; color: #0f172a; }
  .score-tag { font-size: 14px; font-weight: 600; color: #34d399; }
  .progress { margin-top: 20px; height: 16px; width: 100%; border-radius: 999px; background: #e2e8f0; overflow: hidden; }
  .progress span { display: block; height: 100%; background: #0f172a; border-radius: 999px; }
  .score-text { margin-top: 16px; font-size: 16px; line-height: 24px; color: #475569; max-width: 480px; }
  .badges { margin-top: 24px; display: flex; flex-wrap: wrap; gap: 12px; }
  .badge { display: inline-flex; align-items: center; gap: 8px; padding: 8px 14px; border-radius: 999px; font-size: 13px; font-weight: 500; background: #f3f4f6; border: 1px solid #e2e8f0; color: #111827; }
  .badge-icon { width: 8px; height: 8px; border-radius: 50%; background: #111827; display: inline-block; }
  .hero { position: relative; height: 256px; border-radius: 28px; border: 1px solid #e2e8f0; background: linear-gradient(135deg,#e2e8f0 0%,#ffffff 55%,#ffe4e6 100%); overflow: hidden; }
  .hero-content { position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 0 40px; color: #475569; }
  .hero-content h3 { margin: 16px 0 0; font-size: 22px; font-weight: 600; color: #0f172a; }
  .hero-content p { margin: 12px 0 0; font-size: 14px; color: #64748b; }
  .section { padding: 48px 56px; background: #ffffff; }
  .metrics { display: grid; gap: 24px; grid-template-columns: repeat(3, minmax(0, 1fr)); }
  .metric { border: 1px solid #e2e8f0; border-radius: 20px; padding: 24px; background: #ffffff; }
  .metric .value { display: flex; align-items: baseline; gap: 12px; margin-top: 12px; }
  .metric .value span { font-size: 34px; font-weight: 700; color: #0f172a; }
  .metric .value small { font-size: 14px; color: #64748b; }
  .metric .bar { margin-top: 16px; height: 12px; border-radius: 999px; background: #e2e8f0; overflow: hidden; }
  .metric .bar span { display: block; height: 100%; background: #0f172a; border-radius: 999px; }
  .metric .body { margin-top: 16px; font-size: 14px; line-height: 22px; color: #475569; }
  .routine { margin-top: 40px; display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 24px; }
  .routine-card { border: 1px solid #e2e8f0; border-radius: 20px; padding: 24px; background: #f8fafc; }
  .routine-card .step { font-size: 12px; letter-spacing: 0.3em; font-weight: 600; text-transform: uppercase; color: #64748b; margin: 0; }
  .routine-card h4 { margin: 14px 0 0; font-size: 18px; font-weight: 600; color: #0f172a; }
  .routine-card .body { margin: 12px 0 0; font-size: 14px; color: #475569; }
  .routine-card .note { margin-top: 16px; font-size: 13px; color: #34d399; font-weight: 500; }
  .tips { margin-top: 40px; border: 1px solid #e2e8f0; border-radius: 24px; padding: 32px; background: linear-gradient(135deg,#0f172a 0%,#1e293b 50%,#0f172a 100%); color: #f8fafc; }
  .tips h3 { margin: 0; font-size: 22px; font-weight: 600; }
  .tips p { margin: 12px 0 24px; font-size: 14px; color: rgba(241,245,249,0.8); }
  .tips ul { margin: 0; padding: 0; list-style: none; display: flex; flex-direction: column; gap: 12px; font-size: 14px; }
  .tips li::before { content: '✔'; color: #34d399; margin-right: 12px; }
  .footer { padding: 24px 56px; border-top: 1px solid #e2e8f0; background: #f8fafc; font-size: 12px; color: #64748b; display: flex; flex-wrap: wrap; gap: 12px; justify-content: space-between; }
"#;

/// Builds the self-contained sample report document.
///
/// Only the live analysis text comes from outside the crate, and it is
/// escaped before insertion; the static sample data is trusted markup.
pub fn build_sample_report_html(options: &ReportOptions) -> String {
    let content = ReportContent::resolve(options);
    let description = escape_html(&content.description);

    let mut metrics = String::new();
    for metric in &SAMPLE_METRICS {
        let _ = write!(
            metrics,
            r#"
      <div class="metric">
        <p class="label">{label}</p>
        <div class="value"><span>{value}</span><small>/100</small></div>
        <div class="bar"><span style="width:{value}%"></span></div>
        <p class="body">{description}</p>
      </div>"#,
            label = metric.label,
            value = metric.value,
            description = metric.description,
        );
    }

    let mut routine = String::new();
    for item in &SAMPLE_ROUTINE {
        let _ = write!(
            routine,
            r#"
      <div class="routine-card">
        <p class="step">{}</p>
        <h4>{}</h4>
        <p class="body">{}</p>
        <div class="note">✔ Clinically-vetted ingredient list</div>
      </div>"#,
            item.step,
            item.summary,
            escape_html(item.note),
        );
    }

    let tips: String = SAMPLE_TIPS.iter().map(|tip| format!("<li>{tip}</li>")).collect();

    let badges: String = SAMPLE_BADGES
        .iter()
        .map(|badge| format!(r#"<span class="badge"><span class="badge-icon"></span>{badge}</span>"#))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>AI Lana Buddy · Glow Insights Preview</title>
    <style>{style}</style>
  </head>
  <body>
    <div class="card">
      <div class="header">
        <div class="row">
          <div class="brand">
            <div class="brand-badge"></div>
            <div>
              <p class="eyebrow">AI Lana Buddy</p>
              <h1 class="title">Glow Insights Preview</h1>
            </div>
          </div>
          <div class="meta">
            <p class="name">{client}</p>
            <p>{email}</p>
            <p class="generated">Generated {generated}</p>
          </div>
        </div>
        <div class="score-grid">
          <div>
            <p class="label">AI Glow Score</p>
            <div class="score-row">
              <p class="score-value">{score}</p>
              <span class="score-tag">{label}</span>
            </div>
            <div class="progress"><span style="width:{score}%"></span></div>
            <p class="score-text">{description}</p>
            <div class="badges">{badges}</div>
          </div>
          <div class="hero">
            <div class="hero-content">
              <p class="label">Demo visual</p>
              <h3>Reusable component library mirrors live app UI</h3>
              <p>Replace this block with captured selfie preview once the production model is connected.</p>
            </div>
          </div>
        </div>
      </div>
      <div class="section">
        <div class="metrics">{metrics}</div>
        <div class="routine">{routine}</div>
        <div class="tips">
          <h3>Gentle guidance &amp; next steps</h3>
          <p>Stay consistent for 4-6 weeks, then retest for adaptive adjustments backed by Lana&#39;s inclusive model.</p>
          <ul>{tips}</ul>
        </div>
      </div>
      <div class="footer">
        <span>Mock insights for demo purposes only. Dermatologist-reviewed feedback becomes available in the full release.</span>
        <span>AI Lana Buddy · Inclusive by design · v0.3 preview</span>
      </div>
    </div>
  </body>
</html>
"#,
        style = REPORT_STYLE,
        client = REPORT_METADATA.client_name,
        email = REPORT_METADATA.email,
        generated = REPORT_METADATA.generated_on,
        score = content.score,
        label = content.label,
        description = description,
        badges = badges,
        metrics = metrics,
        routine = routine,
        tips = tips,
    )
}
