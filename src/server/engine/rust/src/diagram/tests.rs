/* src/server/engine/rust/src/diagram/tests.rs */

use insighthunt_core::{Locale, VisualizationType};
use serde_json::json;

use super::*;

fn principles() -> Vec<String> {
  vec![
    "Step 1: Define the problem".to_string(),
    "2. Size the opportunity".to_string(),
    "Ship a thin slice".to_string(),
  ]
}

fn render(kind: VisualizationType, locale: Locale, data: Option<&serde_json::Value>) -> String {
  let principles = principles();
  let input = DiagramInput::new(locale, "Opportunity Sizing Framework", &principles).with_data(data);
  DiagramRegistry::new().render(Some(kind), &input).into_string()
}

#[test]
fn strips_step_prefixes() {
  assert_eq!(strip_step_prefix("Step 3: Measure"), "Measure");
  assert_eq!(strip_step_prefix("step 3. Measure"), "Measure");
  assert_eq!(strip_step_prefix("4. Iterate"), "Iterate");
  assert_eq!(strip_step_prefix("No prefix here"), "No prefix here");
  assert_eq!(strip_step_prefix("2024 was big"), "2024 was big");
}

#[test]
fn truncates_by_chars() {
  assert_eq!(truncate_chars("short", 10), "short");
  assert_eq!(truncate_chars("abcdefghij", 10), "abcdefghij");
  assert_eq!(truncate_chars("abcdefghijk", 10), "abcdefg...");
  assert_eq!(truncate_chars("漏斗模型漏斗模型", 5), "漏斗...");
}

#[test]
fn registry_covers_every_kind() {
  let registry = DiagramRegistry::new();
  assert_eq!(registry.len(), VisualizationType::ALL.len());
  for kind in VisualizationType::ALL {
    assert_eq!(registry.get(Some(kind)).kind(), kind);
  }
}

#[test]
fn missing_kind_uses_mind_map() {
  let registry = DiagramRegistry::new();
  assert_eq!(registry.get(None).kind(), VisualizationType::MindMap);
  let principles = principles();
  let input = DiagramInput::new(Locale::En, "Opportunity Sizing Framework", &principles);
  let html = registry.render(None, &input).into_string();
  assert!(html.contains("diagram-MindMap"));
  assert!(html.contains("💡"));
  assert!(html.contains("1️⃣"));
  assert!(html.contains("Opportunity Sizing Fra..."));
}

#[test]
fn step_flow_keeps_explicit_numbers() {
  let html = render(VisualizationType::StepFlow, Locale::En, None);
  assert!(html.contains(r#"<span class="step-number">2</span><span class="step-text">Size the opportunity</span>"#));
  assert!(html.contains(r#"<span class="step-number">3</span><span class="step-text">Ship a thin slice</span>"#));
}

#[test]
fn titles_follow_locale() {
  let en = render(VisualizationType::Funnel, Locale::En, None);
  let zh = render(VisualizationType::Funnel, Locale::Zh, None);
  assert!(en.contains("Funnel Model"));
  assert!(zh.contains("漏斗模型"));
}

#[test]
fn structured_data_wins_over_principles() {
  let data = json!({ "stages": [{ "label": "Visit", "value": "100%" }, { "label": "Sign up" }] });
  let html = render(VisualizationType::Funnel, Locale::En, Some(&data));
  assert!(html.contains("Visit"));
  assert!(html.contains("100%"));
  assert!(!html.contains("Define the problem"));
}

#[test]
fn malformed_data_falls_back_to_principles() {
  let data = json!({ "stages": "not a list" });
  let html = render(VisualizationType::Funnel, Locale::En, Some(&data));
  assert!(html.contains("Define the problem"));
}

#[test]
fn matrix_fills_missing_quadrants() {
  let html = render(VisualizationType::Matrix2x2, Locale::Zh, None);
  assert!(html.contains("Define the prob"));
  assert!(html.contains("象限 4"));
}

#[test]
fn pyramid_draws_top_level_first() {
  let data = json!({ "levels": [{ "label": "Base" }, { "label": "Middle" }, { "label": "Peak" }] });
  let html = render(VisualizationType::Pyramid, Locale::En, Some(&data));
  let peak = html.find("Peak").unwrap();
  let base = html.find("Base").unwrap();
  assert!(peak < base);
}

#[test]
fn onion_draws_outer_layer_first() {
  let data = json!({ "core": "Mission", "layers": [{ "label": "Inner" }, { "label": "Outer" }] });
  let html = render(VisualizationType::Onion, Locale::En, Some(&data));
  assert!(html.find("Outer").unwrap() < html.find("Inner").unwrap());
  assert!(html.find("Inner").unwrap() < html.find("Mission").unwrap());
}

#[test]
fn equation_rejects_unknown_operator() {
  let data = json!({ "result": "Growth", "terms": [{ "label": "Reach" }, { "label": "Retention" }], "operator": "/" });
  let html = render(VisualizationType::Equation, Locale::En, Some(&data));
  assert!(html.contains(r#"<span class="equation-op">×</span>"#));
  assert!(!html.contains(r#"<span class="equation-op">/</span>"#));
}

#[test]
fn checklist_fallback_is_unchecked() {
  let html = render(VisualizationType::Checklist, Locale::En, None);
  assert_eq!(html.matches("☐").count(), 3);
  assert!(!html.contains("☑"));
}

#[test]
fn scorecard_without_scores_shows_dash() {
  let html = render(VisualizationType::Scorecard, Locale::En, None);
  assert_eq!(html.matches("—").count(), 3);
  let data = json!({ "metrics": [{ "label": "Clarity", "score": 7.5 }], "overallScore": 8 });
  let html = render(VisualizationType::Scorecard, Locale::Zh, Some(&data));
  assert!(html.contains("7.5/10"));
  assert!(html.contains("总分"));
}

#[test]
fn case_study_uses_deep_dive_fields() {
  let principles = principles();
  let mut input = DiagramInput::new(Locale::En, "Opportunity Sizing Framework", &principles);
  input.company = Some("Stripe");
  input.problem = Some("Teams chase small bets");
  input.example = Some("Doubled activation");
  let html = DiagramRegistry::new().render(Some(VisualizationType::CaseStudy), &input).into_string();
  assert!(html.contains("Stripe"));
  assert!(html.contains("Teams chase small bets"));
  assert!(html.contains("Define the problem; Size the opportunity; Ship a thin slice"));
  assert!(html.contains("Doubled activation"));
}

#[test]
fn text_is_escaped() {
  let principles = vec!["<script>alert(1)</script>".to_string()];
  let input = DiagramInput::new(Locale::En, "X", &principles);
  let html = DiagramRegistry::new().render(Some(VisualizationType::Checklist), &input).into_string();
  assert!(!html.contains("<script>"));
  assert!(html.contains("&lt;script&gt;"));
}
