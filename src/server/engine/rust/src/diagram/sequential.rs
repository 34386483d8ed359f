/* src/server/engine/rust/src/diagram/sequential.rs */

use std::f64::consts::PI;

use insighthunt_core::VisualizationType;
use maud::{Markup, html};
use serde::Deserialize;

use super::{Diagram, DiagramInput, step_prefix, truncate_chars};

pub(super) struct StepFlow;

impl Diagram for StepFlow {
  fn kind(&self) -> VisualizationType {
    VisualizationType::StepFlow
  }

  fn title_key(&self) -> &'static str {
    "diagram.step_flow"
  }

  fn icon(&self) -> &'static str {
    "🔀"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    html! {
      ol class="step-flow" {
        @for (i, principle) in input.principles.iter().enumerate() {
          @let (number, text) = numbered(principle, i + 1);
          li class="step" {
            span class="step-number" { (number) }
            span class="step-text" { (text) }
          }
        }
      }
    }
  }
}

/// Explicit step number from the prefix when present, else the position.
fn numbered(principle: &str, position: usize) -> (String, &str) {
  match step_prefix().captures(principle) {
    Some(c) => match (c.get(1), c.get(2)) {
      (Some(n), Some(text)) => (n.as_str().to_string(), text.as_str()),
      _ => (position.to_string(), principle),
    },
    None => (position.to_string(), principle),
  }
}

#[derive(Deserialize)]
struct TimelineData {
  events: Vec<TimelineEvent>,
}

#[derive(Deserialize)]
struct TimelineEvent {
  #[serde(default)]
  phase: Option<String>,
  title: String,
  #[serde(default)]
  description: Option<String>,
}

pub(super) struct Timeline;

impl Diagram for Timeline {
  fn kind(&self) -> VisualizationType {
    VisualizationType::Timeline
  }

  fn title_key(&self) -> &'static str {
    "diagram.timeline"
  }

  fn icon(&self) -> &'static str {
    "📅"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let events = match input.data_as::<TimelineData>() {
      Some(d) if !d.events.is_empty() => d.events,
      _ => input
        .steps()
        .iter()
        .enumerate()
        .map(|(i, s)| TimelineEvent {
          phase: Some((i + 1).to_string()),
          title: truncate_chars(s, 40),
          description: None,
        })
        .collect(),
    };
    html! {
      ol class="timeline" {
        @for (i, e) in events.iter().enumerate() {
          li class="timeline-event" {
            span class="timeline-phase" { (e.phase.clone().unwrap_or_else(|| (i + 1).to_string())) }
            div class="timeline-body" {
              strong { (e.title) }
              @if let Some(d) = &e.description { p { (d) } }
            }
          }
        }
      }
    }
  }
}

#[derive(Deserialize)]
struct FunnelData {
  stages: Vec<FunnelStage>,
}

#[derive(Deserialize)]
struct FunnelStage {
  label: String,
  #[serde(default)]
  value: Option<String>,
}

pub(super) struct Funnel;

impl Diagram for Funnel {
  fn kind(&self) -> VisualizationType {
    VisualizationType::Funnel
  }

  fn title_key(&self) -> &'static str {
    "diagram.funnel"
  }

  fn icon(&self) -> &'static str {
    "🔻"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let stages = match input.data_as::<FunnelData>() {
      Some(d) if !d.stages.is_empty() => d.stages,
      _ => input
        .steps()
        .iter()
        .map(|s| FunnelStage { label: truncate_chars(s, 30), value: None })
        .collect(),
    };
    let n = stages.len().max(1);
    html! {
      div class="funnel" {
        @for (i, stage) in stages.iter().enumerate() {
          @let width = 100 - (i * 50 / n);
          div class="funnel-stage" style={ "width:" (width) "%" } {
            span class="funnel-label" { (stage.label) }
            @if let Some(v) = &stage.value { span class="funnel-value" { (v) } }
          }
        }
      }
    }
  }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CycleData {
  #[serde(default)]
  center_label: Option<String>,
  steps: Vec<CycleStep>,
}

#[derive(Deserialize)]
struct CycleStep {
  label: String,
}

pub(super) struct Cycle;

const CYCLE_CENTER: f64 = 160.0;
const CYCLE_RADIUS: f64 = 120.0;

impl Diagram for Cycle {
  fn kind(&self) -> VisualizationType {
    VisualizationType::Cycle
  }

  fn title_key(&self) -> &'static str {
    "diagram.cycle"
  }

  fn icon(&self) -> &'static str {
    "🔄"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let (center, labels) = match input.data_as::<CycleData>() {
      Some(d) if !d.steps.is_empty() => {
        (d.center_label, d.steps.into_iter().map(|s| s.label).collect::<Vec<_>>())
      }
      _ => (None, input.steps().iter().map(|s| truncate_chars(s, 20)).collect()),
    };
    let center = center.unwrap_or_else(|| input.t("diagram.cycle_center").to_string());
    let n = labels.len().max(1) as f64;
    html! {
      svg class="cycle" viewBox="0 0 320 320" role="img" {
        circle cx="160" cy="160" r="120" fill="none" stroke="#e5e7eb" stroke-width="3" stroke-dasharray="10,5" {}
        circle class="cycle-center" cx="160" cy="160" r="48" {}
        text x="160" y="165" text-anchor="middle" class="cycle-center-label" { (center) }
        @for (i, label) in labels.iter().enumerate() {
          @let angle = 2.0 * PI * i as f64 / n - PI / 2.0;
          @let x = CYCLE_CENTER + CYCLE_RADIUS * angle.cos();
          @let y = CYCLE_CENTER + CYCLE_RADIUS * angle.sin();
          g class="cycle-step" {
            circle cx=(format!("{x:.1}")) cy=(format!("{y:.1}")) r="22" {}
            text x=(format!("{x:.1}")) y=(format!("{:.1}", y + 4.0)) text-anchor="middle" { (i + 1) }
            title { (label) }
          }
        }
      }
      ol class="cycle-legend" {
        @for label in &labels { li { (label) } }
      }
    }
  }
}
