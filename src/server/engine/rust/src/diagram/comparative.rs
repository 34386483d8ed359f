/* src/server/engine/rust/src/diagram/comparative.rs */

use insighthunt_core::VisualizationType;
use maud::{Markup, html};
use serde::Deserialize;

use super::{Diagram, DiagramInput, truncate_chars};

const QUADRANT_COLORS: [&str; 4] = ["green", "blue", "yellow", "red"];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatrixData {
  quadrants: Vec<Labeled>,
  #[serde(default)]
  x_axis_label: Option<String>,
  #[serde(default)]
  y_axis_label: Option<String>,
}

#[derive(Deserialize)]
struct Labeled {
  label: String,
  #[serde(default)]
  description: Option<String>,
}

pub(super) struct Matrix2x2;

impl Diagram for Matrix2x2 {
  fn kind(&self) -> VisualizationType {
    VisualizationType::Matrix2x2
  }

  fn title_key(&self) -> &'static str {
    "diagram.matrix"
  }

  fn icon(&self) -> &'static str {
    "▦"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let (cells, x_axis, y_axis) = match input.data_as::<MatrixData>() {
      Some(d) if !d.quadrants.is_empty() => {
        (d.quadrants.into_iter().map(|q| (q.label, q.description)).collect(), d.x_axis_label, d.y_axis_label)
      }
      _ => {
        let cells: Vec<(String, Option<String>)> =
          input.steps().iter().map(|s| (s.chars().take(15).collect(), None)).collect();
        (cells, None, None)
      }
    };
    let quadrant = input.t("diagram.quadrant");
    let label_at = |i: usize| -> (String, Option<String>) {
      match cells.get(i) {
        Some((label, desc)) if !label.is_empty() => (label.clone(), desc.clone()),
        _ => (format!("{quadrant} {}", i + 1), None),
      }
    };
    html! {
      div class="matrix" {
        div class="matrix-axis matrix-axis-y" {
          (y_axis.unwrap_or_else(|| "Y".to_string()))
        }
        div class="matrix-grid" {
          @for row in 0..2 {
            div class="matrix-row" {
              span class="matrix-tick" { (input.t(if row == 0 { "diagram.high" } else { "diagram.low" })) }
              @for col in 0..2 {
                @let i = row * 2 + col;
                @let (label, desc) = label_at(i);
                div class={ "matrix-cell matrix-" (QUADRANT_COLORS[i]) } {
                  strong { (label) }
                  @if let Some(d) = desc { p { (d) } }
                }
              }
            }
          }
          div class="matrix-row matrix-ticks" {
            span class="matrix-tick" {}
            span class="matrix-tick" { (input.t("diagram.low")) }
            span class="matrix-tick" { (input.t("diagram.high")) }
          }
        }
        div class="matrix-axis matrix-axis-x" {
          (x_axis.unwrap_or_else(|| "X".to_string()))
        }
      }
    }
  }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DosDontsData {
  #[serde(default)]
  do_items: Vec<TextItem>,
  #[serde(default)]
  dont_items: Vec<TextItem>,
}

#[derive(Deserialize)]
struct TextItem {
  text: String,
}

pub(super) struct DosDonts;

impl Diagram for DosDonts {
  fn kind(&self) -> VisualizationType {
    VisualizationType::DosDonts
  }

  fn title_key(&self) -> &'static str {
    "diagram.dos_donts"
  }

  fn icon(&self) -> &'static str {
    "⚖️"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let (dos, donts) = match input.data_as::<DosDontsData>() {
      Some(d) if !d.do_items.is_empty() || !d.dont_items.is_empty() => (
        d.do_items.into_iter().map(|i| i.text).collect(),
        d.dont_items.into_iter().map(|i| i.text).collect(),
      ),
      _ => {
        let dos: Vec<String> = match input.when_to_use {
          Some(w) => vec![w.to_string()],
          None => input.steps().iter().map(|s| (*s).to_string()).collect(),
        };
        let donts: Vec<String> = input.common_mistakes.map(str::to_string).into_iter().collect();
        (dos, donts)
      }
    };
    html! {
      div class="dos-donts" {
        div class="dos" {
          h4 { "✅ " (input.t("diagram.do")) }
          ul { @for item in &dos { li { (item) } } }
        }
        @if !donts.is_empty() {
          div class="donts" {
            h4 { "❌ " (input.t("diagram.dont")) }
            ul { @for item in &donts { li { (item) } } }
          }
        }
      }
    }
  }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpectrumData {
  left_label: String,
  right_label: String,
  #[serde(default)]
  points: Vec<SpectrumPoint>,
}

#[derive(Deserialize)]
struct SpectrumPoint {
  label: String,
  position: f64,
  #[serde(default)]
  description: Option<String>,
}

pub(super) struct Spectrum;

impl Diagram for Spectrum {
  fn kind(&self) -> VisualizationType {
    VisualizationType::Spectrum
  }

  fn title_key(&self) -> &'static str {
    "diagram.spectrum"
  }

  fn icon(&self) -> &'static str {
    "↔️"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let data = input.data_as::<SpectrumData>().unwrap_or_else(|| spectrum_from_steps(input));
    html! {
      div class="spectrum" {
        div class="spectrum-ends" {
          span class="spectrum-left" { (data.left_label) }
          span class="spectrum-right" { (data.right_label) }
        }
        div class="spectrum-bar" {
          @for p in &data.points {
            @let pos = p.position.clamp(0.0, 100.0);
            span class="spectrum-point" style={ "left:" (format!("{pos:.0}")) "%" } title=[p.description.as_deref()] {
              (p.label)
            }
          }
        }
      }
    }
  }
}

/// First and last steps become the ends; the rest spread evenly between.
fn spectrum_from_steps(input: &DiagramInput<'_>) -> SpectrumData {
  let steps = input.steps();
  if steps.len() < 2 {
    return SpectrumData {
      left_label: input.t("diagram.low").to_string(),
      right_label: input.t("diagram.high").to_string(),
      points: steps
        .iter()
        .map(|s| SpectrumPoint { label: truncate_chars(s, 20), position: 50.0, description: None })
        .collect(),
    };
  }
  let middle = &steps[1..steps.len() - 1];
  let gap = 100.0 / (middle.len() + 1) as f64;
  SpectrumData {
    left_label: truncate_chars(steps[0], 20),
    right_label: truncate_chars(steps[steps.len() - 1], 20),
    points: middle
      .iter()
      .enumerate()
      .map(|(i, s)| SpectrumPoint {
        label: truncate_chars(s, 20),
        position: gap * (i + 1) as f64,
        description: None,
      })
      .collect(),
  }
}

#[derive(Deserialize)]
struct BeforeAfterData {
  before: Side,
  after: Side,
}

#[derive(Deserialize)]
struct Side {
  #[serde(default)]
  title: Option<String>,
  #[serde(default)]
  points: Vec<String>,
}

pub(super) struct BeforeAfter;

impl Diagram for BeforeAfter {
  fn kind(&self) -> VisualizationType {
    VisualizationType::BeforeAfter
  }

  fn title_key(&self) -> &'static str {
    "diagram.before_after"
  }

  fn icon(&self) -> &'static str {
    "🔁"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let data = input.data_as::<BeforeAfterData>().unwrap_or_else(|| BeforeAfterData {
      before: Side { title: None, points: input.common_mistakes.map(str::to_string).into_iter().collect() },
      after: Side { title: None, points: input.steps().iter().map(|s| (*s).to_string()).collect() },
    });
    html! {
      div class="before-after" {
        (side(&data.before, input.t("diagram.before"), "before"))
        span class="before-after-arrow" { "→" }
        (side(&data.after, input.t("diagram.after"), "after"))
      }
    }
  }
}

fn side(side: &Side, default_title: &str, class: &str) -> Markup {
  html! {
    div class={ "side side-" (class) } {
      h4 { (side.title.as_deref().unwrap_or(default_title)) }
      ul { @for p in &side.points { li { (p) } } }
    }
  }
}
