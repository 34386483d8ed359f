/* src/server/engine/rust/src/diagram/formula.rs */

use insighthunt_core::VisualizationType;
use maud::{Markup, html};
use serde::Deserialize;

use super::{Diagram, DiagramInput, truncate_chars};

const DEFAULT_MAX_SCORE: f64 = 10.0;

#[derive(Deserialize)]
struct EquationData {
  result: String,
  terms: Vec<Term>,
  #[serde(default)]
  operator: Option<String>,
}

#[derive(Deserialize)]
struct Term {
  label: String,
  #[serde(default)]
  description: Option<String>,
}

pub(super) struct Equation;

impl Diagram for Equation {
  fn kind(&self) -> VisualizationType {
    VisualizationType::Equation
  }

  fn title_key(&self) -> &'static str {
    "diagram.equation"
  }

  fn icon(&self) -> &'static str {
    "🧮"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let data = input.data_as::<EquationData>().unwrap_or_else(|| EquationData {
      result: truncate_chars(input.name, 25),
      terms: input
        .steps()
        .iter()
        .take(4)
        .map(|s| Term { label: truncate_chars(s, 20), description: None })
        .collect(),
      operator: Some("+".to_string()),
    });
    let operator = match data.operator.as_deref() {
      Some(op @ ("+" | "×" | "→")) => op,
      _ => "×",
    };
    html! {
      div class="equation" {
        @for (i, term) in data.terms.iter().enumerate() {
          @if i > 0 { span class="equation-op" { (operator) } }
          span class="equation-term" title=[term.description.as_deref()] { (term.label) }
        }
        span class="equation-op" { "=" }
        span class="equation-result" { (data.result) }
      }
    }
  }
}

#[derive(Deserialize)]
struct ChecklistData {
  items: Vec<CheckItem>,
}

#[derive(Deserialize)]
struct CheckItem {
  text: String,
  #[serde(default)]
  checked: bool,
}

pub(super) struct Checklist;

impl Diagram for Checklist {
  fn kind(&self) -> VisualizationType {
    VisualizationType::Checklist
  }

  fn title_key(&self) -> &'static str {
    "diagram.checklist"
  }

  fn icon(&self) -> &'static str {
    "✅"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let items = match input.data_as::<ChecklistData>() {
      Some(d) if !d.items.is_empty() => d.items,
      _ => input.steps().iter().map(|s| CheckItem { text: (*s).to_string(), checked: false }).collect(),
    };
    html! {
      ul class="checklist" {
        @for item in &items {
          li class=[item.checked.then_some("checked")] {
            span class="check-box" { @if item.checked { "☑" } @else { "☐" } }
            " " (item.text)
          }
        }
      }
    }
  }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScorecardData {
  metrics: Vec<Metric>,
  #[serde(default)]
  overall_score: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Metric {
  label: String,
  #[serde(default)]
  score: Option<f64>,
  #[serde(default)]
  max_score: Option<f64>,
}

pub(super) struct Scorecard;

impl Diagram for Scorecard {
  fn kind(&self) -> VisualizationType {
    VisualizationType::Scorecard
  }

  fn title_key(&self) -> &'static str {
    "diagram.scorecard"
  }

  fn icon(&self) -> &'static str {
    "📋"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let data = match input.data_as::<ScorecardData>() {
      Some(d) if !d.metrics.is_empty() => d,
      _ => ScorecardData {
        metrics: input
          .steps()
          .iter()
          .map(|s| Metric { label: truncate_chars(s, 40), score: None, max_score: None })
          .collect(),
        overall_score: None,
      },
    };
    html! {
      table class="scorecard" {
        tbody {
          @for m in &data.metrics {
            @let max = m.max_score.filter(|v| *v > 0.0).unwrap_or(DEFAULT_MAX_SCORE);
            tr {
              th scope="row" { (m.label) }
              @match m.score {
                Some(score) => {
                  td class="score" { (format_score(score)) "/" (format_score(max)) }
                  td class="score-bar" {
                    span style={ "width:" (format!("{:.0}", (score / max * 100.0).clamp(0.0, 100.0))) "%" } {}
                  }
                },
                None => {
                  td class="score" { "—" }
                  td class="score-bar" {}
                },
              }
            }
          }
        }
        @if let Some(overall) = data.overall_score {
          tfoot {
            tr {
              th scope="row" { (input.t("diagram.overall")) }
              td class="score" colspan="2" { (format_score(overall)) }
            }
          }
        }
      }
    }
  }
}

/// Whole numbers without a decimal point, otherwise one decimal place.
fn format_score(score: f64) -> String {
  if score.fract() == 0.0 { format!("{score:.0}") } else { format!("{score:.1}") }
}
