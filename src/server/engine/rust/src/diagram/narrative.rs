/* src/server/engine/rust/src/diagram/narrative.rs */

use insighthunt_core::VisualizationType;
use maud::{Markup, html};
use serde::Deserialize;

use super::{Diagram, DiagramInput};

#[derive(Deserialize)]
struct CaseStudyData {
  #[serde(default)]
  company: Option<String>,
  challenge: String,
  solution: String,
  result: String,
  #[serde(default)]
  quote: Option<String>,
}

pub(super) struct CaseStudy;

impl Diagram for CaseStudy {
  fn kind(&self) -> VisualizationType {
    VisualizationType::CaseStudy
  }

  fn title_key(&self) -> &'static str {
    "diagram.case_study"
  }

  fn icon(&self) -> &'static str {
    "📚"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let data = input.data_as::<CaseStudyData>().unwrap_or_else(|| from_fields(input));
    let rows = [
      ("diagram.challenge", "challenge", &data.challenge),
      ("diagram.solution", "solution", &data.solution),
      ("diagram.result", "result", &data.result),
    ];
    html! {
      article class="case-study" {
        @if let Some(company) = &data.company {
          header class="case-company" { "🏢 " (company) }
        }
        dl {
          @for (key, class, text) in rows {
            @if !text.is_empty() {
              div class={ "case-row case-" (class) } {
                dt { (input.t(key)) }
                dd { (text) }
              }
            }
          }
        }
        @if let Some(q) = &data.quote {
          blockquote { (q) }
        }
      }
    }
  }
}

/// Assemble the story from the deep-dive fields: the problem is the
/// challenge, the principles the solution, the example the result.
fn from_fields(input: &DiagramInput<'_>) -> CaseStudyData {
  CaseStudyData {
    company: input.company.map(str::to_string),
    challenge: input.problem.unwrap_or_default().to_string(),
    solution: input.steps().join("; "),
    result: input.example.unwrap_or_default().to_string(),
    quote: input.quote.map(str::to_string),
  }
}
