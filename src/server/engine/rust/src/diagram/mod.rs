/* src/server/engine/rust/src/diagram/mod.rs */

//! Methodology diagrams.
//!
//! Each [`VisualizationType`] maps to one [`Diagram`] renderer. Renderers read
//! structured `visualizationData` when it parses, otherwise they derive their
//! content from the resolved principles.

mod comparative;
mod formula;
mod hierarchical;
mod narrative;
mod sequential;

use std::collections::HashMap;
use std::sync::OnceLock;

use insighthunt_core::{Locale, VisualizationType};
use maud::{Markup, html};
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::ui::t;

/// Resolved inputs for one diagram. All text is already in the request locale.
#[derive(Debug, Clone, Copy)]
pub struct DiagramInput<'a> {
  pub locale: Locale,
  pub name: &'a str,
  pub principles: &'a [String],
  pub data: Option<&'a serde_json::Value>,
  pub company: Option<&'a str>,
  pub problem: Option<&'a str>,
  pub when_to_use: Option<&'a str>,
  pub common_mistakes: Option<&'a str>,
  pub example: Option<&'a str>,
  pub quote: Option<&'a str>,
}

impl<'a> DiagramInput<'a> {
  pub fn new(locale: Locale, name: &'a str, principles: &'a [String]) -> Self {
    Self {
      locale,
      name,
      principles,
      data: None,
      company: None,
      problem: None,
      when_to_use: None,
      common_mistakes: None,
      example: None,
      quote: None,
    }
  }

  pub fn with_data(mut self, data: Option<&'a serde_json::Value>) -> Self {
    self.data = data;
    self
  }

  /// Principles with their `Step N:` / `N.` prefixes removed.
  pub fn steps(&self) -> Vec<&'a str> {
    self.principles.iter().map(|p| strip_step_prefix(p)).collect()
  }

  /// Structured data as `T`, or `None` when absent or shaped differently.
  pub fn data_as<T: DeserializeOwned>(&self) -> Option<T> {
    let value = self.data?;
    match serde_json::from_value(value.clone()) {
      Ok(data) => Some(data),
      Err(e) => {
        tracing::debug!(methodology = self.name, error = %e, "visualization data ignored, deriving from principles");
        None
      }
    }
  }

  pub fn t(&self, key: &'a str) -> &'a str {
    t(key, self.locale)
  }
}

pub trait Diagram: Send + Sync {
  fn kind(&self) -> VisualizationType;

  /// UI string key of the localized title.
  fn title_key(&self) -> &'static str;

  fn icon(&self) -> &'static str;

  fn render(&self, input: &DiagramInput<'_>) -> Markup;
}

/// Renderer lookup keyed by visualization type.
pub struct DiagramRegistry {
  renderers: HashMap<VisualizationType, Box<dyn Diagram>>,
}

impl Default for DiagramRegistry {
  fn default() -> Self {
    Self::new()
  }
}

impl DiagramRegistry {
  pub fn new() -> Self {
    let all: Vec<Box<dyn Diagram>> = vec![
      Box::new(sequential::StepFlow),
      Box::new(sequential::Timeline),
      Box::new(sequential::Funnel),
      Box::new(sequential::Cycle),
      Box::new(comparative::Matrix2x2),
      Box::new(comparative::DosDonts),
      Box::new(comparative::Spectrum),
      Box::new(comparative::BeforeAfter),
      Box::new(hierarchical::MindMap),
      Box::new(hierarchical::TreeDiagram),
      Box::new(hierarchical::Pyramid),
      Box::new(hierarchical::Onion),
      Box::new(formula::Equation),
      Box::new(formula::Checklist),
      Box::new(formula::Scorecard),
      Box::new(narrative::CaseStudy),
    ];
    let renderers = all.into_iter().map(|d| (d.kind(), d)).collect();
    Self { renderers }
  }

  pub fn len(&self) -> usize {
    self.renderers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.renderers.is_empty()
  }

  /// Renderer for `kind`; missing kinds use the mind map.
  pub fn get(&self, kind: Option<VisualizationType>) -> &dyn Diagram {
    let kind = kind.unwrap_or(VisualizationType::MindMap);
    match self.renderers.get(&kind) {
      Some(d) => d.as_ref(),
      None => &hierarchical::MindMap,
    }
  }

  /// Titled figure for one methodology.
  pub fn render(&self, kind: Option<VisualizationType>, input: &DiagramInput<'_>) -> Markup {
    let diagram = self.get(kind);
    html! {
      figure class={ "diagram diagram-" (diagram.kind().tag()) } {
        figcaption class="diagram-title" {
          span class="diagram-icon" { (diagram.icon()) }
          " " (input.t(diagram.title_key()))
        }
        (diagram.render(input))
      }
    }
  }
}

fn step_prefix() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"(?i)^(?:Step\s*)?(\d+)[:.]\s*(.+)$").unwrap())
}

/// `"Step 2: Ship it"` and `"2. Ship it"` both become `"Ship it"`.
pub fn strip_step_prefix(text: &str) -> &str {
  match step_prefix().captures(text).and_then(|c| c.get(2)) {
    Some(m) => m.as_str(),
    None => text,
  }
}

/// Clip to `max` characters, ending in `...` when clipped.
pub fn truncate_chars(text: &str, max: usize) -> String {
  if text.chars().count() <= max {
    return text.to_string();
  }
  let keep = max.saturating_sub(3);
  let mut out: String = text.chars().take(keep).collect();
  out.push_str("...");
  out
}

#[cfg(test)]
mod tests;
