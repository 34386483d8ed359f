/* src/server/core/rust/src/content/types.rs */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fallback::Localized;
use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
  ProductStrategy,
  GrowthMetrics,
  TeamCulture,
  UserResearch,
  Execution,
  CareerLeadership,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::ProductStrategy,
    Category::GrowthMetrics,
    Category::TeamCulture,
    Category::UserResearch,
    Category::Execution,
    Category::CareerLeadership,
  ];

  pub fn slug(self) -> &'static str {
    match self {
      Self::ProductStrategy => "product-strategy",
      Self::GrowthMetrics => "growth-metrics",
      Self::TeamCulture => "team-culture",
      Self::UserResearch => "user-research",
      Self::Execution => "execution",
      Self::CareerLeadership => "career-leadership",
    }
  }

  pub fn from_slug(slug: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|c| c.slug() == slug)
  }

  /// Unknown categories in the content file are filed under product strategy.
  pub fn from_slug_or_default(slug: &str) -> Self {
    Self::from_slug(slug).unwrap_or(Self::ProductStrategy)
  }

  pub fn label(self, locale: Locale) -> &'static str {
    match (self, locale) {
      (Self::ProductStrategy, Locale::En) => "Product Strategy",
      (Self::ProductStrategy, Locale::Zh) => "产品战略",
      (Self::GrowthMetrics, Locale::En) => "Growth & Metrics",
      (Self::GrowthMetrics, Locale::Zh) => "增长指标",
      (Self::TeamCulture, Locale::En) => "Team & Culture",
      (Self::TeamCulture, Locale::Zh) => "团队文化",
      (Self::UserResearch, Locale::En) => "User Research",
      (Self::UserResearch, Locale::Zh) => "用户研究",
      (Self::Execution, Locale::En) => "Execution",
      (Self::Execution, Locale::Zh) => "执行落地",
      (Self::CareerLeadership, Locale::En) => "Career & Leadership",
      (Self::CareerLeadership, Locale::Zh) => "职业领导力",
    }
  }

  pub fn emoji(self) -> &'static str {
    match self {
      Self::ProductStrategy => "🎯",
      Self::GrowthMetrics => "📈",
      Self::TeamCulture => "👥",
      Self::UserResearch => "🔍",
      Self::Execution => "⚡",
      Self::CareerLeadership => "🚀",
    }
  }

  /// Chart color (hex) for the stats widgets.
  pub fn color(self) -> &'static str {
    match self {
      Self::ProductStrategy => "#8b5cf6",
      Self::GrowthMetrics => "#f97316",
      Self::TeamCulture => "#ec4899",
      Self::UserResearch => "#3b82f6",
      Self::Execution => "#ef4444",
      Self::CareerLeadership => "#a78bfa",
    }
  }

  /// Tags appended to every methodology in this category.
  pub(crate) fn seed_tags(self) -> &'static [&'static str] {
    match self {
      Self::ProductStrategy => &["strategy", "product"],
      Self::GrowthMetrics => &["growth", "metrics", "data"],
      Self::TeamCulture => &["team", "culture", "leadership"],
      Self::UserResearch => &["research", "users", "discovery"],
      Self::Execution => &["execution", "process", "delivery"],
      Self::CareerLeadership => &["career", "leadership", "growth"],
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.slug())
  }
}

/// Diagram family selected per methodology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualizationType {
  StepFlow,
  Timeline,
  Funnel,
  Cycle,
  Matrix2x2,
  DosDonts,
  Spectrum,
  BeforeAfter,
  MindMap,
  TreeDiagram,
  Pyramid,
  Onion,
  Equation,
  Checklist,
  Scorecard,
  CaseStudy,
}

impl VisualizationType {
  pub const ALL: [VisualizationType; 16] = [
    Self::StepFlow,
    Self::Timeline,
    Self::Funnel,
    Self::Cycle,
    Self::Matrix2x2,
    Self::DosDonts,
    Self::Spectrum,
    Self::BeforeAfter,
    Self::MindMap,
    Self::TreeDiagram,
    Self::Pyramid,
    Self::Onion,
    Self::Equation,
    Self::Checklist,
    Self::Scorecard,
    Self::CaseStudy,
  ];

  pub fn tag(self) -> &'static str {
    match self {
      Self::StepFlow => "StepFlow",
      Self::Timeline => "Timeline",
      Self::Funnel => "Funnel",
      Self::Cycle => "Cycle",
      Self::Matrix2x2 => "Matrix2x2",
      Self::DosDonts => "DosDonts",
      Self::Spectrum => "Spectrum",
      Self::BeforeAfter => "BeforeAfter",
      Self::MindMap => "MindMap",
      Self::TreeDiagram => "TreeDiagram",
      Self::Pyramid => "Pyramid",
      Self::Onion => "Onion",
      Self::Equation => "Equation",
      Self::Checklist => "Checklist",
      Self::Scorecard => "Scorecard",
      Self::CaseStudy => "CaseStudy",
    }
  }

  pub fn from_tag(tag: &str) -> Option<Self> {
    let tag = tag.trim();
    Self::ALL.into_iter().find(|v| v.tag() == tag)
  }
}

/// One extracted methodology. Translatable fields are [`Localized`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Methodology {
  pub id: String,
  pub name: Localized<String>,
  pub guest_slug: String,
  pub guest_name: String,
  pub guest_company: Option<String>,
  pub category: Category,
  pub tags: Vec<String>,
  pub summary: Localized<String>,
  pub principles: Localized<Vec<String>>,
  pub quote: Option<Localized<String>>,
  pub problem_it_solves: Option<Localized<String>>,
  pub when_to_use: Option<Localized<String>>,
  pub common_mistakes: Option<Localized<String>>,
  pub real_world_example: Option<Localized<String>>,
  pub upvotes: u32,
  pub visualization: Option<VisualizationType>,
  pub visualization_data: Option<serde_json::Value>,
}

/// A podcast guest; one guest per episode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
  pub slug: String,
  pub name: String,
  pub title: Option<Localized<String>>,
  pub company: Option<String>,
  pub background: Option<Localized<String>>,
  pub episode_number: u32,
  pub episode_date: Option<String>,
  pub episode_summary: Option<Localized<String>>,
  pub key_takeaways: Localized<Vec<String>>,
  pub youtube_url: Option<String>,
  pub spotify_url: Option<String>,
  pub methodology_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unknown_category_defaults() {
    assert_eq!(Category::from_slug_or_default("wellness"), Category::ProductStrategy);
    assert_eq!(Category::from_slug_or_default("execution"), Category::Execution);
  }

  #[test]
  fn category_serde_uses_slugs() {
    let json = serde_json::to_string(&Category::GrowthMetrics).unwrap();
    assert_eq!(json, "\"growth-metrics\"");
  }

  #[test]
  fn visualization_tag_lookup() {
    assert_eq!(VisualizationType::from_tag(" Matrix2x2 "), Some(VisualizationType::Matrix2x2));
    assert_eq!(VisualizationType::from_tag("matrix2x2"), None);
    assert_eq!(VisualizationType::from_tag("Sankey"), None);
  }
}
