/* src/server/core/rust/src/content/view.rs */

//! Per-request resolved views. Every translatable field is picked through
//! [`fallback_field`](crate::fallback::fallback_field) for one locale; views
//! borrow from the store and are rebuilt on every render.

use serde::Serialize;

use super::types::{Category, Guest, Methodology, VisualizationType};
use crate::fallback::Localized;
use crate::locale::Locale;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodologyView<'a> {
  pub id: &'a str,
  pub locale: Locale,
  pub name: &'a str,
  pub guest_slug: &'a str,
  pub guest_name: &'a str,
  pub guest_company: Option<&'a str>,
  pub category: Category,
  pub category_label: &'static str,
  pub tags: &'a [String],
  pub summary: &'a str,
  pub principles: &'a [String],
  pub quote: Option<&'a str>,
  pub problem_it_solves: Option<&'a str>,
  pub when_to_use: Option<&'a str>,
  pub common_mistakes: Option<&'a str>,
  pub real_world_example: Option<&'a str>,
  pub upvotes: u32,
  pub visualization_type: Option<VisualizationType>,
  pub visualization_data: Option<&'a serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestView<'a> {
  pub slug: &'a str,
  pub locale: Locale,
  pub name: &'a str,
  pub title: Option<&'a str>,
  pub company: Option<&'a str>,
  pub background: Option<&'a str>,
  pub episode_number: u32,
  pub episode_date: Option<&'a str>,
  pub episode_summary: Option<&'a str>,
  pub key_takeaways: &'a [String],
  pub youtube_url: Option<&'a str>,
  pub spotify_url: Option<&'a str>,
  pub methodology_count: usize,
}

fn opt<'a>(field: &'a Option<Localized<String>>, locale: Locale) -> Option<&'a str> {
  field.as_ref().map(|f| f.text(locale))
}

impl Methodology {
  pub fn view(&self, locale: Locale) -> MethodologyView<'_> {
    MethodologyView {
      id: &self.id,
      locale,
      name: self.name.text(locale),
      guest_slug: &self.guest_slug,
      guest_name: &self.guest_name,
      guest_company: self.guest_company.as_deref(),
      category: self.category,
      category_label: self.category.label(locale),
      tags: &self.tags,
      summary: self.summary.text(locale),
      principles: self.principles.items(locale),
      quote: opt(&self.quote, locale),
      problem_it_solves: opt(&self.problem_it_solves, locale),
      when_to_use: opt(&self.when_to_use, locale),
      common_mistakes: opt(&self.common_mistakes, locale),
      real_world_example: opt(&self.real_world_example, locale),
      upvotes: self.upvotes,
      visualization_type: self.visualization,
      visualization_data: self.visualization_data.as_ref(),
    }
  }
}

impl Guest {
  pub fn view(&self, locale: Locale) -> GuestView<'_> {
    GuestView {
      slug: &self.slug,
      locale,
      name: &self.name,
      title: opt(&self.title, locale),
      company: self.company.as_deref(),
      background: opt(&self.background, locale),
      episode_number: self.episode_number,
      episode_date: self.episode_date.as_deref(),
      episode_summary: opt(&self.episode_summary, locale),
      key_takeaways: self.key_takeaways.items(locale),
      youtube_url: self.youtube_url.as_deref(),
      spotify_url: self.spotify_url.as_deref(),
      methodology_count: self.methodology_ids.len(),
    }
  }
}
