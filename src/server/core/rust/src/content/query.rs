/* src/server/core/rust/src/content/query.rs */

use serde::{Deserialize, Serialize};

use super::ContentStore;
use super::types::{Category, Methodology};

const TOP_GUESTS: usize = 10;
const CATEGORY_TOP: usize = 3;

/// Listing filters, shared by the list page and the JSON API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MethodologyQuery {
  #[serde(default)]
  pub q: Option<String>,
  /// Category slug; `all` or an unknown slug disables the filter.
  #[serde(default)]
  pub category: Option<String>,
  /// Guest slug.
  #[serde(default)]
  pub guest: Option<String>,
}

impl MethodologyQuery {
  pub fn search(q: &str) -> Self {
    Self { q: Some(q.to_string()), ..Self::default() }
  }

  pub fn term(&self) -> Option<&str> {
    self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
  }

  pub fn category(&self) -> Option<Category> {
    self.category.as_deref().and_then(|c| Category::from_slug(c.trim()))
  }

  pub fn guest(&self) -> Option<&str> {
    self.guest.as_deref().map(str::trim).filter(|g| !g.is_empty())
  }

  pub fn is_empty(&self) -> bool {
    self.term().is_none() && self.category().is_none() && self.guest().is_none()
  }

  pub fn matches(&self, m: &Methodology) -> bool {
    if self.category().is_some_and(|c| c != m.category) {
      return false;
    }
    if self.guest().is_some_and(|g| g != m.guest_slug) {
      return false;
    }
    match self.term() {
      Some(term) => matches_term(m, term),
      None => true,
    }
  }
}

/// Case-insensitive over the English fields; the Chinese name and summary
/// are matched as raw substrings.
fn matches_term(m: &Methodology, term: &str) -> bool {
  let needle = term.to_lowercase();
  let hit = |s: &str| s.to_lowercase().contains(&needle);
  hit(m.name.base().as_str())
    || hit(m.summary.base().as_str())
    || hit(m.guest_name.as_str())
    || m.guest_company.as_deref().is_some_and(hit)
    || m.problem_it_solves.as_ref().is_some_and(|p| hit(p.base().as_str()))
    || m.principles.base().iter().any(|p| hit(p.as_str()))
    || m.tags.iter().any(|t| hit(t.as_str()))
    || m.name.zh().is_some_and(|zh| zh.contains(term))
    || m.summary.zh().is_some_and(|zh| zh.contains(term))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCount {
  pub slug: String,
  pub name: String,
  pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStats {
  pub total_methodologies: usize,
  pub total_guests: usize,
  pub total_episodes: u32,
  pub translated_methodologies: usize,
  /// Every category, including empty ones, in declaration order.
  pub by_category: Vec<(Category, usize)>,
  pub top_guests: Vec<GuestCount>,
}

/// One row of the category overview.
#[derive(Debug, Clone)]
pub struct CategorySummary<'a> {
  pub category: Category,
  pub count: usize,
  /// Rounded share of all methodologies.
  pub percentage: u32,
  pub top: Vec<&'a Methodology>,
}

impl ContentStore {
  /// Filtered listing, most upvoted first. Ties keep file order.
  pub fn search(&self, query: &MethodologyQuery) -> Vec<&Methodology> {
    let mut hits: Vec<&Methodology> =
      self.methodologies().iter().filter(|m| query.matches(m)).collect();
    hits.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
    hits
  }

  pub fn category_count(&self, category: Category) -> usize {
    self.methodologies().iter().filter(|m| m.category == category).count()
  }

  pub fn stats(&self) -> ContentStats {
    let by_category = Category::ALL.iter().map(|&c| (c, self.category_count(c))).collect();
    let mut top_guests: Vec<GuestCount> = self
      .guests()
      .iter()
      .map(|g| GuestCount { slug: g.slug.clone(), name: g.name.clone(), count: g.methodology_ids.len() })
      .collect();
    top_guests.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    top_guests.truncate(TOP_GUESTS);
    ContentStats {
      total_methodologies: self.methodologies().len(),
      total_guests: self.guests().len(),
      total_episodes: self.total_episodes(),
      translated_methodologies: self
        .methodologies()
        .iter()
        .filter(|m| m.name.has_translation() || m.summary.has_translation())
        .count(),
      by_category,
      top_guests,
    }
  }

  /// Categories by methodology count, largest first.
  pub fn category_overview(&self) -> Vec<CategorySummary<'_>> {
    let total = self.methodologies().len();
    let mut rows: Vec<CategorySummary<'_>> = Category::ALL
      .iter()
      .map(|&category| {
        let mut members: Vec<&Methodology> =
          self.methodologies().iter().filter(|m| m.category == category).collect();
        let count = members.len();
        members.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
        members.truncate(CATEGORY_TOP);
        CategorySummary { category, count, percentage: percentage(count, total), top: members }
      })
      .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
  }
}

fn percentage(part: usize, total: usize) -> u32 {
  if total == 0 {
    return 0;
  }
  ((part as f64 / total as f64) * 100.0).round() as u32
}
