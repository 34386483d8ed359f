/* src/server/core/rust/src/content.rs */

//! Read-only content store: guests and their methodologies, loaded once at
//! start-up and shared behind an `Arc`.

pub mod loader;
pub mod query;
pub mod transcript;
pub mod types;
pub mod view;

use std::collections::HashMap;

pub use loader::{ContentError, LoadReport, Quarantined, generate_tags, load_content, parse_content, slugify};
pub use query::{CategorySummary, ContentStats, GuestCount, MethodologyQuery};
pub use transcript::{Transcript, TranscriptStore};
pub use types::{Category, Guest, Methodology, VisualizationType};
pub use view::{GuestView, MethodologyView};

#[derive(Debug, Default)]
pub struct ContentStore {
  guests: Vec<Guest>,
  methodologies: Vec<Methodology>,
  by_id: HashMap<String, usize>,
  by_slug: HashMap<String, usize>,
  total_episodes: u32,
}

impl ContentStore {
  pub(crate) fn new(guests: Vec<Guest>, methodologies: Vec<Methodology>, total_episodes: u32) -> Self {
    let by_id = methodologies.iter().enumerate().map(|(i, m)| (m.id.clone(), i)).collect();
    let by_slug = guests.iter().enumerate().map(|(i, g)| (g.slug.clone(), i)).collect();
    Self { guests, methodologies, by_id, by_slug, total_episodes }
  }

  /// Methodologies in file order.
  pub fn methodologies(&self) -> &[Methodology] {
    &self.methodologies
  }

  /// Guests in file order.
  pub fn guests(&self) -> &[Guest] {
    &self.guests
  }

  pub fn methodology(&self, id: &str) -> Option<&Methodology> {
    self.by_id.get(id).map(|&i| &self.methodologies[i])
  }

  pub fn guest(&self, slug: &str) -> Option<&Guest> {
    self.by_slug.get(slug).map(|&i| &self.guests[i])
  }

  /// Episodes processed by the extraction pipeline, which may exceed the
  /// number of guests that yielded methodologies.
  pub fn total_episodes(&self) -> u32 {
    self.total_episodes
  }

  /// Override the declared episode total, e.g. from site configuration.
  pub fn with_total_episodes(mut self, total: u32) -> Self {
    self.total_episodes = total;
    self
  }

  pub fn methodologies_for_guest(&self, slug: &str) -> Vec<&Methodology> {
    match self.guest(slug) {
      Some(guest) => guest.methodology_ids.iter().filter_map(|id| self.methodology(id)).collect(),
      None => Vec::new(),
    }
  }

  /// Distinct categories covered by one guest, in first-seen order.
  pub fn categories_for_guest(&self, slug: &str) -> Vec<Category> {
    let mut seen = Vec::new();
    for m in self.methodologies_for_guest(slug) {
      if !seen.contains(&m.category) {
        seen.push(m.category);
      }
    }
    seen
  }

  /// Most upvoted methodologies.
  pub fn featured(&self, limit: usize) -> Vec<&Methodology> {
    let mut all: Vec<&Methodology> = self.methodologies.iter().collect();
    all.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
    all.truncate(limit);
    all
  }

  /// Guests ordered by episode number, newest first.
  pub fn guests_by_episode(&self) -> Vec<&Guest> {
    let mut all: Vec<&Guest> = self.guests.iter().collect();
    all.sort_by(|a, b| b.episode_number.cmp(&a.episode_number));
    all
  }

  pub fn latest_guests(&self, limit: usize) -> Vec<&Guest> {
    let mut all = self.guests_by_episode();
    all.truncate(limit);
    all
  }

  /// Guests ordered by name, case-insensitively.
  pub fn guests_by_name(&self) -> Vec<&Guest> {
    let mut all: Vec<&Guest> = self.guests.iter().collect();
    all.sort_by_cached_key(|g| g.name.to_lowercase());
    all
  }
}

#[cfg(test)]
mod tests;
