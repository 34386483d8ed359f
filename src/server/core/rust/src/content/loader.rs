/* src/server/core/rust/src/content/loader.rs */

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use super::ContentStore;
use super::types::{Category, Guest, Methodology, VisualizationType};
use crate::fallback::{Blank, Localized};

const TAG_STOPWORDS: [&str; 4] = ["framework", "strategy", "model", "system"];
const MAX_TAGS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
  #[error("failed to read {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("invalid content JSON: {0}")]
  Json(#[from] serde_json::Error),
  #[error("content file holds no usable episodes")]
  Empty,
}

/// A record the loader refused to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quarantined {
  pub location: String,
  pub reason: String,
}

/// Summary of one load, printed by `insighthunt check`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
  pub episodes: usize,
  pub methodologies: usize,
  pub translated_methodologies: usize,
  pub quarantined: Vec<Quarantined>,
  /// `_zh` siblings with no base value, dropped.
  pub orphan_translations: usize,
  pub unknown_categories: usize,
  pub unknown_visualizations: usize,
}

impl LoadReport {
  pub fn is_clean(&self) -> bool {
    self.quarantined.is_empty() && self.orphan_translations == 0
  }

  fn quarantine(&mut self, location: String, reason: &str) {
    tracing::warn!(%location, reason, "quarantined content record");
    self.quarantined.push(Quarantined { location, reason: reason.to_string() });
  }
}

// -- raw file shape --

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFile {
  Episodes(Vec<RawEpisode>),
  Wrapped {
    #[serde(default, rename = "totalEpisodes")]
    total_episodes: Option<u32>,
    episodes: Vec<RawEpisode>,
  },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEpisode {
  #[serde(default)]
  filename: Option<String>,
  #[serde(default)]
  guest: Option<RawGuest>,
  #[serde(default)]
  episode_number: Option<u32>,
  #[serde(default)]
  episode_date: Option<String>,
  #[serde(default)]
  episode_summary: Option<String>,
  #[serde(default, rename = "episodeSummary_zh")]
  episode_summary_zh: Option<String>,
  #[serde(default)]
  key_takeaways: Vec<String>,
  #[serde(default, rename = "keyTakeaways_zh")]
  key_takeaways_zh: Option<Vec<String>>,
  #[serde(default)]
  youtube_url: Option<String>,
  #[serde(default)]
  spotify_url: Option<String>,
  #[serde(default)]
  methodologies: Vec<RawMethodology>,
}

#[derive(Deserialize)]
struct RawGuest {
  #[serde(default)]
  name: Option<String>,
  #[serde(default)]
  title: Option<String>,
  #[serde(default)]
  title_zh: Option<String>,
  #[serde(default)]
  company: Option<String>,
  #[serde(default)]
  background: Option<String>,
  #[serde(default)]
  background_zh: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMethodology {
  #[serde(default)]
  name: Option<String>,
  #[serde(default, rename = "name_zh")]
  name_zh: Option<String>,
  #[serde(default)]
  category: Option<String>,
  #[serde(default)]
  summary: Option<String>,
  #[serde(default, rename = "summary_zh")]
  summary_zh: Option<String>,
  #[serde(default)]
  principles: Vec<String>,
  #[serde(default, rename = "principles_zh")]
  principles_zh: Option<Vec<String>>,
  #[serde(default)]
  quote: Option<String>,
  #[serde(default, rename = "quote_zh")]
  quote_zh: Option<String>,
  #[serde(default)]
  problem_it_solves: Option<String>,
  #[serde(default, rename = "problemItSolves_zh")]
  problem_it_solves_zh: Option<String>,
  #[serde(default)]
  when_to_use: Option<String>,
  #[serde(default, rename = "whenToUse_zh")]
  when_to_use_zh: Option<String>,
  #[serde(default)]
  common_mistakes: Option<String>,
  #[serde(default, rename = "commonMistakes_zh")]
  common_mistakes_zh: Option<String>,
  #[serde(default)]
  real_world_example: Option<String>,
  #[serde(default, rename = "realWorldExample_zh")]
  real_world_example_zh: Option<String>,
  #[serde(default)]
  upvotes: u32,
  #[serde(default)]
  visualization_type: Option<String>,
  #[serde(default)]
  visualization_data: Option<Value>,
}

// -- public entry points --

/// Read and validate the content file at `path`.
pub fn load_content(path: &Path) -> Result<(ContentStore, LoadReport), ContentError> {
  let text = std::fs::read_to_string(path)
    .map_err(|source| ContentError::Io { path: path.to_path_buf(), source })?;
  let (store, report) = parse_content(&text)?;
  tracing::info!(
    path = %path.display(),
    episodes = report.episodes,
    methodologies = report.methodologies,
    quarantined = report.quarantined.len(),
    "content loaded"
  );
  Ok((store, report))
}

/// Validate content JSON. Records missing a mandatory base field are
/// quarantined rather than failing the whole load.
pub fn parse_content(json: &str) -> Result<(ContentStore, LoadReport), ContentError> {
  let (declared_total, episodes) = match serde_json::from_str::<RawFile>(json)? {
    RawFile::Episodes(episodes) => (None, episodes),
    RawFile::Wrapped { total_episodes, episodes } => (total_episodes, episodes),
  };

  let mut report = LoadReport::default();
  let mut guests = Vec::new();
  let mut methodologies = Vec::new();
  let mut slugs = HashSet::new();

  for (index, raw) in episodes.into_iter().enumerate() {
    let location = format!("episode #{}", index + 1);
    let Some(guest_raw) = raw.guest.as_ref() else {
      report.quarantine(location, "missing guest");
      continue;
    };
    let Some(guest_name) = present(guest_raw.name.as_deref()) else {
      report.quarantine(location, "missing guest name");
      continue;
    };
    let slug_source = raw.filename.as_deref().filter(|f| !f.is_blank()).unwrap_or(guest_name);
    let slug = slugify(slug_source);
    if slug.is_empty() {
      report.quarantine(location, "filename yields an empty slug");
      continue;
    }
    if !slugs.insert(slug.clone()) {
      report.quarantine(location, "duplicate guest slug");
      continue;
    }

    let episode_number = raw.episode_number.unwrap_or(index as u32 + 1);
    let mut guest = Guest {
      slug: slug.clone(),
      name: guest_name.to_string(),
      title: localized_text(&mut report, &location, "title", &guest_raw.title, &guest_raw.title_zh),
      company: present(guest_raw.company.as_deref()).map(str::to_string),
      background: localized_text(
        &mut report,
        &location,
        "background",
        &guest_raw.background,
        &guest_raw.background_zh,
      ),
      episode_number,
      episode_date: present(raw.episode_date.as_deref()).map(str::to_string),
      episode_summary: localized_text(
        &mut report,
        &location,
        "episodeSummary",
        &raw.episode_summary,
        &raw.episode_summary_zh,
      ),
      key_takeaways: localized_list(
        &mut report,
        &location,
        "keyTakeaways",
        raw.key_takeaways,
        raw.key_takeaways_zh,
      ),
      youtube_url: present(raw.youtube_url.as_deref()).map(str::to_string),
      spotify_url: present(raw.spotify_url.as_deref()).map(str::to_string),
      methodology_ids: Vec::new(),
    };

    for (m_index, m) in raw.methodologies.into_iter().enumerate() {
      let m_location = format!("{location} methodology #{}", m_index + 1);
      let (Some(name), Some(summary)) = (present(m.name.as_deref()), present(m.summary.as_deref()))
      else {
        report.quarantine(m_location, "missing name or summary");
        continue;
      };
      let id = format!("m-{}", methodologies.len() + 1);
      let recognized = m.category.as_deref().map(str::trim).and_then(|raw_category| {
        let found = Category::from_slug(raw_category);
        if found.is_none() {
          report.unknown_categories += 1;
          tracing::debug!(location = %m_location, category = raw_category, "unknown category");
        }
        found
      });
      let category = recognized.unwrap_or(Category::ProductStrategy);
      let visualization = m.visualization_type.as_deref().and_then(|tag| {
        let found = VisualizationType::from_tag(tag);
        if found.is_none() {
          report.unknown_visualizations += 1;
        }
        found
      });

      let methodology = Methodology {
        id: id.clone(),
        name: Localized::new(name.to_string(), m.name_zh),
        guest_slug: slug.clone(),
        guest_name: guest.name.clone(),
        guest_company: guest.company.clone(),
        category,
        tags: generate_tags(name, recognized),
        summary: Localized::new(summary.to_string(), m.summary_zh),
        principles: localized_list(&mut report, &m_location, "principles", m.principles, m.principles_zh),
        quote: localized_text(&mut report, &m_location, "quote", &m.quote, &m.quote_zh),
        problem_it_solves: localized_text(
          &mut report,
          &m_location,
          "problemItSolves",
          &m.problem_it_solves,
          &m.problem_it_solves_zh,
        ),
        when_to_use: localized_text(
          &mut report,
          &m_location,
          "whenToUse",
          &m.when_to_use,
          &m.when_to_use_zh,
        ),
        common_mistakes: localized_text(
          &mut report,
          &m_location,
          "commonMistakes",
          &m.common_mistakes,
          &m.common_mistakes_zh,
        ),
        real_world_example: localized_text(
          &mut report,
          &m_location,
          "realWorldExample",
          &m.real_world_example,
          &m.real_world_example_zh,
        ),
        upvotes: m.upvotes,
        visualization,
        visualization_data: m.visualization_data.filter(|v| !v.is_null()),
      };
      if methodology.name.has_translation() || methodology.summary.has_translation() {
        report.translated_methodologies += 1;
      }
      guest.methodology_ids.push(id);
      methodologies.push(methodology);
    }

    guests.push(guest);
  }

  if guests.is_empty() {
    return Err(ContentError::Empty);
  }
  report.episodes = guests.len();
  report.methodologies = methodologies.len();
  let total_episodes = declared_total.unwrap_or(guests.len() as u32);
  Ok((ContentStore::new(guests, methodologies, total_episodes), report))
}

// -- normalization helpers --

fn present(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|v| !v.is_empty())
}

fn clean_list(items: Vec<String>) -> Vec<String> {
  items.into_iter().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
}

/// Optional translatable text. An orphan `_zh` (no base) is dropped.
fn localized_text(
  report: &mut LoadReport,
  location: &str,
  field: &str,
  base: &Option<String>,
  zh: &Option<String>,
) -> Option<Localized<String>> {
  let zh = present(zh.as_deref()).map(str::to_string);
  match present(base.as_deref()) {
    Some(base) => Some(Localized::new(base.to_string(), zh)),
    None => {
      if zh.is_some() {
        report.orphan_translations += 1;
        tracing::warn!(location, field, "dropped translation without base value");
      }
      None
    }
  }
}

/// Translatable list. A `_zh` list over an empty base is dropped the same
/// way as orphan text.
fn localized_list(
  report: &mut LoadReport,
  location: &str,
  field: &str,
  base: Vec<String>,
  zh: Option<Vec<String>>,
) -> Localized<Vec<String>> {
  let base = clean_list(base);
  let zh = zh.map(clean_list).filter(|zh| !zh.is_empty());
  if base.is_empty() && zh.is_some() {
    report.orphan_translations += 1;
    tracing::warn!(location, field, "dropped translation without base value");
    return Localized::base_only(base);
  }
  Localized::new(base, zh)
}

/// Guest slug from an episode filename: lowercase, whitespace runs to `-`,
/// anything outside `[a-z0-9-]` removed.
pub fn slugify(name: &str) -> String {
  let mut slug = String::with_capacity(name.len());
  let mut in_space = false;
  for ch in name.trim().chars().flat_map(char::to_lowercase) {
    if ch.is_whitespace() {
      if !in_space {
        slug.push('-');
      }
      in_space = true;
      continue;
    }
    in_space = false;
    if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
      slug.push(ch);
    }
  }
  slug
}

/// Long words from the name, then the first two seed tags of a recognized
/// category. An unknown category seeds nothing.
pub fn generate_tags(name: &str, category: Option<Category>) -> Vec<String> {
  let mut tags: Vec<String> = Vec::new();
  let words = name
    .split_whitespace()
    .map(|w| w.to_lowercase())
    .filter(|w| w.chars().count() > 4 && !TAG_STOPWORDS.contains(&w.as_str()));
  let seeds = category.map(Category::seed_tags).unwrap_or_default();
  let seeds = seeds.iter().take(2).map(|s| (*s).to_string());
  for tag in words.chain(seeds) {
    if !tags.contains(&tag) {
      tags.push(tag);
    }
  }
  tags.truncate(MAX_TAGS);
  tags
}
