/* src/server/core/rust/src/content/transcript.rs */

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ContentError;
use crate::fallback::Localized;
use crate::locale::Locale;

#[derive(Deserialize)]
struct RawTranscript {
  #[serde(default)]
  guest: String,
  en: String,
  #[serde(default)]
  zh: Option<String>,
}

/// Full episode transcript with an optional Chinese translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
  pub stem: String,
  pub guest: String,
  pub text: Localized<String>,
}

impl Transcript {
  pub fn text(&self, locale: Locale) -> &str {
    self.text.text(locale)
  }

  /// Whitespace-separated words for English, characters for Chinese.
  pub fn length(&self, locale: Locale) -> usize {
    let text = self.text(locale);
    match (locale, self.text.has_translation()) {
      (Locale::Zh, true) => text.chars().filter(|c| !c.is_whitespace()).count(),
      _ => text.split_whitespace().count(),
    }
  }
}

/// Transcripts indexed at start-up from a directory of `*.json` files.
#[derive(Debug, Clone, Default)]
pub struct TranscriptStore {
  entries: Vec<Transcript>,
}

impl TranscriptStore {
  /// Scan `dir`. A missing directory yields an empty store; unreadable or
  /// malformed files are skipped with a warning.
  pub fn open(dir: &Path) -> Result<Self, ContentError> {
    if !dir.is_dir() {
      tracing::debug!(dir = %dir.display(), "no transcripts directory");
      return Ok(Self::default());
    }
    let read =
      std::fs::read_dir(dir).map_err(|source| ContentError::Io { path: dir.to_path_buf(), source })?;
    let mut paths: Vec<PathBuf> = read
      .filter_map(Result::ok)
      .map(|e| e.path())
      .filter(|p| is_transcript_file(p))
      .collect();
    paths.sort();

    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
      match read_transcript(&path) {
        Ok(t) => entries.push(t),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping transcript"),
      }
    }
    tracing::info!(dir = %dir.display(), count = entries.len(), "transcripts indexed");
    Ok(Self { entries })
  }

  pub fn from_entries(entries: Vec<Transcript>) -> Self {
    Self { entries }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Find the transcript for a guest. Tries the exact file stem, then the
  /// transcript's `guest` field, then multi-guest names (`A & B`) whose
  /// first names all appear in the file stem.
  pub fn find(&self, guest_name: &str) -> Option<&Transcript> {
    if let Some(t) = self.entries.iter().find(|t| t.stem == guest_name) {
      return Some(t);
    }
    let wanted = guest_name.trim().to_lowercase();
    if wanted.is_empty() {
      return None;
    }
    let first = wanted.split_whitespace().next().unwrap_or_default();
    let parts: Vec<&str> = wanted
      .split(['&', ','])
      .filter_map(|p| p.split_whitespace().next())
      .collect();

    self.entries.iter().find(|t| {
      let guest = t.guest.trim().to_lowercase();
      let stem = t.stem.to_lowercase();
      let by_guest =
        !guest.is_empty() && (guest == wanted || wanted.contains(&guest) || guest.contains(first));
      let by_parts = parts.len() > 1 && parts.iter().all(|p| stem.contains(p));
      by_guest || by_parts
    })
  }
}

fn is_transcript_file(path: &Path) -> bool {
  let is_json = path.extension().is_some_and(|e| e == "json");
  let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
  is_json && !name.contains("log")
}

fn read_transcript(path: &Path) -> Result<Transcript, ContentError> {
  let text = std::fs::read_to_string(path)
    .map_err(|source| ContentError::Io { path: path.to_path_buf(), source })?;
  let raw: RawTranscript = serde_json::from_str(&text)?;
  let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default().to_string();
  Ok(Transcript { stem, guest: raw.guest, text: Localized::new(raw.en, raw.zh) })
}
