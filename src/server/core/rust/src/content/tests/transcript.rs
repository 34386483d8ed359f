/* src/server/core/rust/src/content/tests/transcript.rs */

use std::fs;

use crate::Locale;
use crate::content::TranscriptStore;

fn write(dir: &std::path::Path, name: &str, body: &str) {
  fs::write(dir.join(name), body).unwrap();
}

fn store() -> (tempfile::TempDir, TranscriptStore) {
  let dir = tempfile::tempdir().unwrap();
  write(dir.path(), "Shreyas Doshi.json", r#"{"guest": "Shreyas Doshi", "en": "one two three", "zh": "一二三"}"#);
  write(dir.path(), "april-episode.json", r#"{"guest": "April Dunford", "en": "positioning talk"}"#);
  write(dir.path(), "Brian and Joe.json", r#"{"guest": "", "en": "joint episode"}"#);
  write(dir.path(), "translate_log.json", r#"{"guest": "Log", "en": "ignored"}"#);
  write(dir.path(), "broken.json", "{");
  write(dir.path(), "notes.txt", "not a transcript");
  let store = TranscriptStore::open(dir.path()).unwrap();
  (dir, store)
}

#[test]
fn skips_logs_and_malformed_files() {
  let (_dir, store) = store();
  assert_eq!(store.len(), 3);
}

#[test]
fn exact_stem_match() {
  let (_dir, store) = store();
  let t = store.find("Shreyas Doshi").unwrap();
  assert_eq!(t.text(Locale::Zh), "一二三");
  assert_eq!(t.length(Locale::En), 3);
  assert_eq!(t.length(Locale::Zh), 3);
}

#[test]
fn guest_field_match() {
  let (_dir, store) = store();
  assert_eq!(store.find("april dunford").unwrap().stem, "april-episode");
}

#[test]
fn multi_guest_match_uses_first_names() {
  let (_dir, store) = store();
  assert_eq!(store.find("Brian Chesky & Joe Gebbia").unwrap().stem, "Brian and Joe");
}

#[test]
fn english_fallback_and_miss() {
  let (_dir, store) = store();
  let t = store.find("April Dunford").unwrap();
  assert_eq!(t.text(Locale::Zh), "positioning talk");
  assert!(store.find("Nobody Here").is_none());
  assert!(store.find("  ").is_none());
}

#[test]
fn missing_directory_is_empty() {
  let dir = tempfile::tempdir().unwrap();
  let store = TranscriptStore::open(&dir.path().join("absent")).unwrap();
  assert!(store.is_empty());
}
