/* src/server/core/rust/src/content/tests/loader.rs */

use super::FIXTURE;
use crate::Locale;
use crate::content::{Category, ContentError, VisualizationType, generate_tags, parse_content, slugify};

#[test]
fn loads_valid_records_and_quarantines_the_rest() {
  let (store, report) = parse_content(FIXTURE).unwrap();
  assert_eq!(report.episodes, 2);
  assert_eq!(report.methodologies, 4);
  assert_eq!(store.guests().len(), 2);
  assert_eq!(report.quarantined.len(), 2);
  assert!(report.quarantined.iter().any(|q| q.location == "episode #3"));
  assert!(report.quarantined.iter().any(|q| q.location == "episode #2 methodology #2"));
  assert!(!report.is_clean());
}

#[test]
fn ids_are_sequential_over_published_records() {
  let (store, _) = parse_content(FIXTURE).unwrap();
  let ids: Vec<&str> = store.methodologies().iter().map(|m| m.id.as_str()).collect();
  assert_eq!(ids, ["m-1", "m-2", "m-3", "m-4"]);
  assert_eq!(store.guest("lenny-rachitsky").unwrap().methodology_ids, ["m-3", "m-4"]);
}

#[test]
fn episode_numbers_default_to_file_position() {
  let (store, _) = parse_content(FIXTURE).unwrap();
  assert_eq!(store.guest("shreyas-doshi").unwrap().episode_number, 1);
  assert_eq!(store.guest("lenny-rachitsky").unwrap().episode_number, 7);
  assert_eq!(store.total_episodes(), 2);
}

#[test]
fn blank_translation_is_normalized_away() {
  let (store, _) = parse_content(FIXTURE).unwrap();
  let lno = store.methodology("m-1").unwrap();
  let quote = lno.quote.as_ref().unwrap();
  assert!(!quote.has_translation());
  assert_eq!(quote.text(Locale::Zh), "Not all tasks are equal.");
  assert_eq!(lno.name.text(Locale::Zh), "LNO 框架");
}

#[test]
fn orphan_translation_is_dropped() {
  let (store, report) = parse_content(FIXTURE).unwrap();
  assert_eq!(report.orphan_translations, 1);
  assert!(store.methodology("m-2").unwrap().when_to_use.is_none());
}

#[test]
fn orphan_list_translations_are_dropped() {
  let json = r#"[{
    "guest": {"name": "Ada"},
    "keyTakeaways": [],
    "keyTakeaways_zh": ["孤立要点"],
    "methodologies": [
      {"name": "Loose Ends", "summary": "S", "principles_zh": ["孤立原则"]},
      {"name": "Kept", "summary": "S", "principles": [" One "], "principles_zh": ["一"]}
    ]
  }]"#;
  let (store, report) = parse_content(json).unwrap();
  assert_eq!(report.orphan_translations, 2);
  let guest = store.guest("ada").unwrap();
  assert!(guest.key_takeaways.zh().is_none());
  assert!(guest.key_takeaways.get(Locale::Zh).is_empty());
  let loose = store.methodology("m-1").unwrap();
  assert!(loose.principles.zh().is_none());
  assert!(loose.principles.get(Locale::Zh).is_empty());
  let kept = store.methodology("m-2").unwrap();
  assert_eq!(kept.principles.get(Locale::En), &["One".to_string()]);
  assert_eq!(kept.principles.get(Locale::Zh), &["一".to_string()]);
}

#[test]
fn unknown_category_seeds_no_tags() {
  let json = r#"[{"guest": {"name": "Ada"}, "methodologies": [
    {"name": "Pricing Ladder", "summary": "S", "category": "pricing"},
    {"name": "Pricing Ladder", "summary": "S"}
  ]}]"#;
  let (store, report) = parse_content(json).unwrap();
  assert_eq!(report.unknown_categories, 1);
  let unknown = store.methodology("m-1").unwrap();
  assert_eq!(unknown.category, Category::ProductStrategy);
  assert_eq!(unknown.tags, ["pricing", "ladder"]);
  assert_eq!(store.methodology("m-2").unwrap().tags, ["pricing", "ladder"]);
  assert_eq!(generate_tags("Pricing Ladder", None), ["pricing", "ladder"]);
}

#[test]
fn unknown_category_and_visualization_are_counted() {
  let (store, report) = parse_content(FIXTURE).unwrap();
  assert_eq!(report.unknown_categories, 1);
  assert_eq!(report.unknown_visualizations, 1);
  assert_eq!(store.methodology("m-4").unwrap().category, Category::ProductStrategy);
  assert_eq!(store.methodology("m-3").unwrap().visualization, None);
  assert_eq!(store.methodology("m-1").unwrap().visualization, Some(VisualizationType::Matrix2x2));
}

#[test]
fn duplicate_slug_keeps_first() {
  let json = r#"[
    {"filename": "Jane Doe", "guest": {"name": "Jane Doe"}, "methodologies": []},
    {"filename": "jane  doe", "guest": {"name": "Jane D."}, "methodologies": []}
  ]"#;
  let (store, report) = parse_content(json).unwrap();
  assert_eq!(store.guests().len(), 1);
  assert_eq!(store.guest("jane-doe").unwrap().name, "Jane Doe");
  assert_eq!(report.quarantined[0].reason, "duplicate guest slug");
}

#[test]
fn wrapped_file_carries_episode_total() {
  let json = r#"{"totalEpisodes": 297, "episodes": [
    {"filename": "A", "guest": {"name": "A"}, "methodologies": []}
  ]}"#;
  let (store, _) = parse_content(json).unwrap();
  assert_eq!(store.total_episodes(), 297);
}

#[test]
fn empty_and_malformed_files_fail() {
  assert!(matches!(parse_content("[]"), Err(ContentError::Empty)));
  assert!(matches!(parse_content("{not json"), Err(ContentError::Json(_))));
}

#[test]
fn load_from_disk() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("insights.json");
  std::fs::write(&path, FIXTURE).unwrap();
  let (store, _) = crate::content::load_content(&path).unwrap();
  assert_eq!(store.methodologies().len(), 4);

  let missing = crate::content::load_content(&dir.path().join("nope.json"));
  assert!(matches!(missing, Err(ContentError::Io { .. })));
}

#[test]
fn slugs_from_filenames() {
  assert_eq!(slugify("Shreyas Doshi"), "shreyas-doshi");
  assert_eq!(slugify("  Ada   Lovelace 2.0 "), "ada-lovelace-20");
  assert_eq!(slugify("Brian Chesky & Co."), "brian-chesky--co");
}

#[test]
fn tags_from_name_and_category() {
  assert_eq!(generate_tags("LNO Framework", Some(Category::Execution)), ["execution", "process"]);
  assert_eq!(
    generate_tags("Jobs Theory Growth Loops Playbook Retention", Some(Category::GrowthMetrics)),
    ["theory", "growth", "loops", "playbook", "retention"]
  );
  assert_eq!(
    generate_tags("Strategy Pyramid", Some(Category::ProductStrategy)),
    ["pyramid", "strategy", "product"]
  );
}
