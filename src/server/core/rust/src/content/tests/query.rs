/* src/server/core/rust/src/content/tests/query.rs */

use super::fixture_store;
use crate::content::{Category, MethodologyQuery};

fn ids(hits: &[&crate::content::Methodology]) -> Vec<String> {
  hits.iter().map(|m| m.id.clone()).collect()
}

#[test]
fn empty_query_lists_everything_by_upvotes() {
  let store = fixture_store();
  let hits = store.search(&MethodologyQuery::default());
  assert_eq!(ids(&hits), ["m-3", "m-1", "m-2", "m-4"]);
}

#[test]
fn search_is_case_insensitive_on_english_fields() {
  let store = fixture_store();
  assert_eq!(ids(&store.search(&MethodologyQuery::search("lno"))), ["m-1"]);
  // guest company
  assert_eq!(ids(&store.search(&MethodologyQuery::search("STRIPE"))), ["m-1", "m-2"]);
  // principle text
  assert_eq!(ids(&store.search(&MethodologyQuery::search("assume failure"))), ["m-2"]);
}

#[test]
fn search_matches_chinese_name_and_summary() {
  let store = fixture_store();
  assert_eq!(ids(&store.search(&MethodologyQuery::search("框架"))), ["m-1"]);
  assert_eq!(ids(&store.search(&MethodologyQuery::search("杠杆"))), ["m-1"]);
}

#[test]
fn category_and_guest_filters() {
  let store = fixture_store();
  let query = MethodologyQuery { category: Some("execution".to_string()), ..Default::default() };
  assert_eq!(ids(&store.search(&query)), ["m-1"]);

  let query = MethodologyQuery { category: Some("all".to_string()), ..Default::default() };
  assert!(query.is_empty());
  assert_eq!(store.search(&query).len(), 4);

  let query = MethodologyQuery { guest: Some("lenny-rachitsky".to_string()), ..Default::default() };
  assert_eq!(ids(&store.search(&query)), ["m-3", "m-4"]);
}

#[test]
fn featured_and_latest() {
  let store = fixture_store();
  assert_eq!(ids(&store.featured(2)), ["m-3", "m-1"]);
  let latest: Vec<&str> = store.latest_guests(3).iter().map(|g| g.slug.as_str()).collect();
  assert_eq!(latest, ["lenny-rachitsky", "shreyas-doshi"]);
}

#[test]
fn stats_cover_every_category() {
  let stats = fixture_store().stats();
  assert_eq!(stats.total_methodologies, 4);
  assert_eq!(stats.total_guests, 2);
  assert_eq!(stats.translated_methodologies, 1);
  assert_eq!(stats.by_category.len(), Category::ALL.len());
  assert!(stats.by_category.contains(&(Category::ProductStrategy, 2)));
  assert!(stats.by_category.contains(&(Category::TeamCulture, 0)));
  assert_eq!(stats.top_guests[0].count, 2);
}

#[test]
fn category_overview_sorted_by_count() {
  let store = fixture_store();
  let rows = store.category_overview();
  assert_eq!(rows[0].category, Category::ProductStrategy);
  assert_eq!(rows[0].count, 2);
  assert_eq!(rows[0].percentage, 50);
  assert_eq!(rows[0].top[0].id, "m-2");
  assert_eq!(rows.last().unwrap().count, 0);
}

#[test]
fn guest_categories_in_first_seen_order() {
  let store = fixture_store();
  assert_eq!(
    store.categories_for_guest("shreyas-doshi"),
    [Category::Execution, Category::ProductStrategy]
  );
  assert!(store.categories_for_guest("nobody").is_empty());
}
