/* src/server/engine/rust/src/pages/mod.rs */

//! Server-rendered pages. Each page exists in both trees; the locale passed
//! in is always the path-derived one.

mod categories;
mod home;
mod methodology;
mod people;
mod skills;
mod stats;

use std::sync::Arc;

use insighthunt_core::{
  Category, ContentStore, GuestView, InsightError, Locale, MethodologyView, SiteInfo,
  TranscriptStore, localized_path,
};
use maud::{Markup, html};

use crate::diagram::DiagramRegistry;
use crate::head::HeadMeta;
use crate::layout::{Mounts, PageContext, document};

pub use skills::{SKILL_PACKS, SkillPack, total_skills};

const CARD_PRINCIPLES: usize = 3;

/// Renders every page over one shared content store.
pub struct Pages {
  store: Arc<ContentStore>,
  transcripts: Arc<TranscriptStore>,
  site: SiteInfo,
  mounts: Mounts,
  diagrams: DiagramRegistry,
}

impl Pages {
  pub fn new(store: Arc<ContentStore>, transcripts: Arc<TranscriptStore>, site: SiteInfo) -> Self {
    Self { store, transcripts, site, mounts: Mounts::default(), diagrams: DiagramRegistry::new() }
  }

  /// Use the router's API and asset prefixes in rendered links.
  pub fn with_mounts(mut self, mounts: Mounts) -> Self {
    self.mounts = mounts;
    self
  }

  pub fn store(&self) -> &ContentStore {
    &self.store
  }

  pub fn site(&self) -> &SiteInfo {
    &self.site
  }

  fn ctx<'a>(&'a self, locale: Locale, path: &'a str) -> PageContext<'a> {
    PageContext::new(locale, path, &self.site, &self.mounts)
  }

  /// Localized 404 body for any unknown route or identifier.
  pub fn not_found(&self, locale: Locale) -> String {
    let path = localized_path("/", locale);
    let ctx = self.ctx(locale, &path);
    let head = HeadMeta::new(ctx.title(ctx.t("not_found.title")), ctx.t("not_found.body"), &path);
    let body = html! {
      section class="not-found" {
        div class="not-found-icon" { "🔍" }
        h1 { (ctx.t("not_found.title")) }
        p { (ctx.t("not_found.body")) }
        a class="button" href=(ctx.href("/")) { (ctx.t("not_found.home")) }
      }
    };
    document(&ctx, &head, body).into_string()
  }

  /// Render an error as a page: not-found maps to the 404 view, anything
  /// else to a bare message.
  pub fn error_page(&self, locale: Locale, err: &InsightError) -> String {
    if err.is_not_found() {
      return self.not_found(locale);
    }
    let path = localized_path("/", locale);
    let ctx = self.ctx(locale, &path);
    let head = HeadMeta::new(ctx.title(err.code()), err.message(), &path);
    document(&ctx, &head, html! { section class="error" { h1 { (err.code()) } p { (err.message()) } } })
      .into_string()
  }
}

pub(crate) fn category_badge(ctx: &PageContext<'_>, category: Category) -> Markup {
  html! {
    a class={ "category-badge category-" (category.slug()) }
      href={ (ctx.href("/methodologies")) "?category=" (category.slug()) } {
      (category.emoji()) " " (category.label(ctx.locale))
    }
  }
}

pub(crate) fn section_heading(icon: &str, title: &str) -> Markup {
  html! {
    h2 class="section-heading" {
      span class="section-icon" { (icon) }
      " " (title)
    }
  }
}

/// Listing card: name, guest, summary, first principles, quote and tags.
pub(crate) fn methodology_card(ctx: &PageContext<'_>, m: &MethodologyView<'_>) -> Markup {
  let more = m.principles.len().saturating_sub(CARD_PRINCIPLES);
  html! {
    article class="methodology-card" {
      div class="upvotes" title=(ctx.t("common.upvotes")) {
        span { "▲" }
        span { (m.upvotes) }
      }
      div class="card-body" {
        header {
          h3 {
            a href=(ctx.href(&format!("/methodologies/{}", m.id))) { (m.name) }
          }
          p class="card-guest" {
            (ctx.t("common.by")) " "
            a href=(ctx.href(&format!("/guests/{}", m.guest_slug))) { (m.guest_name) }
          }
          (category_badge(ctx, m.category))
        }
        p class="card-summary" { (m.summary) }
        @if !m.principles.is_empty() {
          ol class="card-principles" {
            @for p in m.principles.iter().take(CARD_PRINCIPLES) { li { (p) } }
          }
          @if more > 0 {
            p class="card-more" { "+" (more) " " (ctx.t("common.more")) }
          }
        }
        @if let Some(q) = m.quote {
          blockquote class="card-quote" { "\u{201c}" (q) "\u{201d}" }
        }
        (tag_list(m.tags))
      }
    }
  }
}

pub(crate) fn tag_list(tags: &[String]) -> Markup {
  html! {
    @if !tags.is_empty() {
      ul class="tags" {
        @for tag in tags { li { "#" (tag) } }
      }
    }
  }
}

/// Episode card used on the home page and the episodes listing.
pub(crate) fn episode_card(ctx: &PageContext<'_>, g: &GuestView<'_>) -> Markup {
  html! {
    a class="episode-card" href=(ctx.href(&format!("/episodes/{}", g.slug))) {
      div class="episode-number" { (ctx.t("episode.number")) " #" (g.episode_number) }
      h3 { (g.name) }
      @if let Some(title) = g.title { p class="guest-title" { (title) } }
      @if let Some(company) = g.company { p class="guest-company" { (company) } }
      p class="episode-count" { (g.methodology_count) " " (ctx.t("common.count_suffix")) }
    }
  }
}

/// Initial shown in place of a portrait.
pub(crate) fn avatar(name: &str) -> Markup {
  let initial: String = name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default();
  html! { div class="avatar" { (initial) } }
}
