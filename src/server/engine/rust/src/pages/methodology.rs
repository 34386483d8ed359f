/* src/server/engine/rust/src/pages/methodology.rs */

use insighthunt_core::{Category, InsightError, Locale, MethodologyQuery, localized_path};
use maud::{Markup, html};
use serde_json::json;

use super::{Pages, category_badge, methodology_card, section_heading, tag_list};
use crate::diagram::DiagramInput;
use crate::head::HeadMeta;
use crate::layout::{PageContext, document};

impl Pages {
  /// Listing with search and filters, most upvoted first.
  pub fn methodologies(&self, locale: Locale, query: &MethodologyQuery) -> String {
    let path = localized_path("/methodologies", locale);
    let filters = filter_query(query);
    let ctx = self.ctx(locale, &path).with_query(filters.as_deref());
    let store = self.store();
    let hits = store.search(query);
    let head = HeadMeta::new(ctx.title(ctx.t("list.title")), ctx.t("home.subtitle"), &path);
    let body = html! {
      section class="page-header" {
        h1 { (ctx.t("list.title")) }
        p { (store.methodologies().len()) " " (ctx.t("common.count_suffix")) }
      }
      (filter_form(self, &ctx, query))
      p class="result-count" { (hits.len()) " " (ctx.t("list.results")) }
      @if hits.is_empty() {
        div class="empty" {
          p { (ctx.t("list.empty")) }
          a href=(path) { (ctx.t("list.clear")) }
        }
      } @else {
        div class="card-list" {
          @for m in &hits { (methodology_card(&ctx, &m.view(locale))) }
        }
      }
    };
    document(&ctx, &head, body).into_string()
  }

  pub fn methodology(&self, locale: Locale, id: &str) -> Result<String, InsightError> {
    let store = self.store();
    let record = store
      .methodology(id)
      .ok_or_else(|| InsightError::not_found(format!("methodology {id} not found")))?;
    let path = localized_path(&format!("/methodologies/{id}"), locale);
    let ctx = self.ctx(locale, &path);
    let m = record.view(locale);
    let guest = store.guest(m.guest_slug).map(|g| g.view(locale));

    let description = m.problem_it_solves.unwrap_or(m.summary);
    let head = HeadMeta::new(ctx.title(m.name), description, &path)
      .article()
      .keywords(m.tags.to_vec())
      .json_ld(json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": m.name,
        "description": m.summary,
        "inLanguage": locale.html_lang(),
        "author": { "@type": "Person", "name": m.guest_name },
        "publisher": { "@type": "Organization", "name": self.site.name },
        "url": self.site.absolute(&path),
        "keywords": m.tags.join(", "),
      }));

    let mut input = DiagramInput::new(locale, m.name, m.principles).with_data(m.visualization_data);
    input.company = m.guest_company;
    input.problem = m.problem_it_solves;
    input.when_to_use = m.when_to_use;
    input.common_mistakes = m.common_mistakes;
    input.example = m.real_world_example;
    input.quote = m.quote;

    let body = html! {
      nav class="breadcrumb" {
        a href=(ctx.href("/methodologies")) { "← " (ctx.t("methodology.back")) }
      }
      section class="methodology-hero" {
        div class="hero-meta" {
          (category_badge(&ctx, m.category))
          span class="by" {
            (ctx.t("common.by")) " "
            a href=(ctx.href(&format!("/guests/{}", m.guest_slug))) { (m.guest_name) }
          }
          span class="upvotes" { "▲ " (m.upvotes) }
        }
        h1 { (m.name) }
        @if let Some(g) = &guest {
          @if let Some(background) = g.background {
            p class="guest-context" {
              strong { (g.name) }
              @if let Some(title) = g.title { ", " (title) }
              @if let Some(company) = g.company { " @ " (company) }
              ". " (background)
            }
          }
          @if let Some(summary) = g.episode_summary {
            div class="episode-context" {
              h3 { (ctx.t("methodology.episode_context")) }
              p { (summary) }
            }
          }
        }
      }
      @if let Some(problem) = m.problem_it_solves {
        (text_section("🎯", ctx.t("methodology.problem"), problem))
      }
      (text_section("📖", ctx.t("methodology.overview"), m.summary))
      section class="visualization" {
        (section_heading("📊", ctx.t("methodology.visualization")))
        (self.diagrams.render(m.visualization_type, &input))
      }
      section class="principles" {
        (section_heading("⚡", ctx.t("methodology.principles")))
        ol class="principle-list" {
          @for p in m.principles { li { (p) } }
        }
      }
      @if m.when_to_use.is_some() || m.common_mistakes.is_some() {
        div class="grid grid-2 usage" {
          @if let Some(when) = m.when_to_use {
            section class="when-to-use" {
              h3 { "✅ " (ctx.t("methodology.when_to_use")) }
              p { (when) }
            }
          }
          @if let Some(mistakes) = m.common_mistakes {
            section class="mistakes" {
              h3 { "⚠️ " (ctx.t("methodology.mistakes")) }
              p { (mistakes) }
            }
          }
        }
      }
      @if let Some(example) = m.real_world_example {
        (text_section("💼", ctx.t("methodology.example"), example))
      }
      @if let Some(quote) = m.quote {
        section class="quote" {
          blockquote {
            p { (quote) }
            footer { "— " (m.guest_name) }
          }
        }
      }
      section class="keywords" {
        h3 { (ctx.t("methodology.keywords")) }
        (tag_list(m.tags))
      }
      nav class="page-footer-nav" {
        a href=(ctx.href("/methodologies")) { "← " (ctx.t("methodology.back")) }
        a class="button" href=(ctx.href(&format!("/guests/{}", m.guest_slug))) {
          (ctx.t("methodology.view_profile")) " →"
        }
      }
    };
    Ok(document(&ctx, &head, body).into_string())
  }
}

fn text_section(icon: &str, title: &str, text: &str) -> Markup {
  html! {
    section class="text-section" {
      (section_heading(icon, title))
      p { (text) }
    }
  }
}

/// GET form over `q`, `category` and `guest`; current values stay selected.
/// Active filters as a query string, for links that must keep them.
fn filter_query(query: &MethodologyQuery) -> Option<String> {
  let mut out = url::form_urlencoded::Serializer::new(String::new());
  let mut any = false;
  let category = query.category().map(Category::slug);
  for (key, value) in [("q", query.term()), ("category", category), ("guest", query.guest())] {
    if let Some(value) = value {
      out.append_pair(key, value);
      any = true;
    }
  }
  any.then(|| out.finish())
}

fn filter_form(pages: &Pages, ctx: &PageContext<'_>, query: &MethodologyQuery) -> Markup {
  let selected_category = query.category();
  let selected_guest = query.guest();
  html! {
    form class="filters" action=(ctx.path) method="get" {
      input type="search" name="q" value=(query.term().unwrap_or_default())
        placeholder=(ctx.t("home.search_placeholder"));
      select name="category" aria-label=(ctx.t("list.category")) {
        option value="all" { (ctx.t("list.all_categories")) }
        @for c in Category::ALL {
          option value=(c.slug()) selected[selected_category == Some(c)] {
            (c.emoji()) " " (c.label(ctx.locale))
          }
        }
      }
      select name="guest" aria-label=(ctx.t("list.guest")) {
        option value="" { (ctx.t("list.all_guests")) }
        @for g in pages.store().guests_by_name() {
          option value=(g.slug) selected[selected_guest == Some(g.slug.as_str())] { (g.name) }
        }
      }
      button type="submit" { (ctx.t("list.search")) }
    }
  }
}
