/* src/server/engine/rust/src/pages/people.rs */

//! Guest and episode pages. Every guest is exactly one episode, so both
//! trees read the same records under different routes.

use insighthunt_core::{Guest, GuestView, InsightError, Locale, localized_path};
use maud::{Markup, html};
use serde_json::json;

use super::{Pages, avatar, category_badge, episode_card, methodology_card, section_heading};
use crate::head::HeadMeta;
use crate::layout::{PageContext, document};

impl Pages {
  /// Guests sorted by name, with methodology counts.
  pub fn guests(&self, locale: Locale) -> String {
    let path = localized_path("/guests", locale);
    let ctx = self.ctx(locale, &path);
    let guests = self.store().guests_by_name();
    let head = HeadMeta::new(ctx.title(ctx.t("guests.title")), ctx.t("episodes.subtitle"), &path);
    let body = html! {
      section class="page-header" {
        h1 { (ctx.t("guests.title")) }
        p { (guests.len()) " " (ctx.t("stats.guests")) }
      }
      div class="grid grid-3" {
        @for g in &guests {
          @let v = g.view(locale);
          a class="guest-card" href=(ctx.href(&format!("/guests/{}", v.slug))) {
            (avatar(v.name))
            div {
              h3 { (v.name) }
              @if let Some(title) = v.title { p class="guest-title" { (title) } }
              @if let Some(company) = v.company { p class="guest-company" { (company) } }
              p class="guest-count" { (v.methodology_count) " " (ctx.t("common.count_suffix")) }
            }
          }
        }
      }
    };
    document(&ctx, &head, body).into_string()
  }

  pub fn guest(&self, locale: Locale, slug: &str) -> Result<String, InsightError> {
    let record = self.find_guest(slug)?;
    let path = localized_path(&format!("/guests/{slug}"), locale);
    let ctx = self.ctx(locale, &path);
    let g = record.view(locale);
    let description = g.background.or(g.episode_summary).unwrap_or(g.name);
    let head = HeadMeta::new(ctx.title(g.name), description, &path).json_ld(json!({
      "@context": "https://schema.org",
      "@type": "Person",
      "name": g.name,
      "jobTitle": g.title,
      "worksFor": g.company.map(|c| json!({ "@type": "Organization", "name": c })),
      "url": self.site.absolute(&path),
    }));
    let body = html! {
      (profile_header(self, &ctx, &g))
      @if let Some(background) = g.background {
        section class="text-section" {
          (section_heading("👤", ctx.t("guest.background")))
          p { (background) }
        }
      }
      (methodology_section(self, &ctx, slug))
      a class="button" href=(ctx.href(&format!("/episodes/{slug}"))) {
        "🎙️ " (ctx.t("episode.number")) " #" (g.episode_number)
      }
    };
    Ok(document(&ctx, &head, body).into_string())
  }

  /// Episodes by episode number, newest first.
  pub fn episodes(&self, locale: Locale) -> String {
    let path = localized_path("/episodes", locale);
    let ctx = self.ctx(locale, &path);
    let head = HeadMeta::new(ctx.title(ctx.t("episodes.title")), ctx.t("episodes.subtitle"), &path);
    let body = html! {
      section class="page-header" {
        h1 { (ctx.t("episodes.title")) }
        p { (ctx.t("episodes.subtitle")) }
      }
      div class="grid grid-3" {
        @for g in self.store().guests_by_episode() { (episode_card(&ctx, &g.view(locale))) }
      }
    };
    document(&ctx, &head, body).into_string()
  }

  pub fn episode(&self, locale: Locale, slug: &str) -> Result<String, InsightError> {
    let record = self.find_guest(slug)?;
    let path = localized_path(&format!("/episodes/{slug}"), locale);
    let ctx = self.ctx(locale, &path);
    let g = record.view(locale);
    let title = format!("{} #{}: {}", ctx.t("episode.number"), g.episode_number, g.name);
    let description = g.episode_summary.unwrap_or(g.name);
    let transcript = self.transcripts.find(g.name);
    let head = HeadMeta::new(ctx.title(&title), description, &path).article().json_ld(json!({
      "@context": "https://schema.org",
      "@type": "PodcastEpisode",
      "name": title,
      "episodeNumber": g.episode_number,
      "datePublished": g.episode_date,
      "description": g.episode_summary,
      "partOfSeries": { "@type": "PodcastSeries", "name": "Lenny's Podcast" },
      "url": self.site.absolute(&path),
    }));
    let body = html! {
      nav class="breadcrumb" {
        a href=(ctx.href("/")) { (ctx.t("nav.home")) }
        " / "
        a href=(ctx.href("/episodes")) { (ctx.t("nav.episodes")) }
        " / "
        span { (g.name) }
      }
      (profile_header(self, &ctx, &g))
      @if let Some(summary) = g.episode_summary {
        section class="text-section" {
          (section_heading("📝", ctx.t("episode.summary")))
          p { (summary) }
        }
      }
      @if !g.key_takeaways.is_empty() {
        section class="takeaways" {
          (section_heading("💡", ctx.t("episode.takeaways")))
          ol { @for t in g.key_takeaways { li { (t) } } }
        }
      }
      (methodology_section(self, &ctx, slug))
      @if let Some(t) = transcript {
        section class="transcript" {
          details {
            summary {
              "📜 " (ctx.t("episode.transcript"))
              " (" (t.length(locale)) " " (ctx.t(length_unit(locale, t.text.has_translation()))) ")"
            }
            div class="transcript-body" {
              @for para in t.text(locale).split("\n\n").filter(|p| !p.trim().is_empty()) {
                p { (para.trim()) }
              }
            }
          }
        }
      }
      a class="button" href=(ctx.href("/episodes")) { "← " (ctx.t("episodes.title")) }
    };
    Ok(document(&ctx, &head, body).into_string())
  }

  fn find_guest(&self, slug: &str) -> Result<&Guest, InsightError> {
    self.store().guest(slug).ok_or_else(|| InsightError::not_found(format!("guest {slug} not found")))
  }
}

/// Words for English text, characters for a Chinese translation.
fn length_unit(locale: Locale, translated: bool) -> &'static str {
  match (locale, translated) {
    (Locale::Zh, true) => "episode.chars",
    _ => "episode.words",
  }
}

fn profile_header(pages: &Pages, ctx: &PageContext<'_>, g: &GuestView<'_>) -> Markup {
  html! {
    section class="profile" {
      (avatar(g.name))
      div class="profile-body" {
        h1 { (g.name) }
        @if let Some(title) = g.title { p class="guest-title" { (title) } }
        @if let Some(company) = g.company { p class="guest-company" { (company) } }
        @if let Some(date) = g.episode_date { p class="episode-date" { (date) } }
        div class="profile-categories" {
          @for c in pages.store().categories_for_guest(g.slug) { (category_badge(ctx, c)) }
        }
        @if g.youtube_url.is_some() || g.spotify_url.is_some() {
          div class="listen" {
            span { (ctx.t("episode.listen")) ": " }
            @if let Some(url) = g.youtube_url { a href=(url) rel="noopener" { "YouTube" } }
            @if let Some(url) = g.spotify_url { a href=(url) rel="noopener" { "Spotify" } }
          }
        }
      }
    }
  }
}

fn methodology_section(pages: &Pages, ctx: &PageContext<'_>, slug: &str) -> Markup {
  let items = pages.store().methodologies_for_guest(slug);
  html! {
    section class="guest-methodologies" {
      (section_heading("📚", &format!("{} ({})", ctx.t("guest.methodologies"), items.len())))
      @if items.is_empty() {
        p class="empty" { (ctx.t("guest.no_methodologies")) }
      } @else {
        div class="card-list" {
          @for m in items { (methodology_card(ctx, &m.view(ctx.locale))) }
        }
      }
    }
  }
}
