/* src/server/engine/rust/src/pages/home.rs */

use insighthunt_core::{Category, Locale, localized_path};
use maud::html;
use serde_json::json;

use super::skills::total_skills;
use super::{Pages, episode_card, methodology_card, section_heading};
use crate::head::HeadMeta;
use crate::layout::document;

const LATEST_EPISODES: usize = 3;
const FEATURED: usize = 6;

impl Pages {
  pub fn home(&self, locale: Locale) -> String {
    let path = localized_path("/", locale);
    let ctx = self.ctx(locale, &path);
    let store = self.store();
    let total_methodologies = store.methodologies().len();
    let title = match locale {
      Locale::En => format!("{} | {}", self.site.name, ctx.t("home.title")),
      Locale::Zh => format!("{} {} | {}", self.site.name, self.site.name_zh, ctx.t("home.title")),
    };
    let head = HeadMeta::new(title, ctx.t("home.subtitle"), &path).json_ld(json!({
      "@context": "https://schema.org",
      "@type": "WebSite",
      "name": self.site.name,
      "url": self.site.absolute(&path),
      "inLanguage": locale.html_lang(),
      "potentialAction": {
        "@type": "SearchAction",
        "target": format!("{}?q={{search_term_string}}", self.site.absolute(&ctx.href("/methodologies"))),
        "query-input": "required name=search_term_string",
      },
    }));
    let funnel = [
      ("🎙️", store.total_episodes() as usize, "home.funnel_episodes", "home.funnel_episodes_sub", "/episodes"),
      ("📚", total_methodologies, "nav.methodologies", "home.funnel_methodologies_sub", "/methodologies"),
      ("🎓", total_skills(), "nav.skills", "home.funnel_skills_sub", "/skills"),
    ];
    let banner = [
      ("/episodes", store.total_episodes() as usize, "stats.episodes"),
      ("/methodologies", total_methodologies, "stats.methodologies"),
      ("/guests", store.guests().len(), "stats.guests"),
    ];
    let body = html! {
      section class="hero" {
        h1 class="gradient-text" { (ctx.t("home.hero")) }
        p class="hero-subtitle" { (ctx.t("home.subtitle")) }
        form class="search" action=(ctx.href("/methodologies")) method="get" {
          span class="search-icon" { "🔍" }
          input type="search" name="q" placeholder=(ctx.t("home.search_placeholder"));
        }
      }
      section class="stats-banner" {
        @for (target, count, key) in banner {
          a class="stat" href=(ctx.href(target)) {
            div class="stat-value" { (count) }
            div class="stat-label" { (ctx.t(key)) }
          }
        }
      }
      section class="data-funnel" {
        (section_heading("📊", ctx.t("home.funnel")))
        ol class="data-stages" {
          @for (icon, value, label, sub, target) in funnel {
            li {
              a class="data-stage" href=(ctx.href(target)) {
                span class="funnel-icon" { (icon) }
                span class="funnel-label" { (ctx.t(label)) small { (ctx.t(sub)) } }
                span class="funnel-value" { (value) }
              }
            }
          }
        }
        p class="funnel-note" { (ctx.t("home.funnel_note")) }
      }
      section class="latest-episodes" {
        div class="section-header" {
          (section_heading("🎙️", ctx.t("home.latest_episodes")))
          a href=(ctx.href("/episodes")) { (ctx.t("common.view_all")) " →" }
        }
        div class="grid grid-3" {
          @for g in store.latest_guests(LATEST_EPISODES) { (episode_card(&ctx, &g.view(locale))) }
        }
      }
      section class="featured" {
        div class="section-header" {
          (section_heading("⭐", ctx.t("home.featured")))
          a href=(ctx.href("/methodologies")) { (ctx.t("common.view_all")) " →" }
        }
        div class="card-list" {
          @for m in store.featured(FEATURED) { (methodology_card(&ctx, &m.view(locale))) }
        }
      }
      section class="category-grid" {
        (section_heading("📂", ctx.t("home.browse_categories")))
        div class="grid grid-3" {
          @for category in Category::ALL {
            a class="category-tile" href={ (ctx.href("/methodologies")) "?category=" (category.slug()) } {
              span class="category-emoji" { (category.emoji()) }
              div {
                h3 { (category.label(locale)) }
                p { (store.category_count(category)) " " (ctx.t("common.count_suffix")) }
              }
              span class="arrow" { "→" }
            }
          }
        }
      }
    };
    document(&ctx, &head, body).into_string()
  }
}
