/* src/server/engine/rust/src/layout.rs */

use insighthunt_core::{Locale, LocaleConfig, SiteInfo, localized_path, neutral_path};
use maud::{DOCTYPE, Markup, html};

use crate::head::HeadMeta;
use crate::ui::t;

const PODCAST_URL: &str = "https://www.lennyspodcast.com/";

/// Where the router mounts the JSON API and static assets. Pages link into
/// both, so they must follow the configured prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mounts {
  pub api_prefix: String,
  pub asset_prefix: String,
}

impl Mounts {
  pub fn from_config(config: &LocaleConfig) -> Self {
    Self { api_prefix: config.api_prefix.clone(), asset_prefix: config.asset_prefix.clone() }
  }

  pub fn stylesheet(&self) -> String {
    format!("{}/static/site.css", self.asset_prefix)
  }

  /// Language-switch link: records the explicit choice, then lands on the
  /// mirror of the current page with the same query.
  pub fn switch_href(&self, target: Locale, current_path: &str, query: Option<&str>) -> String {
    let mut to = neutral_path(current_path);
    if let Some(q) = query.filter(|q| !q.is_empty()) {
      to.push('?');
      to.push_str(q);
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
      .append_pair("lang", target.as_str())
      .append_pair("to", &to)
      .finish();
    format!("{}/language?{query}", self.api_prefix)
  }
}

impl Default for Mounts {
  fn default() -> Self {
    Self::from_config(&LocaleConfig::default())
  }
}

/// Per-request rendering context.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
  pub locale: Locale,
  /// Request path, in either tree.
  pub path: &'a str,
  /// Request query, carried across a language switch.
  pub query: Option<&'a str>,
  pub site: &'a SiteInfo,
  pub mounts: &'a Mounts,
}

impl<'a> PageContext<'a> {
  pub fn new(locale: Locale, path: &'a str, site: &'a SiteInfo, mounts: &'a Mounts) -> Self {
    Self { locale, path, query: None, site, mounts }
  }

  pub fn with_query(self, query: Option<&'a str>) -> Self {
    Self { query, ..self }
  }

  pub fn t(&self, key: &'a str) -> &'a str {
    t(key, self.locale)
  }

  /// Link into the current tree.
  pub fn href(&self, neutral: &str) -> String {
    localized_path(neutral, self.locale)
  }

  /// `<title>` text: page title then site name.
  pub fn title(&self, page: &str) -> String {
    match self.locale {
      Locale::En => format!("{page} | {}", self.site.name),
      Locale::Zh => format!("{page} | {} {}", self.site.name, self.site.name_zh),
    }
  }
}

/// Full HTML document around a page body.
pub fn document(ctx: &PageContext<'_>, head: &HeadMeta, body: Markup) -> Markup {
  html! {
    (DOCTYPE)
    html lang=(ctx.locale.html_lang()) {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        (head.render(ctx.site, ctx.locale))
        link rel="stylesheet" href=(ctx.mounts.stylesheet());
        link rel="icon" href="/favicon.ico";
      }
      body {
        (header(ctx))
        main class="container" { (body) }
        (footer(ctx))
      }
    }
  }
}

fn header(ctx: &PageContext<'_>) -> Markup {
  let links = [
    ("/", "nav.home"),
    ("/methodologies", "nav.methodologies"),
    ("/episodes", "nav.episodes"),
    ("/guests", "nav.guests"),
    ("/categories", "nav.categories"),
    ("/stats", "nav.stats"),
    ("/skills", "nav.skills"),
  ];
  let current = neutral_path(ctx.path);
  html! {
    header class="site-header" {
      a class="brand" href=(ctx.href("/")) {
        span class="brand-icon" { "💡" }
        span class="brand-name" { (ctx.site.name) }
        @if ctx.locale == Locale::Zh {
          small class="brand-sub" { (ctx.site.name_zh) }
        }
      }
      nav class="site-nav" {
        @for (path, key) in links {
          @let active = if path == "/" { current == "/" } else { current.starts_with(path) };
          a href=(ctx.href(path)) class=[active.then_some("active")] { (ctx.t(key)) }
        }
      }
      (language_switcher(ctx))
    }
  }
}

fn language_switcher(ctx: &PageContext<'_>) -> Markup {
  html! {
    div class="lang-switch" aria-label=(ctx.t("nav.switch_language")) {
      @for locale in Locale::ALL {
        @let label = switch_label(locale);
        @if locale == ctx.locale {
          span class="lang-current" { (label) }
        } @else {
          a href=(ctx.mounts.switch_href(locale, ctx.path, ctx.query)) hreflang=(locale.html_lang()) { (label) }
        }
      }
    }
  }
}

fn switch_label(locale: Locale) -> &'static str {
  match locale {
    Locale::En => "EN",
    Locale::Zh => "中",
  }
}

fn footer(ctx: &PageContext<'_>) -> Markup {
  html! {
    footer class="site-footer" {
      p {
        strong { (ctx.site.name) }
        @if ctx.locale == Locale::Zh { " " (ctx.site.name_zh) }
      }
      p {
        (ctx.t("common.footer")) " "
        a href=(PODCAST_URL) rel="noopener" { "Lenny's Podcast" }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn switch_links_carry_neutral_target() {
    let mounts = Mounts::default();
    assert_eq!(mounts.switch_href(Locale::En, "/cn/stats", None), "/api/language?lang=en&to=%2Fstats");
    assert_eq!(mounts.switch_href(Locale::Zh, "/", Some("")), "/api/language?lang=zh&to=%2F");
  }

  #[test]
  fn switch_links_keep_query_and_follow_prefixes() {
    let mounts = Mounts { api_prefix: "/v1".to_string(), asset_prefix: "/assets".to_string() };
    assert_eq!(
      mounts.switch_href(Locale::Zh, "/methodologies", Some("q=lno&category=execution")),
      "/v1/language?lang=zh&to=%2Fmethodologies%3Fq%3Dlno%26category%3Dexecution"
    );
    assert_eq!(mounts.stylesheet(), "/assets/static/site.css");

    let site = SiteInfo::default();
    let ctx = PageContext::new(Locale::En, "/stats", &site, &mounts);
    let html = document(&ctx, &HeadMeta::new("Stats", "desc", "/stats"), html! {}).into_string();
    assert!(html.contains(r#"href="/assets/static/site.css""#));
    assert!(html.contains("/v1/language?lang=zh&amp;to=%2Fstats"));
    assert!(!html.contains("/api/language"));
  }

  #[test]
  fn document_sets_lang_and_marks_current_locale() {
    let site = SiteInfo::default();
    let mounts = Mounts::default();
    let ctx = PageContext::new(Locale::Zh, "/cn/guests", &site, &mounts);
    let head = HeadMeta::new("嘉宾", "desc", "/cn/guests");
    let html = document(&ctx, &head, html! { p { "body" } }).into_string();
    assert!(html.starts_with("<!DOCTYPE html><html lang=\"zh-CN\">"));
    assert!(html.contains(r#"<span class="lang-current">中</span>"#));
    assert!(html.contains("lang=en&amp;to=%2Fguests"));
    assert!(html.contains(r#"<a href="/cn/guests" class="active">嘉宾</a>"#));
  }

  #[test]
  fn links_stay_in_tree() {
    let site = SiteInfo::default();
    let mounts = Mounts::default();
    let ctx = PageContext::new(Locale::En, "/", &site, &mounts);
    assert_eq!(ctx.href("/stats"), "/stats");
    let ctx = PageContext::new(Locale::Zh, "/cn", &site, &mounts);
    assert_eq!(ctx.href("/stats"), "/cn/stats");
    assert_eq!(ctx.title("概览"), "概览 | InsightHunt 洞见猎手");
  }
}
