/* src/server/engine/rust/src/head.rs */

use insighthunt_core::{Locale, SiteInfo, cn_path, neutral_path};
use maud::{Markup, PreEscaped, html};

use crate::escape::script_safe_json;

const DESCRIPTION_CHARS: usize = 160;

/// Page-level `<head>` metadata.
#[derive(Debug, Clone, Default)]
pub struct HeadMeta {
  pub title: String,
  pub description: String,
  /// Site-relative path of this page in either tree.
  pub path: String,
  pub og_type: &'static str,
  pub keywords: Vec<String>,
  pub json_ld: Option<serde_json::Value>,
}

impl HeadMeta {
  pub fn new(title: impl Into<String>, description: &str, path: &str) -> Self {
    Self {
      title: title.into(),
      description: clip_description(description),
      path: path.to_string(),
      og_type: "website",
      keywords: Vec::new(),
      json_ld: None,
    }
  }

  pub fn article(mut self) -> Self {
    self.og_type = "article";
    self
  }

  pub fn keywords(mut self, keywords: Vec<String>) -> Self {
    self.keywords = keywords;
    self
  }

  pub fn json_ld(mut self, value: serde_json::Value) -> Self {
    self.json_ld = Some(value);
    self
  }

  /// Tags emitted inside `<head>` after the charset.
  pub fn render(&self, site: &SiteInfo, locale: Locale) -> Markup {
    let en_url = site.absolute(&neutral_path(&self.path));
    let zh_url = site.absolute(&cn_path(&self.path));
    let canonical = match locale {
      Locale::En => &en_url,
      Locale::Zh => &zh_url,
    };
    html! {
      title { (self.title) }
      meta name="description" content=(self.description);
      @if !self.keywords.is_empty() {
        meta name="keywords" content=(self.keywords.join(", "));
      }
      link rel="canonical" href=(canonical);
      link rel="alternate" hreflang=(Locale::En.html_lang()) href=(en_url);
      link rel="alternate" hreflang=(Locale::Zh.html_lang()) href=(zh_url);
      link rel="alternate" hreflang="x-default" href=(en_url);
      meta property="og:title" content=(self.title);
      meta property="og:description" content=(self.description);
      meta property="og:type" content=(self.og_type);
      meta property="og:url" content=(canonical);
      meta property="og:site_name" content=(site.name);
      meta property="og:locale" content=(locale.og_locale());
      meta property="og:locale:alternate" content=(locale.other().og_locale());
      meta name="twitter:card" content="summary_large_image";
      meta name="twitter:title" content=(self.title);
      meta name="twitter:description" content=(self.description);
      @if let Some(ld) = &self.json_ld {
        script type="application/ld+json" { (PreEscaped(script_safe_json(&ld.to_string()))) }
      }
    }
  }
}

/// Search-engine descriptions are clipped by characters, not bytes.
pub fn clip_description(text: &str) -> String {
  let text = text.trim();
  if text.chars().count() <= DESCRIPTION_CHARS {
    return text.to_string();
  }
  text.chars().take(DESCRIPTION_CHARS).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn alternates_point_at_both_trees() {
    let head = HeadMeta::new("LNO", "desc", "/cn/methodologies/m-1");
    let html = head.render(&SiteInfo::default(), Locale::Zh).into_string();
    assert!(html.contains(r#"<link rel="canonical" href="https://insighthunt.org/cn/methodologies/m-1">"#));
    assert!(html.contains(r#"hreflang="en" href="https://insighthunt.org/methodologies/m-1""#));
    assert!(html.contains(r#"hreflang="zh-CN" href="https://insighthunt.org/cn/methodologies/m-1""#));
    assert!(html.contains(r#"content="zh_CN""#));
  }

  #[test]
  fn json_ld_is_script_safe() {
    let head = HeadMeta::new("t", "d", "/")
      .json_ld(serde_json::json!({"name": "</script><b>"}));
    let html = head.render(&SiteInfo::default(), Locale::En).into_string();
    assert_eq!(html.matches("</script>").count(), 1);
  }

  #[test]
  fn descriptions_clip_by_chars() {
    let long = "洞".repeat(200);
    assert_eq!(clip_description(&long).chars().count(), DESCRIPTION_CHARS);
    assert_eq!(clip_description("  short "), "short");
  }
}
