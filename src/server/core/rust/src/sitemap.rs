/* src/server/core/rust/src/sitemap.rs */

use std::fmt::Write as _;

use crate::config::SiteInfo;
use crate::content::ContentStore;
use crate::locale::Locale;
use crate::resolve::localized_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
  Daily,
  Weekly,
  Monthly,
}

impl ChangeFreq {
  fn as_str(self) -> &'static str {
    match self {
      Self::Daily => "daily",
      Self::Weekly => "weekly",
      Self::Monthly => "monthly",
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
  pub url: String,
  pub change_freq: ChangeFreq,
  pub priority: f32,
}

const STATIC_ROUTES: [(&str, ChangeFreq, f32); 7] = [
  ("/", ChangeFreq::Daily, 1.0),
  ("/methodologies", ChangeFreq::Daily, 0.9),
  ("/episodes", ChangeFreq::Weekly, 0.8),
  ("/skills", ChangeFreq::Weekly, 0.8),
  ("/guests", ChangeFreq::Weekly, 0.7),
  ("/categories", ChangeFreq::Weekly, 0.6),
  ("/stats", ChangeFreq::Weekly, 0.6),
];

/// Every public page in both trees. Static routes come first, then
/// methodology pages, then episode pages.
pub fn sitemap_entries(site: &SiteInfo, store: &ContentStore) -> Vec<SitemapEntry> {
  let mut out = Vec::new();
  let mut push_pair = |path: &str, change_freq: ChangeFreq, priority: f32| {
    for locale in Locale::ALL {
      out.push(SitemapEntry {
        url: site.absolute(&localized_path(path, locale)),
        change_freq,
        priority,
      });
    }
  };
  for (path, freq, priority) in STATIC_ROUTES {
    push_pair(path, freq, priority);
  }
  for m in store.methodologies() {
    push_pair(&format!("/methodologies/{}", m.id), ChangeFreq::Monthly, 0.7);
  }
  for g in store.guests() {
    push_pair(&format!("/episodes/{}", g.slug), ChangeFreq::Monthly, 0.6);
  }
  out
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
  let mut xml = String::from(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
  );
  for e in entries {
    let _ = writeln!(
      xml,
      "  <url><loc>{}</loc><changefreq>{}</changefreq><priority>{:.1}</priority></url>",
      xml_escape(&e.url),
      e.change_freq.as_str(),
      e.priority
    );
  }
  xml.push_str("</urlset>\n");
  xml
}

pub fn render_robots(site: &SiteInfo) -> String {
  format!("User-agent: *\nAllow: /\n\nSitemap: {}\n", site.absolute("/sitemap.xml"))
}

fn xml_escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&apos;"),
      _ => out.push(ch),
    }
  }
  out
}
