/* src/server/core/rust/src/config.rs */

use serde::Deserialize;

const DAY_SECS: u64 = 60 * 60 * 24;

/// Locale routing settings. Every field has a default, so an empty
/// `[locale]` table (or none at all) yields the production behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
  /// Two-letter country codes that infer Chinese on a first visit.
  pub chinese_regions: Vec<String>,
  /// Edge-injected header carrying the visitor's country code.
  pub geo_header: String,
  /// Explicit-choice cookie, written only by the language switch.
  pub preference_cookie: String,
  pub preference_max_age_secs: u64,
  /// Advisory marker written alongside an automatic redirect.
  pub auto_detected_cookie: String,
  pub auto_detected_max_age_secs: u64,
  pub api_prefix: String,
  pub asset_prefix: String,
}

impl Default for LocaleConfig {
  fn default() -> Self {
    Self {
      chinese_regions: ["CN", "TW", "HK", "MO", "SG"].iter().map(|s| (*s).to_string()).collect(),
      geo_header: "x-vercel-ip-country".to_string(),
      preference_cookie: "language-preference".to_string(),
      preference_max_age_secs: 365 * DAY_SECS,
      auto_detected_cookie: "auto-detected-language".to_string(),
      auto_detected_max_age_secs: 7 * DAY_SECS,
      api_prefix: "/api".to_string(),
      asset_prefix: "/_next".to_string(),
    }
  }
}

impl LocaleConfig {
  pub fn validate(&self) -> Result<(), String> {
    for prefix in [&self.api_prefix, &self.asset_prefix] {
      if !prefix.starts_with('/') || prefix.len() < 2 {
        return Err(format!("locale prefix \"{prefix}\" must start with '/' and name a segment"));
      }
    }
    if self.preference_cookie.is_empty() || self.auto_detected_cookie.is_empty() {
      return Err("locale cookie names must not be empty".to_string());
    }
    if self.preference_cookie == self.auto_detected_cookie {
      return Err("preference and auto-detected cookies must differ".to_string());
    }
    Ok(())
  }
}

/// Public site identity used for absolute URLs (sitemap, alternates).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
  pub name: String,
  pub name_zh: String,
  pub base_url: String,
}

impl Default for SiteInfo {
  fn default() -> Self {
    Self {
      name: "InsightHunt".to_string(),
      name_zh: "洞见猎手".to_string(),
      base_url: "https://insighthunt.org".to_string(),
    }
  }
}

impl SiteInfo {
  /// Join a site-relative path onto the base URL without doubling slashes.
  pub fn absolute(&self, path: &str) -> String {
    let base = self.base_url.trim_end_matches('/');
    if path.is_empty() || path == "/" {
      return base.to_string();
    }
    format!("{base}/{}", path.trim_start_matches('/'))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_production_cookies() {
    let cfg = LocaleConfig::default();
    assert_eq!(cfg.preference_cookie, "language-preference");
    assert_eq!(cfg.preference_max_age_secs, 31_536_000);
    assert_eq!(cfg.auto_detected_max_age_secs, 604_800);
    assert_eq!(cfg.chinese_regions.len(), 5);
    assert!(cfg.validate().is_ok());
  }

  #[test]
  fn partial_table_keeps_defaults() {
    let cfg: LocaleConfig = serde_json::from_str(r#"{"geo_header": "cf-ipcountry"}"#).unwrap();
    assert_eq!(cfg.geo_header, "cf-ipcountry");
    assert_eq!(cfg.api_prefix, "/api");
  }

  #[test]
  fn rejects_bare_slash_prefix() {
    let cfg = LocaleConfig { api_prefix: "/".to_string(), ..LocaleConfig::default() };
    assert!(cfg.validate().is_err());
  }

  #[test]
  fn rejects_shared_cookie_name() {
    let cfg = LocaleConfig {
      auto_detected_cookie: "language-preference".to_string(),
      ..LocaleConfig::default()
    };
    assert!(cfg.validate().is_err());
  }

  #[test]
  fn absolute_urls() {
    let site = SiteInfo { base_url: "https://example.org/".to_string(), ..SiteInfo::default() };
    assert_eq!(site.absolute("/"), "https://example.org");
    assert_eq!(site.absolute("/cn/stats"), "https://example.org/cn/stats");
  }
}
