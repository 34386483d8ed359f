/* src/server/core/rust/src/resolve.rs */

//! Locale resolution for inbound requests.
//!
//! The URL path is authoritative for rendering: `/cn/...` is the Chinese tree,
//! everything else the English tree. The cookie, geo and header signals only
//! decide whether a first-time visitor on a neutral path is redirected into the
//! Chinese tree.

use crate::config::LocaleConfig;
use crate::locale::Locale;

const CN_PREFIX: &str = "/cn";

/// Which page tree the URL path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPrefix {
  None,
  Cn,
}

impl PathPrefix {
  pub fn of(path: &str) -> Self {
    if has_segment_prefix(path, CN_PREFIX) { Self::Cn } else { Self::None }
  }

  /// Locale the page tree renders in.
  pub fn locale(self) -> Locale {
    match self {
      Self::None => Locale::En,
      Self::Cn => Locale::Zh,
    }
  }
}

/// `path` equals `prefix` or continues it with a `/`.
fn has_segment_prefix(path: &str, prefix: &str) -> bool {
  match path.strip_prefix(prefix) {
    Some(rest) => rest.is_empty() || rest.starts_with('/'),
    None => false,
  }
}

/// Precedence rules with a configurable Chinese-speaking region set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRules {
  chinese_regions: Vec<String>,
}

impl Default for LocaleRules {
  fn default() -> Self {
    Self::new(LocaleConfig::default().chinese_regions)
  }
}

impl LocaleRules {
  pub fn new<I, S>(regions: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let chinese_regions =
      regions.into_iter().map(|r| r.as_ref().trim().to_ascii_uppercase()).collect();
    Self { chinese_regions }
  }

  /// Decide the locale for one request. Each rule short-circuits:
  /// `/cn` path, explicit cookie, Chinese-speaking region, `zh` in
  /// `Accept-Language`, then English.
  pub fn resolve(
    &self,
    path_prefix: PathPrefix,
    explicit_cookie: Option<Locale>,
    geo_country: Option<&str>,
    accept_language: Option<&str>,
  ) -> Locale {
    if path_prefix == PathPrefix::Cn {
      return Locale::Zh;
    }
    if let Some(choice) = explicit_cookie {
      return choice;
    }
    if self.infers_chinese(geo_country, accept_language) { Locale::Zh } else { Locale::En }
  }

  /// The inference half of the precedence (geo, then header).
  pub fn infers_chinese(&self, geo_country: Option<&str>, accept_language: Option<&str>) -> bool {
    geo_country.is_some_and(|geo| self.is_chinese_region(geo))
      || accept_language.is_some_and(accepts_chinese)
  }

  fn is_chinese_region(&self, geo: &str) -> bool {
    let geo = geo.trim();
    !geo.is_empty() && self.chinese_regions.iter().any(|r| r.eq_ignore_ascii_case(geo))
  }
}

fn accepts_chinese(header: &str) -> bool {
  header.to_ascii_lowercase().contains("zh")
}

/// Resolve with the default region set `{CN, TW, HK, MO, SG}`.
pub fn resolve_locale(
  path_prefix: PathPrefix,
  explicit_cookie: Option<Locale>,
  geo_country: Option<&str>,
  accept_language: Option<&str>,
) -> Locale {
  LocaleRules::default().resolve(path_prefix, explicit_cookie, geo_country, accept_language)
}

/// Raw signals pulled from one request by the HTTP layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSignals<'a> {
  pub path: &'a str,
  pub query: Option<&'a str>,
  pub cookie_header: Option<&'a str>,
  pub geo_country: Option<&'a str>,
  pub accept_language: Option<&'a str>,
}

/// What the locale middleware should do with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routing {
  /// Excluded path: no locale work at all.
  PassThrough,
  /// Neutral path served as-is.
  Stay,
  /// First visit inferred as Chinese: redirect and write the advisory marker.
  Redirect { location: String },
}

/// Applies the exclusion list and redirect contract on top of [`LocaleRules`].
#[derive(Debug, Clone)]
pub struct LocaleRouter {
  rules: LocaleRules,
  config: LocaleConfig,
}

impl Default for LocaleRouter {
  fn default() -> Self {
    Self::new(LocaleConfig::default())
  }
}

impl LocaleRouter {
  pub fn new(config: LocaleConfig) -> Self {
    Self { rules: LocaleRules::new(&config.chinese_regions), config }
  }

  pub fn config(&self) -> &LocaleConfig {
    &self.config
  }

  pub fn rules(&self) -> &LocaleRules {
    &self.rules
  }

  /// Paths that never take part in locale routing: the Chinese tree itself,
  /// the API and asset namespaces, and anything that looks like a file.
  pub fn is_excluded(&self, path: &str) -> bool {
    has_segment_prefix(path, CN_PREFIX)
      || has_segment_prefix(path, &self.config.api_prefix)
      || has_segment_prefix(path, &self.config.asset_prefix)
      || path.contains('.')
  }

  /// Explicit choice recorded in the preference cookie, if valid.
  pub fn explicit_choice(&self, cookie_header: Option<&str>) -> Option<Locale> {
    cookie_header
      .and_then(|h| cookie_value(h, &self.config.preference_cookie))
      .and_then(Locale::parse)
  }

  pub fn route(&self, signals: &RequestSignals<'_>) -> Routing {
    if self.is_excluded(signals.path) {
      return Routing::PassThrough;
    }
    // A recorded choice is never second-guessed on a neutral path.
    let explicit = self.explicit_choice(signals.cookie_header);
    if explicit.is_some() {
      return Routing::Stay;
    }
    let locale = self.rules.resolve(
      PathPrefix::None,
      None,
      signals.geo_country,
      signals.accept_language,
    );
    match locale {
      Locale::Zh => {
        let mut location = cn_path(signals.path);
        if let Some(q) = signals.query.filter(|q| !q.is_empty()) {
          location.push('?');
          location.push_str(q);
        }
        Routing::Redirect { location }
      }
      Locale::En => Routing::Stay,
    }
  }
}

/// Chinese-tree equivalent of a neutral path (`/` -> `/cn`, `/x/y` -> `/cn/x/y`).
/// Paths already in the Chinese tree are returned unchanged.
pub fn cn_path(path: &str) -> String {
  if PathPrefix::of(path) == PathPrefix::Cn {
    return path.to_string();
  }
  if path.is_empty() || path == "/" {
    return CN_PREFIX.to_string();
  }
  if path.starts_with('/') { format!("{CN_PREFIX}{path}") } else { format!("{CN_PREFIX}/{path}") }
}

/// English-tree equivalent of a path (`/cn` -> `/`, `/cn/x` -> `/x`).
pub fn neutral_path(path: &str) -> String {
  match path.strip_prefix(CN_PREFIX) {
    Some("") => "/".to_string(),
    Some(rest) if rest.starts_with('/') => rest.to_string(),
    _ if path.is_empty() => "/".to_string(),
    _ => path.to_string(),
  }
}

/// Mirror of `path` in the page tree for `locale`.
pub fn localized_path(path: &str, locale: Locale) -> String {
  match locale {
    Locale::En => neutral_path(path),
    Locale::Zh => cn_path(path),
  }
}

/// Only same-site absolute paths are accepted as redirect targets.
pub fn safe_local_path(raw: &str) -> &str {
  let ok = raw.starts_with('/') && !raw.starts_with("//") && !raw.contains('\\');
  if ok { raw } else { "/" }
}

/// Value of cookie `name` from a `Cookie` request header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
  header.split(';').find_map(|pair| {
    let (k, v) = pair.trim().split_once('=')?;
    (k.trim() == name).then(|| v.trim().trim_matches('"'))
  })
}
