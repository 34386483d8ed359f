/* src/server/core/rust/src/fallback.rs */

//! Bilingual field fallback.
//!
//! Every translatable field is stored as an English base value plus an
//! optional Chinese sibling. Rendering picks the sibling only when the
//! request is Chinese and the sibling carries content.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Values that can be "present but empty".
pub trait Blank {
  fn is_blank(&self) -> bool;
}

impl Blank for str {
  fn is_blank(&self) -> bool {
    self.trim().is_empty()
  }
}

impl Blank for String {
  fn is_blank(&self) -> bool {
    self.as_str().is_blank()
  }
}

impl<T> Blank for [T] {
  fn is_blank(&self) -> bool {
    self.is_empty()
  }
}

impl<T> Blank for Vec<T> {
  fn is_blank(&self) -> bool {
    self.is_empty()
  }
}

/// Pick the display value for one translatable field.
///
/// Returns `translated` iff `locale` is Chinese and `translated` is present and
/// non-blank, otherwise `base`. `base` is never inspected: a blank base value is
/// a content-store integrity problem, not something to compensate for here.
pub fn fallback_field<'a, T: Blank + ?Sized>(
  locale: Locale,
  base: &'a T,
  translated: Option<&'a T>,
) -> &'a T {
  match (locale, translated) {
    (Locale::Zh, Some(zh)) if !zh.is_blank() => zh,
    _ => base,
  }
}

/// Optional variant for deep-dive fields that may be missing altogether.
/// A translation without a base value is ignored.
pub fn fallback_optional<'a, T: Blank + ?Sized>(
  locale: Locale,
  base: Option<&'a T>,
  translated: Option<&'a T>,
) -> Option<&'a T> {
  base.map(|b| fallback_field(locale, b, translated))
}

/// A translatable field: English base plus optional Chinese sibling.
///
/// Built by the content loader, which guarantees a non-blank base and
/// normalizes blank siblings to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
  base: T,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  zh: Option<T>,
}

impl<T: Blank> Localized<T> {
  pub fn new(base: T, zh: Option<T>) -> Self {
    Self { base, zh: zh.filter(|v| !v.is_blank()) }
  }

  pub fn base_only(base: T) -> Self {
    Self { base, zh: None }
  }

  pub fn base(&self) -> &T {
    &self.base
  }

  pub fn zh(&self) -> Option<&T> {
    self.zh.as_ref()
  }

  pub fn has_translation(&self) -> bool {
    self.zh.is_some()
  }

  pub fn get(&self, locale: Locale) -> &T {
    fallback_field(locale, &self.base, self.zh.as_ref())
  }
}

impl Localized<String> {
  pub fn text(&self, locale: Locale) -> &str {
    self.get(locale).as_str()
  }
}

impl<T> Localized<Vec<T>> {
  pub fn items(&self, locale: Locale) -> &[T] {
    match (locale, &self.zh) {
      (Locale::Zh, Some(zh)) if !zh.is_empty() => zh,
      _ => &self.base,
    }
  }
}
