/* src/server/core/rust/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language variant served for a request. Only English and Chinese exist.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  Zh,
}

impl Locale {
  pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Zh => "zh",
    }
  }

  /// Value for the `<html lang>` attribute.
  pub fn html_lang(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Zh => "zh-CN",
    }
  }

  pub fn og_locale(self) -> &'static str {
    match self {
      Self::En => "en_US",
      Self::Zh => "zh_CN",
    }
  }

  pub fn other(self) -> Self {
    match self {
      Self::En => Self::Zh,
      Self::Zh => Self::En,
    }
  }

  /// Strict parse of a stored locale value (`en` / `zh`, surrounding whitespace ignored).
  /// Anything else is treated as an absent signal by callers.
  pub fn parse(value: &str) -> Option<Self> {
    match value.trim() {
      "en" => Some(Self::En),
      "zh" => Some(Self::Zh),
      _ => None,
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Locale {
  type Err = crate::InsightError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
      .ok_or_else(|| crate::InsightError::validation(format!("unsupported locale \"{s}\"")))
  }
}
