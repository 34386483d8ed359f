/* src/server/adapter/axum/src/cookie.rs */

use axum::http::HeaderValue;

/// `Set-Cookie` value scoped to the whole site. Names and values are
/// config strings and locale tags, so no quoting is applied.
pub(crate) fn set_cookie(name: &str, value: &str, max_age_secs: u64) -> Option<HeaderValue> {
  HeaderValue::from_str(&format!("{name}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Lax")).ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn formats_site_wide_cookie() {
    let v = set_cookie("language-preference", "zh", 31_536_000).unwrap();
    assert_eq!(v.to_str().unwrap(), "language-preference=zh; Path=/; Max-Age=31536000; SameSite=Lax");
  }

  #[test]
  fn rejects_header_breaking_values() {
    assert!(set_cookie("a", "b\nc", 1).is_none());
  }
}
