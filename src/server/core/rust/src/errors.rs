/* src/server/core/rust/src/errors.rs */

/// Request-level failure. Pages render it as a localized error view, the
/// API as its `{ ok: false, error }` envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsightError {
  /// Bad locale, language choice or redirect target.
  #[error("VALIDATION_ERROR: {0}")]
  Validation(String),
  /// Unknown methodology id, guest or episode slug.
  #[error("NOT_FOUND: {0}")]
  NotFound(String),
  #[error("INTERNAL_ERROR: {0}")]
  Internal(String),
}

impl InsightError {
  pub fn validation(msg: impl Into<String>) -> Self {
    Self::Validation(msg.into())
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::NotFound(msg.into())
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::Internal(msg.into())
  }

  /// Wire code in the API envelope.
  pub fn code(&self) -> &'static str {
    match self {
      Self::Validation(_) => "VALIDATION_ERROR",
      Self::NotFound(_) => "NOT_FOUND",
      Self::Internal(_) => "INTERNAL_ERROR",
    }
  }

  pub fn message(&self) -> &str {
    match self {
      Self::Validation(m) | Self::NotFound(m) | Self::Internal(m) => m,
    }
  }

  pub fn status(&self) -> u16 {
    match self {
      Self::Validation(_) => 400,
      Self::NotFound(_) => 404,
      Self::Internal(_) => 500,
    }
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound(_))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn codes_and_statuses_pair_up() {
    let cases = [
      (InsightError::validation("unsupported language \"fr\""), "VALIDATION_ERROR", 400),
      (InsightError::not_found("guest nobody not found"), "NOT_FOUND", 404),
      (InsightError::internal("transcripts unavailable"), "INTERNAL_ERROR", 500),
    ];
    for (err, code, status) in cases {
      assert_eq!(err.code(), code);
      assert_eq!(err.status(), status);
    }
  }

  #[test]
  fn only_missing_records_are_not_found() {
    assert!(InsightError::not_found("methodology m-9 not found").is_not_found());
    assert!(!InsightError::validation("invalid redirect target").is_not_found());
  }

  #[test]
  fn display_leads_with_code() {
    let err = InsightError::not_found("methodology m-9 not found");
    assert_eq!(err.message(), "methodology m-9 not found");
    assert_eq!(err.to_string(), "NOT_FOUND: methodology m-9 not found");
  }
}
