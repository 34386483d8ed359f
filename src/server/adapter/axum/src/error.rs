/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use insighthunt_core::InsightError;

/// JSON error envelope for the API namespace.
pub(crate) struct AxumError(pub InsightError);

impl From<InsightError> for AxumError {
  fn from(e: InsightError) -> Self {
    Self(e)
  }
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let status = StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
      tracing::error!(code = self.0.code(), message = self.0.message(), "request failed");
    }
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": self.0.code(),
        "message": self.0.message(),
      }
    });
    (status, axum::Json(body)).into_response()
  }
}
