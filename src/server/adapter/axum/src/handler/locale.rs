/* src/server/adapter/axum/src/handler/locale.rs */

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use insighthunt_core::{Locale, RequestSignals, Routing};

use super::AppState;
use crate::cookie::set_cookie;

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
  headers.get(name).and_then(|v| v.to_str().ok())
}

/// HTTP/2 clients may split cookies across several `Cookie` headers.
fn cookie_header(headers: &HeaderMap) -> Option<String> {
  let parts: Vec<&str> = headers.get_all(COOKIE).iter().filter_map(|v| v.to_str().ok()).collect();
  (!parts.is_empty()).then(|| parts.join("; "))
}

/// First-visit negotiation on neutral paths. Excluded paths and visitors
/// with a recorded choice pass straight through; an inferred Chinese
/// visitor is sent to the `/cn` mirror with a 307.
pub(super) async fn negotiate(State(state): State<Arc<AppState>>, req: Request, next: Next) -> Response {
  let config = state.locale.config();
  let headers = req.headers();
  let cookies = cookie_header(headers);
  let signals = RequestSignals {
    path: req.uri().path(),
    query: req.uri().query(),
    cookie_header: cookies.as_deref(),
    geo_country: header(headers, &config.geo_header),
    accept_language: header(headers, ACCEPT_LANGUAGE.as_str()),
  };
  match state.locale.route(&signals) {
    Routing::PassThrough => next.run(req).await,
    Routing::Stay => {
      tracing::debug!(path = signals.path, "locale: stay");
      next.run(req).await
    }
    Routing::Redirect { location } => {
      tracing::debug!(
        path = signals.path,
        geo = signals.geo_country,
        location = %location,
        "locale: redirect to chinese tree"
      );
      redirect(&location, &config.auto_detected_cookie, config.auto_detected_max_age_secs)
    }
  }
}

fn redirect(location: &str, cookie_name: &str, max_age_secs: u64) -> Response {
  let Ok(location) = HeaderValue::from_str(location) else {
    return StatusCode::BAD_REQUEST.into_response();
  };
  let mut res = StatusCode::TEMPORARY_REDIRECT.into_response();
  res.headers_mut().insert(LOCATION, location);
  if let Some(cookie) = set_cookie(cookie_name, Locale::Zh.as_str(), max_age_secs) {
    res.headers_mut().append(SET_COOKIE, cookie);
  }
  res
}
