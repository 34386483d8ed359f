/* src/server/adapter/axum/src/handler/api.rs */

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use insighthunt_core::{InsightError, Locale, MethodologyQuery, localized_path, safe_local_path};
use serde::Deserialize;

use super::AppState;
use crate::cookie::set_cookie;
use crate::error::AxumError;

type Shared = State<Arc<AppState>>;

#[derive(Deserialize)]
pub(super) struct LanguageSwitch {
  #[serde(default)]
  lang: Option<String>,
  #[serde(default)]
  to: Option<String>,
}

/// Explicit language choice: record it for a year, then land on the mirror
/// of `to` in the chosen tree.
pub(super) async fn switch_language(
  State(state): Shared,
  Query(params): Query<LanguageSwitch>,
) -> Result<Response, AxumError> {
  let raw = params.lang.as_deref().unwrap_or_default();
  let locale = Locale::parse(raw)
    .ok_or_else(|| InsightError::validation(format!("unsupported language \"{raw}\"")))?;
  let to = safe_local_path(params.to.as_deref().unwrap_or("/"));
  let (path, query) = match to.split_once('?') {
    Some((path, query)) => (path, Some(query)),
    None => (to, None),
  };
  let mut target = localized_path(path, locale);
  if let Some(q) = query.filter(|q| !q.is_empty()) {
    target.push('?');
    target.push_str(q);
  }
  let location =
    HeaderValue::from_str(&target).map_err(|_| InsightError::validation("invalid redirect target"))?;

  let config = state.locale.config();
  tracing::debug!(locale = %locale, target = %target, "language switched");
  let mut res = StatusCode::SEE_OTHER.into_response();
  res.headers_mut().insert(LOCATION, location);
  if let Some(cookie) = set_cookie(&config.preference_cookie, locale.as_str(), config.preference_max_age_secs) {
    res.headers_mut().append(SET_COOKIE, cookie);
  }
  Ok(res)
}

#[derive(Deserialize)]
pub(super) struct ListParams {
  #[serde(default)]
  q: Option<String>,
  #[serde(default)]
  category: Option<String>,
  #[serde(default)]
  guest: Option<String>,
  #[serde(default)]
  lang: Option<String>,
}

/// Unrecognized locale input counts as absent.
fn requested_locale(lang: Option<&str>) -> Locale {
  lang.and_then(Locale::parse).unwrap_or_default()
}

pub(super) async fn list_methodologies(
  State(state): Shared,
  Query(params): Query<ListParams>,
) -> axum::Json<serde_json::Value> {
  let locale = requested_locale(params.lang.as_deref());
  let query = MethodologyQuery { q: params.q, category: params.category, guest: params.guest };
  let hits = state.pages.store().search(&query);
  let views: Vec<_> = hits.iter().map(|m| m.view(locale)).collect();
  axum::Json(serde_json::json!({
    "ok": true,
    "data": { "total": views.len(), "methodologies": views },
  }))
}

#[derive(Deserialize)]
pub(super) struct LangParam {
  #[serde(default)]
  lang: Option<String>,
}

pub(super) async fn get_methodology(
  State(state): Shared,
  Path(id): Path<String>,
  Query(params): Query<LangParam>,
) -> Result<axum::Json<serde_json::Value>, AxumError> {
  let locale = requested_locale(params.lang.as_deref());
  let m = state
    .pages
    .store()
    .methodology(&id)
    .ok_or_else(|| InsightError::not_found(format!("Methodology '{id}' not found")))?;
  Ok(axum::Json(serde_json::json!({ "ok": true, "data": m.view(locale) })))
}

pub(super) async fn stats(State(state): Shared) -> axum::Json<serde_json::Value> {
  let stats = state.pages.store().stats();
  let categories: serde_json::Map<String, serde_json::Value> =
    stats.by_category.iter().map(|(c, n)| (c.slug().to_string(), (*n).into())).collect();
  axum::Json(serde_json::json!({
    "ok": true,
    "data": {
      "totalMethodologies": stats.total_methodologies,
      "totalGuests": stats.total_guests,
      "totalEpisodes": stats.total_episodes,
      "translatedMethodologies": stats.translated_methodologies,
      "categories": categories,
      "topGuests": stats.top_guests,
    },
  }))
}
