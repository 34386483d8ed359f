/* src/server/adapter/axum/src/handler/page.rs */

//! HTML pages. The same handler serves a route in both trees; the locale
//! always comes from the path.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use insighthunt_core::{InsightError, Locale, MethodologyQuery};

use super::{AppState, path_locale};

type Shared = State<Arc<AppState>>;

fn rendered(state: &AppState, locale: Locale, result: Result<String, InsightError>) -> Response {
  match result {
    Ok(html) => Html(html).into_response(),
    Err(e) => {
      let status = StatusCode::from_u16(e.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
      tracing::debug!(code = e.code(), message = e.message(), "page error");
      (status, Html(state.pages.error_page(locale, &e))).into_response()
    }
  }
}

pub(super) async fn home(State(state): Shared, uri: Uri) -> Html<String> {
  Html(state.pages.home(path_locale(&uri)))
}

pub(super) async fn methodologies(
  State(state): Shared,
  uri: Uri,
  Query(query): Query<MethodologyQuery>,
) -> Html<String> {
  Html(state.pages.methodologies(path_locale(&uri), &query))
}

pub(super) async fn methodology(State(state): Shared, uri: Uri, Path(id): Path<String>) -> Response {
  let locale = path_locale(&uri);
  rendered(&state, locale, state.pages.methodology(locale, &id))
}

pub(super) async fn guests(State(state): Shared, uri: Uri) -> Html<String> {
  Html(state.pages.guests(path_locale(&uri)))
}

pub(super) async fn guest(State(state): Shared, uri: Uri, Path(slug): Path<String>) -> Response {
  let locale = path_locale(&uri);
  rendered(&state, locale, state.pages.guest(locale, &slug))
}

pub(super) async fn episodes(State(state): Shared, uri: Uri) -> Html<String> {
  Html(state.pages.episodes(path_locale(&uri)))
}

pub(super) async fn episode(State(state): Shared, uri: Uri, Path(slug): Path<String>) -> Response {
  let locale = path_locale(&uri);
  rendered(&state, locale, state.pages.episode(locale, &slug))
}

pub(super) async fn categories(State(state): Shared, uri: Uri) -> Html<String> {
  Html(state.pages.categories(path_locale(&uri)))
}

pub(super) async fn stats(State(state): Shared, uri: Uri) -> Html<String> {
  Html(state.pages.stats(path_locale(&uri)))
}

pub(super) async fn skills(State(state): Shared, uri: Uri) -> Html<String> {
  Html(state.pages.skills(path_locale(&uri)))
}

/// Unknown routes in either tree.
pub(super) async fn not_found(State(state): Shared, uri: Uri) -> Response {
  (StatusCode::NOT_FOUND, Html(state.pages.not_found(path_locale(&uri)))).into_response()
}
