/* src/server/adapter/axum/src/handler/seo.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use insighthunt_core::{render_robots, render_sitemap, sitemap_entries};

use super::AppState;

pub(super) async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let entries = sitemap_entries(state.pages.site(), state.pages.store());
  ([(CONTENT_TYPE, "application/xml; charset=utf-8")], render_sitemap(&entries))
}

pub(super) async fn robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  ([(CONTENT_TYPE, "text/plain; charset=utf-8")], render_robots(state.pages.site()))
}
