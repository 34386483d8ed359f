/* src/server/adapter/axum/src/handler/mod.rs */

mod api;
mod locale;
mod page;
mod seo;

use std::sync::Arc;

use axum::Router;
use axum::http::Uri;
use axum::middleware::from_fn_with_state;
use axum::routing::{MethodRouter, get};
use insighthunt_core::{Locale, LocaleRouter, PathPrefix, SiteParts};
use insighthunt_engine::{Mounts, Pages};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub(crate) struct AppState {
  pub pages: Pages,
  pub locale: LocaleRouter,
}

pub(crate) fn build_router(parts: SiteParts) -> Router {
  let locale = LocaleRouter::new(parts.locale);
  let api_prefix = locale.config().api_prefix.clone();
  let asset_prefix = locale.config().asset_prefix.clone();
  let mounts = Mounts::from_config(locale.config());
  let state = Arc::new(AppState {
    pages: Pages::new(parts.store, parts.transcripts, parts.site).with_mounts(mounts),
    locale,
  });

  let mut router = Router::new()
    .route("/", get(page::home))
    .route("/cn", get(page::home))
    .route("/sitemap.xml", get(seo::sitemap))
    .route("/robots.txt", get(seo::robots))
    .route(&format!("{api_prefix}/language"), get(api::switch_language))
    .route(&format!("{api_prefix}/methodologies"), get(api::list_methodologies))
    .route(&format!("{api_prefix}/methodologies/{{id}}"), get(api::get_methodology))
    .route(&format!("{api_prefix}/stats"), get(api::stats));

  // Every page is mounted in the neutral tree and again under `/cn`.
  let pages: [(&str, MethodRouter<Arc<AppState>>); 9] = [
    ("/methodologies", get(page::methodologies)),
    ("/methodologies/{id}", get(page::methodology)),
    ("/guests", get(page::guests)),
    ("/guests/{slug}", get(page::guest)),
    ("/episodes", get(page::episodes)),
    ("/episodes/{slug}", get(page::episode)),
    ("/categories", get(page::categories)),
    ("/stats", get(page::stats)),
    ("/skills", get(page::skills)),
  ];
  for (route, handler) in pages {
    router = router.route(route, handler.clone()).route(&format!("/cn{route}"), handler);
  }

  if let Some(dir) = parts.static_dir {
    tracing::debug!(dir = %dir.display(), prefix = %asset_prefix, "serving static assets");
    router = router.nest_service(&format!("{asset_prefix}/static"), ServeDir::new(dir));
  }

  router
    .fallback(page::not_found)
    .layer(from_fn_with_state(state.clone(), locale::negotiate))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Rendering locale: the page tree the path belongs to.
pub(super) fn path_locale(uri: &Uri) -> Locale {
  PathPrefix::of(uri.path()).locale()
}

#[cfg(test)]
mod tests;
