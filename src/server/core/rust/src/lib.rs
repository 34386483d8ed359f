/* src/server/core/rust/src/lib.rs */

pub mod config;
pub mod content;
pub mod errors;
pub mod fallback;
pub mod locale;
pub mod resolve;
pub mod server;
pub mod sitemap;

// Re-exports for ergonomic use
pub use config::{LocaleConfig, SiteInfo};
pub use content::{
  Category, CategorySummary, ContentError, ContentStats, ContentStore, Guest, GuestCount, GuestView,
  LoadReport, Methodology, MethodologyQuery, MethodologyView, Transcript, TranscriptStore,
  VisualizationType, load_content, parse_content,
};
pub use errors::InsightError;
pub use fallback::{Blank, Localized, fallback_field, fallback_optional};
pub use locale::Locale;
pub use resolve::{
  LocaleRouter, LocaleRules, PathPrefix, RequestSignals, Routing, cn_path, cookie_value,
  localized_path, neutral_path, resolve_locale, safe_local_path,
};
pub use server::{SiteParts, SiteServer};
pub use sitemap::{SitemapEntry, render_robots, render_sitemap, sitemap_entries};
