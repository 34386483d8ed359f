/* src/server/core/rust/src/server.rs */

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{LocaleConfig, SiteInfo};
use crate::content::{ContentStore, TranscriptStore};

/// Framework-agnostic parts extracted from `SiteServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct SiteParts {
  pub store: Arc<ContentStore>,
  pub transcripts: Arc<TranscriptStore>,
  pub locale: LocaleConfig,
  pub site: SiteInfo,
  /// Directory served under the asset namespace.
  pub static_dir: Option<PathBuf>,
}

pub struct SiteServer {
  store: Arc<ContentStore>,
  transcripts: TranscriptStore,
  locale: LocaleConfig,
  site: SiteInfo,
  static_dir: Option<PathBuf>,
}

impl SiteServer {
  pub fn new(store: ContentStore) -> Self {
    Self::shared(Arc::new(store))
  }

  pub fn shared(store: Arc<ContentStore>) -> Self {
    Self {
      store,
      transcripts: TranscriptStore::default(),
      locale: LocaleConfig::default(),
      site: SiteInfo::default(),
      static_dir: None,
    }
  }

  pub fn transcripts(mut self, transcripts: TranscriptStore) -> Self {
    self.transcripts = transcripts;
    self
  }

  pub fn locale_config(mut self, config: LocaleConfig) -> Self {
    self.locale = config;
    self
  }

  pub fn site(mut self, site: SiteInfo) -> Self {
    self.site = site;
    self
  }

  pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.static_dir = Some(dir.into());
    self
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  pub fn into_parts(self) -> SiteParts {
    SiteParts {
      store: self.store,
      transcripts: Arc::new(self.transcripts),
      locale: self.locale,
      site: self.site,
      static_dir: self.static_dir,
    }
  }
}
