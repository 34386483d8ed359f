/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use insighthunt_core::{LocaleConfig, SiteInfo};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
  pub server: ServerSection,
  pub content: ContentSection,
  pub site: SiteSection,
  pub locale: LocaleConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
  pub host: String,
  pub port: u16,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: "127.0.0.1".to_string(), port: 3000 }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentSection {
  pub path: PathBuf,
  pub transcripts_dir: PathBuf,
  /// Overrides the episode total declared in the content file.
  pub total_episodes: Option<u32>,
}

impl Default for ContentSection {
  fn default() -> Self {
    Self {
      path: PathBuf::from("data/insights.json"),
      transcripts_dir: PathBuf::from("data/transcripts"),
      total_episodes: None,
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
  pub name: String,
  pub name_zh: String,
  pub base_url: String,
  pub static_dir: Option<PathBuf>,
}

impl Default for SiteSection {
  fn default() -> Self {
    let info = SiteInfo::default();
    Self {
      name: info.name,
      name_zh: info.name_zh,
      base_url: info.base_url,
      static_dir: Some(PathBuf::from("public/static")),
    }
  }
}

impl SiteSection {
  pub fn info(&self) -> SiteInfo {
    SiteInfo { name: self.name.clone(), name_zh: self.name_zh.clone(), base_url: self.base_url.clone() }
  }
}

impl InsightConfig {
  /// Anchor relative paths at the directory holding the config file.
  pub fn rebase(&mut self, base_dir: &Path) {
    self.content.path = base_dir.join(&self.content.path);
    self.content.transcripts_dir = base_dir.join(&self.content.transcripts_dir);
    if let Some(dir) = self.site.static_dir.take() {
      self.site.static_dir = Some(base_dir.join(dir));
    }
  }

  pub fn validate(&self) -> Result<()> {
    if self.server.host.trim().is_empty() {
      bail!("server.host must not be empty");
    }
    let base = &self.site.base_url;
    if !(base.starts_with("https://") || base.starts_with("http://")) {
      bail!("site.base_url \"{base}\" must be an absolute http(s) URL");
    }
    if let Err(msg) = self.locale.validate() {
      bail!("{msg}");
    }
    Ok(())
  }

  /// `host:port` for binding. IPv6 literals get brackets.
  pub fn listen_addr(&self) -> String {
    let host = self.server.host.trim();
    if host.contains(':') && !host.starts_with('[') {
      format!("[{host}]:{}", self.server.port)
    } else {
      format!("{host}:{}", self.server.port)
    }
  }
}
