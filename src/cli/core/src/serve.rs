/* src/cli/core/src/serve.rs */

use anyhow::{Context, Result};
use insighthunt_axum::IntoAxumRouter;
use insighthunt_core::{ContentStore, SiteServer, TranscriptStore, load_content};

use crate::config::InsightConfig;

/// Load content for the configured site, applying the episode-total override.
pub fn load_store(config: &InsightConfig) -> Result<ContentStore> {
  let path = &config.content.path;
  let (store, report) =
    load_content(path).with_context(|| format!("failed to load content from {}", path.display()))?;
  if !report.quarantined.is_empty() {
    tracing::warn!(count = report.quarantined.len(), "serving with quarantined records; run `insighthunt check`");
  }
  Ok(match config.content.total_episodes {
    Some(total) => store.with_total_episodes(total),
    None => store,
  })
}

/// Assemble the site server from config without binding.
pub fn build_server(config: &InsightConfig) -> Result<SiteServer> {
  let store = load_store(config)?;
  let dir = &config.content.transcripts_dir;
  let transcripts = TranscriptStore::open(dir)
    .with_context(|| format!("failed to read transcripts from {}", dir.display()))?;
  let mut server = SiteServer::new(store)
    .transcripts(transcripts)
    .locale_config(config.locale.clone())
    .site(config.site.info());
  match &config.site.static_dir {
    Some(dir) if dir.is_dir() => server = server.static_dir(dir.clone()),
    Some(dir) => tracing::warn!(dir = %dir.display(), "static directory missing, assets disabled"),
    None => {}
  }
  Ok(server)
}

pub async fn run_serve(config: &InsightConfig) -> Result<()> {
  let server = build_server(config)?;
  let addr = config.listen_addr();
  server.serve(&addr).await.map_err(|e| anyhow::anyhow!(e)).with_context(|| format!("server on {addr} failed"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn build_server_uses_override_and_missing_dirs() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
      tmp.path().join("insights.json"),
      r#"[{"guest":{"name":"Ada"},"methodologies":[{"name":"A","summary":"B"}]}]"#,
    )
    .unwrap();
    let mut config = InsightConfig::default();
    config.rebase(tmp.path());
    config.content.path = tmp.path().join("insights.json");
    config.content.total_episodes = Some(40);

    let store = load_store(&config).unwrap();
    assert_eq!(store.total_episodes(), 40);
    let parts = build_server(&config).unwrap().into_parts();
    assert!(parts.static_dir.is_none());
    assert_eq!(parts.site.base_url, "https://insighthunt.org");
  }

  #[test]
  fn missing_content_is_reported_with_path() {
    let mut config = InsightConfig::default();
    config.content.path = "/definitely/not/here.json".into();
    let err = load_store(&config).unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
  }
}
