/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::InsightConfig;

pub const CONFIG_FILE: &str = "insighthunt.toml";

/// Walk upward from `start` until an `insighthunt.toml` is found.
pub fn find_config(start: &Path) -> Option<PathBuf> {
  start.ancestors().map(|dir| dir.join(CONFIG_FILE)).find(|candidate| candidate.is_file())
}

/// Parse a config file, anchoring relative paths at its directory.
pub fn load_config(path: &Path) -> Result<InsightConfig> {
  let text =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let mut config: InsightConfig =
    toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))?;
  let base_dir = path.parent().unwrap_or(Path::new("."));
  config.rebase(base_dir);
  config.validate().with_context(|| format!("invalid config {}", path.display()))?;
  Ok(config)
}

/// Explicit `--config` wins; otherwise search from `cwd`, falling back to
/// defaults anchored at `cwd` when no file exists.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<InsightConfig> {
  if let Some(path) = explicit {
    return load_config(path);
  }
  match find_config(cwd) {
    Some(path) => {
      tracing::debug!(path = %path.display(), "using config file");
      load_config(&path)
    }
    None => {
      tracing::debug!(cwd = %cwd.display(), "no {CONFIG_FILE} found, using defaults");
      let mut config = InsightConfig::default();
      config.rebase(cwd);
      Ok(config)
    }
  }
}

/// Environment overrides. `lookup` is `std::env::var` in production.
pub fn apply_env(config: &mut InsightConfig, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
  if let Some(port) = lookup("PORT").filter(|v| !v.trim().is_empty()) {
    config.server.port =
      port.trim().parse().with_context(|| format!("PORT \"{port}\" is not a valid port number"))?;
  }
  if let Some(path) = lookup("INSIGHTHUNT_CONTENT").filter(|v| !v.trim().is_empty()) {
    config.content.path = PathBuf::from(path);
  }
  if let Some(url) = lookup("INSIGHTHUNT_BASE_URL").filter(|v| !v.trim().is_empty()) {
    config.site.base_url = url;
  }
  config.validate()
}
