/* src/cli/core/src/sitemap.rs */

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use insighthunt_core::{render_sitemap, sitemap_entries};

use crate::config::InsightConfig;
use crate::serve::load_store;
use crate::ui;

/// Render `sitemap.xml` to `out`, or to stdout when no path is given.
pub fn run_sitemap(config: &InsightConfig, out: Option<&Path>) -> Result<()> {
  let store = load_store(config)?;
  let entries = sitemap_entries(&config.site.info(), &store);
  let xml = render_sitemap(&entries);
  match out {
    Some(path) => {
      if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      std::fs::write(path, &xml).with_context(|| format!("failed to write {}", path.display()))?;
      ui::ok(&format!("wrote {} urls to {}", entries.len(), path.display()));
    }
    None => std::io::stdout().lock().write_all(xml.as_bytes()).context("failed to write sitemap")?,
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn writes_both_trees_to_file() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
      tmp.path().join("insights.json"),
      r#"[{"filename":"Ada Lovelace","guest":{"name":"Ada"},"methodologies":[{"name":"A","summary":"B"}]}]"#,
    )
    .unwrap();
    let mut config = InsightConfig::default();
    config.content.path = tmp.path().join("insights.json");
    config.site.base_url = "https://example.org".to_string();

    let out = tmp.path().join("dist/sitemap.xml");
    run_sitemap(&config, Some(&out)).unwrap();
    let xml = std::fs::read_to_string(&out).unwrap();
    assert!(xml.contains("<loc>https://example.org/methodologies/m-1</loc>"));
    assert!(xml.contains("<loc>https://example.org/cn/episodes/ada-lovelace</loc>"));
  }
}
