/* src/cli/core/src/check.rs */

// `insighthunt check`: load the content file and report what was kept,
// what was normalized and what was quarantined.

use std::path::Path;

use anyhow::{Context, Result, bail};
use insighthunt_core::{LoadReport, load_content};

use crate::ui::{self, DIM, RESET};

pub fn run_check(content: &Path) -> Result<()> {
  ui::banner("check");
  ui::arrow(&format!("checking {}", content.display()));
  let (store, report) =
    load_content(content).with_context(|| format!("failed to load {}", content.display()))?;
  for line in summary_lines(&report, store.guests().len()) {
    ui::detail(&line);
  }
  for q in &report.quarantined {
    ui::warn(&format!("{}: {} {DIM}(skipped){RESET}", q.location, q.reason));
  }
  if !report.quarantined.is_empty() {
    bail!("{} record(s) quarantined", report.quarantined.len());
  }
  if report.is_clean() {
    ui::ok("content is clean");
  } else {
    ui::warn("content loaded with normalizations");
  }
  Ok(())
}

fn summary_lines(report: &LoadReport, guests: usize) -> Vec<String> {
  let mut lines = vec![
    format!("episodes:      {}", report.episodes),
    format!("guests:        {guests}"),
    format!("methodologies: {} ({} translated)", report.methodologies, report.translated_methodologies),
  ];
  let normalized = [
    (report.orphan_translations, "orphan translation(s) dropped"),
    (report.unknown_categories, "unknown category value(s) defaulted"),
    (report.unknown_visualizations, "unknown visualization type(s) ignored"),
  ];
  for (count, what) in normalized {
    if count > 0 {
      lines.push(format!("{count} {what}"));
    }
  }
  lines
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn summary_lists_only_nonzero_normalizations() {
    let report = LoadReport {
      episodes: 2,
      methodologies: 5,
      translated_methodologies: 3,
      orphan_translations: 1,
      ..LoadReport::default()
    };
    let lines = summary_lines(&report, 2);
    assert_eq!(lines[2], "methodologies: 5 (3 translated)");
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "1 orphan translation(s) dropped");
  }

  #[test]
  fn check_passes_clean_file_and_fails_quarantine() {
    let tmp = tempfile::tempdir().unwrap();
    let clean = tmp.path().join("clean.json");
    std::fs::write(
      &clean,
      r#"[{"guest":{"name":"Ada"},"methodologies":[{"name":"A","summary":"B","category":"execution"}]}]"#,
    )
    .unwrap();
    run_check(&clean).unwrap();

    let broken = tmp.path().join("broken.json");
    std::fs::write(&broken, r#"[{"guest":{"name":"Ada"}},{"methodologies":[]}]"#).unwrap();
    let err = run_check(&broken).unwrap_err();
    assert!(err.to_string().contains("1 record(s) quarantined"));

    assert!(run_check(&tmp.path().join("missing.json")).is_err());
  }
}
