/* src/cli/core/src/ui.rs */

// Terminal output for one-shot commands. The server logs through tracing.
// Everything goes to stderr so `insighthunt sitemap` can pipe XML on stdout.

use std::io::{self, Write};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn line(msg: &str) {
  let _ = writeln!(io::stderr().lock(), "{msg}");
}

pub fn ok(msg: &str) {
  line(&format!("  {GREEN}\u{2713}{RESET} {msg}"));
}

pub fn warn(msg: &str) {
  line(&format!("  {YELLOW}!{RESET} {msg}"));
}

pub fn arrow(msg: &str) {
  line(&format!("  {GREEN}\u{2192}{RESET} {msg}"));
}

pub fn detail(msg: &str) {
  line(&format!("        {msg}"));
}

pub fn banner(cmd: &str) {
  line("");
  line(&format!("  {BOLD}InsightHunt{RESET} {cmd} {DIM}v{VERSION}{RESET}"));
  line("");
}
