/* src/cli/core/src/main.rs */

mod check;
mod config;
mod serve;
mod sitemap;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{apply_env, resolve_config};

const DEFAULT_LOG_FILTER: &str = "insighthunt=info,tower_http=info";

#[derive(Parser)]
#[command(name = "insighthunt", version, about = "Bilingual product methodology knowledge base")]
struct Cli {
  /// Path to insighthunt.toml (defaults to searching upward from the working directory)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve pages, the JSON API and the sitemap
  Serve {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    /// Content file (insights JSON)
    #[arg(long)]
    content: Option<PathBuf>,
  },
  /// Load the content file and report skipped or normalized records
  Check {
    #[arg(long)]
    content: Option<PathBuf>,
  },
  /// Render sitemap.xml for the configured base URL
  Sitemap {
    /// Output file (stdout when omitted)
    #[arg(long)]
    out: Option<PathBuf>,
  },
}

fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
    .with_writer(std::io::stderr)
    .init();
}

#[tokio::main]
async fn main() -> Result<()> {
  init_tracing();
  let cli = Cli::parse();

  let cwd = std::env::current_dir().context("failed to read working directory")?;
  let mut config = resolve_config(cli.config.as_deref(), &cwd)?;
  apply_env(&mut config, |key| std::env::var(key).ok())?;

  match cli.command {
    Command::Serve { host, port, content } => {
      if let Some(host) = host {
        config.server.host = host;
      }
      if let Some(port) = port {
        config.server.port = port;
      }
      if let Some(content) = content {
        config.content.path = content;
      }
      serve::run_serve(&config).await
    }
    Command::Check { content } => check::run_check(content.as_deref().unwrap_or(&config.content.path)),
    Command::Sitemap { out } => sitemap::run_sitemap(&config, out.as_deref()),
  }
}
