//! Folio command-line entry point.
//!
//! # Responsibility
//! - Export the static portfolio page.
//! - Probe active-section tracking against synthetic layouts.
//! - Keep output deterministic for quick local sanity checks.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{
    builtin_content, default_log_level, export_site, init_logging, load_content,
    locate_active_section, FixedLayout, PortfolioContent, RenderOptions, NAV_OFFSET_PX,
};
use log::info;

const CONTENT_PATH_ENV: &str = "FOLIO_CONTENT_PATH";
const LOG_LEVEL_ENV: &str = "FOLIO_LOG_LEVEL";

/// Folio - single-page portfolio builder
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (stderr when absent)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the portfolio into a static index.html
    Build {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,

        /// JSON content file (built-in content when absent)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Module script loaded by the page, e.g. ./pkg/folio_web.js
        #[arg(short, long)]
        script: Option<String>,
    },

    /// Report the active section for a synthetic layout
    Track {
        /// Heights of home, about, projects and contact
        #[arg(long, value_delimiter = ',', required = true)]
        heights: Vec<f64>,

        /// Vertical scroll offset
        #[arg(long)]
        scroll: f64,

        /// Fixed navigation bar allowance
        #[arg(long, default_value_t = NAV_OFFSET_PX)]
        offset: f64,
    },

    /// Print a health-check response
    Ping,

    /// Print the core crate version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = resolve_log_level(cli.log_level, std::env::var(LOG_LEVEL_ENV).ok());
    init_logging(&level, cli.log_dir.as_deref()).context("failed to initialize logging")?;

    match cli.command {
        Commands::Build {
            out,
            content,
            script,
        } => {
            let content_path =
                resolve_content_path(content, std::env::var_os(CONTENT_PATH_ENV).map(PathBuf::from));
            build(&out, content_path.as_deref(), script)
        }
        Commands::Track {
            heights,
            scroll,
            offset,
        } => {
            let layout = FixedLayout::contiguous(parse_heights(&heights)?);
            match locate_active_section(scroll, offset, &layout) {
                Some(section) => println!("active={section}"),
                None => println!("active=none"),
            }
            Ok(())
        }
        Commands::Ping => {
            println!("folio_core ping={}", folio_core::ping());
            Ok(())
        }
        Commands::Version => {
            println!("folio_core version={}", folio_core::core_version());
            Ok(())
        }
    }
}

fn build(out: &Path, content_path: Option<&Path>, script: Option<String>) -> Result<()> {
    let loaded: PortfolioContent;
    let content = match content_path {
        Some(path) => {
            loaded = load_content(path)
                .with_context(|| format!("failed to load content from {}", path.display()))?;
            &loaded
        }
        None => builtin_content(),
    };

    let options = RenderOptions {
        script_path: script,
        title: None,
    };
    let report = export_site(content, out, &options)
        .with_context(|| format!("failed to export site into {}", out.display()))?;

    info!(
        "event=cli_build module=cli status=ok bytes={}",
        report.bytes_written
    );
    println!(
        "wrote {} ({} bytes)",
        report.index_path.display(),
        report.bytes_written
    );
    Ok(())
}

fn resolve_log_level(flag: Option<String>, env: Option<String>) -> String {
    flag.or(env)
        .map(|level| level.trim().to_string())
        .filter(|level| !level.is_empty())
        .unwrap_or_else(|| default_log_level().to_string())
}

fn resolve_content_path(flag: Option<PathBuf>, env: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| env.filter(|path| !path.as_os_str().is_empty()))
}

fn parse_heights(heights: &[f64]) -> Result<[f64; 4]> {
    let heights: [f64; 4] = heights
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected 4 heights, got {}", heights.len()))?;
    if let Some(bad) = heights.iter().find(|height| !height.is_finite() || **height < 0.0) {
        bail!("section height must be a non-negative number, got {bad}");
    }
    Ok(heights)
}
