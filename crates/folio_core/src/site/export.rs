//! Static site export.
//!
//! # Responsibility
//! - Render the initial document and write it to an output directory.
//!
//! # Invariants
//! - Content is validated before anything is written.
//! - The exported document reflects the pre-mount state: no active section,
//!   entry animation not triggered, mobile menu closed.

use crate::model::content::{ContentValidationError, PortfolioContent};
use crate::page::controller::PageState;
use crate::render::markup::{render_page, RenderOptions};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File name of the exported document.
pub const INDEX_FILE_NAME: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub index_path: PathBuf,
    pub bytes_written: usize,
}

#[derive(Debug)]
pub enum ExportError {
    InvalidContent(ContentValidationError),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidContent(err) => write!(f, "refusing to export invalid content: {err}"),
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidContent(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Writes `index.html` for `content` into `out_dir`, creating it if needed.
pub fn export_site(
    content: &PortfolioContent,
    out_dir: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<ExportReport, ExportError> {
    let started_at = Instant::now();
    let out_dir = out_dir.as_ref();
    content.validate().map_err(ExportError::InvalidContent)?;

    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let html = render_page(content, &PageState::new(), options);
    let index_path = out_dir.join(INDEX_FILE_NAME);
    std::fs::write(&index_path, html.as_bytes()).map_err(|source| ExportError::Io {
        path: index_path.clone(),
        source,
    })?;

    info!(
        "event=site_export module=site status=ok path={} bytes={} duration_ms={}",
        index_path.display(),
        html.len(),
        started_at.elapsed().as_millis()
    );
    Ok(ExportReport {
        index_path,
        bytes_written: html.len(),
    })
}
