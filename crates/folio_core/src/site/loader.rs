//! Content file loading.
//!
//! # Responsibility
//! - Read a JSON content file and decode it into `PortfolioContent`.
//! - Reject content that fails validation before any caller sees it.

use crate::model::content::{ContentValidationError, PortfolioContent};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ContentLoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Invalid(ContentValidationError),
}

impl Display for ContentLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read content file `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse content file `{}`: {source}", path.display())
            }
            Self::Invalid(err) => write!(f, "invalid content: {err}"),
        }
    }
}

impl Error for ContentLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<ContentValidationError> for ContentLoadError {
    fn from(value: ContentValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Decodes and validates content from a JSON string.
pub fn parse_content(raw: &str, path: &Path) -> Result<PortfolioContent, ContentLoadError> {
    let content: PortfolioContent =
        serde_json::from_str(raw).map_err(|source| ContentLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    content.validate()?;
    Ok(content)
}

/// Loads and validates a JSON content file.
///
/// # Side effects
/// - Emits `content_load` logging events with status.
pub fn load_content(path: impl AsRef<Path>) -> Result<PortfolioContent, ContentLoadError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| {
        error!(
            "event=content_load module=site status=error error_code=read_failed path={} error={}",
            path.display(),
            source
        );
        ContentLoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let content = parse_content(&raw, path)?;
    info!(
        "event=content_load module=site status=ok path={} projects={} skills={}",
        path.display(),
        content.projects.len(),
        content.skills.len()
    );
    Ok(content)
}
