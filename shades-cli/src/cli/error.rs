//! Error type for CLI commands.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use shades::ShadeError;

/// Anything that can stop a CLI command (or one color within it).
#[derive(Debug)]
pub enum CliError {
    /// Bad command-line usage, e.g. a flag missing its value.
    Usage(String),
    /// Base color or shade value rejected by the engine.
    Shade(ShadeError),
    /// Filesystem failure, with the path that caused it.
    Io { path: PathBuf, source: io::Error },
    /// SVG parsing or rasterizing failed.
    Render(String),
    /// Encoding or saving the image failed.
    Image(image::ImageError),
    /// Recipe file could not be parsed.
    Recipe(String),
    Json(serde_json::Error),
}

impl CliError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        CliError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::Shade(e) => write!(f, "{}", e),
            CliError::Io { path, source } if source.kind() == io::ErrorKind::PermissionDenied => {
                write!(f, "Permission denied. Unable to save {}", path.display())
            }
            CliError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            CliError::Render(msg) => write!(f, "Render failed: {}", msg),
            CliError::Image(e) => write!(f, "Failed to save image: {}", e),
            CliError::Recipe(msg) => write!(f, "Recipe error: {}", msg),
            CliError::Json(e) => write!(f, "Failed to serialize JSON: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Shade(e) => Some(e),
            CliError::Io { source, .. } => Some(source),
            CliError::Image(e) => Some(e),
            CliError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShadeError> for CliError {
    fn from(e: ShadeError) -> Self {
        CliError::Shade(e)
    }
}

impl From<image::ImageError> for CliError {
    fn from(e: image::ImageError) -> Self {
        CliError::Image(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}
