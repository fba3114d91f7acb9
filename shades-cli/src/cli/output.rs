//! Output file naming and writing.
//!
//! Each color produces an image and a markdown file sharing one stem.
//! Existing files are never overwritten: the stem gets `_1`, `_2`, ...
//! appended until both names are free.

use std::fs;
use std::path::{Path, PathBuf};

use shades::ShadeBatch;

use super::error::CliError;
use super::render::{SwatchLayout, save_swatch_image};
use super::report::markdown_report;

pub const DEFAULT_STEM: &str = "shades";
pub const IMAGE_EXTENSION: &str = "png";
pub const MARKDOWN_EXTENSION: &str = "md";

/// Where one batch's files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub image: PathBuf,
    pub markdown: PathBuf,
}

impl OutputPaths {
    fn for_stem(directory: &Path, stem: &str) -> Self {
        OutputPaths {
            image: directory.join(format!("{}.{}", stem, IMAGE_EXTENSION)),
            markdown: directory.join(format!("{}.{}", stem, MARKDOWN_EXTENSION)),
        }
    }

    fn taken(&self) -> bool {
        self.image.exists() || self.markdown.exists()
    }
}

/// Pick the first free `stem`, `stem_1`, `stem_2`, ... in `directory`.
///
/// A custom name may carry an extension (`brand.png`); it is dropped so the
/// image and markdown still share a stem.
pub fn resolve_output_paths(directory: &Path, name: Option<&str>) -> OutputPaths {
    let stem = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| {
            Path::new(n)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(n)
                .to_string()
        })
        .unwrap_or_else(|| DEFAULT_STEM.to_string());

    let mut paths = OutputPaths::for_stem(directory, &stem);
    let mut counter = 1;
    while paths.taken() {
        paths = OutputPaths::for_stem(directory, &format!("{}_{}", stem, counter));
        counter += 1;
    }
    paths
}

/// Create `directory` (and parents) if needed.
pub fn ensure_directory(directory: &Path) -> Result<(), CliError> {
    fs::create_dir_all(directory).map_err(|e| CliError::io(directory, e))
}

/// Render and write both files for `batch`. Returns the paths used.
pub fn write_outputs(
    batch: &ShadeBatch,
    layout: &SwatchLayout,
    directory: &Path,
    name: Option<&str>,
) -> Result<OutputPaths, CliError> {
    ensure_directory(directory)?;
    let paths = resolve_output_paths(directory, name);

    save_swatch_image(batch, layout, &paths.image)?;
    fs::write(&paths.markdown, markdown_report(batch))
        .map_err(|e| CliError::io(&paths.markdown, e))?;

    Ok(paths)
}
