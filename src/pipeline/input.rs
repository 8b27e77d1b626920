//! Input validation and output layout.
//!
//! A [`PdfInput`] can only be constructed for a path that exists and ends in
//! `.pdf` (any case), so the conversion entry points never see an unchecked
//! path. Both checks run before anything touches the filesystem.

use crate::error::Pdf2PngError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A validated PDF input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfInput {
    path: PathBuf,
    base_name: String,
}

impl PdfInput {
    /// Validate `path`: it must exist, then it must end in `.pdf`.
    ///
    /// The existence check comes first, so a missing `notes.txt` reports
    /// [`Pdf2PngError::FileNotFound`] rather than [`Pdf2PngError::NotAPdf`].
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, Pdf2PngError> {
        let path = path.into();

        if !path.exists() {
            return Err(Pdf2PngError::FileNotFound { path });
        }

        if !has_pdf_extension(&path) {
            return Err(Pdf2PngError::NotAPdf { path });
        }

        let base_name = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => return Err(Pdf2PngError::NotAPdf { path }),
        };

        debug!("Accepted PDF input: {} (base name '{}')", path.display(), base_name);
        Ok(Self { path, base_name })
    }

    /// The path as given by the caller.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directory and extension (`reports/q3.pdf` → `q3`).
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Per-document output directory: `<root>/<base_name>`, or just
    /// `<base_name>` (relative to the working directory) without a root.
    pub fn output_dir(&self, root: Option<&Path>) -> PathBuf {
        match root {
            Some(root) => root.join(&self.base_name),
            None => PathBuf::from(&self.base_name),
        }
    }

    /// Prefix handed to the rasterizer: `<output_dir>/<base_name>`.
    pub fn output_prefix(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.base_name)
    }
}

/// Case-insensitive `.pdf` suffix check on the whole path string.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".pdf")
}
