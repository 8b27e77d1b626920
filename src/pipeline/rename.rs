//! Renaming generated pages into the final `NNN.png` sequence.

use crate::error::Pdf2PngError;
use crate::output::RenamedPage;
use crate::pipeline::discover;
use crate::progress::ConversionProgressCallback;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Final file name for the page at 0-based `index`: `000.png`, `001.png`, …
///
/// Indices past 999 keep every digit (`1000.png`).
pub fn page_file_name(index: usize) -> String {
    format!("{index:03}.png")
}

/// Move `generated` (already in the desired order) to
/// `<output_dir>/000.png`, `<output_dir>/001.png`, … one at a time.
///
/// Existing targets are replaced. The first failing rename aborts the run;
/// pages renamed before it stay renamed.
pub fn rename_pages(
    output_dir: &Path,
    generated: &[PathBuf],
    progress: &dyn ConversionProgressCallback,
) -> Result<Vec<RenamedPage>, Pdf2PngError> {
    let mut renamed = Vec::with_capacity(generated.len());

    for (index, source) in generated.iter().enumerate() {
        let target = output_dir.join(page_file_name(index));
        std::fs::rename(source, &target).map_err(|e| Pdf2PngError::RenameFailed {
            from: source.clone(),
            to: target.clone(),
            source: e,
        })?;

        let page = RenamedPage::new(index, source.clone(), target);
        debug!("Renamed {} -> {}", page.source_name(), page.target_name());
        progress.on_page_renamed(&page);
        renamed.push(page);
    }

    Ok(renamed)
}

/// Delete `NNN.png` pages left in `output_dir` by an earlier run.
///
/// Returns the removed paths. Files that do not look like final pages are
/// left alone.
pub fn remove_numbered_pages(output_dir: &Path) -> Result<Vec<PathBuf>, Pdf2PngError> {
    let stale = discover::numbered_pages(output_dir)?;
    for path in &stale {
        std::fs::remove_file(path).map_err(|source| Pdf2PngError::CleanupFailed {
            path: path.clone(),
            source,
        })?;
    }
    if !stale.is_empty() {
        info!(
            "Removed {} stale page(s) from {}",
            stale.len(),
            output_dir.display()
        );
    }
    Ok(stale)
}
