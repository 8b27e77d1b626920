//! Conversion entry points.
//!
//! A conversion is a straight line: ensure the output directory, run the
//! rasterizer, discover what it wrote, rename into `NNN.png`. Any failure
//! ends the run with a [`Pdf2PngError`]; nothing is rolled back, so a failed
//! run may leave a partially filled output directory behind.

use crate::config::ConversionConfig;
use crate::error::Pdf2PngError;
use crate::output::ConversionOutput;
use crate::pipeline::input::PdfInput;
use crate::pipeline::rasterize::{request_for, PdftoppmRasterizer, Rasterizer};
use crate::pipeline::rename;
use crate::progress::{ConversionProgressCallback, NoopProgressCallback};
use std::path::PathBuf;
use tracing::{info, warn};

/// Convert a validated PDF with the rasterizer program named in `config`.
///
/// # Example
/// ```rust,no_run
/// use pdf2png::{convert, ConversionConfig, PdfInput};
///
/// let input = PdfInput::new("report.pdf")?;
/// let output = convert(&input, &ConversionConfig::default())?;
/// for page in &output.pages {
///     println!("{}", page.target.display());
/// }
/// # Ok::<(), pdf2png::Pdf2PngError>(())
/// ```
pub fn convert(
    input: &PdfInput,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Pdf2PngError> {
    let rasterizer = PdftoppmRasterizer::new(config.rasterizer.clone());
    convert_with(&rasterizer, input, config)
}

/// Validate `path` and convert it. Shorthand for [`PdfInput::new`] followed
/// by [`convert`].
pub fn convert_path(
    path: impl Into<PathBuf>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Pdf2PngError> {
    let input = PdfInput::new(path)?;
    convert(&input, config)
}

/// Convert using a caller-supplied [`Rasterizer`].
///
/// `config.rasterizer` is ignored; everything else applies.
pub fn convert_with(
    rasterizer: &dyn Rasterizer,
    input: &PdfInput,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Pdf2PngError> {
    let noop = NoopProgressCallback;
    let progress: &dyn ConversionProgressCallback =
        config.progress_callback.as_deref().unwrap_or(&noop);

    // ── 1. Output directory ──────────────────────────────────────────────
    let output_dir = input.output_dir(config.output_root.as_deref());
    std::fs::create_dir_all(&output_dir).map_err(|source| Pdf2PngError::OutputDirFailed {
        path: output_dir.clone(),
        source,
    })?;

    let removed = if config.clean {
        rename::remove_numbered_pages(&output_dir)?
    } else {
        Vec::new()
    };

    progress.on_conversion_start(input.path(), &output_dir);

    // ── 2. Rasterize + 3. discover ───────────────────────────────────────
    let request = request_for(input.path(), config.dpi, &input.output_prefix(&output_dir));
    progress.on_rasterize_start(rasterizer.program(), config.dpi);
    let generated = rasterizer.rasterize(&request)?;

    if generated.is_empty() {
        warn!(
            "{} produced no pages for {}",
            rasterizer.program(),
            input.path().display()
        );
    }
    progress.on_rasterize_complete(generated.len());

    // ── 4. Rename ────────────────────────────────────────────────────────
    let pages = rename::rename_pages(&output_dir, &generated, progress)?;
    progress.on_conversion_complete(pages.len());

    info!(
        "Converted {} into {} page(s) under {}",
        input.path().display(),
        pages.len(),
        output_dir.display()
    );

    Ok(ConversionOutput {
        input: input.path().to_path_buf(),
        output_dir,
        dpi: config.dpi,
        rasterizer: rasterizer.program().to_string(),
        pages,
        removed,
    })
}
