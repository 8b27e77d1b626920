//! Configuration types for PDF-to-PNG conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. There is no configuration file; the
//! CLI maps its flags onto the builder.

use crate::error::Pdf2PngError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// Resolution used when no DPI is given.
pub const DEFAULT_DPI: u32 = 300;

/// Rasterizer invoked when no program is given.
pub const DEFAULT_RASTERIZER: &str = "pdftoppm";

/// Highest accepted DPI. pdftoppm itself accepts more, but a 2400 DPI A4 page
/// is already ~20k × 28k pixels.
pub const MAX_DPI: u32 = 2400;

/// Configuration for a PDF-to-PNG conversion.
///
/// # Example
/// ```rust
/// use pdf2png::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .dpi(150)
///     .output_root("/tmp/pages")
///     .build()
///     .unwrap();
/// assert_eq!(config.dpi, 150);
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Rendering DPI passed to the rasterizer (`-r`). Default: 300.
    pub dpi: u32,

    /// Name or path of the rasterizer program. Default: `pdftoppm`.
    ///
    /// Any program with the same command-line contract
    /// (`-png -r <dpi> <pdf> <prefix>`) can be substituted.
    pub rasterizer: String,

    /// Directory in which the per-document output directory is created.
    /// `None` means the current working directory.
    pub output_root: Option<PathBuf>,

    /// Remove numeric pages (`000.png`, `001.png`, …) left over from a
    /// previous run before rasterizing. Default: false.
    pub clean: bool,

    /// Receives status events (rasterizer start, each rename, completion).
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            rasterizer: DEFAULT_RASTERIZER.to_string(),
            output_root: None,
            clean: false,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("dpi", &self.dpi)
            .field("rasterizer", &self.rasterizer)
            .field("output_root", &self.output_root)
            .field("clean", &self.clean)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ConversionProgressCallback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    pub fn rasterizer(mut self, program: impl Into<String>) -> Self {
        self.config.rasterizer = program.into();
        self
    }

    pub fn output_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_root = Some(dir.into());
        self
    }

    pub fn clean(mut self, v: bool) -> Self {
        self.config.clean = v;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Pdf2PngError> {
        let c = &self.config;
        if c.dpi == 0 || c.dpi > MAX_DPI {
            return Err(Pdf2PngError::InvalidConfig(format!(
                "DPI must be 1–{MAX_DPI}, got {}",
                c.dpi
            )));
        }
        if c.rasterizer.trim().is_empty() {
            return Err(Pdf2PngError::InvalidConfig(
                "Rasterizer program must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}
