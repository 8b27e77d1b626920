//! Page rasterization via an external program.
//!
//! The crate never decodes PDF content itself. A [`Rasterizer`] turns a PDF
//! into one PNG per page and reports the files it produced; the default
//! [`PdftoppmRasterizer`] shells out to poppler's `pdftoppm`. The call is
//! synchronous and has no timeout: a hung rasterizer blocks the conversion.

use crate::error::Pdf2PngError;
use crate::pipeline::discover;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// What to rasterize and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterRequest {
    pub pdf_path: PathBuf,
    pub dpi: u32,
    /// `<output_dir>/<base_name>`; pages land at `<prefix>-<n>.png`.
    pub output_prefix: PathBuf,
}

/// A PDF page rasterizer.
pub trait Rasterizer {
    /// Program name, for logs and the conversion summary.
    fn program(&self) -> &str;

    /// Render every page of `request.pdf_path` and return the produced files
    /// sorted ascending by file name.
    fn rasterize(&self, request: &RasterRequest) -> Result<Vec<PathBuf>, Pdf2PngError>;
}

/// Runs a `pdftoppm`-compatible program:
/// `<program> -png -r <dpi> <pdf> <prefix>`.
#[derive(Debug, Clone)]
pub struct PdftoppmRasterizer {
    program: String,
}

impl PdftoppmRasterizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Command-line arguments for `request`, program name excluded.
    pub fn args(request: &RasterRequest) -> Vec<OsString> {
        vec![
            OsString::from("-png"),
            OsString::from("-r"),
            OsString::from(request.dpi.to_string()),
            request.pdf_path.clone().into_os_string(),
            request.output_prefix.clone().into_os_string(),
        ]
    }

    fn run(&self, request: &RasterRequest) -> Result<(), Pdf2PngError> {
        let args = Self::args(request);
        debug!("Running {} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Pdf2PngError::RasterizerUnavailable {
                program: self.program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(Pdf2PngError::ConversionFailed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr,
            });
        }

        if !stderr.is_empty() {
            warn!("{} reported: {}", self.program, stderr);
        }
        Ok(())
    }
}

impl Default for PdftoppmRasterizer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_RASTERIZER)
    }
}

impl Rasterizer for PdftoppmRasterizer {
    fn program(&self) -> &str {
        &self.program
    }

    fn rasterize(&self, request: &RasterRequest) -> Result<Vec<PathBuf>, Pdf2PngError> {
        info!(
            "Rasterizing {} at {} DPI with {}",
            request.pdf_path.display(),
            request.dpi,
            self.program
        );
        self.run(request)?;
        discover::discover_pages(&request.output_prefix)
    }
}

/// Convenience for callers holding only a path.
pub fn request_for(pdf_path: &Path, dpi: u32, output_prefix: &Path) -> RasterRequest {
    RasterRequest {
        pdf_path: pdf_path.to_path_buf(),
        dpi,
        output_prefix: output_prefix.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> RasterRequest {
        request_for(Path::new("in/report.pdf"), 300, Path::new("report/report"))
    }

    #[test]
    fn args_follow_pdftoppm_contract() {
        let args = PdftoppmRasterizer::args(&sample_request());
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, vec!["-png", "-r", "300", "in/report.pdf", "report/report"]);
    }

    #[test]
    fn default_program_is_pdftoppm() {
        assert_eq!(PdftoppmRasterizer::default().program(), "pdftoppm");
    }

    #[test]
    fn missing_program_is_unavailable() {
        let r = PdftoppmRasterizer::new("pdf2png-no-such-rasterizer-binary");
        let err = r.rasterize(&sample_request()).unwrap_err();
        assert!(
            matches!(err, Pdf2PngError::RasterizerUnavailable { .. }),
            "got: {err:?}"
        );
        assert!(err.is_rasterizer_failure());
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_conversion_failure() {
        let r = PdftoppmRasterizer::new("false");
        match r.rasterize(&sample_request()).unwrap_err() {
            Pdf2PngError::ConversionFailed { program, code, .. } => {
                assert_eq!(program, "false");
                assert_eq!(code, Some(1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
