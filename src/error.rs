//! Error types for the pdf2png library.
//!
//! Every failure is fatal for the run: there are no retries and no partial
//! results. [`Pdf2PngError`] is returned from [`crate::convert()`] and
//! [`crate::PdfInput::new`]; mapping to console messages and exit codes is
//! left to the caller (the `pdf2png` binary does it in `main`).

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2png library.
#[derive(Debug, Error)]
pub enum Pdf2PngError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("File '{}' not found.", .path.display())]
    FileNotFound { path: PathBuf },

    /// Input path does not carry a `.pdf` extension.
    #[error("Please provide a PDF file (got '{}').", .path.display())]
    NotAPdf { path: PathBuf },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Filesystem errors ─────────────────────────────────────────────────
    /// The per-document output directory could not be created.
    #[error("Failed to create output directory '{}': {source}", .path.display())]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stale pages from a previous run could not be removed.
    #[error("Failed to remove stale page '{}': {source}", .path.display())]
    CleanupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Rasterizer errors ─────────────────────────────────────────────────
    /// The rasterizer program could not be started at all.
    #[error("Could not run '{program}': {source}\nIs poppler-utils installed and on PATH?")]
    RasterizerUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The rasterizer ran but exited unsuccessfully.
    #[error("{}", conversion_failed_message(.program, .code, .stderr))]
    ConversionFailed {
        program: String,
        /// Exit code, `None` when the process was killed by a signal.
        code: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The output directory could not be listed after rasterization.
    #[error("Failed to list generated pages in '{}': {source}", .dir.display())]
    DiscoveryFailed {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Rename errors ─────────────────────────────────────────────────────
    /// A generated page could not be moved to its final name.
    #[error("Failed to rename '{}' to '{}': {source}", .from.display(), .to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Pdf2PngError {
    /// True for failures of the external rasterizer process itself.
    pub fn is_rasterizer_failure(&self) -> bool {
        matches!(
            self,
            Pdf2PngError::ConversionFailed { .. } | Pdf2PngError::RasterizerUnavailable { .. }
        )
    }

    /// True for failures detected before any side effect was attempted.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Pdf2PngError::FileNotFound { .. } | Pdf2PngError::NotAPdf { .. }
        )
    }
}

fn conversion_failed_message(program: &str, code: &Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(c) => format!("exit status {c}"),
        None => "terminated by signal".to_string(),
    };
    if stderr.is_empty() {
        format!("Command '{program}' returned non-zero {status}")
    } else {
        format!("Command '{program}' returned non-zero {status}: {stderr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_failed_display_with_stderr() {
        let e = Pdf2PngError::ConversionFailed {
            program: "pdftoppm".into(),
            code: Some(99),
            stderr: "Syntax Error: Couldn't find trailer dictionary".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("pdftoppm"), "got: {msg}");
        assert!(msg.contains("exit status 99"), "got: {msg}");
        assert!(msg.contains("trailer dictionary"), "got: {msg}");
    }

    #[test]
    fn conversion_failed_display_signal() {
        let e = Pdf2PngError::ConversionFailed {
            program: "pdftoppm".into(),
            code: None,
            stderr: String::new(),
        };
        assert!(e.to_string().contains("terminated by signal"));
        assert!(!e.to_string().ends_with(": "));
    }

    #[test]
    fn file_not_found_display() {
        let e = Pdf2PngError::FileNotFound {
            path: PathBuf::from("missing.pdf"),
        };
        assert_eq!(e.to_string(), "File 'missing.pdf' not found.");
    }

    #[test]
    fn classification() {
        let unavailable = Pdf2PngError::RasterizerUnavailable {
            program: "pdftoppm".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(unavailable.is_rasterizer_failure());
        assert!(!unavailable.is_input_error());

        let not_pdf = Pdf2PngError::NotAPdf {
            path: PathBuf::from("notes.txt"),
        };
        assert!(not_pdf.is_input_error());
        assert!(!not_pdf.is_rasterizer_failure());

        let rename = Pdf2PngError::RenameFailed {
            from: PathBuf::from("a/a-1.png"),
            to: PathBuf::from("a/000.png"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!rename.is_rasterizer_failure());
        assert!(!rename.is_input_error());
    }
}
