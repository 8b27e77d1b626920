//! # pdf2png
//!
//! Turn a PDF into a directory of page images named `000.png`, `001.png`, …
//!
//! Rasterization is delegated to poppler's `pdftoppm` (or any program with
//! the same command line). This crate validates the input, runs the
//! rasterizer, and renames its output into a predictable, zero-padded
//! sequence.
//!
//! ## Pipeline Overview
//!
//! ```text
//! report.pdf
//!  │
//!  ├─ 1. Input      exists? ends in .pdf?  → output dir `report/`
//!  ├─ 2. Rasterize  pdftoppm -png -r 300 report.pdf report/report
//!  ├─ 3. Discover   report/report-1.png, report/report-2.png, … (sorted)
//!  └─ 4. Rename     report/000.png, report/001.png, …
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2png::{convert, ConversionConfig, PdfInput};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let input = PdfInput::new("report.pdf")?;
//!     let config = ConversionConfig::builder().dpi(150).build()?;
//!     let output = convert(&input, &config)?;
//!     eprintln!("{} pages in {}", output.page_count(), output.output_dir.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2png` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, DEFAULT_DPI, DEFAULT_RASTERIZER};
pub use convert::{convert, convert_path, convert_with};
pub use error::Pdf2PngError;
pub use output::{ConversionOutput, RenamedPage};
pub use pipeline::input::PdfInput;
pub use pipeline::rasterize::{PdftoppmRasterizer, RasterRequest, Rasterizer};
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback};
