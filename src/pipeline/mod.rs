//! Pipeline stages for PDF-to-PNG conversion.
//!
//! Each submodule implements exactly one step, so the rasterizer or its
//! output naming can be swapped without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ rasterize ──▶ discover ──▶ rename
//! (.pdf)    (pdftoppm)    (<base>-*.png) (NNN.png)
//! ```
//!
//! 1. [`input`]     — validate the path, derive output directory and prefix
//! 2. [`rasterize`] — run the external rasterizer and wait for it
//! 3. [`discover`]  — find and sort the files it wrote
//! 4. [`rename`]    — move them to the zero-padded final names

pub mod discover;
pub mod input;
pub mod rasterize;
pub mod rename;
