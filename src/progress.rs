//! Progress-callback trait for conversion events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as the pipeline runs. The CLI uses it to print the
//! `Renamed … -> …` status lines and to drive a spinner while the
//! rasterizer is busy; the library itself never writes to stdout.
//!
//! # Example
//!
//! ```rust
//! use pdf2png::{ConversionConfig, ConversionProgressCallback, RenamedPage};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     renamed: AtomicUsize,
//! }
//!
//! impl ConversionProgressCallback for CountingCallback {
//!     fn on_page_renamed(&self, page: &RenamedPage) {
//!         self.renamed.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("{} -> {}", page.source_name(), page.target_name());
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { renamed: AtomicUsize::new(0) });
//!
//! let config = ConversionConfig::builder()
//!     .progress_callback(counter as Arc<dyn ConversionProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use crate::output::RenamedPage;
use std::path::Path;
use std::sync::Arc;

/// Called by the conversion pipeline at each step.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Events arrive in pipeline order on the calling
/// thread.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once the input is accepted and the output directory exists.
    fn on_conversion_start(&self, input: &Path, output_dir: &Path) {
        let _ = (input, output_dir);
    }

    /// Called just before the rasterizer process is launched.
    fn on_rasterize_start(&self, program: &str, dpi: u32) {
        let _ = (program, dpi);
    }

    /// Called after the rasterizer exited successfully and its output was
    /// discovered.
    ///
    /// # Arguments
    /// * `page_count` — number of generated page files found
    fn on_rasterize_complete(&self, page_count: usize) {
        let _ = page_count;
    }

    /// Called after each successful rename, in increasing index order.
    fn on_page_renamed(&self, page: &RenamedPage) {
        let _ = page;
    }

    /// Called once after every page has been renamed.
    fn on_conversion_complete(&self, page_count: usize) {
        let _ = page_count;
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingCallback {
        events: Mutex<Vec<String>>,
    }

    impl ConversionProgressCallback for RecordingCallback {
        fn on_rasterize_start(&self, program: &str, dpi: u32) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {program} {dpi}"));
        }

        fn on_page_renamed(&self, page: &RenamedPage) {
            self.events.lock().unwrap().push(format!(
                "{} -> {}",
                page.source_name(),
                page.target_name()
            ));
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        let page = RenamedPage::new(0, PathBuf::from("r/r-1.png"), PathBuf::from("r/000.png"));
        cb.on_conversion_start(Path::new("r.pdf"), Path::new("r"));
        cb.on_rasterize_start("pdftoppm", 300);
        cb.on_rasterize_complete(1);
        cb.on_page_renamed(&page);
        cb.on_conversion_complete(1);
    }

    #[test]
    fn overridden_methods_receive_events() {
        let cb = RecordingCallback::default();
        cb.on_rasterize_start("pdftoppm", 150);
        cb.on_rasterize_complete(2);
        cb.on_page_renamed(&RenamedPage::new(
            1,
            PathBuf::from("doc/doc-2.png"),
            PathBuf::from("doc/001.png"),
        ));

        let events = cb.events.lock().unwrap();
        assert_eq!(
            *events,
            vec!["start pdftoppm 150".to_string(), "doc-2.png -> 001.png".to_string()]
        );
    }
}
