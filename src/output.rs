//! Result types returned by a successful conversion.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One generated page moved to its final, zero-padded name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedPage {
    /// 0-based position in the final sequence.
    pub index: usize,
    /// Path the rasterizer wrote (e.g. `report/report-1.png`).
    pub source: PathBuf,
    /// Final path (e.g. `report/000.png`).
    pub target: PathBuf,
}

impl RenamedPage {
    pub fn new(index: usize, source: PathBuf, target: PathBuf) -> Self {
        Self {
            index,
            source,
            target,
        }
    }

    /// Base name of the rasterizer's file.
    pub fn source_name(&self) -> String {
        file_name_lossy(&self.source)
    }

    /// Base name of the final file.
    pub fn target_name(&self) -> String {
        file_name_lossy(&self.target)
    }
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The PDF that was converted.
    pub input: PathBuf,
    /// Directory holding `000.png`, `001.png`, …
    pub output_dir: PathBuf,
    /// Resolution the pages were rendered at.
    pub dpi: u32,
    /// Rasterizer program that produced the pages.
    pub rasterizer: String,
    /// Pages in final order.
    pub pages: Vec<RenamedPage>,
    /// Stale pages removed before rasterizing (only with `clean`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removed: Vec<PathBuf>,
}

impl ConversionOutput {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_base_names() {
        let page = RenamedPage::new(
            2,
            PathBuf::from("report/report-3.png"),
            PathBuf::from("report/002.png"),
        );
        assert_eq!(page.source_name(), "report-3.png");
        assert_eq!(page.target_name(), "002.png");
    }

    #[test]
    fn output_serialises_to_json() {
        let out = ConversionOutput {
            input: PathBuf::from("report.pdf"),
            output_dir: PathBuf::from("report"),
            dpi: 300,
            rasterizer: "pdftoppm".into(),
            pages: vec![RenamedPage::new(
                0,
                PathBuf::from("report/report-1.png"),
                PathBuf::from("report/000.png"),
            )],
            removed: vec![],
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["dpi"], 300);
        assert_eq!(json["pages"][0]["target"], "report/000.png");
        assert!(json.get("removed").is_none());
        assert_eq!(out.page_count(), 1);
    }
}
