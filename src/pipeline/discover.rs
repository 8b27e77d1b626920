//! Discovery of the files the rasterizer produced.
//!
//! pdftoppm names its output `<prefix>-<n>.png`, padding `<n>` to the width
//! of the last page number. This module is the only place that knows about
//! that convention; swap [`PageNaming`] if a rasterizer names pages
//! differently.

use crate::error::Pdf2PngError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Final page names written by a previous run: `000.png`, `001.png`, …
static NUMBERED_PAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}\.png$").unwrap());

/// Matching rule for the rasterizer's per-page output files.
#[derive(Debug, Clone)]
pub struct PageNaming {
    dir: PathBuf,
    pattern: Regex,
}

impl PageNaming {
    /// Rule for files named `<stem>-*.png` next to `prefix`, where `stem` is
    /// the last component of `prefix`.
    pub fn for_prefix(prefix: &Path) -> Result<Self, Pdf2PngError> {
        let stem = prefix
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| {
                Pdf2PngError::InvalidConfig(format!(
                    "Output prefix '{}' has no file name",
                    prefix.display()
                ))
            })?;
        let dir = match prefix.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let pattern = Regex::new(&format!(r"^{}-.*\.png$", regex::escape(&stem)))
            .map_err(|e| Pdf2PngError::InvalidConfig(format!("page pattern: {e}")))?;
        Ok(Self { dir, pattern })
    }

    /// Directory the rasterizer writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether `file_name` (a bare name, not a path) is a generated page.
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }

    /// All generated pages, sorted ascending by file name.
    pub fn discover(&self) -> Result<Vec<PathBuf>, Pdf2PngError> {
        let mut names = list_file_names(&self.dir)?
            .into_iter()
            .filter(|name| self.matches(name))
            .collect::<Vec<_>>();
        names.sort();

        debug!("Discovered {} generated pages in {}", names.len(), self.dir.display());
        Ok(names.into_iter().map(|n| self.dir.join(n)).collect())
    }
}

/// Generated pages for `prefix`, sorted ascending by file name.
pub fn discover_pages(prefix: &Path) -> Result<Vec<PathBuf>, Pdf2PngError> {
    PageNaming::for_prefix(prefix)?.discover()
}

/// Final-form pages (`NNN.png`) already present in `dir`, sorted by name.
pub fn numbered_pages(dir: &Path) -> Result<Vec<PathBuf>, Pdf2PngError> {
    let mut names = list_file_names(dir)?
        .into_iter()
        .filter(|name| NUMBERED_PAGE.is_match(name))
        .collect::<Vec<_>>();
    names.sort();
    Ok(names.into_iter().map(|n| dir.join(n)).collect())
}

/// UTF-8 names of the regular files in `dir`; other entries are skipped.
fn list_file_names(dir: &Path) -> Result<Vec<String>, Pdf2PngError> {
    let discovery_failed = |source| Pdf2PngError::DiscoveryFailed {
        dir: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(discovery_failed)? {
        let entry = entry.map_err(discovery_failed)?;
        if !entry.file_type().map_err(discovery_failed)?.is_file() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn matches_only_prefixed_pngs() {
        let naming = PageNaming::for_prefix(Path::new("report/report")).unwrap();
        assert_eq!(naming.dir(), Path::new("report"));
        assert!(naming.matches("report-1.png"));
        assert!(naming.matches("report-007.png"));
        assert!(naming.matches("report-.png"));
        assert!(!naming.matches("report-1.ppm"));
        assert!(!naming.matches("report1.png"));
        assert!(!naming.matches("other-1.png"));
        assert!(!naming.matches("000.png"));
        assert!(!naming.matches("xreport-1.png"));
    }

    #[test]
    fn regex_metacharacters_in_name_are_literal() {
        let naming = PageNaming::for_prefix(Path::new("a+b (1)/a+b (1)")).unwrap();
        assert!(naming.matches("a+b (1)-1.png"));
        assert!(!naming.matches("aab (1)-1.png"));
    }

    #[test]
    fn bare_prefix_uses_current_dir() {
        let naming = PageNaming::for_prefix(Path::new("report")).unwrap();
        assert_eq!(naming.dir(), Path::new("."));
    }

    #[test]
    fn discover_sorts_lexicographically() {
        let tmp = TempDir::new().unwrap();
        for name in ["doc-10.png", "doc-02.png", "doc-01.png", "notes.txt", "000.png"] {
            touch(tmp.path(), name);
        }
        std::fs::create_dir(tmp.path().join("doc-99.png")).unwrap();

        let found = discover_pages(&tmp.path().join("doc")).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["doc-01.png", "doc-02.png", "doc-10.png"]);
        assert!(found.iter().all(|p| p.starts_with(tmp.path())));
    }

    #[test]
    fn discover_in_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let err = discover_pages(&tmp.path().join("gone").join("gone")).unwrap_err();
        assert!(matches!(err, Pdf2PngError::DiscoveryFailed { .. }));
    }

    #[test]
    fn numbered_pages_ignores_generated_and_foreign_files() {
        let tmp = TempDir::new().unwrap();
        for name in ["000.png", "001.png", "1000.png", "01.png", "doc-1.png", "cover.png"] {
            touch(tmp.path(), name);
        }

        let found = numbered_pages(tmp.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["000.png", "001.png", "1000.png"]);
    }
}
