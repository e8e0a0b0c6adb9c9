//! Scan service - find tagged markers in source trees

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::domain::result::Result;
use crate::domain::{extract_annotations, Annotation, AnnotationTag, Severity};

/// Scan service
pub struct ScanService {
    config: Config,
}

impl ScanService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scan a file or a directory tree
    ///
    /// A file named directly is always scanned. Inside a directory, only files
    /// with a configured extension are read and ignored directories are not
    /// entered. Symlinks are followed. Files that cannot be read as UTF-8
    /// text, dangling links and link loops are counted as skipped.
    pub fn scan(&self, root: &Path) -> Result<ScanReport> {
        // Surface a bad root as an error rather than an empty report
        let root_meta = std::fs::metadata(root)?;

        let mut report = ScanReport {
            root: root.to_path_buf(),
            files_scanned: 0,
            files_skipped: 0,
            annotations: Vec::new(),
        };

        if root_meta.is_file() {
            self.scan_file(root, root, &mut report);
            return Ok(report);
        }

        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    report.files_skipped += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let accepted = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| self.config.accepts_extension(ext));
            if !accepted {
                continue;
            }

            let display = entry.path().strip_prefix(root).unwrap_or(entry.path());
            self.scan_file(entry.path(), display, &mut report);
        }

        report.annotations.sort_by(|a, b| a.path.cmp(&b.path).then(a.line.cmp(&b.line)));
        tracing::debug!(
            files = report.files_scanned,
            skipped = report.files_skipped,
            found = report.annotations.len(),
            "scan finished"
        );
        Ok(report)
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.config.is_ignored_dir(name))
    }

    fn scan_file(&self, path: &Path, display: &Path, report: &mut ScanReport) {
        let content = match std::fs::read(path).map(String::from_utf8) {
            Ok(Ok(text)) => text,
            Ok(Err(_)) => {
                tracing::debug!(path = %path.display(), "skipping non UTF-8 file");
                report.files_skipped += 1;
                return;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                report.files_skipped += 1;
                return;
            }
        };

        report.files_scanned += 1;
        report.annotations.extend(extract_annotations(display, &content));
    }
}

/// Result of a scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub files_scanned: usize,
    pub files_skipped: usize,
    /// Sorted by path, then line
    pub annotations: Vec<Annotation>,
}

impl ScanReport {
    /// Number of annotations per tag
    pub fn counts(&self) -> BTreeMap<AnnotationTag, usize> {
        let mut counts = BTreeMap::new();
        for annotation in &self.annotations {
            *counts.entry(annotation.tag.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Keep only annotations with one of `tags`; an empty list keeps everything
    pub fn filter(mut self, tags: &[AnnotationTag]) -> Self {
        if !tags.is_empty() {
            self.annotations.retain(|a| tags.contains(&a.tag));
        }
        self
    }

    /// Highest severity among the annotations, if any
    pub fn max_severity(&self) -> Option<Severity> {
        self.annotations.iter().map(|a| a.tag.severity()).max()
    }

    /// True when any annotation is at or above `threshold`
    pub fn exceeds(&self, threshold: Severity) -> bool {
        self.max_severity().is_some_and(|found| found >= threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn report_with(tags: &[AnnotationTag]) -> ScanReport {
        ScanReport {
            root: PathBuf::from("."),
            files_scanned: 1,
            files_skipped: 0,
            annotations: tags
                .iter()
                .enumerate()
                .map(|(idx, tag)| Annotation {
                    path: PathBuf::from("a.rs"),
                    line: idx + 1,
                    tag: tag.clone(),
                    text: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_scan_single_file_ignores_extension_filter() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "//;@TODO: write docs\n").unwrap();

        let report = ScanService::new(Config::default()).scan(&file).unwrap();
        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.annotations.len(), 1);
        assert_eq!(report.annotations[0].tag, AnnotationTag::Todo);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = ScanService::new(Config::default()).scan(&dir.path().join("nope"));
        assert!(result.is_err());
    }

    #[test]
    fn test_counts_filter_and_severity() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("a.rs"),
            "//;@TODO: one\n//;@TODO: two\n//;@NOTE: three\n",
        )
        .unwrap();

        let report = ScanService::new(Config::default()).scan(dir.path()).unwrap();
        let counts = report.counts();
        assert_eq!(counts[&AnnotationTag::Todo], 2);
        assert_eq!(counts[&AnnotationTag::Note], 1);
        assert_eq!(report.max_severity(), Some(Severity::Warning));

        let notes = report.filter(&[AnnotationTag::Note]);
        assert_eq!(notes.annotations.len(), 1);
        assert_eq!(notes.max_severity(), Some(Severity::Info));
    }

    #[test]
    fn test_exceeds_at_equal_severity() {
        let report = report_with(&[AnnotationTag::Note, AnnotationTag::Todo]);
        assert!(report.exceeds(Severity::Warning));
        assert!(report.exceeds(Severity::Info));
    }

    #[test]
    fn test_lower_severity_does_not_exceed() {
        let report = report_with(&[AnnotationTag::Todo, AnnotationTag::Optimize]);
        assert!(!report.exceeds(Severity::Critical));
    }

    #[test]
    fn test_empty_report_never_exceeds() {
        let report = report_with(&[]);
        assert!(!report.exceeds(Severity::Info));
        assert!(!report.exceeds(Severity::Critical));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_scanned() {
        let target_dir = TempDir::new().unwrap();
        let target = target_dir.path().join("real.rs");
        std::fs::write(&target, "//;@TODO: x\n").unwrap();

        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.rs")).unwrap();

        let report = ScanService::new(Config::default()).scan(dir.path()).unwrap();
        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.files_skipped, 0);
        assert_eq!(report.annotations.len(), 1);
        assert_eq!(report.annotations[0].path, PathBuf::from("link.rs"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_counted_as_skipped() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.rs"), dir.path().join("link.rs")).unwrap();

        let report = ScanService::new(Config::default()).scan(dir.path()).unwrap();
        assert_eq!(report.files_scanned, 0);
        assert_eq!(report.files_skipped, 1);
    }
}
