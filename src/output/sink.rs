//! Destinations for rendered reports.

use crate::BoxError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Accepts a finished document under a name. Any error aborts the run.
pub trait ReportSink {
    fn write_report(&mut self, name: &str, content: &str) -> Result<(), BoxError>;
}

/// Writes each report as a file in one directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Use `dir` as output directory, creating it if missing.
    pub fn new(dir: impl AsRef<Path>) -> Result<FileSink, BoxError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)
            .map_err(|e| format!("Error creating output dir {}: {e}", dir.display()))?;
        Ok(FileSink { dir })
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl ReportSink for FileSink {
    fn write_report(&mut self, name: &str, content: &str) -> Result<(), BoxError> {
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(format!("Invalid report name: '{name}'").into());
        }
        let path = self.path_for(name);
        std::fs::write(&path, content)
            .map_err(|e| format!("Error writing {}: {e}", path.display()))?;
        Ok(())
    }
}

/// Keeps reports in memory, keyed by name.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub reports: BTreeMap<String, String>,
}

impl ReportSink for MemorySink {
    fn write_report(&mut self, name: &str, content: &str) -> Result<(), BoxError> {
        self.reports.insert(name.to_string(), content.to_string());
        Ok(())
    }
}
