//! Experience Log - append-only record of inputs and feedback
//!
//! Backed by a single JSON file holding the whole log as an array. The file is
//! rewritten in full on every append. Disk failures are logged and swallowed:
//! the in-memory log is always authoritative and may run ahead of the file.
//!
//! The file is not locked. Another process writing the same path can race
//! with [`ExperienceLog::persist`].

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::types::ExperienceRecord;

/// File-backed experience log
#[derive(Debug)]
pub struct ExperienceLog {
    path: PathBuf,
    records: Vec<ExperienceRecord>,
}

impl ExperienceLog {
    /// Open the log at `path`, loading whatever the file holds
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut log = Self {
            path: path.into(),
            records: Vec::new(),
        };
        log.load();
        log
    }

    /// Replace the in-memory log with the file contents.
    ///
    /// A missing file gives an empty log. An unreadable or corrupt file also
    /// gives an empty log, with a warning. Never writes to disk.
    pub fn load(&mut self) -> usize {
        self.records = if self.path.exists() {
            match self.read_file() {
                Ok(records) => {
                    info!("Loaded {} experience records from {}", records.len(), self.path.display());
                    records
                }
                // One record with an unknown feedback label fails the whole
                // array, and the next append overwrites the file.
                Err(e) => {
                    warn!("Failed to load experience: {:#}", e);
                    Vec::new()
                }
            }
        } else {
            debug!("No experience file at {}, starting empty", self.path.display());
            Vec::new()
        };
        self.records.len()
    }

    /// Append a record and write the whole log back to disk
    pub fn append(&mut self, record: ExperienceRecord) {
        info!("Learning from experience: {}", record);
        self.records.push(record);
        self.persist();
    }

    /// Overwrite the backing file with the full log.
    ///
    /// Returns whether the write succeeded. Failure leaves memory untouched.
    pub fn persist(&self) -> bool {
        match self.write_file() {
            Ok(()) => {
                debug!("Saved {} experience records to {}", self.records.len(), self.path.display());
                true
            }
            Err(e) => {
                warn!("Failed to save experience: {:#}", e);
                false
            }
        }
    }

    pub fn records(&self) -> &[ExperienceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // --- File I/O ---

    fn read_file(&self) -> Result<Vec<ExperienceRecord>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn write_file(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        // serde_json's pretty printer indents with two spaces
        let json = serde_json::to_string_pretty(&self.records)
            .context("Failed to serialize experience")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
