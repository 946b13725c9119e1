//! # Export Sink
//!
//! Trait boundary for the storage collaborator that persists export
//! documents. The core hands it `(filename, content)` and turns its
//! success/failure into a notification; the sink owns everything else
//! (paths, encodings, retries it may or may not want).

use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

// =============================================================================
// Export Failure
// =============================================================================

/// Failure surfaced by the storage collaborator.
///
/// Reported once as a notification; the session performs no retry.
#[derive(Debug, Error)]
pub enum ExportFailure {
    /// The underlying write failed.
    #[error("export write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The sink refused the document.
    #[error("export rejected: {reason}")]
    Rejected { reason: String },
}

// =============================================================================
// Export Sink Trait
// =============================================================================

/// Destination for export documents.
///
/// Implementations must be `Send + Sync` so a session embedded in an app
/// shell can share them across callbacks.
pub trait ExportSink: Send + Sync {
    /// Writes one UTF-8 plain-text document. A single attempt; the caller
    /// reports the outcome and never retries.
    fn write(&self, filename: &str, content: &str) -> Result<(), ExportFailure>;
}

// =============================================================================
// Reference Implementations
// =============================================================================

/// Captures writes in memory. Used by tests and useful as a shell stub.
#[derive(Debug, Default)]
pub struct MemorySink {
    writes: Mutex<Vec<(String, String)>>,
    fail_reason: Option<String>,
}

impl MemorySink {
    /// A sink that accepts every write.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that rejects every write with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        MemorySink {
            writes: Mutex::new(Vec::new()),
            fail_reason: Some(reason.into()),
        }
    }

    /// The `(filename, content)` pairs accepted so far.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().expect("sink poisoned").clone()
    }
}

impl ExportSink for MemorySink {
    fn write(&self, filename: &str, content: &str) -> Result<(), ExportFailure> {
        if let Some(reason) = &self.fail_reason {
            return Err(ExportFailure::Rejected {
                reason: reason.clone(),
            });
        }
        self.writes
            .lock()
            .expect("sink poisoned")
            .push((filename.to_string(), content.to_string()));
        Ok(())
    }
}

/// Writes documents as UTF-8 files under a directory.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Creates a sink rooted at `dir`. The directory is created on first
    /// write if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirSink { dir: dir.into() }
    }
}

impl ExportSink for DirSink {
    fn write(&self, filename: &str, content: &str) -> Result<(), ExportFailure> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(filename), content)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
