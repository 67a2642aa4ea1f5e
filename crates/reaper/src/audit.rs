//! Best-effort audit trail written to the kernel log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Write-or-drop sink for human-readable audit records.
///
/// `emit` cannot fail from the caller's point of view. Detection must keep
/// running when logging is unavailable.
pub trait AuditSink: Send + Sync {
    fn emit(&self, record: &str);
}

/// Appends tagged lines to `/dev/kmsg` (or any other append-only file).
///
/// The sink is opened, written and closed for every record. Nothing is held
/// open between records and nothing is buffered.
#[derive(Debug, Clone)]
pub struct KmsgSink {
    path: PathBuf,
    tag: String,
}

impl KmsgSink {
    pub fn new(path: impl Into<PathBuf>, tag: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tag: tag.into(),
        }
    }

    pub fn from_config(audit: &config::Audit) -> Self {
        Self::new(audit.sink.clone(), audit.tag.clone())
    }
}

impl AuditSink for KmsgSink {
    fn emit(&self, record: &str) {
        debug!(target: "audit", "{record}");
        let line = format!("{}: {}\n", self.tag, record);
        let written = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .and_then(|mut sink| sink.write_all(line.as_bytes()));
        if let Err(err) = written {
            trace!(?err, path = ?self.path, "audit record dropped");
        }
    }
}
