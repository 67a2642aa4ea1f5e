use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Audit {
    /// Append-only sink receiving one line per audit record. The kernel
    /// log by default.
    pub sink: PathBuf,

    /// Prefix written in front of every record.
    pub tag: String,
}

impl Default for Audit {
    fn default() -> Self {
        Self {
            sink: PathBuf::from("/dev/kmsg"),
            tag: "snap-reaper".to_owned(),
        }
    }
}
