use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct System {
    /// Root of the process table. Both the full scan and the change
    /// notification watch use it.
    pub proc_root: PathBuf,
}

impl Default for System {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from("/proc"),
        }
    }
}
