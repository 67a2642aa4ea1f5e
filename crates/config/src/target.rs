use serde::{Deserialize, Serialize};

/// Signature of the Samsung snap cache service.
pub const DEFAULT_SIGNATURE: &str = "vendor.samsung.hardware.snap-service";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Target {
    /// Text searched for in every process's command line. Matching is
    /// case-sensitive and unanchored: a process matches when this string
    /// appears anywhere in its space-joined arguments.
    pub signature: String,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            signature: DEFAULT_SIGNATURE.to_owned(),
        }
    }
}
