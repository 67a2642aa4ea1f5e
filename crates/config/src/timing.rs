use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::time::Duration;

/// Timing knobs of the detection loop. All values are **measured in
/// milliseconds**.
///
/// These were picked empirically on devices that publish `/proc/<pid>`
/// before its `cmdline` is filled in. They are not load-bearing for
/// correctness: the backstop scan catches anything a short settle delay
/// misses.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Timing {
    /// Wait before reading the command line of a process announced by a
    /// change notification.
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub settle_delay: Duration,

    /// Sleep between polls when no notification is queued.
    ///
    /// ## Note
    ///
    /// Must be non-zero, otherwise the idle path spins.
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub idle_backoff: Duration,

    /// Minimum time between backstop scans while notifications are quiet.
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub idle_rescan: Duration,

    /// Minimum time between backstop scans right after a notification batch.
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub event_rescan: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(30),
            idle_backoff: Duration::from_millis(100),
            idle_rescan: Duration::from_millis(3000),
            event_rescan: Duration::from_millis(1000),
        }
    }
}
