use crate::audit::AuditSink;
use crate::domain::Descriptor;
use crate::table::ProcessTable;
use nix::errno::Errno;
use nix::unistd::Pid;
use std::fmt;
use tracing::{info, warn};

/// Upper bound on the cmdline text quoted in a kill record. `/dev/kmsg`
/// rejects a single write of about 1 KiB or more, and a rejected record is
/// lost.
pub const MAX_AUDIT_CMDLINE: usize = 900;

/// Which detection path found the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOrigin {
    FullScan,
    Notification,
}

impl fmt::Display for KillOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KillOrigin::FullScan => f.write_str("full scan"),
            KillOrigin::Notification => f.write_str("notification"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOutcome {
    Killed,
    Failed(Errno),
}

impl KillOutcome {
    pub fn is_killed(&self) -> bool {
        matches!(self, KillOutcome::Killed)
    }
}

/// Sends SIGKILL and records the outcome in the audit trail.
///
/// Failures are never retried here. A process that already exited is
/// skipped by the next scan, and one that is still alive is tried again.
#[derive(Clone, Copy)]
pub struct Terminator<'a> {
    table: &'a dyn ProcessTable,
    audit: &'a dyn AuditSink,
}

impl<'a> Terminator<'a> {
    pub fn new(table: &'a dyn ProcessTable, audit: &'a dyn AuditSink) -> Self {
        Self { table, audit }
    }

    pub fn kill(&self, pid: Pid, descriptor: &Descriptor, origin: KillOrigin) -> KillOutcome {
        match self.table.kill(pid) {
            Ok(()) => {
                info!(%pid, %origin, "killed matching process");
                let cmdline = descriptor.excerpt(MAX_AUDIT_CMDLINE);
                self.audit
                    .emit(&format!("killed {pid} ({origin}, cmdline: {cmdline})"));
                KillOutcome::Killed
            }
            Err(errno) => {
                warn!(%pid, %origin, %errno, "failed to kill matching process");
                self.audit
                    .emit(&format!("failed to kill {pid} ({origin}): {}", errno.desc()));
                KillOutcome::Failed(errno)
            }
        }
    }
}
