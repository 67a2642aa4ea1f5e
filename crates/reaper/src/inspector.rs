use crate::clock::Clock;
use crate::domain::{Descriptor, TargetSignature};
use crate::table::ProcessTable;
use nix::unistd::Pid;
use std::time::Duration;
use tracing::trace;

/// Decides whether a process is the target.
///
/// There are two calling contracts over the same logic. The full scan
/// inspects immediately, since throughput matters and a process that is
/// too young to read will be caught by a later scan. A pid announced by a
/// change notification is inspected after a short settle delay, because
/// some kernels publish `/proc/<pid>` before its `cmdline` is filled in.
#[derive(Clone, Copy)]
pub struct ProcessInspector<'a> {
    table: &'a dyn ProcessTable,
    clock: &'a dyn Clock,
    signature: &'a TargetSignature,
}

impl<'a> ProcessInspector<'a> {
    pub fn new(
        table: &'a dyn ProcessTable,
        clock: &'a dyn Clock,
        signature: &'a TargetSignature,
    ) -> Self {
        Self {
            table,
            clock,
            signature,
        }
    }

    /// Return the descriptor of `pid` if it matches the signature.
    ///
    /// With `settle` set, the read happens after sleeping that long. Any
    /// failure to read, and an empty read, count as "no match".
    pub fn inspect(&self, pid: Pid, settle: Option<Duration>) -> Option<Descriptor> {
        if let Some(delay) = settle {
            self.clock.sleep(delay);
        }
        let raw = self.table.cmdline(pid)?;
        let descriptor = Descriptor::from_raw(&raw)?;
        if self.signature.is_match(&descriptor) {
            trace!(%pid, %descriptor, "process matches target signature");
            Some(descriptor)
        } else {
            None
        }
    }

    /// Immediate inspection.
    pub fn matches(&self, pid: Pid) -> bool {
        self.inspect(pid, None).is_some()
    }
}
