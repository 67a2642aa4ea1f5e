#![forbid(unsafe_code)]

use crate::error::Error;
use nix::errno::Errno;
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use std::path::PathBuf;
use tracing::trace;

/// The operating system's process table, seen through the three operations
/// the watchdog needs.
pub trait ProcessTable: Send + Sync {
    /// Every pid currently listed, in table order. Entries that are not
    /// valid pids are skipped.
    fn pids(&self) -> Result<Box<dyn Iterator<Item = Pid> + '_>, Error>;

    /// Raw `cmdline` bytes of `pid`, or `None` when they cannot be read
    /// (gone, permission denied, any I/O failure).
    fn cmdline(&self, pid: Pid) -> Option<Vec<u8>>;

    /// Send SIGKILL to `pid`.
    fn kill(&self, pid: Pid) -> Result<(), Errno>;
}

/// Process table backed by procfs.
#[derive(Debug, Clone)]
pub struct ProcfsTable {
    root: PathBuf,
}

impl ProcfsTable {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for ProcfsTable {
    fn default() -> Self {
        Self::new("/proc")
    }
}

impl ProcessTable for ProcfsTable {
    fn pids(&self) -> Result<Box<dyn Iterator<Item = Pid> + '_>, Error> {
        let processes = procfs::process::all_processes_with_root(&self.root)?;
        Ok(Box::new(processes.filter_map(|process| match process {
            Ok(process) if process.pid > 0 => Some(Pid::from_raw(process.pid)),
            Ok(_) => None,
            Err(err) => {
                trace!(?err, "skipping process table entry");
                None
            }
        })))
    }

    fn cmdline(&self, pid: Pid) -> Option<Vec<u8>> {
        let path = self.root.join(pid.to_string()).join("cmdline");
        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                trace!(%pid, ?err, "cmdline unreadable");
                None
            }
        }
    }

    fn kill(&self, pid: Pid) -> Result<(), Errno> {
        kill(pid, Signal::SIGKILL)
    }
}
