use crate::domain::parse_pid;
use bitflags::bitflags;
use nix::unistd::Pid;
use std::ffi::OsString;
use std::fmt;

bitflags! {
    /// Kinds of change reported on the process table root.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChangeKind: u8 {
        /// Entry created.
        const CREATED = 1 << 0;
        /// Entry moved or renamed into the directory.
        const MOVED_IN = 1 << 1;
        /// Attribute changed on an existing entry. Some kernels announce
        /// new processes this way instead of with a create.
        const ATTRIB = 1 << 2;
    }
}

/// A single change notification. Lives for one dispatch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    /// Raw mask as reported by the OS, kept for the audit trail.
    pub raw_mask: u32,
    pub name: Option<OsString>,
}

impl ChangeEvent {
    pub fn new(kind: ChangeKind, raw_mask: u32, name: Option<OsString>) -> Self {
        Self {
            kind,
            raw_mask,
            name,
        }
    }

    /// The pid this event names, if its name is purely numeric.
    pub fn candidate_pid(&self) -> Option<Pid> {
        self.name.as_deref().and_then(parse_pid)
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mask={:#x}", self.raw_mask)?;
        match &self.name {
            Some(name) => write!(f, " name={}", name.to_string_lossy()),
            None => f.write_str(" (no name)"),
        }
    }
}
