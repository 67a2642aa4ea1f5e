#![forbid(unsafe_code)]

pub mod audit;
pub mod clock;
pub mod domain;
pub mod engine;
pub mod error;
pub mod inspector;
pub mod run_state;
pub mod scanner;
pub mod table;
pub mod terminator;
pub mod watcher;

pub use audit::{AuditSink, KmsgSink};
pub use clock::{Clock, SystemClock};
pub use domain::{Descriptor, TargetSignature, parse_pid};
pub use engine::{Services, StopReason, Watchdog};
pub use error::Error;
pub use inspector::ProcessInspector;
pub use run_state::RunState;
pub use scanner::{FullScanner, ScanReport};
pub use table::{ProcessTable, ProcfsTable};
pub use terminator::{KillOrigin, KillOutcome, MAX_AUDIT_CMDLINE, Terminator};
pub use watcher::{ChangeEvent, ChangeKind, ChangeWatcher, InotifyWatcher};

pub use nix::errno::Errno;
pub use nix::unistd::Pid;
