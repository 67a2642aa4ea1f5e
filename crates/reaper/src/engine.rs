#![forbid(unsafe_code)]

use crate::audit::AuditSink;
use crate::clock::Clock;
use crate::domain::TargetSignature;
use crate::error::Error;
use crate::inspector::ProcessInspector;
use crate::run_state::RunState;
use crate::scanner::{FullScanner, ScanReport};
use crate::table::ProcessTable;
use crate::terminator::{KillOrigin, Terminator};
use crate::watcher::{ChangeEvent, ChangeWatcher};
use config::{Config, Timing};
use nix::unistd::Pid;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// The OS-facing collaborators of the watchdog.
pub struct Services {
    pub table: Box<dyn ProcessTable>,
    pub watcher: Box<dyn ChangeWatcher>,
    pub audit: Box<dyn AuditSink>,
    pub clock: Box<dyn Clock>,
}

/// Why [`Watchdog::run`] returned.
#[derive(Debug)]
pub enum StopReason {
    /// The run flag was cleared, normally by SIGINT or SIGTERM.
    Requested,
    /// Reading change notifications failed for a reason other than "no
    /// data yet".
    WatcherFailed(Error),
}

/// Detection-and-termination loop.
///
/// Change notifications give near-real-time detection of new processes. A
/// full scan of the process table runs once at startup and then as a
/// rate-limited backstop: every `event_rescan` after a notification batch,
/// every `idle_rescan` while the channel is quiet. Both cadences share one
/// timestamp, reset by every scan.
pub struct Watchdog {
    timing: Timing,
    signature: TargetSignature,
    services: Services,
    run_state: RunState,
    last_scan: Option<Instant>,
}

impl Watchdog {
    pub fn new(config: &Config, services: Services, run_state: RunState) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            timing: config.timing.clone(),
            signature: TargetSignature::new(config.target.signature.as_str())?,
            services,
            run_state,
            last_scan: None,
        })
    }

    /// Run until shutdown is requested or the notification channel fails.
    pub fn run(&mut self) -> StopReason {
        info!(signature = self.signature.as_str(), "watchdog started");
        self.full_scan();

        while self.run_state.is_running() {
            let events = match self.services.watcher.poll() {
                Ok(events) => events,
                Err(err) => {
                    warn!(%err, "change notifications unavailable, stopping");
                    return StopReason::WatcherFailed(err);
                }
            };

            if events.is_empty() {
                self.rescan_if_due(self.timing.idle_rescan);
                self.services.clock.sleep(self.timing.idle_backoff);
                continue;
            }

            self.dispatch(&events);
            self.rescan_if_due(self.timing.event_rescan);
        }

        info!("shutdown requested");
        StopReason::Requested
    }

    /// Handle one batch in arrival order, one delayed check per numeric name.
    fn dispatch(&self, events: &[ChangeEvent]) {
        debug!(count = events.len(), "dispatching change notifications");
        for event in events {
            self.services.audit.emit(&format!("notification {event}"));
            if let Some(pid) = event.candidate_pid() {
                self.check_new_process(pid);
            }
            if !self.run_state.is_running() {
                break;
            }
        }
    }

    fn check_new_process(&self, pid: Pid) {
        if let Some(descriptor) = self
            .inspector()
            .inspect(pid, Some(self.timing.settle_delay))
        {
            self.terminator()
                .kill(pid, &descriptor, KillOrigin::Notification);
        }
    }

    fn rescan_if_due(&mut self, interval: Duration) {
        let due = self
            .last_scan
            .is_none_or(|last| self.services.clock.now().duration_since(last) >= interval);
        if due {
            self.full_scan();
        }
    }

    fn full_scan(&mut self) -> ScanReport {
        self.last_scan = Some(self.services.clock.now());
        FullScanner::new(
            self.services.table.as_ref(),
            self.inspector(),
            self.terminator(),
            &self.run_state,
        )
        .scan()
    }

    fn inspector(&self) -> ProcessInspector<'_> {
        ProcessInspector::new(
            self.services.table.as_ref(),
            self.services.clock.as_ref(),
            &self.signature,
        )
    }

    fn terminator(&self) -> Terminator<'_> {
        Terminator::new(self.services.table.as_ref(), self.services.audit.as_ref())
    }
}
