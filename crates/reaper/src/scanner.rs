use crate::inspector::ProcessInspector;
use crate::run_state::RunState;
use crate::table::ProcessTable;
use crate::terminator::{KillOrigin, Terminator};
use nix::unistd::Pid;
use tracing::{debug, warn};

/// Summary of one pass over the process table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Pids whose descriptor was read.
    pub inspected: usize,
    /// Matching pids, in table order.
    pub matched: Vec<Pid>,
    /// Matches that were successfully killed.
    pub killed: usize,
    /// The scan stopped early because shutdown was requested.
    pub aborted: bool,
}

/// Backstop pass over the entire process table.
///
/// Runs about once a second for as long as the watchdog lives, so there is
/// no delay per pid. The run flag is checked before every pid and a
/// shutdown never waits for a full pass.
pub struct FullScanner<'a> {
    table: &'a dyn ProcessTable,
    inspector: ProcessInspector<'a>,
    terminator: Terminator<'a>,
    run_state: &'a RunState,
}

impl<'a> FullScanner<'a> {
    pub fn new(
        table: &'a dyn ProcessTable,
        inspector: ProcessInspector<'a>,
        terminator: Terminator<'a>,
        run_state: &'a RunState,
    ) -> Self {
        Self {
            table,
            inspector,
            terminator,
            run_state,
        }
    }

    pub fn scan(&self) -> ScanReport {
        let mut report = ScanReport::default();
        let pids = match self.table.pids() {
            Ok(pids) => pids,
            Err(err) => {
                warn!(%err, "full scan skipped");
                return report;
            }
        };

        for pid in pids {
            if !self.run_state.is_running() {
                report.aborted = true;
                break;
            }
            report.inspected += 1;
            let Some(descriptor) = self.inspector.inspect(pid, None) else {
                continue;
            };
            report.matched.push(pid);
            if self
                .terminator
                .kill(pid, &descriptor, KillOrigin::FullScan)
                .is_killed()
            {
                report.killed += 1;
            }
        }

        debug!(
            inspected = report.inspected,
            matched = report.matched.len(),
            killed = report.killed,
            aborted = report.aborted,
            "full scan finished"
        );
        report
    }
}
