pub mod priority;

use anyhow::Context;
use config::Config;
use reaper::{
    InotifyWatcher, KmsgSink, ProcfsTable, RunState, Services, StopReason, SystemClock, Watchdog,
};
use tracing::debug;

/// Bring the watchdog up and run it until it stops.
///
/// Any error returned here happens before the loop starts, and `main` turns
/// it into exit status 1.
pub fn run(config: &Config) -> anyhow::Result<StopReason> {
    debug!(?config);

    let run_state = RunState::new();
    run_state
        .register_shutdown_signals()
        .context("failed to install shutdown handlers")?;

    let watcher = InotifyWatcher::subscribe(&config.system.proc_root)
        .context("failed to initialize process notifications")?;

    priority::lower_process_priority();

    let services = Services {
        table: Box::new(ProcfsTable::new(&config.system.proc_root)),
        watcher: Box::new(watcher),
        audit: Box::new(KmsgSink::from_config(&config.audit)),
        clock: Box::new(SystemClock),
    };
    let mut watchdog = Watchdog::new(config, services, run_state)?;
    Ok(watchdog.run())
}
