#![deny(unsafe_code)]

//! Process scheduling priority helpers.
//!
//! The watchdog runs forever in the background, so it asks for the weakest
//! CPU priority and the idle I/O class and yields to everything else on
//! the device.

use tracing::{info, warn};

/// Weakest nice value.
const LOWEST_NICE: libc::c_int = 19;

const IOPRIO_WHO_PROCESS: i32 = 1;
const IOPRIO_CLASS_IDLE: i32 = 3;
const IOPRIO_CLASS_SHIFT: i32 = 13;

/// Lower the process CPU and I/O scheduling priority.
///
/// Both calls are best-effort: a failure is logged as a warning and the
/// watchdog keeps running at whatever priority it has.
pub fn lower_process_priority() {
    set_lowest_nice();
    set_ionice_idle();
}

/// Set the absolute nice value of the whole process to [`LOWEST_NICE`].
///
/// `setpriority` returns -1 only on failure, unlike `nice()`, so there is
/// no errno dance.
fn set_lowest_nice() {
    #[allow(unsafe_code)]
    let ret = unsafe { libc::setpriority(libc::PRIO_PROCESS, 0, LOWEST_NICE) };

    if ret < 0 {
        let err = std::io::Error::last_os_error();
        warn!(%err, nice = LOWEST_NICE, "failed to lower CPU priority");
    } else {
        info!(nice = LOWEST_NICE, "CPU priority lowered");
    }
}

const fn idle_ioprio() -> i32 {
    IOPRIO_CLASS_IDLE << IOPRIO_CLASS_SHIFT
}

fn set_ionice_idle() {
    #[allow(unsafe_code)]
    let ret = unsafe { libc::syscall(libc::SYS_ioprio_set, IOPRIO_WHO_PROCESS, 0, idle_ioprio()) };

    if ret < 0 {
        let err = std::io::Error::last_os_error();
        warn!(%err, "failed to set I/O priority to IDLE class");
    } else {
        info!("I/O scheduling class set to IDLE");
    }
}
