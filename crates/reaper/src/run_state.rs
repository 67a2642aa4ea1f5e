//! Cooperative shutdown flag shared between signal context and the loop.

use crate::error::Error;
use signal_hook::consts::{SIGINT, SIGTERM};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Signals that stop the watchdog.
pub const SHUTDOWN_SIGNALS: [i32; 2] = [SIGINT, SIGTERM];

/// Process-wide run flag.
///
/// Internally this stores "stop requested", so a signal handler only ever
/// performs a single atomic store of `true`.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    stop: Arc<AtomicBool>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        !self.stop.load(Ordering::SeqCst)
    }

    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Flip the flag on SIGINT and SIGTERM.
    pub fn register_shutdown_signals(&self) -> Result<(), Error> {
        for signal in SHUTDOWN_SIGNALS {
            signal_hook::flag::register(signal, Arc::clone(&self.stop))
                .map_err(|source| Error::Signal { signal, source })?;
            debug!(signal, "shutdown handler installed");
        }
        Ok(())
    }
}
