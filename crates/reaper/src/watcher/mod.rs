#![forbid(unsafe_code)]

mod event;
mod inotify;

pub use event::{ChangeEvent, ChangeKind};
pub use inotify::InotifyWatcher;

use crate::error::Error;

pub trait ChangeWatcher: Send {
    /// Drain whatever change events are queued right now, in arrival order.
    ///
    /// Never blocks: an empty vec means "no data yet". An error means the
    /// channel is unusable and the caller should stop.
    fn poll(&mut self) -> Result<Vec<ChangeEvent>, Error>;
}
