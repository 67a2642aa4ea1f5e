use crate::error::Error;
use crate::watcher::{ChangeEvent, ChangeKind, ChangeWatcher};
use nix::errno::Errno;
use nix::sys::inotify::{AddWatchFlags, InitFlags, Inotify, InotifyEvent};
use std::path::PathBuf;
use tracing::{info, trace};

/// Non-blocking inotify subscription on the process table root.
///
/// The descriptor is held for the lifetime of the watcher and closed on
/// drop.
pub struct InotifyWatcher {
    inotify: Inotify,
    root: PathBuf,
}

impl InotifyWatcher {
    pub fn subscribe(root: impl Into<PathBuf>) -> Result<Self, Error> {
        let root = root.into();
        let subscribe_error = |source| Error::Subscribe {
            path: root.clone(),
            source,
        };

        let inotify = Inotify::init(InitFlags::IN_NONBLOCK | InitFlags::IN_CLOEXEC)
            .map_err(subscribe_error)?;
        inotify
            .add_watch(
                root.as_path(),
                AddWatchFlags::IN_CREATE | AddWatchFlags::IN_MOVED_TO | AddWatchFlags::IN_ATTRIB,
            )
            .map_err(subscribe_error)?;

        info!(root = ?root, "watching process table for changes");
        Ok(Self { inotify, root })
    }
}

impl ChangeWatcher for InotifyWatcher {
    fn poll(&mut self) -> Result<Vec<ChangeEvent>, Error> {
        match self.inotify.read_events() {
            Ok(events) => {
                trace!(count = events.len(), "change notifications read");
                Ok(events.into_iter().map(ChangeEvent::from).collect())
            }
            Err(Errno::EAGAIN | Errno::EINTR) => Ok(Vec::new()),
            Err(err) => Err(Error::Notification(err)),
        }
    }
}

impl From<InotifyEvent> for ChangeEvent {
    fn from(event: InotifyEvent) -> Self {
        let mut kind = ChangeKind::empty();
        if event.mask.contains(AddWatchFlags::IN_CREATE) {
            kind |= ChangeKind::CREATED;
        }
        if event.mask.contains(AddWatchFlags::IN_MOVED_TO) {
            kind |= ChangeKind::MOVED_IN;
        }
        if event.mask.contains(AddWatchFlags::IN_ATTRIB) {
            kind |= ChangeKind::ATTRIB;
        }
        ChangeEvent::new(kind, event.mask.bits(), event.name)
    }
}

impl std::fmt::Debug for InotifyWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InotifyWatcher")
            .field("root", &self.root)
            .finish()
    }
}
