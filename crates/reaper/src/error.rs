use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::Error),

    #[error("Target signature must not be empty")]
    EmptySignature,

    #[error("Failed to enumerate the process table: {0}")]
    ProcessTable(#[from] procfs::ProcError),

    #[error("Failed to watch {path:?} for new processes: {source}")]
    Subscribe {
        path: PathBuf,
        #[source]
        source: nix::Error,
    },

    #[error("Failed to read change notifications: {0}")]
    Notification(#[source] nix::Error),

    #[error("Failed to install handler for signal {signal}: {source}")]
    Signal {
        signal: i32,
        #[source]
        source: std::io::Error,
    },
}
