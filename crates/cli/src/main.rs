use config::Config;
use reaper::StopReason;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // `SNAP_REAPER_LOG` only filters diagnostics, e.g.
    // `SNAP_REAPER_LOG=reaper=debug`. Audit records go to the kernel log
    // regardless.
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var("SNAP_REAPER_LOG")
        .from_env()?;

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .init();

    match snap_reaper::run(&Config::default())? {
        StopReason::Requested => info!("stopped"),
        StopReason::WatcherFailed(err) => warn!(%err, "stopped after notification failure"),
    }
    Ok(())
}
