use std::{fs::File, path::Path, sync::Mutex};

use anyhow::Context as _;
use tracing::{Level, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// Where log records go.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LogTarget<'a> {
    /// Discard everything. The terminal UI owns stdout and stderr.
    Disabled,
    Stderr,
    File(&'a Path),
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when it is set.
pub(crate) fn init(target: LogTarget<'_>, default_level: Level) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    result
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install log subscriber")
}
