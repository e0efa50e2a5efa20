use std::path::PathBuf;

use anyhow::Context as _;
use blockdrop_engine::GameEngine;
use blockdrop_runtime::Runtime;
use tracing::{Level, info};

use crate::{
    command::{engine_args::EngineArgs, play::app::PlayApp},
    logging::{self, LogTarget},
};

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    engine: EngineArgs,
    /// Write logs to this file (the terminal is taken by the game)
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Log level used when `RUST_LOG` is not set
    #[clap(long, default_value_t = Level::INFO)]
    log_level: Level,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            engine: EngineArgs::default(),
            log_file: None,
            log_level: Level::INFO,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let target = match &arg.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Disabled,
    };
    logging::init(target, arg.log_level)?;

    let config = arg.engine.resolve()?;
    let engine = GameEngine::from_config(&config)?;
    info!(
        seed = engine.seed(),
        drop_interval_ms = config.drop_interval.as_millis(),
        "starting terminal game"
    );

    let mut app = PlayApp::new(engine);
    Runtime::new()
        .run(&mut app)
        .context("terminal session failed")?;

    let stats = app.engine().stats();
    info!(
        score = stats.score(),
        lines = stats.cleared_lines(),
        "terminal game closed"
    );
    Ok(())
}
