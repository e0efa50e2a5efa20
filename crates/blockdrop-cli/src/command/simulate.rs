use std::{io, time::Duration};

use anyhow::Context as _;
use blockdrop_engine::{Command, GameEngine, RandomSource, SeededSource};
use serde::Serialize;
use tracing::{Level, info};

use crate::{
    command::engine_args::EngineArgs,
    logging::{self, LogTarget},
};

/// Mixed into the game seed so input and pieces use different streams.
const INPUT_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;
/// One in this many frames carries a command.
const INPUT_PERIOD: u32 = 4;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    #[clap(flatten)]
    pub(crate) engine: EngineArgs,
    /// Maximum number of frames to simulate
    #[clap(long, default_value_t = 100_000)]
    pub(crate) frames: u64,
    /// Simulated frame length in milliseconds
    #[clap(long, default_value_t = 16)]
    pub(crate) frame_ms: u64,
    /// Log level used when `RUST_LOG` is not set
    #[clap(long, default_value_t = Level::INFO)]
    pub(crate) log_level: Level,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Summary {
    pub(crate) seed: u64,
    pub(crate) score: usize,
    pub(crate) lines: usize,
    pub(crate) pieces: usize,
    pub(crate) frames: u64,
    pub(crate) state: String,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    logging::init(LogTarget::Stderr, arg.log_level)?;

    let config = arg.engine.resolve()?;
    let mut engine = GameEngine::from_config(&config)?;
    let summary = simulate(&mut engine, arg.frames, Duration::from_millis(arg.frame_ms));

    let stdout = io::stdout().lock();
    serde_json::to_writer_pretty(stdout, &summary).context("failed to write summary")?;
    println!();
    Ok(())
}

/// Plays one game with pseudo-random input derived from the engine seed.
///
/// Stops after `frames` frames or at game over, whichever comes first.
pub(crate) fn simulate(
    engine: &mut GameEngine<SeededSource>,
    frames: u64,
    frame: Duration,
) -> Summary {
    let seed = engine.seed();
    let mut input = SeededSource::from_seed(seed ^ INPUT_SEED_SALT);
    let command_count = u32::try_from(Command::ALL.len()).unwrap_or(u32::MAX);

    engine.start();
    let mut played = 0;
    while played < frames && !engine.is_over() {
        played += 1;
        if input.next_int(INPUT_PERIOD) == 0 {
            let index = input.next_int(command_count) as usize;
            engine.apply(Command::ALL[index]);
        }
        engine.tick(frame);
    }

    info!(frames = played, score = engine.score(), "simulation finished");
    Summary {
        seed,
        score: engine.score(),
        lines: engine.lines(),
        pieces: engine.stats().completed_pieces(),
        frames: played,
        state: engine.state().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use blockdrop_engine::{EngineConfig, GameState};

    use super::*;

    fn engine(seed: u64) -> GameEngine<SeededSource> {
        let config = EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        };
        GameEngine::from_config(&config).unwrap()
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let frame = Duration::from_millis(16);
        let a = simulate(&mut engine(11), 5_000, frame);
        let b = simulate(&mut engine(11), 5_000, frame);
        assert_eq!(a, b);
        assert_eq!(a.seed, 11);
    }

    #[test]
    fn test_simulation_respects_frame_limit() {
        let mut engine = engine(3);
        let summary = simulate(&mut engine, 10, Duration::from_millis(16));
        assert_eq!(summary.frames, 10);
        assert_eq!(summary.state, "Running");
    }

    #[test]
    fn test_simulation_stops_at_game_over() {
        let mut engine = engine(7);
        let summary = simulate(&mut engine, 1_000_000, Duration::from_secs(1));
        assert_eq!(engine.state(), GameState::Over);
        assert_eq!(summary.state, "Over");
        assert!(summary.pieces > 0);
    }

    #[test]
    fn test_summary_json_fields() {
        let summary = Summary {
            seed: 1,
            score: 300,
            lines: 2,
            pieces: 40,
            frames: 1200,
            state: "Over".to_owned(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "seed": 1,
                "score": 300,
                "lines": 2,
                "pieces": 40,
                "frames": 1200,
                "state": "Over",
            })
        );
    }
}
