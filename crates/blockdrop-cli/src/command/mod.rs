use clap::{Parser, Subcommand};

use self::{play::PlayArg, simulate::SimulateArg};

mod engine_args;
mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in (defaults to `play`)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Run a headless game driven by random input and print a JSON summary
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or_else(|| Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_mode_is_optional() {
        let args = CommandArgs::try_parse_from(["blockdrop"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_simulate_arguments() {
        let args = CommandArgs::try_parse_from([
            "blockdrop",
            "simulate",
            "--frames",
            "500",
            "--seed",
            "9",
        ])
        .unwrap();
        let Some(Mode::Simulate(arg)) = args.mode else {
            panic!("expected simulate mode");
        };
        assert_eq!(arg.frames, 500);
        assert_eq!(arg.frame_ms, 16);
        assert_eq!(arg.engine.seed, Some(9));
    }
}
