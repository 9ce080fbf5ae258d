use clap::{Parser, Subcommand};

use self::{dump_config::DumpConfigArg, play::PlayArg};

mod config_file;
mod dump_config;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a game in the terminal (the default)
    Play(#[clap(flatten)] PlayArg),
    /// Print the default game configuration as JSON
    DumpConfig(#[clap(flatten)] DumpConfigArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::DumpConfig(arg) => dump_config::run(&arg)?,
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
    fn test_no_subcommand_means_play() {
        let args = CommandArgs::try_parse_from(["blockfall"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_parse_play_overrides() {
        let args = CommandArgs::try_parse_from([
            "blockfall",
            "play",
            "--width",
            "12",
            "--tick-ms",
            "250",
            "--seed",
            "000000000000000000000000000007e2",
        ])
        .unwrap();
        let Some(Mode::Play(arg)) = args.mode else {
            panic!("expected play mode");
        };
        let config = arg.resolve_config().unwrap();
        assert_eq!(config.board_width, 12);
        assert_eq!(config.board_height, 20);
        assert_eq!(config.tick_interval.as_millis(), 250);
        assert_eq!(arg.seed.map(|seed| seed.as_u128()), Some(2018));
    }

    #[test]
    fn test_parse_rejects_malformed_seed() {
        let result = CommandArgs::try_parse_from(["blockfall", "play", "--seed", "xyz"]);
        assert!(result.is_err());
    }
}
