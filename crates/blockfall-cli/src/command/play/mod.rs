use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use blockfall_engine::{GameConfig, PieceSeed};
use rand::Rng as _;

use crate::{
    command::{config_file, play::app::PlayApp},
    tui::Runtime,
};

mod app;
mod screen_state;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Path to a game configuration file (JSON format)
    #[clap(long)]
    config: Option<PathBuf>,
    /// Number of board columns
    #[clap(long)]
    width: Option<usize>,
    /// Number of board rows
    #[clap(long)]
    height: Option<usize>,
    /// Gravity tick interval in milliseconds
    #[clap(long)]
    tick_ms: Option<u64>,
    /// Points awarded for each cleared row
    #[clap(long)]
    points_per_line: Option<usize>,
    /// Piece seed as 32 hexadecimal digits (random when omitted)
    #[clap(long)]
    pub(super) seed: Option<PieceSeed>,
}

impl PlayArg {
    /// Builds the game configuration: defaults, then the config file, then
    /// the individual flags.
    pub(super) fn resolve_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => config_file::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval = Duration::from_millis(tick_ms);
        }
        if let Some(points) = self.points_per_line {
            config.points_per_line = points;
        }
        Ok(config)
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let config = arg.resolve_config()?;
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());

    let mut app = PlayApp::new(config, seed).context("Invalid game configuration")?;
    Runtime::new().run(&mut app)?;

    let game = app.game();
    let stats = game.stats();
    let outcome = if game.observer().final_score().is_some() {
        "game over"
    } else {
        "quit"
    };
    println!(
        "{outcome}: score: {}  lines: {}  pieces: {}  seed: {}",
        game.score(),
        stats.total_cleared_lines(),
        stats.locked_pieces(),
        game.seed(),
    );
    Ok(())
}
