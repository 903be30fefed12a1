//! Command-line interface configuration.

use argh::FromArgs;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_GAME_DIR, DEFAULT_PORT};

/// Local server for the Cardastika browser card game
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// port to serve on (default: 8000)
    #[argh(option, default = "DEFAULT_PORT")]
    pub port: u16,

    /// path to the game directory (default: 'cardastika')
    #[argh(option, long = "game-dir", default = "PathBuf::from(DEFAULT_GAME_DIR)")]
    pub game_dir: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(cli.port, cli.game_dir)
    }
}
