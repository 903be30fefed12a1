//! Launch configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Port the server binds when none is given on the command line.
pub const DEFAULT_PORT: u16 = 8000;

/// Directory holding the game's static assets, relative to the invocation
/// directory, when none is given on the command line.
pub const DEFAULT_GAME_DIR: &str = "cardastika";

/// Immutable launch configuration, fixed once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to bind on all interfaces
    pub port: u16,
    /// Directory served as the HTTP document root
    pub game_dir: PathBuf,
}

impl Config {
    pub fn new(port: u16, game_dir: PathBuf) -> Self {
        Self { port, game_dir }
    }

    /// The URL shown to the player in the startup banner.
    pub fn display_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// Bind address: all interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PORT, PathBuf::from(DEFAULT_GAME_DIR))
    }
}
