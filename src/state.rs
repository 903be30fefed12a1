//! Shared application state.

use std::path::PathBuf;

/// Shared application state accessible to all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonicalized root directory of the game's static assets
    pub game_root: PathBuf,
}
