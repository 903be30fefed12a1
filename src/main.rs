//! Local HTTP server for the Cardastika browser card game.
//!
//! Checks that the pre-built game directory exists, binds a TCP listener,
//! prints a startup banner with the play and documentation URLs, and serves
//! the game's static assets until Ctrl+C. Exit code 0 on clean shutdown,
//! 1 on any startup failure.

use std::process::ExitCode;

use cardastika_server::cli::Cli;
use cardastika_server::config::Config;
use cardastika_server::launcher::launch;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize structured logging with INFO level as default
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args: Cli = argh::from_env();
    let config = Config::from(args);

    if launch(&config).await.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
