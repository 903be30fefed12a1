//! Server startup, shutdown, and outcome reporting.

use axum::{Router, middleware::from_fn, routing::get};
use owo_colors::OwoColorize;
use std::future::Future;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::error;

use crate::config::Config;
use crate::handlers::serve_asset;
use crate::middleware::track_requests;
use crate::state::AppState;

const BANNER_RULE: &str = "==================================================";

/// How a launch ended, translated by `main` into the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The shutdown signal arrived while serving; the normal way to stop.
    Interrupted,
    /// The game directory was missing; nothing was bound.
    DirectoryMissing,
    /// The listener could not be bound, or serving failed.
    SocketError,
}

impl LaunchOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, LaunchOutcome::Interrupted)
    }
}

/// Builds the game router: every request falls through to the asset handler,
/// with request tracking layered on top.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(get(serve_asset))
        .layer(from_fn(track_requests))
        .with_state(state)
}

/// Validates the configuration and serves the game until Ctrl+C.
pub async fn launch(config: &Config) -> LaunchOutcome {
    serve_until(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

/// Runs the server until `shutdown` resolves.
///
/// The shutdown trigger is a parameter so tests can stop the server without
/// delivering a real signal; `launch` wires it to Ctrl+C. The listener is
/// released when this returns, freeing the port.
pub async fn serve_until<F>(config: &Config, shutdown: F) -> LaunchOutcome
where
    F: Future<Output = ()> + Send + 'static,
{
    // The directory check runs before any socket work; a bad path must not
    // leave a bound listener behind.
    let game_root = match config.game_dir.canonicalize() {
        Ok(path) => path,
        Err(e) => {
            error!(
                "game directory {} not found: {}",
                config.game_dir.display(),
                e
            );
            return LaunchOutcome::DirectoryMissing;
        }
    };

    let state = Arc::new(AppState {
        game_root: game_root.clone(),
    });
    let app = router(state);

    let listener = match TcpListener::bind(config.bind_addr()).await {
        Ok(listener) => listener,
        Err(e) => {
            report_bind_error(config, &e);
            return LaunchOutcome::SocketError;
        }
    };

    print_banner(config, &game_root);

    match axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        Ok(()) => {
            print_shutdown_banner();
            LaunchOutcome::Interrupted
        }
        Err(e) => {
            error!("server failed: {}", e);
            LaunchOutcome::SocketError
        }
    }
}

/// Reports a failed bind; port contention gets actionable guidance.
fn report_bind_error(config: &Config, e: &std::io::Error) {
    error!("could not bind {}: {}", config.bind_addr(), e);
    if e.kind() == ErrorKind::AddrInUse {
        let alternate = config.port.saturating_add(1);
        eprintln!("❌ Port {} is already in use", config.port);
        eprintln!("   Try an alternate port:");
        eprintln!(
            "   cardastika-server --port {} --game-dir {}",
            alternate,
            config.game_dir.display()
        );
    }
}

/// Prints the startup banner with the URLs a player needs.
fn print_banner(config: &Config, game_root: &Path) {
    let url = config.display_url();
    println!();
    println!("{}", BANNER_RULE);
    println!("🎮 {}", "Cardastika Card Game Server".bold());
    println!("{}", BANNER_RULE);
    println!("✅ Server running: {}", url.cyan());
    println!("📁 Directory: {}", game_root.display());
    println!("🔌 Port: {}", config.port);
    println!();
    println!("🕹️  Play in your browser:");
    println!("   {}", url.cyan());
    println!();
    println!("📚 Documentation:");
    println!("   {}/COMPLETE_GUIDE.md", url);
    println!("   {}/UPGRADE_SYSTEM.md", url);
    println!("   {}/CARD_DETAILS_PAGE.md", url);
    println!();
    println!("🧪 Test pages:");
    println!("   {}/test-upgrade-logic.html", url);
    println!("   {}/TEST_CARD_DETAILS.html", url);
    println!();
    println!("⛔ Press Ctrl+C to stop");
    println!("{}", BANNER_RULE);
    println!();
}

fn print_shutdown_banner() {
    println!();
    println!();
    println!("{}", BANNER_RULE);
    println!("🛑 {}", "Server stopped".bold());
    println!("{}", BANNER_RULE);
    println!();
}
