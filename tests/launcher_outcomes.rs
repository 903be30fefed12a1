//! Integration tests for launcher outcomes

use cardastika_server::config::Config;
use cardastika_server::launcher::{LaunchOutcome, serve_until};
use std::path::PathBuf;

async fn scratch_game_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("test-games")
        .join(name);
    tokio::fs::create_dir_all(&dir).await.unwrap();
    dir
}

/// Grabs a port the OS considers free right now.
fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn test_missing_directory_fails_before_bind() {
    // Hold the port ourselves; the directory check must fail first, so the
    // outcome is DirectoryMissing rather than SocketError.
    let holder = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = holder.local_addr().unwrap().port();
    let config = Config::new(port, PathBuf::from("no-such-game-anywhere"));

    let outcome = serve_until(&config, async {}).await;

    assert_eq!(outcome, LaunchOutcome::DirectoryMissing);
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn test_occupied_port_reports_socket_error() {
    let game_dir = scratch_game_dir("occupied_port").await;

    let holder = tokio::net::TcpListener::bind("0.0.0.0:0").await.unwrap();
    let port = holder.local_addr().unwrap().port();
    let config = Config::new(port, game_dir);

    let outcome = serve_until(&config, std::future::pending()).await;

    assert_eq!(outcome, LaunchOutcome::SocketError);
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn test_shutdown_succeeds_and_releases_port() {
    let game_dir = scratch_game_dir("shutdown").await;
    tokio::fs::write(game_dir.join("index.html"), "<h1>ok</h1>")
        .await
        .unwrap();

    let port = free_port();
    let config = Config::new(port, game_dir);
    let (stop, stopped) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        serve_until(&config, async {
            let _ = stopped.await;
        })
        .await
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    // The game answers while the server is up
    let response = reqwest::get(format!("http://127.0.0.1:{}/index.html", port))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "<h1>ok</h1>");

    stop.send(()).unwrap();
    let outcome = server.await.unwrap();
    assert_eq!(outcome, LaunchOutcome::Interrupted);
    assert!(outcome.is_success());

    // The port is immediately rebindable after shutdown
    tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap();
}
