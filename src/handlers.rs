//! HTTP request handlers.

use axum::{
    body::Body,
    extract::{Extension, State},
    http::{HeaderValue, StatusCode, Uri, header},
    response::Response,
};
use owo_colors::OwoColorize;
use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
    time::Instant,
};
use tokio::fs;
use tracing::info;

use crate::colors::colored_id;
use crate::state::AppState;

/// Serves the game's static assets with content-type detection and logging
///
/// Implements the behaviors the pre-built game relies on:
/// - Automatic index.html serving for directory requests
/// - A plain HTML listing for directories without an index.html
/// - 301 redirect for directory requests missing the trailing slash
/// - Correct MIME type detection using the file extension
/// - Detailed latency tracking from request start
pub async fn serve_asset(
    State(state): State<Arc<AppState>>,
    Extension(id): Extension<String>,
    Extension(start_time): Extension<Instant>,
    uri: Uri,
) -> Result<Response, StatusCode> {
    let Some(mut file_path) = asset_path(&state.game_root, uri.path()) else {
        log_response(&id, StatusCode::NOT_FOUND, start_time);
        return Err(StatusCode::NOT_FOUND);
    };

    if file_path.is_dir() {
        // Relative links inside the game only resolve once the directory URL
        // carries a trailing slash.
        if !uri.path().ends_with('/') {
            let location = format!("{}/", uri.path());
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::MOVED_PERMANENTLY;
            response
                .headers_mut()
                .insert(header::LOCATION, HeaderValue::from_str(&location).unwrap());
            log_response(&id, StatusCode::MOVED_PERMANENTLY, start_time);
            return Ok(response);
        }

        let index = file_path.join("index.html");
        if index.is_file() {
            file_path = index;
        } else {
            let listing = render_listing(&file_path, uri.path()).await.map_err(|e| {
                tracing::error!("failed to list {}: {}", file_path.display(), e);
                log_response(&id, StatusCode::NOT_FOUND, start_time);
                StatusCode::NOT_FOUND
            })?;
            let mut response = Response::new(Body::from(listing));
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            );
            log_response(&id, response.status(), start_time);
            return Ok(response);
        }
    }

    match fs::read(&file_path).await {
        Ok(content) => {
            let mime_type = mime_guess::from_path(&file_path).first_or_octet_stream();
            let mut response = Response::new(Body::from(content));
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_str(mime_type.as_ref()).unwrap(),
            );

            log_response(&id, response.status(), start_time);
            Ok(response)
        }
        Err(_) => {
            log_response(&id, StatusCode::NOT_FOUND, start_time);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

fn log_response(id: &str, status: StatusCode, start_time: Instant) {
    info!(
        "{} ← {} {} ({}ms)",
        colored_id(id),
        "ASSET".green(),
        status,
        start_time.elapsed().as_millis()
    );
}

/// Maps a request path to a filesystem path under the game root
///
/// Only plain path components are accepted, so a request can never resolve
/// outside the game directory.
fn asset_path(root: &Path, uri_path: &str) -> Option<PathBuf> {
    let relative = uri_path.trim_start_matches('/');
    let safe = Path::new(relative)
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
    safe.then(|| root.join(relative))
}

/// Renders the plain directory listing used when a directory has no
/// index.html, entries sorted by name with directories suffixed by '/'.
async fn render_listing(dir: &Path, uri_path: &str) -> std::io::Result<String> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();

    let title = format!("Directory listing for {}", escape(uri_path));
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n<hr>\n<ul>\n", title));
    for name in &entries {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape(name),
            escape(name)
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    Ok(html)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_path_joins_under_root() {
        let root = Path::new("/srv/game");
        assert_eq!(
            asset_path(root, "/js/main.js"),
            Some(PathBuf::from("/srv/game/js/main.js"))
        );
    }

    #[test]
    fn test_asset_path_root_request() {
        let root = Path::new("/srv/game");
        assert_eq!(asset_path(root, "/"), Some(PathBuf::from("/srv/game")));
    }

    #[test]
    fn test_asset_path_rejects_parent_components() {
        let root = Path::new("/srv/game");
        assert_eq!(asset_path(root, "/../secret.txt"), None);
        assert_eq!(asset_path(root, "/js/../../secret.txt"), None);
    }

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(escape("<b>&co"), "&lt;b&gt;&amp;co");
    }
}
