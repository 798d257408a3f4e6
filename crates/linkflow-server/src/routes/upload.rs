//! Member photo upload.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use linkflow_core::Error;

use crate::state::AppState;

/// Accepted image content types.
const ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Maximum photo size: 5 MiB.
const MAX_BYTES: usize = 5 * 1024 * 1024;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/upload", post(upload_photo))
}

/// POST /api/upload — store one member photo, return its public path.
///
/// Expects a `file` part and an optional `name` part (the member's display
/// name, used for the stored filename).
async fn upload_photo(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut display_name = String::new();
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name() {
            Some("name") => {
                display_name = field.text().await.unwrap_or_default();
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or("photo").to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => file = Some((filename, content_type, bytes.to_vec())),
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(serde_json::json!({ "error": format!("read failed: {e}") })),
                        );
                    }
                }
            }
            _ => {}
        }
    }

    let Some((original_name, content_type, bytes)) = file else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "no file provided" })),
        );
    };

    if let Err(e) = validate_photo(&content_type, bytes.len()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.to_string() })),
        );
    }

    let extension = std::path::Path::new(&original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("jpg");

    let stem = if display_name.trim().is_empty() {
        std::path::Path::new(&original_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("photo")
            .to_string()
    } else {
        display_name
    };

    let timestamp = chrono::Utc::now().format("%Y%m%d%H%M%S");
    let filename = format!("{}_{}.{}", sanitize_name(&stem), timestamp, extension);
    let path = state.config.data_paths.uploads.join(&filename);

    if let Err(e) = std::fs::write(&path, &bytes) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": format!("write failed: {e}") })),
        );
    }

    info!(filename = %filename, size = bytes.len(), "photo uploaded");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "url": format!("/uploads/{filename}"),
        })),
    )
}

/// Reject anything that is not a reasonably sized image.
fn validate_photo(content_type: &str, size: usize) -> Result<(), Error> {
    if !ALLOWED_TYPES.contains(&content_type) {
        return Err(Error::Upload(
            "unsupported image type (jpeg, png, gif, webp only)".to_string(),
        ));
    }
    if size > MAX_BYTES {
        return Err(Error::Upload("file exceeds the 5MiB limit".to_string()));
    }
    Ok(())
}

/// Strip path separators and traversal sequences from a name.
fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .replace(['/', '\\'], "")
        .replace("..", "")
        .chars()
        .filter(|c| !c.is_control() && *c != ':')
        .collect();

    if cleaned.is_empty() {
        "photo".to_string()
    } else {
        cleaned
    }
}
