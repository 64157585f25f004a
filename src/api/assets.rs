use axum::{
    body::Body,
    http::{Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use super::ApiError;

#[derive(RustEmbed)]
#[folder = "static"]
struct Asset;

/// Serves `/static/*` from the embedded assets; every other unknown path is a JSON 404.
pub async fn serve_asset(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    let asset = path
        .strip_prefix("static/")
        .and_then(|file| Asset::get(file).map(|content| (file, content)));

    match asset {
        Some((file, content)) => {
            let mime = mime_guess::from_path(file).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref())],
                Body::from(content.data),
            )
                .into_response()
        }
        None => ApiError::NotFound(format!("{} not found", uri.path())).into_response(),
    }
}
