// responses/assets.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

const MAIN_CSS: &str = include_str!("../../static/main.css");
const MAP_JS: &str = include_str!("../../static/map.js");

/// Serve one of the bundled static files.
pub fn static_asset(path: &str) -> ResultResp {
    let (content_type, body) = match path {
        "/static/main.css" => (mime::TEXT_CSS_UTF_8, MAIN_CSS),
        "/static/map.js" => (mime::APPLICATION_JAVASCRIPT_UTF_8, MAP_JS),
        _ => return Err(ServerError::NotFound),
    };

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
