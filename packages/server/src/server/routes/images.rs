use axum::{
    body::Bytes,
    extract::{Extension, Query},
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
};
use places_client::PHOTO_URL_PREFIX;
use serde::Deserialize;
use tracing::warn;

use super::{api_error, ApiError};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct ImageProxyQuery {
    pub url: String,
}

/// Only photo-provider URLs may be proxied.
pub fn is_trusted_image_url(raw: &str) -> bool {
    if !raw.starts_with(PHOTO_URL_PREFIX) {
        return false;
    }
    match (url::Url::parse(raw), url::Url::parse(PHOTO_URL_PREFIX)) {
        (Ok(target), Ok(trusted)) => {
            target.scheme() == trusted.scheme() && target.host_str() == trusted.host_str()
        }
        _ => false,
    }
}

/// GET /api/images/proxy?url=
///
/// Relays the upstream status, content type and body unchanged.
pub async fn image_proxy_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<ImageProxyQuery>,
) -> Result<(StatusCode, [(axum::http::HeaderName, HeaderValue); 1], Bytes), ApiError> {
    if !is_trusted_image_url(&query.url) {
        return Err(api_error(StatusCode::BAD_REQUEST, "Invalid image URL"));
    }

    let response = state
        .http_client
        .get(&query.url)
        .send()
        .await
        .map_err(|e| {
            warn!(error = %e, "Image proxy request failed");
            api_error(StatusCode::BAD_GATEWAY, "failed to fetch image")
        })?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/octet-stream"));

    let body = response.bytes().await.map_err(|e| {
        warn!(error = %e, "Image proxy body read failed");
        api_error(StatusCode::BAD_GATEWAY, "failed to read image")
    })?;

    Ok((status, [(CONTENT_TYPE, content_type)], body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trusted_prefix_only() {
        assert!(is_trusted_image_url(
            "https://maps.googleapis.com/maps/api/place/photo?maxwidth=800&photo_reference=abc&key=k"
        ));
        assert!(!is_trusted_image_url("https://evil.test/photo.jpg"));
        assert!(!is_trusted_image_url("http://maps.googleapis.com/maps/api/place/photo"));
        assert!(!is_trusted_image_url(
            "https://maps.googleapis.com/maps/api/place/details/json"
        ));
        assert!(!is_trusted_image_url(""));
    }
}
