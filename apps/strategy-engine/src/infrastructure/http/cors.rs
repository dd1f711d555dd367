//! Cross-origin policy.

use axum::http::{HeaderName, HeaderValue};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::infrastructure::config::CorsSettings;

/// Build the CORS layer.
///
/// With no allow-list every origin, method and header is accepted, so a
/// browser dashboard on another port can call the service directly.
#[must_use]
pub fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static("x-request-id")]);

    let Some(origins) = &settings.allowed_origins else {
        return layer.allow_origin(Any);
    };

    let values: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(values))
}
