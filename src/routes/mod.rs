mod api;

pub use api::{create_peace_certificates, create_recognition_certificates};

use axum::http::{header, Method};
use axum::{routing::post, Router};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the HTTP surface. The caller owns the returned router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(state.config.allowed_origins.clone()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCESS_CONTROL_ALLOW_ORIGIN]);

    Router::new()
        .route("/peace", post(create_peace_certificates))
        .route("/recognition", post(create_recognition_certificates))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
