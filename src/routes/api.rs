use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::certificate::{generate_batch, CertificateKind, CertificateRequest};
use crate::state::AppState;
use crate::storage::{ensure_dirs, generate_tracking_id};

pub async fn create_peace_certificates(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CertificateRequest>,
) -> impl IntoResponse {
    create_certificates(state, CertificateKind::Peacemaking, request).await
}

pub async fn create_recognition_certificates(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CertificateRequest>,
) -> impl IntoResponse {
    create_certificates(state, CertificateKind::Recognition, request).await
}

async fn create_certificates(
    state: Arc<AppState>,
    kind: CertificateKind,
    request: CertificateRequest,
) -> Response {
    tracing::info!("Template kind resolved as {}", kind.route_name());

    if let Err(e) = request.validate(kind) {
        return error_response(StatusCode::BAD_REQUEST, e.to_string());
    }

    if let Err(e) = ensure_dirs(&state.assets.outcomes_folder) {
        tracing::error!("Failed to prepare outcomes folder: {}", e);
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error preparing output folder".to_string(),
        );
    }

    let tracking_id = generate_tracking_id();
    let assets = state.assets.clone();
    let batch = tokio::task::spawn_blocking(move || {
        generate_batch(&assets, kind, tracking_id, &request.peacemakers)
    })
    .await;

    match batch {
        Ok(Ok(outcome)) => {
            let certificates: Vec<String> = outcome
                .files
                .iter()
                .filter_map(|p| p.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .collect();
            Json(serde_json::json!({
                "status": "ok",
                "tracking_id": outcome.tracking_id.to_string(),
                "certificates": certificates
            }))
            .into_response()
        }
        Ok(Err(e)) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error generating certificate for {}", e.participant),
        ),
        Err(e) => {
            tracing::error!("Certificate task did not complete: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error generating certificates".to_string(),
            )
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(serde_json::json!({
            "status": "error",
            "message": message
        })),
    )
        .into_response()
}
