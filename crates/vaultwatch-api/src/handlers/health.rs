use axum::{Json, extract::State, response::IntoResponse};

use crate::{AppState, dto::HealthResponse};

#[utoipa::path(
    get,
    path = "/health",
    tag = "Monitor",
    responses(
        (status = 200, description = "Service health with registered adapters and vaults", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        ok: true,
        adapters: state.adapters.names(),
        vaults: state.vaults.names(),
    })
}
