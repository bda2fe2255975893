use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};

use utoipa::OpenApi as OpenApiT;
use utoipa_swagger_ui::SwaggerUi;

use crate::{AppState, handlers};

pub fn api_router<T: OpenApiT>(_state: AppState) -> Router<AppState> {
    let open_api = T::openapi();

    // Group snapshot endpoints under a dedicated "/snapshot" router
    let snapshot_router = Router::new()
        .route("/", post(handlers::create_snapshot))
        .route("/default", get(handlers::default_snapshot))
        .route("/summary", post(handlers::snapshot_summary));

    // Group registry-backed endpoints under a dedicated "/vaults" router
    let vaults_router = Router::new()
        .route("/", get(handlers::list_vaults))
        .route("/{name}/snapshot", get(handlers::vault_snapshot));

    let risk_router = Router::new().route("/evaluate", post(handlers::evaluate_risk));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/v1/snapshot", snapshot_router)
        .nest("/v1/vaults", vaults_router)
        .nest("/v1/risk", risk_router)
        .merge(SwaggerUi::new("/v1/docs").url("/v1/docs/openapi.json", open_api))
        .fallback(handler_404)
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
