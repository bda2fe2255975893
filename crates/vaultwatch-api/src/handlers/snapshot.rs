use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use vaultwatch_monitor::{DEMO_VAULT_NAME, Snapshot, VaultMonitor};
use vaultwatch_types::ProtocolKind;

use crate::{
    AppState,
    dto::{ApiResponse, SnapshotQuery, SnapshotRequest, SummaryRequest, SummaryResponse},
    errors::ApiError,
    helpers::{extract_risk_metrics, resolve_adapter},
};

#[utoipa::path(
    post,
    path = "/snapshot",
    tag = "Snapshots",
    request_body = SnapshotRequest,
    responses(
        (status = 200, description = "Aggregated snapshot", body = ApiResponse<Snapshot>),
        (status = 400, description = "Unknown adapter or invalid configuration"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_snapshot(
    State(state): State<AppState>,
    Json(payload): Json<SnapshotRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let adapter = resolve_adapter(&state.adapters, &payload.adapter)?;

    let snapshot = VaultMonitor::new(adapter)
        .snapshot(
            &payload.vault_config(),
            &payload.user_config(),
            payload.include_token_accounts,
        )
        .await;

    Ok(Json(ApiResponse::ok(snapshot)))
}

#[utoipa::path(
    get,
    path = "/snapshot/default",
    tag = "Snapshots",
    params(
        ("include_token_accounts" = bool, Query, description = "Attach the vault authority's token accounts", example = false)
    ),
    responses(
        (status = 200, description = "Snapshot of the demo vault", body = ApiResponse<Snapshot>),
        (status = 404, description = "Demo vault not registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn default_snapshot(
    State(state): State<AppState>,
    Query(query): Query<SnapshotQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state
        .vaults
        .get(DEMO_VAULT_NAME)
        .ok_or_else(|| ApiError::NotFound(format!("Vault {DEMO_VAULT_NAME} not found")))?;
    let user = entry.user.clone().ok_or_else(|| {
        ApiError::BadRequest(format!("Vault {DEMO_VAULT_NAME} has no default user"))
    })?;
    let adapter = resolve_adapter(&state.adapters, &entry.adapter)?;

    let snapshot = VaultMonitor::new(adapter)
        .snapshot(&entry.vault, &user, query.include_token_accounts)
        .await;

    Ok(Json(ApiResponse::ok(snapshot)))
}

#[utoipa::path(
    post,
    path = "/snapshot/summary",
    tag = "Snapshots",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Snapshot with derived risk verdict", body = ApiResponse<SummaryResponse>),
        (status = 400, description = "Unknown adapter or invalid configuration"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn snapshot_summary(
    State(state): State<AppState>,
    Json(payload): Json<SummaryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let adapter = resolve_adapter(&state.adapters, &payload.snapshot.adapter)?;

    let snapshot = VaultMonitor::new(adapter)
        .snapshot(
            &payload.snapshot.vault_config(),
            &payload.snapshot.user_config(),
            payload.snapshot.include_token_accounts,
        )
        .await;

    let metrics = extract_risk_metrics(&snapshot);
    let protocol = ProtocolKind::from_tag(payload.protocol_type.as_deref().unwrap_or_default());
    let risk = vaultwatch_risk::evaluate(protocol, &metrics);

    Ok(Json(ApiResponse::ok(SummaryResponse {
        snapshot,
        metrics,
        risk,
    })))
}
