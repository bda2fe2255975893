use axum::{Json, response::IntoResponse};

use vaultwatch_risk::RiskVerdict;

use crate::dto::{ApiResponse, RiskRequest};

#[utoipa::path(
    post,
    path = "/risk/evaluate",
    tag = "Risk",
    request_body = RiskRequest,
    responses(
        (status = 200, description = "Risk verdict for the given metrics", body = ApiResponse<RiskVerdict>)
    )
)]
pub async fn evaluate_risk(Json(payload): Json<RiskRequest>) -> impl IntoResponse {
    let verdict = vaultwatch_risk::evaluate_tag(
        payload.protocol_type.as_deref().unwrap_or_default(),
        &payload.metrics,
    );

    Json(ApiResponse::ok(verdict))
}
