use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

use vaultwatch_monitor::{Snapshot, UserConfig, VaultMonitor};

use crate::{
    AppState,
    dto::{ApiResponse, VaultListItem, VaultSnapshotQuery},
    errors::ApiError,
    helpers::resolve_adapter,
};

#[utoipa::path(
    get,
    path = "/vaults",
    tag = "Vaults",
    responses(
        (status = 200, description = "Registered vaults", body = ApiResponse<Vec<VaultListItem>>)
    )
)]
pub async fn list_vaults(State(state): State<AppState>) -> impl IntoResponse {
    let items: Vec<VaultListItem> = state
        .vaults
        .iter()
        .map(|(name, entry)| VaultListItem {
            name: name.clone(),
            adapter: entry.adapter.clone(),
            vault_pubkey: entry.vault.vault_pubkey.clone(),
            lp_mint: entry.vault.lp_mint.clone(),
        })
        .collect();

    Json(ApiResponse::ok(items))
}

#[utoipa::path(
    get,
    path = "/vaults/{name}/snapshot",
    tag = "Vaults",
    params(
        ("name" = String, Path, description = "Registry name of the vault"),
        ("wallet" = Option<String>, Query, description = "Wallet to snapshot instead of the registered default user"),
        ("lp_token_account" = Option<String>, Query, description = "LP token account of the wallet"),
        ("include_token_accounts" = bool, Query, description = "Attach the vault authority's token accounts", example = false)
    ),
    responses(
        (status = 200, description = "Aggregated snapshot", body = ApiResponse<Snapshot>),
        (status = 400, description = "No user to snapshot"),
        (status = 404, description = "Vault not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn vault_snapshot(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<VaultSnapshotQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state
        .vaults
        .get(&name)
        .ok_or_else(|| ApiError::NotFound(format!("Vault {name} not found")))?;

    let user = match query.wallet {
        Some(wallet) => UserConfig {
            wallet,
            lp_token_account: query.lp_token_account.clone(),
        },
        None => entry.user.clone().ok_or_else(|| {
            ApiError::BadRequest(format!("Vault {name} has no default user; pass ?wallet="))
        })?,
    };
    let adapter = resolve_adapter(&state.adapters, &entry.adapter)?;

    let snapshot = VaultMonitor::new(adapter)
        .snapshot(&entry.vault, &user, query.include_token_accounts)
        .await;

    Ok(Json(ApiResponse::ok(snapshot)))
}
