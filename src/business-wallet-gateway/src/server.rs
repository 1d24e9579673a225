//! HTTP transport for the CCIP-Read server protocol (EIP-3668).
//!
//! Routes, relative to the mount path:
//! - `GET  {path}/{sender}/{callData}.json`
//! - `POST {path}` with `{ "sender": "0x..", "data": "0x.." }`
//!
//! Success is `200 { "data": "0x.." }`; failures are `{ "message": ".." }` with a 4xx/5xx status.

use std::{str::FromStr, sync::Arc};

use alloy_primitives::{Address, Bytes};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    errors::GatewayError,
    handler::{CcipRequest, Gateway},
};

#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub sender: Option<String>,
    pub data: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayResponse {
    pub data: String,
}

/// Build the router with every route mounted under `mount_path` (eg, `/gateway`).
pub fn router(gateway: Arc<Gateway>, mount_path: &str) -> Router {
    let base = mount_path.trim_end_matches('/');
    let post_path = if base.is_empty() { "/" } else { base };

    Router::new()
        .route(&format!("{base}/:sender/:call_data"), get(handle_get))
        .route(post_path, post(handle_post))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(gateway)
}

async fn handle_get(
    State(gateway): State<Arc<Gateway>>,
    Path((sender, call_data)): Path<(String, String)>,
) -> Result<Json<GatewayResponse>, GatewayError> {
    let call_data = call_data.strip_suffix(".json").unwrap_or(&call_data);
    let request = parse_request(&sender, call_data)?;
    respond(&gateway, request).await
}

async fn handle_post(
    State(gateway): State<Arc<Gateway>>,
    body: Result<Json<PostBody>, JsonRejection>,
) -> Result<Json<GatewayResponse>, GatewayError> {
    let Json(body) = body.map_err(|rejection| GatewayError::InvalidRequest(rejection.body_text()))?;
    let sender = body
        .sender
        .ok_or_else(|| GatewayError::InvalidRequest("missing `sender`".to_string()))?;
    let data = body
        .data
        .ok_or_else(|| GatewayError::InvalidRequest("missing `data`".to_string()))?;
    let request = parse_request(&sender, &data)?;
    respond(&gateway, request).await
}

async fn respond(
    gateway: &Gateway,
    request: CcipRequest,
) -> Result<Json<GatewayResponse>, GatewayError> {
    let response = gateway.handle(&request).await?;
    info!(
        sender = %request.to,
        valid_until = response.valid_until,
        "served resolve request"
    );
    Ok(Json(GatewayResponse {
        data: format!("0x{}", hex::encode(response.abi_encode())),
    }))
}

/// Validate the envelope: `sender` must be an address and `data` 0x-prefixed hex.
pub fn parse_request(sender: &str, data: &str) -> Result<CcipRequest, GatewayError> {
    let to = Address::from_str(sender)
        .map_err(|_| GatewayError::InvalidRequest(format!("invalid sender `{sender}`")))?;
    let hex_data = data
        .strip_prefix("0x")
        .ok_or_else(|| GatewayError::InvalidRequest("call data must be 0x-prefixed".to_string()))?;
    let bytes = hex::decode(hex_data)
        .map_err(|_| GatewayError::InvalidRequest("call data is not valid hex".to_string()))?;
    Ok(CcipRequest {
        to,
        data: Bytes::from(bytes),
    })
}
