use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gateway_types::DnsDecodeError;
use serde_json::json;
use thiserror::Error;

use crate::signer::SignerError;

/// Request-scoped failures. Each maps to one HTTP status; callers never see a partial answer.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The CCIP-Read envelope itself is malformed (sender, hex, JSON body).
    #[error("invalid request format: {0}")]
    InvalidRequest(String),
    #[error("no implementation for function with selector 0x{}", hex::encode(.0))]
    UnknownSelector([u8; 4]),
    #[error("failed to decode call data: {0}")]
    Decode(#[from] alloy_sol_types::Error),
    #[error("failed to decode DNS name: {0}")]
    Name(#[from] DnsDecodeError),
    /// Upstream `getWallet` failed for a reason other than "not registered".
    #[error("wallet lookup failed: {0}")]
    Lookup(String),
    /// `now + ttl` does not fit a `uint64` expiry.
    #[error("response expiry overflows: now {now} + ttl {ttl}")]
    Expiry { now: u64, ttl: u64 },
    #[error("failed to sign response: {0}")]
    Signing(#[from] SignerError),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) | GatewayError::Decode(_) | GatewayError::Name(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::UnknownSelector(_) => StatusCode::NOT_FOUND,
            GatewayError::Lookup(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Expiry { .. } | GatewayError::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
