// handlers/v1/auth/authenticate.rs - POST /v1/auth/authenticate
//
// Placeholder. Credentials are not read; every caller receives the configured
// stub token in a `data` response header with an empty body.

use axum::{
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
};

use crate::error::ApiError;
use crate::state::AppState;

pub const TOKEN_HEADER: &str = "data";

pub async fn authenticate(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let token = HeaderValue::from_str(&state.config.auth.stub_token).map_err(|e| {
        ApiError::internal_server_error(format!("stub token is not a valid header value: {}", e))
    })?;

    tracing::warn!("Authentication is not implemented; issuing the stub token");

    Ok((StatusCode::OK, [(HeaderName::from_static(TOKEN_HEADER), token)]))
}
