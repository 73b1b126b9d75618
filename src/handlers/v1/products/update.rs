use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, info};

use crate::database::Product;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::schema::UpdateProduct;

/// PATCH /v1/products - partially update a product
///
/// Fields missing from the body keep their stored value. The id is only a
/// lookup key and is never rewritten.
pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<UpdateProduct>, JsonRejection>,
) -> ApiResult<Product> {
    let Json(payload) = payload?;
    let (id, changes) = payload.validated()?;

    let mut session = state.store.session().await?;
    let stored = session
        .select_by_id(id)
        .await?
        .ok_or_else(|| ApiError::gone(format!("product {}", id)))?;
    debug!("Found product {:?}", stored);

    let updated = stored.merge(changes);
    session.update(&updated).await?;

    info!(
        "Updated product {} (retired: {})",
        updated.id,
        updated.is_retired()
    );
    Ok(ApiResponse::success(updated))
}
