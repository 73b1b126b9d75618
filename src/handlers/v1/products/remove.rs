use axum::extract::{rejection::PathRejection, Path, State};
use tracing::{debug, info, warn};

use crate::middleware::{ApiResponse, ApiResult, Removed};
use crate::state::AppState;

use super::schema::ProductId;

/// DELETE /v1/products/:id - hard delete a product
///
/// Always answers with the requested id, whether or not a row existed.
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Removed> {
    let Path(id) = id?;
    let id = ProductId { id }.validated()?;

    let mut session = state.store.session().await?;
    let removed = session.delete_by_id(id).await?;

    match session.select_by_id(id).await? {
        None => debug!("Product {} is no longer stored", id),
        Some(row) => warn!("Product {} still stored after delete: {:?}", id, row),
    }

    info!("Removed product {} ({} rows)", id, removed);
    Ok(ApiResponse::success(Removed { id }))
}
