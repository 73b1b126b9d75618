use axum::extract::{rejection::PathRejection, Path, State};
use tracing::debug;

use crate::database::Product;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::schema::ProductId;

/// GET /v1/products/:id - fetch a single product
///
/// An id with no row answers 410 Gone.
pub async fn find_one(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Product> {
    let Path(id) = id?;
    let id = ProductId { id }.validated()?;

    let mut session = state.store.session().await?;
    let product = session
        .select_by_id(id)
        .await?
        .ok_or_else(|| ApiError::gone(format!("product {}", id)))?;

    debug!("Found product {:?}", product);
    Ok(ApiResponse::success(product))
}
