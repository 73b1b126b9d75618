use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::database::{Product, StoreError};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::schema::CreateProduct;

/// POST /v1/products - insert a product and return the stored row
///
/// The insert and the read-back of the highest id share one store session, so
/// no other request can insert in between.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> ApiResult<Product> {
    let Json(payload) = payload?;
    let product = payload.validated()?;

    let mut session = state.store.session().await?;
    session.insert(&product).await?;
    let created = session
        .select_max_id()
        .await?
        .ok_or(StoreError::MissingInsert)?;

    info!("Created product {}", created.id);
    Ok(ApiResponse::success(created))
}
