//! Record listing endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use sheetport_core::Record;

use crate::http::error::ApiError;
use crate::models::{DataResponse, PageParams, PageRequest, SortKey};
use crate::state::AppState;

/// GET /getData/all - every stored record
async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Record>>>, ApiError> {
    let records = state.store().find_all().await?;
    Ok(Json(DataResponse::ok(records)))
}

/// GET /getData/page?current=&size= - one page ordered by age
///
/// Unparseable or missing parameters count as 0 and a repeated key keeps
/// its first value; the request never fails on its query string.
async fn list_page(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<DataResponse<Vec<Record>>>, ApiError> {
    let params = match pairs {
        Ok(Query(pairs)) => PageParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!("ignoring malformed page query: {}", rejection);
            PageParams::default()
        }
    };

    let page = PageRequest::from(params);
    let records = state.store().find_page(page, SortKey::Age).await?;

    tracing::debug!(
        current = page.current,
        size = page.size,
        returned = records.len(),
        "page query"
    );
    Ok(Json(DataResponse::ok(records)))
}

/// Record listing routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getData/all", get(list_all))
        .route("/getData/page", get(list_page))
}
