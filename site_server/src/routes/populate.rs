//! One-shot population endpoints. Inserts are ON CONFLICT DO NOTHING, so
//! calling these repeatedly is safe.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::routes::{admin, SiteRouterState};
use crate::seeder;

pub async fn populate_states(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    admin::require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let inserted = seeder::seed_states(&mut conn).await?;
    Ok(Json(json!({ "success": true, "inserted": inserted })))
}

pub async fn populate_industries(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    admin::require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let inserted = seeder::seed_industries(&mut conn).await?;
    Ok(Json(json!({ "success": true, "inserted": inserted })))
}
