//! Admin CRUD API — token-guarded, returns full rows including inactive.

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::models::ai_config::{AiConfigurationChanges, NewAiConfiguration};
use crate::models::gallery::{GalleryItemChanges, NewGalleryItem};
use crate::models::industry::{IndustryChanges, NewIndustry};
use crate::models::news::{NewNewsInsight, NewsInsightChanges};
use crate::models::solution::{NewSolution, SolutionChanges};
use crate::models::state::{NewStatePage, StatePageChanges};
use crate::models::testimonial::{NewTestimonial, TestimonialChanges};
use crate::routes::SiteRouterState;
use crate::services::{
    ai_config_service, auth, gallery_service, industry_service, news_service, solution_service,
    state_service, testimonial_service,
};

pub fn router() -> Router<SiteRouterState> {
    Router::new()
        .route("/industries", get(list_industries).post(create_industry))
        .route(
            "/industries/{id}",
            axum::routing::put(update_industry).delete(delete_industry),
        )
        .route("/industries/{id}/active", axum::routing::post(industry_active))
        .route(
            "/industries/{id}/featured",
            axum::routing::post(industry_featured),
        )
        .route("/solutions", get(list_solutions).post(create_solution))
        .route(
            "/solutions/{id}",
            axum::routing::put(update_solution).delete(delete_solution),
        )
        .route("/solutions/{id}/active", axum::routing::post(solution_active))
        .route(
            "/solutions/{id}/featured",
            axum::routing::post(solution_featured),
        )
        .route("/states", get(list_states).post(create_state))
        .route(
            "/states/{id}",
            axum::routing::put(update_state).delete(delete_state),
        )
        .route("/states/{id}/active", axum::routing::post(state_active))
        .route(
            "/testimonials",
            get(list_testimonials).post(create_testimonial),
        )
        .route(
            "/testimonials/{id}",
            axum::routing::put(update_testimonial).delete(delete_testimonial),
        )
        .route(
            "/testimonials/{id}/active",
            axum::routing::post(testimonial_active),
        )
        .route(
            "/testimonials/{id}/featured",
            axum::routing::post(testimonial_featured),
        )
        .route("/news", get(list_news).post(create_news))
        .route(
            "/news/{id}",
            axum::routing::put(update_news).delete(delete_news),
        )
        .route("/news/{id}/active", axum::routing::post(news_active))
        .route("/news/{id}/featured", axum::routing::post(news_featured))
        .route("/gallery", get(list_gallery).post(create_gallery))
        .route(
            "/gallery/{id}",
            axum::routing::put(update_gallery).delete(delete_gallery),
        )
        .route("/gallery/{id}/active", axum::routing::post(gallery_active))
        .route(
            "/ai-configurations",
            get(list_ai_configs).post(create_ai_config),
        )
        .route(
            "/ai-configurations/{id}",
            axum::routing::put(update_ai_config).delete(delete_ai_config),
        )
        .route(
            "/ai-configurations/{id}/active",
            axum::routing::post(ai_config_enabled),
        )
        .route("/kpi/content-counts", get(kpi_content_counts))
        .route("/kpi/traffic", get(kpi_traffic))
        .route("/kpi/events-by-type", get(kpi_events_by_type))
}

/// Validate the `x-admin-token` header against the configured secret.
pub(super) fn require_admin(state: &SiteRouterState, headers: &HeaderMap) -> Result<(), ApiError> {
    let token = headers
        .get("x-admin-token")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if auth::validate_token(&state.config.admin_secret, token) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}

fn ok<T: serde::Serialize>(data: T) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

#[derive(Deserialize)]
struct ToggleBody {
    value: bool,
}

fn require_fields(fields: &[(&str, &str)]) -> Result<(), ApiError> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(ApiError::BadRequest(format!("{name} is required")));
        }
    }
    Ok(())
}

// ── Industries ──

async fn list_industries(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    Ok(ok(industry_service::list_all(&mut conn).await?))
}

async fn create_industry(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Json(body): Json<NewIndustry>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    require_fields(&[("slug", &body.slug), ("name", &body.name)])?;
    let mut conn = state.conn().await?;
    Ok(ok(industry_service::create(&mut conn, body).await?))
}

async fn update_industry(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<IndustryChanges>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = industry_service::update(&mut conn, id, body)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

async fn delete_industry(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    if industry_service::delete(&mut conn, id).await? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::NotFound)
    }
}

async fn industry_active(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<ToggleBody>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = industry_service::set_active(&mut conn, id, body.value)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

async fn industry_featured(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<ToggleBody>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = industry_service::set_featured(&mut conn, id, body.value)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

// ── Solutions ──

async fn list_solutions(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    Ok(ok(solution_service::list_all(&mut conn).await?))
}

async fn create_solution(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Json(body): Json<NewSolution>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    require_fields(&[
        ("slug", &body.slug),
        ("name", &body.name),
        ("category", &body.category),
    ])?;
    let mut conn = state.conn().await?;
    Ok(ok(solution_service::create(&mut conn, body).await?))
}

async fn update_solution(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<SolutionChanges>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = solution_service::update(&mut conn, id, body)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

async fn delete_solution(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    if solution_service::delete(&mut conn, id).await? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::NotFound)
    }
}

async fn solution_active(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<ToggleBody>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = solution_service::set_active(&mut conn, id, body.value)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

async fn solution_featured(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<ToggleBody>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = solution_service::set_featured(&mut conn, id, body.value)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

// ── States ──

async fn list_states(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    Ok(ok(state_service::list_all(&mut conn).await?))
}

async fn create_state(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Json(body): Json<NewStatePage>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    require_fields(&[
        ("code", &body.code),
        ("slug", &body.slug),
        ("name", &body.name),
    ])?;
    let mut conn = state.conn().await?;
    Ok(ok(state_service::create(&mut conn, body).await?))
}

async fn update_state(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<StatePageChanges>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = state_service::update(&mut conn, id, body)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

async fn delete_state(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    if state_service::delete(&mut conn, id).await? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::NotFound)
    }
}

async fn state_active(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<ToggleBody>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = state_service::set_active(&mut conn, id, body.value)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

// ── Testimonials ──

async fn list_testimonials(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    Ok(ok(testimonial_service::list_all(&mut conn).await?))
}

async fn create_testimonial(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Json(body): Json<NewTestimonial>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    require_fields(&[("author", &body.author), ("quote", &body.quote)])?;
    let mut conn = state.conn().await?;
    Ok(ok(testimonial_service::create(&mut conn, body).await?))
}

async fn update_testimonial(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<TestimonialChanges>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = testimonial_service::update(&mut conn, id, body)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

async fn delete_testimonial(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    if testimonial_service::delete(&mut conn, id).await? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::NotFound)
    }
}

async fn testimonial_active(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<ToggleBody>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = testimonial_service::set_active(&mut conn, id, body.value)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

async fn testimonial_featured(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<ToggleBody>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = testimonial_service::set_featured(&mut conn, id, body.value)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

// ── News & insights ──

async fn list_news(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    Ok(ok(news_service::list_all(&mut conn).await?))
}

async fn create_news(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Json(body): Json<NewNewsInsight>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    require_fields(&[("slug", &body.slug), ("title", &body.title)])?;
    let mut conn = state.conn().await?;
    Ok(ok(news_service::create(&mut conn, body).await?))
}

async fn update_news(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<NewsInsightChanges>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = news_service::update(&mut conn, id, body)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

async fn delete_news(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    if news_service::delete(&mut conn, id).await? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::NotFound)
    }
}

async fn news_active(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<ToggleBody>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = news_service::set_active(&mut conn, id, body.value)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

async fn news_featured(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<ToggleBody>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = news_service::set_featured(&mut conn, id, body.value)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

// ── Gallery ──

async fn list_gallery(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    Ok(ok(gallery_service::list_all(&mut conn).await?))
}

async fn create_gallery(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Json(body): Json<NewGalleryItem>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    require_fields(&[("title", &body.title), ("image_url", &body.image_url)])?;
    let mut conn = state.conn().await?;
    Ok(ok(gallery_service::create(&mut conn, body).await?))
}

async fn update_gallery(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<GalleryItemChanges>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = gallery_service::update(&mut conn, id, body)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

async fn delete_gallery(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    if gallery_service::delete(&mut conn, id).await? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::NotFound)
    }
}

async fn gallery_active(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<ToggleBody>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = gallery_service::set_active(&mut conn, id, body.value)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

// ── AI configurations ──

async fn list_ai_configs(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    Ok(ok(ai_config_service::list_all(&mut conn).await?))
}

async fn create_ai_config(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Json(body): Json<NewAiConfiguration>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    require_fields(&[("name", &body.name), ("provider", &body.provider)])?;
    let mut conn = state.conn().await?;
    Ok(ok(ai_config_service::create(&mut conn, body).await?))
}

async fn update_ai_config(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<AiConfigurationChanges>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = ai_config_service::update(&mut conn, id, body)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

async fn delete_ai_config(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    if ai_config_service::delete(&mut conn, id).await? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::NotFound)
    }
}

async fn ai_config_enabled(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<ToggleBody>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    let row = ai_config_service::set_enabled(&mut conn, id, body.value)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ok(row))
}

// ── Dashboard KPIs ──

#[derive(Deserialize)]
struct KpiQuery {
    days: Option<i32>,
}

async fn kpi_content_counts(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    Ok(ok(
        crate::dashboard::kpi::query_content_counts(&mut conn).await?,
    ))
}

async fn kpi_traffic(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Query(query): Query<KpiQuery>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    Ok(ok(
        crate::dashboard::kpi::query_traffic_by_day(&mut conn, query.days.unwrap_or(30)).await?,
    ))
}

async fn kpi_events_by_type(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Query(query): Query<KpiQuery>,
) -> ApiResult<Json<Value>> {
    require_admin(&state, &headers)?;
    let mut conn = state.conn().await?;
    Ok(ok(
        crate::dashboard::kpi::query_events_by_type(&mut conn, query.days.unwrap_or(30)).await?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    // Update/toggle handlers 404 only on an absent row (service `Ok(None)`).

    #[test]
    fn missing_row_maps_to_404() {
        let row: Option<i32> = None;
        let err = row.ok_or(ApiError::NotFound).unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn service_failures_are_not_collapsed_to_404() {
        // A slug collision on update surfaces as a unique violation, which
        // must reach the client as 500, not "not found".
        let unique = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_string()),
        );
        let err: ApiError = anyhow::Error::new(unique).into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
