//! AI helper endpoints — weather-driven delivery planning and visitor
//! analytics. These serve the React widgets, so payloads are camelCase.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::analytics::aggregate::{self, AnalyticsSummary};
use crate::analytics::fingerprint;
use crate::error::{ApiError, ApiResult};
use crate::models::ai_config::WEATHER_DELIVERY_CONFIG;
use crate::models::analytics::NewAnalyticsEvent;
use crate::routes::SiteRouterState;
use crate::services::{ai_config_service, analytics_service};
use crate::weather::classify::{DeliveryPlan, DeliveryType};
use crate::weather::service as weather_service;

pub fn router() -> Router<SiteRouterState> {
    Router::new()
        .route("/weather-optimization", post(weather_optimization))
        .route(
            "/customer-analytics",
            get(analytics_summary).post(record_analytics_event),
        )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationBody {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherOptimizationRequest {
    pub location: LocationBody,
    #[serde(default = "default_delivery_type")]
    pub delivery_type: DeliveryType,
}

fn default_delivery_type() -> DeliveryType {
    DeliveryType::Standard
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeatherOptimizationResponse {
    success: bool,
    location: String,
    delivery_type: DeliveryType,
    #[serde(flatten)]
    plan: DeliveryPlan,
}

async fn weather_optimization(
    State(state): State<SiteRouterState>,
    Json(body): Json<WeatherOptimizationRequest>,
) -> ApiResult<Json<WeatherOptimizationResponse>> {
    let LocationBody {
        latitude,
        longitude,
        name,
    } = body.location;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(ApiError::BadRequest(
            "location coordinates out of range".to_string(),
        ));
    }

    let mut conn = state.conn().await?;

    // Admin kill switch: the seeded configuration row gates the planner.
    if let Some(config) = ai_config_service::find_by_name(&mut conn, WEATHER_DELIVERY_CONFIG).await? {
        if !config.enabled {
            return Err(ApiError::Unavailable(
                "weather optimization is disabled".to_string(),
            ));
        }
    }

    let plan = weather_service::plan_delivery(
        &mut conn,
        state.weather.as_ref(),
        state.config.weather_cache_ttl_hours,
        latitude,
        longitude,
        body.delivery_type,
    )
    .await?;

    Ok(Json(WeatherOptimizationResponse {
        success: true,
        location: name.unwrap_or_else(|| weather_service::location_key(latitude, longitude)),
        delivery_type: body.delivery_type,
        plan,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEventBody {
    #[serde(default)]
    pub session_id: Option<String>,
    pub event_type: String,
    pub page_path: String,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default)]
    pub calculator: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

async fn record_analytics_event(
    State(state): State<SiteRouterState>,
    headers: HeaderMap,
    Json(body): Json<AnalyticsEventBody>,
) -> ApiResult<Json<Value>> {
    if body.event_type.trim().is_empty() {
        return Err(ApiError::BadRequest("eventType is required".to_string()));
    }
    if body.page_path.trim().is_empty() {
        return Err(ApiError::BadRequest("pagePath is required".to_string()));
    }

    // Clients that do not manage a session get a daily fingerprint derived
    // from their address and user agent.
    let session_id = match body.session_id.filter(|s| !s.trim().is_empty()) {
        Some(id) => id,
        None => {
            let ip = fingerprint::client_ip(header_str(&headers, "x-forwarded-for"));
            let agent = header_str(&headers, "user-agent");
            fingerprint::session_fingerprint(ip, agent, Utc::now().date_naive())
        }
    };

    let mut conn = state.conn().await?;
    let event = analytics_service::record_event(
        &mut conn,
        NewAnalyticsEvent {
            session_id,
            event_type: body.event_type,
            page_path: body.page_path,
            referrer: body.referrer,
            calculator: body.calculator,
            metadata: body.metadata,
            occurred_at: Utc::now(),
        },
    )
    .await?;

    Ok(Json(json!({ "success": true, "eventId": event.id })))
}

fn header_str<'h>(headers: &'h HeaderMap, name: &str) -> &'h str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[derive(Deserialize)]
struct SummaryQuery {
    days: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    success: bool,
    window_days: i64,
    summary: AnalyticsSummary,
}

async fn analytics_summary(
    State(state): State<SiteRouterState>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<Json<SummaryResponse>> {
    let days = query
        .days
        .unwrap_or(state.config.analytics_window_days)
        .clamp(1, 365);

    let mut conn = state.conn().await?;
    let events = analytics_service::load_window(&mut conn, days).await?;
    let summary = aggregate::summarize(&events);

    Ok(Json(SummaryResponse {
        success: true,
        window_days: days,
        summary,
    }))
}
