//! HTTP routes — public content, admin CRUD, AI helpers, sitemap.

pub mod admin;
pub mod ai;
pub mod content;
pub mod populate;

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::db::DbPool;
use crate::error::{ApiError, ApiResult};
use crate::weather::provider::WeatherProvider;

/// Shared state for all route handlers.
#[derive(Clone)]
pub struct SiteRouterState {
    pub pool: DbPool,
    pub config: Arc<SiteConfig>,
    pub weather: Arc<dyn WeatherProvider>,
}

impl SiteRouterState {
    /// Check out a pooled connection.
    pub async fn conn(
        &self,
    ) -> Result<diesel_async::pooled_connection::deadpool::Object<diesel_async::AsyncPgConnection>, ApiError>
    {
        self.pool
            .get()
            .await
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("diesel pool: {e}")))
    }
}

/// Build the site's Axum router.
pub fn site_router(state: SiteRouterState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/sitemap.xml", get(sitemap_handler))
        .nest("/api/content", content::router())
        .route("/api/pages/home", get(content::home_page))
        .nest("/api/ai", ai::router())
        .route("/api/populate-states", post(populate::populate_states))
        .route(
            "/api/populate-complete-industries",
            post(populate::populate_industries),
        )
        .nest("/admin/api", admin::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn sitemap_handler(State(state): State<SiteRouterState>) -> ApiResult<impl IntoResponse> {
    let mut conn = state.conn().await?;
    let xml = crate::sitemap::build(&mut conn, &state.config.site_base_url).await?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}
