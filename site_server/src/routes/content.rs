//! Public content API — active rows only, consumed by the page templates.

use axum::extract::{Path, Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::models::gallery::GalleryItem;
use crate::models::industry::Industry;
use crate::models::news::NewsInsight;
use crate::models::solution::Solution;
use crate::models::state::StatePage;
use crate::models::testimonial::Testimonial;
use crate::routes::SiteRouterState;
use crate::services::{
    gallery_service, industry_service, news_service, solution_service, state_service,
    testimonial_service,
};

pub fn router() -> Router<SiteRouterState> {
    Router::new()
        .route("/industries", get(list_industries))
        .route("/industries/{slug}", get(get_industry))
        .route("/solutions", get(list_solutions))
        .route("/solutions/{slug}", get(get_solution))
        .route("/states", get(list_states))
        .route("/states/{code}", get(get_state))
        .route("/testimonials", get(list_testimonials))
        .route("/news", get(list_news))
        .route("/news/{slug}", get(get_news))
        .route("/gallery", get(list_gallery))
}

async fn list_industries(State(state): State<SiteRouterState>) -> ApiResult<Json<Vec<Industry>>> {
    let mut conn = state.conn().await?;
    Ok(Json(industry_service::list_active(&mut conn).await?))
}

async fn get_industry(
    State(state): State<SiteRouterState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Industry>> {
    let mut conn = state.conn().await?;
    industry_service::find_by_slug(&mut conn, &slug)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[derive(Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

async fn list_solutions(
    State(state): State<SiteRouterState>,
    Query(query): Query<CategoryQuery>,
) -> ApiResult<Json<Vec<Solution>>> {
    let mut conn = state.conn().await?;
    Ok(Json(
        solution_service::list_active(&mut conn, query.category.as_deref()).await?,
    ))
}

async fn get_solution(
    State(state): State<SiteRouterState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Solution>> {
    let mut conn = state.conn().await?;
    solution_service::find_by_slug(&mut conn, &slug)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn list_states(State(state): State<SiteRouterState>) -> ApiResult<Json<Vec<StatePage>>> {
    let mut conn = state.conn().await?;
    Ok(Json(state_service::list_active(&mut conn).await?))
}

async fn get_state(
    State(state): State<SiteRouterState>,
    Path(code): Path<String>,
) -> ApiResult<Json<StatePage>> {
    let mut conn = state.conn().await?;
    state_service::find_by_code(&mut conn, &code)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn list_testimonials(
    State(state): State<SiteRouterState>,
) -> ApiResult<Json<Vec<Testimonial>>> {
    let mut conn = state.conn().await?;
    Ok(Json(testimonial_service::list_active(&mut conn).await?))
}

#[derive(Deserialize)]
pub struct NewsQuery {
    pub limit: Option<i64>,
}

async fn list_news(
    State(state): State<SiteRouterState>,
    Query(query): Query<NewsQuery>,
) -> ApiResult<Json<Vec<NewsInsight>>> {
    let mut conn = state.conn().await?;
    Ok(Json(
        news_service::list_published(&mut conn, query.limit.unwrap_or(20)).await?,
    ))
}

async fn get_news(
    State(state): State<SiteRouterState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<NewsInsight>> {
    let mut conn = state.conn().await?;
    news_service::find_by_slug(&mut conn, &slug)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn list_gallery(
    State(state): State<SiteRouterState>,
    Query(query): Query<CategoryQuery>,
) -> ApiResult<Json<Vec<GalleryItem>>> {
    let mut conn = state.conn().await?;
    Ok(Json(
        gallery_service::list_active(&mut conn, query.category.as_deref()).await?,
    ))
}

/// Aggregated payload for the home page: several tables reshaped into one
/// response so the template renders from a single fetch.
#[derive(Serialize)]
pub struct HomePage {
    pub featured_solutions: Vec<Solution>,
    pub featured_industries: Vec<Industry>,
    pub testimonials: Vec<Testimonial>,
    pub recent_news: Vec<NewsInsight>,
}

pub async fn home_page(State(state): State<SiteRouterState>) -> ApiResult<Json<HomePage>> {
    let mut conn = state.conn().await?;

    let featured_solutions = solution_service::list_featured(&mut conn).await?;
    let featured_industries = industry_service::list_active(&mut conn)
        .await?
        .into_iter()
        .filter(|i| i.featured)
        .collect();
    let testimonials = testimonial_service::list_featured(&mut conn).await?;
    let recent_news = news_service::list_published(&mut conn, 3).await?;

    Ok(Json(HomePage {
        featured_solutions,
        featured_industries,
        testimonials,
        recent_news,
    }))
}
