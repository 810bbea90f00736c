//! News & insights CRUD.

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::news::{NewNewsInsight, NewsInsight, NewsInsightChanges};
use crate::schema::news_insights;

/// Published articles, newest first.
pub async fn list_published(
    conn: &mut AsyncPgConnection,
    limit: i64,
) -> anyhow::Result<Vec<NewsInsight>> {
    let results = news_insights::table
        .filter(news_insights::active.eq(true))
        .filter(news_insights::published_at.le(Utc::now()))
        .order(news_insights::published_at.desc())
        .limit(limit)
        .load::<NewsInsight>(conn)
        .await?;
    Ok(results)
}

pub async fn list_all(conn: &mut AsyncPgConnection) -> anyhow::Result<Vec<NewsInsight>> {
    let results = news_insights::table
        .order(news_insights::id.desc())
        .load::<NewsInsight>(conn)
        .await?;
    Ok(results)
}

pub async fn find_by_slug(
    conn: &mut AsyncPgConnection,
    slug: &str,
) -> anyhow::Result<Option<NewsInsight>> {
    let result = news_insights::table
        .filter(news_insights::slug.eq(slug))
        .filter(news_insights::active.eq(true))
        .first::<NewsInsight>(conn)
        .await
        .optional()?;
    Ok(result)
}

pub async fn create(
    conn: &mut AsyncPgConnection,
    new_article: NewNewsInsight,
) -> anyhow::Result<NewsInsight> {
    let result = diesel::insert_into(news_insights::table)
        .values(&new_article)
        .get_result::<NewsInsight>(conn)
        .await?;

    crate::metrics::content_edited("news", "create");
    tracing::info!(id = result.id, slug = %result.slug, "Article created");
    Ok(result)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: NewsInsightChanges,
) -> anyhow::Result<Option<NewsInsight>> {
    let result = diesel::update(news_insights::table.find(id))
        .set((&changes, news_insights::write_date.eq(Utc::now())))
        .get_result::<NewsInsight>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("news", "update");
    }
    Ok(result)
}

pub async fn delete(conn: &mut AsyncPgConnection, id: i64) -> anyhow::Result<bool> {
    let rows = diesel::delete(news_insights::table.find(id))
        .execute(conn)
        .await?;
    if rows > 0 {
        crate::metrics::content_edited("news", "delete");
    }
    Ok(rows > 0)
}

pub async fn set_active(
    conn: &mut AsyncPgConnection,
    id: i64,
    active: bool,
) -> anyhow::Result<Option<NewsInsight>> {
    let result = diesel::update(news_insights::table.find(id))
        .set((
            news_insights::active.eq(active),
            news_insights::write_date.eq(Utc::now()),
        ))
        .get_result::<NewsInsight>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("news", "toggle");
    }
    Ok(result)
}

pub async fn set_featured(
    conn: &mut AsyncPgConnection,
    id: i64,
    featured: bool,
) -> anyhow::Result<Option<NewsInsight>> {
    let result = diesel::update(news_insights::table.find(id))
        .set((
            news_insights::featured.eq(featured),
            news_insights::write_date.eq(Utc::now()),
        ))
        .get_result::<NewsInsight>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("news", "toggle");
    }
    Ok(result)
}
