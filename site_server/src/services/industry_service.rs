//! Industry page CRUD.

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::industry::{Industry, IndustryChanges, NewIndustry};
use crate::schema::industries;

/// List active industries in display order.
pub async fn list_active(conn: &mut AsyncPgConnection) -> anyhow::Result<Vec<Industry>> {
    let results = industries::table
        .filter(industries::active.eq(true))
        .order((industries::sort_order.asc(), industries::name.asc()))
        .load::<Industry>(conn)
        .await?;
    Ok(results)
}

/// List all industries, including inactive (admin view).
pub async fn list_all(conn: &mut AsyncPgConnection) -> anyhow::Result<Vec<Industry>> {
    let results = industries::table
        .order(industries::id.asc())
        .load::<Industry>(conn)
        .await?;
    Ok(results)
}

pub async fn find_by_slug(
    conn: &mut AsyncPgConnection,
    slug: &str,
) -> anyhow::Result<Option<Industry>> {
    let result = industries::table
        .filter(industries::slug.eq(slug))
        .filter(industries::active.eq(true))
        .first::<Industry>(conn)
        .await
        .optional()?;
    Ok(result)
}

pub async fn create(
    conn: &mut AsyncPgConnection,
    new_industry: NewIndustry,
) -> anyhow::Result<Industry> {
    let result = diesel::insert_into(industries::table)
        .values(&new_industry)
        .get_result::<Industry>(conn)
        .await?;

    crate::metrics::content_edited("industry", "create");
    tracing::info!(id = result.id, slug = %result.slug, "Industry created");
    Ok(result)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: IndustryChanges,
) -> anyhow::Result<Option<Industry>> {
    let result = diesel::update(industries::table.find(id))
        .set((&changes, industries::write_date.eq(Utc::now())))
        .get_result::<Industry>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("industry", "update");
    }
    Ok(result)
}

/// Delete an industry. Returns false when the id did not exist.
pub async fn delete(conn: &mut AsyncPgConnection, id: i64) -> anyhow::Result<bool> {
    let rows = diesel::delete(industries::table.find(id))
        .execute(conn)
        .await?;

    if rows > 0 {
        crate::metrics::content_edited("industry", "delete");
        tracing::info!(id, "Industry deleted");
    }
    Ok(rows > 0)
}

pub async fn set_active(
    conn: &mut AsyncPgConnection,
    id: i64,
    active: bool,
) -> anyhow::Result<Option<Industry>> {
    let result = diesel::update(industries::table.find(id))
        .set((
            industries::active.eq(active),
            industries::write_date.eq(Utc::now()),
        ))
        .get_result::<Industry>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("industry", "toggle");
    }
    Ok(result)
}

pub async fn set_featured(
    conn: &mut AsyncPgConnection,
    id: i64,
    featured: bool,
) -> anyhow::Result<Option<Industry>> {
    let result = diesel::update(industries::table.find(id))
        .set((
            industries::featured.eq(featured),
            industries::write_date.eq(Utc::now()),
        ))
        .get_result::<Industry>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("industry", "toggle");
    }
    Ok(result)
}
