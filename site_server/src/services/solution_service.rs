//! Building solution CRUD.

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::solution::{NewSolution, Solution, SolutionChanges};
use crate::schema::solutions;

/// List active solutions in display order, optionally restricted to a
/// category (`rental` or `sale`).
pub async fn list_active(
    conn: &mut AsyncPgConnection,
    category: Option<&str>,
) -> anyhow::Result<Vec<Solution>> {
    let mut query = solutions::table
        .filter(solutions::active.eq(true))
        .order((solutions::sort_order.asc(), solutions::name.asc()))
        .into_boxed();
    if let Some(category) = category {
        query = query.filter(solutions::category.eq(category.to_string()));
    }
    let results = query.load::<Solution>(conn).await?;
    Ok(results)
}

/// Featured solutions for the home page.
pub async fn list_featured(conn: &mut AsyncPgConnection) -> anyhow::Result<Vec<Solution>> {
    let results = solutions::table
        .filter(solutions::active.eq(true))
        .filter(solutions::featured.eq(true))
        .order(solutions::sort_order.asc())
        .load::<Solution>(conn)
        .await?;
    Ok(results)
}

pub async fn list_all(conn: &mut AsyncPgConnection) -> anyhow::Result<Vec<Solution>> {
    let results = solutions::table
        .order(solutions::id.asc())
        .load::<Solution>(conn)
        .await?;
    Ok(results)
}

pub async fn find_by_slug(
    conn: &mut AsyncPgConnection,
    slug: &str,
) -> anyhow::Result<Option<Solution>> {
    let result = solutions::table
        .filter(solutions::slug.eq(slug))
        .filter(solutions::active.eq(true))
        .first::<Solution>(conn)
        .await
        .optional()?;
    Ok(result)
}

pub async fn create(
    conn: &mut AsyncPgConnection,
    new_solution: NewSolution,
) -> anyhow::Result<Solution> {
    let result = diesel::insert_into(solutions::table)
        .values(&new_solution)
        .get_result::<Solution>(conn)
        .await?;

    crate::metrics::content_edited("solution", "create");
    tracing::info!(id = result.id, slug = %result.slug, "Solution created");
    Ok(result)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: SolutionChanges,
) -> anyhow::Result<Option<Solution>> {
    let result = diesel::update(solutions::table.find(id))
        .set((&changes, solutions::write_date.eq(Utc::now())))
        .get_result::<Solution>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("solution", "update");
    }
    Ok(result)
}

pub async fn delete(conn: &mut AsyncPgConnection, id: i64) -> anyhow::Result<bool> {
    let rows = diesel::delete(solutions::table.find(id))
        .execute(conn)
        .await?;
    if rows > 0 {
        crate::metrics::content_edited("solution", "delete");
        tracing::info!(id, "Solution deleted");
    }
    Ok(rows > 0)
}

pub async fn set_active(
    conn: &mut AsyncPgConnection,
    id: i64,
    active: bool,
) -> anyhow::Result<Option<Solution>> {
    let result = diesel::update(solutions::table.find(id))
        .set((
            solutions::active.eq(active),
            solutions::write_date.eq(Utc::now()),
        ))
        .get_result::<Solution>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("solution", "toggle");
    }
    Ok(result)
}

pub async fn set_featured(
    conn: &mut AsyncPgConnection,
    id: i64,
    featured: bool,
) -> anyhow::Result<Option<Solution>> {
    let result = diesel::update(solutions::table.find(id))
        .set((
            solutions::featured.eq(featured),
            solutions::write_date.eq(Utc::now()),
        ))
        .get_result::<Solution>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("solution", "toggle");
    }
    Ok(result)
}
