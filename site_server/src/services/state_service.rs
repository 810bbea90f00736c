//! Location (state) page CRUD.

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::state::{NewStatePage, StatePage, StatePageChanges};
use crate::schema::states;

/// List active state pages alphabetically.
pub async fn list_active(conn: &mut AsyncPgConnection) -> anyhow::Result<Vec<StatePage>> {
    let results = states::table
        .filter(states::active.eq(true))
        .order(states::name.asc())
        .load::<StatePage>(conn)
        .await?;
    Ok(results)
}

pub async fn list_all(conn: &mut AsyncPgConnection) -> anyhow::Result<Vec<StatePage>> {
    let results = states::table
        .order(states::code.asc())
        .load::<StatePage>(conn)
        .await?;
    Ok(results)
}

/// Look up an active state page by its two-letter code (case-insensitive).
pub async fn find_by_code(
    conn: &mut AsyncPgConnection,
    code: &str,
) -> anyhow::Result<Option<StatePage>> {
    let result = states::table
        .filter(states::code.eq(code.to_uppercase()))
        .filter(states::active.eq(true))
        .first::<StatePage>(conn)
        .await
        .optional()?;
    Ok(result)
}

pub async fn create(
    conn: &mut AsyncPgConnection,
    new_state: NewStatePage,
) -> anyhow::Result<StatePage> {
    let result = diesel::insert_into(states::table)
        .values(&new_state)
        .get_result::<StatePage>(conn)
        .await?;

    crate::metrics::content_edited("state", "create");
    tracing::info!(id = result.id, code = %result.code, "State page created");
    Ok(result)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: StatePageChanges,
) -> anyhow::Result<Option<StatePage>> {
    let result = diesel::update(states::table.find(id))
        .set((&changes, states::write_date.eq(Utc::now())))
        .get_result::<StatePage>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("state", "update");
    }
    Ok(result)
}

pub async fn delete(conn: &mut AsyncPgConnection, id: i64) -> anyhow::Result<bool> {
    let rows = diesel::delete(states::table.find(id)).execute(conn).await?;
    if rows > 0 {
        crate::metrics::content_edited("state", "delete");
        tracing::info!(id, "State page deleted");
    }
    Ok(rows > 0)
}

pub async fn set_active(
    conn: &mut AsyncPgConnection,
    id: i64,
    active: bool,
) -> anyhow::Result<Option<StatePage>> {
    let result = diesel::update(states::table.find(id))
        .set((states::active.eq(active), states::write_date.eq(Utc::now())))
        .get_result::<StatePage>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("state", "toggle");
    }
    Ok(result)
}
