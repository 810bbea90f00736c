//! AI configuration CRUD.

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::ai_config::{AiConfiguration, AiConfigurationChanges, NewAiConfiguration};
use crate::schema::ai_configurations;

pub async fn list_all(conn: &mut AsyncPgConnection) -> anyhow::Result<Vec<AiConfiguration>> {
    let results = ai_configurations::table
        .order(ai_configurations::id.asc())
        .load::<AiConfiguration>(conn)
        .await?;
    Ok(results)
}

pub async fn find_by_name(
    conn: &mut AsyncPgConnection,
    name: &str,
) -> anyhow::Result<Option<AiConfiguration>> {
    let result = ai_configurations::table
        .filter(ai_configurations::name.eq(name))
        .first::<AiConfiguration>(conn)
        .await
        .optional()?;
    Ok(result)
}

pub async fn create(
    conn: &mut AsyncPgConnection,
    new_config: NewAiConfiguration,
) -> anyhow::Result<AiConfiguration> {
    let result = diesel::insert_into(ai_configurations::table)
        .values(&new_config)
        .get_result::<AiConfiguration>(conn)
        .await?;

    crate::metrics::content_edited("ai_configuration", "create");
    tracing::info!(id = result.id, name = %result.name, "AI configuration created");
    Ok(result)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: AiConfigurationChanges,
) -> anyhow::Result<Option<AiConfiguration>> {
    let result = diesel::update(ai_configurations::table.find(id))
        .set((&changes, ai_configurations::write_date.eq(Utc::now())))
        .get_result::<AiConfiguration>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("ai_configuration", "update");
    }
    Ok(result)
}

pub async fn delete(conn: &mut AsyncPgConnection, id: i64) -> anyhow::Result<bool> {
    let rows = diesel::delete(ai_configurations::table.find(id))
        .execute(conn)
        .await?;
    if rows > 0 {
        crate::metrics::content_edited("ai_configuration", "delete");
    }
    Ok(rows > 0)
}

pub async fn set_enabled(
    conn: &mut AsyncPgConnection,
    id: i64,
    enabled: bool,
) -> anyhow::Result<Option<AiConfiguration>> {
    let result = diesel::update(ai_configurations::table.find(id))
        .set((
            ai_configurations::enabled.eq(enabled),
            ai_configurations::write_date.eq(Utc::now()),
        ))
        .get_result::<AiConfiguration>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("ai_configuration", "toggle");
    }
    Ok(result)
}
