//! Analytics event recording and windowed loading.

use chrono::{Duration, Utc};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::analytics::{AnalyticsEvent, NewAnalyticsEvent};
use crate::schema::analytics_events;

pub async fn record_event(
    conn: &mut AsyncPgConnection,
    new_event: NewAnalyticsEvent,
) -> anyhow::Result<AnalyticsEvent> {
    let result = diesel::insert_into(analytics_events::table)
        .values(&new_event)
        .get_result::<AnalyticsEvent>(conn)
        .await?;

    crate::metrics::analytics_event_recorded(&result.event_type);
    Ok(result)
}

/// Load events from the trailing N-day window, newest first.
pub async fn load_window(
    conn: &mut AsyncPgConnection,
    days: i64,
) -> anyhow::Result<Vec<AnalyticsEvent>> {
    let cutoff = Utc::now() - Duration::days(days);
    let results = analytics_events::table
        .filter(analytics_events::occurred_at.gt(cutoff))
        .order(analytics_events::occurred_at.desc())
        .load::<AnalyticsEvent>(conn)
        .await?;
    Ok(results)
}

/// Drop events past the retention horizon. Returns the number removed.
pub async fn purge_older_than(
    conn: &mut AsyncPgConnection,
    days: i64,
) -> anyhow::Result<usize> {
    let cutoff = Utc::now() - Duration::days(days);
    let rows = diesel::delete(
        analytics_events::table.filter(analytics_events::occurred_at.lt(cutoff)),
    )
    .execute(conn)
    .await?;

    if rows > 0 {
        tracing::info!(rows, days, "Purged aged analytics events");
    }
    Ok(rows)
}
