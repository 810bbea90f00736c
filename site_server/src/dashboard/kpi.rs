//! KPI queries for the admin dashboard.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use serde::Serialize;

/// Row counts per content table (active rows only).
#[derive(Debug, Serialize, QueryableByName)]
pub struct ContentCounts {
    #[diesel(sql_type = BigInt)]
    pub industries: i64,
    #[diesel(sql_type = BigInt)]
    pub solutions: i64,
    #[diesel(sql_type = BigInt)]
    pub states: i64,
    #[diesel(sql_type = BigInt)]
    pub testimonials: i64,
    #[diesel(sql_type = BigInt)]
    pub news: i64,
    #[diesel(sql_type = BigInt)]
    pub gallery: i64,
}

pub async fn query_content_counts(conn: &mut AsyncPgConnection) -> anyhow::Result<ContentCounts> {
    let result = diesel::sql_query(
        "SELECT \
            (SELECT COUNT(*) FROM industries WHERE active) AS industries, \
            (SELECT COUNT(*) FROM solutions WHERE active) AS solutions, \
            (SELECT COUNT(*) FROM states WHERE active) AS states, \
            (SELECT COUNT(*) FROM testimonials WHERE active) AS testimonials, \
            (SELECT COUNT(*) FROM news_insights WHERE active) AS news, \
            (SELECT COUNT(*) FROM product_gallery WHERE active) AS gallery",
    )
    .get_result(conn)
    .await?;
    Ok(result)
}

/// Event volume per calendar day over N days.
#[derive(Debug, Serialize, QueryableByName)]
pub struct TrafficByDay {
    #[diesel(sql_type = Text)]
    pub day: String,
    #[diesel(sql_type = BigInt)]
    pub events: i64,
}

pub async fn query_traffic_by_day(
    conn: &mut AsyncPgConnection,
    days: i32,
) -> anyhow::Result<Vec<TrafficByDay>> {
    let results = diesel::sql_query(format!(
        "SELECT TO_CHAR(occurred_at::date, 'YYYY-MM-DD') AS day, COUNT(*) AS events \
         FROM analytics_events \
         WHERE occurred_at >= NOW() - INTERVAL '{days} days' \
         GROUP BY occurred_at::date \
         ORDER BY occurred_at::date"
    ))
    .load(conn)
    .await?;
    Ok(results)
}

/// Event count grouped by type over N days.
#[derive(Debug, Serialize, QueryableByName)]
pub struct EventsByType {
    #[diesel(sql_type = Text)]
    pub event_type: String,
    #[diesel(sql_type = BigInt)]
    pub count: i64,
}

pub async fn query_events_by_type(
    conn: &mut AsyncPgConnection,
    days: i32,
) -> anyhow::Result<Vec<EventsByType>> {
    let results = diesel::sql_query(format!(
        "SELECT event_type, COUNT(*) AS count \
         FROM analytics_events \
         WHERE occurred_at >= NOW() - INTERVAL '{days} days' \
         GROUP BY event_type \
         ORDER BY count DESC"
    ))
    .load(conn)
    .await?;
    Ok(results)
}
