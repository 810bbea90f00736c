//! Cached weather provider responses, keyed by rounded coordinates.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::weather_cache;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = weather_cache)]
pub struct WeatherCacheEntry {
    pub id: i64,
    pub location_key: String,
    pub payload: serde_json::Value,
    pub fetched_at: DateTime<Utc>,
    pub create_date: Option<DateTime<Utc>>,
    pub write_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = weather_cache)]
pub struct NewWeatherCacheEntry {
    pub location_key: String,
    pub payload: serde_json::Value,
    pub fetched_at: DateTime<Utc>,
}
