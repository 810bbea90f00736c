//! Named provider configurations for the AI helper endpoints.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::ai_configurations;

/// Configuration row gating the weather delivery planner.
pub const WEATHER_DELIVERY_CONFIG: &str = "weather-delivery";

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = ai_configurations)]
pub struct AiConfiguration {
    pub id: i64,
    pub name: String,
    pub provider: String,
    pub settings: Option<serde_json::Value>,
    pub enabled: bool,
    pub create_date: Option<DateTime<Utc>>,
    pub write_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = ai_configurations)]
pub struct NewAiConfiguration {
    pub name: String,
    pub provider: String,
    pub settings: Option<serde_json::Value>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Default, AsChangeset, Deserialize)]
#[diesel(table_name = ai_configurations)]
pub struct AiConfigurationChanges {
    pub name: Option<String>,
    pub provider: Option<String>,
    pub settings: Option<serde_json::Value>,
    pub enabled: Option<bool>,
}
