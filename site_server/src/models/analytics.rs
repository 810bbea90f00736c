//! Analytics event log — one row per visitor interaction.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::analytics_events;

/// Well-known event types used by the funnel aggregation.
pub const EVENT_PAGE_VIEW: &str = "page_view";
pub const EVENT_CALCULATOR_USE: &str = "calculator_use";
pub const EVENT_QUOTE_REQUEST: &str = "quote_request";
pub const EVENT_CONTACT_SUBMIT: &str = "contact_submit";

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = analytics_events)]
pub struct AnalyticsEvent {
    pub id: i64,
    pub session_id: String,
    pub event_type: String,
    pub page_path: String,
    pub referrer: Option<String>,
    pub calculator: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub occurred_at: DateTime<Utc>,
    pub create_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = analytics_events)]
pub struct NewAnalyticsEvent {
    pub session_id: String,
    pub event_type: String,
    pub page_path: String,
    pub referrer: Option<String>,
    pub calculator: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub occurred_at: DateTime<Utc>,
}
