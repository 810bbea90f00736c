//! Location pages — one row per US state.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::states;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = states)]
pub struct StatePage {
    pub id: i64,
    pub code: String,
    pub slug: String,
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub body: String,
    pub image_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub service_area: bool,
    pub active: bool,
    pub create_date: Option<DateTime<Utc>>,
    pub write_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = states)]
pub struct NewStatePage {
    pub code: String,
    pub slug: String,
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub body: String,
    pub image_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(default = "default_true")]
    pub service_area: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Default, AsChangeset, Deserialize)]
#[diesel(table_name = states)]
pub struct StatePageChanges {
    pub code: Option<String>,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub service_area: Option<bool>,
}
