//! Industry pages — one row per industry vertical served.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::industries;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = industries)]
pub struct Industry {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub body: String,
    pub image_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub active: bool,
    pub create_date: Option<DateTime<Utc>>,
    pub write_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = industries)]
pub struct NewIndustry {
    pub slug: String,
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub body: String,
    pub image_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub sort_order: i32,
}

/// Partial update from the admin edit form. Absent fields are left untouched.
#[derive(Debug, Default, AsChangeset, Deserialize)]
#[diesel(table_name = industries)]
pub struct IndustryChanges {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
}
