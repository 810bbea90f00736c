//! Building solutions — rentable or purchasable modular configurations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::solutions;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = solutions)]
pub struct Solution {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub headline: String,
    pub summary: String,
    pub body: String,
    pub image_url: Option<String>,
    pub starting_price_cents: Option<i64>,
    pub featured: bool,
    pub sort_order: i32,
    pub active: bool,
    pub create_date: Option<DateTime<Utc>>,
    pub write_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = solutions)]
pub struct NewSolution {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub headline: String,
    pub summary: String,
    pub body: String,
    pub image_url: Option<String>,
    pub starting_price_cents: Option<i64>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Default, AsChangeset, Deserialize)]
#[diesel(table_name = solutions)]
pub struct SolutionChanges {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub starting_price_cents: Option<i64>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
}
