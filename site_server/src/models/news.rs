//! News & insights articles for the resources section.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::news_insights;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = news_insights)]
pub struct NewsInsight {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub image_url: Option<String>,
    pub category: String,
    pub published_at: DateTime<Utc>,
    pub featured: bool,
    pub active: bool,
    pub create_date: Option<DateTime<Utc>>,
    pub write_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = news_insights)]
pub struct NewNewsInsight {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub image_url: Option<String>,
    pub category: String,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Default, AsChangeset, Deserialize)]
#[diesel(table_name = news_insights)]
pub struct NewsInsightChanges {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub featured: Option<bool>,
}
