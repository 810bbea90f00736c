//! Product gallery images.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::product_gallery;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = product_gallery)]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    pub caption: Option<String>,
    pub image_url: String,
    pub category: String,
    pub sort_order: i32,
    pub active: bool,
    pub create_date: Option<DateTime<Utc>>,
    pub write_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = product_gallery)]
pub struct NewGalleryItem {
    pub title: String,
    pub caption: Option<String>,
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Default, AsChangeset, Deserialize)]
#[diesel(table_name = product_gallery)]
pub struct GalleryItemChanges {
    pub title: Option<String>,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
}
