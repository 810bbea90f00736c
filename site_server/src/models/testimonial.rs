//! Customer testimonials.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::testimonials;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = testimonials)]
pub struct Testimonial {
    pub id: i64,
    pub author: String,
    pub company: Option<String>,
    pub quote: String,
    pub rating: i32,
    pub featured: bool,
    pub sort_order: i32,
    pub active: bool,
    pub create_date: Option<DateTime<Utc>>,
    pub write_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = testimonials)]
pub struct NewTestimonial {
    pub author: String,
    pub company: Option<String>,
    pub quote: String,
    #[serde(default = "default_rating")]
    pub rating: i32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_rating() -> i32 {
    5
}

#[derive(Debug, Default, AsChangeset, Deserialize)]
#[diesel(table_name = testimonials)]
pub struct TestimonialChanges {
    pub author: Option<String>,
    pub company: Option<String>,
    pub quote: Option<String>,
    pub rating: Option<i32>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
}
