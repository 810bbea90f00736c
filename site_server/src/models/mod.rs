//! Content store data models.

pub mod ai_config;
pub mod analytics;
pub mod gallery;
pub mod industry;
pub mod news;
pub mod solution;
pub mod state;
pub mod testimonial;
pub mod weather;
