//! Content platform services — CRUD and aggregation over the content store.

pub mod ai_config_service;
pub mod analytics_service;
pub mod auth;
pub mod gallery_service;
pub mod industry_service;
pub mod news_service;
pub mod solution_service;
pub mod state_service;
pub mod testimonial_service;
