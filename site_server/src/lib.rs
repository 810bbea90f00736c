//! ModSite server library — content tables, admin CRUD, analytics and the
//! weather-driven delivery planner behind the marketing site.
//!
//! The binary in `main.rs` wires this together; the `modsite-content` CLI
//! reuses the schema, seeder and auth modules directly.

pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod metrics;
pub mod migration;
pub mod models;
pub mod routes;
pub mod schema;
pub mod seeder;
pub mod services;
pub mod sitemap;
pub mod weather;
