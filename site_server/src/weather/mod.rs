//! Weather-driven delivery recommendation: pure classifier, provider
//! integration, and the cached lookup service.

pub mod classify;
pub mod provider;
pub mod service;
