//! Site platform configuration — loaded from environment variables.

#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Public base URL used for sitemap locs.
    pub site_base_url: String,
    /// Secret the admin token is derived from.
    pub admin_secret: String,
    /// Base URL of the external weather API.
    pub weather_api_base: String,
    /// API key for the weather provider.
    pub weather_api_key: String,
    /// Hours a weather_cache entry stays fresh.
    pub weather_cache_ttl_hours: i64,
    /// Default trailing window for the analytics summary.
    pub analytics_window_days: i64,
    /// Days before analytics events are purged.
    pub analytics_retention_days: i64,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        let site_base_url = std::env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let admin_secret = std::env::var("ADMIN_TOKEN_SECRET").unwrap_or_default();
        let weather_api_base = std::env::var("WEATHER_API_BASE")
            .unwrap_or_else(|_| "https://api.weatherhub.example.com".to_string());
        let weather_api_key = std::env::var("WEATHER_API_KEY").unwrap_or_default();
        let weather_cache_ttl_hours = std::env::var("WEATHER_CACHE_TTL_HOURS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(6);
        let analytics_window_days = std::env::var("ANALYTICS_WINDOW_DAYS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);
        let analytics_retention_days = std::env::var("ANALYTICS_RETENTION_DAYS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(180);

        if admin_secret.is_empty() {
            tracing::warn!("ADMIN_TOKEN_SECRET not set -- admin endpoints are unauthenticated");
        }
        if weather_api_key.is_empty() {
            tracing::warn!("WEATHER_API_KEY not set -- weather provider calls may be rejected");
        }

        Self {
            site_base_url,
            admin_secret,
            weather_api_base,
            weather_api_key,
            weather_cache_ttl_hours,
            analytics_window_days,
            analytics_retention_days,
        }
    }
}
