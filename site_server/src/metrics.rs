//! Prometheus metrics for content platform observability.

use metrics::{counter, gauge};

/// Initialize metrics exporter (Prometheus).
pub fn init_metrics() {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    if let Err(e) = builder.install() {
        tracing::warn!("Failed to install Prometheus exporter: {}", e);
    }
}

/// Record an admin content edit.
pub fn content_edited(entity: &str, action: &str) {
    counter!("site_content_edits_total",
        "entity" => entity.to_string(), "action" => action.to_string())
    .increment(1);
}

/// Record one analytics event ingested.
pub fn analytics_event_recorded(event_type: &str) {
    counter!("site_analytics_events_total", "event" => event_type.to_string()).increment(1);
}

/// Record a weather cache hit.
pub fn weather_cache_hit() {
    counter!("site_weather_cache_total", "result" => "hit").increment(1);
}

/// Record a weather cache miss (provider fetch).
pub fn weather_cache_miss() {
    counter!("site_weather_cache_total", "result" => "miss").increment(1);
}

/// Record a generated delivery plan by suitability tier.
pub fn delivery_plan_generated(tier: &str) {
    counter!("site_delivery_plans_total", "tier" => tier.to_string()).increment(1);
}

/// Record a sitemap render and its size.
pub fn sitemap_rendered(url_count: usize) {
    counter!("site_sitemap_renders_total").increment(1);
    gauge!("site_sitemap_urls").set(url_count as f64);
}
