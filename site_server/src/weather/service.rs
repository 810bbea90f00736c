//! Cached weather lookup and delivery plan assembly.

use chrono::{Duration, Utc};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::weather::{NewWeatherCacheEntry, WeatherCacheEntry};
use crate::schema::weather_cache;
use crate::weather::classify::{self, DeliveryPlan, DeliveryType};
use crate::weather::provider::{WeatherProvider, WeatherReport};

/// Cache key from coordinates rounded to ~1 km.
pub fn location_key(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.2},{longitude:.2}")
}

/// Fetch a weather report for a location, serving from `weather_cache` when
/// the entry is younger than the TTL.
///
/// Read-check-then-write: two concurrent misses may both hit the provider and
/// both upsert. The only cost is a duplicate fetch, so no guard is taken.
pub async fn get_report(
    conn: &mut AsyncPgConnection,
    provider: &dyn WeatherProvider,
    ttl_hours: i64,
    latitude: f64,
    longitude: f64,
) -> anyhow::Result<WeatherReport> {
    let key = location_key(latitude, longitude);
    let cutoff = Utc::now() - Duration::hours(ttl_hours);

    let cached: Option<WeatherCacheEntry> = weather_cache::table
        .filter(weather_cache::location_key.eq(&key))
        .first(conn)
        .await
        .optional()?;

    if let Some(entry) = cached {
        if entry.fetched_at > cutoff {
            if let Ok(report) = serde_json::from_value::<WeatherReport>(entry.payload) {
                crate::metrics::weather_cache_hit();
                return Ok(report);
            }
            // Unparseable payload (schema drift); fall through to refetch.
            tracing::warn!(location = %key, "Discarding unreadable weather cache entry");
        }
    }

    crate::metrics::weather_cache_miss();
    let report = provider.fetch(latitude, longitude).await?;

    let new_entry = NewWeatherCacheEntry {
        location_key: key,
        payload: serde_json::to_value(&report)?,
        fetched_at: Utc::now(),
    };
    diesel::insert_into(weather_cache::table)
        .values(&new_entry)
        .on_conflict(weather_cache::location_key)
        .do_update()
        .set((
            weather_cache::payload.eq(&new_entry.payload),
            weather_cache::fetched_at.eq(new_entry.fetched_at),
            weather_cache::write_date.eq(Utc::now()),
        ))
        .execute(conn)
        .await?;

    Ok(report)
}

/// Produce the delivery plan for one optimization request.
pub async fn plan_delivery(
    conn: &mut AsyncPgConnection,
    provider: &dyn WeatherProvider,
    ttl_hours: i64,
    latitude: f64,
    longitude: f64,
    delivery_type: DeliveryType,
) -> anyhow::Result<DeliveryPlan> {
    let report = get_report(conn, provider, ttl_hours, latitude, longitude).await?;
    let plan = classify::build_plan(&report.current, &report.forecast, delivery_type);

    crate::metrics::delivery_plan_generated(plan.suitability.as_str());
    tracing::info!(
        latitude,
        longitude,
        suitability = plan.suitability.as_str(),
        windows = plan.optimal_windows.len(),
        "Delivery plan generated"
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_key_rounds_coordinates() {
        assert_eq!(location_key(33.448_26, -112.073_99), "33.45,-112.07");
        assert_eq!(location_key(0.0, 0.0), "0.00,0.00");
    }
}
