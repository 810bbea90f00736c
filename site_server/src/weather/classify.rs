//! Delivery-suitability classification over weather observations.
//!
//! Pure and synchronous: threshold bands over wind speed, precipitation and
//! temperature produce a suitability tier, and fixed independent thresholds
//! produce risk strings, advisories, a surcharge percentage and a schedule
//! delay. Units are °F, mph, inches and miles.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single weather observation (current conditions or one forecast day).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub visibility: f64,
}

/// One dated forecast entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub weather: WeatherSnapshot,
}

/// Requested delivery mode; affects schedule-delay handling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    Standard,
    Expedited,
    Scheduled,
}

/// Delivery suitability tier, worst to best: poor < fair < good < excellent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Suitability {
    pub fn as_str(self) -> &'static str {
        match self {
            Suitability::Excellent => "excellent",
            Suitability::Good => "good",
            Suitability::Fair => "fair",
            Suitability::Poor => "poor",
        }
    }
}

// Good band: calm enough to crane-set a unit without restriction.
const GOOD_WIND_MAX: f64 = 20.0;
const GOOD_PRECIP_MAX: f64 = 0.10;
const GOOD_TEMP_MIN: f64 = 30.0;
const GOOD_TEMP_MAX: f64 = 90.0;

// Excellent split inside the good band.
const EXCELLENT_WIND_MAX: f64 = 15.0;
const EXCELLENT_PRECIP_MAX: f64 = 0.05;

// Fair band: deliverable with precautions.
const FAIR_WIND_MAX: f64 = 30.0;
const FAIR_PRECIP_MAX: f64 = 0.30;
const FAIR_TEMP_MIN: f64 = 15.0;
const FAIR_TEMP_MAX: f64 = 100.0;

// Independent risk thresholds.
const RISK_WIND: f64 = 30.0;
const RISK_PRECIP: f64 = 0.3;
const RISK_TEMP_LOW: f64 = 20.0;
const RISK_TEMP_HIGH: f64 = 95.0;
const RISK_VISIBILITY: f64 = 3.0;
const STORM_PRECIP: f64 = 0.5;
const STORM_WIND: f64 = 25.0;

/// Maximum number of forecast days surfaced as optimal windows.
pub const MAX_OPTIMAL_WINDOWS: usize = 7;

/// Classify one observation against the nested threshold bands.
pub fn classify(w: &WeatherSnapshot) -> Suitability {
    let in_good = w.wind_speed <= GOOD_WIND_MAX
        && w.precipitation <= GOOD_PRECIP_MAX
        && (GOOD_TEMP_MIN..=GOOD_TEMP_MAX).contains(&w.temperature);

    if in_good {
        if w.wind_speed <= EXCELLENT_WIND_MAX && w.precipitation <= EXCELLENT_PRECIP_MAX {
            return Suitability::Excellent;
        }
        return Suitability::Good;
    }

    let in_fair = w.wind_speed <= FAIR_WIND_MAX
        && w.precipitation <= FAIR_PRECIP_MAX
        && (FAIR_TEMP_MIN..=FAIR_TEMP_MAX).contains(&w.temperature);

    if in_fair {
        Suitability::Fair
    } else {
        Suitability::Poor
    }
}

/// A deliverable forecast day with crew guidance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalWindow {
    pub date: NaiveDate,
    pub suitability: Suitability,
    pub time_slot: String,
    pub reason: String,
}

/// Rule-based best time slot for a deliverable day.
fn best_time_slot(w: &WeatherSnapshot) -> &'static str {
    if w.wind_speed > EXCELLENT_WIND_MAX {
        // Winds typically build through the afternoon.
        "early morning (6am-10am)"
    } else if w.temperature > 85.0 {
        "morning (7am-11am), before peak heat"
    } else if w.temperature < 35.0 {
        "late morning (10am-2pm), after surfaces thaw"
    } else {
        "standard window (8am-4pm)"
    }
}

/// Canned human-readable justification keyed by tier.
fn justification(tier: Suitability) -> &'static str {
    match tier {
        Suitability::Excellent => "Clear conditions, low wind. Ideal for crane set and site work.",
        Suitability::Good => "Favorable conditions. Delivery can proceed normally.",
        Suitability::Fair => "Workable but marginal. Expect slower unloading and extra tie-downs.",
        Suitability::Poor => "Unsafe for transport or crane operation.",
    }
}

/// Filter the forecast to deliverable days, capped at [`MAX_OPTIMAL_WINDOWS`].
///
/// A day classified `poor` is never included.
pub fn optimal_windows(forecast: &[ForecastDay]) -> Vec<OptimalWindow> {
    forecast
        .iter()
        .filter_map(|day| {
            let tier = classify(&day.weather);
            if tier == Suitability::Poor {
                return None;
            }
            Some(OptimalWindow {
                date: day.date,
                suitability: tier,
                time_slot: best_time_slot(&day.weather).to_string(),
                reason: justification(tier).to_string(),
            })
        })
        .take(MAX_OPTIMAL_WINDOWS)
        .collect()
}

/// Collect risk strings by independently testing fixed thresholds.
pub fn risk_factors(current: &WeatherSnapshot, forecast: &[ForecastDay]) -> Vec<String> {
    let mut risks = Vec::new();

    if current.wind_speed > RISK_WIND {
        risks.push(format!(
            "High winds ({:.0} mph) exceed safe crane operation limits",
            current.wind_speed
        ));
    }
    if current.precipitation > RISK_PRECIP {
        risks.push(format!(
            "Heavy precipitation ({:.2} in) will soften site access roads",
            current.precipitation
        ));
    }
    if current.temperature < RISK_TEMP_LOW {
        risks.push(format!(
            "Extreme cold ({:.0}F) affects hydraulic equipment and crew safety",
            current.temperature
        ));
    } else if current.temperature > RISK_TEMP_HIGH {
        risks.push(format!(
            "Extreme heat ({:.0}F) requires shortened crew shifts",
            current.temperature
        ));
    }
    if current.visibility < RISK_VISIBILITY {
        risks.push(format!(
            "Low visibility ({:.1} mi) unsafe for oversize-load transport",
            current.visibility
        ));
    }

    // Upcoming storm flags: heavy rain combined with strong wind on any
    // forecast day reads as an approaching storm system.
    for day in forecast {
        if day.weather.precipitation > STORM_PRECIP && day.weather.wind_speed > STORM_WIND {
            risks.push(format!("Storm system approaching on {}", day.date));
            break;
        }
    }

    risks
}

/// Fixed surcharge percentage keyed by tier, with an additive penalty when
/// three or more risk factors are present.
pub fn weather_surcharge(tier: Suitability, risk_count: usize) -> u32 {
    let base = match tier {
        Suitability::Excellent | Suitability::Good => 0,
        Suitability::Fair => 15,
        Suitability::Poor => 35,
    };
    if risk_count >= 3 {
        base + 10
    } else {
        base
    }
}

/// Preparation and equipment advisories keyed by the same fixed thresholds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub preparation: Vec<String>,
    pub equipment: Vec<String>,
}

fn recommendations(current: &WeatherSnapshot) -> Recommendations {
    let mut rec = Recommendations::default();

    if current.wind_speed > RISK_WIND {
        rec.preparation
            .push("Postpone crane set until winds drop below 30 mph".to_string());
        rec.equipment.push("Additional tag lines".to_string());
    } else if current.wind_speed > EXCELLENT_WIND_MAX {
        rec.preparation
            .push("Schedule crane work for the calmest part of the day".to_string());
    }
    if current.precipitation > RISK_PRECIP {
        rec.preparation
            .push("Lay tracking mats on unpaved site access".to_string());
        rec.equipment.push("Ground protection mats".to_string());
    }
    if current.temperature < RISK_TEMP_LOW {
        rec.preparation
            .push("Warm up hydraulic systems before lifting".to_string());
        rec.equipment.push("Cold-weather hydraulic fluid".to_string());
    }
    if current.temperature > RISK_TEMP_HIGH {
        rec.preparation
            .push("Rotate crews and stage water on site".to_string());
    }
    if current.visibility < RISK_VISIBILITY {
        rec.preparation
            .push("Hold transport until visibility improves".to_string());
        rec.equipment.push("Escort vehicle with high-visibility lighting".to_string());
    }

    rec
}

/// Accumulate an estimated schedule delay from the same thresholds.
fn schedule_delay_hours(current: &WeatherSnapshot) -> u32 {
    let mut hours = 0;
    if current.wind_speed > RISK_WIND {
        hours += 24;
    }
    if current.precipitation > RISK_PRECIP {
        hours += 12;
    }
    if current.temperature < RISK_TEMP_LOW || current.temperature > RISK_TEMP_HIGH {
        hours += 12;
    }
    if current.visibility < RISK_VISIBILITY {
        hours += 6;
    }
    hours
}

/// Full advisory output for one delivery request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPlan {
    pub suitability: Suitability,
    pub optimal_windows: Vec<OptimalWindow>,
    pub risk_factors: Vec<String>,
    pub weather_surcharge: u32,
    pub rush_recommended: bool,
    pub recommendations: Recommendations,
    pub schedule_delay_hours: u32,
}

/// Assemble the delivery plan for current conditions plus a forecast.
pub fn build_plan(
    current: &WeatherSnapshot,
    forecast: &[ForecastDay],
    delivery_type: DeliveryType,
) -> DeliveryPlan {
    let suitability = classify(current);
    let windows = optimal_windows(forecast);
    let risks = risk_factors(current, forecast);
    let surcharge = weather_surcharge(suitability, risks.len());
    let rush = risks.iter().any(|r| r.contains("Storm"));

    let mut delay = schedule_delay_hours(current);
    // Expedited deliveries bring a rush crew that absorbs minor slowdowns,
    // but never overrides an active risk.
    if delivery_type == DeliveryType::Expedited && risks.is_empty() {
        delay = 0;
    }

    DeliveryPlan {
        suitability,
        optimal_windows: windows,
        risk_factors: risks,
        weather_surcharge: surcharge,
        rush_recommended: rush,
        recommendations: recommendations(current),
        schedule_delay_hours: delay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn snap(temperature: f64, wind_speed: f64, precipitation: f64, visibility: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature,
            wind_speed,
            precipitation,
            visibility,
        }
    }

    fn day(d: u32, w: WeatherSnapshot) -> ForecastDay {
        ForecastDay {
            date: NaiveDate::from_ymd_opt(2025, 6, d).unwrap(),
            weather: w,
        }
    }

    #[test]
    fn calm_mild_days_are_excellent() {
        for wind in [0.0, 7.5, 15.0] {
            for precip in [0.0, 0.05] {
                for temp in [30.0, 65.0, 90.0] {
                    let tier = classify(&snap(temp, wind, precip, 10.0));
                    assert_eq!(tier, Suitability::Excellent, "temp={temp} wind={wind} precip={precip}");
                }
            }
        }
    }

    #[test]
    fn good_band_without_excellent_split_is_good() {
        assert_eq!(classify(&snap(70.0, 18.0, 0.02, 10.0)), Suitability::Good);
        assert_eq!(classify(&snap(70.0, 10.0, 0.08, 10.0)), Suitability::Good);
    }

    #[test]
    fn fair_band_is_fair() {
        assert_eq!(classify(&snap(20.0, 25.0, 0.2, 8.0)), Suitability::Fair);
        assert_eq!(classify(&snap(98.0, 5.0, 0.0, 10.0)), Suitability::Fair);
    }

    #[test]
    fn severe_conditions_are_poor() {
        assert_eq!(classify(&snap(70.0, 36.0, 0.0, 10.0)), Suitability::Poor);
        assert_eq!(classify(&snap(70.0, 5.0, 0.6, 10.0)), Suitability::Poor);
        assert_eq!(classify(&snap(-25.0, 5.0, 0.0, 10.0)), Suitability::Poor);
    }

    #[test]
    fn surcharge_is_monotone_in_tier() {
        let excellent = weather_surcharge(Suitability::Excellent, 0);
        let good = weather_surcharge(Suitability::Good, 0);
        let fair = weather_surcharge(Suitability::Fair, 0);
        let poor = weather_surcharge(Suitability::Poor, 0);
        assert!(excellent <= good && good < fair && fair < poor);
    }

    #[test]
    fn surcharge_penalty_applies_at_three_risks() {
        assert_eq!(weather_surcharge(Suitability::Poor, 2), 35);
        assert_eq!(weather_surcharge(Suitability::Poor, 3), 45);
        assert_eq!(weather_surcharge(Suitability::Fair, 4), 25);
    }

    #[test]
    fn optimal_windows_exclude_poor_days_and_cap_at_seven() {
        let clear = snap(70.0, 8.0, 0.0, 10.0);
        let stormy = snap(70.0, 40.0, 0.8, 2.0);
        let mut forecast: Vec<ForecastDay> = (1..=10).map(|d| day(d, clear)).collect();
        forecast.insert(2, day(20, stormy));

        let windows = optimal_windows(&forecast);
        assert_eq!(windows.len(), MAX_OPTIMAL_WINDOWS);
        assert!(windows.iter().all(|w| w.suitability != Suitability::Poor));
        assert!(windows.iter().all(|w| w.date.day() != 20));
    }

    #[test]
    fn risk_factors_fire_independently() {
        let bad = snap(10.0, 35.0, 0.4, 2.0);
        let risks = risk_factors(&bad, &[]);
        assert_eq!(risks.len(), 4);
        assert!(risks.iter().any(|r| r.contains("winds")));
        assert!(risks.iter().any(|r| r.contains("precipitation")));
        assert!(risks.iter().any(|r| r.contains("cold")));
        assert!(risks.iter().any(|r| r.contains("visibility")));
    }

    #[test]
    fn approaching_storm_flags_rush() {
        let clear = snap(70.0, 8.0, 0.0, 10.0);
        let storm_day = day(3, snap(65.0, 28.0, 0.7, 5.0));
        let plan = build_plan(&clear, &[day(1, clear), storm_day], DeliveryType::Standard);
        assert!(plan.rush_recommended);
        assert!(plan.risk_factors.iter().any(|r| r.contains("Storm")));
    }

    #[test]
    fn expedited_clears_delay_only_without_risks() {
        let clear = snap(70.0, 8.0, 0.0, 10.0);
        let plan = build_plan(&clear, &[], DeliveryType::Expedited);
        assert_eq!(plan.schedule_delay_hours, 0);

        let windy = snap(70.0, 35.0, 0.0, 10.0);
        let plan = build_plan(&windy, &[], DeliveryType::Expedited);
        assert_eq!(plan.schedule_delay_hours, 24);
    }

    #[test]
    fn plan_for_clear_day_carries_no_surcharge() {
        let clear = snap(65.0, 5.0, 0.0, 10.0);
        let plan = build_plan(&clear, &[day(1, clear)], DeliveryType::Standard);
        assert_eq!(plan.suitability, Suitability::Excellent);
        assert_eq!(plan.weather_surcharge, 0);
        assert!(!plan.rush_recommended);
        assert!(plan.risk_factors.is_empty());
        assert!(plan.recommendations.preparation.is_empty());
    }

    #[test]
    fn plan_serializes_camel_case() {
        let clear = snap(65.0, 5.0, 0.0, 10.0);
        let plan = build_plan(&clear, &[], DeliveryType::Standard);
        let json = serde_json::to_value(&plan).unwrap();
        assert!(json.get("optimalWindows").is_some());
        assert!(json.get("weatherSurcharge").is_some());
        assert!(json.get("scheduleDelayHours").is_some());
        assert_eq!(json["suitability"], "excellent");
    }
}
