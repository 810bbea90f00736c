//! Single-pass aggregation over the analytics event log.
//!
//! Hash-map accumulation followed by sort + slice: page visit counts,
//! distinct sessions, most-used calculators, peak hours and a rough
//! conversion funnel.

use std::collections::{HashMap, HashSet};

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::models::analytics::{
    AnalyticsEvent, EVENT_CALCULATOR_USE, EVENT_CONTACT_SUBMIT, EVENT_PAGE_VIEW,
    EVENT_QUOTE_REQUEST,
};

const TOP_PAGES: usize = 10;
const TOP_CALCULATORS: usize = 5;
const PEAK_HOURS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCount {
    pub page: String,
    pub visits: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorCount {
    pub calculator: String,
    pub uses: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourCount {
    pub hour: u32,
    pub events: u64,
}

/// Rough conversion funnel: raw stage counts, not a strict per-session path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionFunnel {
    pub page_views: u64,
    pub calculator_uses: u64,
    pub quote_requests: u64,
    pub contact_submits: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_events: u64,
    pub unique_sessions: u64,
    pub page_visits: Vec<PageCount>,
    pub top_calculators: Vec<CalculatorCount>,
    pub peak_hours: Vec<HourCount>,
    pub funnel: ConversionFunnel,
}

/// Bucket a flat event list into the dashboard summary.
pub fn summarize(events: &[AnalyticsEvent]) -> AnalyticsSummary {
    let mut pages: HashMap<&str, u64> = HashMap::new();
    let mut calculators: HashMap<&str, u64> = HashMap::new();
    let mut hours: HashMap<u32, u64> = HashMap::new();
    let mut sessions: HashSet<&str> = HashSet::new();
    let mut funnel = ConversionFunnel::default();

    for event in events {
        sessions.insert(event.session_id.as_str());
        *hours.entry(event.occurred_at.hour()).or_default() += 1;

        match event.event_type.as_str() {
            EVENT_PAGE_VIEW => {
                funnel.page_views += 1;
                *pages.entry(event.page_path.as_str()).or_default() += 1;
            }
            EVENT_CALCULATOR_USE => {
                funnel.calculator_uses += 1;
                if let Some(name) = event.calculator.as_deref() {
                    *calculators.entry(name).or_default() += 1;
                }
            }
            EVENT_QUOTE_REQUEST => funnel.quote_requests += 1,
            EVENT_CONTACT_SUBMIT => funnel.contact_submits += 1,
            _ => {}
        }
    }

    let mut page_visits: Vec<PageCount> = pages
        .into_iter()
        .map(|(page, visits)| PageCount {
            page: page.to_string(),
            visits,
        })
        .collect();
    page_visits.sort_by(|a, b| b.visits.cmp(&a.visits).then(a.page.cmp(&b.page)));
    page_visits.truncate(TOP_PAGES);

    let mut top_calculators: Vec<CalculatorCount> = calculators
        .into_iter()
        .map(|(calculator, uses)| CalculatorCount {
            calculator: calculator.to_string(),
            uses,
        })
        .collect();
    top_calculators.sort_by(|a, b| b.uses.cmp(&a.uses).then(a.calculator.cmp(&b.calculator)));
    top_calculators.truncate(TOP_CALCULATORS);

    let mut peak_hours: Vec<HourCount> = hours
        .into_iter()
        .map(|(hour, events)| HourCount { hour, events })
        .collect();
    peak_hours.sort_by(|a, b| b.events.cmp(&a.events).then(a.hour.cmp(&b.hour)));
    peak_hours.truncate(PEAK_HOURS);

    AnalyticsSummary {
        total_events: events.len() as u64,
        unique_sessions: sessions.len() as u64,
        page_visits,
        top_calculators,
        peak_hours,
        funnel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(session: &str, event_type: &str, page: &str, calculator: Option<&str>, hour: u32) -> AnalyticsEvent {
        AnalyticsEvent {
            id: 0,
            session_id: session.to_string(),
            event_type: event_type.to_string(),
            page_path: page.to_string(),
            referrer: None,
            calculator: calculator.map(|c| c.to_string()),
            metadata: None,
            occurred_at: Utc.with_ymd_and_hms(2025, 6, 2, hour, 15, 0).unwrap(),
            create_date: None,
        }
    }

    #[test]
    fn empty_log_produces_empty_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_events, 0);
        assert_eq!(summary.unique_sessions, 0);
        assert!(summary.page_visits.is_empty());
        assert_eq!(summary.funnel, ConversionFunnel::default());
    }

    #[test]
    fn pages_sessions_and_funnel_are_counted() {
        let events = vec![
            event("s1", EVENT_PAGE_VIEW, "/", None, 9),
            event("s1", EVENT_PAGE_VIEW, "/solutions", None, 9),
            event("s2", EVENT_PAGE_VIEW, "/", None, 10),
            event("s2", EVENT_CALCULATOR_USE, "/solutions", Some("rental-cost"), 10),
            event("s2", EVENT_QUOTE_REQUEST, "/quote", None, 11),
            event("s3", EVENT_CONTACT_SUBMIT, "/contact", None, 14),
        ];
        let summary = summarize(&events);

        assert_eq!(summary.total_events, 6);
        assert_eq!(summary.unique_sessions, 3);
        assert_eq!(summary.page_visits[0], PageCount { page: "/".into(), visits: 2 });
        assert_eq!(summary.funnel.page_views, 3);
        assert_eq!(summary.funnel.calculator_uses, 1);
        assert_eq!(summary.funnel.quote_requests, 1);
        assert_eq!(summary.funnel.contact_submits, 1);
    }

    #[test]
    fn top_calculators_sorted_and_capped() {
        let mut events = Vec::new();
        for (name, uses) in [("a", 1), ("b", 3), ("c", 2), ("d", 5), ("e", 4), ("f", 4)] {
            for _ in 0..uses {
                events.push(event("s", EVENT_CALCULATOR_USE, "/", Some(name), 12));
            }
        }
        let summary = summarize(&events);
        assert_eq!(summary.top_calculators.len(), 5);
        assert_eq!(summary.top_calculators[0].calculator, "d");
        // Ties break alphabetically.
        assert_eq!(summary.top_calculators[1].calculator, "e");
        assert_eq!(summary.top_calculators[2].calculator, "f");
        assert!(!summary.top_calculators.iter().any(|c| c.calculator == "a"));
    }

    #[test]
    fn peak_hours_are_top_three() {
        let mut events = Vec::new();
        for (hour, n) in [(8, 1), (9, 4), (10, 2), (14, 3)] {
            for _ in 0..n {
                events.push(event("s", EVENT_PAGE_VIEW, "/", None, hour));
            }
        }
        let summary = summarize(&events);
        let hours: Vec<u32> = summary.peak_hours.iter().map(|h| h.hour).collect();
        assert_eq!(hours, vec![9, 14, 10]);
    }

    #[test]
    fn unknown_event_types_count_toward_totals_only() {
        let events = vec![event("s1", "scroll_depth", "/", None, 9)];
        let summary = summarize(&events);
        assert_eq!(summary.total_events, 1);
        assert_eq!(summary.funnel, ConversionFunnel::default());
        assert!(summary.page_visits.is_empty());
    }
}
