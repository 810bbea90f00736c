//! Anonymous session fingerprinting.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

/// Derive a stable per-day session id from ip + user agent.
///
/// Rotates daily so visitors cannot be tracked across days.
pub fn session_fingerprint(ip: &str, user_agent: &str, day: NaiveDate) -> String {
    let hash = Sha256::digest(format!("{ip}|{user_agent}|{day}").as_bytes());
    hex::encode(&hash[..16])
}

/// Originating client address from an `X-Forwarded-For` value.
///
/// The header is a comma-separated proxy chain; only the first hop identifies
/// the visitor, so the rest must not feed the fingerprint.
pub fn client_ip(forwarded_for: &str) -> &str {
    forwarded_for.split(',').next().unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn same_visitor_same_day_is_stable() {
        let a = session_fingerprint("203.0.113.7", "Mozilla/5.0", d(1));
        let b = session_fingerprint("203.0.113.7", "Mozilla/5.0", d(1));
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn fingerprint_rotates_daily() {
        let a = session_fingerprint("203.0.113.7", "Mozilla/5.0", d(1));
        let b = session_fingerprint("203.0.113.7", "Mozilla/5.0", d(2));
        assert_ne!(a, b);
    }

    #[test]
    fn distinct_visitors_differ() {
        let a = session_fingerprint("203.0.113.7", "Mozilla/5.0", d(1));
        let b = session_fingerprint("203.0.113.8", "Mozilla/5.0", d(1));
        assert_ne!(a, b);
    }

    #[test]
    fn client_ip_takes_first_forwarded_hop() {
        assert_eq!(
            client_ip("203.0.113.7, 70.41.3.18, 150.172.238.178"),
            "203.0.113.7"
        );
        assert_eq!(client_ip("203.0.113.7"), "203.0.113.7");
        assert_eq!(client_ip(""), "");
    }

    #[test]
    fn fingerprint_is_proxy_path_independent() {
        let direct = session_fingerprint(client_ip("203.0.113.7"), "Mozilla/5.0", d(1));
        let proxied = session_fingerprint(
            client_ip("203.0.113.7, 10.0.0.2"),
            "Mozilla/5.0",
            d(1),
        );
        assert_eq!(direct, proxied);
    }
}
