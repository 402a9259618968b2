use std::collections::BTreeMap;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// One entry of the country picker: ISO code plus display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
}

/// Normalized country-detail document. Built by the restcountries client
/// from the raw v3.1 payload; everything the dashboard header shows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub capitals: Vec<String>,
    pub population: u64,
    pub area: f64,
    pub currencies: BTreeMap<String, CurrencyInfo>,
    pub languages: Vec<String>,
    pub borders: Vec<String>,
    pub timezones: Vec<String>,
    pub calling_code: Option<String>,
    pub driving_side: Option<String>,
    pub capital_latlng: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

impl Country {
    /// First currency code, used as the default conversion base.
    pub fn primary_currency(&self) -> Option<&str> {
        self.currencies.keys().next().map(|s| s.as_str())
    }

    /// Offset of the country's first timezone, for the approximate
    /// local-time display in the summary header.
    pub fn primary_offset(&self) -> Option<FixedOffset> {
        self.timezones.first().and_then(|tz| parse_utc_offset(tz))
    }
}

/// Parses a `"UTC±HH:MM"` timezone token (restcountries format) into a fixed
/// offset. Plain `"UTC"` means zero; anything malformed yields `None`.
pub fn parse_utc_offset(tz: &str) -> Option<FixedOffset> {
    if tz == "UTC" {
        return FixedOffset::east_opt(0);
    }
    let modifier = tz.strip_prefix("UTC")?;
    let (sign, rest) = match modifier.as_bytes().first()? {
        b'+' => (1, &modifier[1..]),
        b'-' => (-1, &modifier[1..]),
        _ => return None,
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?),
        None => (rest.parse::<i32>().ok()?, 0),
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_offset() {
        let offset = parse_utc_offset("UTC+02:00").unwrap();
        assert_eq!(offset.local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn parses_negative_half_hour_offset() {
        let offset = parse_utc_offset("UTC-03:30").unwrap();
        assert_eq!(offset.local_minus_utc(), -(3 * 3600 + 1800));
    }

    #[test]
    fn plain_utc_is_zero() {
        let offset = parse_utc_offset("UTC").unwrap();
        assert_eq!(offset.local_minus_utc(), 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_utc_offset("GMT+2").is_none());
        assert!(parse_utc_offset("UTC+aa:bb").is_none());
        assert!(parse_utc_offset("UTC+99:00").is_none());
    }
}
