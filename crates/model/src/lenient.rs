//! Tolerant deserialisers for backend payloads
//!
//! The backend is loosely typed: prices arrive as numbers or numeric
//! strings, dates as plain dates or full ISO timestamps, party sizes as
//! numbers or text. These helpers accept all of those shapes and map
//! anything unusable to `None` instead of failing the whole record.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Interpret a JSON value as an amount. Non-numeric values yield `None`.
pub fn amount_from_value(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    amount.filter(|f| f.is_finite())
}

/// `Option<f64>` from a number, a numeric string, or anything else (→ `None`)
pub fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(amount_from_value))
}

/// Parse `YYYY-MM-DD`, also accepting a longer ISO timestamp by truncation
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let head = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// `Option<NaiveDate>` from a date or timestamp string
pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| v.as_str()).and_then(parse_date))
}

/// Parse a server timestamp: RFC 3339, a naive `YYYY-MM-DD HH:MM:SS`, or a
/// bare date (midnight UTC)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }
    parse_date(trimmed)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `Option<DateTime<Utc>>` from a timestamp string or epoch milliseconds
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => parse_timestamp(&s),
        Some(Value::Number(n)) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    })
}

/// Free text; numbers and booleans are rendered, null becomes empty
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Split a comma- or newline-separated list, dropping blanks
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A list of short strings, given either as an array or a separated string
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => split_list(&s),
        _ => Vec::new(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn test_amount_from_value() {
        assert_eq!(amount_from_value(&json!(100)), Some(100.0));
        assert_eq!(amount_from_value(&json!("49.5")), Some(49.5));
        assert_eq!(amount_from_value(&json!("bad")), None);
        assert_eq!(amount_from_value(&json!(null)), None);
        assert_eq!(amount_from_value(&json!({"a": 1})), None);
    }

    #[test]
    fn test_parse_date_truncates_timestamps() {
        let d = parse_date("2026-02-24T00:00:00.000Z").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2026, 2, 24));
        assert!(parse_date("").is_none());
        assert!(parse_date("24/02/2026").is_none());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let ts = parse_timestamp("2026-02-24T10:30:00.000Z").unwrap();
        assert_eq!(ts.hour(), 10);

        let ts = parse_timestamp("2026-02-24 08:15:00").unwrap();
        assert_eq!(ts.minute(), 15);

        let ts = parse_timestamp("2026-02-24").unwrap();
        assert_eq!(ts.day(), 24);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("Breakfast, Spa access,\nAirport pickup,,"),
            vec!["Breakfast", "Spa access", "Airport pickup"]
        );
    }
}
