use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Timelike, Utc};

/// Minute-precision expiry format used on the wire ("2026-09-28 14:30").
/// Internally expiries are plain `DateTime<Utc>` values.
pub const EXPIRE_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn parse_expire_at(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, EXPIRE_AT_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn format_expire_at(at: DateTime<Utc>) -> String {
    at.format(EXPIRE_AT_FORMAT).to_string()
}

/// Default expiry for polls created without one: 30 days out, truncated to
/// the minute so it round-trips through the wire format unchanged.
pub fn default_expire_at(now: DateTime<Utc>) -> DateTime<Utc> {
    let at = now + Duration::days(30);
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}
