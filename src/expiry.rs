/// Expiry enforcement for resolution tokens
use crate::error::{ResolveError, ResolveResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Check that `expires` is present, parseable and strictly in the future
pub fn enforce_expires(expires: Option<&str>) -> ResolveResult<DateTime<Utc>> {
    enforce_expires_at(expires, Utc::now())
}

/// Same as [`enforce_expires`] against an explicit current time
///
/// An expiry equal to `now` counts as expired. There is no grace period and no
/// clock-skew allowance.
pub fn enforce_expires_at(expires: Option<&str>, now: DateTime<Utc>) -> ResolveResult<DateTime<Utc>> {
    let raw = expires
        .filter(|value| !value.is_empty())
        .ok_or(ResolveError::MissingField("expires"))?;

    let expires_at = parse_timestamp(raw)?;

    if expires_at <= now {
        return Err(ResolveError::Expired(raw.to_string()));
    }

    Ok(expires_at)
}

/// Parse an ISO-8601 timestamp
///
/// Accepts RFC 3339 with an offset, a date-time without offset (read as UTC)
/// and a bare calendar date (midnight UTC).
pub fn parse_timestamp(value: &str) -> ResolveResult<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Ok(naive.and_utc());
    }

    if let Some(midnight) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(ResolveError::Format(format!(
        "invalid expires in JWS payload: {}",
        value
    )))
}
