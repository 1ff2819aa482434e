use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

/// RFC 3339, or ISO 8601 without an offset (read as UTC).
pub fn parse_datetime_utc(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|dt| dt.and_utc())
}

/// For optional `date` fields on create requests; absent means "now".
pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    parse_datetime_utc(&raw).map(Some).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid datetime '{raw}', expected RFC 3339 (2025-05-02T08:30:00Z) or 2025-05-02T08:30:00"
        ))
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_accepts_offset_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 5, 2, 8, 30, 0).unwrap();

        assert_eq!(parse_datetime_utc("2025-05-02T10:30:00+02:00"), Some(expected));
        assert_eq!(parse_datetime_utc("2025-05-02T08:30:00"), Some(expected));
        assert_eq!(parse_datetime_utc("2025-05-02T08:30:00.000"), Some(expected));
        assert_eq!(parse_datetime_utc("yesterday"), None);
    }
}
