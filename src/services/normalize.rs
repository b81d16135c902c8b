use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Rewrite a raw phone input as digits with the Indonesian country
/// code: non-digits dropped, a leading zero replaced by "62", "62"
/// prepended when missing. Input already starting with "62" passes
/// through unchanged, even when a literal "620..." would be ambiguous.
pub fn phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let digits = match digits.strip_prefix('0') {
        Some(rest) => format!("62{rest}"),
        None => digits,
    };

    if digits.starts_with("62") {
        digits
    } else {
        format!("62{digits}")
    }
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a raw date input into a calendar date, discarding any
/// time-of-day. Offset timestamps are read in UTC.
pub fn started_at(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_leading_zero_becomes_country_code() {
        assert_eq!(phone_number("081234567890"), "6281234567890");
    }

    #[test]
    fn test_phone_with_country_code_unchanged() {
        assert_eq!(phone_number("6281234567890"), "6281234567890");
    }

    #[test]
    fn test_phone_bare_number_gets_country_code() {
        assert_eq!(phone_number("81234567890"), "6281234567890");
    }

    #[test]
    fn test_phone_strips_formatting_characters() {
        assert_eq!(phone_number("+62 812-3456-7890"), "6281234567890");
        assert_eq!(phone_number("(0812) 3456 7890"), "6281234567890");
    }

    #[test]
    fn test_phone_normalization_is_idempotent() {
        for input in ["081234567890", "6281234567890", "81234567890", "+62 812"] {
            let once = phone_number(input);
            assert_eq!(phone_number(&once), once, "not idempotent for {input}");
        }
    }

    #[test]
    fn test_date_plain() {
        assert_eq!(
            started_at("2025-09-01"),
            Some(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
        );
    }

    #[test]
    fn test_date_ignores_time_of_day() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(started_at("2025-09-01T00:00:00"), Some(date));
        assert_eq!(started_at("2025-09-01T23:59:59"), Some(date));
        assert_eq!(started_at("2025-09-01 15:30:00"), Some(date));
        assert_eq!(started_at("2025-09-01T15:30"), Some(date));
    }

    #[test]
    fn test_date_offset_timestamp_read_in_utc() {
        // 22:00 the day before in UTC-7 is already Sep 2 in UTC.
        assert_eq!(
            started_at("2025-09-01T22:00:00-07:00"),
            Some(NaiveDate::from_ymd_opt(2025, 9, 2).unwrap())
        );
        assert_eq!(
            started_at("2025-09-01T10:00:00Z"),
            Some(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
        );
    }

    #[test]
    fn test_date_output_shape() {
        let date = started_at("2025-09-01T08:15:00").unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2025-09-01");
    }

    #[test]
    fn test_date_rejects_garbage() {
        assert_eq!(started_at(""), None);
        assert_eq!(started_at("next tuesday"), None);
        assert_eq!(started_at("2025-13-40"), None);
    }
}
