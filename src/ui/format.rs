//! Display formatting of server values.

use chrono::{DateTime, Local, TimeZone};

const DATE_FORMAT: &str = "%d.%m.%Y, %H:%M";

/// Render an RFC 3339 timestamp in local time as `dd.mm.yyyy, HH:MM`.
///
/// Empty input renders as empty. Input that does not parse is shown as-is.
pub fn format_date(raw: &str) -> String {
    format_date_in(raw, &Local)
}

pub fn format_date_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if raw.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.with_timezone(tz).format(DATE_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn formats_in_given_zone() {
        assert_eq!(
            format_date_in("2024-03-05T09:07:00Z", &Utc),
            "05.03.2024, 09:07"
        );

        let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(
            format_date_in("2024-12-31T22:30:15.123456+00:00", &moscow),
            "01.01.2025, 01:30"
        );
    }

    #[test]
    fn empty_and_invalid_inputs() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
