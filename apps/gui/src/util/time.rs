use chrono::{DateTime, Local};

/// `2024-05-14 09:30` in local time. A value that is not well-formed
/// RFC 3339 is shown verbatim rather than dropped.
pub fn format_timestamp(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(t) => t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

/// Date-only variant of [`format_timestamp`].
pub fn format_date(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(t) => t.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn malformed_timestamps_pass_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn formatted_timestamp_keeps_date_prefix() {
        // Local offsets shift the clock, not the shape of the output.
        let out = format_timestamp("2024-05-14T12:00:00Z");
        assert_eq!(out.len(), "2024-05-14 12:00".len());
    }
}
