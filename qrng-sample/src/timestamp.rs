use chrono::{DateTime, Utc};

/// 요청 타임스탬프 (UTC, 마이크로초까지)
pub fn request_timestamp() -> String {
    format_timestamp(Utc::now())
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn iso8601_with_micros() {
        let at = Utc.with_ymd_and_hms(2025, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_timestamp(at), "2025-03-09T07:05:01.000000");
    }

    #[test]
    fn now_parses_back() {
        let ts = request_timestamp();
        assert!(NaiveDateTime::parse_from_str(&ts, "%Y-%m-%dT%H:%M:%S%.6f").is_ok());
    }
}
