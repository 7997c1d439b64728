use crate::errors::ServiceError;
use chrono::NaiveDateTime;

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses the ISO-8601 local datetime used by the date-range query
/// parameters, e.g. `2026-01-05T09:00:00`.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, ServiceError> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        ServiceError::InvalidArgument(format!(
            "Invalid date format: {value}. Expected yyyy-MM-dd'T'HH:mm:ss"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_local_datetime() {
        let dt = parse_datetime("2026-01-05T09:30:00").unwrap();
        assert_eq!(dt.to_string(), "2026-01-05 09:30:00");
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_datetime("2026-01-05 09:30:00").is_err());
        assert!(parse_datetime("05/01/2026").is_err());
        assert!(parse_datetime("").is_err());
    }
}
