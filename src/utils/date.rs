use chrono::{NaiveDate, Utc};

use crate::consts::STAMP_FORMAT;
use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, STAMP_FORMAT)
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Filename date stamp, "YYYYMMDD"
pub(crate) fn date_stamp(date: NaiveDate) -> String {
    date.format(STAMP_FORMAT).to_string()
}

/// Stamp for the given override, or for the current UTC date
pub(crate) fn resolve_stamp(input: Option<&str>) -> Result<String, AppError> {
    match input {
        Some(s) => parse_date(s).map(date_stamp),
        None => Ok(date_stamp(Utc::now().date_naive())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compact_and_dashed() {
        let expected = NaiveDate::from_ymd_opt(2025, 8, 16).unwrap();
        assert_eq!(parse_date("20250816").unwrap(), expected);
        assert_eq!(parse_date("2025-08-16").unwrap(), expected);
        assert_eq!(parse_date(" 2025-08-16 ").unwrap(), expected);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_date("2025/08/16"),
            Err(AppError::InvalidDate { .. })
        ));
        assert!(parse_date("20251340").is_err());
    }

    #[test]
    fn stamp_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(date_stamp(d), "20260105");
    }

    #[test]
    fn resolve_stamp_override_is_normalized() {
        assert_eq!(resolve_stamp(Some("2025-08-16")).unwrap(), "20250816");
    }

    #[test]
    fn resolve_stamp_defaults_to_utc_today() {
        let stamp = resolve_stamp(None).unwrap();
        assert_eq!(stamp.len(), 8);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(stamp, Utc::now().format("%Y%m%d").to_string());
    }
}
