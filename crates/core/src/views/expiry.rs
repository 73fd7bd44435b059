//! D-day expiry countdown.
//!
//! A compact signed day-count label relative to "today": `D-3` means three
//! days of freshness left, `D-day` means the item expires today, `D+2` means
//! it expired two days ago.

use chrono::NaiveDate;

/// Placeholder rendered for an absent or unparseable expiration date.
pub const MISSING_DATE: &str = "-";

/// Whole days from `today` until `exp_date`.
///
/// Both values are calendar dates (already truncated to midnight), so the
/// difference is an exact integer day count; negative when already expired.
#[must_use]
pub fn days_until(exp_date: NaiveDate, today: NaiveDate) -> i64 {
    (exp_date - today).num_days()
}

/// One of the three mutually exclusive countdown presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryLabel {
    /// `D+{n}`: expired `n` days ago.
    Expired(u64),
    /// `D-day`: expires today.
    Today,
    /// `D-{n}`: `n` days remaining.
    Remaining(u64),
}

impl std::fmt::Display for ExpiryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expired(n) => write!(f, "D+{n}"),
            Self::Today => write!(f, "D-day"),
            Self::Remaining(n) => write!(f, "D-{n}"),
        }
    }
}

/// Classify an expiration date relative to `today`.
#[must_use]
pub fn expiry_label(exp_date: NaiveDate, today: NaiveDate) -> ExpiryLabel {
    let days = days_until(exp_date, today);
    match days {
        0 => ExpiryLabel::Today,
        n if n < 0 => ExpiryLabel::Expired(n.unsigned_abs()),
        n => ExpiryLabel::Remaining(n.unsigned_abs()),
    }
}

/// Render an optional expiration date, falling back to [`MISSING_DATE`].
#[must_use]
pub fn format_expiry(exp_date: Option<NaiveDate>, today: NaiveDate) -> String {
    exp_date.map_or_else(
        || MISSING_DATE.to_owned(),
        |d| expiry_label(d, today).to_string(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_d_day_iff_equal() {
        let today = date(2024, 6, 1);
        assert_eq!(expiry_label(today, today), ExpiryLabel::Today);
        assert_eq!(expiry_label(today, today).to_string(), "D-day");
        assert_ne!(expiry_label(date(2024, 6, 2), today), ExpiryLabel::Today);
    }

    #[test]
    fn test_future_dates_render_d_minus() {
        let today = date(2024, 6, 1);
        assert_eq!(expiry_label(date(2024, 6, 4), today).to_string(), "D-3");
        assert_eq!(expiry_label(date(2024, 6, 2), today).to_string(), "D-1");
    }

    #[test]
    fn test_past_dates_render_d_plus() {
        let today = date(2024, 6, 1);
        assert_eq!(expiry_label(date(2024, 5, 30), today).to_string(), "D+2");
        assert_eq!(expiry_label(date(2024, 5, 31), today).to_string(), "D+1");
    }

    #[test]
    fn test_crosses_month_and_year_boundaries() {
        assert_eq!(
            expiry_label(date(2025, 1, 1), date(2024, 12, 31)).to_string(),
            "D-1"
        );
        // Leap day
        assert_eq!(
            expiry_label(date(2024, 3, 1), date(2024, 2, 28)).to_string(),
            "D-2"
        );
    }

    #[test]
    fn test_missing_date_renders_placeholder() {
        let today = date(2024, 6, 1);
        assert_eq!(format_expiry(None, today), "-");
        assert_eq!(format_expiry(Some(date(2024, 6, 1)), today), "D-day");
    }

    #[test]
    fn test_label_classes_mutually_exclusive() {
        let today = date(2024, 6, 1);
        for offset in -400_i64..=400 {
            let d = today + chrono::Duration::days(offset);
            let label = expiry_label(d, today).to_string();
            match offset {
                0 => assert_eq!(label, "D-day"),
                n if n < 0 => assert!(label.starts_with("D+")),
                _ => {
                    assert!(label.starts_with("D-"));
                    assert!(!label.starts_with("D+"));
                    assert_ne!(label, "D-day");
                }
            }
        }
    }
}
