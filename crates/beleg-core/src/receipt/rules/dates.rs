//! Transaction date extraction for German receipts.

use chrono::NaiveDate;
use tracing::warn;

use super::patterns::DATE_DMY;
use super::FieldExtractor;

/// Date field extractor for numeric day.month.year patterns.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    /// Extract the transaction date from the first date-shaped substring only.
    ///
    /// Later dates on a receipt are more likely a due date or expiry than the
    /// transaction date, so an invalid first candidate yields `None` rather
    /// than a retry on subsequent matches.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = DATE_DMY.captures(text)?;

        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year = widen_year(&caps[3])?;

        let date = NaiveDate::from_ymd_opt(year, month, day);
        if date.is_none() {
            warn!("rejected invalid date: {}", &caps[0]);
        }
        date
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DATE_DMY
            .captures_iter(text)
            .filter_map(|caps| {
                let day: u32 = caps[1].parse().ok()?;
                let month: u32 = caps[2].parse().ok()?;
                NaiveDate::from_ymd_opt(widen_year(&caps[3])?, month, day)
            })
            .collect()
    }
}

/// Extract the transaction date from recognized text.
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    DateExtractor::new().extract(text)
}

// Two-digit years below 50 are 2000s, the rest 1900s. Fixed policy.
fn widen_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    if s.len() == 2 {
        Some(if year < 50 { 2000 + year } else { 1900 + year })
    } else {
        Some(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_date_four_digit_year() {
        assert_eq!(
            extract_date("Datum: 15.01.2024"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            extract_date("15/1/2024"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_two_digit_year_boundary() {
        assert_eq!(extract_date("1.2.49"), NaiveDate::from_ymd_opt(2049, 2, 1));
        assert_eq!(extract_date("1.2.50"), NaiveDate::from_ymd_opt(1950, 2, 1));
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert_eq!(extract_date("31.13.24"), None);
        assert_eq!(extract_date("31.04.2024"), None);
    }

    #[test]
    fn test_no_retry_after_invalid_first_candidate() {
        // The valid second date must not be picked up.
        assert_eq!(extract_date("31.02.24 dann 15.01.24"), None);
    }

    #[test]
    fn test_extract_all_collects_valid_dates() {
        let extractor = DateExtractor::new();
        let dates = extractor.extract_all("31.02.24 dann 15.01.24");
        assert_eq!(dates, vec![NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()]);
    }
}
