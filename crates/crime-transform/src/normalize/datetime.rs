//! Date parsing for the `month_year` field.

use chrono::{NaiveDate, NaiveDateTime};

/// Parse a raw `month_year` cell.
///
/// Tries an ordered table of formats: ISO first (the workbook reader
/// emits ISO), then day/month/year as the older extracts use, then the
/// remaining shapes seen in the wild. First successful parse wins.
/// Returns `None` if nothing matches; an unparseable date is a row-level
/// condition, never a fatal error.
pub fn parse_month_year(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Datetime strings keep only the date part.
    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }

    const DATE_FORMATS: [&str; 6] = [
        "%Y-%m-%d",
        "%d/%m/%Y",
        "%Y/%m/%d",
        "%d-%m-%Y",
        "%d %b %Y",
        "%d-%b-%Y",
    ];
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d);
        }
    }

    // Month-level values ("Apr 2017", "04/2017") anchor to the first day.
    const MONTH_FORMATS: [&str; 3] = ["%b %Y", "%B %Y", "%m/%Y"];
    for fmt in MONTH_FORMATS {
        let padded = format!("01 {trimmed}");
        if let Ok(d) = NaiveDate::parse_from_str(&padded, &format!("%d {fmt}")) {
            return Some(d);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_month_year("2021-02-01"), Some(ymd(2021, 2, 1)));
    }

    #[test]
    fn parses_day_month_year() {
        assert_eq!(parse_month_year("01/04/2017"), Some(ymd(2017, 4, 1)));
    }

    #[test]
    fn iso_wins_over_day_month_year() {
        // "2021-02-01" must not be read as day 2021.
        assert_eq!(parse_month_year("2021-02-01"), Some(ymd(2021, 2, 1)));
    }

    #[test]
    fn keeps_date_part_of_datetimes() {
        assert_eq!(
            parse_month_year("2021-02-01 00:00:00"),
            Some(ymd(2021, 2, 1))
        );
    }

    #[test]
    fn anchors_month_values_to_first_day() {
        assert_eq!(parse_month_year("Apr 2017"), Some(ymd(2017, 4, 1)));
    }

    #[test]
    fn unparseable_values_are_none() {
        assert_eq!(parse_month_year(""), None);
        assert_eq!(parse_month_year("not a date"), None);
        assert_eq!(parse_month_year("32/13/2017"), None);
    }
}
