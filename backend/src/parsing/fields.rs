//! Cell-level parsing for the columns polars leaves as strings.

use chrono::NaiveDate;

const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Parse a `dteday` cell.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time component
/// (`2011-01-01 00:00:00`, `2011-01-01T00:00:00`), which is dropped.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed
        .split(|c: char| c == ' ' || c == 'T')
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parse a `mnth` cell into 1..=12.
///
/// The cleaned tables carry either the month number or an English month
/// name (`Jan`, `January`); both are accepted.
pub fn parse_month(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if let Ok(number) = trimmed.parse::<u32>() {
        return (1..=12).contains(&number).then_some(number);
    }
    if let Ok(number) = trimmed.parse::<f64>() {
        if number.fract() == 0.0 && (1.0..=12.0).contains(&number) {
            return Some(number as u32);
        }
        return None;
    }

    let lower = trimmed.to_ascii_lowercase();
    let prefix = lower.get(..3)?;
    let position = MONTH_NAMES.iter().position(|name| *name == prefix)?;
    let full = chrono::Month::try_from(position as u8 + 1).ok()?;
    let full_name = full.name().to_ascii_lowercase();
    // Either the three-letter abbreviation or a prefix of the full name
    if lower.len() == 3 || full_name.starts_with(&lower) {
        Some(position as u32 + 1)
    } else {
        None
    }
}

/// Short English label for a month number, as shown on chart axes.
pub fn month_label(month: u32) -> &'static str {
    const LABELS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    month
        .checked_sub(1)
        .and_then(|i| LABELS.get(i as usize))
        .copied()
        .unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_plain() {
        assert_eq!(
            parse_date("2011-01-01"),
            NaiveDate::from_ymd_opt(2011, 1, 1)
        );
    }

    #[test]
    fn test_parse_date_with_time() {
        assert_eq!(
            parse_date("2012-12-31 00:00:00"),
            NaiveDate::from_ymd_opt(2012, 12, 31)
        );
        assert_eq!(
            parse_date("2012-02-29T13:00:00"),
            NaiveDate::from_ymd_opt(2012, 2, 29)
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("01/01/2011").is_none());
        assert!(parse_date("").is_none());
        assert!(parse_date("2011-02-30").is_none());
    }

    #[test]
    fn test_parse_month_numeric() {
        assert_eq!(parse_month("1"), Some(1));
        assert_eq!(parse_month(" 12 "), Some(12));
        assert_eq!(parse_month("7.0"), Some(7));
        assert_eq!(parse_month("0"), None);
        assert_eq!(parse_month("13"), None);
    }

    #[test]
    fn test_parse_month_names() {
        assert_eq!(parse_month("Jan"), Some(1));
        assert_eq!(parse_month("january"), Some(1));
        assert_eq!(parse_month("Sept"), Some(9));
        assert_eq!(parse_month("DEC"), Some(12));
        assert_eq!(parse_month("Janx"), None);
        assert_eq!(parse_month("Ju"), None);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(1), "Jan");
        assert_eq!(month_label(12), "Dec");
        assert_eq!(month_label(0), "?");
    }
}
