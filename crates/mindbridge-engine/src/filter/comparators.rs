use super::Query;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime};
use mindbridge_types::{Row, coerce_number, display_text};
use serde_json::Value;

/// One row field under test: its key, raw value and the row it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct FieldRef<'a> {
    pub key: &'a str,
    pub value: &'a Value,
    pub row: &'a Row,
}

/// Decides whether a single field matches the normalized filter text.
pub trait FieldComparator: Send + Sync {
    fn matches(&self, field: &FieldRef<'_>, query: &Query) -> bool;
}

/// Plain text comparison of the stringified value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextComparator;

impl FieldComparator for TextComparator {
    fn matches(&self, field: &FieldRef<'_>, query: &Query) -> bool {
        query.found_in(&display_text(Some(field.value)))
    }
}

/// UTC time of day (`HH:mm:ss.SSSZ`) shown as `h:mm AM` in the display offset.
#[derive(Debug, Clone, Copy)]
pub struct TimeOfDayComparator {
    offset: FixedOffset,
}

impl TimeOfDayComparator {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn display(&self, raw: &str) -> Option<String> {
        let utc_time = parse_utc_time(raw)?;
        let shift = Duration::seconds(i64::from(self.offset.local_minus_utc()));
        let (local, _) = utc_time.overflowing_add_signed(shift);
        Some(local.format("%-I:%M %p").to_string())
    }
}

impl FieldComparator for TimeOfDayComparator {
    fn matches(&self, field: &FieldRef<'_>, query: &Query) -> bool {
        field
            .value
            .as_str()
            .and_then(|raw| self.display(raw))
            .is_some_and(|shown| query.found_in(&shown))
    }
}

fn parse_utc_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();

    if raw.contains('T') {
        return DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.naive_utc().time());
    }

    if let Some(time) = parse_offset_time(raw) {
        return Some(time);
    }

    let bare = raw.trim_end_matches(['Z', 'z']);
    ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(bare, fmt).ok())
}

/// `14:30:00.000+02:00` or `14:30+0200`, converted to UTC.
fn parse_offset_time(raw: &str) -> Option<NaiveTime> {
    // A fixed date lets chrono resolve the offset
    let stamped = format!("1970-01-01 {}", raw);
    [
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y-%m-%d %H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M%:z",
        "%Y-%m-%d %H:%M%z",
    ]
    .iter()
    .find_map(|fmt| DateTime::parse_from_str(&stamped, fmt).ok())
    .map(|dt| dt.naive_utc().time())
}

/// Calendar date (`YYYY-MM-DD`) shown as `D MMMM YY`, e.g. `5 March 24`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarDateComparator;

impl CalendarDateComparator {
    pub fn display(raw: &str) -> Option<String> {
        let raw = raw.trim();
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .ok()
            .map(|date| date.format("%-d %B %y").to_string())
    }
}

impl FieldComparator for CalendarDateComparator {
    fn matches(&self, field: &FieldRef<'_>, query: &Query) -> bool {
        field
            .value
            .as_str()
            .and_then(Self::display)
            .is_some_and(|shown| query.found_in(&shown))
    }
}

/// Amount shown with two decimals; null and non-numeric values count as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyComparator;

impl CurrencyComparator {
    pub fn display(value: &Value) -> String {
        two_decimals(coerce_number(Some(value)))
    }
}

/// Two-decimal text with exact ties rounded away from zero, as the dashboard
/// prints amounts. `format!` alone rounds `1.125` to `1.12`.
fn two_decimals(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = amount.abs();
    // -0.0 prints unsigned
    let sign = if amount < 0.0 { "-" } else { "" };

    // A tie sits exactly on an odd multiple of 0.005, which in binary means a
    // multiple of 1/8
    let doubled = magnitude * 200.0;
    let nearest = doubled.round();
    let is_tie = nearest == doubled
        && nearest % 2.0 == 1.0
        && nearest % 25.0 == 0.0
        && nearest / 200.0 == magnitude;

    let text = if is_tie {
        format!("{:.2}", (magnitude * 100.0).ceil() / 100.0)
    } else {
        format!("{:.2}", magnitude)
    };

    format!("{}{}", sign, text)
}

impl FieldComparator for CurrencyComparator {
    fn matches(&self, field: &FieldRef<'_>, query: &Query) -> bool {
        query.found_in(&Self::display(field.value))
    }
}

/// `"{first} {last}"` built from two sibling fields of the row.
#[derive(Debug, Clone)]
pub struct FullNameComparator {
    first: String,
    last: String,
}

impl FullNameComparator {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// Comparator over `{prefix}first_name` and `{prefix}last_name`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self::new(format!("{}first_name", prefix), format!("{}last_name", prefix))
    }

    pub fn display(&self, row: &Row) -> String {
        format!(
            "{} {}",
            display_text(row.get(&self.first)),
            display_text(row.get(&self.last))
        )
    }
}

impl FieldComparator for FullNameComparator {
    fn matches(&self, field: &FieldRef<'_>, query: &Query) -> bool {
        query.found_in(&self.display(field.row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Utc};
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    fn check(comparator: &dyn FieldComparator, row: &Row, key: &str, text: &str) -> bool {
        let value = row.get(key).unwrap();
        comparator.matches(&FieldRef { key, value, row }, &Query::new(text))
    }

    #[test]
    fn test_date_display() {
        assert_eq!(
            CalendarDateComparator::display("2024-03-05").as_deref(),
            Some("5 March 24")
        );
        assert_eq!(
            CalendarDateComparator::display("2024-11-21T09:15:00.000Z").as_deref(),
            Some("21 November 24")
        );
        assert_eq!(CalendarDateComparator::display("yesterday"), None);
    }

    #[test]
    fn test_date_match() {
        let r = row(json!({"created_at": "2024-03-05"}));
        assert!(check(&CalendarDateComparator, &r, "created_at", "5 march"));
        assert!(check(&CalendarDateComparator, &r, "created_at", "MARCH 24"));
        assert!(!check(&CalendarDateComparator, &r, "created_at", "2024-03"));
    }

    #[test]
    fn test_time_display_in_offset() {
        let utc = TimeOfDayComparator::new(Utc.fix());
        assert_eq!(utc.display("14:30:00.000Z").as_deref(), Some("2:30 PM"));
        assert_eq!(utc.display("00:05:00Z").as_deref(), Some("12:05 AM"));

        let sydney = TimeOfDayComparator::new(FixedOffset::east_opt(10 * 3600).unwrap());
        assert_eq!(sydney.display("14:30:00.000Z").as_deref(), Some("12:30 AM"));

        assert_eq!(utc.display("not a time"), None);
    }

    #[test]
    fn test_time_with_numeric_offset() {
        let utc = TimeOfDayComparator::new(Utc.fix());
        assert_eq!(utc.display("14:30:00.000+02:00").as_deref(), Some("12:30 PM"));
        assert_eq!(utc.display("14:30:00.000+0200").as_deref(), Some("12:30 PM"));
        assert_eq!(utc.display("01:00:00-05:00").as_deref(), Some("6:00 AM"));
        assert_eq!(utc.display("00:30+01:00").as_deref(), Some("11:30 PM"));

        let r = row(json!({"req_time": "14:30:00.000+02:00"}));
        assert!(check(&utc, &r, "req_time", "12:30 pm"));
    }

    #[test]
    fn test_time_match() {
        let comparator = TimeOfDayComparator::new(Utc.fix());
        let r = row(json!({"req_time": "09:45:00.000Z"}));
        assert!(check(&comparator, &r, "req_time", "9:45 am"));
        assert!(check(&comparator, &r, "req_time", " 9:45 AM "));
        assert!(!check(&comparator, &r, "req_time", "09:45"));
    }

    #[test]
    fn test_currency_two_decimals() {
        let r = row(json!({"gst": 12.5, "total_invoice": null, "fee": "80"}));
        assert!(check(&CurrencyComparator, &r, "gst", "12.50"));
        assert!(check(&CurrencyComparator, &r, "total_invoice", "0.00"));
        assert!(check(&CurrencyComparator, &r, "fee", "80.00"));
        assert!(!check(&CurrencyComparator, &r, "gst", "12.55"));
    }

    #[test]
    fn test_currency_ties_round_up() {
        assert_eq!(CurrencyComparator::display(&json!(0.125)), "0.13");
        assert_eq!(CurrencyComparator::display(&json!(1.125)), "1.13");
        assert_eq!(CurrencyComparator::display(&json!(10.375)), "10.38");
        assert_eq!(CurrencyComparator::display(&json!(-1.125)), "-1.13");

        // 1.005 is stored just below the tie
        assert_eq!(CurrencyComparator::display(&json!(1.005)), "1.00");
        assert_eq!(CurrencyComparator::display(&json!(2.675)), "2.67");
        assert_eq!(CurrencyComparator::display(&json!(-0.001)), "-0.00");
        assert_eq!(CurrencyComparator::display(&json!("Infinity")), "Infinity");

        let r = row(json!({"gst": 1.125}));
        assert!(check(&CurrencyComparator, &r, "gst", "1.13"));
    }

    #[test]
    fn test_full_name_uses_sibling_field() {
        let comparator = FullNameComparator::with_prefix("user_");
        let r = row(json!({"user_first_name": "Priya", "user_last_name": "Nair"}));
        assert!(check(&comparator, &r, "user_last_name", "priya nair"));
        assert!(check(&comparator, &r, "user_first_name", "a n"));
    }

    #[test]
    fn test_full_name_missing_half() {
        let comparator = FullNameComparator::with_prefix("client_");
        let r = row(json!({"client_first_name": "Jane"}));
        assert_eq!(comparator.display(&r), "Jane undefined");
        assert!(check(&comparator, &r, "client_first_name", "jane"));
        assert!(!check(&comparator, &r, "client_first_name", "jane doe"));
    }
}
