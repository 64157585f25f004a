use chrono::NaiveDate;
use serde::Serialize;

/// Wire and storage format of calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator used for the stored persons column.
pub const PERSONS_DELIMITER: char = ',';

/// A stored calendar event as exposed to the calendar widget.
///
/// `end` is already exclusive: it names the first day *after* the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub persons: Vec<String>,
}

/// A validated event ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub start: NaiveDate,
    /// Inclusive last day as supplied by the caller.
    pub end: Option<NaiveDate>,
    pub persons: Vec<String>,
}

impl NewEvent {
    /// The end date as stored: inclusive end shifted by one day.
    #[must_use]
    pub fn stored_end(&self) -> Option<NaiveDate> {
        self.end.and_then(exclusive_end)
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Turns an inclusive end date into the half-open end expected by calendar widgets.
/// Returns `None` only for `NaiveDate::MAX`.
#[must_use]
pub fn exclusive_end(inclusive: NaiveDate) -> Option<NaiveDate> {
    inclusive.succ_opt()
}

#[must_use]
pub fn encode_persons(persons: &[String]) -> String {
    persons.join(&PERSONS_DELIMITER.to_string())
}

#[must_use]
pub fn decode_persons(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }

    stored
        .split(PERSONS_DELIMITER)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_exclusive_end_shifts_one_day() {
        assert_eq!(exclusive_end(date("2024-01-05")), Some(date("2024-01-06")));
        assert_eq!(exclusive_end(date("2024-02-28")), Some(date("2024-02-29")));
        assert_eq!(exclusive_end(date("2023-12-31")), Some(date("2024-01-01")));
        assert_eq!(exclusive_end(NaiveDate::MAX), None);
    }

    #[test]
    fn test_stored_end() {
        let mut event = NewEvent {
            title: "Trip".to_string(),
            start: date("2024-01-01"),
            end: Some(date("2024-01-05")),
            persons: vec![],
        };
        assert_eq!(event.stored_end().map(format_date).as_deref(), Some("2024-01-06"));

        event.end = None;
        assert_eq!(event.stored_end(), None);
    }

    #[test]
    fn test_persons_round_trip() {
        let persons = vec!["Alice".to_string(), "Bob".to_string()];
        let stored = encode_persons(&persons);
        assert_eq!(stored, "Alice,Bob");
        assert_eq!(decode_persons(&stored), persons);
    }

    #[test]
    fn test_persons_empty() {
        assert_eq!(encode_persons(&[]), "");
        assert!(decode_persons("").is_empty());
    }

    #[test]
    fn test_persons_keep_order_and_spaces() {
        let persons = vec!["Zoe".to_string(), "Anna Maria".to_string()];
        assert_eq!(decode_persons(&encode_persons(&persons)), persons);
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-01-05").is_ok());
        assert!(parse_date(" 2024-01-05 ").is_ok());
        assert!(parse_date("05.01.2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_event_serializes_for_calendar() {
        let event = Event {
            id: 3,
            title: "Dentist".to_string(),
            start: "2024-03-01".to_string(),
            end: None,
            persons: vec!["Bob".to_string()],
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], 3);
        assert!(json["end"].is_null());
        assert_eq!(json["persons"], serde_json::json!(["Bob"]));
    }
}
