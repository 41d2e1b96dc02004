//! Calendar dates, in the app's `YYYY-MM-DD` convention

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The canonical format every date crosses the API boundary with (e.g. `2025-01-10`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The host's current date.
///
/// Every part of this crate that needs to know what day it is goes through this
/// single function, so that hosts and tests agree on the answer.
pub fn today() -> NaiveDate {
    #[cfg(feature = "mock_today")]
    {
        if let Some(frozen) = *crate::settings::FROZEN_TODAY.lock().unwrap() {
            return frozen;
        }
    }
    chrono::Local::now().date_naive()
}

/// The date a task is due, stored as its `YYYY-MM-DD` text.
///
/// Due dates come from a free-text field of the app, so this type never rejects its
/// input: whatever the user typed is kept verbatim and serialized back verbatim.
/// All matching (calendar cells, "due today" counts) is plain string equality on the
/// canonical format, which also happens to sort chronologically as text. A string
/// that is not a canonical date simply never matches any calendar day.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueDate {
    content: String,
}

impl DueDate {
    /// Keep a date string exactly as the user typed it
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { content: text.into() }
    }

    /// The canonical text for a structured date
    pub fn from_date(date: NaiveDate) -> Self {
        Self { content: date.format(DATE_FORMAT).to_string() }
    }

    /// The canonical text for a year/month/day triple (month is one-based here).
    ///
    /// This does not check the triple designates an existing day: `2025-02-31` is
    /// accepted and will match nothing, like any other non-date string.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self { content: format!("{:04}-{:02}-{:02}", year, month, day) }
    }

    /// The host's current date, canonically formatted
    pub fn today() -> Self {
        Self::from_date(today())
    }

    pub fn as_str(&self) -> &str { &self.content }

    /// The structured date this text designates, or None for free-form text
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.content, DATE_FORMAT).ok()
    }

    /// Whether this is a real `YYYY-MM-DD` date (as opposed to free-form text)
    pub fn is_valid(&self) -> bool {
        match self.to_date() {
            Some(_) => true,
            None => false,
        }
    }
}

impl From<&str> for DueDate {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
impl From<String> for DueDate {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
impl From<NaiveDate> for DueDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl Display for DueDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for DueDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        let content = String::deserialize(deserializer)?;
        Ok(DueDate::new(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_formatting() {
        assert_eq!(DueDate::from_ymd(2025, 1, 5).as_str(), "2025-01-05");
        assert_eq!(DueDate::from_ymd(2025, 11, 28).as_str(), "2025-11-28");

        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(DueDate::from_date(date).as_str(), "2024-02-29");
    }

    #[test]
    fn free_form_text_is_kept_verbatim() {
        let typed = DueDate::new("sometime next week");
        assert_eq!(typed.as_str(), "sometime next week");
        assert_eq!(typed.to_date(), None);
        assert_eq!(typed.is_valid(), false);

        // It serializes back exactly as typed, too
        assert_eq!(serde_json::to_string(&typed).unwrap(), r#""sometime next week""#);
        assert_eq!(serde_json::from_str::<DueDate>(r#""sometime next week""#).unwrap(), typed);
    }

    #[test]
    fn canonical_text_parses_back() {
        let due = DueDate::from_ymd(2025, 1, 10);
        assert_eq!(due.to_date(), NaiveDate::from_ymd_opt(2025, 1, 10));
        assert!(due.is_valid());
    }

    #[test]
    fn canonical_text_sorts_chronologically() {
        let mut dates = vec![
            DueDate::from_ymd(2025, 1, 15),
            DueDate::from_ymd(2024, 12, 31),
            DueDate::from_ymd(2025, 1, 9),
        ];
        dates.sort();
        assert_eq!(dates[0].as_str(), "2024-12-31");
        assert_eq!(dates[1].as_str(), "2025-01-09");
        assert_eq!(dates[2].as_str(), "2025-01-15");
    }
}
