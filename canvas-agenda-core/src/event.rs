//! Calendar event types.
//!
//! Only what the report needs is kept from each VEVENT: the title and when
//! it starts.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A calendar event as read from the export
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub title: String,
    pub start: EventStart,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, start: EventStart) -> Self {
        CalendarEvent {
            title: title.into(),
            start,
        }
    }

    /// Calendar day this event belongs to
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// Start of an event, in whichever form DTSTART was written
#[derive(Debug, Clone, PartialEq)]
pub enum EventStart {
    /// All-day event (VALUE=DATE)
    Date(NaiveDate),
    /// UTC timestamp (trailing `Z`)
    DateTimeUtc(DateTime<Utc>),
    /// Local time with no zone attached
    DateTimeFloating(NaiveDateTime),
    /// Wall-clock time in a named zone (TZID parameter)
    DateTimeZoned {
        datetime: NaiveDateTime,
        tzid: String,
    },
}

impl EventStart {
    /// The date as written in the file.
    ///
    /// No zone conversion happens: UTC stamps give the UTC date, zoned stamps
    /// give the date on the wall clock of their own zone.
    pub fn date(&self) -> NaiveDate {
        match self {
            EventStart::Date(d) => *d,
            EventStart::DateTimeUtc(dt) => dt.date_naive(),
            EventStart::DateTimeFloating(dt) => dt.date(),
            EventStart::DateTimeZoned { datetime, .. } => datetime.date(),
        }
    }
}

impl fmt::Display for EventStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStart::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            EventStart::DateTimeUtc(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%SZ")),
            EventStart::DateTimeFloating(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            EventStart::DateTimeZoned { datetime, tzid } => {
                write!(f, "{} ({})", datetime.format("%Y-%m-%dT%H:%M:%S"), tzid)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_drops_time_of_day() {
        let morning = EventStart::DateTimeUtc(Utc.with_ymd_and_hms(2024, 9, 3, 0, 30, 0).unwrap());
        let night = EventStart::DateTimeUtc(Utc.with_ymd_and_hms(2024, 9, 3, 23, 59, 0).unwrap());

        assert_eq!(morning.date(), night.date());
        assert_eq!(morning.date(), NaiveDate::from_ymd_opt(2024, 9, 3).unwrap());
    }

    #[test]
    fn test_zoned_date_uses_wall_clock() {
        let start = EventStart::DateTimeZoned {
            datetime: NaiveDate::from_ymd_opt(2024, 9, 3)
                .unwrap()
                .and_hms_opt(23, 0, 0)
                .unwrap(),
            tzid: "America/New_York".to_string(),
        };

        assert_eq!(start.date(), NaiveDate::from_ymd_opt(2024, 9, 3).unwrap());
        assert_eq!(start.to_string(), "2024-09-03T23:00:00 (America/New_York)");
    }
}
