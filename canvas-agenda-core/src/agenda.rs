//! Grouping formatted labels by calendar day.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::event::CalendarEvent;
use crate::format::{format_event, is_excluded};

/// Formatted event labels keyed by the day they fall on.
///
/// Labels are stored in insertion order; `days` sorts on the way out.
#[derive(Debug, Default, Clone)]
pub struct EventsByDay {
    days: HashMap<NaiveDate, Vec<String>>,
}

impl EventsByDay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter, format and group a batch of events
    pub fn from_events(events: impl IntoIterator<Item = CalendarEvent>) -> Self {
        let mut agenda = Self::new();

        for event in events {
            if is_excluded(&event.title) {
                debug!(title = %event.title, start = %event.start, "Skipping excluded event");
                continue;
            }
            debug!(title = %event.title, start = %event.start, "Adding event");
            agenda.insert(event.date(), format_event(&event.title));
        }

        agenda
    }

    pub fn insert(&mut self, date: NaiveDate, label: impl Into<String>) {
        self.days.entry(date).or_default().push(label.into());
    }

    /// Labels for one day, in insertion order
    #[cfg(test)]
    pub fn get(&self, date: NaiveDate) -> Option<&[String]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// Number of distinct days
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Every day with its labels, days ascending and labels sorted within each day
    pub fn days(&self) -> Vec<(NaiveDate, Vec<&str>)> {
        let mut days: Vec<(NaiveDate, Vec<&str>)> = self
            .days
            .iter()
            .map(|(date, labels)| {
                let mut labels: Vec<&str> = labels.iter().map(String::as_str).collect();
                labels.sort_unstable();
                (*date, labels)
            })
            .collect();

        days.sort_unstable_by_key(|(date, _)| *date);
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventStart;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(title: &str, y: i32, m: u32, d: u32, h: u32) -> CalendarEvent {
        CalendarEvent::new(
            title,
            EventStart::DateTimeUtc(Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()),
        )
    }

    #[test]
    fn test_same_day_different_times_share_a_key() {
        let agenda = EventsByDay::from_events([
            at("[MATH-2164-001] Homework 3", 2024, 9, 3, 8),
            at("[PHYS-2001-002] Lab 1", 2024, 9, 3, 23),
        ]);

        assert_eq!(agenda.len(), 1);
        assert_eq!(
            agenda.get(date(2024, 9, 3)).unwrap(),
            ["MATH-2164-001: Homework 3", "PHYS-2001-002: Lab 1"]
        );
    }

    #[test]
    fn test_days_are_sorted() {
        let agenda = EventsByDay::from_events([
            at("[PHYS-2001-002] Lab 2", 2024, 9, 10, 12),
            at("[PHYS-2001-002] Lab 1", 2024, 9, 3, 12),
            at("[MATH-2164-001] Homework 3", 2024, 9, 3, 23),
            at("[CHM-1040-001] Exam 1", 2024, 8, 30, 9),
        ]);

        let days = agenda.days();

        let dates: Vec<NaiveDate> = days.iter().map(|(d, _)| *d).collect();
        assert_eq!(dates, [date(2024, 8, 30), date(2024, 9, 3), date(2024, 9, 10)]);
        assert_eq!(
            days[1].1,
            ["MATH-2164-001: Homework 3", "PHYS-2001-002: Lab 1"]
        );
    }

    #[test]
    fn test_excluded_events_never_reach_the_agenda() {
        let agenda = EventsByDay::from_events([
            at("PAL session [MATH-2164-001]", 2024, 9, 3, 10),
            at("Module 1 [Canvas Training Fall 2024]", 2024, 9, 4, 10),
            at("[MATH-2164-001] Homework 3", 2024, 9, 5, 10),
        ]);

        assert_eq!(agenda.len(), 1);
        assert!(agenda.get(date(2024, 9, 3)).is_none());
        assert!(agenda.get(date(2024, 9, 4)).is_none());
    }

    #[test]
    fn test_insert_does_not_filter() {
        let mut agenda = EventsByDay::new();
        agenda.insert(date(2024, 9, 3), "PAL session");

        assert_eq!(agenda.get(date(2024, 9, 3)).unwrap(), ["PAL session"]);
    }

    #[test]
    fn test_empty_agenda() {
        let agenda = EventsByDay::from_events(Vec::<CalendarEvent>::new());

        assert!(agenda.is_empty());
        assert!(agenda.days().is_empty());
    }
}
