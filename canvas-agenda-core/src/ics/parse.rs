//! ICS parsing using the icalendar crate's parser.

use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};
use tracing::warn;

use crate::error::{AgendaError, AgendaResult};
use crate::event::{CalendarEvent, EventStart};

const CALENDAR_HEADER: &str = "BEGIN:VCALENDAR";

/// Parse ICS content into the events it contains.
///
/// Events missing a SUMMARY or a usable DTSTART are skipped rather than
/// failing the whole file.
pub fn parse_events(content: &str) -> AgendaResult<Vec<CalendarEvent>> {
    let unfolded = unfold(content);
    let body = unfolded.trim_start_matches('\u{feff}').trim_start();

    let is_calendar = body
        .get(..CALENDAR_HEADER.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(CALENDAR_HEADER));
    if !is_calendar {
        return Err(AgendaError::Parse(format!(
            "expected content to start with {}",
            CALENDAR_HEADER
        )));
    }

    let calendar = read_calendar(body).map_err(|e| AgendaError::Parse(e.to_string()))?;

    let mut events = Vec::new();
    collect_events(&calendar.components, &mut events);
    Ok(events)
}

/// Walk the component tree, converting every VEVENT found at any depth
fn collect_events(components: &[Component<'_>], events: &mut Vec<CalendarEvent>) {
    for component in components {
        if component.name == "VEVENT" {
            if let Some(event) = to_calendar_event(component) {
                events.push(event);
            }
        }
        collect_events(&component.components, events);
    }
}

fn to_calendar_event(vevent: &Component<'_>) -> Option<CalendarEvent> {
    let uid = vevent
        .find_prop("UID")
        .map(|p| p.val.to_string())
        .unwrap_or_default();

    let Some(summary) = vevent.find_prop("SUMMARY") else {
        warn!(uid = %uid, "Skipping event without SUMMARY");
        return None;
    };

    let Some(start) = vevent
        .find_prop("DTSTART")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
        .map(to_event_start)
    else {
        warn!(uid = %uid, summary = %summary.val, "Skipping event without a valid DTSTART");
        return None;
    };

    Some(CalendarEvent::new(unescape_text(summary.val.as_ref()), start))
}

fn to_event_start(dpt: DatePerhapsTime) -> EventStart {
    match dpt {
        DatePerhapsTime::Date(d) => EventStart::Date(d),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => EventStart::DateTimeUtc(dt),
            CalendarDateTime::Floating(naive) => EventStart::DateTimeFloating(naive),
            CalendarDateTime::WithTimezone { date_time, tzid } => EventStart::DateTimeZoned {
                datetime: date_time,
                tzid,
            },
        },
    }
}

/// Undo RFC 5545 TEXT escaping (`\,` `\;` `\\` `\n`)
fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }

    out
}
