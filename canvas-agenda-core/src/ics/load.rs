use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AgendaError, AgendaResult};
use crate::event::CalendarEvent;
use crate::ics::parse_events;

/// Read the export at `path` and return every event in it.
pub fn load_events(path: impl AsRef<Path>) -> AgendaResult<Vec<CalendarEvent>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AgendaError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| AgendaError::Parse(e.to_string()))?;
    let events = parse_events(&content)?;

    debug!(path = %path.display(), count = events.len(), "Loaded calendar events");

    Ok(events)
}
