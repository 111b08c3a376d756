//! Reading Canvas `.ics` exports.
//!
//! Parsing itself is delegated to the icalendar crate; this module only picks
//! out what the agenda needs from each VEVENT.

mod load;
mod parse;

pub use load::load_events;
pub use parse::parse_events;
