//! Core types for canvas-agenda.
//!
//! This crate provides everything between the `.ics` file and the report:
//! - `ics` loads a Canvas calendar export into `CalendarEvent`s
//! - `format` decides which events to keep and cleans up their titles
//! - `agenda` groups the cleaned labels by day

pub mod agenda;
pub mod error;
pub mod event;
pub mod format;
pub mod ics;

pub use agenda::EventsByDay;
pub use error::{AgendaError, AgendaResult};
pub use event::{CalendarEvent, EventStart};
