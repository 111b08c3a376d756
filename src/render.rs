//! Plain-text rendering of the agenda.

use canvas_agenda_core::EventsByDay;
use chrono::NaiveDate;

/// Extension trait for rendering core types as terminal text.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventsByDay {
    /// One block per day: a blank line, the day header, then its labels.
    fn render(&self) -> String {
        let mut out = String::new();

        for (date, labels) in self.days() {
            out.push('\n');
            out.push_str(&render_day_header(date));
            out.push('\n');
            for label in labels {
                out.push_str(label);
                out.push('\n');
            }
        }

        out
    }
}

/// e.g. `-- September 03, 2024 (Tuesday) --`
fn render_day_header(date: NaiveDate) -> String {
    format!("-- {} --", date.format("%B %d, %Y (%A)"))
}
