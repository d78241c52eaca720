use anyhow::Result;
use timetable_core::validate::{parse_day, parse_hour};
use timetable_core::{Event, TimetableError};

use super::DAY_PROMPT;
use crate::app::App;
use crate::console::{Console, ask};

pub fn run(app: &mut App, console: &mut dyn Console) -> Result<()> {
    let day = ask(console, DAY_PROMPT, parse_day)?;
    let title = console.read_line("Enter the title of the event")?;
    let start_hour = ask(console, "Enter the start time (hour, e.g., 9)", parse_hour)?;
    let end_hour = ask(console, "Enter the end time (hour, e.g., 10)", parse_hour)?;
    let location = console.read_line("Enter the location (optional)")?;

    let event = Event::new(title, start_hour, end_hour, location);

    match app.timetable.add_event(day, event) {
        Ok(()) => console.success("Event created successfully!")?,
        Err(TimetableError::Overlap { conflicts }) => {
            for conflict in &conflicts {
                console.error(&format!(
                    "Error: Overlapping events. Please reschedule. (conflicts with {})",
                    conflict
                ))?;
            }
        }
        Err(e) => console.error(&format!("Error: {e}"))?,
    }

    Ok(())
}
