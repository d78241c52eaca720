use anyhow::Result;
use timetable_core::WeekStart;
use timetable_core::validate::{parse_day, parse_week_start};
use timetable_core::weekday::label;

use super::DAY_PROMPT;
use crate::app::App;
use crate::console::{Console, ask};

/// Print the whole week, after asking which day it starts on.
pub fn run_all(app: &mut App, console: &mut dyn Console) -> Result<()> {
    let input =
        console.read_line("Choose the start day of the week (1 for Monday, 2 for Sunday)")?;
    let week_start = match parse_week_start(&input) {
        Ok(week_start) => week_start,
        Err(_) => {
            console.error("Invalid choice. Defaulting to Monday as the start day of the week.")?;
            WeekStart::Monday
        }
    };
    app.timetable.set_week_start(week_start);

    console.println("Weekly Timetable:")?;
    for day in app.timetable.days() {
        console.println(label(day))?;
        for event in app.timetable.events_on(day) {
            console.println(&event.to_string())?;
        }
    }

    Ok(())
}

pub fn run_day(app: &App, console: &mut dyn Console) -> Result<()> {
    let day = ask(console, DAY_PROMPT, parse_day)?;

    console.println(&format!("Events on {}:", label(day)))?;
    for event in app.timetable.events_on(day) {
        console.println(&event.to_string())?;
    }

    Ok(())
}
