use anyhow::Result;
use timetable_core::validate::{parse_day, parse_selection};

use super::{DAY_PROMPT, list_matches};
use crate::app::App;
use crate::console::{Console, ask};

pub fn run(app: &mut App, console: &mut dyn Console) -> Result<()> {
    let day = ask(console, DAY_PROMPT, parse_day)?;
    let keyword =
        console.read_line("Enter a keyword to search for events to delete (case-insensitive)")?;

    let matches: Vec<String> = app
        .timetable
        .find_matching(day, &keyword)
        .iter()
        .map(|e| e.to_string())
        .collect();

    if matches.is_empty() {
        console.println("No matching events found.")?;
        return Ok(());
    }

    list_matches(console, &matches)?;
    let selection = ask(console, "Enter the number of the event to delete", |s| {
        parse_selection(s, matches.len())
    })?;

    match app.timetable.delete_event(day, &keyword, selection) {
        Ok(_) => console.success("Event deleted successfully!")?,
        Err(e) => console.error(&format!("Error: {e}"))?,
    }

    Ok(())
}
