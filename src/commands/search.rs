use anyhow::Result;
use timetable_core::weekday::label;

use crate::app::App;
use crate::console::Console;

pub fn run(app: &App, console: &mut dyn Console) -> Result<()> {
    let keyword = console.read_line("Enter a keyword to search for (case-insensitive)")?;
    let found = app.timetable.search_all(&keyword);

    if found.is_empty() {
        console.println("No matching events found.")?;
        return Ok(());
    }

    console.println("Matching Events:")?;
    for (day, event) in found {
        console.println(&format!("{}: {}", label(day), event))?;
    }

    Ok(())
}
