use anyhow::Result;
use timetable_core::persist;

use super::prompt_file;
use crate::app::App;
use crate::console::Console;

pub fn run(app: &App, console: &mut dyn Console) -> Result<()> {
    let Some(path) = prompt_file(
        console,
        "Enter the file name to save the timetable data",
        app.config.default_file(),
    )?
    else {
        return Ok(());
    };

    match persist::save(&app.timetable, &path) {
        Ok(_) => console.success("Timetable data saved to the file.")?,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "save failed");
            console.error(&format!("Could not save timetable: {e}"))?;
        }
    }

    Ok(())
}
