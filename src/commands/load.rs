use anyhow::Result;
use timetable_core::persist::{self, PersistError};

use super::prompt_file;
use crate::app::App;
use crate::console::Console;

pub fn run(app: &mut App, console: &mut dyn Console) -> Result<()> {
    let Some(path) = prompt_file(
        console,
        "Enter the file name to load the timetable data",
        app.config.default_file(),
    )?
    else {
        return Ok(());
    };

    match persist::load(&mut app.timetable, &path, app.config.load_policy) {
        Ok(report) => {
            console.success("Timetable data loaded from the file.")?;
            if !report.skipped.is_empty() {
                console.error(&format!(
                    "Skipped {} malformed line(s):",
                    report.skipped.len()
                ))?;
                for (line, err) in &report.skipped {
                    console.error(&format!("  line {line}: {err}"))?;
                }
            }
        }
        Err(PersistError::NotFound(_)) => {
            console.error("File not found. Please make sure the file exists.")?;
        }
        Err(e @ PersistError::Malformed { .. }) => {
            console.error(&format!("Could not load timetable: {e}. Nothing was loaded."))?;
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "load failed");
            console.error(&format!("Could not load timetable: {e}"))?;
        }
    }

    Ok(())
}
