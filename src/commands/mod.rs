pub mod create;
pub mod delete;
pub mod load;
pub mod print;
pub mod save;
pub mod search;
pub mod update;

use anyhow::Result;
use std::path::PathBuf;

use crate::console::Console;

pub const DAY_PROMPT: &str = "Enter the day of the week (e.g., Monday)";

/// Print `Matching Events:` followed by a 1-based numbered list.
fn list_matches(console: &mut dyn Console, matches: &[String]) -> Result<()> {
    console.println("Matching Events:")?;
    for (i, event) in matches.iter().enumerate() {
        console.println(&format!("{}. {}", i + 1, event))?;
    }
    Ok(())
}

/// Ask for a file name. An empty answer falls back to `default`; `None`
/// means there was neither.
fn prompt_file(
    console: &mut dyn Console,
    prompt: &str,
    default: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    let prompt = match &default {
        Some(path) => format!("{} [{}]", prompt, path.display()),
        None => prompt.to_string(),
    };

    let input = console.read_line(&prompt)?;
    if !input.is_empty() {
        return Ok(Some(PathBuf::from(input)));
    }

    if default.is_none() {
        console.error("No file name given.")?;
    }
    Ok(default)
}
