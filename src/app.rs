//! The menu loop.

use anyhow::Result;
use timetable_core::Timetable;
use timetable_core::config::TimetableConfig;

use crate::commands;
use crate::console::Console;
use crate::menu::{self, MenuChoice};

pub struct App {
    pub timetable: Timetable,
    pub config: TimetableConfig,
}

impl App {
    pub fn new(config: TimetableConfig) -> Self {
        App {
            timetable: Timetable::new(config.week_start),
            config,
        }
    }

    /// Show the menu and run commands until the user quits.
    ///
    /// Invalid input never ends the loop; a console failure (closed input)
    /// does.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        console.println("Weekly Timetable Manager")?;

        loop {
            for line in menu::render() {
                console.println(&line)?;
            }

            let input = console.read_line("Enter your choice")?;
            let Ok(choice) = input.parse::<MenuChoice>() else {
                console.error("Invalid choice. Please try again.")?;
                continue;
            };

            tracing::debug!(?choice, "running command");

            match choice {
                MenuChoice::Create => commands::create::run(self, console)?,
                MenuChoice::Update => commands::update::run(self, console)?,
                MenuChoice::Delete => commands::delete::run(self, console)?,
                MenuChoice::PrintAll => commands::print::run_all(self, console)?,
                MenuChoice::PrintDay => commands::print::run_day(self, console)?,
                MenuChoice::Save => commands::save::run(self, console)?,
                MenuChoice::Load => commands::load::run(self, console)?,
                MenuChoice::Search => commands::search::run(self, console)?,
                MenuChoice::Quit => {
                    console.println("Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }
}
