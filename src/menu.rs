//! Main menu entries.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Update,
    Delete,
    PrintAll,
    PrintDay,
    Save,
    Load,
    Search,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Create,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::PrintAll,
        MenuChoice::PrintDay,
        MenuChoice::Save,
        MenuChoice::Load,
        MenuChoice::Search,
        MenuChoice::Quit,
    ];

    pub fn number(self) -> usize {
        MenuChoice::ALL
            .iter()
            .position(|c| *c == self)
            .map_or(0, |i| i + 1)
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuChoice::Create => "Create an event",
            MenuChoice::Update => "Update an event",
            MenuChoice::Delete => "Delete an event",
            MenuChoice::PrintAll => "Print the timetable",
            MenuChoice::PrintDay => "Print events on a specific day",
            MenuChoice::Save => "Save timetable to a file",
            MenuChoice::Load => "Load timetable from a file",
            MenuChoice::Search => "Search events",
            MenuChoice::Quit => "Quit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    /// Exactly `1` through `9`; surrounding whitespace is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuChoice::ALL
            .into_iter()
            .find(|c| c.number().to_string() == s)
            .ok_or(())
    }
}

/// The menu as printed before every command.
pub fn render() -> Vec<String> {
    let mut lines = vec![String::new(), "Main Menu:".to_string()];
    lines.extend(
        MenuChoice::ALL
            .iter()
            .map(|c| format!("{}. {}", c.number(), c.description())),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_one_based_and_ordered() {
        assert_eq!(MenuChoice::Create.number(), 1);
        assert_eq!(MenuChoice::Search.number(), 8);
        assert_eq!(MenuChoice::Quit.number(), 9);
    }

    #[test]
    fn parses_every_number() {
        for choice in MenuChoice::ALL {
            assert_eq!(choice.number().to_string().parse::<MenuChoice>(), Ok(choice));
        }
    }

    #[test]
    fn rejects_anything_else() {
        for input in ["0", "10", "", " 1", "quit", "1.0"] {
            assert_eq!(input.parse::<MenuChoice>(), Err(()), "{input:?}");
        }
    }

    #[test]
    fn render_lists_nine_entries() {
        let lines = render();
        assert_eq!(lines[1], "Main Menu:");
        assert_eq!(lines[2], "1. Create an event");
        assert_eq!(lines.last().unwrap(), "9. Quit");
        assert_eq!(lines.len(), 11);
    }
}
