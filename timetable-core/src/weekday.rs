//! Weekday labels and display order.

use chrono::Weekday;
use serde::Deserialize;
use std::fmt;

/// The label used in prompts and saved files. Labels are case-sensitive.
pub fn label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Inverse of [`label`]. Unlike `chrono::Weekday::from_str`, abbreviations
/// and other casings are rejected.
pub fn from_label(s: &str) -> Option<Weekday> {
    WeekStart::Monday
        .days()
        .into_iter()
        .find(|day| label(*day) == s)
}

/// Which day the week is displayed (and saved) from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn first_day(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// All seven days in display order.
    pub fn days(self) -> [Weekday; 7] {
        let mut days = [self.first_day(); 7];
        for i in 1..days.len() {
            days[i] = days[i - 1].succ();
        }
        days
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", label(self.first_day()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monday_order() {
        let labels: Vec<_> = WeekStart::Monday.days().into_iter().map(label).collect();
        assert_eq!(
            labels,
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
    }

    #[test]
    fn sunday_order_is_a_rotation() {
        let labels: Vec<_> = WeekStart::Sunday.days().into_iter().map(label).collect();
        assert_eq!(
            labels,
            ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
        );
    }

    #[test]
    fn labels_round_trip() {
        for day in WeekStart::Monday.days() {
            assert_eq!(from_label(label(day)), Some(day));
        }
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(from_label("monday"), None);
        assert_eq!(from_label("MONDAY"), None);
        assert_eq!(from_label("Mon"), None);
        assert_eq!(from_label(" Monday"), None);
    }
}
