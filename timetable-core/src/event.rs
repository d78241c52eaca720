//! Timetable event type.

use std::fmt;
use std::ops::Range;

/// Hours an event may start or end at when created interactively.
pub const WORK_HOURS: Range<u32> = 9..17;

/// A single scheduled activity on one weekday.
///
/// `start_hour < end_hour` is not enforced anywhere; each hour is only
/// checked against [`WORK_HOURS`] on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub title: String,
    pub start_hour: u32,
    pub end_hour: u32,
    /// Empty when no location was given
    pub location: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        start_hour: u32,
        end_hour: u32,
        location: impl Into<String>,
    ) -> Self {
        Event {
            title: title.into(),
            start_hour,
            end_hour,
            location: location.into(),
        }
    }

    /// Half-open interval intersection: `[9,11)` and `[11,13)` do not overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start_hour < other.end_hour && self.end_hour > other.start_hour
    }

    /// Case-insensitive substring match against title or location.
    /// An empty keyword matches every event.
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword)
            || self.location.to_lowercase().contains(&keyword)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}-{} => {} @ {}",
            self.start_hour, self.end_hour, self.title, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- overlaps ---

    #[test]
    fn overlapping_intervals() {
        let a = Event::new("A", 9, 11, "");
        let b = Event::new("B", 10, 12, "");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn adjacent_intervals_do_not_overlap() {
        let a = Event::new("A", 9, 11, "");
        let c = Event::new("C", 11, 13, "");
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn contained_interval_overlaps() {
        let outer = Event::new("Outer", 9, 16, "");
        let inner = Event::new("Inner", 12, 13, "");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    // --- matches ---

    #[test]
    fn matches_title_case_insensitive() {
        let event = Event::new("Lecture", 9, 10, "");
        assert!(event.matches("lecture"));
        assert!(event.matches("LECT"));
        assert!(!event.matches("tutorial"));
    }

    #[test]
    fn matches_location() {
        let event = Event::new("Standup", 9, 10, "Room A");
        assert!(event.matches("room a"));
    }

    #[test]
    fn empty_keyword_matches_everything() {
        assert!(Event::new("", 9, 10, "").matches(""));
        assert!(Event::new("Standup", 9, 10, "Room A").matches(""));
    }

    #[test]
    fn display_format() {
        let event = Event::new("Standup", 9, 10, "Room A");
        assert_eq!(event.to_string(), "9-10 => Standup @ Room A");
    }
}
