//! Line format for saved timetables.
//!
//! One event per line, fields joined by `", "`:
//!
//! ```text
//! Monday, Standup, 9, 10, Room A
//! ```
//!
//! Title and location are escaped so they may contain the separator:
//! `\` is written as `\\` and `,` as `\,`. Fields without either character
//! are written verbatim. When reading, a backslash before any other
//! character (or at the end of the line) is plain text.

use chrono::Weekday;
use thiserror::Error;

use crate::event::Event;
use crate::weekday::{from_label, label};

const FIELD_COUNT: usize = 5;

/// One decoded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub day: Weekday,
    pub event: Event,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("unknown day '{0}'")]
    UnknownDay(String),

    #[error("invalid {field} hour '{value}'")]
    InvalidHour { field: &'static str, value: String },
}

fn escape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        if c == '\\' || c == ',' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Split on unescaped `", "` and unescape each field. A comma that is not
/// followed by a space is kept as text.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next @ ('\\' | ',')) => {
                    chars.next();
                    current.push(next);
                }
                _ => current.push(c),
            },
            ',' if chars.peek() == Some(&' ') => {
                chars.next();
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}

fn parse_hour(field: &'static str, value: &str) -> Result<u32, RecordError> {
    value.trim().parse().map_err(|_| RecordError::InvalidHour {
        field,
        value: value.to_string(),
    })
}

/// Encode one event as a line, without the trailing newline.
pub fn format_record(day: Weekday, event: &Event) -> String {
    format!(
        "{}, {}, {}, {}, {}",
        label(day),
        escape(&event.title),
        event.start_hour,
        event.end_hour,
        escape(&event.location)
    )
}

/// Decode one line (without its line terminator).
///
/// Hours are not checked against working hours.
pub fn parse_record(line: &str) -> Result<Record, RecordError> {
    let fields = split_fields(line);
    let [day, title, start, end, location]: [String; FIELD_COUNT] = fields
        .try_into()
        .map_err(|fields: Vec<String>| RecordError::FieldCount(fields.len()))?;

    let day = from_label(&day).ok_or(RecordError::UnknownDay(day))?;
    let event = Event {
        title,
        start_hour: parse_hour("start", &start)?,
        end_hour: parse_hour("end", &end)?,
        location,
    };

    Ok(Record { day, event })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_matches_legacy_format() {
        let event = Event::new("Standup", 9, 10, "Room A");
        assert_eq!(
            format_record(Weekday::Mon, &event),
            "Monday, Standup, 9, 10, Room A"
        );
    }

    #[test]
    fn parses_legacy_line() {
        let record = parse_record("Monday, Standup, 9, 10, Room A").unwrap();
        assert_eq!(record.day, Weekday::Mon);
        assert_eq!(record.event, Event::new("Standup", 9, 10, "Room A"));
    }

    #[test]
    fn empty_location() {
        let line = format_record(Weekday::Fri, &Event::new("Focus", 13, 15, ""));
        assert_eq!(line, "Friday, Focus, 13, 15, ");
        assert_eq!(parse_record(&line).unwrap().event.location, "");
    }

    #[test]
    fn separator_inside_fields_survives() {
        let event = Event::new("Review, part 2", 9, 10, "Room A, 2nd floor \\ east");
        let line = format_record(Weekday::Tue, &event);
        assert_eq!(
            line,
            "Tuesday, Review\\, part 2, 9, 10, Room A\\, 2nd floor \\\\ east"
        );
        assert_eq!(parse_record(&line).unwrap().event, event);
    }

    #[test]
    fn bare_comma_is_text() {
        let record = parse_record("Monday, a,b, 9, 10, x").unwrap();
        assert_eq!(record.event.title, "a,b");
    }

    #[test]
    fn hours_are_not_range_checked() {
        let record = parse_record("Sunday, Night shift, 22, 23, ").unwrap();
        assert_eq!(record.event.start_hour, 22);
    }

    // --- malformed lines ---

    #[test]
    fn wrong_field_count() {
        assert_eq!(
            parse_record("Monday, Standup, 9, 10"),
            Err(RecordError::FieldCount(4))
        );
        assert_eq!(
            parse_record("Monday, Standup, 9, 10, Room A, extra"),
            Err(RecordError::FieldCount(6))
        );
        assert_eq!(parse_record(""), Err(RecordError::FieldCount(1)));
    }

    #[test]
    fn unknown_day() {
        assert_eq!(
            parse_record("Funday, Standup, 9, 10, "),
            Err(RecordError::UnknownDay("Funday".into()))
        );
    }

    #[test]
    fn non_numeric_hour() {
        assert_eq!(
            parse_record("Monday, Standup, nine, 10, "),
            Err(RecordError::InvalidHour {
                field: "start",
                value: "nine".into()
            })
        );
    }

    #[test]
    fn unescaped_backslash_is_text() {
        let record = parse_record("Monday, Lab, 9, 10, C:\\rooms").unwrap();
        assert_eq!(record.event.location, "C:\\rooms");

        let record = parse_record("Tuesday, X, 9, 10, share\\").unwrap();
        assert_eq!(record.event.location, "share\\");
    }

    #[test]
    fn escaped_backslash_round_trips() {
        let event = Event::new("Lab", 9, 10, "C:\\rooms\\");
        let line = format_record(Weekday::Mon, &event);
        assert_eq!(line, "Monday, Lab, 9, 10, C:\\\\rooms\\\\");
        assert_eq!(parse_record(&line).unwrap().event, event);
    }
}
