//! The weekly timetable store.

use chrono::Weekday;

use crate::error::{TimetableError, TimetableResult};
use crate::event::{Event, WORK_HOURS};
use crate::weekday::{WeekStart, label};

/// Replacement values for an existing event. The start hour is never changed.
#[derive(Debug, Clone)]
pub struct EventUpdate {
    pub title: String,
    pub end_hour: u32,
    pub location: String,
}

/// Events for each weekday, in insertion order, plus the display order.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    week_start: WeekStart,
    days: [Vec<Event>; 7],
}

fn slot(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}

fn check_hour(hour: u32) -> TimetableResult<()> {
    if WORK_HOURS.contains(&hour) {
        Ok(())
    } else {
        Err(TimetableError::HourOutOfRange(hour))
    }
}

impl Timetable {
    pub fn new(week_start: WeekStart) -> Self {
        Timetable {
            week_start,
            days: Default::default(),
        }
    }

    // ORDER:

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn set_week_start(&mut self, week_start: WeekStart) {
        self.week_start = week_start;
    }

    /// The seven days in current display order.
    pub fn days(&self) -> [Weekday; 7] {
        self.week_start.days()
    }

    // READS:

    pub fn events_on(&self, day: Weekday) -> &[Event] {
        &self.days[slot(day)]
    }

    /// Every event with its day, days in display order then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &Event)> + '_ {
        self.days()
            .into_iter()
            .flat_map(move |day| self.events_on(day).iter().map(move |e| (day, e)))
    }

    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.days.iter_mut().for_each(Vec::clear);
    }

    /// Events on `day` whose title or location contains `keyword`
    /// (case-insensitive), in their original order.
    pub fn find_matching(&self, day: Weekday, keyword: &str) -> Vec<&Event> {
        self.events_on(day)
            .iter()
            .filter(|e| e.matches(keyword))
            .collect()
    }

    /// Matching events across the whole week, sorted by start hour.
    /// Ties keep display-order encounter order.
    pub fn search_all(&self, keyword: &str) -> Vec<(Weekday, &Event)> {
        let mut found: Vec<_> = self.iter().filter(|(_, e)| e.matches(keyword)).collect();
        found.sort_by_key(|(_, e)| e.start_hour);
        found
    }

    // WRITES:

    /// Add an event if both hours are within working hours and it does not
    /// overlap anything already on that day. On overlap, every conflicting
    /// event is returned in the error and nothing is stored.
    pub fn add_event(&mut self, day: Weekday, event: Event) -> TimetableResult<()> {
        check_hour(event.start_hour)?;
        check_hour(event.end_hour)?;

        let conflicts: Vec<Event> = self
            .events_on(day)
            .iter()
            .filter(|existing| event.overlaps(existing))
            .cloned()
            .collect();

        if !conflicts.is_empty() {
            tracing::debug!(
                day = label(day),
                title = %event.title,
                conflicts = conflicts.len(),
                "rejected overlapping event"
            );
            return Err(TimetableError::Overlap { conflicts });
        }

        tracing::debug!(day = label(day), title = %event.title, "added event");
        self.days[slot(day)].push(event);
        Ok(())
    }

    /// Append without any validation. Used when loading saved files.
    pub fn append(&mut self, day: Weekday, event: Event) {
        self.days[slot(day)].push(event);
    }

    /// Overwrite title, end hour and location of the `selection`-th (1-based)
    /// match for `keyword` on `day`. Overlaps are not re-checked.
    pub fn update_event(
        &mut self,
        day: Weekday,
        keyword: &str,
        selection: usize,
        update: EventUpdate,
    ) -> TimetableResult<&Event> {
        check_hour(update.end_hour)?;
        let index = self.resolve_selection(day, keyword, selection)?;

        let event = &mut self.days[slot(day)][index];
        event.title = update.title;
        event.end_hour = update.end_hour;
        event.location = update.location;

        tracing::debug!(day = label(day), index, "updated event");
        Ok(&*event)
    }

    /// Remove the `selection`-th (1-based) match for `keyword` on `day`.
    pub fn delete_event(
        &mut self,
        day: Weekday,
        keyword: &str,
        selection: usize,
    ) -> TimetableResult<Event> {
        let index = self.resolve_selection(day, keyword, selection)?;
        let removed = self.days[slot(day)].remove(index);

        tracing::debug!(day = label(day), index, "deleted event");
        Ok(removed)
    }

    /// Map a 1-based selection among the matches to an index into the day.
    fn resolve_selection(
        &self,
        day: Weekday,
        keyword: &str,
        selection: usize,
    ) -> TimetableResult<usize> {
        let positions: Vec<usize> = self
            .events_on(day)
            .iter()
            .enumerate()
            .filter(|(_, e)| e.matches(keyword))
            .map(|(i, _)| i)
            .collect();

        if positions.is_empty() {
            return Err(TimetableError::NoMatches);
        }

        selection
            .checked_sub(1)
            .and_then(|i| positions.get(i).copied())
            .ok_or(TimetableError::SelectionOutOfRange {
                selection,
                count: positions.len(),
            })
    }
}
