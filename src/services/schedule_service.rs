//! Schedule text parsing and overlap detection.
//!
//! Schedules are free text such as `"Tuesdays and Thursdays, 3:30 PM - 4:30 PM"`
//! or `"Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM"`. Each recognised day
//! expands to one [`ScheduleSlot`]; malformed text yields no slots.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use chrono::{NaiveTime, Weekday};
use regex::Regex;
use thiserror::Error;

const TIME_FORMAT: &str = "%I:%M %p";

fn time_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2}:\d{2} (?:AM|PM)) - (\d{1,2}:\d{2} (?:AM|PM))")
            .expect("time range pattern is valid")
    })
}

/// Days compare by [`Day::name`], so a verbatim `"Monday"` token equals the
/// canonical day that `"Mondays"` maps to.
#[derive(Debug, Clone)]
pub enum Day {
    Weekday(Weekday),
    /// Token that is not a plural weekday name, kept verbatim.
    Unrecognized(String),
}

impl Day {
    fn from_token(token: &str) -> Self {
        let weekday = match token {
            "Mondays" => Weekday::Mon,
            "Tuesdays" => Weekday::Tue,
            "Wednesdays" => Weekday::Wed,
            "Thursdays" => Weekday::Thu,
            "Fridays" => Weekday::Fri,
            "Saturdays" => Weekday::Sat,
            "Sundays" => Weekday::Sun,
            other => return Day::Unrecognized(other.to_string()),
        };
        Day::Weekday(weekday)
    }

    pub fn name(&self) -> &str {
        match self {
            Day::Weekday(Weekday::Mon) => "Monday",
            Day::Weekday(Weekday::Tue) => "Tuesday",
            Day::Weekday(Weekday::Wed) => "Wednesday",
            Day::Weekday(Weekday::Thu) => "Thursday",
            Day::Weekday(Weekday::Fri) => "Friday",
            Day::Weekday(Weekday::Sat) => "Saturday",
            Day::Weekday(Weekday::Sun) => "Sunday",
            Day::Unrecognized(token) => token,
        }
    }
}

impl PartialEq for Day {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Day {}

impl Hash for Day {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub day: Day,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ScheduleSlot {
    /// Same day and strictly overlapping times; touching ranges do not count.
    pub fn overlaps(&self, other: &ScheduleSlot) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule {0:?} has no recognisable \"<days>, H:MM AM - H:MM PM\" time range")]
    Unparseable(String),
}

fn parse_time_range(segment: &str) -> Option<(NaiveTime, NaiveTime)> {
    let caps = time_range_re().captures(segment)?;
    let start = NaiveTime::parse_from_str(caps.get(1)?.as_str(), TIME_FORMAT).ok()?;
    let end = NaiveTime::parse_from_str(caps.get(2)?.as_str(), TIME_FORMAT).ok()?;
    Some((start, end))
}

fn day_tokens(segment: &str) -> impl Iterator<Item = Day> + '_ {
    segment.split(" and ").map(|d| Day::from_token(d.trim()))
}

fn expand(days: Vec<Day>, (start, end): (NaiveTime, NaiveTime)) -> Vec<ScheduleSlot> {
    days.into_iter()
        .map(|day| ScheduleSlot { day, start, end })
        .collect()
}

pub fn parse_schedule(schedule: &str) -> Vec<ScheduleSlot> {
    let segments: Vec<&str> = schedule.split(", ").collect();
    if segments.len() < 2 {
        return Vec::new();
    }

    // "<days joined by and>, <range>"
    if let Some(range) = parse_time_range(segments[1]) {
        return expand(day_tokens(segments[0]).collect(), range);
    }

    // "<day>, <day>, ..., <range>"
    let Some((last, days)) = segments.split_last() else {
        return Vec::new();
    };
    if days.len() < 2 {
        return Vec::new();
    }
    match parse_time_range(last) {
        Some(range) => expand(days.iter().flat_map(|s| day_tokens(s)).collect(), range),
        None => Vec::new(),
    }
}

/// Strict counterpart of [`parse_schedule`] used when loading the directory.
pub fn validate_schedule(schedule: &str) -> Result<Vec<ScheduleSlot>, ScheduleError> {
    let slots = parse_schedule(schedule);
    if slots.is_empty() {
        return Err(ScheduleError::Unparseable(schedule.to_string()));
    }
    for slot in &slots {
        if let Day::Unrecognized(token) = &slot.day {
            tracing::warn!(schedule = %schedule, day = %token, "unrecognised day in schedule");
        }
    }
    Ok(slots)
}

pub fn collides(a: &str, b: &str) -> bool {
    let slots_a = parse_schedule(a);
    let slots_b = parse_schedule(b);
    slots_a
        .iter()
        .any(|sa| slots_b.iter().any(|sb| sa.overlaps(sb)))
}
