//! Weekly timetable validation and grouping.
//!
//! Days use ISO numbering: 1 = Monday .. 7 = Sunday.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::CoreError;

pub const MIN_DAY_OF_WEEK: i16 = 1;
pub const MAX_DAY_OF_WEEK: i16 = 7;

/// Maximum length for subject and class labels on a schedule item.
pub const MAX_LABEL_LEN: usize = 80;

/// Maximum length for a room label.
pub const MAX_ROOM_LEN: usize = 40;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Validate an ISO day of week.
pub fn validate_day_of_week(day: i16) -> Result<(), CoreError> {
    if !(MIN_DAY_OF_WEEK..=MAX_DAY_OF_WEEK).contains(&day) {
        return Err(CoreError::Validation(format!(
            "day_of_week must be between {MIN_DAY_OF_WEEK} (Monday) and {MAX_DAY_OF_WEEK} (Sunday), got {day}"
        )));
    }
    Ok(())
}

/// Validate that a period ends strictly after it starts.
pub fn validate_time_range(start: NaiveTime, end: NaiveTime) -> Result<(), CoreError> {
    if end <= start {
        return Err(CoreError::Validation(format!(
            "end_time ({end}) must be after start_time ({start})"
        )));
    }
    Ok(())
}

/// Validate a required short label such as a subject or class name.
pub fn validate_label(field: &str, value: &str) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    if trimmed.chars().count() > MAX_LABEL_LEN {
        return Err(CoreError::Validation(format!(
            "{field} too long (max {MAX_LABEL_LEN} chars)"
        )));
    }
    Ok(())
}

/// Validate an optional room label.
pub fn validate_room(room: Option<&str>) -> Result<(), CoreError> {
    match room {
        Some(r) if r.chars().count() > MAX_ROOM_LEN => Err(CoreError::Validation(format!(
            "room too long (max {MAX_ROOM_LEN} chars)"
        ))),
        _ => Ok(()),
    }
}

/// English name of an ISO day, or `None` for out-of-range values.
pub fn day_name(day: i16) -> Option<&'static str> {
    if (MIN_DAY_OF_WEEK..=MAX_DAY_OF_WEEK).contains(&day) {
        Some(DAY_NAMES[(day - 1) as usize])
    } else {
        None
    }
}

/// ISO day of week for a calendar date.
pub fn iso_day_of_week(date: NaiveDate) -> i16 {
    date.weekday().number_from_monday() as i16
}

/// One day's worth of timetable entries.
#[derive(Debug, Clone, Serialize)]
pub struct DaySchedule<T> {
    pub day_of_week: i16,
    pub day_name: &'static str,
    pub items: Vec<T>,
}

/// Group timetable entries into seven days (Monday first), each ordered by
/// start time. Entries with an out-of-range day are dropped.
pub fn group_by_day<T>(
    items: Vec<T>,
    day_of: impl Fn(&T) -> i16,
    start_of: impl Fn(&T) -> NaiveTime,
) -> Vec<DaySchedule<T>> {
    let mut days: Vec<DaySchedule<T>> = (MIN_DAY_OF_WEEK..=MAX_DAY_OF_WEEK)
        .map(|d| DaySchedule {
            day_of_week: d,
            day_name: DAY_NAMES[(d - 1) as usize],
            items: Vec::new(),
        })
        .collect();

    for item in items {
        let day = day_of(&item);
        if let Some(slot) = days.iter_mut().find(|d| d.day_of_week == day) {
            slot.items.push(item);
        }
    }
    for day in &mut days {
        day.items.sort_by_key(|i| start_of(i));
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn day_range_is_enforced() {
        assert!(validate_day_of_week(0).is_err());
        assert!(validate_day_of_week(1).is_ok());
        assert!(validate_day_of_week(7).is_ok());
        assert!(validate_day_of_week(8).is_err());
    }

    #[test]
    fn empty_or_inverted_period_rejected() {
        assert!(validate_time_range(t(9, 0), t(9, 0)).is_err());
        assert!(validate_time_range(t(10, 0), t(9, 0)).is_err());
        assert!(validate_time_range(t(9, 0), t(9, 45)).is_ok());
    }

    #[test]
    fn grouping_orders_by_start_time() {
        let items = vec![(3_i16, t(11, 0)), (1, t(10, 0)), (3, t(8, 30)), (9, t(8, 0))];
        let days = group_by_day(items, |i| i.0, |i| i.1);

        assert_eq!(days.len(), 7);
        assert_eq!(days[0].day_name, "Monday");
        assert_eq!(days[0].items.len(), 1);
        assert_eq!(days[2].items, vec![(3, t(8, 30)), (3, t(11, 0))]);
        let total: usize = days.iter().map(|d| d.items.len()).sum();
        assert_eq!(total, 3, "out-of-range day is dropped");
    }

    #[test]
    fn iso_day_for_known_date() {
        // 2026-10-19 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(iso_day_of_week(monday), 1);
        assert_eq!(day_name(7), Some("Sunday"));
        assert_eq!(day_name(0), None);
    }
}
