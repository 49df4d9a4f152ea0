//! # Availability
//!
//! Free working-hour slots for a manager, given the meetings already on
//! their calendar. All times are UTC.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::meeting::{minutes, Meeting};

/// Working-hours grid used to offer slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityPolicy {
    /// First hour of the working day (inclusive)
    pub work_start_hour: u32,

    /// Last hour of the working day (exclusive)
    pub work_end_hour: u32,

    pub slot_minutes: u32,

    pub skip_weekends: bool,
}

impl Default for AvailabilityPolicy {
    fn default() -> Self {
        Self {
            work_start_hour: 9,
            work_end_hour: 17,
            slot_minutes: 30,
            skip_weekends: true,
        }
    }
}

/// A free window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A window taken by a meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusySlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub title: String,
}

/// Free and taken windows over a date range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub available_slots: Vec<TimeSlot>,
    pub busy_slots: Vec<BusySlot>,
}

/// Busy windows for a set of meetings
pub fn busy_slots(meetings: &[Meeting]) -> Vec<BusySlot> {
    meetings
        .iter()
        .map(|m| BusySlot {
            start: m.date,
            end: m.end(),
            title: m.title.clone(),
        })
        .collect()
}

/// Compute free slots for every working day in `[first_day, last_day]`.
///
/// A slot is offered only if it does not overlap any meeting.
pub fn availability(
    first_day: NaiveDate,
    last_day: NaiveDate,
    meetings: &[Meeting],
    policy: &AvailabilityPolicy,
) -> Availability {
    let busy = busy_slots(meetings);
    let mut available = Vec::new();

    // A zero slot length would never advance
    if policy.slot_minutes == 0 {
        return Availability {
            available_slots: available,
            busy_slots: busy,
        };
    }

    let step = minutes(policy.slot_minutes);

    for day in first_day.iter_days().take_while(|d| *d <= last_day) {
        if policy.skip_weekends && matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }

        let (Some(day_start), Some(day_end)) = (
            at_hour(day, policy.work_start_hour),
            at_hour(day, policy.work_end_hour),
        ) else {
            continue;
        };

        // Only whole slots that finish by the end of the working day
        let mut slot_start = day_start;
        while let Some(slot_end) = slot_start
            .checked_add_signed(step)
            .filter(|end| *end <= day_end)
        {
            if !busy.iter().any(|b| slot_start < b.end && slot_end > b.start) {
                available.push(TimeSlot {
                    start: slot_start,
                    end: slot_end,
                });
            }
            slot_start = slot_end;
        }
    }

    Availability {
        available_slots: available,
        busy_slots: busy,
    }
}

/// `hour` may be 24, meaning midnight at the end of `day`.
fn at_hour(day: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
    let midnight = day.and_hms_opt(0, 0, 0)?.and_utc();
    if hour > 24 {
        return None;
    }
    midnight.checked_add_signed(Duration::hours(i64::from(hour)))
}
