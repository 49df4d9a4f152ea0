//! # Meetings
//!
//! Scheduling rules for meeting creation and meeting requests: when a
//! meeting may be placed, how many dates an employee may propose, and the
//! shape of titles, durations and attendee lists.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{reject, ValidationResult};

/// An existing (or proposed) meeting, as far as conflict checks care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Start time
    pub date: DateTime<Utc>,

    /// Length in minutes
    pub duration: u32,

    pub title: String,
}

impl Meeting {
    /// Create a meeting starting at `date` lasting `duration` minutes
    pub fn new(date: DateTime<Utc>, duration: u32, title: impl Into<String>) -> Self {
        Self {
            date,
            duration,
            title: title.into(),
        }
    }

    /// Exclusive end of the meeting window
    ///
    /// Saturates at the latest representable instant.
    pub fn end(&self) -> DateTime<Utc> {
        saturating_add(self.date, minutes(self.duration))
    }

    /// Whether `[start, end)` intersects this meeting's `[date, end())`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.end() && end > self.date
    }
}

pub(crate) fn minutes(duration: u32) -> Duration {
    Duration::minutes(i64::from(duration))
}

pub(crate) fn saturating_add(time: DateTime<Utc>, delta: Duration) -> DateTime<Utc> {
    time.checked_add_signed(delta)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Scheduling limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingPolicy {
    /// How far ahead a meeting may be scheduled
    pub max_future_days: u32,

    /// Upper bound on dates in a meeting request
    pub max_proposed_dates: usize,

    /// How far ahead a proposed date may lie
    pub proposed_dates_horizon_days: u32,

    pub min_duration_minutes: u32,
    pub max_duration_minutes: u32,

    pub title_min_len: usize,
    pub title_max_len: usize,
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self {
            max_future_days: 365,
            max_proposed_dates: 5,
            proposed_dates_horizon_days: 90,
            min_duration_minutes: 1,
            max_duration_minutes: 480,
            title_min_len: 3,
            title_max_len: 100,
        }
    }
}

impl SchedulingPolicy {
    /// Check a meeting start time as of `now`.
    ///
    /// Rejects past dates, dates beyond `max_future_days`, and windows that
    /// overlap an existing meeting. Back-to-back meetings do not conflict.
    pub fn check_meeting_date_at(
        &self,
        date: DateTime<Utc>,
        duration: u32,
        existing: &[Meeting],
        now: DateTime<Utc>,
    ) -> ValidationResult<()> {
        if date < now {
            return Err(reject("date", "Meeting date cannot be in the past"));
        }

        if date > saturating_add(now, Duration::days(i64::from(self.max_future_days))) {
            return Err(reject(
                "date",
                format!(
                    "Meeting date cannot be more than {} days in the future",
                    self.max_future_days
                ),
            ));
        }

        let end = saturating_add(date, minutes(duration));
        if let Some(conflict) = existing.iter().find(|m| m.overlaps(date, end)) {
            return Err(reject(
                "date",
                format!("Meeting conflicts with existing meeting: {}", conflict.title),
            ));
        }

        Ok(())
    }

    /// Check the dates of a meeting request as of `now`.
    pub fn check_proposed_dates_at(
        &self,
        dates: &[DateTime<Utc>],
        now: DateTime<Utc>,
    ) -> ValidationResult<()> {
        if dates.is_empty() {
            return Err(reject(
                "proposed_dates",
                "At least one proposed date is required",
            ));
        }

        if dates.len() > self.max_proposed_dates {
            return Err(reject(
                "proposed_dates",
                format!(
                    "Maximum {} proposed dates allowed",
                    self.max_proposed_dates
                ),
            ));
        }

        let horizon = saturating_add(
            now,
            Duration::days(i64::from(self.proposed_dates_horizon_days)),
        );
        for date in dates {
            if *date < now {
                return Err(reject(
                    "proposed_dates",
                    "Proposed dates cannot be in the past",
                ));
            }
            if *date > horizon {
                return Err(reject(
                    "proposed_dates",
                    format!(
                        "Proposed dates cannot be more than {} days in the future",
                        self.proposed_dates_horizon_days
                    ),
                ));
            }
        }

        Ok(())
    }

    /// Trimmed title length must lie within the configured bounds.
    pub fn check_title(&self, title: &str) -> ValidationResult<()> {
        let len = title.trim().chars().count();
        if len < self.title_min_len || len > self.title_max_len {
            return Err(reject(
                "title",
                format!(
                    "Meeting title must be between {} and {} characters",
                    self.title_min_len, self.title_max_len
                ),
            ));
        }
        Ok(())
    }

    /// Duration in minutes must lie within the configured bounds.
    pub fn check_duration(&self, duration: u32) -> ValidationResult<()> {
        if duration < self.min_duration_minutes || duration > self.max_duration_minutes {
            return Err(reject(
                "duration",
                format!(
                    "Meeting duration must be between {} and {} minutes",
                    self.min_duration_minutes, self.max_duration_minutes
                ),
            ));
        }
        Ok(())
    }
}

/// Validate a meeting start time against the current time and the
/// caller's existing meetings.
pub fn validate_meeting_date(
    date: DateTime<Utc>,
    duration: u32,
    existing_meetings: &[Meeting],
) -> ValidationResult<()> {
    SchedulingPolicy::default().check_meeting_date_at(date, duration, existing_meetings, Utc::now())
}

/// Validate the dates proposed in a meeting request.
pub fn validate_proposed_dates(dates: &[DateTime<Utc>]) -> ValidationResult<()> {
    SchedulingPolicy::default().check_proposed_dates_at(dates, Utc::now())
}

/// Validate a meeting title against the default bounds.
pub fn validate_meeting_title(title: &str) -> ValidationResult<()> {
    SchedulingPolicy::default().check_title(title)
}

/// Validate a meeting duration against the default bounds.
pub fn validate_meeting_duration(duration: u32) -> ValidationResult<()> {
    SchedulingPolicy::default().check_duration(duration)
}

/// A meeting needs at least one attendee, each listed once.
pub fn validate_attendees(employee_ids: &[i64]) -> ValidationResult<()> {
    if employee_ids.is_empty() {
        return Err(reject(
            "employee_ids",
            "At least one employee must be invited",
        ));
    }

    let mut seen = HashSet::with_capacity(employee_ids.len());
    if let Some(dup) = employee_ids.iter().find(|id| !seen.insert(**id)) {
        return Err(reject(
            "employee_ids",
            format!("Employee {dup} is listed more than once"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 3, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_meeting_window() {
        let m = Meeting::new(now(), 45, "Standup");
        assert_eq!(m.end(), now() + Duration::minutes(45));
        assert!(m.overlaps(now() + Duration::minutes(44), now() + Duration::hours(2)));
        assert!(!m.overlaps(now() + Duration::minutes(45), now() + Duration::hours(2)));
        assert!(!m.overlaps(now() - Duration::minutes(30), now()));
    }

    #[test]
    fn test_date_at_now_is_accepted() {
        let policy = SchedulingPolicy::default();
        assert!(policy.check_meeting_date_at(now(), 30, &[], now()).is_ok());
    }

    #[test]
    fn test_horizon_is_inclusive() {
        let policy = SchedulingPolicy::default();
        let edge = now() + Duration::days(365);
        assert!(policy.check_meeting_date_at(edge, 30, &[], now()).is_ok());
        assert!(policy
            .check_meeting_date_at(edge + Duration::seconds(1), 30, &[], now())
            .is_err());
    }

    #[test]
    fn test_conflict_names_meeting() {
        let policy = SchedulingPolicy::default();
        let existing = vec![Meeting::new(now() + Duration::hours(2), 60, "Budget review")];

        let err = policy
            .check_meeting_date_at(now() + Duration::minutes(90), 60, &existing, now())
            .unwrap_err();
        assert!(err.message().contains("Budget review"));
    }

    #[test]
    fn test_zero_length_meeting_inside_window() {
        let policy = SchedulingPolicy::default();
        let existing = vec![Meeting::new(now() + Duration::hours(2), 60, "Review")];

        // An empty window strictly inside an existing meeting still intersects it
        let inside = now() + Duration::minutes(150);
        assert!(policy.check_meeting_date_at(inside, 0, &existing, now()).is_err());
    }

    #[test]
    fn test_proposed_dates_horizon() {
        let policy = SchedulingPolicy::default();
        let ok = [now() + Duration::days(90)];
        let late = [now() + Duration::days(91)];
        assert!(policy.check_proposed_dates_at(&ok, now()).is_ok());
        assert!(policy.check_proposed_dates_at(&late, now()).is_err());
    }

    #[test]
    fn test_meeting_ending_past_calendar_limit() {
        let far = Meeting::new(DateTime::<Utc>::MAX_UTC - Duration::minutes(1), u32::MAX, "Far future");
        assert_eq!(far.end(), DateTime::<Utc>::MAX_UTC);

        let policy = SchedulingPolicy::default();
        assert!(policy.check_meeting_date_at(now(), 30, &[far.clone()], now()).is_ok());
        assert!(far.overlaps(DateTime::<Utc>::MAX_UTC - Duration::seconds(1), DateTime::<Utc>::MAX_UTC));
    }

    #[test]
    fn test_date_checks_near_calendar_limit() {
        let policy = SchedulingPolicy::default();
        let late = DateTime::<Utc>::MAX_UTC - Duration::days(1);

        // Horizon saturates instead of overflowing
        assert!(policy.check_meeting_date_at(late, u32::MAX, &[], late).is_ok());
        assert!(policy.check_proposed_dates_at(&[late], late).is_ok());
    }

    #[test]
    fn test_title_bounds() {
        assert!(validate_meeting_title("1:1").is_ok());
        assert!(validate_meeting_title("  ab  ").is_err());
        assert!(validate_meeting_title(&"t".repeat(100)).is_ok());
        assert!(validate_meeting_title(&"t".repeat(101)).is_err());
    }

    #[test]
    fn test_duration_bounds() {
        assert!(validate_meeting_duration(0).is_err());
        assert!(validate_meeting_duration(1).is_ok());
        assert!(validate_meeting_duration(480).is_ok());
        assert!(validate_meeting_duration(481).is_err());
    }

    #[test]
    fn test_attendees() {
        assert!(validate_attendees(&[]).is_err());
        assert!(validate_attendees(&[1, 2, 3]).is_ok());

        let err = validate_attendees(&[4, 7, 4]).unwrap_err();
        assert!(err.message().contains('4'));
    }
}
