//! # Validator
//!
//! Bundles a [`ValidationConfig`] with every check so request handlers can
//! hold one value instead of threading policies around.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};

use crate::availability::{availability, Availability};
use crate::config::ValidationConfig;
use crate::contact;
use crate::error::{ConfigResult, ValidationResult};
use crate::meeting::{validate_attendees, Meeting};
use crate::status::{self, MeetingStatus};

/// Configured entry point for all validators
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a validator with the given policies
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Build a validator from a JSON config file
    pub fn from_config_file(path: &Path) -> ConfigResult<Self> {
        ValidationConfig::load(path).map(Self::new)
    }

    /// Policies in effect
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Email syntax check
    pub fn validate_email(&self, email: &str) -> ValidationResult<()> {
        contact::validate_email(email)
    }

    /// Password check against the configured policy
    pub fn validate_password(&self, password: &str) -> ValidationResult<()> {
        self.config.password.validate(password)
    }

    /// Uses the configured default region, if any
    pub fn validate_phone(&self, phone: &str) -> ValidationResult<()> {
        match &self.config.phone.default_region {
            Some(region) => contact::validate_phone_in_region(phone, region),
            None => contact::validate_phone(phone),
        }
    }

    /// Signup or employee name, 2 to 50 characters
    pub fn validate_name(&self, name: &str) -> ValidationResult<()> {
        contact::validate_person_name(name, contact::NAME_LEN)
    }

    /// Manager profile name, 2 to 100 characters
    pub fn validate_profile_name(&self, name: &str) -> ValidationResult<()> {
        contact::validate_person_name(name, contact::PROFILE_NAME_LEN)
    }

    /// Meeting start time as of now, against the configured horizon
    pub fn validate_meeting_date(
        &self,
        date: DateTime<Utc>,
        duration: u32,
        existing_meetings: &[Meeting],
    ) -> ValidationResult<()> {
        self.config
            .scheduling
            .check_meeting_date_at(date, duration, existing_meetings, Utc::now())
    }

    /// Proposed dates of a meeting request, as of now
    pub fn validate_proposed_dates(&self, dates: &[DateTime<Utc>]) -> ValidationResult<()> {
        self.config
            .scheduling
            .check_proposed_dates_at(dates, Utc::now())
    }

    /// Title length within the configured bounds
    pub fn validate_meeting_title(&self, title: &str) -> ValidationResult<()> {
        self.config.scheduling.check_title(title)
    }

    /// Duration within the configured bounds
    pub fn validate_meeting_duration(&self, duration: u32) -> ValidationResult<()> {
        self.config.scheduling.check_duration(duration)
    }

    /// Meeting status change per the fixed transition table
    pub fn validate_meeting_status_transition(
        &self,
        current: &str,
        new: &str,
    ) -> ValidationResult<()> {
        status::validate_meeting_status_transition(current, new)
    }

    /// Approved managers cannot be rejected
    pub fn validate_manager_status_transition(
        &self,
        current_approved: bool,
        new_status: &str,
    ) -> ValidationResult<()> {
        status::validate_manager_status_transition(current_approved, new_status)
    }

    /// Target status of an update request; returns the parsed status
    pub fn validate_status_update(&self, status: &str) -> ValidationResult<MeetingStatus> {
        status::validate_status_update(status)
    }

    /// Check an employee's meeting request: title, duration, then dates.
    pub fn validate_meeting_request(
        &self,
        title: &str,
        duration: u32,
        proposed_dates: &[DateTime<Utc>],
    ) -> ValidationResult<()> {
        self.validate_meeting_request_at(title, duration, proposed_dates, Utc::now())
    }

    /// Same as [`Validator::validate_meeting_request`] with a fixed clock
    pub fn validate_meeting_request_at(
        &self,
        title: &str,
        duration: u32,
        proposed_dates: &[DateTime<Utc>],
        now: DateTime<Utc>,
    ) -> ValidationResult<()> {
        let policy = &self.config.scheduling;
        policy.check_title(title)?;
        policy.check_duration(duration)?;
        policy.check_proposed_dates_at(proposed_dates, now)
    }

    /// Check a manager-created meeting: title, duration, attendees, then
    /// the date against the manager's calendar.
    pub fn validate_meeting_create(
        &self,
        title: &str,
        duration: u32,
        date: DateTime<Utc>,
        employee_ids: &[i64],
        existing_meetings: &[Meeting],
    ) -> ValidationResult<()> {
        self.validate_meeting_create_at(
            title,
            duration,
            date,
            employee_ids,
            existing_meetings,
            Utc::now(),
        )
    }

    /// Same as [`Validator::validate_meeting_create`] with a fixed clock
    pub fn validate_meeting_create_at(
        &self,
        title: &str,
        duration: u32,
        date: DateTime<Utc>,
        employee_ids: &[i64],
        existing_meetings: &[Meeting],
        now: DateTime<Utc>,
    ) -> ValidationResult<()> {
        let policy = &self.config.scheduling;
        policy.check_title(title)?;
        policy.check_duration(duration)?;
        validate_attendees(employee_ids)?;
        policy.check_meeting_date_at(date, duration, existing_meetings, now)
    }

    /// Free slots on the configured working-hours grid
    pub fn availability(
        &self,
        first_day: NaiveDate,
        last_day: NaiveDate,
        meetings: &[Meeting],
    ) -> Availability {
        availability(first_day, last_day, meetings, &self.config.availability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhonePolicy;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 3, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
    }

    #[test]
    fn test_configured_password_policy() {
        let mut config = ValidationConfig::default();
        config.password.min_length = 10;
        let validator = Validator::new(config);

        assert!(validator.validate_password("Abcdef12").is_err());
        assert!(validator.validate_password("Abcdef1234").is_ok());
    }

    #[test]
    fn test_configured_phone_region() {
        let validator = Validator::new(ValidationConfig {
            phone: PhonePolicy {
                default_region: Some("US".to_string()),
            },
            ..Default::default()
        });
        assert!(validator.validate_phone("650 253 0000").is_ok());
        assert!(Validator::default().validate_phone("650 253 0000").is_err());
    }

    #[test]
    fn test_meeting_request_reports_first_failure() {
        let validator = Validator::default();

        let err = validator
            .validate_meeting_request_at("ok", 0, &[], now())
            .unwrap_err();
        assert_eq!(err.field(), "title");

        let err = validator
            .validate_meeting_request_at("Planning", 0, &[], now())
            .unwrap_err();
        assert_eq!(err.field(), "duration");

        let err = validator
            .validate_meeting_request_at("Planning", 30, &[], now())
            .unwrap_err();
        assert_eq!(err.field(), "proposed_dates");

        assert!(validator
            .validate_meeting_request_at("Planning", 30, &[now() + Duration::days(1)], now())
            .is_ok());
    }

    #[test]
    fn test_meeting_create() {
        let validator = Validator::default();
        let existing = vec![Meeting::new(now() + Duration::hours(1), 60, "Retro")];

        let err = validator
            .validate_meeting_create_at("Kickoff", 30, now() + Duration::hours(1), &[], &existing, now())
            .unwrap_err();
        assert_eq!(err.field(), "employee_ids");

        let err = validator
            .validate_meeting_create_at("Kickoff", 30, now() + Duration::hours(1), &[1], &existing, now())
            .unwrap_err();
        assert_eq!(err.field(), "date");

        assert!(validator
            .validate_meeting_create_at("Kickoff", 30, now() + Duration::hours(2), &[1, 2], &existing, now())
            .is_ok());
    }
}
