//! meetdesk - Input validation and scheduling rules for a meeting-scheduling backend
//!
//! Every validator returns `Ok(())` on success and a [`ValidationError`]
//! carrying a user-facing message on failure. Request handlers are expected
//! to turn that error into a 400 response.

pub mod availability;
pub mod config;
pub mod contact;
pub mod error;
pub mod meeting;
pub mod password;
pub mod status;
pub mod validator;

pub use availability::{Availability, AvailabilityPolicy, BusySlot, TimeSlot};
pub use config::{PhonePolicy, ValidationConfig};
pub use contact::{validate_email, validate_person_name, validate_phone, validate_phone_in_region};
pub use error::{ConfigError, CredentialError, ValidationError, ValidationResult};
pub use meeting::{
    validate_attendees, validate_meeting_date, validate_meeting_duration, validate_meeting_title,
    validate_proposed_dates, Meeting, SchedulingPolicy,
};
pub use password::{hash_password, validate_password, verify_password, PasswordPolicy};
pub use status::{
    validate_manager_status_transition, validate_meeting_status_transition, validate_status_update,
    MeetingStatus,
};
pub use validator::Validator;
