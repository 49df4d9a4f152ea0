//! # Meeting and Manager Status
//!
//! Fixed state-transition tables for meeting status updates and manager
//! approval changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{reject, ValidationError, ValidationResult};

/// Lifecycle state of a meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Pending => "pending",
            MeetingStatus::Accepted => "accepted",
            MeetingStatus::Rejected => "rejected",
            MeetingStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses reachable from this one. Rejected and cancelled are final.
    pub fn allowed_transitions(&self) -> &'static [MeetingStatus] {
        match self {
            MeetingStatus::Pending => &[
                MeetingStatus::Accepted,
                MeetingStatus::Rejected,
                MeetingStatus::Cancelled,
            ],
            MeetingStatus::Accepted => &[MeetingStatus::Cancelled],
            MeetingStatus::Rejected | MeetingStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: MeetingStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_final(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MeetingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MeetingStatus::Pending),
            "accepted" => Ok(MeetingStatus::Accepted),
            "rejected" => Ok(MeetingStatus::Rejected),
            "cancelled" => Ok(MeetingStatus::Cancelled),
            other => Err(ValidationError::new(
                "status",
                format!("Invalid status: {other}"),
            )),
        }
    }
}

/// Validate a meeting status change.
///
/// Unknown statuses have no allowed transitions, so any change involving
/// one is rejected.
pub fn validate_meeting_status_transition(current: &str, new: &str) -> ValidationResult<()> {
    let allowed = current
        .parse::<MeetingStatus>()
        .ok()
        .and_then(|from| new.parse::<MeetingStatus>().ok().map(|to| from.can_transition_to(to)))
        .unwrap_or(false);

    if !allowed {
        return Err(reject(
            "status",
            format!("Invalid status transition from {current} to {new}"),
        ));
    }

    Ok(())
}

/// Validate a change to a manager's approval state.
///
/// An approved manager cannot be moved back to rejected.
pub fn validate_manager_status_transition(
    current_approved: bool,
    new_status: &str,
) -> ValidationResult<()> {
    if current_approved && new_status == "rejected" {
        return Err(reject(
            "status",
            "Cannot reject an already approved manager",
        ));
    }
    Ok(())
}

/// A status-update request may only move a meeting out of `pending`.
pub fn validate_status_update(status: &str) -> ValidationResult<MeetingStatus> {
    let status = status
        .parse::<MeetingStatus>()
        .map_err(|e| reject(e.field(), e.message()))?;

    if status == MeetingStatus::Pending {
        return Err(reject("status", "Invalid status: pending"));
    }

    Ok(status)
}
