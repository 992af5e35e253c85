//! Persisted booking status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status stored on a booking row.
///
/// The state machine is `Waiting -> {Approved, Rejected}`; both outcomes
/// are terminal. `Cancelled` exists in the schema but no exposed operation
/// reaches it. This type is deliberately distinct from
/// [`super::BookingFilter`]: a query filter is never persisted and a
/// persisted status is never accepted where a filter is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Created by the booker, awaiting the owner's decision.
    Waiting,
    /// Confirmed by the item owner. Terminal.
    Approved,
    /// Declined by the item owner. Terminal.
    Rejected,
    /// Withdrawn by the booker. Unreachable through the exposed operations.
    Cancelled,
}

impl BookingStatus {
    /// Whether no further transition is defined from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Return the status as its canonical uppercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = lendhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(Self::Waiting),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(lendhub_core::AppError::validation(format!(
                "Invalid booking status: '{s}'. Expected one of: WAITING, APPROVED, REJECTED, CANCELLED"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(!BookingStatus::Waiting.is_terminal());
        assert!(BookingStatus::Approved.is_terminal());
        assert!(BookingStatus::Rejected.is_terminal());
        assert!(!BookingStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("WAITING".parse::<BookingStatus>().unwrap(), BookingStatus::Waiting);
        assert!("waiting".parse::<BookingStatus>().is_err());
    }
}
