//! Error Types
//!
//! Errors raised by the auth flows and the session store.

use thiserror::Error;

use crate::notice::{FlowKind, Notice};

/// Common result type for flow operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Failure of a login or registration attempt.
///
/// Every variant is terminal for the attempt only; the user can resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Mobile/password did not match any account
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Anything that went wrong during the asynchronous step
    #[error("simulated failure: {0}")]
    SimulatedFailure(String),
    /// The owning form went away while the attempt was in flight
    #[error("attempt aborted")]
    Aborted,
}

impl AuthError {
    /// Notification to show for this error, `None` when nothing should be shown
    pub fn notice(&self, flow: FlowKind) -> Option<Notice> {
        match (self, flow) {
            (AuthError::InvalidCredentials, _) => {
                Some(Notice::error("Invalid credentials. Please try again."))
            }
            (AuthError::SimulatedFailure(_), FlowKind::Login) => {
                Some(Notice::error("Login failed. Please try again."))
            }
            (AuthError::SimulatedFailure(_), FlowKind::Register) => {
                Some(Notice::error("Registration failed. Please try again."))
            }
            (AuthError::Aborted, _) => None,
        }
    }
}

/// Session persistence errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("malformed session record: {0}")]
    Malformed(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::SimulatedFailure(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Malformed(err.to_string())
    }
}

/// Form input rejected before submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Mobile number must be exactly 10 digits")]
    InvalidMobile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    #[test]
    fn test_store_error_becomes_simulated_failure() {
        let err: AuthError = StoreError::Unavailable("no window".into()).into();
        assert_eq!(
            err,
            AuthError::SimulatedFailure("storage unavailable: no window".into())
        );
    }

    #[test]
    fn test_error_notices() {
        let invalid = AuthError::InvalidCredentials.notice(FlowKind::Login).unwrap();
        assert_eq!(invalid.level, NoticeLevel::Error);
        assert_eq!(invalid.message, "Invalid credentials. Please try again.");

        let failed = AuthError::SimulatedFailure("x".into())
            .notice(FlowKind::Register)
            .unwrap();
        assert_eq!(failed.message, "Registration failed. Please try again.");

        assert!(AuthError::Aborted.notice(FlowKind::Login).is_none());
    }
}
